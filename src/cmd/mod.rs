use std::io::Write;

mod directives;
mod fmt;
mod locales;

const USAGE: &'static str = "\
Format datetimes with strftime style templates in many locales.

USAGE:
    lctime <command> ...

When no command is given, the current time is printed with `%c` in the
default locale.

COMMANDS:
    directives  List the supported formatting directives
    fmt         Format datetimes with a template
    locales     List the available locales
";

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    let Some(cmd) = crate::args::next_as_command(USAGE, p)? else {
        // Like `date`, print the current time.
        let instant = lctime::Instant::from(&*crate::NOW);
        let mut wtr = std::io::stdout().lock();
        writeln!(wtr, "{}", crate::LOCALE.strftime("%c", &instant))?;
        return Ok(());
    };
    match &*cmd {
        "directives" => directives::run(p),
        "fmt" => fmt::run(p),
        "locales" => locales::run(p),
        unk => anyhow::bail!("unrecognized command '{}'", unk),
    }
}
