use std::io::Write;

use crate::{args, style::Theme};

const USAGE: &'static str = r#"
List the identifiers of all available locales, one per line.

The locale that `lctime fmt` uses by default is highlighted when stdout is a
terminal.

USAGE:
    lctime locales

TIP:
    use -h for short docs and --help for long docs

EXAMPLES:
    Print the date in every available locale:

        $ lctime locales | xargs -I{} lctime fmt -l {} -f '{}: %x' now

OPTIONS:
%flags%
"#;

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    args::configure(p, USAGE, &mut [])?;

    let theme = Theme::stdout();
    let default = crate::LOCALE.id();
    let mut wtr = std::io::stdout().lock();
    for id in lctime::available_locales() {
        if id == default {
            writeln!(wtr, "{}", theme.highlight(id))?;
        } else {
            writeln!(wtr, "{id}")?;
        }
    }
    Ok(())
}
