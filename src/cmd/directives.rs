use std::io::Write;

use crate::{args, style::Theme};

const USAGE: &'static str = r#"
List every supported formatting directive along with a short description.

USAGE:
    lctime directives

TIP:
    use -h for short docs and --help for long docs

OPTIONS:
%flags%
"#;

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    args::configure(p, USAGE, &mut [])?;

    let theme = Theme::stdout();
    let mut wtr = std::io::stdout().lock();
    for directive in lctime::directives() {
        let code = format!("%{}", directive.code());
        writeln!(wtr, "{}  {}", theme.code(code), directive.about())?;
    }
    Ok(())
}
