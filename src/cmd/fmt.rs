use std::io::Write;

use anyhow::Context;

use crate::{
    args::{self, Usage, flags, positional},
    datetime::DateTime,
};

const USAGE: &'static str = r#"
Format datetimes with a strftime style template.

This accepts one or more datetimes as positional arguments. When no positional
arguments are given, then line delimited datetimes are read from stdin.

USAGE:
    lctime fmt [-f <template>] [-l <locale>] <datetime>...
    lctime fmt [-f <template>] [-l <locale>] < line delimited <datetime>

TIP:
    use -h for short docs and --help for long docs

EXAMPLES:
    Print the current time in the preferred format of the default locale:

        $ lctime fmt now

    Print a date with the month written out in French:

        $ lctime fmt -l fr_FR -f '%A %d %B %Y' 2025-03-15
        samedi 15 mars 2025

    %snip-start%

    Print the ISO 8601 week date of each datetime on stdin:

        $ printf '2021-01-03\n2024-12-30\n' | lctime fmt -f '%G-W%V-%u'
        2020-W53-7
        2025-W01-1

    Format with a locale defined in a JSON file of your own:

        $ lctime fmt -L ./tlh.json -f '%c' 2025-03-15T10:23:00Z

    %snip-end%
REQUIRED ARGUMENTS:
%args%
OPTIONS:
%flags%
"#;

pub fn run(p: &mut lexopt::Parser) -> anyhow::Result<()> {
    let mut config = Config::default();
    let mut datetimes = positional::DateTimes::default();
    args::configure(p, USAGE, &mut [&mut config, &mut datetimes])?;

    let locale = config.locale.get();
    log::debug!(
        "formatting with template `{}` in locale `{}`",
        config.template.as_str(),
        locale.id(),
    );
    let mut buf = String::new();
    let mut wtr = std::io::stdout().lock();
    datetimes.try_map(|datetime| {
        buf.clear();
        lctime::format_to(
            config.template.as_str(),
            &datetime.to_instant(),
            &locale,
            &mut buf,
        );
        writeln!(wtr, "{buf}")?;
        Ok(true)
    })?;
    Ok(())
}

#[derive(Debug, Default)]
struct Config {
    template: flags::Template,
    locale: flags::LocaleChoice,
}

impl args::Configurable for Config {
    fn configure(
        &mut self,
        p: &mut lexopt::Parser,
        arg: &mut lexopt::Arg,
    ) -> anyhow::Result<bool> {
        match *arg {
            lexopt::Arg::Short('f') | lexopt::Arg::Long("format") => {
                self.template = args::parse(p, "-f/--format")?;
            }
            lexopt::Arg::Short('l') | lexopt::Arg::Long("locale") => {
                let id: String = args::parse(p, "-l/--locale")?;
                self.locale = flags::LocaleChoice::named(&id)
                    .map_err(|err| err.context("-l/--locale"))?;
            }
            lexopt::Arg::Short('L') | lexopt::Arg::Long("locale-file") => {
                let path = p.value().context("-L/--locale-file")?;
                self.locale = flags::LocaleChoice::file(path.into())
                    .map_err(|err| err.context("-L/--locale-file"))?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn usage(&self) -> &[Usage] {
        &[
            DateTime::ARG_OR_STDIN,
            flags::Template::USAGE,
            flags::LocaleChoice::USAGE_NAMED,
            flags::LocaleChoice::USAGE_FILE,
        ]
    }
}
