use std::{
    fmt::{Debug, Display, Write},
    str::FromStr,
    sync::LazyLock,
};

use {
    anyhow::Context,
    lexopt::{Arg, Parser, ValueExt},
    regex::Regex,
};

pub mod flags;
pub mod positional;

/// Something that can claim command line arguments.
///
/// `configure` offers each argument to every target in turn. The first one
/// that returns `true` consumes it.
pub trait Configurable: Debug {
    fn configure(
        &mut self,
        p: &mut Parser,
        arg: &mut Arg,
    ) -> anyhow::Result<bool>;

    /// Docs for the flags and arguments claimed by this target.
    fn usage(&self) -> &[Usage] {
        &[]
    }
}

/// Parse all remaining arguments into the given targets.
///
/// `usage` is the help text of the command. Its `%args%` and `%flags%`
/// placeholders are filled in from the targets' `Usage` docs when `-h` or
/// `--help` is seen. The text between `%snip-start%` and `%snip-end%` only
/// appears in the `--help` output.
pub fn configure(
    p: &mut Parser,
    usage: &str,
    targets: &mut [&mut dyn Configurable],
) -> anyhow::Result<()> {
    loop {
        let Some(arg) = p.next()? else { return Ok(()) };
        match arg {
            Arg::Short('h') => return Err(help(usage, targets, false).into()),
            Arg::Long("help") => return Err(help(usage, targets, true).into()),
            Arg::Long("version") => return Err(Version.into()),
            _ => {}
        }
        // Targets need `p` mutably, so a long flag name can't keep
        // borrowing from it.
        let long;
        let mut arg = match arg {
            Arg::Long(name) => {
                long = name.to_string();
                Arg::Long(&long)
            }
            Arg::Short(c) => Arg::Short(c),
            Arg::Value(value) => Arg::Value(value),
        };
        let mut claimed = false;
        for t in targets.iter_mut() {
            if t.configure(p, &mut arg)? {
                claimed = true;
                break;
            }
        }
        if !claimed {
            return Err(arg.unexpected().into());
        }
    }
}

/// Render the help output of a command.
fn help(usage: &str, targets: &[&mut dyn Configurable], long: bool) -> Help {
    static SNIPPED: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?m)^\s*%snip-start%\p{any}*?%snip-end%\s*$").unwrap()
    });
    static SNIP_MARKER: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?m)^\s*%snip-(start|end)%\s*$").unwrap()
    });

    // Positional arguments keep the order their targets give them.
    let mut args = vec![];
    let mut flags = vec![Help::USAGE, Version::USAGE];
    for t in targets.iter() {
        for &u in t.usage() {
            if u.flag { flags.push(u) } else { args.push(u) }
        }
    }
    flags.sort_by_key(|u| {
        u.format.split_once(", ").map_or(u.format, |(_, long)| long)
    });

    let render: fn(&[Usage]) -> String =
        if long { Usage::long } else { Usage::short };
    let text = if long {
        SNIP_MARKER.replace_all(usage, "")
    } else {
        SNIPPED.replace_all(usage, "")
    };
    let text = text
        .replace("%args%", &render(&args))
        .replace("%flags%", &render(&flags));
    Help(text.trim().to_string())
}

/// Returns the name of the command to run, or `None` if there are no more
/// arguments.
///
/// `-h/--help` prints `usage` and `--version` prints the version.
pub fn next_as_command(
    usage: &str,
    p: &mut Parser,
) -> anyhow::Result<Option<String>> {
    let Some(arg) = p.next()? else { return Ok(None) };
    match arg {
        Arg::Value(cmd) => Ok(Some(cmd.string()?)),
        Arg::Short('h') | Arg::Long("help") => {
            Err(Help(usage.trim().to_string()).into())
        }
        Arg::Long("version") => Err(Version.into()),
        arg => Err(arg.unexpected().into()),
    }
}

/// Parses the next flag value into `T`. Errors name `flag_name`.
pub fn parse<T>(p: &mut Parser, flag_name: &'static str) -> anyhow::Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display + Debug + Send + Sync + 'static,
{
    let osv = p.value().context(flag_name)?;
    let Some(strv) = osv.to_str() else {
        let err = lexopt::Error::NonUnicodeValue(osv.into());
        return Err(anyhow::Error::from(err).context(flag_name));
    };
    strv.parse().map_err(|err| anyhow::Error::msg(err).context(flag_name))
}

/// The docs for one flag or positional argument.
#[derive(Clone, Copy, Debug)]
pub struct Usage {
    /// Flags are listed under OPTIONS, everything else under REQUIRED
    /// ARGUMENTS.
    pub flag: bool,
    /// How it's written, e.g., `-l, --locale <id>`.
    pub format: &'static str,
    /// One line for `-h`.
    pub short: &'static str,
    /// One or more paragraphs for `--help`.
    pub long: &'static str,
}

impl Usage {
    pub const fn flag(
        format: &'static str,
        short: &'static str,
        long: &'static str,
    ) -> Usage {
        Usage { flag: true, format, short, long }
    }

    pub const fn arg(
        format: &'static str,
        short: &'static str,
        long: &'static str,
    ) -> Usage {
        Usage { flag: false, format, short, long }
    }

    /// A two column table of formats and short descriptions.
    pub fn short(usages: &[Usage]) -> String {
        let width = usages.iter().map(|u| u.format.len()).max().unwrap_or(0);
        let mut out = String::new();
        for u in usages.iter() {
            writeln!(out, "    {:width$}  {}", u.format, u.short).unwrap();
        }
        out
    }

    /// Each format followed by its long description, wrapped at 79 columns
    /// and indented below it.
    pub fn long(usages: &[Usage]) -> String {
        let wrap = textwrap::Options::new(79)
            .initial_indent("        ")
            .subsequent_indent("        ");
        let mut out = String::new();
        for (i, u) in usages.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            writeln!(out, "    {}", u.format).unwrap();
            for (j, paragraph) in u.long.trim().split("\n\n").enumerate() {
                if j > 0 {
                    out.push('\n');
                }
                let flat = paragraph.replace('\n', " ");
                for line in textwrap::wrap(&flat, &wrap) {
                    writeln!(out, "{line}").unwrap();
                }
            }
        }
        out
    }
}

/// Help output, carried as an error so that `main` can print it to stdout
/// and exit successfully.
#[derive(Debug)]
pub struct Help(String);

impl Help {
    const USAGE: Usage = Usage::flag(
        "-h/--help",
        "Print help output.",
        r#"
Print the help output for lctime or one of its commands.

-h prints a condensed version with one line per flag. --help prints the full
documentation, including extra examples.
"#,
    );
}

impl std::fmt::Display for Help {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for Help {}

/// The `--version` output. Like `Help`, `main` prints it to stdout.
#[derive(Debug)]
pub struct Version;

impl Version {
    const USAGE: Usage = Usage::flag(
        "--version",
        "Print the version of lctime.",
        r#"
Print the version of lctime and how many locales are embedded into this build.
"#,
    );
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let semver = option_env!("CARGO_PKG_VERSION").unwrap_or("N/A");
        let locales = lctime::available_locales().len();
        write!(f, "lctime {semver} ({locales} locales)")
    }
}

impl std::error::Error for Version {}
