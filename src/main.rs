use std::{
    env,
    io::Write,
    process::ExitCode,
    sync::{Arc, LazyLock},
};

use {
    anyhow::Context,
    jiff::{Timestamp, Zoned, tz::TimeZone},
    lctime::Locale,
};

mod args;
mod cmd;
mod datetime;
mod logger;
mod style;

static TZ: LazyLock<TimeZone> = LazyLock::new(|| TimeZone::system());

static NOW: LazyLock<Zoned> = LazyLock::new(|| {
    let ts = match read_env_lctime_now() {
        Ok(Some(ts)) => {
            log::trace!(
                "setting current time to `{ts}` from `LCTIME_NOW` \
                 environment variable",
            );
            ts
        }
        Ok(None) => {
            let now = Timestamp::now();
            log::trace!(
                "`LCTIME_NOW` environment variable not set, using \
                 current time `{now}`",
            );
            now
        }
        Err(err) => {
            let now = Timestamp::now();
            log::warn!(
                "reading `LCTIME_NOW` failed, using current time \
                 `{now}`: {err:#}",
            );
            now
        }
    };
    ts.to_zoned(TZ.clone())
});

static LOCALE: LazyLock<Arc<Locale>> = LazyLock::new(|| {
    match read_env_lctime_locale() {
        Ok(Some(locale)) => {
            log::trace!(
                "setting locale to `{}` from `LCTIME_LOCALE` \
                 environment variable",
                locale.id(),
            );
            locale
        }
        Ok(None) => {
            let locale = lctime::default_locale();
            log::trace!(
                "`LCTIME_LOCALE` environment variable not set, using \
                 `{}` from the standard locale environment",
                locale.id(),
            );
            locale
        }
        Err(err) => {
            let locale = lctime::default_locale();
            log::warn!(
                "reading `LCTIME_LOCALE` failed, using locale `{}`: {err:#}",
                locale.id(),
            );
            locale
        }
    }
});

/// What day is it? Depends on who you ask.
fn main() -> ExitCode {
    let err = match run() {
        Ok(code) => return code,
        Err(err) => err,
    };
    if let Some(help) = err.root_cause().downcast_ref::<args::Help>() {
        writeln!(&mut std::io::stdout(), "{help}").unwrap();
        return ExitCode::SUCCESS;
    }
    if let Some(version) = err.root_cause().downcast_ref::<args::Version>() {
        writeln!(&mut std::io::stdout(), "{version}").unwrap();
        return ExitCode::SUCCESS;
    }
    // Look for a broken pipe error. In this case, we generally want
    // to exit "gracefully" with a success exit code. This matches
    // existing Unix convention. We need to handle this explicitly
    // since the Rust runtime doesn't ask for PIPE signals, and thus
    // we get an I/O error instead. Traditional C Unix applications
    // quit by getting a PIPE signal that they don't handle, and thus
    // the unhandled signal causes the process to unceremoniously
    // terminate.
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<std::io::Error>() {
            if err.kind() == std::io::ErrorKind::BrokenPipe {
                return ExitCode::from(0);
            }
        }
    }
    if std::env::var("RUST_BACKTRACE").map_or(false, |v| v == "1")
        && std::env::var("RUST_LIB_BACKTRACE").map_or(true, |v| v == "1")
    {
        writeln!(&mut std::io::stderr(), "{:?}", err).unwrap();
    } else {
        writeln!(&mut std::io::stderr(), "{:#}", err).unwrap();
    }
    ExitCode::from(1)
}

fn run() -> anyhow::Result<ExitCode> {
    let rustlog = env::var("LCTIME_LOG").unwrap_or_else(|_| String::new());
    let level = match &*rustlog {
        "" | "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        unk => anyhow::bail!("unrecognized log level '{}'", unk),
    };
    log::set_max_level(level);
    // Initialize the logger before touching `TZ`, since discovering the
    // system time zone emits log messages. Those early messages are
    // timestamped in UTC. Everything after is in local time.
    let logger = logger::Logger::init()?;
    logger.set_time_zone(TZ.clone());
    cmd::run(&mut lexopt::Parser::from_env())?;
    Ok(ExitCode::SUCCESS)
}

fn read_env_lctime_now() -> anyhow::Result<Option<Timestamp>> {
    let Some(val) = std::env::var_os("LCTIME_NOW") else { return Ok(None) };
    let Some(val) = val.to_str() else {
        anyhow::bail!(
            "`LCTIME_NOW` environment variable is not valid UTF-8: {val:?}"
        )
    };
    if let Ok(zdt) = val.parse::<Zoned>() {
        return Ok(Some(zdt.timestamp()));
    }
    val.parse::<Timestamp>()
        .context(
            "`LCTIME_NOW` environment variable is not a valid \
             RFC 9557 or RFC 3339 timestamp",
        )
        .map(Some)
}

fn read_env_lctime_locale() -> anyhow::Result<Option<Arc<Locale>>> {
    let Some(val) = std::env::var_os("LCTIME_LOCALE") else {
        return Ok(None);
    };
    let Some(val) = val.to_str() else {
        anyhow::bail!(
            "`LCTIME_LOCALE` environment variable is not valid UTF-8: {val:?}"
        )
    };
    let locale = lctime::resolve_locale(val)
        .context("failed to resolve `LCTIME_LOCALE` environment variable")?;
    Ok(Some(locale))
}
