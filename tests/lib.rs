use std::{ffi::OsStr, path::Path, sync::LazyLock};

use jiff::{Zoned, civil};


static NOW: LazyLock<Zoned> = LazyLock::new(|| {
    civil::date(2024, 7, 20)
        .at(16, 30, 55, 0)
        .in_tz("America/New_York")
        .unwrap()
});

/// A temporary directory to run `lctime` in, for tests that need files.
#[derive(Debug)]
struct TempDir(tempfile::TempDir);

impl TempDir {
    fn new() -> TempDir {
        TempDir(tempfile::tempdir().unwrap())
    }

    /// Create a new `lctime` command whose CWD is this directory and the
    /// given arguments appended to it.
    fn lctime<T: AsRef<OsStr>>(
        &self,
        args: impl IntoIterator<Item = T>,
    ) -> crate::command::Command {
        lctime(args).current_dir(self.0.path())
    }

    /// Create a new file in this temporary directory with the given relative
    /// path and contents.
    fn create(
        &self,
        relative_path: impl AsRef<Path>,
        contents: impl AsRef<[u8]>,
    ) {
        let path = self.0.path().join(relative_path.as_ref());
        std::fs::write(&path, contents).unwrap();
    }
}

/// Return a command for the `lctime` binary and no arguments.
///
/// The time zone, the current time and the default locale are all pinned,
/// so that output doesn't depend on the machine running the tests. Error
/// output doesn't depend on whether backtraces are enabled either.
fn lctime_bare() -> crate::command::Command {
    crate::command::bin("lctime")
        .env("TZ", "America/New_York")
        .env("LCTIME_NOW", NOW.to_string())
        .env("LCTIME_LOCALE", "POSIX")
        .env_remove("LCTIME_LOG")
        .env_remove("RUST_BACKTRACE")
}

/// Return a command for the `lctime` binary with the given arguments
/// appended to it.
fn lctime<T: AsRef<OsStr>>(
    args: impl IntoIterator<Item = T>,
) -> crate::command::Command {
    lctime_bare().args(args)
}

/// Test that calling `lctime` with no arguments prints the current time.
#[test]
fn no_args() {
    crate::command::assert_cmd_snapshot!(
        lctime_bare(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Sat Jul 20 16:30:55 2024

    ----- stderr -----
    ",
    );

    crate::command::assert_cmd_snapshot!(
        lctime_bare().env("LCTIME_LOCALE", "de_DE.UTF-8"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Sa 20 Jul 2024 16:30:55 EDT

    ----- stderr -----
    ",
    );

    crate::command::assert_cmd_snapshot!(
        lctime_bare()
            .env("TZ", "Europe/Paris")
            .env("LCTIME_LOCALE", "fr_FR"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    sam. 20 juil. 2024 22:30:55 CEST

    ----- stderr -----
    ",
    );
}

/// Without `LCTIME_LOCALE`, the usual POSIX locale variables are consulted,
/// with `LC_TIME` taking priority over `LC_ALL` over `LANG`.
#[test]
fn no_args_standard_locale_env() {
    let bare = || {
        lctime_bare()
            .env_remove("LCTIME_LOCALE")
            .env_remove("LC_TIME")
            .env_remove("LC_ALL")
            .env_remove("LANG")
    };

    crate::command::assert_cmd_snapshot!(
        bare(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Sat Jul 20 16:30:55 2024

    ----- stderr -----
    ",
    );

    crate::command::assert_cmd_snapshot!(
        bare().env("LANG", "en_US.UTF-8"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Sat 20 Jul 2024 04:30:55 PM EDT

    ----- stderr -----
    ",
    );

    crate::command::assert_cmd_snapshot!(
        bare().env("LANG", "en_US.UTF-8").env("LC_ALL", "es_MX.UTF-8"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    sáb 20 jul 2024 16:30:55 EDT

    ----- stderr -----
    ",
    );

    crate::command::assert_cmd_snapshot!(
        bare()
            .env("LANG", "en_US.UTF-8")
            .env("LC_ALL", "es_MX.UTF-8")
            .env("LC_TIME", "da_DK.UTF-8"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    lør 20 jul 2024 16:30:55 EDT

    ----- stderr -----
    ",
    );

    // An unavailable locale falls back to POSIX instead of failing.
    crate::command::assert_cmd_snapshot!(
        bare().env("LC_TIME", "tlh_KX.UTF-8"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Sat Jul 20 16:30:55 2024

    ----- stderr -----
    ",
    );
}

/// An `LCTIME_LOCALE` that can't be resolved doesn't stop `lctime` from
/// running. The locale from the environment is used instead.
#[test]
fn bad_lctime_locale() {
    crate::command::assert_cmd_snapshot!(
        lctime_bare()
            .env("LCTIME_LOCALE", "xx_YY")
            .env_remove("LC_TIME")
            .env_remove("LC_ALL")
            .env("LANG", "pt_BR.UTF-8"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Sáb 20 Jul 2024 16:30:55 EDT

    ----- stderr -----
    ",
    );
}

#[test]
fn version() {
    crate::command::assert_cmd_snapshot!(
        lctime(["--version"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    lctime 0.1.0 (9 locales)

    ----- stderr -----
    ",
    );
}

#[test]
fn unknown_command() {
    crate::command::assert_cmd_snapshot!(
        lctime(["frobnicate"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    unrecognized command 'frobnicate'
    ",
    );
}

#[test]
fn bad_log_level() {
    crate::command::assert_cmd_snapshot!(
        lctime_bare().env("LCTIME_LOG", "loud"),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    unrecognized log level 'loud'
    ",
    );
}
