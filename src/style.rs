use std::{
    fmt::Display,
    io::IsTerminal,
    sync::{Arc, LazyLock},
};

use anstyle::{AnsiColor, Style};

/// A theme that indicates how output should be styled.
///
/// Themes are only "on" when the corresponding stream is a tty and colors
/// haven't been disabled via `NO_COLOR` or `TERM=dumb`. Otherwise every
/// getter returns data that renders without any escape sequences.
///
/// Formatted datetimes are never styled. Only the decorations printed
/// around them by `lctime locales`, `lctime directives` and the logger are.
#[derive(Clone, Debug)]
pub struct Theme {
    inner: Option<Arc<ThemeInner>>,
}

impl Theme {
    /// Returns a theme for stdout.
    pub fn stdout() -> &'static Theme {
        static THEME: LazyLock<Theme> =
            LazyLock::new(|| Theme::detect(tty_stdout()));
        &*THEME
    }

    /// Returns a theme for stderr.
    pub fn stderr() -> &'static Theme {
        static THEME: LazyLock<Theme> =
            LazyLock::new(|| Theme::detect(tty_stderr()));
        &*THEME
    }

    fn detect(tty: bool) -> Theme {
        if !tty || !can_use_colors() {
            return Theme { inner: None };
        }
        Theme { inner: Some(Arc::new(ThemeInner::default())) }
    }

    /// Used for log timestamps and the identifier of the default locale.
    pub fn highlight<T: Display>(&self, data: T) -> Styled<'_, T> {
        self.styled(data, |inner| &inner.highlight)
    }

    /// Used for directive codes like `%Y`.
    pub fn code<T: Display>(&self, data: T) -> Styled<'_, T> {
        self.styled(data, |inner| &inner.code)
    }

    /// Used for log levels. Only warnings and errors get a color.
    pub fn level(&self, level: log::Level) -> Styled<'_, log::Level> {
        match level {
            log::Level::Error => self.styled(level, |inner| &inner.error),
            log::Level::Warn => self.styled(level, |inner| &inner.warn),
            _ => Styled { data: level, style: None },
        }
    }

    fn styled<T: Display>(
        &self,
        data: T,
        get: impl FnOnce(&ThemeInner) -> &Style,
    ) -> Styled<'_, T> {
        Styled { data, style: self.inner.as_deref().map(get) }
    }
}

#[derive(Debug)]
struct ThemeInner {
    highlight: Style,
    code: Style,
    warn: Style,
    error: Style,
}

impl Default for ThemeInner {
    fn default() -> ThemeInner {
        ThemeInner {
            highlight: Style::new()
                .bold()
                .fg_color(Some(AnsiColor::Magenta.into())),
            code: Style::new().bold().fg_color(Some(AnsiColor::Cyan.into())),
            warn: Style::new().fg_color(Some(AnsiColor::Yellow.into())),
            error: Style::new().bold().fg_color(Some(AnsiColor::Red.into())),
        }
    }
}

/// A possibly unstyled piece of renderable data.
#[derive(Clone, Debug)]
pub struct Styled<'s, T> {
    data: T,
    style: Option<&'s Style>,
}

impl<'s, T: Display> Display for Styled<'s, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Some(style) = self.style else {
            return self.data.fmt(f);
        };
        write!(f, "{style}{}{style:#}", self.data)
    }
}

fn tty_stdout() -> bool {
    static YES: LazyLock<bool> =
        LazyLock::new(|| std::io::stdout().is_terminal());
    *YES
}

fn tty_stderr() -> bool {
    static YES: LazyLock<bool> =
        LazyLock::new(|| std::io::stderr().is_terminal());
    *YES
}

/// Whether colors have been globally disabled or not.
fn can_use_colors() -> bool {
    static YES: LazyLock<bool> = LazyLock::new(|| {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return false;
        }
        std::env::var_os("TERM").is_none_or(|v| v != "dumb")
    });
    *YES
}
