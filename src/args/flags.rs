use std::{path::PathBuf, sync::Arc};

use lctime::Locale;

use crate::{LOCALE, args::Usage};

/// A `strftime` template given via `-f/--format`.
///
/// Parsing never fails. Every string is a valid template, since unknown
/// directives are printed verbatim.
#[derive(Clone, Debug)]
pub struct Template(String);

impl Template {
    pub const USAGE: Usage = Usage::flag(
        "-f, --format <template>",
        "Format with this template, default `%c`.",
        r#"
Print datetimes with this `strftime` style template. By default, `%c` is used,
which is the preferred date and time representation of the selected locale.

Every `%` followed by a character is a directive. Characters that aren't part
of a directive are copied through unchanged. Unrecognized directives, like
`%Q`, are copied through as well. A trailing lone `%` is printed as-is.

Locale sensitive directives are `%a`, `%A`, `%b`, `%B`, `%p`, `%c`, `%x`, `%X`
and `%r`. The last four expand to a template provided by the locale.

Run `lctime directives` for the full list of supported directives.
"#,
    );

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Template {
    fn default() -> Template {
        Template("%c".to_string())
    }
}

impl std::str::FromStr for Template {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Template, std::convert::Infallible> {
        Ok(Template(s.to_string()))
    }
}

/// The locale to format datetimes in.
///
/// This is set by either `-l/--locale` or `-L/--locale-file`. When both are
/// given, the last one wins. When neither is given, the locale from the
/// environment is used.
#[derive(Clone, Debug, Default)]
pub enum LocaleChoice {
    #[default]
    Environment,
    Given(Arc<Locale>),
}

impl LocaleChoice {
    pub const USAGE_NAMED: Usage = Usage::flag(
        "-l, --locale <id>",
        "Format in this locale, e.g., `fr_FR.UTF-8`.",
        r#"
Format datetimes in the locale with the given identifier.

Identifiers have the shape `language[_territory][.codeset][@modifier]`, for
example, `de_DE` or `en_US.UTF-8`. The codeset is ignored. `C` and `POSIX` are
always available. Run `lctime locales` to see the rest.

When this isn't given, the locale is taken from the `LCTIME_LOCALE`
environment variable. If that isn't set, then the first one of `LC_TIME`,
`LC_ALL` and `LANG` that is set is used. If none are, or the one that is
doesn't name an available locale, then `POSIX` is used.

This flag overrides any previous `-L/--locale-file` flag.
"#,
    );

    pub const USAGE_FILE: Usage = Usage::flag(
        "-L, --locale-file <path>",
        "Format in the locale defined by this JSON file.",
        r#"
Format datetimes in the locale defined by the given JSON file.

The file must contain a single JSON object with exactly these keys: `id`,
`days` (7 full weekday names starting with Sunday), `short_days` (7),
`months` (12 full month names starting with January), `short_months` (12),
`am_pm` (2), and the templates `date` (`%x`), `time` (`%X`), `date_time`
(`%c`) and `time_ampm` (`%r`).

This flag overrides any previous `-l/--locale` flag.
"#,
    );

    /// Resolve a locale by its identifier.
    pub fn named(id: &str) -> anyhow::Result<LocaleChoice> {
        Ok(LocaleChoice::Given(lctime::resolve_locale(id)?))
    }

    /// Load a locale from a JSON file.
    pub fn file(path: PathBuf) -> anyhow::Result<LocaleChoice> {
        let locale = Locale::from_path(&path)?;
        log::debug!(
            "loaded locale `{}` from `{}`",
            locale.id(),
            path.display(),
        );
        Ok(LocaleChoice::Given(Arc::new(locale)))
    }

    /// Returns the locale chosen.
    pub fn get(&self) -> Arc<Locale> {
        match *self {
            LocaleChoice::Environment => Arc::clone(&*LOCALE),
            LocaleChoice::Given(ref locale) => Arc::clone(locale),
        }
    }
}
