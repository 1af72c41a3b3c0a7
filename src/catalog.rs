use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex, RwLock},
};

use crate::{error::Error, instant::Instant, locale::Locale};

/// Locale records embedded into this crate, keyed by identifier.
///
/// Keep this sorted by identifier.
static EMBEDDED: &[(&str, &str)] = &[
    ("da_DK", include_str!("../locales/da_DK.json")),
    ("de_DE", include_str!("../locales/de_DE.json")),
    ("en_GB", include_str!("../locales/en_GB.json")),
    ("en_US", include_str!("../locales/en_US.json")),
    ("es_ES", include_str!("../locales/es_ES.json")),
    ("es_MX", include_str!("../locales/es_MX.json")),
    ("fr_FR", include_str!("../locales/fr_FR.json")),
    ("pt_BR", include_str!("../locales/pt_BR.json")),
];

static POSIX: LazyLock<Arc<Locale>> =
    LazyLock::new(|| Arc::new(Locale::posix()));

static CACHE: LazyLock<Mutex<HashMap<String, Arc<Locale>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

static DEFAULT: LazyLock<RwLock<Arc<Locale>>> =
    LazyLock::new(|| RwLock::new(locale_from_env()));

/// Find a locale by its identifier.
///
/// Identifiers have the shape `language[_territory][.codeset][@modifier]`.
/// The codeset is ignored (all locales use UTF-8), so `en_US.UTF-8` and
/// `en_US` find the same locale. `C` and `POSIX` are always available.
///
/// Decoded locales are cached for the lifetime of the process, so repeated
/// lookups of the same locale are cheap.
///
/// # Errors
///
/// This returns an error when there is no locale with the given identifier,
/// or if its embedded data is corrupt.
///
/// # Example
///
/// ```
/// let locale = lctime::resolve_locale("fr_FR.UTF-8")?;
/// assert_eq!(locale.id(), "fr_FR");
/// assert_eq!(locale.months()[7], "août");
///
/// assert!(lctime::resolve_locale("xx_YY").unwrap_err().is_not_found());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve_locale(id: &str) -> Result<Arc<Locale>, Error> {
    let id = normalize_locale_id(id);
    if id == "C" || id == "POSIX" {
        return Ok(Arc::clone(&*POSIX));
    }
    if let Some(locale) = CACHE.lock().unwrap().get(&*id) {
        log::trace!("found locale `{id}` in cache");
        return Ok(Arc::clone(locale));
    }
    let Some(json) = embedded(&id) else {
        return Err(Error::NotFound { id: id.into_owned() });
    };
    log::debug!("decoding embedded locale `{id}`");
    let locale = Locale::from_json(json.as_bytes())
        .map(Arc::new)
        .map_err(|err| Error::Corrupt { id: id.to_string(), err })?;
    // Another thread may have raced us here. That's fine, since both decoded
    // the same data.
    CACHE
        .lock()
        .unwrap()
        .insert(id.into_owned(), Arc::clone(&locale));
    Ok(locale)
}

/// Returns the identifiers of all available locales, in sorted order.
///
/// This always includes `POSIX`.
pub fn available_locales() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> =
        EMBEDDED.iter().map(|&(id, _)| id).collect();
    ids.push("POSIX");
    ids.sort_unstable();
    ids
}

/// Strips the codeset from a locale identifier.
///
/// A locale identifier is shaped like
/// `language[_territory][.codeset][@modifier]`. This returns the same
/// identifier with the `.codeset` part removed, and leaves everything else
/// alone. A `.` that appears after the `@` is part of the modifier.
///
/// # Example
///
/// ```
/// use lctime::normalize_locale_id;
///
/// assert_eq!(normalize_locale_id("en_US.UTF-8"), "en_US");
/// assert_eq!(normalize_locale_id("de_DE.UTF-8@euro"), "de_DE@euro");
/// assert_eq!(normalize_locale_id("es_MX"), "es_MX");
/// ```
pub fn normalize_locale_id(id: &str) -> Cow<'_, str> {
    let (base, modifier) = match id.find('@') {
        None => (id, ""),
        Some(at) => id.split_at(at),
    };
    let Some(dot) = base.find('.') else { return Cow::Borrowed(id) };
    if modifier.is_empty() {
        return Cow::Borrowed(&base[..dot]);
    }
    Cow::Owned(format!("{}{modifier}", &base[..dot]))
}

/// Returns the current default locale.
///
/// On first use, this is initialized from the first non-empty value among
/// the `LC_TIME`, `LC_ALL` and `LANG` environment variables. If none are set,
/// or if the one that is set doesn't name an available locale, then the
/// POSIX locale is used.
pub fn default_locale() -> Arc<Locale> {
    Arc::clone(&*DEFAULT.read().unwrap())
}

/// Sets the default locale used by [`strftime`].
///
/// If the locale can't be resolved, then an error is returned and the
/// default locale is left unchanged.
pub fn set_locale(id: &str) -> Result<(), Error> {
    let locale = resolve_locale(id)?;
    log::debug!("setting default locale to `{}`", locale.id());
    *DEFAULT.write().unwrap() = locale;
    Ok(())
}

/// Returns the identifier of the default locale.
pub fn get_locale() -> String {
    default_locale().id().to_string()
}

/// Format `instant` according to `template` using the default locale.
///
/// This is a convenience for [`format`](crate::format) with
/// [`default_locale`]. Prefer passing a locale explicitly when it matters
/// which one is used.
pub fn strftime(template: &str, instant: &Instant) -> String {
    default_locale().strftime(template, instant)
}

fn embedded(id: &str) -> Option<&'static str> {
    EMBEDDED
        .binary_search_by_key(&id, |&(id, _)| id)
        .ok()
        .map(|i| EMBEDDED[i].1)
}

fn locale_from_env() -> Arc<Locale> {
    for var in ["LC_TIME", "LC_ALL", "LANG"] {
        let Some(value) = std::env::var_os(var) else { continue };
        if value.is_empty() {
            continue;
        }
        let Some(value) = value.to_str() else {
            log::warn!(
                "`{var}` environment variable is not valid UTF-8, \
                 using POSIX locale",
            );
            break;
        };
        match resolve_locale(value) {
            Ok(locale) => {
                log::debug!("using locale `{value}` from `{var}`");
                return locale;
            }
            Err(err) => {
                log::debug!(
                    "locale `{value}` from `{var}` is unavailable, \
                     using POSIX locale: {err}",
                );
                break;
            }
        }
    }
    Arc::clone(&*POSIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_is_sorted_and_valid() {
        for pair in EMBEDDED.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
        for &(id, json) in EMBEDDED {
            let locale = Locale::from_json(json.as_bytes())
                .unwrap_or_else(|err| panic!("{id}: {err}"));
            assert_eq!(locale.id(), id);
        }
    }

    #[test]
    fn normalize() {
        let cases = [
            ("", ""),
            ("POSIX", "POSIX"),
            ("en_US", "en_US"),
            ("en_US.UTF-8", "en_US"),
            ("en_US.utf8", "en_US"),
            ("gez_ET@abegede", "gez_ET@abegede"),
            ("eu_FR.UTF-8@euro", "eu_FR@euro"),
            ("sr_RS@latin.x", "sr_RS@latin.x"),
            ("ja_JP.eucJP@x.y", "ja_JP@x.y"),
        ];
        for (input, want) in cases {
            assert_eq!(normalize_locale_id(input), want, "{input:?}");
        }
    }

    #[test]
    fn resolve() {
        let cases = [
            ("ab_CD", false),
            ("fake", false),
            ("", false),
            ("en_US@bogus", false),
            ("POSIX", true),
            ("C", true),
            ("C.UTF-8", true),
            ("en_US", true),
            ("en_US.UTF-8", true),
            ("es_MX", true),
        ];
        for (id, ok) in cases {
            match resolve_locale(id) {
                Ok(_) => assert!(ok, "{id:?} should not resolve"),
                Err(err) => {
                    assert!(!ok, "{id:?} should resolve: {err}");
                    assert!(err.is_not_found(), "{id:?}: {err:?}");
                }
            }
        }
    }

    #[test]
    fn resolve_is_cached() {
        let a = resolve_locale("de_DE").unwrap();
        let b = resolve_locale("de_DE.UTF-8").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn available() {
        let ids = available_locales();
        assert!(ids.contains(&"POSIX"));
        assert!(ids.contains(&"en_US"));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        for id in ids {
            assert_eq!(resolve_locale(id).unwrap().id(), id);
        }
    }

    /// This is the only test that touches the process wide default, so it
    /// can't race with other tests.
    #[test]
    fn default_cell() {
        let instant = Instant::from(jiff::civil::date(2000, 1, 2));

        set_locale("es_MX").unwrap();
        assert_eq!(get_locale(), "es_MX");
        assert_eq!(strftime("%A %d de %B", &instant), "domingo 02 de enero");

        let err = set_locale("xx_XX").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(get_locale(), "es_MX");

        set_locale("en_US.UTF-8").unwrap();
        assert_eq!(get_locale(), "en_US");
        assert_eq!(strftime("%A %B", &instant), "Sunday January");
    }
}
