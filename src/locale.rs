use std::path::Path;

use jiff::civil::Weekday;

use crate::{error::Error, instant::Instant};

/// The locale specific data needed to format datetimes.
///
/// A locale record provides weekday names, month names, the ante/post
/// meridiem markers and four "preferred representation" templates used by
/// `%c`, `%r`, `%x` and `%X`.
///
/// Every name list has exactly the length implied by its domain (7 weekdays,
/// 12 months and 2 meridiem markers). This is enforced when a record is
/// decoded, so formatting can never index out of bounds.
///
/// Records are usually obtained from
/// [`resolve_locale`](crate::resolve_locale), but they can also be decoded
/// from JSON in this shape:
///
/// ```json
/// {
///   "id": "en_US",
///   "days": ["Sunday", "Monday", "...", "Saturday"],
///   "short_days": ["Sun", "Mon", "...", "Sat"],
///   "months": ["January", "...", "December"],
///   "short_months": ["Jan", "...", "Dec"],
///   "am_pm": ["AM", "PM"],
///   "date": "%m/%d/%Y",
///   "time": "%r",
///   "date_time": "%a %d %b %Y %r %Z",
///   "time_ampm": "%I:%M:%S %p"
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Locale {
    id: String,
    days: [String; 7],
    short_days: [String; 7],
    months: [String; 12],
    short_months: [String; 12],
    am_pm: [String; 2],
    date: String,
    time: String,
    date_time: String,
    time_ampm: String,
}

impl Locale {
    /// Returns the POSIX (or "C") locale.
    ///
    /// This locale is always available and doesn't depend on any embedded
    /// data.
    pub fn posix() -> Locale {
        fn strings<const N: usize>(names: [&str; N]) -> [String; N] {
            names.map(String::from)
        }

        Locale {
            id: "POSIX".to_string(),
            days: strings([
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            short_days: strings([
                "Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat",
            ]),
            months: strings([
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            short_months: strings([
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep",
                "Oct", "Nov", "Dec",
            ]),
            am_pm: strings(["AM", "PM"]),
            date: "%m/%d/%y".to_string(),
            time: "%H:%M:%S".to_string(),
            date_time: "%a %b %e %H:%M:%S %Y".to_string(),
            time_ampm: "%I:%M:%S %p".to_string(),
        }
    }

    /// Decode a locale record from JSON.
    ///
    /// This fails if the JSON is malformed, if any field is missing or
    /// unrecognized, or if a name list has the wrong number of entries.
    pub fn from_json(json: &[u8]) -> Result<Locale, serde_json::Error> {
        serde_json::from_slice(json)
    }

    /// Read and decode a locale record from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Locale, Error> {
        let path = path.as_ref();
        let json = std::fs::read(path)
            .map_err(|err| Error::Io { path: path.to_path_buf(), err })?;
        log::debug!("decoding locale record from `{}`", path.display());
        Locale::from_json(&json).map_err(|err| Error::Corrupt {
            id: path.display().to_string(),
            err,
        })
    }

    /// Format the given instant according to `template` in this locale.
    ///
    /// This is a convenience for [`format`](crate::format).
    pub fn strftime(&self, template: &str, instant: &Instant) -> String {
        crate::format::format(template, instant, self)
    }

    /// The identifier of this locale, e.g., `en_US`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full weekday names, starting with Sunday.
    pub fn days(&self) -> &[String; 7] {
        &self.days
    }

    /// Abbreviated weekday names, starting with Sunday.
    pub fn short_days(&self) -> &[String; 7] {
        &self.short_days
    }

    /// Full month names, starting with January.
    pub fn months(&self) -> &[String; 12] {
        &self.months
    }

    /// Abbreviated month names, starting with January.
    pub fn short_months(&self) -> &[String; 12] {
        &self.short_months
    }

    /// The ante meridiem and post meridiem markers, in that order.
    ///
    /// Locales that don't use a 12 hour clock have empty markers.
    pub fn am_pm(&self) -> &[String; 2] {
        &self.am_pm
    }

    /// The preferred date template (`%x`).
    pub fn date_template(&self) -> &str {
        &self.date
    }

    /// The preferred time template (`%X`).
    pub fn time_template(&self) -> &str {
        &self.time
    }

    /// The preferred date and time template (`%c`).
    pub fn datetime_template(&self) -> &str {
        &self.date_time
    }

    /// The preferred 12 hour clock time template (`%r`).
    pub fn time_ampm_template(&self) -> &str {
        &self.time_ampm
    }

    pub(crate) fn day_name(&self, weekday: Weekday) -> &str {
        &self.days[sunday_zero(weekday)]
    }

    pub(crate) fn short_day_name(&self, weekday: Weekday) -> &str {
        &self.short_days[sunday_zero(weekday)]
    }

    pub(crate) fn month_name(&self, month: i8) -> &str {
        &self.months[month_zero(month)]
    }

    pub(crate) fn short_month_name(&self, month: i8) -> &str {
        &self.short_months[month_zero(month)]
    }

    pub(crate) fn meridiem(&self, hour: i8) -> &str {
        &self.am_pm[usize::from(hour >= 12)]
    }
}

impl Default for Locale {
    fn default() -> Locale {
        Locale::posix()
    }
}

fn sunday_zero(weekday: Weekday) -> usize {
    // Always in 0..=6.
    weekday.to_sunday_zero_offset().unsigned_abs().into()
}

fn month_zero(month: i8) -> usize {
    // jiff guarantees 1..=12, so this is always in 0..=11.
    usize::from(month.unsigned_abs()).saturating_sub(1).min(11)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT_DAYS: &str = r#"{
        "id": "xx_XX",
        "days": ["1", "2", "3", "4", "5", "6", "7"],
        "short_days": ["1", "2", "3", "4", "5", "6"],
        "months": ["1","2","3","4","5","6","7","8","9","10","11","12"],
        "short_months": ["1","2","3","4","5","6","7","8","9","10","11","12"],
        "am_pm": ["a", "p"],
        "date": "%x",
        "time": "%X",
        "date_time": "%c",
        "time_ampm": "%r"
    }"#;

    #[test]
    fn posix_names() {
        let lc = Locale::posix();
        assert_eq!(lc.id(), "POSIX");
        assert_eq!(lc.day_name(Weekday::Sunday), "Sunday");
        assert_eq!(lc.short_day_name(Weekday::Saturday), "Sat");
        assert_eq!(lc.month_name(1), "January");
        assert_eq!(lc.short_month_name(12), "Dec");
        assert_eq!(lc.meridiem(0), "AM");
        assert_eq!(lc.meridiem(11), "AM");
        assert_eq!(lc.meridiem(12), "PM");
        assert_eq!(lc.meridiem(23), "PM");
    }

    #[test]
    fn wrong_cardinality_is_rejected() {
        let err = Locale::from_json(SHORT_DAYS.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("invalid length 6"), "{err}");

        let ok = SHORT_DAYS.replace(r#""5", "6"]"#, r#""5", "6", "7"]"#);
        let lc = Locale::from_json(ok.as_bytes()).unwrap();
        assert_eq!(lc.id(), "xx_XX");
        assert_eq!(lc.short_days()[6], "7");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = SHORT_DAYS
            .replace(r#""5", "6"]"#, r#""5", "6", "7"]"#)
            .replace(r#""id""#, r#""era": "", "id""#);
        assert!(Locale::from_json(json.as_bytes()).is_err());
    }

    #[test]
    fn from_path_classifies_errors() {
        let err = Locale::from_path("/this/does/not/exist.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }), "{err:?}");
        assert!(!err.is_corrupt() && !err.is_not_found());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.json");
        std::fs::write(&path, SHORT_DAYS).unwrap();
        let err = Locale::from_path(&path).unwrap_err();
        assert!(err.is_corrupt(), "{err:?}");
        assert!(!err.is_not_found());
        assert!(err.to_string().ends_with("short.json` is corrupt"), "{err}");
        assert!(std::error::Error::source(&err).is_some());

        let ok = SHORT_DAYS.replace(r#""5", "6"]"#, r#""5", "6", "7"]"#);
        std::fs::write(&path, ok).unwrap();
        assert_eq!(Locale::from_path(&path).unwrap().id(), "xx_XX");
    }
}
