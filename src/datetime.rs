use {
    bstr::BStr,
    jiff::{
        Zoned, civil, fmt,
        tz::{self, Offset},
    },
    lctime::Instant,
};

use crate::{NOW, TZ, args::Usage};

static TEMPORAL_PARSER: fmt::temporal::DateTimeParser =
    fmt::temporal::DateTimeParser::new();
static RFC2822_PARSER: fmt::rfc2822::DateTimeParser =
    fmt::rfc2822::DateTimeParser::new();

/// A datetime parsed from user input, either on the CLI or on stdin.
///
/// Everything is resolved to a zoned datetime. The time zone matters because
/// it determines what `%z` and `%Z` print. Inputs without an offset are
/// interpreted in the system time zone (see `TZ`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateTime {
    zdt: Zoned,
}

impl DateTime {
    pub const ARG_OR_STDIN: Usage = Usage::arg(
        "<datetime>",
        "A datetime string, e.g., `now` or `2025-03-15T00:00Z`.",
        r#"
A datetime string.

Datetimes can either be passed as positional arguments or as line delimited
data on stdin, but not both. That is, datetimes will only be read from stdin
when there are no datetimes provided as positional arguments. Blank lines on
stdin are skipped.

The following formats are accepted:

RFC 9557, e.g., `2025-03-15T10:23:00-04:00[America/New_York]`. The time zone
annotation determines the abbreviation printed by `%Z`.

RFC 3339, e.g., `2025-03-15T10:23:00-04:00`. A `Z` offset is printed as `UTC`
by `%Z`.

RFC 2822, e.g., `Sat, 15 Mar 2025 10:23:00 -0400`

A civil date or datetime, e.g., `2025-03-15` or `2025-03-15T10:23`. When a time
is missing, midnight is used. These are interpreted as local time in your
system's configured time zone (which may be overridden by the `TZ` environment
variable).

`now` refers to the current datetime. It is computed once when lctime starts,
or if the `LCTIME_NOW` environment variable is set, that time is used instead.
"#,
    );

    /// Parse a datetime from arbitrary bytes.
    pub fn from_bytes(s: &[u8]) -> anyhow::Result<DateTime> {
        let s = s.trim_ascii();
        if s == b"now" {
            return Ok(DateTime::from(NOW.clone()));
        }
        // Keep this error around. If there turns out to be a time zone
        // annotation, then it's the most useful one to report.
        let temporal_err = match TEMPORAL_PARSER.parse_zoned(s) {
            Ok(zdt) => return Ok(DateTime::from(zdt)),
            Err(err) => err,
        };
        if let Ok(pieces) = fmt::temporal::Pieces::parse(s) {
            if pieces.time_zone_annotation().is_some() {
                return Err(temporal_err.into());
            }
            let time = pieces.time().unwrap_or(civil::Time::midnight());
            let dt = pieces.date().to_datetime(time);
            let zdt = match pieces.offset() {
                None => dt.to_zoned(TZ.clone())?,
                Some(fmt::temporal::PiecesOffset::Zulu) => {
                    dt.to_zoned(tz::TimeZone::UTC)?
                }
                Some(fmt::temporal::PiecesOffset::Numeric(ref off)) => {
                    if off.offset() == Offset::UTC {
                        dt.to_zoned(tz::TimeZone::UTC)?
                    } else {
                        dt.to_zoned(tz::TimeZone::fixed(off.offset()))?
                    }
                }
                Some(unk) => {
                    anyhow::bail!("unrecognized parsed offset: {unk:?}")
                }
            };
            return Ok(DateTime::from(zdt));
        }
        if let Ok(zdt) = RFC2822_PARSER.parse_zoned(s) {
            return Ok(DateTime::from(zdt));
        }
        anyhow::bail!("unrecognized datetime `{s}`", s = BStr::new(s))
    }

    /// Convert this datetime into something that can be formatted.
    pub fn to_instant(&self) -> Instant {
        Instant::from(&self.zdt)
    }
}

impl From<Zoned> for DateTime {
    fn from(zdt: Zoned) -> DateTime {
        DateTime { zdt }
    }
}

impl std::str::FromStr for DateTime {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<DateTime> {
        DateTime::from_bytes(s.as_bytes())
    }
}
