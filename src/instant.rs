use jiff::{
    Timestamp, Zoned,
    civil::{self, Weekday},
    tz::{Offset, TimeZone},
};

/// A broken down point in time that can be formatted.
///
/// This is the datetime input to [`format`](crate::format). It carries a
/// civil date and time, and optionally a UTC offset and a time zone name.
/// When the offset is absent, `%z` renders as an empty string. Similarly for
/// the time zone name and `%Z`.
///
/// The most complete way to build one is from a [`jiff::Zoned`], which
/// populates both the offset and the time zone abbreviation in effect at
/// that instant. Building one from a [`jiff::civil::DateTime`] leaves both
/// unset.
///
/// # Example
///
/// ```
/// use lctime::{Instant, Locale};
///
/// let zdt = jiff::civil::date(2024, 7, 20)
///     .at(16, 30, 55, 0)
///     .in_tz("America/New_York")?;
/// let instant = Instant::from(&zdt);
/// assert_eq!(
///     Locale::posix().strftime("%F %T %z %Z", &instant),
///     "2024-07-20 16:30:55 -0400 EDT",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instant {
    dt: civil::DateTime,
    offset: Option<Offset>,
    zone: Option<Box<str>>,
}

impl Instant {
    /// Create a new instant from a civil datetime, without any offset or
    /// time zone information.
    pub fn new(dt: civil::DateTime) -> Instant {
        Instant { dt, offset: None, zone: None }
    }

    /// Attach a UTC offset to this instant. It is rendered by `%z`.
    pub fn with_offset(self, offset: Offset) -> Instant {
        Instant { offset: Some(offset), ..self }
    }

    /// Attach a time zone display name to this instant. It is rendered by
    /// `%Z`.
    pub fn with_zone_name(self, name: impl Into<Box<str>>) -> Instant {
        Instant { zone: Some(name.into()), ..self }
    }

    /// The civil datetime of this instant.
    pub fn datetime(&self) -> civil::DateTime {
        self.dt
    }

    pub fn year(&self) -> i16 {
        self.dt.year()
    }

    /// The month, in the range `1..=12`.
    pub fn month(&self) -> i8 {
        self.dt.month()
    }

    /// The day of the month, in the range `1..=31`.
    pub fn day(&self) -> i8 {
        self.dt.day()
    }

    /// The day of the year, in the range `1..=366`.
    pub fn day_of_year(&self) -> i16 {
        self.dt.date().day_of_year()
    }

    pub fn weekday(&self) -> Weekday {
        self.dt.weekday()
    }

    /// The hour, in the range `0..=23`.
    pub fn hour(&self) -> i8 {
        self.dt.hour()
    }

    pub fn minute(&self) -> i8 {
        self.dt.minute()
    }

    pub fn second(&self) -> i8 {
        self.dt.second()
    }

    /// The UTC offset of this instant, if known.
    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    /// The time zone display name of this instant, if known.
    pub fn zone_name(&self) -> Option<&str> {
        self.zone.as_deref()
    }
}

impl From<&Zoned> for Instant {
    fn from(zdt: &Zoned) -> Instant {
        let info = zdt.time_zone().to_offset_info(zdt.timestamp());
        Instant::new(zdt.datetime())
            .with_offset(zdt.offset())
            .with_zone_name(info.abbreviation())
    }
}

impl From<Zoned> for Instant {
    fn from(zdt: Zoned) -> Instant {
        Instant::from(&zdt)
    }
}

impl From<Timestamp> for Instant {
    fn from(ts: Timestamp) -> Instant {
        Instant::from(ts.to_zoned(TimeZone::UTC))
    }
}

impl From<civil::DateTime> for Instant {
    fn from(dt: civil::DateTime) -> Instant {
        Instant::new(dt)
    }
}

impl From<civil::Date> for Instant {
    fn from(date: civil::Date) -> Instant {
        Instant::new(date.to_datetime(civil::Time::midnight()))
    }
}

#[cfg(test)]
mod tests {
    use jiff::{ToSpan, civil::date, tz};

    use super::*;

    #[test]
    fn civil_has_no_zone() {
        let instant = Instant::from(date(2024, 2, 29).at(23, 59, 58, 0));
        assert_eq!(instant.year(), 2024);
        assert_eq!(instant.month(), 2);
        assert_eq!(instant.day(), 29);
        assert_eq!(instant.day_of_year(), 60);
        assert_eq!(instant.weekday(), Weekday::Thursday);
        assert_eq!(
            (instant.hour(), instant.minute(), instant.second()),
            (23, 59, 58),
        );
        assert_eq!(instant.offset(), None);
        assert_eq!(instant.zone_name(), None);
    }

    #[test]
    fn zoned_carries_offset_and_abbreviation() {
        let zdt = date(2024, 1, 10)
            .at(12, 0, 0, 0)
            .in_tz("America/New_York")
            .unwrap();
        let instant = Instant::from(&zdt);
        assert_eq!(instant.offset(), Some(tz::offset(-5)));
        assert_eq!(instant.zone_name(), Some("EST"));

        let zdt = zdt.checked_add(6.months()).unwrap();
        let instant = Instant::from(zdt);
        assert_eq!(instant.offset(), Some(tz::offset(-4)));
        assert_eq!(instant.zone_name(), Some("EDT"));
    }

    #[test]
    fn timestamp_is_utc() {
        let ts: Timestamp = "2444-03-08T03:08:59Z".parse().unwrap();
        let instant = Instant::from(ts);
        assert_eq!(instant.datetime(), date(2444, 3, 8).at(3, 8, 59, 0));
        assert_eq!(instant.offset(), Some(Offset::UTC));
        assert_eq!(instant.zone_name(), Some("UTC"));
    }

    #[test]
    fn builders() {
        let instant = Instant::from(date(2000, 1, 2))
            .with_offset(tz::offset(9))
            .with_zone_name("JST");
        assert_eq!(instant.hour(), 0);
        assert_eq!(instant.offset(), Some(tz::offset(9)));
        assert_eq!(instant.zone_name(), Some("JST"));
    }
}
