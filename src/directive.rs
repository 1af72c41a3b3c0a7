/*!
The directive table.

Each supported directive character maps to a renderer that appends that
directive's value for a given instant and locale. The table is a static array
indexed by the directive's ASCII code, so lookup is a single load.
*/

use crate::format::Formatter;

type Render = fn(&Formatter<'_>, &mut String);

/// A single supported `strftime` directive.
///
/// The full list is available via [`directives`].
#[derive(Clone, Copy)]
pub struct Directive {
    code: char,
    about: &'static str,
    render: Render,
}

impl Directive {
    /// The character following the `%` in a template, e.g., `Y` for `%Y`.
    pub fn code(&self) -> char {
        self.code
    }

    /// A short human readable description of this directive.
    pub fn about(&self) -> &'static str {
        self.about
    }

    pub(crate) fn render(&self, f: &Formatter<'_>, out: &mut String) {
        (self.render)(f, out)
    }
}

impl std::fmt::Debug for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Directive")
            .field("code", &self.code)
            .field("about", &self.about)
            .finish()
    }
}

/// Returns every supported directive.
pub fn directives() -> &'static [Directive] {
    DIRECTIVES
}

/// Look up the directive for the character following a `%`.
pub(crate) fn lookup(code: char) -> Option<&'static Directive> {
    if !code.is_ascii() {
        return None;
    }
    let index = INDEX[code as usize];
    if index == UNSUPPORTED {
        return None;
    }
    Some(&DIRECTIVES[usize::from(index)])
}

const UNSUPPORTED: u8 = u8::MAX;

static DIRECTIVES: &[Directive] = LIST;

static INDEX: [u8; 128] = index(LIST);

const fn index(list: &[Directive]) -> [u8; 128] {
    let mut index = [UNSUPPORTED; 128];
    let mut i = 0;
    while i < list.len() {
        index[list[i].code as usize] = i as u8;
        i += 1;
    }
    index
}

const fn d(code: char, about: &'static str, render: Render) -> Directive {
    Directive { code, about, render }
}

const LIST: &[Directive] = &[
    d('a', "the locale's abbreviated weekday name", weekday_abbrev),
    d('A', "the locale's full weekday name", weekday_full),
    d('b', "the locale's abbreviated month name", month_abbrev),
    d('B', "the locale's full month name", month_full),
    d('c', "the locale's date and time representation", locale_datetime),
    d('C', "the year divided by 100, truncated", century),
    d('d', "the day of the month, 01-31", day_zero),
    d('D', "equivalent to %m/%d/%y", american_date),
    d('e', "the day of the month, space padded, 1-31", day_space),
    d('F', "equivalent to %Y-%m-%d", iso_date),
    d('g', "the ISO 8601 week-based year, last 2 digits", iso_year_short),
    d('G', "the ISO 8601 week-based year", iso_year),
    d('H', "the hour on a 24 hour clock, 00-23", hour24),
    d('I', "the hour on a 12 hour clock, 01-12", hour12),
    d('j', "the day of the year, 001-366", day_of_year),
    d('m', "the month, 01-12", month),
    d('M', "the minute, 00-59", minute),
    d('n', "a newline", newline),
    d('p', "the locale's equivalent of AM or PM", meridiem),
    d('r', "the locale's 12 hour clock time", locale_time_ampm),
    d('R', "equivalent to %H:%M", hour_minute),
    d('S', "the second, 00-60", second),
    d('t', "a tab", tab),
    d('T', "equivalent to %H:%M:%S", hour_minute_second),
    d('u', "the weekday where Monday is 1, 1-7", weekday_monday_one),
    d('U', "the week of the year, weeks starting Sunday, 00-53", week_sunday),
    d('V', "the ISO 8601 week of the year, 01-53", iso_week),
    d('w', "the weekday where Sunday is 0, 0-6", weekday_sunday_zero),
    d('W', "the week of the year, weeks starting Monday, 00-53", week_monday),
    d('x', "the locale's date representation", locale_date),
    d('X', "the locale's time representation", locale_time),
    d('y', "the last 2 digits of the year, 00-99", year_short),
    d('Y', "the year", year),
    d('z', "the UTC offset as +hhmm or -hhmm", offset),
    d('Z', "the time zone abbreviation", zone_name),
    d('%', "a literal %", percent),
];

fn weekday_abbrev(f: &Formatter<'_>, out: &mut String) {
    out.push_str(f.locale.short_day_name(f.instant.weekday()));
}

fn weekday_full(f: &Formatter<'_>, out: &mut String) {
    out.push_str(f.locale.day_name(f.instant.weekday()));
}

fn month_abbrev(f: &Formatter<'_>, out: &mut String) {
    out.push_str(f.locale.short_month_name(f.instant.month()));
}

fn month_full(f: &Formatter<'_>, out: &mut String) {
    out.push_str(f.locale.month_name(f.instant.month()));
}

fn locale_datetime(f: &Formatter<'_>, out: &mut String) {
    f.nested(f.locale.datetime_template(), out);
}

fn century(f: &Formatter<'_>, out: &mut String) {
    // Truncates toward zero, like C.
    push_int(out, f.instant.year() / 100, 0, '0');
}

fn day_zero(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.day(), 2, '0');
}

fn american_date(f: &Formatter<'_>, out: &mut String) {
    f.nested("%m/%d/%y", out);
}

fn day_space(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.day(), 2, ' ');
}

fn iso_date(f: &Formatter<'_>, out: &mut String) {
    f.nested("%Y-%m-%d", out);
}

fn iso_year_short(f: &Formatter<'_>, out: &mut String) {
    let year = f.instant.datetime().date().iso_week_date().year();
    push_int(out, year.rem_euclid(100), 2, '0');
}

fn iso_year(f: &Formatter<'_>, out: &mut String) {
    let year = f.instant.datetime().date().iso_week_date().year();
    push_int(out, year, 0, '0');
}

fn hour24(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.hour(), 2, '0');
}

fn hour12(f: &Formatter<'_>, out: &mut String) {
    let hour = match f.instant.hour() % 12 {
        0 => 12,
        hour => hour,
    };
    push_int(out, hour, 2, '0');
}

fn day_of_year(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.day_of_year(), 3, '0');
}

fn month(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.month(), 2, '0');
}

fn minute(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.minute(), 2, '0');
}

fn newline(_: &Formatter<'_>, out: &mut String) {
    out.push('\n');
}

fn meridiem(f: &Formatter<'_>, out: &mut String) {
    out.push_str(f.locale.meridiem(f.instant.hour()));
}

fn locale_time_ampm(f: &Formatter<'_>, out: &mut String) {
    f.nested(f.locale.time_ampm_template(), out);
}

fn hour_minute(f: &Formatter<'_>, out: &mut String) {
    f.nested("%H:%M", out);
}

fn second(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.second(), 2, '0');
}

fn tab(_: &Formatter<'_>, out: &mut String) {
    out.push('\t');
}

fn hour_minute_second(f: &Formatter<'_>, out: &mut String) {
    f.nested("%H:%M:%S", out);
}

fn weekday_monday_one(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.weekday().to_monday_one_offset(), 0, '0');
}

/// Week 1 begins on the first Sunday of the year. Days before it are in
/// week 0.
fn week_sunday(f: &Formatter<'_>, out: &mut String) {
    let yday = f.instant.day_of_year() - 1;
    let wday = i16::from(f.instant.weekday().to_sunday_zero_offset());
    push_int(out, (yday + 7 - wday) / 7, 2, '0');
}

/// Weeks start on Monday, and week 1 is the week with the year's first
/// Thursday. Days in early January may belong to the last week of the
/// previous year, and days in late December to week 1 of the next.
fn iso_week(f: &Formatter<'_>, out: &mut String) {
    let week = f.instant.datetime().date().iso_week_date().week();
    push_int(out, week, 2, '0');
}

fn weekday_sunday_zero(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.weekday().to_sunday_zero_offset(), 0, '0');
}

/// Week 1 begins on the first Monday of the year. Days before it are in
/// week 0.
fn week_monday(f: &Formatter<'_>, out: &mut String) {
    let yday = f.instant.day_of_year() - 1;
    let wday = i16::from(f.instant.weekday().to_monday_zero_offset());
    push_int(out, (yday + 7 - wday) / 7, 2, '0');
}

fn locale_date(f: &Formatter<'_>, out: &mut String) {
    f.nested(f.locale.date_template(), out);
}

fn locale_time(f: &Formatter<'_>, out: &mut String) {
    f.nested(f.locale.time_template(), out);
}

fn year_short(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.year().rem_euclid(100), 2, '0');
}

fn year(f: &Formatter<'_>, out: &mut String) {
    push_int(out, f.instant.year(), 0, '0');
}

fn offset(f: &Formatter<'_>, out: &mut String) {
    let Some(offset) = f.instant.offset() else { return };
    let seconds = offset.seconds();
    out.push(if seconds < 0 { '-' } else { '+' });
    let minutes = seconds.unsigned_abs() / 60;
    push_int(out, minutes / 60, 2, '0');
    push_int(out, minutes % 60, 2, '0');
}

fn zone_name(f: &Formatter<'_>, out: &mut String) {
    out.push_str(f.instant.zone_name().unwrap_or(""));
}

fn percent(_: &Formatter<'_>, out: &mut String) {
    out.push('%');
}

/// Append `n` in decimal, padded on the left with `fill` until its digits
/// take up at least `width` characters. A negative sign precedes padding.
fn push_int(out: &mut String, n: impl Into<i64>, width: usize, fill: char) {
    let n = n.into();
    if n < 0 {
        out.push('-');
    }
    let digits = n.unsigned_abs().to_string();
    for _ in digits.len()..width {
        out.push(fill);
    }
    out.push_str(&digits);
}
