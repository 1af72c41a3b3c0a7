/*!
Locale-aware `strftime` formatting.

This crate renders a datetime into a string according to a template made up
of literal text and POSIX `strftime` directives like `%A` or `%Y`. Every
locale-sensitive directive is looked up in an explicitly provided [`Locale`]
record.

# Example

```
use lctime::{Instant, resolve_locale};

let locale = resolve_locale("es_MX")?;
let instant = Instant::from(jiff::civil::date(2000, 1, 2).at(3, 4, 5, 0));
assert_eq!(
    lctime::format("%d de %B de %Y", &instant, &locale),
    "02 de enero de 2000",
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Directives

| Directive | Meaning |
|-----------|---------|
| `%a`, `%A` | The locale's abbreviated and full weekday name. |
| `%b`, `%B` | The locale's abbreviated and full month name. |
| `%c` | The locale's preferred date and time representation. |
| `%C` | The year divided by 100, truncated. |
| `%d` | The day of the month, zero padded to 2 digits. |
| `%D` | Equivalent to `%m/%d/%y`. |
| `%e` | The day of the month, space padded to 2 characters. |
| `%F` | Equivalent to `%Y-%m-%d`. |
| `%g`, `%G` | The ISO 8601 week-based year, as 2 digits or in full. |
| `%H` | The hour on a 24 hour clock, zero padded. |
| `%I` | The hour on a 12 hour clock, zero padded. |
| `%j` | The day of the year, zero padded to 3 digits. |
| `%m` | The month, zero padded. |
| `%M` | The minute, zero padded. |
| `%n` | A newline. |
| `%p` | The locale's ante/post meridiem marker. |
| `%r` | The locale's 12 hour clock time representation. |
| `%R` | Equivalent to `%H:%M`. |
| `%S` | The second, zero padded. |
| `%t` | A tab. |
| `%T` | Equivalent to `%H:%M:%S`. |
| `%u` | The weekday, where Monday is `1` and Sunday is `7`. |
| `%U` | The week of the year, where weeks start on Sunday. |
| `%V` | The ISO 8601 week of the year. |
| `%w` | The weekday, where Sunday is `0` and Saturday is `6`. |
| `%W` | The week of the year, where weeks start on Monday. |
| `%x` | The locale's preferred date representation. |
| `%X` | The locale's preferred time representation. |
| `%y` | The last two digits of the year. |
| `%Y` | The full year. |
| `%z` | The UTC offset as `+hhmm` or `-hhmm`, if one is known. |
| `%Z` | The time zone abbreviation, if one is known. |
| `%%` | A literal `%`. |

Any other `%X` pair is copied to the output unchanged, and a lone `%` at the
end of a template is emitted as-is. Rendering never fails.

# Locales

A handful of locales are embedded in this crate. They can be found with
[`resolve_locale`], and listed with [`available_locales`]. Locale records can
also be loaded from JSON via [`Locale::from_json`] or [`Locale::from_path`].

For call sites that don't want to carry a locale around, [`strftime`] formats
with a process wide default locale. It is initialized from the `LC_TIME`,
`LC_ALL` and `LANG` environment variables (in that order) and may be changed
with [`set_locale`].
*/

pub use crate::{
    catalog::{
        available_locales, default_locale, get_locale, normalize_locale_id,
        resolve_locale, set_locale, strftime,
    },
    directive::{Directive, directives},
    error::Error,
    format::{format, format_to},
    instant::Instant,
    locale::Locale,
};

mod catalog;
mod directive;
mod error;
mod format;
mod instant;
mod locale;
