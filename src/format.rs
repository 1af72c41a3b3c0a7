use crate::{directive, instant::Instant, locale::Locale};

/// The maximum nesting of composite directives.
///
/// The fixed composites (`%D`, `%F`, `%R` and `%T`) never nest more than one
/// level deep. Only the locale supplied templates (`%c`, `%r`, `%x` and `%X`)
/// can nest further, and a record that refers back to itself would otherwise
/// recurse forever.
const MAX_DEPTH: u8 = 8;

/// Format `instant` according to `template` in the given locale.
///
/// This scans the template once from left to right. Literal text is copied
/// as-is. Each `%` followed by a recognized directive character is replaced
/// by that directive's value. An unrecognized `%X` pair is copied unchanged,
/// and a `%` at the very end of the template is emitted literally. This
/// routine never fails.
///
/// # Example
///
/// ```
/// use lctime::{Instant, Locale};
///
/// let instant = Instant::from(jiff::civil::date(2000, 1, 2).at(3, 4, 5, 0));
/// let posix = Locale::posix();
/// assert_eq!(
///     lctime::format("%Y-%m-%d %H:%M:%S", &instant, &posix),
///     "2000-01-02 03:04:05",
/// );
/// assert_eq!(lctime::format("100%! %", &instant, &posix), "100%! %");
/// ```
pub fn format(template: &str, instant: &Instant, locale: &Locale) -> String {
    let mut out = String::with_capacity(template.len());
    format_to(template, instant, locale, &mut out);
    out
}

/// Like [`format`], but appends to an existing buffer.
pub fn format_to(
    template: &str,
    instant: &Instant,
    locale: &Locale,
    out: &mut String,
) {
    Formatter { instant, locale, depth: 0 }.format(template, out)
}

/// The state threaded through a single render call.
///
/// Directive renderers receive this so that composite directives can
/// re-enter the interpreter with the same instant and locale.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Formatter<'a> {
    pub(crate) instant: &'a Instant,
    pub(crate) locale: &'a Locale,
    depth: u8,
}

impl<'a> Formatter<'a> {
    fn format(&self, template: &str, out: &mut String) {
        let mut rest = template;
        while let Some(i) = rest.find('%') {
            out.push_str(&rest[..i]);
            let mut chars = rest[i + 1..].chars();
            let Some(code) = chars.next() else {
                // A trailing `%` isn't an escape.
                out.push('%');
                return;
            };
            match directive::lookup(code) {
                Some(d) => d.render(self, out),
                None => {
                    out.push('%');
                    out.push(code);
                }
            }
            rest = chars.as_str();
        }
        out.push_str(rest);
    }

    /// Render a sub-template for a composite directive.
    pub(crate) fn nested(&self, template: &str, out: &mut String) {
        if self.depth >= MAX_DEPTH {
            log::warn!(
                "composite directives in locale `{}` nest more than \
                 {MAX_DEPTH} levels deep, emitting `{template}` as-is",
                self.locale.id(),
            );
            out.push_str(template);
            return;
        }
        Formatter { depth: self.depth + 1, ..*self }.format(template, out)
    }
}
