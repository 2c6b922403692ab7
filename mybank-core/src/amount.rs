//! French-formatted money strings.
//!
//! Wire amounts look like `"-45,99"`, `"+12,00"`, `" 1 234,56 € "` or even
//! `"-50.00€"`. Display strings look like `"-45,99 €"`.

use tracing::trace;

/// The only currency the app knows about.
pub const CURRENCY_EUR: &str = "€";

/// Parse a locale-formatted amount into a signed value.
///
/// Never fails: anything that does not parse to a finite number yields `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .replace(CURRENCY_EUR, "")
        .chars()
        // thousands separators: plain, no-break and narrow no-break spaces
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            trace!(raw, "unparseable amount, falling back to 0.0");
            0.0
        }
    }
}

/// Format a value as `"{sign}{units},{cents} {currency}"`.
///
/// Units and cents are truncated, never rounded: `19.999` renders as
/// `"19,99"` and `3.05` as `"3,04"` (its fraction is 0.0499…). No thousands
/// separators.
pub fn format_amount(value: f64, currency: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    let units = abs.trunc();
    let cents = ((abs - units) * 100.0).trunc() as u32;

    format!("{sign}{},{cents:02} {currency}", units as u64)
}
