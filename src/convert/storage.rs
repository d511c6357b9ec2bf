//! The storage-size family: canonical value is whole bytes.

use crate::units::{STORAGE, render_magnitude};

pub(crate) const EXAMPLES: &str = "1, 2B, 1.5KiB, 2MB, 4GiB, 1TB";

/// Parses text like "1.5KiB" into bytes, truncating any fractional byte.
///
/// Bare numerals ("200") count as bytes only when `allow_bare_number` is set;
/// otherwise they are not recognized.
pub(crate) fn parse(text: &str, allow_bare_number: bool) -> Option<f64> {
    let text = text.trim();
    if let Some(unit) = STORAGE.match_suffix(text) {
        let literal = text[..text.len() - unit.suffix.len()].trim();
        let number: f64 = literal.parse().ok()?;
        return Some((number * unit.multiplier).trunc());
    }
    if allow_bare_number {
        return text.parse::<f64>().ok().map(f64::trunc);
    }
    None
}

/// Renders a byte count with the largest unit whose threshold fits,
/// e.g. 1024 -> "1KiB", 1000 -> "1KB", -1024 -> "-1KiB".
pub(crate) fn format(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let unit = STORAGE.entry_for(magnitude);
    format!(
        "{sign}{}{}",
        render_magnitude(magnitude / unit.multiplier),
        unit.suffix
    )
}
