//! The time family: canonical value is seconds, fractions preserved.
//!
//! Accepts unit suffixes (ps..h) and a clock form (`1:02:07.5`, `02:07`)
//! recognized by counting ':' separators. Formatting picks sub-second units
//! below one second, whole hours/minutes for exact multiples, plain seconds
//! below a minute, and the clock form for everything else.

use crate::units::{TIME, render_magnitude};
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const EXAMPLES: &str = "1, 2.5s, 4ms, 30min, 2h, 1:02:07.5";

/// `[H:]MM:SS[.fraction]` — hours unbounded, minutes/seconds capped at 59.
static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+):)?([0-5]?\d):([0-5]?\d(?:\.\d+)?)$").expect("Invalid clock regex")
});

pub(crate) fn parse(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.contains(':') {
        return parse_clock(text);
    }
    if let Some(unit) = TIME.match_suffix(text) {
        let literal = text[..text.len() - unit.suffix.len()].trim();
        let number: f64 = literal.parse().ok()?;
        return Some(number * unit.multiplier);
    }
    // Bare numerals are always seconds; durations have an unambiguous base unit.
    text.parse().ok()
}

fn parse_clock(text: &str) -> Option<f64> {
    let caps = CLOCK_RE.captures(text)?;
    let hours: f64 = caps
        .get(1)
        .map_or(Ok(0.0), |m| m.as_str().parse())
        .ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    let seconds: f64 = caps[3].parse().ok()?;
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}

pub(crate) fn format(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude == 0.0 {
        return "0s".to_string();
    }
    if magnitude < 1.0 {
        return format!("{sign}{}", format_subsecond(magnitude));
    }
    // Round to the rendered precision before picking a tier so 59.999
    // promotes to "1min" instead of printing "60s".
    let magnitude = (magnitude * 100.0).round() / 100.0;
    if magnitude % 3600.0 == 0.0 {
        return format!("{sign}{}h", render_magnitude(magnitude / 3600.0));
    }
    if magnitude % 60.0 == 0.0 {
        return format!("{sign}{}min", render_magnitude(magnitude / 60.0));
    }
    if magnitude < 60.0 {
        return format!("{sign}{}s", render_magnitude(magnitude));
    }
    format!("{sign}{}", format_clock(magnitude))
}

/// Largest sub-second unit whose threshold fits; ps catches everything below.
fn format_subsecond(magnitude: f64) -> String {
    let unit = TIME
        .entries
        .iter()
        .filter(|e| e.multiplier < 1.0)
        .find(|e| e.threshold.is_some_and(|t| t <= magnitude))
        .unwrap_or_else(|| &TIME.entries[TIME.entries.len() - 1]);
    format!(
        "{}{}",
        render_magnitude(magnitude / unit.multiplier),
        unit.suffix
    )
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn format_clock(magnitude: f64) -> String {
    let mut hours = (magnitude / 3600.0).floor() as u64;
    let mut minutes = ((magnitude % 3600.0) / 60.0).floor() as u64;
    // Round seconds to the rendered precision first so 59.999 carries
    // into the minute instead of printing ":60".
    let mut seconds = (magnitude % 60.0 * 100.0).round() / 100.0;
    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1;
        if minutes == 60 {
            minutes = 0;
            hours += 1;
        }
    }
    let seconds_text = format!("{seconds:05.2}");
    let seconds_text = seconds_text.trim_end_matches('0').trim_end_matches('.');
    format!("{hours}:{minutes:02}:{seconds_text}")
}
