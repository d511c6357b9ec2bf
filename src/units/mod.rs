//! Static unit tables shared by parsing and formatting.
//!
//! Each table is an ordered list of (threshold, suffix, multiplier) triples,
//! largest threshold first, with exactly one base entry (`threshold: None`,
//! multiplier 1). Parsing matches suffixes longest-first regardless of table
//! position so "TiB" is never mistaken for a "B" with junk in front.

/// One row of a unit table.
#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    /// Smallest magnitude this unit is used for when formatting; `None` marks the base unit.
    pub threshold: Option<f64>,
    /// Textual suffix as it appears in user input and rendered output.
    pub suffix: &'static str,
    /// Factor between one of this unit and one base unit.
    pub multiplier: f64,
}

/// Ordered unit list for one interpretation family.
#[derive(Debug, Clone, Copy)]
pub struct UnitTable {
    pub entries: &'static [UnitEntry],
}

const fn entry(threshold: Option<f64>, suffix: &'static str, multiplier: f64) -> UnitEntry {
    UnitEntry {
        threshold,
        suffix,
        multiplier,
    }
}

/// Storage sizes: decimal units are powers of 1000, binary units powers of 1024.
/// Thresholds interleave (1 TiB > 1 TB) so the largest-first scan stays strictly decreasing.
pub static STORAGE: UnitTable = UnitTable {
    entries: &[
        entry(Some(1_099_511_627_776.0), "TiB", 1_099_511_627_776.0),
        entry(Some(1e12), "TB", 1e12),
        entry(Some(1_073_741_824.0), "GiB", 1_073_741_824.0),
        entry(Some(1e9), "GB", 1e9),
        entry(Some(1_048_576.0), "MiB", 1_048_576.0),
        entry(Some(1e6), "MB", 1e6),
        entry(Some(1024.0), "KiB", 1024.0),
        entry(Some(1000.0), "KB", 1000.0),
        entry(None, "B", 1.0),
    ],
};

/// Durations in seconds. Sub-second thresholds drive the `< 1` formatting
/// ladder; the supra-second rendering is special-cased by the time family.
pub static TIME: UnitTable = UnitTable {
    entries: &[
        entry(Some(3600.0), "h", 3600.0),
        entry(Some(60.0), "min", 60.0),
        entry(None, "s", 1.0),
        entry(Some(1e-3), "ms", 1e-3),
        entry(Some(1e-6), "us", 1e-6),
        entry(Some(1e-9), "ns", 1e-9),
        entry(Some(1e-12), "ps", 1e-12),
    ],
};

impl UnitTable {
    /// Longest matching suffix wins, so "100TiB" strips "TiB" rather than "B".
    #[must_use]
    pub fn match_suffix(&self, text: &str) -> Option<&UnitEntry> {
        self.entries
            .iter()
            .filter(|e| text.ends_with(e.suffix))
            .max_by_key(|e| e.suffix.len())
    }

    /// First entry (largest-threshold-first) whose threshold does not exceed
    /// `magnitude`; the base entry is the fallback for small values.
    #[must_use]
    pub fn entry_for(&self, magnitude: f64) -> &UnitEntry {
        self.entries
            .iter()
            .find(|e| e.threshold.is_some_and(|t| t <= magnitude))
            .unwrap_or_else(|| self.base())
    }

    /// The base unit (factor 1). Every table carries exactly one.
    #[must_use]
    pub fn base(&self) -> &UnitEntry {
        self.entries
            .iter()
            .find(|e| e.threshold.is_none())
            .unwrap_or(&self.entries[0])
    }
}

/// Renders with two fraction digits, then strips trailing zeros and a
/// trailing decimal point: 100.00 -> "100", 1.50 -> "1.5".
#[must_use]
pub fn render_magnitude(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_suffix_wins() {
        assert_eq!(STORAGE.match_suffix("100TiB").unwrap().suffix, "TiB");
        assert_eq!(STORAGE.match_suffix("100TB").unwrap().suffix, "TB");
        assert_eq!(STORAGE.match_suffix("100B").unwrap().suffix, "B");
        assert_eq!(TIME.match_suffix("4ms").unwrap().suffix, "ms");
        assert_eq!(TIME.match_suffix("8s").unwrap().suffix, "s");
        assert!(STORAGE.match_suffix("100").is_none());
    }

    #[test]
    fn thresholds_strictly_decreasing() {
        for table in [&STORAGE, &TIME] {
            let thresholds: Vec<f64> = table.entries.iter().filter_map(|e| e.threshold).collect();
            for pair in thresholds.windows(2) {
                assert!(pair[0] > pair[1], "{} !> {}", pair[0], pair[1]);
            }
            assert_eq!(
                table.entries.iter().filter(|e| e.threshold.is_none()).count(),
                1
            );
        }
    }

    #[test]
    fn render_strips_trailing_zeros() {
        assert_eq!(render_magnitude(100.0), "100");
        assert_eq!(render_magnitude(1.5), "1.5");
        assert_eq!(render_magnitude(8.75), "8.75");
        assert_eq!(render_magnitude(1.126), "1.13");
    }
}
