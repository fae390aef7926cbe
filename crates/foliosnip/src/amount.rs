//! Amount formatting and parsing.
//!
//! Amounts in a snippet are written either in compact notation (`1.5k`,
//! `2M`) or in full with comma thousands separators (`1,500`). This module
//! converts between those strings and `f64` values.

/// Compact notation tiers, largest first.
const TIERS: [(f64, char); 3] = [
    (1_000_000_000.0, 'B'),
    (1_000_000.0, 'M'),
    (1_000.0, 'k'),
];

/// Format an amount in compact notation.
///
/// Values below one thousand are written as-is. Larger values are divided by
/// their tier (`k`, `M`, `B`) and shown as an integer when they are an exact
/// multiple of it, otherwise with one decimal digit truncated toward zero.
///
/// # Examples
///
/// ```
/// use foliosnip::amount::format_compact;
///
/// assert_eq!(format_compact(999.0), "999");
/// assert_eq!(format_compact(1000.0), "1k");
/// assert_eq!(format_compact(1500.0), "1.5k");
/// assert_eq!(format_compact(2_000_000.0), "2M");
/// ```
#[must_use]
pub fn format_compact(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    if amount < 0.0 {
        return format!("-{}", format_compact(-amount));
    }

    for (divisor, suffix) in TIERS {
        if amount >= divisor {
            return format!("{}{suffix}", scale(amount, divisor));
        }
    }

    amount.to_string()
}

/// Divide `amount` by a tier divisor, keeping at most one decimal digit.
fn scale(amount: f64, divisor: f64) -> String {
    if amount % divisor == 0.0 {
        return (amount / divisor).to_string();
    }
    let tenths = (amount * 10.0 / divisor).trunc();
    format!("{:.1}", tenths / 10.0)
}

/// Parse an amount written in compact or comma-separated notation.
///
/// A trailing `k` multiplies by one thousand, `M` by one million and `B` by
/// one billion. Comma separators are removed before parsing. Returns `None`
/// when what remains is not a finite number; a leading currency sign is not
/// accepted here.
///
/// # Examples
///
/// ```
/// use foliosnip::amount::parse_amount;
///
/// assert_eq!(parse_amount("2.5k"), Some(2500.0));
/// assert_eq!(parse_amount("1,500"), Some(1500.0));
/// assert_eq!(parse_amount("soon"), None);
/// ```
#[must_use]
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();

    let (digits, multiplier) = TIERS
        .iter()
        .find_map(|&(divisor, suffix)| {
            trimmed
                .strip_suffix(suffix)
                .map(|rest| (rest, divisor))
        })
        .unwrap_or((trimmed, 1.0));

    let normalized: String = digits.chars().filter(|c| *c != ',').collect();
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return None;
    }

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value * multiplier)
}

/// Magnitudes from here on are written without grouping; their cents would
/// not fit in a `u128`.
const MAX_GROUPED: f64 = 1e36;

/// Format an amount in full with comma thousands separators.
///
/// Rounds to cents and drops trailing zero decimals, so `1500` becomes
/// `1,500` and `1234.5` becomes `1,234.5`. Values of `1e36` and beyond
/// are written plainly.
#[must_use]
pub fn format_grouped(amount: f64) -> String {
    if !amount.is_finite() || amount.abs() >= MAX_GROUPED {
        return amount.to_string();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u128;
    let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100);

    match cents % 100 {
        0 => format!("{sign}{whole}"),
        frac if frac % 10 == 0 => format!("{sign}{whole}.{}", frac / 10),
        frac => format!("{sign}{whole}.{frac:02}"),
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_compact_tier_boundaries() {
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(1000.0), "1k");
        assert_eq!(format_compact(1500.0), "1.5k");
        assert_eq!(format_compact(1_000_000.0), "1M");
        assert_eq!(format_compact(1_000_000_000.0), "1B");
    }

    #[test]
    fn test_format_compact_below_thousand() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(42.0), "42");
        assert_eq!(format_compact(12.5), "12.5");
    }

    #[test]
    fn test_format_compact_truncates() {
        assert_eq!(format_compact(1599.0), "1.5k");
        assert_eq!(format_compact(1050.0), "1.0k");
        assert_eq!(format_compact(999_999.0), "999.9k");
        assert_eq!(format_compact(2_750_000.0), "2.7M");
    }

    #[test]
    fn test_format_compact_large_multiples() {
        assert_eq!(format_compact(250_000.0), "250k");
        assert_eq!(format_compact(40_000_000.0), "40M");
        assert_eq!(format_compact(3_000_000_000_000.0), "3000B");
    }

    #[test]
    fn test_format_compact_negative_and_non_finite() {
        assert_eq!(format_compact(-1500.0), "-1.5k");
        assert_eq!(format_compact(f64::NAN), "NaN");
        assert_eq!(format_compact(f64::INFINITY), "inf");
    }

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("200"), Some(200.0));
        assert_eq!(parse_amount("  98 "), Some(98.0));
        assert_eq!(parse_amount("12.75"), Some(12.75));
    }

    #[test]
    fn test_parse_amount_commas() {
        assert_eq!(parse_amount("1,500"), Some(1500.0));
        assert_eq!(parse_amount("1,234,567.5"), Some(1_234_567.5));
    }

    #[test]
    fn test_parse_amount_suffixes() {
        assert_eq!(parse_amount("2.5k"), Some(2500.0));
        assert_eq!(parse_amount("1k"), Some(1000.0));
        assert_eq!(parse_amount("3M"), Some(3_000_000.0));
        assert_eq!(parse_amount("2B"), Some(2_000_000_000.0));
        assert_eq!(parse_amount("1,200k"), Some(1_200_000.0));
    }

    #[test]
    fn test_parse_amount_suffix_is_case_sensitive() {
        assert_eq!(parse_amount("2K"), None);
        assert_eq!(parse_amount("2m"), None);
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("k"), None);
        assert_eq!(parse_amount("$100"), None);
        assert_eq!(parse_amount("TBD"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1500.0), "1,500");
        assert_eq!(format_grouped(1_234_567.0), "1,234,567");
        assert_eq!(format_grouped(1234.5), "1,234.5");
        assert_eq!(format_grouped(0.05), "0.05");
        assert_eq!(format_grouped(-2500.25), "-2,500.25");
    }

    #[test]
    fn test_format_grouped_huge_values() {
        assert_eq!(format_grouped(1e40), 1e40.to_string());
        assert_eq!(format_grouped(-1e40), (-1e40).to_string());
        assert_eq!(parse_amount(&format_grouped(1e40)), Some(1e40));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(1), "1");
        assert_eq!(group_thousands(100), "100");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    proptest! {
        #[test]
        fn prop_small_amounts_round_trip(n in 0u32..1000) {
            let amount = f64::from(n);
            prop_assert_eq!(parse_amount(&format_compact(amount)), Some(amount));
        }

        #[test]
        fn prop_exact_tier_multiples_round_trip(k in 1u32..1000, tier in 0usize..3) {
            let (divisor, _) = TIERS[tier];
            let amount = f64::from(k) * divisor;
            prop_assert_eq!(parse_amount(&format_compact(amount)), Some(amount));
        }

        #[test]
        fn prop_grouped_round_trip(cents in 0u32..u32::MAX) {
            let amount = f64::from(cents) / 100.0;
            prop_assert_eq!(parse_amount(&format_grouped(amount)), Some(amount));
        }
    }
}
