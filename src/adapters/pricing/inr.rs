//! Indian rupee display formatting.

use crate::ports::CurrencyFormatter;

/// Formats rupee amounts the way Indian auto listings print them:
/// lakh notation from ₹1,00,000 upward, Indian digit grouping below.
#[derive(Debug, Clone, Copy, Default)]
pub struct InrFormatter;

/// Groups digits Indian-style: last three together, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut end = head.len();
    while end > 2 {
        pairs.push(&head[end - 2..end]);
        end -= 2;
    }
    pairs.push(&head[..end]);
    pairs.reverse();
    format!("{},{}", pairs.join(","), tail)
}

impl CurrencyFormatter for InrFormatter {
    fn format(&self, value: i64) -> String {
        if value < 0 {
            return format!("-{}", self.format(-value));
        }
        if value >= 100_000 {
            return format!("₹{:.2} L", value as f64 / 100_000.0);
        }
        format!("₹{}", group_indian(value as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lakh_notation_from_one_lakh_up() {
        let f = InrFormatter;
        assert_eq!(f.format(100_000), "₹1.00 L");
        assert_eq!(f.format(1_479_000), "₹14.79 L");
        assert_eq!(f.format(2_599_000), "₹25.99 L");
    }

    #[test]
    fn small_amounts_use_indian_grouping() {
        let f = InrFormatter;
        assert_eq!(f.format(0), "₹0");
        assert_eq!(f.format(999), "₹999");
        assert_eq!(f.format(1_000), "₹1,000");
        assert_eq!(f.format(99_999), "₹99,999");
    }

    #[test]
    fn negative_amounts_carry_a_leading_sign() {
        let f = InrFormatter;
        assert_eq!(f.format(-50_000), "-₹50,000");
        assert_eq!(f.format(-200_000), "-₹2.00 L");
    }

    #[test]
    fn grouping_pairs_after_the_last_three() {
        assert_eq!(group_indian(12_345_678), "1,23,45,678");
        assert_eq!(group_indian(1_234), "1,234");
        assert_eq!(group_indian(12_345), "12,345");
    }

    #[test]
    fn format_or_na_integrates_with_the_port_default() {
        let f = InrFormatter;
        assert_eq!(f.format_or_na(Some(649_000)), "₹6.49 L");
        assert_eq!(f.format_or_na(None), "N/A");
    }
}
