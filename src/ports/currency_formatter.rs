//! Currency formatting port.

/// Display formatting for rupee amounts.
///
/// Used purely for the `_fmt` fields of payloads; every payload also
/// carries the raw numeric value so consumers never need to parse the
/// formatted form back.
pub trait CurrencyFormatter: Send + Sync {
    /// Formats a rupee amount for display.
    fn format(&self, value: i64) -> String;

    /// Formats an optional amount, rendering unknown values as "N/A".
    fn format_or_na(&self, value: Option<u64>) -> String {
        match value {
            Some(v) => self.format(v as i64),
            None => "N/A".to_string(),
        }
    }
}
