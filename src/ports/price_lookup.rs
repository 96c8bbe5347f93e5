//! Base-price lookup port.

use async_trait::async_trait;

/// Price resolution for records that carry no price of their own.
///
/// Consulted only during catalog normalization; `None` means the price
/// stays unknown, which downstream filters treat as zero.
#[async_trait]
pub trait PriceLookup: Send + Sync {
    /// Looks up an ex-showroom base price in ₹ by vehicle name.
    async fn lookup_base_price(&self, name: &str) -> Option<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_lookup_is_object_safe() {
        fn _accepts_dyn(_lookup: &dyn PriceLookup) {}
    }
}
