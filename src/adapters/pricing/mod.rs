//! Pricing adapter module.

mod inr;
mod live_feed;
mod static_table;

pub use inr::InrFormatter;
pub use live_feed::{LivePriceFeed, PriceSheet, PriceSource, PricedCar};
pub use static_table::{CuratedPrice, StaticPriceTable};
