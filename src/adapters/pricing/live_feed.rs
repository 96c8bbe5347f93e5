//! Live price feed with curated fallback.
//!
//! Fetches city-specific ex-showroom prices from public listing pages
//! and overlays them on the curated table. Any row whose live fetch
//! fails keeps its curated price, so a sheet is always produced; the
//! feed degrades, it does not error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use futures::stream::{self, StreamExt};

use crate::domain::foundation::Timestamp;
use crate::domain::pricing::canonical_city;

use super::static_table::{StaticPriceTable, CURATED_PRICES};

/// Per-city sheet time-to-live: thirty minutes.
const SHEET_TTL: Duration = Duration::from_secs(30 * 60);

/// Concurrent live fetches per refresh, to stay under listing-site
/// rate limits.
const FETCH_BATCH: usize = 4;

/// Where a row's price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    Live,
    Curated,
}

/// A priced row of the city sheet.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedCar {
    pub name: String,
    pub fuel_label: String,
    pub segment: String,
    pub base_price: u64,
    pub range_label: String,
    pub power_label: String,
    pub popular: bool,
    pub source: PriceSource,
}

/// A full city price sheet.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSheet {
    pub city: String,
    pub cars: Vec<PricedCar>,
    pub live_count: usize,
    pub total_count: usize,
    pub fetched_at: Option<Timestamp>,
}

/// Listing-page slugs per curated car.
const CAR_SLUGS: &[(&str, &str, &str)] = &[
    ("Tata Nexon EV", "tata-cars", "nexon-ev"),
    ("MG ZS EV", "mg-cars", "zs-ev"),
    ("Hyundai Creta Electric", "hyundai-cars", "creta-ev"),
    ("BYD Atto 3", "byd-cars", "atto-3"),
    ("Tata Punch EV", "tata-cars", "punch-ev"),
    ("Maruti Suzuki Baleno", "maruti-suzuki-cars", "baleno"),
    ("Hyundai i20", "hyundai-cars", "elite-i20"),
    ("Honda City", "honda-cars", "city"),
    ("Toyota Innova HyCross", "toyota-cars", "innova-hycross"),
    ("Maruti Grand Vitara Hybrid", "maruti-suzuki-cars", "grand-vitara"),
    ("Hyundai Creta", "hyundai-cars", "creta"),
    ("Kia Seltos", "kia-cars", "seltos"),
    ("Tata Harrier", "tata-cars", "harrier"),
    ("Mahindra XUV700", "mahindra-cars", "xuv700"),
    ("Maruti Suzuki Swift", "maruti-suzuki-cars", "swift"),
    ("Tata Curvv EV", "tata-cars", "curvv-ev"),
];

/// Listing-page city slugs.
const CITY_SLUGS: &[(&str, &str)] = &[
    ("New Delhi", "delhi"),
    ("Delhi", "delhi"),
    ("Mumbai", "mumbai"),
    ("Bangalore", "bangalore"),
    ("Chennai", "chennai"),
    ("Hyderabad", "hyderabad"),
    ("Pune", "pune"),
    ("Kolkata", "kolkata"),
    ("Jaipur", "jaipur"),
    ("Ahmedabad", "ahmedabad"),
    ("Lucknow", "lucknow"),
];

static LAKH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:₹|Rs\.?)\s*([\d.]+)\s*Lakh").unwrap());
static JSON_PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""price"\s*:\s*"?(\d+)"?"#).unwrap());
static DATA_PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data-price="(\d+)""#).unwrap());
static GROUPED_INR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:₹|Rs\.?)\s*([\d,]+)[\s<"]"#).unwrap());

/// Sanity window for extracted absolute prices.
const MIN_PLAUSIBLE_PRICE: u64 = 100_000;
const MAX_PLAUSIBLE_PRICE: u64 = 50_000_000;

/// Extracts a price from listing-page HTML.
///
/// Patterns are tried in order of reliability: lakh notation, embedded
/// JSON price, data attribute, grouped rupee amount.
pub(crate) fn extract_price(html: &str) -> Option<u64> {
    if let Some(caps) = LAKH_PATTERN.captures(html) {
        if let Ok(lakhs) = caps[1].parse::<f64>() {
            if lakhs > 0.0 && lakhs < 500.0 {
                return Some((lakhs * 100_000.0).round() as u64);
            }
        }
    }

    if let Some(caps) = JSON_PRICE_PATTERN.captures(html) {
        if let Ok(price) = caps[1].parse::<u64>() {
            if (MIN_PLAUSIBLE_PRICE..MAX_PLAUSIBLE_PRICE).contains(&price) {
                return Some(price);
            }
        }
    }

    if let Some(caps) = DATA_PRICE_PATTERN.captures(html) {
        if let Ok(price) = caps[1].parse::<u64>() {
            if (MIN_PLAUSIBLE_PRICE..MAX_PLAUSIBLE_PRICE).contains(&price) {
                return Some(price);
            }
        }
    }

    if let Some(caps) = GROUPED_INR_PATTERN.captures(html) {
        if let Ok(price) = caps[1].replace(',', "").parse::<u64>() {
            if (MIN_PLAUSIBLE_PRICE..MAX_PLAUSIBLE_PRICE).contains(&price) {
                return Some(price);
            }
        }
    }

    None
}

/// City price sheets backed by live listing pages.
pub struct LivePriceFeed {
    client: reqwest::Client,
    base_url: String,
    sheets: RwLock<HashMap<String, (Instant, Arc<PriceSheet>)>>,
    table: StaticPriceTable,
}

impl LivePriceFeed {
    /// Creates a feed against a listing site base URL.
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
            sheets: RwLock::new(HashMap::new()),
            table: StaticPriceTable,
        }
    }

    /// The curated sheet, served instantly with no network involved.
    pub fn curated_sheet(&self, city: &str) -> PriceSheet {
        let cars: Vec<PricedCar> = CURATED_PRICES
            .iter()
            .map(|row| PricedCar {
                name: row.name.to_string(),
                fuel_label: row.fuel_label.to_string(),
                segment: row.segment.to_string(),
                base_price: row.base_price,
                range_label: row.range_label.to_string(),
                power_label: row.power_label.to_string(),
                popular: row.popular,
                source: PriceSource::Curated,
            })
            .collect();
        PriceSheet {
            city: canonical_city(city).to_string(),
            total_count: cars.len(),
            live_count: 0,
            fetched_at: None,
            cars,
        }
    }

    fn city_slug(city: &str) -> &'static str {
        CITY_SLUGS
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, slug)| *slug)
            .unwrap_or("delhi")
    }

    async fn fetch_live_price(&self, car_name: &str, city: &str) -> Option<u64> {
        let (_, brand, model) = CAR_SLUGS.iter().find(|(name, _, _)| *name == car_name)?;
        let url = format!(
            "{}/{}/{}/price-in-{}/",
            self.base_url,
            brand,
            model,
            Self::city_slug(city)
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!(car = car_name, status = %response.status(), "price page rejected");
                return None;
            }
            Err(err) => {
                debug!(car = car_name, error = %err, "price page unreachable");
                return None;
            }
        };

        let html = response.text().await.ok()?;
        extract_price(&html)
    }

    /// Returns the price sheet for a city, fetching live prices at most
    /// once per TTL window. Rows whose fetch fails keep their curated
    /// price.
    pub async fn city_prices(&self, city: &str) -> Arc<PriceSheet> {
        let city = canonical_city(city);

        {
            let sheets = self.sheets.read().await;
            if let Some((taken_at, sheet)) = sheets.get(city) {
                if taken_at.elapsed() < SHEET_TTL {
                    debug!(city, "price sheet cache hit");
                    return sheet.clone();
                }
            }
        }

        let mut sheet = self.curated_sheet(city);
        let live_prices: Vec<(usize, Option<u64>)> = stream::iter(
            sheet
                .cars
                .iter()
                .enumerate()
                .map(|(idx, car)| {
                    let name = car.name.clone();
                    async move { (idx, self.fetch_live_price(&name, city).await) }
                })
                .collect::<Vec<_>>(),
        )
        .buffer_unordered(FETCH_BATCH)
        .collect()
        .await;

        for (idx, price) in live_prices {
            if let Some(price) = price.filter(|p| *p > MIN_PLAUSIBLE_PRICE) {
                sheet.cars[idx].base_price = price;
                sheet.cars[idx].source = PriceSource::Live;
                sheet.live_count += 1;
            }
        }
        sheet.fetched_at = Some(Timestamp::now());

        if sheet.live_count > 0 {
            info!(city, live = sheet.live_count, "live prices applied");
        } else {
            warn!(city, "live feed unavailable, serving curated prices");
        }

        let sheet = Arc::new(sheet);
        let mut sheets = self.sheets.write().await;
        sheets.insert(city.to_string(), (Instant::now(), sheet.clone()));
        sheet
    }

    /// Base-price lookup against the curated table.
    pub fn table(&self) -> StaticPriceTable {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── Price Extraction ─────────────────────────────────────────────

    #[test]
    fn extracts_lakh_notation() {
        let html = "<span>₹ 14.79 Lakh onwards</span>";
        assert_eq!(extract_price(html), Some(1_479_000));
    }

    #[test]
    fn extracts_rs_lakh_notation() {
        let html = "Price: Rs. 21.88 Lakh (ex-showroom)";
        assert_eq!(extract_price(html), Some(2_188_000));
    }

    #[test]
    fn rejects_implausible_lakh_values() {
        assert_eq!(extract_price("₹ 900 Lakh"), None);
    }

    #[test]
    fn extracts_embedded_json_price() {
        let html = r#"<script>{"@type":"Car","price":"1479000"}</script>"#;
        assert_eq!(extract_price(html), Some(1_479_000));
    }

    #[test]
    fn extracts_data_price_attribute() {
        let html = r#"<div data-price="999000">Punch EV</div>"#;
        assert_eq!(extract_price(html), Some(999_000));
    }

    #[test]
    fn extracts_grouped_rupee_amount() {
        let html = "<b>₹ 6,49,000 </b>";
        assert_eq!(extract_price(html), Some(649_000));
    }

    #[test]
    fn lakh_notation_wins_over_later_patterns() {
        let html = r#"₹ 14.79 Lakh <div data-price="999000"></div>"#;
        assert_eq!(extract_price(html), Some(1_479_000));
    }

    #[test]
    fn garbage_html_extracts_nothing() {
        assert_eq!(extract_price("<html>no prices here</html>"), None);
        assert_eq!(extract_price(""), None);
    }

    // ─── Sheet Behaviour ──────────────────────────────────────────────

    #[test]
    fn curated_sheet_covers_the_whole_table() {
        let feed = LivePriceFeed::new("http://127.0.0.1:9", Duration::from_millis(100));
        let sheet = feed.curated_sheet("Mumbai");
        assert_eq!(sheet.total_count, CURATED_PRICES.len());
        assert_eq!(sheet.live_count, 0);
        assert!(sheet.cars.iter().all(|c| c.source == PriceSource::Curated));
    }

    #[test]
    fn curated_sheet_canonicalizes_the_city() {
        let feed = LivePriceFeed::new("http://127.0.0.1:9", Duration::from_millis(100));
        assert_eq!(feed.curated_sheet("bengaluru").city, "Bangalore");
    }

    #[tokio::test]
    async fn unreachable_feed_falls_back_to_curated_prices() {
        // Port 9 (discard) refuses connections immediately.
        let feed = LivePriceFeed::new("http://127.0.0.1:9", Duration::from_millis(200));
        let sheet = feed.city_prices("Mumbai").await;

        assert_eq!(sheet.live_count, 0);
        assert_eq!(sheet.total_count, CURATED_PRICES.len());
        assert!(sheet.cars.iter().all(|c| c.source == PriceSource::Curated));
        assert!(sheet.fetched_at.is_some());
    }

    #[tokio::test]
    async fn second_request_within_ttl_reuses_the_sheet() {
        let feed = LivePriceFeed::new("http://127.0.0.1:9", Duration::from_millis(200));
        let first = feed.city_prices("Pune").await;
        let second = feed.city_prices("Pune").await;
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn unknown_city_slug_defaults_to_delhi() {
        assert_eq!(LivePriceFeed::city_slug("Atlantis"), "delhi");
        assert_eq!(LivePriceFeed::city_slug("Mumbai"), "mumbai");
    }
}
