//! Greenlane server binary.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use greenlane::adapters::catalog::CachedVehicleCatalog;
use greenlane::adapters::http::{api_routes, ApiState};
use greenlane::adapters::postgres::PostgresVehicleStore;
use greenlane::adapters::pricing::{InrFormatter, LivePriceFeed, StaticPriceTable};
use greenlane::application::handlers::{
    BestEvUnderBudgetHandler, CalculateCostsHandler, CompareVehiclesHandler,
    FindEcoFriendlyHandler, GenerateInsightsHandler,
};
use greenlane::config::AppConfig;
use greenlane::ports::{CurrencyFormatter, PriceLookup, VehicleCatalog, VehicleStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    let store: Arc<dyn VehicleStore> = Arc::new(PostgresVehicleStore::new(pool));
    let prices: Arc<dyn PriceLookup> = Arc::new(StaticPriceTable);
    let catalog: Arc<dyn VehicleCatalog> = Arc::new(CachedVehicleCatalog::with_ttl(
        store,
        prices,
        config.catalog.ttl(),
    ));
    let formatter: Arc<dyn CurrencyFormatter> = Arc::new(InrFormatter);
    let price_feed = Arc::new(LivePriceFeed::new(
        config.pricing.feed_base_url.clone(),
        config.pricing.feed_timeout(),
    ));

    let state = ApiState {
        compare: Arc::new(CompareVehiclesHandler::new(
            catalog.clone(),
            formatter.clone(),
        )),
        eco_search: Arc::new(FindEcoFriendlyHandler::new(
            catalog.clone(),
            formatter.clone(),
        )),
        costs: Arc::new(CalculateCostsHandler::new(formatter.clone())),
        ev_shortlist: Arc::new(BestEvUnderBudgetHandler::new(
            catalog.clone(),
            formatter.clone(),
        )),
        insights: Arc::new(GenerateInsightsHandler::new(formatter.clone())),
        price_feed,
        formatter,
    };

    let app = api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(CompressionLayer::new());

    let addr = config.server.socket_addr()?;
    info!(%addr, "greenlane listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
