use dotenvy::dotenv;
use std::sync::Arc;
use storefront_admin::{
    api::{HttpStorefrontApi, ProductQuery, StorefrontApi, sign_in},
    config::{catalog, settings},
    core::{admin::AdminState, dashboard::{self, format_currency}, preview::FsReader, pricing::{PriceTag, rating_label}},
    errors::Result,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables can also be set externally
    dotenv().ok();

    // 3. Load the catalog configuration and seed the admin state
    let config_path = settings::catalog_config_path();
    let config = catalog::load_config(&config_path)
        .inspect(|_| info!("Loaded catalog configuration from {}", config_path.display()))
        .inspect_err(|e| error!("Failed to load catalog configuration: {}", e))?;
    let state = AdminState::from_config(&config, Arc::new(FsReader))?;

    // 4. Report the dashboard
    let stats = state.stats();
    info!(
        revenue = %stats.revenue_label(),
        orders = stats.total_orders,
        books = stats.total_books,
        users = stats.active_users,
        "Dashboard"
    );
    for order in state.recent_orders() {
        info!(
            "{} {} {} {} ({:?})",
            order.id,
            order.customer,
            order.date,
            format_currency(order.total),
            order.status.badge_variant()
        );
    }
    if let Some(best) = dashboard::best_month(state.sales()) {
        info!("Best month: {} ({})", best.month, dashboard::sales_axis_label(best.total));
    }
    for book in state.visible_books("") {
        let tag = PriceTag::for_product(&book.product);
        let rating = rating_label(book.product.rating).unwrap_or_default();
        info!("#{} {} by {}: {} {}", book.product.id, book.title(), book.author, tag.label(), rating);
    }

    // 5. Check the storefront API if credentials are configured
    let Some(credentials) = settings::login_credentials() else {
        info!("STOREFRONT_EMAIL/STOREFRONT_PASSWORD not set, skipping API check.");
        return Ok(());
    };
    let api = HttpStorefrontApi::new(settings::api_url());
    let session = sign_in(&api, &credentials)
        .await
        .inspect_err(|e| error!("Login failed: {}", e))?;
    if session.is_expired(chrono::Utc::now()) {
        warn!("Storefront issued an already expired token");
    }

    match api.get_products(&ProductQuery::default()).await {
        Ok(products) => {
            info!("{} ({} products)", products.message, products.data.len());
            for product in &products.data {
                let tag = PriceTag::for_product(product);
                info!("{}: {} {:?}", product.title, tag.label(), tag.badges);
            }
        }
        Err(e) => warn!("Could not list products: {}", e),
    }

    Ok(())
}
