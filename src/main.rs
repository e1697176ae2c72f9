use postcode_search::{app, utils::app_config::AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    info!(
        "Starting postcode search on {} (lookup host {}, suggestions scoped to {})",
        config.listen_addr, config.lookup_host, config.suggestion_country
    );

    let app = app::gen_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
