use product_api::{Config, Store};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let store = Store::connect(&config.database_url, config.max_connections).await?;
    tracing::info!(database = %config.database_url, "store ready");

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    product_api::run(listener, store).await?;
    Ok(())
}
