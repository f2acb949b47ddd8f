use campaigns_server::config::ServerConfig;
use campaigns_server::{app, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let bind_addr = config.bind_addr();

    let app = app(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, base_url = %config.public_base_url, "campaign server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
