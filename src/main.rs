use anyhow::Result;
use launchpad::{start_web_server, ConfigManager};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("launchpad=info,rocket::server=off")),
        )
        .init();

    let config = ConfigManager::load()?;

    info!("Starting LaunchPad.AI career assistant");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );
    info!(
        "Database: {}",
        config.environment.database_path.display()
    );
    info!(
        "Documents: {}",
        config.environment.documents_path.display()
    );

    start_web_server(config).await
}
