use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use resume_intake::application::services::IntakeSessions;
use resume_intake::infrastructure::observability::{TracingConfig, init_tracing};
use resume_intake::infrastructure::storage::EphemeralStoreFactory;
use resume_intake::infrastructure::text_processing::ExtractorFactory;
use resume_intake::presentation::{AppState, Environment, Settings, create_router};

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let extractor = ExtractorFactory::create(&settings.intake)?;
    let store = EphemeralStoreFactory::create(&settings.storage)?;
    let sessions = Arc::new(
        IntakeSessions::new(extractor, store, settings.intake.max_upload_bytes)
            .with_idle_ttl(Duration::from_secs(settings.intake.session_idle_ttl_secs)),
    );

    let sweeper = Arc::clone(&sessions);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            sweeper.evict_idle().await;
        }
    });

    let router = create_router(AppState::new(sessions));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(
        %addr,
        max_upload_bytes = settings.intake.max_upload_bytes,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
