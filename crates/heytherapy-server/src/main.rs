use std::sync::Arc;

use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use heytherapy_bedrock::client::build_sdk_config;
use heytherapy_bedrock::models::select_model;
use heytherapy_bedrock::report::BedrockReportGenerator;
use heytherapy_server::config::ServerConfig;
use heytherapy_server::router;
use heytherapy_server::state::AppState;
use heytherapy_storage::memory::InMemoryStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // A missing .env file is fine; the variables may come from the host.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env().wrap_err("cannot start HeyTherapy")?;
    tracing::info!(
        bind = %config.bind,
        region = %config.region,
        credential = %config.credentials.hint(),
        "starting heytherapy"
    );

    let sdk_config = build_sdk_config(&config.region, &config.credentials).await;
    let selection = select_model(&sdk_config, &config.model_preferences).await;
    let reports = BedrockReportGenerator::new(&sdk_config, selection);
    let model = reports.selection().clone();

    let state = AppState::new(Arc::new(InMemoryStore::new()), Arc::new(reports), model);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(addr = %config.bind, "listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
