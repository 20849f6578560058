use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use transformation_assistant::adapters::ai::OpenAIGateway;
use transformation_assistant::adapters::http::{build_router, ScannerAppState};
use transformation_assistant::config::AppConfig;
use transformation_assistant::ports::LlmGateway;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let scorer = Arc::new(config.scanner.build_scorer()?);
    tracing::info!(
        high_keywords = scorer.keywords().high().len(),
        medium_keywords = scorer.keywords().medium().len(),
        high_threshold = scorer.thresholds().high,
        medium_threshold = scorer.thresholds().medium,
        "Risk scorer ready"
    );

    if !config.ai.has_openai() {
        tracing::warn!("No OpenAI API key configured; guidance endpoints will return errors");
    }
    let gateway: Arc<dyn LlmGateway> = Arc::new(OpenAIGateway::new(config.ai.openai_config())?);
    let info = gateway.gateway_info();
    tracing::info!(gateway = %info.name, model = %info.model, "LLM gateway ready");

    let state = ScannerAppState::new(scorer, gateway, config.ai.model.clone());
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Starting Transformation Assistant");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
