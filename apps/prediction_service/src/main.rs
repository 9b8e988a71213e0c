use std::sync::Arc;

use anyhow::Context;
use astro_llm::{LLMClient, LLMProvider};
use dotenvy::dotenv;
use prediction_service::{
    app_module::AppState,
    app_router::build_app,
    config::ServiceConfig,
    logging::{init_tracing, install_panic_logger},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = ServiceConfig::from_env().context("invalid service configuration")?;
    init_tracing(config.is_dev());
    install_panic_logger();

    let llm = LLMClient::new(LLMProvider::OpenAICompatible, config.llm.clone());
    let state = AppState::new(Arc::new(llm));

    let app = build_app(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("unable to bind port {}", config.port))?;

    tracing::info!("Server running on port {}", config.port);
    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
