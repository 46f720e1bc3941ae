use anyhow::Context;

use bmcc_jobs_api::{app, config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "bmcc_jobs_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env().context("load configuration")?;
    tracing::info!(
        database = %config.database.path.display(),
        email_suffix = %config.allowed_email_suffix,
        "configuration loaded"
    );

    // No listener is bound unless the users table is in place.
    let app_state = match AppState::init(config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = ?e, "failed to set up database, exiting");
            return Err(e);
        }
    };

    let config = app_state.config.clone();
    let app = app::build_app(app_state);
    app::serve(app, &config).await
}
