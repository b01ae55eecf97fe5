use chrono::{Duration, Utc};

use quizmark_server::{app_state::AppState, config::Config, errors::AppResult};

/// Connects, ensures indexes and re-links results that a crashed or
/// cancelled submission left unlinked.
#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    config.validate_config()?;

    let window = Duration::minutes(config.reconcile_window_minutes);
    let state = AppState::new(config).await?;

    let since = Utc::now() - window;
    log::info!("Reconciling results submitted since {}", since);

    let report = state.submission_service.reconcile_since(since).await?;
    if report.failed > 0 {
        log::warn!(
            "Reconciliation linked {} result(s), {} still unlinked",
            report.linked,
            report.failed
        );
    } else {
        log::info!("Reconciliation linked {} result(s)", report.linked);
    }

    Ok(())
}
