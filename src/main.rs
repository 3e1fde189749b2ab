use anyhow::Context;

mod app;
mod auth;
mod config;
mod dashboard;
mod error;
mod projects;
mod seed;
mod state;
mod users;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "smartadmin=debug,axum=info,tower_http=info".to_string());
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

    // An unreachable database or a failed migration is fatal; only the
    // optional seeding step below is allowed to fail softly.
    let app_state = AppState::init().await?;
    sqlx::migrate!("./migrations")
        .run(&app_state.db)
        .await
        .context("run migrations")?;

    let seed_requested = std::env::var("SEED_DATA")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if seed_requested {
        if let Err(e) = seed::seed_data(&app_state.db).await {
            tracing::warn!(error = %e, "seeding failed, continuing without sample data");
        }
    }

    let config = app_state.config.clone();
    let app = app::build_app(app_state);
    app::serve(app, &config).await
}
