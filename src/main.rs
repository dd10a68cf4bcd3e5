//! Punchclock Server — Attendance Tracking Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use punchclock_core::config::AppConfig;
use punchclock_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("PUNCHCLOCK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Punchclock v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = punchclock_database::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    punchclock_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize auth system ───────────────────────────
    // FieldCipher construction is the startup key check; a missing or
    // malformed encryption key aborts here before any request is served.
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(punchclock_auth::password::PasswordHasher::new(&config.auth));
    let field_cipher = Arc::new(punchclock_auth::crypto::FieldCipher::new(&config.auth)?);
    let token_encoder = Arc::new(punchclock_auth::token::TokenEncoder::new(&config.auth));
    let token_decoder = Arc::new(punchclock_auth::token::TokenDecoder::new(&config.auth));

    // ── Step 3: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(punchclock_database::repositories::UserRepository::new(
        db.pool().clone(),
    ));
    let attendance_repo = Arc::new(
        punchclock_database::repositories::AttendanceRepository::new(db.pool().clone()),
    );

    // ── Step 4: Initialize services ──────────────────────────────
    let account_service = Arc::new(punchclock_service::AccountService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&field_cipher),
        Arc::clone(&token_encoder),
    ));
    let attendance_service = Arc::new(punchclock_service::AttendanceService::new(Arc::clone(
        &attendance_repo,
    )));
    tracing::info!("Services initialized");

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app_state = punchclock_api::AppState {
        config: Arc::new(config.clone()),
        db: db.clone(),
        token_decoder: Arc::clone(&token_decoder),
        account_service: Arc::clone(&account_service),
        attendance_service: Arc::clone(&attendance_service),
    };

    let app = punchclock_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Punchclock server listening on {}", addr);

    // ── Step 6: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await;
    tracing::info!("Punchclock server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
