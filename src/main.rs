//! Form Relay API
//!
//! Receives the storefront's contact, order and review forms and forwards
//! each one as a plain-text email to the operator mailbox.
//!
//! Every request is independent: validate, format, one delivery attempt,
//! respond. Nothing is stored and nothing is retried.

mod config;
mod error;
mod extract;
mod mailer;
mod models;
mod notification;
mod routes;
mod state;

use crate::config::Settings;
use crate::mailer::{Mailer, SmtpMailer};
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("🚀 Starting Form Relay...");

    // Load configuration
    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");
    info!("   Notifications go to {}", settings.mail.operator_address);

    // Build the mail transport once; every request shares it
    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&settings.mail)?);
    if !verify_mailer(mailer.as_ref(), &settings.mail.smtp_host).await {
        warn!("⚠️  Starting anyway; submissions will fail until SMTP is reachable");
    }

    let state = Arc::new(AppState::new(
        mailer,
        settings.mail.operator_address.clone(),
    ));

    // Build the router
    let app = create_router(state, &settings.cors);

    // Create socket address
    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("   CORS origin: {}", settings.cors.allowed_origin);
    info!("");
    info!("📚 API Endpoints:");
    info!("   POST /submit-contact           - Contact form");
    info!("   POST /submit-order             - Order enquiry");
    info!("   POST /submit-review            - Customer review");
    info!("   GET  /health                   - Liveness probe");
    info!("");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,form_relay=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Check the SMTP account once at startup.
///
/// A failure is logged but does not stop the server; each submission will
/// then report its own delivery error.
async fn verify_mailer(mailer: &dyn Mailer, smtp_host: &str) -> bool {
    match mailer.verify().await {
        Ok(()) => {
            info!("✅ Mail transport ready ({})", smtp_host);
            true
        }
        Err(e) => {
            error!("❌ Mail transport verification error: {}", e);
            false
        }
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
