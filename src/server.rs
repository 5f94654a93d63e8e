//! HTTP listener, session layer wiring, and request handlers.

use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tokio::signal;
use tokio::task::AbortHandle;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{ExpiredDeletion, Expiry, Session, SessionManagerLayer};

use crate::config::Config;
use crate::db::SqlxPool;
use crate::error::AdminError;
use crate::session::SqlxSessionStore;

/// Sessions expire after this much inactivity.
const SESSION_EXPIRY: Duration = Duration::minutes(20);
/// How often the background task sweeps expired sessions.
const EXPIRED_SWEEP_PERIOD: tokio::time::Duration = tokio::time::Duration::from_secs(60);
/// Cookies are issued without the `Secure` attribute so the backend also
/// works behind plain-HTTP development setups.
const SESSION_COOKIE_SECURE: bool = false;

#[derive(Serialize, Deserialize, Default)]
struct Counter(usize);

/// Session round-trip check: greets with a per-session request counter.
async fn index(session: Session) -> Result<String, AdminError> {
    let counter: Counter = session.get("counter").await?.unwrap_or_default();
    session.insert("counter", Counter(counter.0 + 1)).await?;
    Ok(format!("Hello {}!", counter.0))
}

/// Build the application router.
pub fn app(session_layer: SessionManagerLayer<SqlxSessionStore>) -> Router {
    Router::new().route("/", get(index)).layer(session_layer)
}

/// Run the HTTP server until interrupted.
pub async fn run(config: &Config, pool: SqlxPool) -> Result<(), AdminError> {
    let store = SqlxSessionStore::new(&pool);
    store.migrate().await?;

    let deletion_task =
        tokio::task::spawn(store.clone().continuously_delete_expired(EXPIRED_SWEEP_PERIOD));

    let session_layer = SessionManagerLayer::new(store)
        .with_secure(SESSION_COOKIE_SECURE)
        .with_expiry(Expiry::OnInactivity(SESSION_EXPIRY));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(host = %config.host, port = config.port, "listening");

    axum::serve(listener, app(session_layer))
        .with_graceful_shutdown(shutdown_signal(deletion_task.abort_handle()))
        .await?;

    // The deletion task is aborted on shutdown; cancellation is not an error.
    match deletion_task.await {
        Ok(result) => result?,
        Err(e) if e.is_cancelled() => {}
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM and abort the expired-session sweeper.
async fn shutdown_signal(abort_handle: AbortHandle) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to register signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { abort_handle.abort() },
        _ = terminate => { abort_handle.abort() },
    }
}
