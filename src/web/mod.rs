//! HTTP surface: the entry form on `/` and the listing on `/success`.

pub mod handlers;
pub mod listing;
pub mod templates;

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::forms::csrf::CsrfGuard;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

pub const FORM_PATH: &str = "/";
pub const SUCCESS_PATH: &str = "/success";

/// Everything a request handler needs. Cloned per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DbPool,
    pub csrf: CsrfGuard,
}

impl AppState {
    pub fn new(db: DbPool, csrf: CsrfGuard) -> Self {
        Self { db, csrf }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            FORM_PATH,
            get(handlers::show_form).post(handlers::add_item),
        )
        .route(SUCCESS_PATH, get(handlers::success))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: AppState, addr: &str) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("cannot bind {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, db = %state.db.path().display(), "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
