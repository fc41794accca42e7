//! REST service over the JSON data file.
//!
//! Conventional CRUD routes (`/employees`, `/employees/:id`) plus report,
//! dashboard and export endpoints. Any other path falls back to the static
//! front-end directory when one is configured.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::SystemTime;

use axum::{
    Router,
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::JsonStore;

mod handlers;
mod models;

use handlers::{
    create_employee, dashboard, export_employee, export_report, get_employee, health,
    list_employees, not_found, patch_employee, replace_employee, report_summary,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<JsonStore>>,
    pub config: Arc<Config>,
    pub started_at: SystemTime,
}

impl AppState {
    pub fn new(store: JsonStore, config: Config) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            config: Arc::new(config),
            started_at: SystemTime::now(),
        }
    }

    pub(crate) fn lock_store(&self) -> AppResult<MutexGuard<'_, JsonStore>> {
        self.store
            .lock()
            .map_err(|_| AppError::Other("data store lock poisoned".into()))
    }
}

/// Build the application router (also used directly by tests).
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:id",
            get(get_employee).put(replace_employee).patch(patch_employee),
        )
        .route("/employees/:id/export", get(export_employee))
        .route("/reports/summary", get(report_summary))
        .route("/reports/export", get(export_report))
        .route("/dashboard", get(dashboard));

    let api = match state.config.static_dir.as_deref() {
        Some(dir) => {
            let index = Path::new(dir).join("index.html");
            api.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)))
        }
        None => api.fallback(not_found),
    };

    api.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
    .with_state(state)
}

/// Bind the listener; `host` may be a name such as `localhost`.
async fn bind(host: &str, port: u16) -> AppResult<TcpListener> {
    TcpListener::bind((host, port)).await.map_err(|e| {
        AppError::Config(format!("cannot listen on {host}:{port}: {e}"))
    })
}

pub async fn serve(host: &str, port: u16, state: AppState) -> AppResult<()> {
    let app = router(state);

    let listener = bind(host, port).await?;
    tracing::info!("🌐 REST service on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 REST server exited");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("🛑 shutdown requested");
}
