use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::capability::Capability;
use crate::config::SiteConfig;
use crate::pages::DefaultHomeView;
use crate::render;
use crate::view::Node;

#[derive(Clone)]
pub struct AppState {
    home: Arc<dyn Capability>,
    title: String,
}

impl AppState {
    pub fn new(home: Arc<dyn Capability>, title: impl Into<String>) -> Self {
        Self {
            home,
            title: title.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            Arc::new(DefaultHomeView::from_config(config)),
            config.brand.as_str(),
        )
    }

    fn render_home(&self) -> Result<Node, ServerError> {
        let start = Instant::now();
        match self.home.render() {
            Ok(tree) => {
                info!(
                    stage = "http",
                    event = "home.render",
                    result = "ok",
                    duration_ms = start.elapsed().as_millis(),
                    "home view rendered"
                );
                Ok(tree)
            }
            Err(err) => {
                error!(
                    stage = "http",
                    event = "home.render",
                    result = "fail",
                    duration_ms = start.elapsed().as_millis(),
                    error = %format!("{err:#}"),
                    "home view failed to render"
                );
                Err(ServerError::Render(err))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("home view failed to render: {0:#}")]
    Render(anyhow::Error),
    #[error("no page at {0}")]
    NotFound(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

/// Pretty JSON of the default home tree for `config`.
pub fn home_json(config: &SiteConfig) -> Result<String> {
    let tree = DefaultHomeView::from_config(config).render()?;
    serde_json::to_string_pretty(&tree).context("failed to serialize home tree")
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/home", get(home_tree))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    let tree = state.render_home()?;
    Ok(Html(render::document(&state.title, &tree)))
}

async fn home_tree(State(state): State<AppState>) -> Result<Json<Node>, ServerError> {
    Ok(Json(state.render_home()?))
}

async fn healthz() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}

pub async fn serve(bind: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let addr = listener
        .local_addr()
        .context("failed to read listener address")?;
    info!(
        stage = "startup",
        event = "server.listen",
        addr = %addr,
        "listening on http://{addr}"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!(stage = "shutdown", event = "server.stop", "server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}
