use axum::{
    Json, Router,
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{AppConfig, ServerConfig};
use crate::error::{Result, ServerError};
use crate::navigation::{HX_REQUEST, HxNavigator};
use crate::routes;
use crate::ui::{self, ChatLayout, ChatPage};

/// Build the application router.
pub fn router(config: &ServerConfig) -> Router {
    let app = Router::new()
        .route(routes::ROOT, get(home_handler))
        .route(routes::CHAT, get(chat_handler))
        .route(routes::CHAT_CLOSE, post(chat_close_handler))
        .route(routes::HEALTH, get(health_handler))
        .nest_service(routes::STATIC, ServeDir::new(&config.static_dir));

    with_request_timeout(app, config.request_timeout_secs).layer(TraceLayer::new_for_http())
}

/// Answer `408 Request Timeout` when a request runs longer than `secs`.
/// Zero leaves the router untouched.
pub fn with_request_timeout(app: Router, secs: u64) -> Router {
    if secs == 0 {
        return app;
    }
    let duration = Duration::from_secs(secs);

    app.layer(axum::middleware::from_fn(
        move |req: Request, next: Next| async move {
            match tokio::time::timeout(duration, next.run(req)).await {
                Ok(res) => res,
                Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
            }
        },
    ))
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> Result<()> {
    let app = router(&config.server);

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            address: addr.clone(),
            source,
        })?;

    info!(
        name: "server.started",
        address = %addr,
        static_dir = %config.server.static_dir,
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Application root.
async fn home_handler() -> impl IntoResponse {
    Html(ui::home::render())
}

/// GET /chat - Chat layout wrapping the chat page.
async fn chat_handler() -> impl IntoResponse {
    // Rendering never navigates; the navigator only matters on close.
    let page = ChatPage::new(Arc::new(HxNavigator::new()));
    let html = ChatLayout::render(&page.render());

    info!(
        name: "chat.page.rendered",
        title = ChatLayout::METADATA.title,
        "Chat page rendered"
    );

    Html(html)
}

/// POST /chat/close - Run the page's close action and answer with the
/// navigation it requested.
async fn chat_close_handler(headers: HeaderMap) -> Response {
    let htmx = headers
        .get(HX_REQUEST)
        .is_some_and(|v| v.as_bytes().eq_ignore_ascii_case(b"true"));

    let navigator = Arc::new(HxNavigator::new());
    let shared: Arc<HxNavigator> = Arc::clone(&navigator);
    ChatPage::new(shared).on_close().call();

    info!(
        name: "chat.close.requested",
        destination = ?navigator.target(),
        htmx,
        "Chat closed"
    );

    navigator.respond(htmx)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// GET /health - Liveness probe.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
