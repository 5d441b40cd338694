//! Runtime server
//!
//! Hosts the frozen page bundles and the newsletter subscription endpoint.
//! Generation is a build-time concern; this is the only live request path.

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::error::Error;
use crate::relay::{GhostSignupTransport, SubscriptionRelay};
use crate::Portico;

/// Server state shared across requests
///
/// The relay itself is stateless; concurrent submissions are independent.
struct ServerState {
    relay: SubscriptionRelay<GhostSignupTransport>,
}

/// Request body for the subscription endpoint, mirroring the backend shape
#[derive(Debug, Deserialize)]
struct SubscribeRequest {
    #[serde(default)]
    members: Vec<SubscribeMember>,
}

#[derive(Debug, Deserialize)]
struct SubscribeMember {
    #[serde(default)]
    email: String,
}

/// Start the server
pub async fn start(portico: &Portico, ip: &str, port: u16) -> Result<()> {
    let (key_id, secret) = portico.secrets.admin_key_parts()?;
    let transport = GhostSignupTransport::new(&portico.config.ghost_origin);
    let state = Arc::new(ServerState {
        relay: SubscriptionRelay::new(key_id, secret, transport),
    });

    let app = Router::new()
        .route("/api/subscribeNewsletter", post(subscribe_handler))
        .fallback_service(
            ServeDir::new(&portico.public_dir).append_index_html_on_directories(true),
        )
        .with_state(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Forward a newsletter subscription to the blog backend
async fn subscribe_handler(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<SubscribeRequest>,
) -> Response {
    // An absent member list validates the same way as an empty email
    let email = req
        .members
        .first()
        .map(|m| m.email.as_str())
        .unwrap_or_default();

    match state.relay.submit_subscription(email).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "ok": true }))).into_response(),
        Err(Error::Validation(msg)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "ok": false, "error": msg })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "ok": false, "error": e.to_string() })),
        )
            .into_response(),
    }
}
