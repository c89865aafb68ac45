//! An HTTP endpoint reporting the caller's apparent IP address
//!
//! The service answers `GET` and `HEAD` on a single route, `/ipaddress`.
//! The reported address is the first `X-Forwarded-For` token when that
//! header is present and non-empty, the transport peer address otherwise.
//! A `format=json` query parameter switches the response from the bare
//! address string to a one-key JSON object:
//!
//! ```sh
//! $ curl http://localhost:3000/ipaddress
//! 203.0.113.9
//! $ curl 'http://localhost:3000/ipaddress?format=json'
//! {"ip":"203.0.113.9"}
//! ```
//!
//! Other methods get a 405 with an `Allow: GET, HEAD` header; unrecognized
//! `format` values get a 404. The listening port comes from the `PORT`
//! environment variable (see [`config::Config`]), and there is no further
//! configuration.

pub mod client_ip;
pub mod config;
mod handler;
mod head;

use axum::{Router, middleware, routing::any};

pub use crate::client_ip::ClientIp;

/// Builds the service router.
///
/// Serve it with connect info so the peer-address fallback has something to
/// fall back to:
///
/// ```rust,no_run
/// # async fn serve() {
/// use std::net::SocketAddr;
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
/// axum::serve(
///     listener,
///     ip_echo::app().into_make_service_with_connect_info::<SocketAddr>(),
/// )
/// .await
/// .unwrap();
/// # }
/// ```
pub fn app() -> Router {
    Router::new()
        .route("/ipaddress", any(handler::ipaddress))
        .layer(middleware::from_fn(head::suppress_body))
}
