//! Client address resolution.

use std::{convert::Infallible, marker::Sync, net::SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{Extensions, HeaderMap, request::Parts},
};

const X_FORWARDED_FOR: &str = "X-Forwarded-For";

/// The caller's apparent IP address, reported as a verbatim string.
///
/// Resolution order:
///
/// - the first comma-separated token of the `X-Forwarded-For` header, if
///   the header is present and non-empty
/// - otherwise the transport peer address from
///   [`axum::extract::ConnectInfo`] (provide it with e.g.
///   [`axum::routing::Router::into_make_service_with_connect_info`])
/// - otherwise an empty string
///
/// `X-Forwarded-For` is client-supplied and trivially spoofable; the token
/// is passed through as-is, with no validation and no whitespace trimming,
/// so the output stays byte-identical for existing clients.
#[derive(Debug)]
pub struct ClientIp(pub String);

impl ClientIp {
    /// Resolve the client IP from given arguments. Always succeeds, with a
    /// possibly empty string.
    pub fn from(headers: &HeaderMap, extensions: &Extensions) -> Self {
        let ip = maybe_forwarded_for(headers)
            .or_else(|| maybe_peer_ip(extensions))
            .unwrap_or_default();
        Self(ip)
    }
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from(&parts.headers, &parts.extensions))
    }
}

/// Takes the token before the first comma of `X-Forwarded-For`, verbatim.
fn maybe_forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get(X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .split_once(',')
                .map_or(value, |(first, _)| first)
                .to_owned()
        })
}

/// Looks for the peer IP in the [`ConnectInfo`] extension.
fn maybe_peer_ip(extensions: &Extensions) -> Option<String> {
    extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
}
