//! The report route.

use axum::{
    Json,
    extract::RawQuery,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::client_ip::ClientIp;

#[derive(Debug, Serialize)]
struct IpReport {
    ip: String,
}

/// Answers `GET` and `HEAD` with the resolved client IP; anything else is
/// rejected with 405 before the query string is even looked at. `HEAD` goes
/// through the same logic as `GET`, its body is dropped later by
/// [`crate::head::suppress_body`].
pub(crate) async fn ipaddress(
    method: Method,
    RawQuery(query): RawQuery,
    ClientIp(ip): ClientIp,
) -> Response {
    match method {
        Method::GET | Method::HEAD => report(ip, &format_param(query.as_deref())),
        _ => method_not_allowed(),
    }
}

/// Looks up `format` in the query string, the first value winning over
/// duplicates. Parsing never rejects a request: an unparseable query
/// resolves to the empty format, and undecodable values decode lossily and
/// fall through the format dispatch as unrecognized.
fn format_param(query: Option<&str>) -> String {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query.unwrap_or_default()).unwrap_or_default();
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "format").then_some(value))
        .unwrap_or_default()
}

/// Renders the resolved IP in the requested format.
fn report(ip: String, format: &str) -> Response {
    match format {
        "" => ip.into_response(),
        "json" => Json(IpReport { ip }).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "GET, HEAD")],
        "Method Not Allowed\n",
    )
        .into_response()
}
