//! Body suppression for `HEAD` requests.

use axum::{body::Body, extract::Request, http::Method, middleware::Next, response::Response};

/// Runs the wrapped service, then discards the response body if the request
/// was a `HEAD`.
///
/// The route handles `HEAD` exactly like `GET`, so the status and headers
/// (a 404 for an unknown format, the JSON content-type) come out of the
/// same code path; only the body write is intercepted here.
pub(crate) async fn suppress_body(request: Request, next: Next) -> Response {
    let head = request.method() == Method::HEAD;
    let mut response = next.run(request).await;
    if head {
        *response.body_mut() = Body::empty();
    }
    response
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
        middleware,
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::suppress_body;

    fn app() -> Router {
        Router::new()
            .route("/", get(async || "payload"))
            .layer(middleware::from_fn(suppress_body))
    }

    #[tokio::test]
    async fn get_passes_through_untouched() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(String::from_utf8_lossy(&bytes), "payload");
    }

    #[tokio::test]
    async fn head_keeps_status_and_headers_only() {
        let req = Request::builder()
            .method(Method::HEAD)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(header::CONTENT_TYPE));
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }
}
