use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_CACHE: &str = "public, max-age=31536000, immutable";
const NO_CACHE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

/// Embedded assets are cached for a year, pages and API answers never are.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static_file = req.uri().path().starts_with("/static/");
    let mut response = next.run(req).await;

    let cacheable = is_static_file && response.status().is_success();
    let headers = response.headers_mut();

    if cacheable {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(STATIC_CACHE));
    } else {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}
