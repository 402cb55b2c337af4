pub mod assets;
pub mod config;
pub mod landing;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::AppState;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Router with the full middleware stack, as served by `novatech serve`.
///
/// Integration tests drive this directly without binding a socket.
pub fn app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify before compressing
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
