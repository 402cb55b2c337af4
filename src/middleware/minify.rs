use axum::{
    body::Body,
    http::{Response, header},
};

cfg_if::cfg_if! {
    if #[cfg(not(debug_assertions))] {
        use axum::body::to_bytes;
        use std::sync::LazyLock;

        static MINIFY_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            minify_doctype: false,
            minify_css: true,
            minify_js: true,
            ..Default::default()
        });
    }
}

fn is_html(response: &Response<Body>) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

/// Minifies rendered pages in release builds; debug builds keep the markup readable.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    if !is_html(&response) {
        return response;
    }

    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            let (mut parts, body) = response.into_parts();
            let Ok(bytes) = to_bytes(body, usize::MAX).await else {
                return Response::from_parts(parts, Body::empty());
            };

            let minified = minify_html::minify(&bytes, &MINIFY_CFG);
            parts.headers.remove(header::CONTENT_LENGTH);

            Response::from_parts(parts, Body::from(minified))
        } else {
            response
        }
    }
}
