use axum::{body::Body, response::Response};
use std::sync::LazyLock;

/// Pages keep their doctype and `<html>`/`<head>` tags so the `lang`
/// attribute survives, and closing tags stay so the contact section can be
/// swapped in place by the page script.
static PAGE_CFG: LazyLock<minify_html::Cfg> = LazyLock::new(|| minify_html::Cfg {
    keep_closing_tags: true,
    keep_html_and_head_opening_tags: true,
    keep_input_type_text_attr: true,
    minify_doctype: false,
    minify_css: true,
    minify_js: true,
    ..Default::default()
});

/// Minifies one rendered page or fragment.
pub fn minify_page(html: &[u8]) -> Vec<u8> {
    minify_html::minify(html, &PAGE_CFG)
}

/// Minifies `text/html` responses in release builds; debug builds pass
/// responses through untouched so rendered markup stays readable.
pub async fn minify_html_middleware(response: Response<Body>) -> Response<Body> {
    cfg_if::cfg_if! {
        if #[cfg(not(debug_assertions))] {
            use axum::{body::to_bytes, http::header};

            let is_html = response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|h| h.to_str().ok())
                .is_some_and(|v| v.starts_with("text/html"));

            if is_html {
                let (parts, body) = response.into_parts();
                let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
                return Response::from_parts(parts, Body::from(minify_page(&bytes)));
            }
        }
    }

    response
}
