//! Full-page and static asset handlers.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};

use crate::render;

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(render::index_page())
}

/// `GET /about`
pub async fn about() -> Html<&'static str> {
    Html(render::about_page())
}

/// Fallback for unmatched paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(render::not_found_page()))
}

/// `GET /robots.txt`
pub async fn robots_txt() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        include_str!("../../static/robots.txt"),
    )
}

/// `GET /static/css/style.css`
pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/css/style.css"),
    )
}

/// `GET /static/js/htmx.title.js`
pub async fn title_js() -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        include_str!("../../static/js/htmx.title.js"),
    )
}
