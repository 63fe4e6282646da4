//! Router assembly for the headcount server.
//!
//! [`build_router`] wires every handler to its route; [`with_middleware`]
//! adds panic recovery, request tracing and optional gzip compression.

use std::any::Any;

use axum::http::StatusCode;
use axum::middleware;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, patch};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::render;
use crate::session;
use crate::state::AppState;

/// Builds the complete axum router with all routes and middleware.
///
/// Only the full-page routes run the session middleware; HTMX partials
/// never reset the store.
pub fn build_router(state: AppState) -> Router {
    let enable_gzip = state.config.enable_gzip;

    let pages = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/about", get(handlers::pages::about))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::ensure_session,
        ));

    let router = Router::new()
        .merge(pages)
        // Contact partials
        .route(
            "/contacts",
            get(handlers::contacts::list_contacts).post(handlers::contacts::create_contact),
        )
        .route("/contacts/count", get(handlers::contacts::count_contacts))
        .route(
            "/contacts/{id}",
            get(handlers::contacts::get_contact)
                .put(handlers::contacts::update_contact)
                .delete(handlers::contacts::delete_contact),
        )
        .route(
            "/contacts/{id}/edit",
            get(handlers::contacts::edit_contact_form),
        )
        .route(
            "/contacts/{id}/status",
            patch(handlers::contacts::toggle_contact_status),
        )
        // Health and static assets
        .route("/healthcheck", get(handlers::health::healthcheck))
        .route("/robots.txt", get(handlers::pages::robots_txt))
        .route("/static/css/style.css", get(handlers::pages::style_css))
        .route("/static/js/htmx.title.js", get(handlers::pages::title_js))
        .fallback(handlers::pages::not_found)
        .with_state(state);

    with_middleware(router, enable_gzip)
}

/// Wraps `router` in the shared middleware stack.
///
/// Outermost first: request tracing, panic recovery, then gzip when enabled.
pub fn with_middleware(router: Router, enable_gzip: bool) -> Router {
    let router = if enable_gzip {
        router.layer(CompressionLayer::new())
    } else {
        router
    };

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = err.downcast_ref::<String>() {
        msg.as_str()
    } else if let Some(msg) = err.downcast_ref::<&str>() {
        *msg
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = detail, "application panic");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render::server_error_page()),
    )
        .into_response()
}
