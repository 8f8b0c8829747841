pub mod chat;
pub mod root;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chat::chat_handler;
use root::{health_handler, root_handler};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::{AppError, handle_panic};

pub fn create_router(config: &AppConfig) -> Router {
    let routes = Router::new()
        .route("/", get(root_handler))
        // Messages carry no length limit, so neither does the body.
        .route("/chat", post(chat_handler).layer(DefaultBodyLimit::disable()))
        .route("/health", get(health_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed);

    with_middleware(routes, config)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Wraps `router` in the shared stack: panic recovery, request tracing and
/// the CORS policy (outermost).
pub fn with_middleware(router: Router, config: &AppConfig) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
}

/// Credentials rule out literal `*` for methods and headers, so "any" is
/// expressed by mirroring what the preflight asks for.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
