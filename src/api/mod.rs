//! HTTP surface of the proxy
//!
//! This module contains:
//! - The response assembler (cache-backed payload shaping)
//! - Cache-key construction and pagination links
//! - Route handlers and their error bodies
//! - Per-client rate limiting
//! - The OpenAPI document and its browser

mod assembler;
mod cache_key;
mod docs;
mod error;
mod handlers;
mod pagination;
mod rate_limit;

pub use assembler::{
    Assembler, Cached, DetailResponse, GenresPayload, ListingPayload, PagedPayload,
};
pub use cache_key::CacheKey;
pub use docs::ApiDoc;
pub use error::{DetailErrorBody, ErrorBody};
pub use handlers::ApiQuery;
pub use pagination::{normalize_page, parse_page, Pagination};
pub use rate_limit::{limit_requests, RateLimit, RATE_LIMIT_MESSAGE};

use axum::http::{header, Method};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub assembler: Arc<Assembler>,
}

impl AppState {
    pub fn new(assembler: Assembler) -> Self {
        Self {
            assembler: Arc::new(assembler),
        }
    }
}

/// Permissive CORS; preflight requests are answered directly
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Builds the application router
///
/// Every `/api` route sits behind `limit`; the documentation routes do not.
pub fn router(state: AppState, limit: Arc<RateLimit>) -> Router {
    let api = Router::new()
        .route("/api", get(handlers::list))
        .route("/api/", get(handlers::list))
        .route("/api/movies", get(handlers::movies))
        .route("/api/movies/page/:page", get(handlers::movies))
        .route("/api/series", get(handlers::series))
        .route("/api/series/page/:page", get(handlers::series))
        .route("/api/genres", get(handlers::genres))
        .route("/api/genres/:genre", get(handlers::genre_page))
        .route("/api/genres/:genre/page/:page", get(handlers::genre_page))
        .route("/api/search", get(handlers::search))
        .route("/api/search/:keyword", get(handlers::search))
        .route("/api/search/:keyword/page/:page", get(handlers::search))
        .route("/api/:slug", get(handlers::detail))
        .route_layer(middleware::from_fn_with_state(limit, limit_requests));

    Router::new()
        .merge(api)
        .route("/swagger.json", get(docs::openapi_json))
        .route("/api-docs", get(docs::swagger_ui))
        .layer(cors_layer())
        .with_state(state)
}
