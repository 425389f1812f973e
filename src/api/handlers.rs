//! Route handlers
//!
//! Handlers only normalize request parameters and hand off to the
//! [`Assembler`](crate::api::Assembler); every payload shape is decided there.

use crate::api::assembler::{Cached, DetailResponse, GenresPayload, ListingPayload, PagedPayload};
use crate::api::error::{DetailErrorBody, ErrorBody};
use crate::api::pagination::normalize_page;
use crate::api::AppState;
use crate::url::Category;
use crate::ApiError;
use axum::async_trait;
use axum::extract::{FromRequestParts, Path, State};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::HashMap;
use std::convert::Infallible;

/// Query parameters accepted across the API routes
///
/// Extraction never rejects: unknown keys are ignored and a repeated key
/// keeps its first value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ApiQuery {
    pub url: Option<String>,
    pub follow: Option<String>,
    pub page: Option<String>,
    pub keyword: Option<String>,
}

impl ApiQuery {
    /// Parses a raw (still percent-encoded) query string
    pub fn from_query(query: &str) -> Self {
        let mut parsed = Self::default();

        for (key, value) in ::url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "url" => &mut parsed.url,
                "follow" => &mut parsed.follow,
                "page" => &mut parsed.page,
                "keyword" => &mut parsed.keyword,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        parsed
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ApiQuery {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_query(parts.uri.query().unwrap_or_default()))
    }
}

/// Path parameters of whichever route matched, empty when it has none
type PathParams = Option<Path<HashMap<String, String>>>;

fn path_param<'a>(params: &'a PathParams, name: &str) -> Option<&'a str> {
    params
        .as_ref()
        .and_then(|Path(params)| params.get(name))
        .map(String::as_str)
}

fn requested_page(query: &ApiQuery, params: &PathParams) -> u32 {
    normalize_page(query.page.as_deref(), path_param(params, "page"))
}

/// Keyword from the query string, then the path, ignoring empty values
fn requested_keyword<'a>(query: &'a ApiQuery, params: &'a PathParams) -> Result<&'a str, ApiError> {
    query
        .keyword
        .as_deref()
        .filter(|keyword| !keyword.is_empty())
        .or_else(|| path_param(params, "keyword").filter(|keyword| !keyword.is_empty()))
        .ok_or(ApiError::MissingKeyword)
}

/// Homepage snapshot
#[utoipa::path(
    get,
    path = "/api",
    tag = "catalog",
    params(
        ("url" = Option<String>, Query, description = "Page to scrape, defaults to the site root"),
        ("follow" = Option<bool>, Query, description = "Accepted and part of the cache key only")
    ),
    responses(
        (status = 200, description = "Movies and series on the homepage", body = ListingPayload),
        (status = 500, description = "Upstream or extraction failure", body = ErrorBody)
    )
)]
pub async fn list(
    State(state): State<AppState>,
    query: ApiQuery,
) -> Result<Json<Cached>, ApiError> {
    let follow = query.follow.as_deref() == Some("true");
    let response = state.assembler.listing(query.url.as_deref(), follow).await?;
    Ok(Json(response))
}

/// Paginated movie category
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "catalog",
    params(("page" = Option<u32>, Query, description = "Page number, defaults to 1")),
    responses(
        (status = 200, description = "One page of movies", body = PagedPayload),
        (status = 500, description = "Upstream or extraction failure", body = ErrorBody)
    )
)]
pub async fn movies(
    State(state): State<AppState>,
    query: ApiQuery,
    params: PathParams,
) -> Result<Json<Cached>, ApiError> {
    let page = requested_page(&query, &params);
    let response = state.assembler.category(Category::Movies, page).await?;
    Ok(Json(response))
}

/// Paginated series category
#[utoipa::path(
    get,
    path = "/api/series",
    tag = "catalog",
    params(("page" = Option<u32>, Query, description = "Page number, defaults to 1")),
    responses(
        (status = 200, description = "One page of series", body = PagedPayload),
        (status = 500, description = "Upstream or extraction failure", body = ErrorBody)
    )
)]
pub async fn series(
    State(state): State<AppState>,
    query: ApiQuery,
    params: PathParams,
) -> Result<Json<Cached>, ApiError> {
    let page = requested_page(&query, &params);
    let response = state.assembler.category(Category::Series, page).await?;
    Ok(Json(response))
}

/// Genre index
#[utoipa::path(
    get,
    path = "/api/genres",
    tag = "genres",
    responses(
        (status = 200, description = "Every genre with its API route", body = GenresPayload),
        (status = 500, description = "Upstream or extraction failure", body = ErrorBody)
    )
)]
pub async fn genres(State(state): State<AppState>) -> Result<Json<Cached>, ApiError> {
    let response = state.assembler.genres().await?;
    Ok(Json(response))
}

/// Paginated genre listing
#[utoipa::path(
    get,
    path = "/api/genres/{genre}",
    tag = "genres",
    params(
        ("genre" = String, Path, description = "Genre slug"),
        ("page" = Option<u32>, Query, description = "Page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "One page of the genre", body = PagedPayload),
        (status = 500, description = "Upstream or extraction failure", body = ErrorBody)
    )
)]
pub async fn genre_page(
    State(state): State<AppState>,
    query: ApiQuery,
    params: PathParams,
) -> Result<Json<Cached>, ApiError> {
    let genre = path_param(&params, "genre").unwrap_or_default();
    let page = requested_page(&query, &params);
    let response = state.assembler.genre_page(genre, page).await?;
    Ok(Json(response))
}

/// Paginated search
#[utoipa::path(
    get,
    path = "/api/search/{keyword}",
    tag = "search",
    params(
        ("keyword" = String, Path, description = "Search keyword, also accepted as a query parameter"),
        ("page" = Option<u32>, Query, description = "Page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "One page of results", body = PagedPayload),
        (status = 400, description = "No keyword given", body = ErrorBody),
        (status = 500, description = "Upstream or extraction failure", body = ErrorBody)
    )
)]
pub async fn search(
    State(state): State<AppState>,
    query: ApiQuery,
    params: PathParams,
) -> Result<Json<Cached>, ApiError> {
    let keyword = requested_keyword(&query, &params)?;
    let page = requested_page(&query, &params);
    let response = state.assembler.search(keyword, page).await?;
    Ok(Json(response))
}

/// Title detail with download links
#[utoipa::path(
    get,
    path = "/api/{slug}",
    tag = "catalog",
    params(("slug" = String, Path, description = "Title slug")),
    responses(
        (status = 200, description = "The detail record", body = DetailResponse),
        (status = 500, description = "Upstream or extraction failure", body = DetailErrorBody)
    )
)]
pub async fn detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state.assembler.detail(&slug).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            tracing::error!("Detail request for '{}' failed: {}", slug, e);
            let body = DetailErrorBody {
                success: false,
                message: e.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
