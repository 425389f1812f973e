//! Machine-readable API description and its browser

use crate::api::assembler::{DetailResponse, GenresPayload, ListingPayload, PagedPayload};
use crate::api::error::{DetailErrorBody, ErrorBody};
use crate::api::handlers;
use crate::api::pagination::Pagination;
use crate::scraper::{DetailMeta, DetailRecord, DownloadEntry, GenreRef, HostLink, ListingItem};
use axum::response::Html;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Driverays API",
        version = "1.0.0",
        description = "Movie and series catalog scraped from driverays"
    ),
    servers((url = "http://localhost:3000", description = "Local server")),
    paths(
        handlers::list,
        handlers::movies,
        handlers::series,
        handlers::genres,
        handlers::genre_page,
        handlers::search,
        handlers::detail
    ),
    components(schemas(
        ListingItem,
        ListingPayload,
        PagedPayload,
        Pagination,
        GenreRef,
        GenresPayload,
        DetailMeta,
        HostLink,
        DownloadEntry,
        DetailRecord,
        DetailResponse,
        ErrorBody,
        DetailErrorBody
    )),
    tags(
        (name = "catalog", description = "Homepage, categories and title details"),
        (name = "genres", description = "Genre index and genre listings"),
        (name = "search", description = "Keyword search")
    )
)]
pub struct ApiDoc;

const SWAGGER_UI: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Driverays API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// `GET /swagger.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `GET /api-docs`
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI)
}
