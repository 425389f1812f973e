//! Shared fixtures for the API integration tests

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use driverays_api::config::{Config, RateLimitConfig, UpstreamConfig};
use driverays_api::scraper::{HttpFetcher, Scraper};
use driverays_api::url::SiteUrls;
use driverays_api::{router, AppState, Assembler, RateLimit, ResponseCache};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::MockServer;

/// Creates a test configuration pointing at the mock upstream
pub fn create_test_config(server: &MockServer) -> Config {
    Config {
        upstream: UpstreamConfig {
            base_url: format!("{}/", server.uri()),
            user_agent: "Mozilla/5.0".to_string(),
            timeout_secs: 5,
        },
        rate_limit: RateLimitConfig {
            max_requests: 20,
            window_secs: 60,
        },
        ..Config::default()
    }
}

/// Builds the full application router against the mock upstream
pub fn create_app(server: &MockServer) -> Router {
    let config = create_test_config(server);

    let fetcher = HttpFetcher::from_config(&config.upstream).expect("Failed to build fetcher");
    let scraper = Scraper::new(Arc::new(fetcher), SiteUrls::new(config.upstream.base_url.clone()));
    let cache = Arc::new(ResponseCache::new(config.cache.ttl_secs));
    let limit = Arc::new(RateLimit::new(&config.rate_limit));

    router(AppState::new(Assembler::new(scraper, cache)), limit)
}

/// Sends `request` through the router, returning the status and JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed to respond");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    };

    (status, body)
}

/// `GET uri`
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

/// One listing item block as the upstream renders it
pub fn item_block(class: &str, id: &str, slug: &str, title: &str) -> String {
    format!(
        r#"<div class="{class}" id="{id}">
            <a href="https://driverays.quest/{slug}/">
                <div class="poster"><img data-src="https://img.example/{slug}.jpg" src="placeholder.gif"></div>
                <div class="absolute top-0 right-0"><span>WEB-DL</span></div>
            </a>
            <div class="title"><h2>{title}</h2></div>
            <div class="desc"><span>7.5</span><span>2024</span></div>
        </div>"#
    )
}

/// A listing page with the given movie items and pagination text
pub fn listing_page(items: &[(&str, &str)], pages: Option<&str>) -> String {
    let movies: String = items
        .iter()
        .enumerate()
        .map(|(i, (slug, title))| item_block("content ct-archive", &format!("post-{}", i), slug, title))
        .collect();
    let pagination = pages
        .map(|text| format!(r#"<div class="wp-pagenavi"><span class="pages">{}</span></div>"#, text))
        .unwrap_or_default();

    format!(
        r#"<html><body><div id="movies">{}</div>{}</body></html>"#,
        movies, pagination
    )
}

/// A movie detail page with one flex download block
pub const DETAIL_PAGE: &str = r#"<html><body>
    <div class="postdetail">
        <h1>Furiosa: A Mad Max Saga</h1>
        <span class="tagline">The fury of the wasteland</span>
    </div>
    <div class="meta">
        <span class="mr-4">2024</span>
        <span class="mr-4">Australia</span>
        <span class="mr-4">148 min</span>
    </div>
    <p><strong>Director:</strong> George Miller</p>
    <p><strong>Rating:</strong> 7.6</p>
    <p class="mt-3">
        <a href="https://driverays.quest/genres/action/">Action</a>
        <a href="https://driverays.quest/genres/adventure/">Adventure</a>
    </p>
    <div id="tab-1"><p>Snatched from the Green Place.</p></div>
    <div class="poster"><img src="https://img.example/furiosa.jpg"></div>
    <div id="dl_tab">
        <div class="flex">
            <div class="resol">1080p</div>
            <div class="dl_links">
                <b>2.4 GB</b>
                <a href="https://hoster.example/f1">GDrive</a>
            </div>
        </div>
    </div>
</body></html>"#;
