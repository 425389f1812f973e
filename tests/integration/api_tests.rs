use crate::support::{create_app, get, item_block, listing_page, send, DETAIL_PAGE};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.into())
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_category_is_cached_after_first_request() {
    let mock_server = MockServer::start().await;

    // The second request must not reach the upstream
    Mock::given(method("GET"))
        .and(path("/category/movies/"))
        .respond_with(html(listing_page(
            &[("dune-part-two-2024", "Dune: Part Two"), ("civil-war-2024", "Civil War")],
            Some("Page 1 of 12"),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);

    let (status, first) = get(&app, "/api/movies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["cached"], false);
    assert_eq!(first["page"], 1);
    assert_eq!(first["totalPages"], 12);
    assert_eq!(first["items"][0]["title"], "Dune: Part Two");
    assert_eq!(first["items"][0]["url"], "/api/dune-part-two-2024");
    assert_eq!(first["items"][0]["quality"], "WEB-DL");
    assert_eq!(first["items"][0]["poster"], "https://img.example/dune-part-two-2024.jpg");
    assert_eq!(first["pagination"]["prev"], serde_json::Value::Null);
    assert_eq!(first["pagination"]["next"], "/api/movies/page/2");
    assert_eq!(first["pagination"]["last"], "/api/movies/page/12");

    let (status, second) = get(&app, "/api/movies?page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["cached"], true);
    assert_eq!(second["items"], first["items"]);
}

#[tokio::test]
async fn test_page_from_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/category/series/page/3/"))
        .respond_with(html(listing_page(
            &[("the-bear-2024", "The Bear")],
            Some("Page 3 of 3"),
        )))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);
    let (status, body) = get(&app, "/api/series/page/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 3);
    assert_eq!(body["pagination"]["prev"], "/api/series/page/2");
    assert_eq!(body["pagination"]["next"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_invalid_page_falls_back_to_first() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/category/movies/"))
        .respond_with(html(listing_page(&[("alien-romulus-2024", "Alien: Romulus")], None)))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);
    let (status, body) = get(&app, "/api/movies?page=zero").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["totalPages"], 1);
}

#[tokio::test]
async fn test_repeated_query_key_uses_first_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/category/movies/page/2/"))
        .respond_with(html(listing_page(
            &[("alien-romulus-2024", "Alien: Romulus")],
            Some("Page 2 of 4"),
        )))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);
    let (status, body) = get(&app, "/api/movies?page=2&page=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 2);
    assert_eq!(body["totalPages"], 4);
}

#[tokio::test]
async fn test_homepage_listing() {
    let mock_server = MockServer::start().await;

    let page = format!(
        r#"<html><body>
            <div id="movies">{}</div>
            <div id="series">{}{}</div>
        </body></html>"#,
        item_block("content ct-archive", "post-1", "twisters-2024", "Twisters"),
        item_block("content", "post-2", "shogun-2024", "Shogun"),
        item_block("content", "post-3", "fallout-2024", "Fallout"),
    );
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(page))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);
    let (status, body) = get(&app, "/api").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cached"], false);
    assert_eq!(body["total"], 3);
    assert_eq!(body["totalMovies"], 1);
    assert_eq!(body["totalSeries"], 2);
    assert_eq!(body["series"][1]["url"], "/api/fallout-2024");
}

#[tokio::test]
async fn test_genre_index_and_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/genre-list/"))
        .respond_with(html(
            r#"<div class="genres_list">
                <div class="yakx"><a href="https://driverays.quest/genres/action/">Action</a></div>
                <div class="yakx"><a href="https://driverays.quest/genres/sci-fi/">Sci-Fi</a></div>
            </div>"#,
        ))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/genres/sci-fi/page/2/"))
        .respond_with(html(listing_page(&[("dune-2021", "Dune")], Some("Page 2 of 4"))))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);

    let (status, genres) = get(&app, "/api/genres").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(genres["data"][1]["name"], "Sci-Fi");
    assert_eq!(genres["data"][1]["url"], "/api/genres/sci-fi");

    let route = genres["data"][1]["url"].as_str().unwrap().to_string();
    let (status, page) = get(&app, &format!("{}/page/2", route)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["genre"], "sci-fi");
    assert_eq!(page["page"], 2);
    assert_eq!(page["pagination"]["first"], "/api/genres/sci-fi/page/1");
    assert_eq!(page["pagination"]["next"], "/api/genres/sci-fi/page/3");
}

#[tokio::test]
async fn test_search_by_path_keyword() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "mad max"))
        .and(query_param("post_type", "post"))
        .respond_with(html(listing_page(
            &[("mad-max-fury-road-2015", "Mad Max: Fury Road")],
            Some("Page 1 of 2"),
        )))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);
    let (status, body) = get(&app, "/api/search/mad%20max").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keyword"], "mad max");
    assert_eq!(body["items"][0]["url"], "/api/mad-max-fury-road-2015");
    assert_eq!(body["pagination"]["next"], "/api/search/mad%20max/page/2");
}

#[tokio::test]
async fn test_search_query_keyword_and_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("s", "alien"))
        .and(query_param("paged", "2"))
        .respond_with(html(listing_page(&[("aliens-1986", "Aliens")], Some("Page 2 of 2"))))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);
    let (status, body) = get(&app, "/api/search?keyword=alien&page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keyword"], "alien");
    assert_eq!(body["page"], 2);
    assert_eq!(body["pagination"]["next"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_search_without_keyword() {
    let mock_server = MockServer::start().await;
    let app = create_app(&mock_server);

    let (status, body) = get(&app, "/api/search").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "Missing search keyword" }));
}

#[tokio::test]
async fn test_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/furiosa-2024/"))
        .respond_with(html(DETAIL_PAGE))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);
    let (status, body) = get(&app, "/api/furiosa-2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["slug"], "furiosa-2024");

    let data = &body["data"];
    assert_eq!(data["title"], "Furiosa: A Mad Max Saga");
    assert_eq!(data["meta"]["country"], "Australia");
    assert_eq!(data["director"], "George Miller");
    assert_eq!(data["rating"], "7.6");
    assert_eq!(data["genres"][0]["url"], "https://driverays.quest/genres/action/");
    assert_eq!(data["poster"], "https://img.example/furiosa.jpg");
    assert_eq!(data["downloads"][0]["type"], "movie");
    assert_eq!(data["downloads"][0]["resolution"], "1080p");
    assert_eq!(data["downloads"][0]["size"], "2.4 GB");
    assert_eq!(data["downloads"][0]["links"][0]["host"], "GDrive");
    assert!(body.get("cached").is_none());
}

#[tokio::test]
async fn test_detail_failure_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing-title/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);
    let (status, body) = get(&app, "/api/missing-title").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn test_upstream_failure_is_not_cached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/category/series/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);

    for _ in 0..2 {
        let (status, body) = get(&app, "/api/series").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("status 500"));
    }
}

#[tokio::test]
async fn test_item_without_anchor_fails_the_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/category/movies/"))
        .respond_with(html(
            r#"<div id="movies"><div class="content ct-archive" id="post-9"></div></div>"#,
        ))
        .mount(&mock_server)
        .await;

    let app = create_app(&mock_server);
    let (status, body) = get(&app, "/api/movies").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("href"));
}

#[tokio::test]
async fn test_rate_limit() {
    let mock_server = MockServer::start().await;
    let app = create_app(&mock_server);

    for _ in 0..20 {
        let (status, _) = get(&app, "/api/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (status, body) = get(&app, "/api/search").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, serde_json::json!({ "error": "Too many requests, slow down." }));

    // Documentation routes are not limited
    let (status, _) = get(&app, "/swagger.json").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight() {
    let mock_server = MockServer::start().await;
    let app = create_app(&mock_server);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/movies")
        .header(header::ORIGIN, "https://frontend.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cors_headers_on_responses() {
    let mock_server = MockServer::start().await;
    let app = create_app(&mock_server);

    let request = Request::builder()
        .uri("/api/search")
        .header(header::ORIGIN, "https://frontend.example")
        .body(Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_api_description() {
    let mock_server = MockServer::start().await;
    let app = create_app(&mock_server);

    let (status, body) = get(&app, "/swagger.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Driverays API");
    assert!(body["paths"]["/api/search/{keyword}"].is_object());

    let request = Request::builder()
        .uri("/api-docs")
        .body(Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_query_keyword_is_missing() {
    let mock_server = MockServer::start().await;
    let app = create_app(&mock_server);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/search?keyword=")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing search keyword");
}
