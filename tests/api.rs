//! End-to-end tests of the HTTP routes against a mocked upstream site

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use samehadaku_api::config::Config;
use samehadaku_api::routes::{configure_routes, AppState};

fn state_for(server: &MockServer) -> web::Data<AppState> {
    let config = Config {
        base_url: server.uri(),
        ..Config::default()
    };
    web::Data::new(AppState::new(config).unwrap())
}

async fn mount_html(server: &MockServer, route: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

macro_rules! app {
    ($server:expr) => {
        test::init_service(
            App::new()
                .app_data(state_for($server))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_index_lists_routes() {
    let server = MockServer::start().await;
    let app = app!(&server);

    let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(body["message"], "Welcome to Samehadaku API");
    assert_eq!(body["route"][2], "/source/:id");
}

#[actix_web::test]
async fn test_search_without_query_returns_usage() {
    let server = MockServer::start().await;
    let app = app!(&server);

    for uri in ["/search", "/search/"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["intro"], "Welcome to search route");
        assert_eq!(body["usage"].as_array().unwrap().len(), 2);
    }

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_search_returns_results() {
    let server = MockServer::start().await;
    let base = server.uri();

    let listing = format!(
        r#"<html><body>
            <div class="pagination"><span>Page 2 of 5</span></div>
            <main class="site-main">
                <a href="{base}/anime/naruto/" title="Naruto"><img class="anmsa" src="{base}/n.jpg"></a>
                <a href="{base}/anime/naruto-shippuden/" title="Naruto Shippuden"></a>
                <a href="{base}/genre/action/">Action</a>
            </main>
        </body></html>"#
    );
    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .and(query_param("s", "naruto"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing))
        .mount(&server)
        .await;

    let app = app!(&server);
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/search/naruto?p=2").to_request(),
    )
    .await;

    assert_eq!(
        body,
        json!({
            "page": "Page 2 of 5",
            "results": [
                { "id": "naruto", "title": "Naruto", "image": format!("{base}/n.jpg") },
                { "id": "naruto-shippuden", "title": "Naruto Shippuden", "image": null }
            ]
        })
    );
}

#[actix_web::test]
async fn test_search_defaults_to_first_page_and_reports_no_results() {
    let server = MockServer::start().await;
    mount_html(&server, "/page/1/", 200, "<html><body></body></html>".to_string()).await;

    let app = app!(&server);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/search/zzz").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "No results found" }));
}

#[actix_web::test]
async fn test_search_upstream_failure_is_server_error() {
    let server = MockServer::start().await;
    mount_html(&server, "/page/1/", 503, String::new()).await;

    let app = app!(&server);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/search/naruto").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = test::read_body(resp).await;
    assert_eq!(body, web::Bytes::from_static(b"Server Error"));
}

#[actix_web::test]
async fn test_anime_detail() {
    let server = MockServer::start().await;
    let base = server.uri();

    let page = format!(
        r#"<html><body>
            <div class="thumb"><img src="{base}/op.jpg"></div>
            <div class="infox"><h1>One Piece</h1></div>
            <div class="lstepsiode"><ul>
                <li>
                    <div class="eps"><a href="{base}/one-piece-episode-1/">1</a></div>
                    <div class="lchx"><a href="{base}/one-piece-episode-1/">One Piece Episode 1</a></div>
                    <span class="date">1 January 2024</span>
                </li>
            </ul></div>
        </body></html>"#
    );
    mount_html(&server, "/anime/one-piece", 200, page).await;

    let app = app!(&server);
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/anime/one-piece").to_request(),
    )
    .await;

    assert_eq!(
        body,
        json!({
            "id": "one-piece",
            "title": "One Piece",
            "image": format!("{base}/op.jpg"),
            "synopsis": "",
            "episodes": [{
                "number": "1",
                "id": "one-piece-episode-1",
                "title": "One Piece Episode 1",
                "date": "1 January 2024"
            }]
        })
    );
}

#[actix_web::test]
async fn test_anime_failure_is_not_found() {
    let server = MockServer::start().await;
    mount_html(&server, "/anime/broken", 500, String::new()).await;

    let app = app!(&server);
    for uri in ["/anime/missing", "/anime/broken"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Anime not found" }));
    }
}

#[actix_web::test]
async fn test_anime_episode_without_link_is_not_found() {
    let server = MockServer::start().await;
    mount_html(
        &server,
        "/anime/x",
        200,
        r#"<div class="lstepsiode"><ul><li><span class="eps"><a>1</a></span></li></ul></div>"#.to_string(),
    )
    .await;

    let app = app!(&server);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/anime/x").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Anime not found" }));
}

#[actix_web::test]
async fn test_source_resolves_playable_urls() {
    let server = MockServer::start().await;
    let base = server.uri();

    let source_page = format!(
        r#"<html><body><ul>
            <li><strong>MP4 360p</strong>
                <span><a href="{base}/kraken/a">Krakenfiles</a></span>
                <span><a href="{base}/gofile/a">Gofile</a></span>
            </li>
            <li><strong>MP4 720p</strong>
                <span><a href="{base}/kraken/b">Krakenfiles</a></span>
            </li>
        </ul></body></html>"#
    );
    mount_html(&server, "/$one-piece-episode-1/", 200, source_page).await;
    mount_html(
        &server,
        "/kraken/a",
        200,
        r#"<div class="play-video-parent"><video><source src="//cdn.example/video.webm"></video></div>"#.to_string(),
    )
    .await;
    mount_html(
        &server,
        "/kraken/b",
        200,
        r#"<div class="play-video-parent"><video><source src="//cdn.example/video.mp4"></video></div>"#.to_string(),
    )
    .await;

    let app = app!(&server);
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/source/one-piece-episode-1").to_request(),
    )
    .await;

    assert_eq!(
        body,
        json!([{ "quality": "MP4 720p", "url": "https://cdn.example/video.mp4" }])
    );

    let gofile_hits = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path().starts_with("/gofile"))
        .count();
    assert_eq!(gofile_hits, 0);
}

#[actix_web::test]
async fn test_source_without_playable_url_is_not_found() {
    let server = MockServer::start().await;
    let base = server.uri();

    let source_page = format!(
        r#"<ul><li><strong>MP4 480p</strong><span><a href="{base}/kraken/gone">Krakenfiles</a></span></li></ul>"#
    );
    mount_html(&server, "/$ep/", 200, source_page).await;

    let app = app!(&server);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/source/ep").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "No video source found" }));
}

#[actix_web::test]
async fn test_source_page_failure_is_server_error() {
    let server = MockServer::start().await;

    let app = app!(&server);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/source/ep").to_request()).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Scraping error: Server returned status 404");
}
