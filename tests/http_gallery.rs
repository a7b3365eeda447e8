//! Integration tests for the HTTP gallery client and the page flow.
//!
//! A wiremock server stands in for the gallery service, so these tests cover
//! the real URLs, query parameters and JSON decoding.

use tag_gallery::client::{ClientError, GalleryService, HttpGalleryService};
use tag_gallery::config::ServiceConfig;
use tag_gallery::endpoints::ImageLinks;
use tag_gallery::gallery::{Activation, Gallery, Outcome};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn service_for(server: &MockServer) -> HttpGalleryService {
    let config = ServiceConfig {
        base_url: format!("{}/gallery/", server.uri()),
        ..ServiceConfig::default()
    };
    HttpGalleryService::new(&config).unwrap()
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn tags_request_carries_cache_buster() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/gallery/rest/gallery_service/tags",
        serde_json::json!(["cats", "dogs"]),
    )
    .await;

    let service = service_for(&server);
    assert_eq!(service.tags().await.unwrap(), vec!["cats", "dogs"]);
    service.tags().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let busters: Vec<String> = requests
        .iter()
        .map(|r| {
            r.url
                .query_pairs()
                .find(|(k, _)| k == "dummy")
                .map(|(_, v)| v.into_owned())
                .expect("cache-busting parameter present")
        })
        .collect();
    assert_ne!(busters[0], busters[1]);
}

#[tokio::test]
async fn cache_buster_can_be_disabled() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    mount_json(&server, "/rest/gallery_service/tags", serde_json::json!([])).await;

    let config = ServiceConfig {
        base_url: server.uri(),
        cache_bust: false,
        ..ServiceConfig::default()
    };
    let service = HttpGalleryService::new(&config).unwrap();
    assert!(service.tags().await.unwrap().is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn entries_for_encoded_tag() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/gallery/rest/gallery_service/black%20and%20white",
        serde_json::json!([
            {"pictureName": "bw1", "description": "Night street", "tags": ["BLACK AND WHITE", "CITY"]}
        ]),
    )
    .await;

    let service = service_for(&server);
    let entries = service.entries_for_tag("black and white").await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].picture_name, "bw1");
    assert_eq!(entries[0].tags, vec!["BLACK AND WHITE", "CITY"]);
}

#[tokio::test]
async fn non_success_status_is_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gallery/rest/gallery_service/birds"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let service = service_for(&server);
    match service.entries_for_tag("birds").await {
        Err(ClientError::Status { status, url }) => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.ends_with("/rest/gallery_service/birds"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gallery/rest/gallery_service/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let service = service_for(&server);
    assert!(matches!(service.tags().await, Err(ClientError::Http(_))));
}

#[tokio::test]
async fn image_bytes_without_cache_buster() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gallery/rest/gallery_service/thumbnail/c1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gallery/rest/gallery_service/picture/c1.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![4u8, 5, 6, 7]))
        .mount(&server)
        .await;

    let service = service_for(&server);
    assert_eq!(service.thumbnail("c1.jpg").await.unwrap(), vec![1, 2, 3]);
    assert_eq!(service.picture("c1.jpg").await.unwrap(), vec![4, 5, 6, 7]);

    for request in server.received_requests().await.unwrap() {
        assert_eq!(request.url.query(), None);
    }
}

#[tokio::test]
async fn full_flow_against_http_service() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/gallery/rest/gallery_service/tags",
        serde_json::json!(["cats", "dogs"]),
    )
    .await;
    mount_json(
        &server,
        "/gallery/rest/gallery_service/cats",
        serde_json::json!([{"pictureName": "c1", "description": "A cat", "tags": ["cute"]}]),
    )
    .await;

    let mut gallery = Gallery::new(service_for(&server), ImageLinks::default());
    assert_eq!(gallery.load_tags().await.unwrap(), 2);
    assert_eq!(
        gallery
            .activate(&Activation::Tag("cats".to_string()))
            .await
            .unwrap(),
        Outcome::Thumbnails(1)
    );
    assert_eq!(
        gallery
            .activate(&Activation::Picture("c1".to_string()))
            .await
            .unwrap(),
        Outcome::Detail
    );

    let page = gallery.page();
    assert!(page.buttons().contains(r#"value="cats""#));
    assert!(page.buttons().contains(r#"value="dogs""#));
    assert!(page.thumbnails().contains("rest/gallery_service/thumbnail/c1"));
    assert!(page.big_picture().contains("rest/gallery_service/picture/c1"));
    assert!(page.big_picture().contains("<b>A cat</b>"));
    assert!(page.big_picture().contains(">cute</span>"));
}

#[tokio::test]
async fn unreachable_service_keeps_page_empty() {
    // Port 9 (discard) on localhost is not expected to run an HTTP server
    let config = ServiceConfig {
        base_url: "http://127.0.0.1:9/".to_string(),
        timeout_secs: 2,
        ..ServiceConfig::default()
    };
    let mut gallery = Gallery::new(
        HttpGalleryService::new(&config).unwrap(),
        ImageLinks::default(),
    );

    assert!(gallery.load_tags().await.is_err());
    assert!(gallery.page().buttons().is_empty());
    assert!(gallery.select_tag("cats").await.is_err());
    assert!(gallery.page().thumbnails().is_empty());
}
