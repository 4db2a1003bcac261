#![cfg(test)]
use std::time::Duration;

use crate::auth::Credentials;
use crate::extractor_config::ServerConfig;
use crate::{Auth, Gallery, WallhavenClient};
use walldrop_common::{
    search::SearchQuery,
    tokio,
    wallpaper::{category::Category, purity::Purity, resolution::Resolution, Wallpaper},
};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PAGE: &str = include_str!("fixtures/search_page.html");
const SUBSCRIPTIONS: &str = include_str!("fixtures/subscriptions.html");
const LOGIN_PAGE: &str = include_str!("fixtures/login_page.html");

fn server_config(server: &MockServer) -> ServerConfig {
    let mut cfg = ServerConfig::with_base_url(&server.uri());
    cfg.image_url_template = format!("{}/full/{{prefix}}/wallhaven-{{id}}.{{ext}}", server.uri());
    cfg
}

fn gallery(server: &MockServer) -> WallhavenClient {
    let cfg = server_config(server);
    let client = WallhavenClient::build_client(&cfg, Duration::from_secs(5)).unwrap();
    WallhavenClient::new(client, cfg)
}

fn wallpaper(server: &MockServer, id: &str) -> Wallpaper {
    Wallpaper {
        id: id.to_string(),
        purity: Purity::Sfw,
        category: Category::General,
        resolution: Resolution::new(1920, 1080),
        favorites: 0,
        image_url: format!("{}/full/{}/wallhaven-{}.jpg", server.uri(), &id[..2], id),
    }
}

#[tokio::test]
async fn subscribed_tags_are_scraped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscription"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SUBSCRIPTIONS))
        .expect(1)
        .mount(&server)
        .await;

    let subs = gallery(&server).fetch_subscribed_tags().await.unwrap();

    assert_eq!(subs.tags(), ["Youjo Senki", "mecha", "landscape"]);
}

#[tokio::test]
async fn logged_out_subscription_page_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscription"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_PAGE))
        .mount(&server)
        .await;

    let err = gallery(&server).fetch_subscribed_tags().await.unwrap_err();
    assert!(err.is_parse(), "unexpected error: {err}");
}

#[tokio::test]
async fn search_sends_the_subscription_query() {
    let server = MockServer::start().await;
    let body = SEARCH_PAGE.replace("https://wallhaven.cc", &server.uri());

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .and(query_param("q", "\"#Youjo Senki\""))
        .and(query_param("categories", "111"))
        .and(query_param("purity", "100"))
        .and(query_param("sorting", "date_added"))
        .and(query_param("order", "desc"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::subscribed_tag("Youjo Senki");
    let page = gallery(&server).search(&query, 2).await.unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.len(), 3);

    let ids: Vec<&str> = page.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, ["94x38z", "k7q1mw", "zm3ky1"]);
    assert_eq!(
        page.wallpapers[1].image_url,
        format!("{}/full/k7/wallhaven-k7q1mw.png", server.uri())
    );
}

#[tokio::test]
async fn search_rejects_page_zero() {
    let server = MockServer::start().await;
    let query = SearchQuery::subscribed_tag("mecha");

    let res = gallery(&server).search(&query, 0).await;
    assert!(matches!(res, Err(crate::error::ExtractorError::ZeroPage)));
}

#[tokio::test]
async fn server_error_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let query = SearchQuery::subscribed_tag("mecha");
    let err = gallery(&server).search(&query, 1).await.unwrap_err();

    assert!(err.is_transport(), "unexpected error: {err}");
}

#[tokio::test]
async fn download_streams_into_destination() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let image = vec![0xFFu8; 70_000];

    Mock::given(method("GET"))
        .and(path("/full/ab/wallhaven-abc123.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(image.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let dest = dir.path().join("tag-mecha-wallhaven-abc123.jpg");
    let written = gallery(&server)
        .download(&wallpaper(&server, "abc123"), &dest)
        .await
        .unwrap();

    assert_eq!(written, image.len() as u64);
    assert_eq!(std::fs::read(&dest).unwrap(), image);
    assert!(!dir.path().join("tag-mecha-wallhaven-abc123.jpg.part").exists());
}

#[tokio::test]
async fn download_overwrites_existing_file() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/full/ab/wallhaven-abc123.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"new".to_vec()))
        .mount(&server)
        .await;

    let dest = dir.path().join("wallhaven-abc123.jpg");
    std::fs::write(&dest, b"old contents").unwrap();

    gallery(&server)
        .download(&wallpaper(&server, "abc123"), &dest)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), b"new");
}

#[tokio::test]
async fn failed_download_leaves_nothing_behind() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/full/ab/wallhaven-abc123.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dest = dir.path().join("wallhaven-abc123.jpg");
    let err = gallery(&server)
        .download(&wallpaper(&server, "abc123"), &dest)
        .await
        .unwrap_err();

    assert!(err.is_transport());
    assert!(!dest.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn login_posts_form_token_and_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_PAGE))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("_token=pJ4cYtq8Vq0kR2"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=hunter2"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/", server.uri())),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let mut client = gallery(&server);
    let creds = Credentials::new(String::from("alice"), String::from("hunter2"));

    client.auth(&creds).await.unwrap();
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn rejected_login_is_an_authentication_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_PAGE))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("{}/login", server.uri())),
        )
        .mount(&server)
        .await;

    let mut client = gallery(&server);
    let creds = Credentials::new(String::from("alice"), String::from("wrong"));

    let err = client.auth(&creds).await.unwrap_err();

    assert!(matches!(
        err,
        crate::error::ExtractorError::AuthenticationFailure { .. }
    ));
    assert!(!client.is_authenticated());
}
