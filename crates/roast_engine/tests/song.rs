use std::time::Duration;

use pretty_assertions::assert_eq;
use roast_engine::{ApiSettings, FailureKind, ReqwestApiClient, SongApi};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestApiClient {
    let settings = ApiSettings::with_base_url(Url::parse(&server.uri()).expect("server url"));
    ReqwestApiClient::new(settings).expect("client")
}

#[tokio::test]
async fn song_request_carries_the_fixed_style() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/song"))
        .and(body_json(json!({
            "prompt": "Explain quantum computing",
            "roast": "Nice and concise!",
            "style": "kendrick",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Carbon Footprint Blues",
            "audio_url": "https://song.example/track.mp3",
            "image_url": "https://song.example/cover.png",
            "status": "streaming",
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate_song("Explain quantum computing", "Nice and concise!")
        .await
        .expect("song ok");

    assert_eq!(response.title.as_deref(), Some("Carbon Footprint Blues"));
    assert_eq!(
        response.audio_url.as_deref(),
        Some("https://song.example/track.mp3")
    );
    assert_eq!(response.status.as_deref(), Some("streaming"));
}

#[tokio::test]
async fn song_response_fields_are_all_optional() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/song"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate_song("p", "r")
        .await
        .expect("song ok");

    assert_eq!(response, roast_engine::SongResponse::default());
}

#[tokio::test]
async fn song_http_errors_are_reported_not_recovered() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/song"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_song("p", "r")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn song_transport_errors_map_to_network() {
    // Nothing listens on this port.
    let settings = ApiSettings {
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(200),
        ..ApiSettings::with_base_url(Url::parse("http://127.0.0.1:9").unwrap())
    };
    let client = ReqwestApiClient::new(settings).expect("client");

    let err = client.generate_song("p", "r").await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::Network | FailureKind::Timeout
    ));
}

#[tokio::test]
async fn song_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/song"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..ApiSettings::with_base_url(Url::parse(&server.uri()).unwrap())
    };
    let client = ReqwestApiClient::new(settings).expect("client");

    let err = client.generate_song("p", "r").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}
