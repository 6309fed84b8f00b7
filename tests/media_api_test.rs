//! Media endpoint tests using wiremock.
//!
//! These tests verify that the MediaService hits the expected paths under
//! `/api/v1` and that wire records come back transformed into entities.

mod common;

use common::test_client;
use fukabori::error::ApiError;
use fukabori::fixtures;
use fukabori::models::{MediaDraft, MediaType};
use fukabori::services::{MediaFilter, MediaService};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_media_returns_entities() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::media_records()))
        .mount(&server)
        .await;

    let service = MediaService::new(test_client(&server));
    let items = service.list(&MediaFilter::default()).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "1");
    assert_eq!(items[0].title, "鬼滅の刃");
    assert_eq!(items[0].media_type, MediaType::Anime);
    assert_eq!(items[0].genres, vec!["アクション", "ファンタジー"]);
    assert_eq!(items[1].id, "2");
    assert_eq!(items[1].media_type, MediaType::Book);
    assert_eq!(items[1].release_year, Some(1997));
}

#[tokio::test]
async fn test_list_media_filtered_by_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/media"))
        .and(query_param("media_type", "ANIME"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([fixtures::anime_record()])))
        .mount(&server)
        .await;

    let service = MediaService::new(test_client(&server));
    let items = service
        .list(&MediaFilter::by_type(MediaType::Anime))
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].media_type, MediaType::Anime);
}

#[tokio::test]
async fn test_get_media_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/media/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::anime_record()))
        .mount(&server)
        .await;

    let service = MediaService::new(test_client(&server));
    let item = service.get("1").await.unwrap();

    assert_eq!(item.id, "1");
    assert_eq!(item.creator.as_deref(), Some("吾峠呼世晴"));
}

#[tokio::test]
async fn test_create_media_posts_payload() {
    let server = MockServer::start().await;

    // No id in the body, unset optionals omitted, genres always present
    Mock::given(method("POST"))
        .and(path("/api/v1/media"))
        .and(body_json(json!({
            "title": "時計じかけのオレンジ",
            "media_type": "MOVIE",
            "genres": []
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "title": "時計じかけのオレンジ",
            "media_type": "MOVIE",
            "captured_at": "2024-05-01T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let service = MediaService::new(test_client(&server));
    let created = service
        .create(&MediaDraft::new("時計じかけのオレンジ", MediaType::Movie))
        .await
        .unwrap();

    assert_eq!(created.id, "3");
    assert!(created.genres.is_empty());
}

#[tokio::test]
async fn test_update_media_puts_payload() {
    let server = MockServer::start().await;

    let mut draft = MediaDraft::new("ハリー・ポッターと賢者の石", MediaType::Book);
    draft.release_year = Some(1997);

    Mock::given(method("PUT"))
        .and(path("/api/v1/media/2"))
        .and(body_json(json!({
            "title": "ハリー・ポッターと賢者の石",
            "media_type": "BOOK",
            "release_year": 1997,
            "genres": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::book_record()))
        .mount(&server)
        .await;

    let service = MediaService::new(test_client(&server));
    let updated = service.update("2", &draft).await.unwrap();

    assert_eq!(updated.id, "2");
}

#[tokio::test]
async fn test_delete_media() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/media/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let service = MediaService::new(test_client(&server));
    let result = service.delete("1").await;

    assert!(result.is_ok(), "Expected Ok, got Err: {:?}", result);
}

#[tokio::test]
async fn test_missing_item_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/media/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Media not found"
        })))
        .mount(&server)
        .await;

    let service = MediaService::new(test_client(&server));
    let result = service.get("99").await;

    match result {
        Err(ApiError::Status {
            status,
            status_text,
        }) => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    // A successful status with a body that is not a media listing
    Mock::given(method("GET"))
        .and(path("/api/v1/media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let service = MediaService::new(test_client(&server));
    let result = service.list(&MediaFilter::default()).await;

    assert!(matches!(result, Err(ApiError::Decode(_))));
}
