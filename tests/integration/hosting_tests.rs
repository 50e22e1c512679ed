use crate::common::*;
use mockito::{Matcher, Server};
use realty_genie::prelude::*;
use serde_json::json;

fn host(server_url: &str, api_key: Option<&str>) -> ImgbbHost {
    let mut config = create_test_config(server_url, std::env::temp_dir());
    config.image.imgbb_api_key = api_key.map(str::to_string);
    ImgbbHost::new(&config.image).unwrap()
}

#[tokio::test]
async fn test_upload_returns_public_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/1/upload")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("key=imgbb-key".to_string()),
            Matcher::Regex("image=".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"data": {"url": "https://i.ibb.co/xyz/comparison.png"}, "success": true})
                .to_string(),
        )
        .create_async()
        .await;

    let url = host(&server.url(), Some("imgbb-key"))
        .upload(FAKE_PNG)
        .await;
    assert_eq!(url.as_deref(), Some("https://i.ibb.co/xyz/comparison.png"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_upload_yields_none() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/1/upload")
        .with_status(500)
        .create_async()
        .await;

    assert_eq!(host(&server.url(), Some("imgbb-key")).upload(FAKE_PNG).await, None);
}

#[tokio::test]
async fn test_without_key_nothing_is_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/1/upload")
        .expect(0)
        .create_async()
        .await;

    assert_eq!(host(&server.url(), None).upload(FAKE_PNG).await, None);
    mock.assert_async().await;
}
