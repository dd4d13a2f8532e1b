//! tests/api/health_check.rs

use crate::helpers::setup;

#[tokio::test]
async fn health_check_works() {
    let test = setup().await;

    let response = test.get("/health").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        r#"{"status":"ok","message":"Service is running"}"#,
        response.text().await.expect("Failed to read body.")
    );
}

#[tokio::test]
async fn health_check_responds_with_json() {
    let test = setup().await;

    let response = test.get("/health").await;

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content type.")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn unknown_paths_return_404() {
    let test = setup().await;

    let response = test.get("/health_check").await;

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn health_check_ignores_a_trailing_slash() {
    let test = setup().await;

    let response = test.get("/health/").await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn head_requests_are_answered() {
    let test = setup().await;

    for path in ["/", "/health"] {
        let response = test
            .client
            .head(&format!("{}{}", test.address, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(200, response.status().as_u16());
    }
}
