mod common;

use anyhow::Result;
use common::{BASIC_AUTH, mount_token, spawn_app};
use reqwest::StatusCode;
use serde_json::Value;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn login_returns_the_raw_access_token() -> Result<()> {
    let app = spawn_app().await?;
    mount_token(&app.upstream, "abc", 1).await;

    let res = app.get("/login").await?;

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");
    assert_eq!(res.text().await?, "abc");
    Ok(())
}

#[tokio::test]
async fn every_login_performs_exactly_one_exchange() -> Result<()> {
    let app = spawn_app().await?;
    mount_token(&app.upstream, "abc", 2).await;

    for _ in 0..2 {
        let res = app.get("/login").await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let requests = app.upstream.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(
            request
                .headers
                .get("authorization")
                .and_then(|v| v.to_str().ok()),
            Some(BASIC_AUTH)
        );
    }
    Ok(())
}

#[tokio::test]
async fn rejected_exchange_becomes_bad_gateway() -> Result<()> {
    let app = spawn_app().await?;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            r#"{"error":"invalid_client","error_description":"Invalid client"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let res = app.get("/login").await?;

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "UPSTREAM_REJECTED");
    assert_eq!(body["upstream_status"], 400);
    Ok(())
}

#[tokio::test]
async fn response_without_access_token_is_malformed() -> Result<()> {
    let app = spawn_app().await?;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"token_type":"Bearer"}"#, "application/json"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let res = app.get("/login").await?;

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "MALFORMED_UPSTREAM_RESPONSE");
    Ok(())
}

#[tokio::test]
async fn non_json_token_response_is_malformed() -> Result<()> {
    let app = spawn_app().await?;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>maintenance</html>", "text/html"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    let res = app.get("/login").await?;

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await?;
    assert_eq!(body["code"], "MALFORMED_UPSTREAM_RESPONSE");
    Ok(())
}

#[tokio::test]
async fn lookup_after_login_uses_the_issued_token() -> Result<()> {
    let app = spawn_app().await?;
    mount_token(&app.upstream, "abc", 1).await;
    Mock::given(method("GET"))
        .and(path("/v1/artists/42"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"id":"42"}"#, "application/json"))
        .expect(1)
        .mount(&app.upstream)
        .await;

    assert_eq!(app.get("/login").await?.text().await?, "abc");
    let res = app.get("/v1/artists?id=42").await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, r#"{"id":"42"}"#);
    Ok(())
}
