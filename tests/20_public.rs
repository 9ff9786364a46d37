mod common;

use anyhow::Result;
use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use tower::ServiceExt;

use common::{json_body, request, send};

#[tokio::test]
async fn hello_needs_no_token() -> Result<()> {
    let res = send(request("GET", "/api/hello", None)).await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await?["message"], "Hello from Festify API");
    Ok(())
}

#[tokio::test]
async fn health_reports_database_state() -> Result<()> {
    for uri in ["/api/health", "/actuator/health"] {
        let res = send(request("GET", uri, None)).await?;

        // No database runs during tests, but either answer is well-formed
        assert!(
            res.status() == StatusCode::OK || res.status() == StatusCode::SERVICE_UNAVAILABLE,
            "unexpected status: {}",
            res.status()
        );
        let body = json_body(res).await?;
        assert_eq!(body["status"], "UP");
        assert!(body["database"] == "UP" || body["database"] == "DOWN");
        assert!(body["timestamp"].is_string());
    }
    Ok(())
}

#[tokio::test]
async fn cors_preflight_is_answered_before_authentication() -> Result<()> {
    let preflight = Request::builder()
        .method("OPTIONS")
        .uri("/api/events")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization,content-type")
        .body(Body::empty())?;

    let res = common::app()?.oneshot(preflight).await?;

    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:3000");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "3600");
    Ok(())
}

#[tokio::test]
async fn unknown_origin_gets_no_cors_grant() -> Result<()> {
    let req = Request::builder()
        .method("GET")
        .uri("/api/hello")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())?;

    let res = common::app()?.oneshot(req).await?;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    Ok(())
}
