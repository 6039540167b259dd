// API Integration Tests
//
// Run with: cargo test --features api --test api_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use sadhaka_page::{create_router, AppState, RenderOptions, SITE};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    fn create_test_app() -> axum::Router {
        let state = AppState::new(&SITE, &RenderOptions::default()).expect("state builds");
        create_router(state)
    }

    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        String::from_utf8(body.to_vec()).expect("UTF-8 body")
    }

    async fn json_response(response: axum::response::Response) -> Value {
        serde_json::from_str(&body_text(response).await).expect("Failed to parse JSON")
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_home_page_html() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.contains("The Journey Through Time"));
        assert_eq!(html.matches("data-practice-id=").count(), 3);
    }

    #[tokio::test]
    async fn test_markdown_and_reader() {
        let response = get("/page.md").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/markdown"));
        assert!(body_text(response).await.contains("### Devi Sadhanas"));

        let response = get("/reader").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<h3>Devi Sadhanas</h3>"));
    }

    #[tokio::test]
    async fn test_page_json() {
        let body = json_response(get("/api/page").await).await;
        assert_eq!(body["active_tab"], "home");
        assert_eq!(body["history"]["timeline"].as_array().unwrap().len(), 4);
        assert_eq!(body["nav_items"][3], "Community");
    }

    #[tokio::test]
    async fn test_practice_lookup() {
        let list = json_response(get("/api/practices").await).await;
        assert_eq!(list.as_array().unwrap().len(), 3);

        let response = get("/api/practices/devi-sadhanas").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["title"], "Devi Sadhanas");
        assert_eq!(body["examples"][0]["name"], "Navaratri Sadhana");

        let response = get("/api/practices/vishnu-sadhanas").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("vishnu-sadhanas"));
    }

    #[tokio::test]
    async fn test_category_lookup() {
        let list = json_response(get("/api/categories").await).await;
        assert_eq!(list.as_array().unwrap().len(), 3);

        let body = json_response(get("/api/categories/mantras").await).await;
        assert_eq!(body["title"], "Sacred Chants");
        assert_eq!(body["icon"], "heart");

        let response = get("/api/categories/pilgrimage").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
