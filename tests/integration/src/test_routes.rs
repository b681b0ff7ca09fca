//! Routing, health, and CORS behavior over the wire.

#[cfg(test)]
mod tests {
    use crate::spawn_server;

    #[tokio::test]
    async fn test_should_serve_health_endpoint() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client.get(format!("{base}/health")).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "running");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_should_answer_cors_preflight() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client
            .request(reqwest::Method::OPTIONS, format!("{base}/ladders"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 204);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*"),
        );
    }

    #[tokio::test]
    async fn test_should_add_common_headers_to_every_response() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client.get(format!("{base}/ladders/000000")).send().await.unwrap();
        assert!(resp.headers().get("x-request-id").is_some());
        assert_eq!(
            resp.headers().get("server").and_then(|v| v.to_str().ok()),
            Some("LadderStack"),
        );
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*"),
        );
    }

    #[tokio::test]
    async fn test_should_reject_unknown_route() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client.get(format!("{base}/nope")).send().await.unwrap();
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_should_reject_wrong_method() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client
            .delete(format!("{base}/ladders"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 405);

        let resp = client
            .get(format!("{base}/ladders/join"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 405);
    }
}
