//! Create-game endpoint tests.

#[cfg(test)]
mod tests {
    use crate::{create_game, spawn_server};

    #[tokio::test]
    async fn test_should_create_game_with_sanitized_prizes() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/ladders"))
            .json(&serde_json::json!({
                "maxParticipants": 4,
                "resultItems": ["Gold", null],
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["status"], "waiting");
        assert_eq!(body["maxParticipants"], 4);
        assert_eq!(body["participants"], serde_json::json!([]));
        assert_eq!(
            body["resultItems"],
            serde_json::json!(["Gold", "no prize", "no prize", "no prize"]),
        );

        let id = body["id"].as_str().unwrap();
        assert_eq!(id.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_should_reject_too_small_max_participants() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/ladders"))
            .json(&serde_json::json!({"maxParticipants": 1}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("maxParticipants"));
    }

    #[tokio::test]
    async fn test_should_reject_malformed_create_body() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/ladders"))
            .header("content-type", "application/json")
            .body("not json at all")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn test_should_reject_non_number_max_participants() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/ladders"))
            .json(&serde_json::json!({"maxParticipants": "four"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    async fn test_should_create_distinct_games() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let a = create_game(&client, &base, 2, serde_json::json!(null))
            .await
            .unwrap();
        let b = create_game(&client, &base, 2, serde_json::json!(null))
            .await
            .unwrap();
        assert_ne!(a, b);
    }
}
