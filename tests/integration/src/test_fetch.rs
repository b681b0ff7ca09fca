//! Fetch-result endpoint tests.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::{create_game, spawn_server};

    #[tokio::test]
    async fn test_should_fetch_fresh_game_by_path() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();
        let id = create_game(&client, &base, 4, serde_json::json!(null))
            .await
            .unwrap();

        let resp = client
            .get(format!("{base}/ladders/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["id"], id.as_str());
        assert_eq!(body["status"], "waiting");
        assert_eq!(body["currentParticipants"], 0);
        assert_eq!(body["isComplete"], false);
        assert!(body["results"].is_null());
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_should_fetch_by_query_string() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();
        let id = create_game(&client, &base, 2, serde_json::json!(null))
            .await
            .unwrap();

        let resp = client
            .get(format!("{base}/ladders?ladderId={id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_should_fetch_by_body_fallback() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();
        let id = create_game(&client, &base, 2, serde_json::json!(null))
            .await
            .unwrap();

        let resp = client
            .post(format!("{base}/ladders/result"))
            .json(&serde_json::json!({"ladderId": id}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_should_expose_results_after_completion() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();
        let id = create_game(&client, &base, 2, serde_json::json!(["Win", "Lose"]))
            .await
            .unwrap();

        for (name, position) in [("Alice", 1), ("Bob", 2)] {
            let resp = client
                .post(format!("{base}/ladders/join"))
                .json(&serde_json::json!({
                    "ladderId": id,
                    "name": name,
                    "position": position,
                }))
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), 200);
        }

        let resp = client
            .get(format!("{base}/ladders/{id}"))
            .send()
            .await
            .unwrap();
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["status"], "complete");
        assert_eq!(body["isComplete"], true);
        assert_eq!(body["currentParticipants"], 2);

        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        let ends: BTreeSet<u64> = results
            .iter()
            .map(|o| o["endPosition"].as_u64().unwrap())
            .collect();
        assert_eq!(ends, BTreeSet::from([1, 2]));
        for outcome in results {
            let prize = outcome["prize"].as_str().unwrap();
            assert!(prize == "Win" || prize == "Lose");
        }
    }

    #[tokio::test]
    async fn test_should_report_not_found_for_unknown_id() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client
            .get(format!("{base}/ladders/000000"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_should_require_an_identifier() {
        let base = spawn_server().await.unwrap();
        let client = reqwest::Client::new();

        let resp = client.get(format!("{base}/ladders")).send().await.unwrap();
        assert_eq!(resp.status(), 400);
    }
}
