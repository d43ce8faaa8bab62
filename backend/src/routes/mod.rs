//! Route definitions for the AgriSense server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Static catalogs
        .route("/languages", get(handlers::list_languages))
        .route("/texts", get(handlers::get_texts))
        .route("/tasks", get(handlers::list_tasks))
        // PIN auto-fill
        .route("/location/resolve", post(handlers::resolve_location))
        // Analysis
        .route("/prompt", post(handlers::preview_prompt))
        .route("/analysis", post(handlers::run_analysis))
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use axum::{
        body::{to_bytes, Body},
        extract::Path,
        http::{Request, StatusCode},
        Json,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, GeminiConfig, PostalConfig, ServerConfig};
    use crate::external::{GeminiClient, PostalClient};

    const POSTAL_REPLY: &str = r#"[{"Status": "Success", "PostOffice": [
        {"Name": "Wagholi", "Country": "India", "State": "Maharashtra",
         "District": "Pune", "Block": "Haveli"},
        {"Name": "Lonikand", "Country": "India", "State": "Maharashtra",
         "District": "Pune", "Block": "Haveli"}
    ]}]"#;

    /// Stub for both upstreams, counting every request it receives
    async fn spawn_upstream(reply_text: Value, hits: Arc<AtomicUsize>) -> String {
        let postal_hits = hits.clone();
        let app = Router::new()
            .route(
                "/pincode/:pin",
                get(move |Path(_pin): Path<String>| {
                    postal_hits.fetch_add(1, Ordering::SeqCst);
                    async { POSTAL_REPLY }
                }),
            )
            .route(
                "/models/:model",
                post(move || {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let text = reply_text.to_string();
                    async move {
                        Json(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}))
                    }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn app(base_url: &str) -> Router {
        let config = Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            gemini: GeminiConfig {
                api_key: "test-key".to_string(),
                model: "gemini-2.5-flash".to_string(),
                base_url: base_url.to_string(),
                timeout_secs: 5,
            },
            postal: PostalConfig {
                base_url: base_url.to_string(),
                timeout_secs: 5,
            },
        };
        let state = AppState {
            postal: PostalClient::with_base_url(base_url.to_string()),
            gemini: GeminiClient::with_base_url(
                config.gemini.api_key.clone(),
                config.gemini.model.clone(),
                base_url.to_string(),
            ),
            config: Arc::new(config),
        };
        Router::new().nest("/api/v1", api_routes()).with_state(state)
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };
        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn cards_reply() -> Value {
        let verdicts = [
            "Highly Recommended",
            "Recommended",
            "Grow with Care",
            "Not Recommended",
            "Recommended",
        ];
        let items: Vec<Value> = verdicts
            .iter()
            .enumerate()
            .map(|(i, verdict)| {
                json!({
                    "name": format!("Crop {i}"),
                    "englishName": format!("Crop {i}"),
                    "suitabilityScore": 90 - i * 10,
                    "season": "Kharif",
                    "yieldExpected": "10 q/acre",
                    "waterRequirement": "Medium",
                    "difficulty": "Easy",
                    "verdict": verdict,
                    "description": "Suited to black soil"
                })
            })
            .collect();
        json!({"locationSummary": "Semi-arid", "recommendations": items})
    }

    #[tokio::test]
    async fn test_catalog_routes() {
        let app = app("http://127.0.0.1:9");

        let (status, json) = send(app.clone(), "GET", "/api/v1/tasks?language=Hindi", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 6);
        assert_eq!(json[4]["requiresSubject"], true);

        let (_, json) = send(app.clone(), "GET", "/api/v1/texts?language=Klingon", None).await;
        assert_eq!(json["title"], shared::texts(shared::Language::English).title);

        let (_, json) = send(app.clone(), "GET", "/api/v1/languages", None).await;
        assert_eq!(json.as_array().unwrap().len(), 5);

        let (status, json) = send(app, "GET", "/api/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_outbound_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_upstream(cards_reply(), hits.clone()).await;

        let body = json!({
            "location": {"country": "", "pincode": "412207"},
            "task": "Crop Recommendation",
            "language": "English"
        });
        let (status, json) = send(app(&base), "POST", "/api/v1/analysis", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "LOCATION_REQUIRED");

        let body = json!({
            "location": {"country": "India", "pincode": "412207"},
            "task": "Fruit Check",
            "subject_name": "  "
        });
        let (status, json) = send(app(&base), "POST", "/api/v1/analysis", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "SUBJECT_REQUIRED");

        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_crop_recommendation_end_to_end() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_upstream(cards_reply(), hits.clone()).await;

        let body = json!({
            "location": {"country": "India", "pincode": "412207"},
            "task": "Crop Recommendation",
            "language": "English"
        });
        let (status, json) = send(app(&base), "POST", "/api/v1/analysis", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        let cards = json["view"]["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 5);
        let classes: Vec<&str> = cards
            .iter()
            .map(|c| c["badge"]["class"].as_str().unwrap())
            .collect();
        assert_eq!(classes, vec!["positive", "positive", "caution", "negative", "positive"]);
        assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
        assert_eq!(json["task"], "Crop Recommendation");
    }

    #[tokio::test]
    async fn test_fruit_check_without_guide_is_flagged() {
        let hits = Arc::new(AtomicUsize::new(0));
        let reply = json!({
            "locationSummary": "Semi-arid",
            "suitabilityCheck": {
                "name": "Dragon Fruit",
                "suitabilityScore": 74,
                "season": "June-July",
                "yieldExpected": "8 t/acre",
                "waterRequirement": "Low",
                "difficulty": "Moderate",
                "verdict": "Grow with Care",
                "description": "Needs support posts"
            }
        });
        let base = spawn_upstream(reply, hits).await;

        let body = json!({
            "location": {"country": "India", "pincode": "412207"},
            "task": "Fruit Check",
            "language": "English",
            "subject_name": "Dragon Fruit"
        });
        let (status, json) = send(app(&base), "POST", "/api/v1/analysis", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["warnings"][0]["kind"], "missing_cultivation_guide");
        assert!(json["view"]["suitability"]["guide"].is_null());
        assert_eq!(json["view"]["suitability"]["card"]["badge"]["icon"], "alert-triangle");
    }

    #[tokio::test]
    async fn test_location_resolve() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_upstream(json!({}), hits.clone()).await;

        let body = json!({"location": {"pincode": "412207", "town": "Wagholi"}, "language": "Marathi"});
        let (status, json) = send(app(&base), "POST", "/api/v1/location/resolve", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["location"]["district"], "Pune");
        assert_eq!(json["location"]["town"], "Wagholi");
        assert_eq!(json["localities"], json!(["Wagholi", "Lonikand"]));
        assert_eq!(json["status"]["kind"], "found");

        let body = json!({"location": {"pincode": "4122"}});
        let (status, json) = send(app(&base), "POST", "/api/v1/location/resolve", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "INCOMPLETE_PINCODE");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolve_reply_drives_form_session() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_upstream(json!({}), hits).await;

        let mut session = shared::FormSession::new(shared::Language::English);
        let ticket = session.enter_pincode("412207").unwrap();
        let body = json!({"location": session.location, "language": "English"});
        let (status, json) = send(app(&base), "POST", "/api/v1/location/resolve", Some(body)).await;
        assert_eq!(status, StatusCode::OK);

        let form: shared::ResolvedForm = serde_json::from_value(json).unwrap();
        session.complete_lookup(&ticket, form.into_outcome());
        assert_eq!(session.location.state, "Maharashtra");
        assert_eq!(session.location.taluka, "Haveli");
        assert_eq!(session.localities, vec!["Wagholi", "Lonikand"]);
        assert_eq!(
            session.lookup_status.unwrap().kind,
            shared::LookupStatusKind::Found
        );
    }

    #[tokio::test]
    async fn test_prompt_preview() {
        let body = json!({
            "location": {"country": "India", "pincode": "412207"},
            "task": "Fruit Recommendation"
        });
        let (status, json) = send(app("http://127.0.0.1:9"), "POST", "/api/v1/prompt", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        let instruction = json["instruction"].as_str().unwrap();
        assert!(instruction.contains("exactly **10**"));
        assert_eq!(json["schema"]["required"][0], "locationSummary");
    }
}
