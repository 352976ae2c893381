//! HTTP surface for the advisory engine.

mod error;
mod handlers;

use crate::config::ServerConfig;
use crate::db::Database;
use crate::logic::Advisor;
use crate::models::QueryRecord;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<Advisor>,
    /// Present only when the query log is enabled
    pub query_log: Option<Database>,
}

impl AppState {
    pub fn new(advisor: Advisor) -> Self {
        Self {
            advisor: Arc::new(advisor),
            query_log: None,
        }
    }

    pub fn with_query_log(mut self, db: Database) -> Self {
        self.query_log = Some(db);
        self
    }

    /// Persist one exchange. Failures are logged and never reach the client.
    async fn record(&self, record: QueryRecord) {
        let Some(db) = self.query_log.clone() else {
            return;
        };

        let query_type = record.query_type;
        let outcome = tokio::task::spawn_blocking(move || db.insert_query_record(&record)).await;

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(%query_type, error = %e, "Failed to record query"),
            Err(e) => tracing::warn!(%query_type, error = %e, "Query log task failed"),
        }
    }
}

pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/crops/recommend", post(handlers::recommend_crops))
        .route("/api/soil/analyze", post(handlers::analyze_soil))
        .route("/api/fertilizer/recommend", post(handlers::recommend_fertilizer))
        .route("/api/pest/control", post(handlers::pest_control))
        .route("/api/market/price", post(handlers::market_price))
        .route("/api/weather/info", post(handlers::weather_info))
        .route("/api/queries/recent", get(handlers::recent_queries));

    let router = match &server.static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving static frontend");
            router.fallback_service(ServeDir::new(dir))
        }
        None => router,
    };

    // Middleware (applied in reverse order)
    router
        .layer(RequestBodyLimitLayer::new(server.body_limit_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(query_log: Option<Database>) -> Router {
        let mut state = AppState::new(Advisor::new());
        if let Some(db) = query_log {
            state = state.with_query_log(db);
        }
        create_router(state, &ServerConfig::default())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn health_reports_query_log_state() {
        let (status, body) = send(app(None), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["query_log"], false);
    }

    #[tokio::test]
    async fn crop_recommendation_round_trip() {
        let payload = json!({
            "nitrogen": 100, "phosphorus": 50, "potassium": 50,
            "ph": 6.5, "temperature": 25, "rainfall": 200, "humidity": 70,
            "language": "mr"
        });
        let (status, body) = send(
            app(None),
            post_json("/api/crops/recommend", &payload.to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommended_crops"][0], "तांदूळ");
        assert_eq!(body["language"], "mr");
        assert!(body["explanation"].as_str().unwrap().contains("6.5"));
    }

    #[tokio::test]
    async fn depleted_acidic_soil_needs_improvement() {
        let payload = json!({
            "nitrogen": 30, "phosphorus": 20, "potassium": 20, "ph": 5.0,
            "soil_type": "clay"
        });
        let (status, body) =
            send(app(None), post_json("/api/soil/analyze", &payload.to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["soil_health"], "Needs improvement");
        assert_eq!(body["deficiencies"].as_array().unwrap().len(), 3);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
        assert_eq!(body["language"], "en");
    }

    #[tokio::test]
    async fn market_unknown_crop_uses_default_price() {
        let (status, body) = send(
            app(None),
            post_json("/api/market/price", r#"{"crop": "quinoa"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_price"], "₹2000 per quintal");
        assert_eq!(body["location"], "Maharashtra");
    }

    #[tokio::test]
    async fn fertilizer_and_pest_and_weather_respond() {
        let fert = json!({
            "crop": "wheat", "soil_type": "loam", "nitrogen": 60,
            "phosphorus": 40, "potassium": 40, "growth_stage": "vegetative"
        });
        let (status, body) = send(
            app(None),
            post_json("/api/fertilizer/recommend", &fert.to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fertilizer_type"], "Urea and NPK mixture");

        let (status, body) = send(
            app(None),
            post_json("/api/pest/control", r#"{"crop": "cotton", "pest_description": "holes"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["identified_pest"], "Common pest");

        let (status, body) =
            send(app(None), post_json("/api/weather/info", r#"{"location": "Pune"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["location"], "Pune");
        assert_eq!(body["forecast"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn missing_fields_are_bad_request() {
        let (status, body) = send(
            app(None),
            post_json("/api/crops/recommend", r#"{"nitrogen": 100}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let msg = body["error"].as_str().unwrap();
        assert!(msg.contains("phosphorus"));
        assert!(msg.contains("rainfall"));
    }

    #[tokio::test]
    async fn unknown_language_is_bad_request() {
        let (status, _) = send(
            app(None),
            post_json("/api/market/price", r#"{"crop": "rice", "language": "fr"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, body) =
            send(app(None), post_json("/api/soil/analyze", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn oversized_body_without_length_is_payload_too_large() {
        let limit = ServerConfig::default().body_limit_bytes;
        let body = json!({ "crop": "x".repeat(limit + 1) }).to_string();

        let (status, body) = send(app(None), post_json("/api/market/price", &body)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/market/price")
            .body(Body::from(r#"{"crop": "rice"}"#))
            .unwrap();

        let (status, body) = send(app(None), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn recent_queries_404_when_log_disabled() {
        let (status, _) = send(app(None), get("/api/queries/recent")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn requests_are_recorded_when_log_enabled() {
        let db = Database::open_in_memory().unwrap();

        let (status, _) = send(
            app(Some(db.clone())),
            post_json("/api/market/price", r#"{"crop": "wheat", "location": " Nashik "}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(app(Some(db)), get("/api/queries/recent?limit=5")).await;
        assert_eq!(status, StatusCode::OK);

        let records = body["records"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["query_type"], "market");
        assert_eq!(records[0]["user_location"], "Nashik");
        assert_eq!(records[0]["response"]["current_price"], "₹2500 per quintal");
    }

    #[tokio::test]
    async fn validation_failures_are_not_recorded() {
        let db = Database::open_in_memory().unwrap();
        let (status, _) = send(
            app(Some(db.clone())),
            post_json("/api/soil/analyze", r#"{"ph": "acidic"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(db.recent_query_records(10).unwrap().is_empty());
    }
}
