use super::error::ApiError;
use super::AppState;
use crate::models::{
    CropRequest, FertilizerPlan, FertilizerRequest, MarketQuote, MarketRequest, PestAdvisory,
    PestRequest, QueryRecord, QueryType, RecommendationResult, SoilHealthResult, SoilRequest,
    WeatherReport, WeatherRequest,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use serde_json::Value;

const DEFAULT_RECENT_LIMIT: usize = 20;
const MAX_RECENT_LIMIT: usize = 100;

type JsonBody = Result<Json<Value>, JsonRejection>;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "query_log": state.query_log.is_some()
    }))
}

pub async fn recommend_crops(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<RecommendationResult>, ApiError> {
    let Json(body) = payload?;
    let req = CropRequest::from_json(&body)?;
    tracing::debug!(language = %req.language, "Crop recommendation request");

    let result = state.advisor.recommend_crops(&req);
    state
        .record(QueryRecord::new(QueryType::Crop, req.language, body, to_value(&result)))
        .await;
    Ok(Json(result))
}

pub async fn analyze_soil(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<SoilHealthResult>, ApiError> {
    let Json(body) = payload?;
    let req = SoilRequest::from_json(&body)?;
    tracing::debug!(language = %req.language, "Soil analysis request");

    let result = state.advisor.analyze_soil(&req);
    state
        .record(QueryRecord::new(QueryType::Soil, req.language, body, to_value(&result)))
        .await;
    Ok(Json(result))
}

pub async fn recommend_fertilizer(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<FertilizerPlan>, ApiError> {
    let Json(body) = payload?;
    let req = FertilizerRequest::from_json(&body)?;
    tracing::debug!(crop = %req.crop, stage = %req.stage(), "Fertilizer request");

    let result = state.advisor.recommend_fertilizer(&req);
    state
        .record(QueryRecord::new(
            QueryType::Fertilizer,
            req.language,
            body,
            to_value(&result),
        ))
        .await;
    Ok(Json(result))
}

pub async fn pest_control(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<PestAdvisory>, ApiError> {
    let Json(body) = payload?;
    let req = PestRequest::from_json(&body)?;
    tracing::debug!(crop = %req.crop, "Pest control request");

    let result = state.advisor.pest_control(&req);
    state
        .record(QueryRecord::new(QueryType::Pest, req.language, body, to_value(&result)))
        .await;
    Ok(Json(result))
}

pub async fn market_price(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<MarketQuote>, ApiError> {
    let Json(body) = payload?;
    let req = MarketRequest::from_json(&body)?;
    tracing::debug!(crop = %req.crop, "Market price request");

    let result = state.advisor.market_price(&req);
    let record = QueryRecord::new(QueryType::Market, req.language, body, to_value(&result))
        .with_location(req.location.as_deref());
    state.record(record).await;
    Ok(Json(result))
}

pub async fn weather_info(
    State(state): State<AppState>,
    payload: JsonBody,
) -> Result<Json<WeatherReport>, ApiError> {
    let Json(body) = payload?;
    let req = WeatherRequest::from_json(&body)?;
    tracing::debug!(location = ?req.location, "Weather request");

    let result = state.advisor.weather_report(&req);
    let record = QueryRecord::new(QueryType::Weather, req.language, body, to_value(&result))
        .with_location(req.location.as_deref());
    state.record(record).await;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub limit: Option<usize>,
}

pub async fn recent_queries(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Value>, ApiError> {
    let db = state
        .query_log
        .clone()
        .ok_or_else(|| ApiError::NotFound("Query log is disabled".to_string()))?;

    let limit = params
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT);

    let records = tokio::task::spawn_blocking(move || db.recent_query_records(limit))
        .await
        .map_err(|e| ApiError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(serde_json::json!({ "records": records })))
}

fn to_value<T: serde::Serialize>(response: &T) -> Value {
    serde_json::to_value(response).unwrap_or(Value::Null)
}
