use super::rules::SoilRulesEngine;
use super::{crops, fertilizer, market, pest, soil, weather};
use crate::error::Result;
use crate::models::{
    CropRequest, FertilizerPlan, FertilizerRequest, MarketQuote, MarketRequest, PestAdvisory,
    PestRequest, QueryType, RecommendationResult, SoilHealthResult, SoilRequest, WeatherReport,
    WeatherRequest,
};
use serde_json::Value;

/// Entry point for every advisory operation. Holds only immutable rule
/// tables, so one instance can be shared across request handlers.
pub struct Advisor {
    soil_rules: SoilRulesEngine,
}

impl Advisor {
    pub fn new() -> Self {
        Self {
            soil_rules: SoilRulesEngine::new(),
        }
    }

    pub fn recommend_crops(&self, req: &CropRequest) -> RecommendationResult {
        crops::recommend_crops(&req.soil_sample(), &req.weather_sample(), req.language)
    }

    pub fn analyze_soil(&self, req: &SoilRequest) -> SoilHealthResult {
        soil::analyze_soil(&self.soil_rules, &req.soil_sample(), req.language)
    }

    pub fn recommend_fertilizer(&self, req: &FertilizerRequest) -> FertilizerPlan {
        fertilizer::recommend_fertilizer(&req.crop, &req.soil_sample(), req.stage(), req.language)
    }

    pub fn pest_control(&self, req: &PestRequest) -> PestAdvisory {
        pest::pest_control(&req.crop, &req.pest_description, req.language)
    }

    pub fn market_price(&self, req: &MarketRequest) -> MarketQuote {
        market::market_price(&req.crop, req.location.as_deref(), req.language)
    }

    pub fn weather_report(&self, req: &WeatherRequest) -> WeatherReport {
        weather::weather_report(req.location.as_deref(), req.language)
    }

    /// Validate a raw request body and run the matching operation.
    pub fn answer(&self, query_type: QueryType, body: &Value) -> Result<Value> {
        let value = match query_type {
            QueryType::Crop => {
                let req = CropRequest::from_json(body)?;
                serde_json::to_value(self.recommend_crops(&req))?
            }
            QueryType::Soil => {
                let req = SoilRequest::from_json(body)?;
                serde_json::to_value(self.analyze_soil(&req))?
            }
            QueryType::Fertilizer => {
                let req = FertilizerRequest::from_json(body)?;
                serde_json::to_value(self.recommend_fertilizer(&req))?
            }
            QueryType::Pest => {
                let req = PestRequest::from_json(body)?;
                serde_json::to_value(self.pest_control(&req))?
            }
            QueryType::Market => {
                let req = MarketRequest::from_json(body)?;
                serde_json::to_value(self.market_price(&req))?
            }
            QueryType::Weather => {
                let req = WeatherRequest::from_json(body)?;
                serde_json::to_value(self.weather_report(&req))?
            }
        };
        Ok(value)
    }

    pub fn soil_rules(&self) -> &SoilRulesEngine {
        &self.soil_rules
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}
