use super::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommended_crops: Vec<String>,
    pub confidence: f64,
    pub explanation: String,
    pub language: Language,
}

/// Overall soil health band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilHealth {
    Excellent,
    Good,
    NeedsImprovement,
}

impl SoilHealth {
    pub fn from_score(overall: f64) -> Self {
        if overall > 0.7 {
            SoilHealth::Excellent
        } else if overall > 0.5 {
            SoilHealth::Good
        } else {
            SoilHealth::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilHealth::Excellent => "Excellent",
            SoilHealth::Good => "Good",
            SoilHealth::NeedsImprovement => "Needs improvement",
        }
    }
}

impl std::fmt::Display for SoilHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilHealthResult {
    pub soil_health: String,
    pub recommendations: Vec<String>,
    pub deficiencies: Vec<String>,
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStage {
    Seedling,
    Vegetative,
    /// Flowering and every later or unrecognized stage.
    Flowering,
}

impl GrowthStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Seedling => "seedling",
            GrowthStage::Vegetative => "vegetative",
            GrowthStage::Flowering => "flowering",
        }
    }

    /// Anything that is not seedling or vegetative is treated as flowering.
    pub fn from_label(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "seedling" => GrowthStage::Seedling,
            "vegetative" => GrowthStage::Vegetative,
            _ => GrowthStage::Flowering,
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerPlan {
    pub fertilizer_type: String,
    pub quantity: String,
    pub application_method: String,
    pub timing: String,
    pub precautions: Vec<String>,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestAdvisory {
    pub identified_pest: String,
    pub control_methods: Vec<String>,
    pub organic_solutions: Vec<String>,
    pub chemical_solutions: Vec<String>,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub crop: String,
    pub location: String,
    pub current_price: String,
    pub price_trend: String,
    pub market_advisory: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub wind_speed: f64,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub day: String,
    pub temp: String,
    pub condition: String,
    pub rain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
    pub advisory: String,
    pub language: Language,
}
