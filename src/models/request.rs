//! Request bodies accepted by the advisory endpoints.
//!
//! Each request is parsed from a raw JSON value so that every missing or
//! mistyped field can be reported in one validation message instead of
//! stopping at the first serde error.

use super::{GrowthStage, Language, SoilSample, WeatherSample};
use crate::error::{AgriError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRequest {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub temperature: f64,
    pub rainfall: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub language: Language,
}

impl CropRequest {
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut f = Fields::new(value)?;
        let req = Self {
            nitrogen: f.number("nitrogen"),
            phosphorus: f.number("phosphorus"),
            potassium: f.number("potassium"),
            ph: f.number("ph"),
            temperature: f.number("temperature"),
            rainfall: f.number("rainfall"),
            humidity: f.optional_number("humidity"),
            language: f.language(),
        };
        f.finish()?;
        Ok(req)
    }

    pub fn soil_sample(&self) -> SoilSample {
        SoilSample::new(self.nitrogen, self.phosphorus, self.potassium, self.ph)
    }

    pub fn weather_sample(&self) -> WeatherSample {
        let weather = WeatherSample::new(self.temperature, self.rainfall);
        match self.humidity {
            Some(h) => weather.with_humidity(h),
            None => weather,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilRequest {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    #[serde(default)]
    pub soil_type: String,
    #[serde(default)]
    pub language: Language,
}

impl SoilRequest {
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut f = Fields::new(value)?;
        let req = Self {
            nitrogen: f.number("nitrogen"),
            phosphorus: f.number("phosphorus"),
            potassium: f.number("potassium"),
            ph: f.number("ph"),
            soil_type: f.optional_text("soil_type").unwrap_or_default(),
            language: f.language(),
        };
        f.finish()?;
        Ok(req)
    }

    pub fn soil_sample(&self) -> SoilSample {
        SoilSample::new(self.nitrogen, self.phosphorus, self.potassium, self.ph)
            .with_soil_type(self.soil_type.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerRequest {
    pub crop: String,
    #[serde(default)]
    pub soil_type: String,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    #[serde(default)]
    pub growth_stage: String,
    #[serde(default)]
    pub language: Language,
}

impl FertilizerRequest {
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut f = Fields::new(value)?;
        let req = Self {
            crop: f.text("crop"),
            soil_type: f.optional_text("soil_type").unwrap_or_default(),
            nitrogen: f.number("nitrogen"),
            phosphorus: f.number("phosphorus"),
            potassium: f.number("potassium"),
            growth_stage: f.optional_text("growth_stage").unwrap_or_default(),
            language: f.language(),
        };
        f.finish()?;
        Ok(req)
    }

    /// Fertilizer advice has no pH input; the sample carries a neutral 7.0.
    pub fn soil_sample(&self) -> SoilSample {
        SoilSample::new(self.nitrogen, self.phosphorus, self.potassium, 7.0)
            .with_soil_type(self.soil_type.clone())
    }

    pub fn stage(&self) -> GrowthStage {
        GrowthStage::from_label(&self.growth_stage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PestRequest {
    pub crop: String,
    #[serde(default)]
    pub pest_description: String,
    #[serde(default)]
    pub language: Language,
}

impl PestRequest {
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut f = Fields::new(value)?;
        let req = Self {
            crop: f.text("crop"),
            pest_description: f.optional_text("pest_description").unwrap_or_default(),
            language: f.language(),
        };
        f.finish()?;
        Ok(req)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRequest {
    pub crop: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub language: Language,
}

impl MarketRequest {
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut f = Fields::new(value)?;
        let req = Self {
            crop: f.text("crop"),
            location: f.optional_text("location"),
            language: f.language(),
        };
        f.finish()?;
        Ok(req)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub language: Language,
}

impl WeatherRequest {
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut f = Fields::new(value)?;
        let req = Self {
            location: f.optional_text("location"),
            language: f.language(),
        };
        f.finish()?;
        Ok(req)
    }
}

/// Field reader that records every problem it meets.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    problems: Vec<String>,
}

impl<'a> Fields<'a> {
    fn new(value: &'a Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| AgriError::Validation("request body must be a JSON object".into()))?;
        Ok(Self {
            map,
            problems: Vec::new(),
        })
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    fn number(&mut self, name: &str) -> f64 {
        match self.get(name) {
            None => {
                self.problems.push(format!("{} is required", name));
                0.0
            }
            Some(v) => v.as_f64().unwrap_or_else(|| {
                self.problems.push(format!("{} must be a number", name));
                0.0
            }),
        }
    }

    fn optional_number(&mut self, name: &str) -> Option<f64> {
        let v = self.get(name)?;
        if v.as_f64().is_none() {
            self.problems.push(format!("{} must be a number", name));
        }
        v.as_f64()
    }

    fn text(&mut self, name: &str) -> String {
        match self.optional_text(name) {
            Some(s) if !s.trim().is_empty() => s,
            Some(_) | None => {
                if !self.problems.iter().any(|p| p.starts_with(name)) {
                    self.problems.push(format!("{} is required", name));
                }
                String::new()
            }
        }
    }

    fn optional_text(&mut self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.problems.push(format!("{} must be a string", name));
                None
            }
        }
    }

    fn language(&mut self) -> Language {
        let Some(v) = self.get("language") else {
            return Language::default();
        };
        match v.as_str().and_then(Language::from_str) {
            Some(lang) => lang,
            None => {
                self.problems
                    .push("language must be one of en, hi, mr, kn".to_string());
                Language::default()
            }
        }
    }

    fn finish(self) -> Result<()> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(AgriError::Validation(self.problems.join("; ")))
        }
    }
}
