use serde::{Deserialize, Serialize};

/// Soil test reading. NPK in kg/ha equivalents, pH on the 0-14 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    #[serde(default)]
    pub soil_type: String,
}

impl SoilSample {
    pub fn new(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            ph,
            soil_type: String::new(),
        }
    }

    pub fn with_soil_type(mut self, soil_type: impl Into<String>) -> Self {
        self.soil_type = soil_type.into();
        self
    }
}

/// Weather reading used for crop matching. Humidity is accepted but not scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature: f64,
    pub rainfall: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl WeatherSample {
    pub fn new(temperature: f64, rainfall: f64) -> Self {
        Self {
            temperature,
            rainfall,
            humidity: None,
        }
    }

    pub fn with_humidity(mut self, humidity: f64) -> Self {
        self.humidity = Some(humidity);
        self
    }
}
