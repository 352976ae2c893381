/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Growing requirements for one crop.
#[derive(Debug, Clone, Copy)]
pub struct CropProfile {
    pub name: &'static str,
    pub nitrogen: Range,
    pub phosphorus: Range,
    pub potassium: Range,
    pub ph: Range,
    pub temperature: Range,
    pub rainfall: Range,
}

impl CropProfile {
    pub fn ranges(&self) -> [Range; 6] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.ph,
            self.temperature,
            self.rainfall,
        ]
    }
}

/// A ranked crop with its match confidence (matched attributes / 6).
#[derive(Debug, Clone, PartialEq)]
pub struct CropMatch {
    pub crop: &'static str,
    pub confidence: f64,
}
