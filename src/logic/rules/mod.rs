pub mod engine;
pub mod nutrient;
pub mod ph_balance;

pub use engine::SoilRulesEngine;

use super::translations::Phrase;
use crate::models::SoilSample;

/// Outcome of one soil rule: an optional deficiency label plus the remedy
/// to recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoilFinding {
    pub deficiency: Option<Phrase>,
    pub remedy: Phrase,
}

/// Trait for soil health rules
pub trait SoilRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return a finding if it fires
    fn evaluate(&self, sample: &SoilSample) -> Option<SoilFinding>;
}
