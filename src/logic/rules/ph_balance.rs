use super::{SoilFinding, SoilRule};
use crate::logic::translations::Phrase;
use crate::models::SoilSample;

/// Soil reaction rule
///
/// pH <5.5 is acidic and calls for lime; pH >8.0 is alkaline and calls for
/// gypsum. Neither case adds a deficiency label.
pub struct PhBalanceRule;

const ACIDIC_BELOW: f64 = 5.5;
const ALKALINE_ABOVE: f64 = 8.0;

impl SoilRule for PhBalanceRule {
    fn id(&self) -> &'static str {
        "ph_balance"
    }

    fn name(&self) -> &'static str {
        "Soil pH Balance"
    }

    fn evaluate(&self, sample: &SoilSample) -> Option<SoilFinding> {
        let remedy = if sample.ph < ACIDIC_BELOW {
            Phrase::AcidicSoil
        } else if sample.ph > ALKALINE_ABOVE {
            Phrase::AlkalineSoil
        } else {
            return None;
        };

        Some(SoilFinding {
            deficiency: None,
            remedy,
        })
    }
}
