use super::{SoilFinding, SoilRule};
use crate::logic::translations::Phrase;
use crate::models::SoilSample;

/// Macronutrient deficiency rule
///
/// Fires when a nutrient reading is strictly below its floor:
/// - Nitrogen <50 → urea or ammonium sulfate
/// - Phosphorus <30 → single super phosphate
/// - Potassium <30 → muriate of potash
pub struct NutrientRule {
    id: &'static str,
    name: &'static str,
    floor: f64,
    reading: fn(&SoilSample) -> f64,
    deficiency: Phrase,
    remedy: Phrase,
}

impl NutrientRule {
    pub fn nitrogen() -> Self {
        Self {
            id: "nitrogen_deficiency",
            name: "Nitrogen Deficiency",
            floor: 50.0,
            reading: |s| s.nitrogen,
            deficiency: Phrase::NitrogenDeficiency,
            remedy: Phrase::NitrogenRemedy,
        }
    }

    pub fn phosphorus() -> Self {
        Self {
            id: "phosphorus_deficiency",
            name: "Phosphorus Deficiency",
            floor: 30.0,
            reading: |s| s.phosphorus,
            deficiency: Phrase::PhosphorusDeficiency,
            remedy: Phrase::PhosphorusRemedy,
        }
    }

    pub fn potassium() -> Self {
        Self {
            id: "potassium_deficiency",
            name: "Potassium Deficiency",
            floor: 30.0,
            reading: |s| s.potassium,
            deficiency: Phrase::PotassiumDeficiency,
            remedy: Phrase::PotassiumRemedy,
        }
    }
}

impl SoilRule for NutrientRule {
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, sample: &SoilSample) -> Option<SoilFinding> {
        let value = (self.reading)(sample);
        if value >= self.floor {
            return None;
        }

        Some(SoilFinding {
            deficiency: Some(self.deficiency),
            remedy: self.remedy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_is_exclusive() {
        let rule = NutrientRule::nitrogen();
        assert!(rule.evaluate(&SoilSample::new(50.0, 0.0, 0.0, 7.0)).is_none());
        assert!(rule.evaluate(&SoilSample::new(49.9, 0.0, 0.0, 7.0)).is_some());
    }

    #[test]
    fn each_rule_reads_its_own_nutrient() {
        let sample = SoilSample::new(100.0, 10.0, 100.0, 7.0);
        assert!(NutrientRule::nitrogen().evaluate(&sample).is_none());
        assert!(NutrientRule::potassium().evaluate(&sample).is_none());

        let finding = NutrientRule::phosphorus().evaluate(&sample).unwrap();
        assert_eq!(finding.deficiency, Some(Phrase::PhosphorusDeficiency));
        assert_eq!(finding.remedy, Phrase::PhosphorusRemedy);
    }
}
