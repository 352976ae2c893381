use super::{nutrient::NutrientRule, ph_balance::PhBalanceRule, SoilFinding, SoilRule};
use crate::models::SoilSample;

pub struct SoilRulesEngine {
    rules: Vec<Box<dyn SoilRule>>,
}

impl SoilRulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn SoilRule>> = vec![
            Box::new(NutrientRule::nitrogen()),
            Box::new(NutrientRule::phosphorus()),
            Box::new(NutrientRule::potassium()),
            Box::new(PhBalanceRule),
        ];

        Self { rules }
    }

    /// Findings in rule order; every rule is evaluated independently.
    pub fn evaluate(&self, sample: &SoilSample) -> Vec<SoilFinding> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let finding = rule.evaluate(sample)?;
                tracing::debug!(rule = rule.id(), "Soil rule fired");
                Some(finding)
            })
            .collect()
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for SoilRulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::translations::Phrase;

    #[test]
    fn all_rules_fire_on_depleted_acidic_soil() {
        let engine = SoilRulesEngine::new();
        let findings = engine.evaluate(&SoilSample::new(30.0, 20.0, 20.0, 5.0));

        let deficiencies: Vec<_> = findings.iter().filter_map(|f| f.deficiency).collect();
        assert_eq!(
            deficiencies,
            vec![
                Phrase::NitrogenDeficiency,
                Phrase::PhosphorusDeficiency,
                Phrase::PotassiumDeficiency
            ]
        );
        assert_eq!(findings.last().map(|f| f.remedy), Some(Phrase::AcidicSoil));
    }

    #[test]
    fn balanced_soil_fires_nothing() {
        let engine = SoilRulesEngine::new();
        assert!(engine.evaluate(&SoilSample::new(80.0, 40.0, 40.0, 6.8)).is_empty());
    }

    #[test]
    fn alkaline_soil_with_low_nitrogen() {
        let engine = SoilRulesEngine::new();
        let remedies: Vec<_> = engine
            .evaluate(&SoilSample::new(10.0, 100.0, 100.0, 8.5))
            .iter()
            .map(|f| f.remedy)
            .collect();

        assert_eq!(remedies, vec![Phrase::NitrogenRemedy, Phrase::AlkalineSoil]);
    }

    #[test]
    fn list_rules_has_unique_ids() {
        let rules = SoilRulesEngine::new().list_rules();
        assert_eq!(rules.len(), 4);
        let mut ids: Vec<_> = rules.iter().map(|(id, _)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
