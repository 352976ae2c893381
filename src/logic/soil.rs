use super::calculations::overall_soil_score;
use super::rules::SoilRulesEngine;
use super::translations::{text, Phrase};
use crate::models::{Language, SoilHealth, SoilHealthResult, SoilSample};

fn health_phrase(health: SoilHealth) -> Phrase {
    match health {
        SoilHealth::Excellent => Phrase::HealthExcellent,
        SoilHealth::Good => Phrase::HealthGood,
        SoilHealth::NeedsImprovement => Phrase::HealthNeedsImprovement,
    }
}

pub fn analyze_soil(
    engine: &SoilRulesEngine,
    sample: &SoilSample,
    language: Language,
) -> SoilHealthResult {
    let findings = engine.evaluate(sample);

    let mut deficiencies: Vec<String> = findings
        .iter()
        .filter_map(|f| f.deficiency)
        .map(|p| text(p, language).to_string())
        .collect();
    let recommendations: Vec<String> = findings
        .iter()
        .map(|f| text(f.remedy, language).to_string())
        .collect();

    if deficiencies.is_empty() {
        deficiencies.push(text(Phrase::NoMajorDeficiencies, language).to_string());
    }

    let overall = overall_soil_score(sample);
    let health = SoilHealth::from_score(overall);

    tracing::debug!(overall, %health, soil_type = %sample.soil_type, "Scored soil sample");

    SoilHealthResult {
        soil_health: text(health_phrase(health), language).to_string(),
        recommendations,
        deficiencies,
        language,
    }
}
