use super::translations::{text, Phrase};
use crate::models::{FertilizerPlan, GrowthStage, Language, SoilSample};

struct StagePlan {
    fertilizer: Phrase,
    quantity: Phrase,
    method: Phrase,
    timing: Phrase,
    precautions: [Phrase; 2],
}

fn stage_plan(stage: GrowthStage) -> StagePlan {
    match stage {
        GrowthStage::Seedling => StagePlan {
            fertilizer: Phrase::SeedlingFertilizer,
            quantity: Phrase::SeedlingQuantity,
            method: Phrase::SeedlingMethod,
            timing: Phrase::SeedlingTiming,
            precautions: [
                Phrase::SeedlingPrecautionContact,
                Phrase::SeedlingPrecautionMoisture,
            ],
        },
        GrowthStage::Vegetative => StagePlan {
            fertilizer: Phrase::VegetativeFertilizer,
            quantity: Phrase::VegetativeQuantity,
            method: Phrase::VegetativeMethod,
            timing: Phrase::VegetativeTiming,
            precautions: [
                Phrase::VegetativePrecautionWater,
                Phrase::VegetativePrecautionRain,
            ],
        },
        GrowthStage::Flowering => StagePlan {
            fertilizer: Phrase::FloweringFertilizer,
            quantity: Phrase::FloweringQuantity,
            method: Phrase::FloweringMethod,
            timing: Phrase::FloweringTiming,
            precautions: [
                Phrase::FloweringPrecautionHeat,
                Phrase::FloweringPrecautionIrrigation,
            ],
        },
    }
}

/// Stage-based fertilizer schedule. Crop and soil readings are accepted for
/// the request contract but the schedule depends on the growth stage alone.
pub fn recommend_fertilizer(
    crop: &str,
    _sample: &SoilSample,
    stage: GrowthStage,
    language: Language,
) -> FertilizerPlan {
    tracing::debug!(crop, %stage, "Selecting fertilizer schedule");

    let plan = stage_plan(stage);
    FertilizerPlan {
        fertilizer_type: text(plan.fertilizer, language).to_string(),
        quantity: text(plan.quantity, language).to_string(),
        application_method: text(plan.method, language).to_string(),
        timing: text(plan.timing, language).to_string(),
        precautions: plan
            .precautions
            .iter()
            .map(|p| text(*p, language).to_string())
            .collect(),
        language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SoilSample {
        SoilSample::new(40.0, 20.0, 20.0, 6.5).with_soil_type("loamy")
    }

    #[test]
    fn seedling_plan() {
        let plan = recommend_fertilizer("rice", &sample(), GrowthStage::Seedling, Language::En);
        assert_eq!(plan.fertilizer_type, "Starter fertilizer (NPK 10:26:26)");
        assert_eq!(plan.quantity, "50 kg per hectare");
        assert_eq!(plan.application_method, "Apply 5 cm below seed level");
        assert_eq!(plan.timing, "At sowing time");
        assert_eq!(
            plan.precautions,
            vec!["Avoid direct contact with seeds", "Apply when soil is moist"]
        );
    }

    #[test]
    fn vegetative_plan() {
        let plan = recommend_fertilizer("wheat", &sample(), GrowthStage::Vegetative, Language::En);
        assert_eq!(plan.fertilizer_type, "Urea and NPK mixture");
        assert_eq!(plan.timing, "3-4 weeks after sowing");
    }

    #[test]
    fn unknown_stage_gets_flowering_plan() {
        let plan = recommend_fertilizer(
            "tomato",
            &sample(),
            GrowthStage::from_label("fruiting"),
            Language::En,
        );
        assert_eq!(plan.fertilizer_type, "Potash rich fertilizer (NPK 12:32:16)");
        assert_eq!(plan.precautions.len(), 2);
    }

    #[test]
    fn plan_ignores_crop_and_nutrients() {
        let a = recommend_fertilizer("rice", &sample(), GrowthStage::Seedling, Language::En);
        let b = recommend_fertilizer(
            "cotton",
            &SoilSample::new(300.0, 300.0, 300.0, 8.0),
            GrowthStage::Seedling,
            Language::En,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn marathi_plan_and_kannada_fallback() {
        let mr = recommend_fertilizer("rice", &sample(), GrowthStage::Seedling, Language::Mr);
        assert_eq!(mr.fertilizer_type, "स्टार्टर खत (NPK 10:26:26)");
        assert_eq!(mr.language, Language::Mr);

        let kn = recommend_fertilizer("rice", &sample(), GrowthStage::Seedling, Language::Kn);
        assert_eq!(kn.fertilizer_type, "Starter fertilizer (NPK 10:26:26)");
        assert_eq!(kn.language, Language::Kn);
    }
}
