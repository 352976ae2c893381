use super::translations::{text, Phrase};
use crate::models::{Language, PestAdvisory};

const CONTROL_METHODS: [Phrase; 3] = [
    Phrase::FieldInspection,
    Phrase::RemoveAffectedLeaves,
    Phrase::CropRotation,
];

const ORGANIC_SOLUTIONS: [Phrase; 2] = [Phrase::NeemOilSpray, Phrase::CowUrineMixture];

const CHEMICAL_SOLUTIONS: [Phrase; 1] = [Phrase::ConsultAgricultureDepartment];

fn localize(phrases: &[Phrase], language: Language) -> Vec<String> {
    phrases
        .iter()
        .map(|p| text(*p, language).to_string())
        .collect()
}

/// General integrated pest management advice. The same bundle is returned
/// for every crop and description.
pub fn pest_control(crop: &str, description: &str, language: Language) -> PestAdvisory {
    tracing::debug!(crop, description, "Building pest advisory");

    PestAdvisory {
        identified_pest: text(Phrase::CommonPest, language).to_string(),
        control_methods: localize(&CONTROL_METHODS, language),
        organic_solutions: localize(&ORGANIC_SOLUTIONS, language),
        chemical_solutions: localize(&CHEMICAL_SOLUTIONS, language),
        language,
    }
}
