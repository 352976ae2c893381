use super::calculations::{fixed1, mean, round2};
use super::translations::{crop_name, render, Phrase};
use crate::models::{
    CropMatch, CropProfile, Language, Range, RecommendationResult, SoilSample, WeatherSample,
};

/// Crops need at least this many of the six attributes in range to qualify.
pub const ADMISSION_THRESHOLD: usize = 4;

pub const MAX_RECOMMENDATIONS: usize = 3;

const ATTRIBUTE_COUNT: f64 = 6.0;

pub const FALLBACK_CROP: &str = "rice";
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

const fn profile(
    name: &'static str,
    n: (f64, f64),
    p: (f64, f64),
    k: (f64, f64),
    ph: (f64, f64),
    temp: (f64, f64),
    rain: (f64, f64),
) -> CropProfile {
    CropProfile {
        name,
        nitrogen: Range::new(n.0, n.1),
        phosphorus: Range::new(p.0, p.1),
        potassium: Range::new(k.0, k.1),
        ph: Range::new(ph.0, ph.1),
        temperature: Range::new(temp.0, temp.1),
        rainfall: Range::new(rain.0, rain.1),
    }
}

/// Requirement table, in ranking tie-break order.
pub static CROP_TABLE: [CropProfile; 10] = [
    profile("rice", (80.0, 120.0), (40.0, 60.0), (40.0, 60.0), (5.5, 7.0), (20.0, 30.0), (150.0, 300.0)),
    profile("wheat", (100.0, 140.0), (40.0, 60.0), (40.0, 60.0), (6.0, 7.5), (15.0, 25.0), (50.0, 100.0)),
    profile("cotton", (60.0, 100.0), (30.0, 50.0), (30.0, 50.0), (6.0, 7.5), (21.0, 30.0), (50.0, 100.0)),
    profile("sugarcane", (200.0, 300.0), (80.0, 120.0), (100.0, 150.0), (6.0, 7.5), (20.0, 30.0), (150.0, 250.0)),
    profile("soybean", (20.0, 40.0), (60.0, 80.0), (40.0, 60.0), (6.0, 7.0), (20.0, 30.0), (60.0, 100.0)),
    profile("maize", (100.0, 150.0), (50.0, 75.0), (40.0, 60.0), (5.5, 7.0), (18.0, 27.0), (50.0, 100.0)),
    profile("groundnut", (20.0, 40.0), (40.0, 60.0), (60.0, 80.0), (6.0, 7.0), (20.0, 30.0), (50.0, 75.0)),
    profile("onion", (100.0, 150.0), (50.0, 75.0), (100.0, 150.0), (6.0, 7.0), (13.0, 24.0), (65.0, 100.0)),
    profile("potato", (100.0, 150.0), (50.0, 80.0), (100.0, 150.0), (5.0, 6.5), (15.0, 20.0), (50.0, 70.0)),
    profile("tomato", (100.0, 150.0), (50.0, 80.0), (100.0, 150.0), (6.0, 7.0), (18.0, 27.0), (60.0, 150.0)),
];

/// Number of the six attributes that fall inside the profile's ranges.
pub fn match_score(profile: &CropProfile, soil: &SoilSample, weather: &WeatherSample) -> usize {
    let readings = [
        soil.nitrogen,
        soil.phosphorus,
        soil.potassium,
        soil.ph,
        weather.temperature,
        weather.rainfall,
    ];

    profile
        .ranges()
        .iter()
        .zip(readings)
        .filter(|(range, value)| range.contains(*value))
        .count()
}

/// Rank qualifying crops, best first. Never empty: when nothing reaches the
/// admission threshold the result is the single rice fallback.
pub fn rank_crops(soil: &SoilSample, weather: &WeatherSample) -> Vec<CropMatch> {
    let mut matches: Vec<CropMatch> = CROP_TABLE
        .iter()
        .filter_map(|profile| {
            let score = match_score(profile, soil, weather);
            (score >= ADMISSION_THRESHOLD).then(|| CropMatch {
                crop: profile.name,
                confidence: score as f64 / ATTRIBUTE_COUNT,
            })
        })
        .collect();

    // sort_by is stable, so equal confidences keep table order
    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    matches.truncate(MAX_RECOMMENDATIONS);

    if matches.is_empty() {
        matches.push(CropMatch {
            crop: FALLBACK_CROP,
            confidence: FALLBACK_CONFIDENCE,
        });
    }

    matches
}

pub fn recommend_crops(
    soil: &SoilSample,
    weather: &WeatherSample,
    language: Language,
) -> RecommendationResult {
    let ranked = rank_crops(soil, weather);

    let confidences: Vec<f64> = ranked.iter().map(|m| m.confidence).collect();
    let confidence = round2(mean(&confidences).unwrap_or(FALLBACK_CONFIDENCE));

    let explanation = render(
        Phrase::CropExplanation,
        language,
        &[
            ("ph", fixed1(soil.ph).as_str()),
            ("temp", fixed1(weather.temperature).as_str()),
        ],
    );

    tracing::debug!(
        crops = ?ranked.iter().map(|m| m.crop).collect::<Vec<_>>(),
        confidence,
        "Ranked crops"
    );

    RecommendationResult {
        recommended_crops: ranked
            .iter()
            .map(|m| crop_name(m.crop, language))
            .collect(),
        confidence,
        explanation,
        language,
    }
}
