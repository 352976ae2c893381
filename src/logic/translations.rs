//! Localized advisory text.
//!
//! Every user-facing sentence is a [`Phrase`]. English is the complete
//! table; Marathi covers every phrase and Hindi only the crop explanation.
//! Any gap (including all of Kannada) falls back to English.

use crate::models::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    // Crop recommendation
    CropExplanation,

    // Soil analysis
    NitrogenDeficiency,
    NitrogenRemedy,
    PhosphorusDeficiency,
    PhosphorusRemedy,
    PotassiumDeficiency,
    PotassiumRemedy,
    AcidicSoil,
    AlkalineSoil,
    NoMajorDeficiencies,
    HealthExcellent,
    HealthGood,
    HealthNeedsImprovement,

    // Fertilizer, seedling stage
    SeedlingFertilizer,
    SeedlingQuantity,
    SeedlingMethod,
    SeedlingTiming,
    SeedlingPrecautionContact,
    SeedlingPrecautionMoisture,

    // Fertilizer, vegetative stage
    VegetativeFertilizer,
    VegetativeQuantity,
    VegetativeMethod,
    VegetativeTiming,
    VegetativePrecautionWater,
    VegetativePrecautionRain,

    // Fertilizer, flowering stage
    FloweringFertilizer,
    FloweringQuantity,
    FloweringMethod,
    FloweringTiming,
    FloweringPrecautionHeat,
    FloweringPrecautionIrrigation,

    // Pest control
    CommonPest,
    FieldInspection,
    RemoveAffectedLeaves,
    CropRotation,
    NeemOilSpray,
    CowUrineMixture,
    ConsultAgricultureDepartment,

    // Market
    DefaultRegion,
    PricePerQuintal,
    StableTrend,
    MarketAdvisory,

    // Weather
    WeatherAdvisory,
}

/// Look up a phrase, falling back to English when the language has no entry.
pub fn text(phrase: Phrase, lang: Language) -> &'static str {
    let localized = match lang {
        Language::En | Language::Kn => None,
        Language::Hi => hindi(phrase),
        Language::Mr => marathi(phrase),
    };
    localized.unwrap_or_else(|| english(phrase))
}

/// Look up a phrase and substitute `{name}` placeholders.
pub fn render(phrase: Phrase, lang: Language, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(text(phrase, lang).to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
}

/// Display name for a crop. Only Marathi has a glossary, covering crops and
/// common agronomy terms; unknown names and every other language return the
/// input unchanged.
pub fn crop_name(crop: &str, lang: Language) -> String {
    match lang {
        Language::Mr => marathi_term(&crop.to_lowercase())
            .map(str::to_string)
            .unwrap_or_else(|| crop.to_string()),
        _ => crop.to_string(),
    }
}

fn english(phrase: Phrase) -> &'static str {
    use Phrase::*;
    match phrase {
        CropExplanation => "Based on your soil and weather conditions, these crops are recommended. Soil pH: {ph}, Temperature: {temp}°C",

        NitrogenDeficiency => "Nitrogen deficiency",
        NitrogenRemedy => "Apply urea or ammonium sulfate",
        PhosphorusDeficiency => "Phosphorus deficiency",
        PhosphorusRemedy => "Apply single super phosphate",
        PotassiumDeficiency => "Potassium deficiency",
        PotassiumRemedy => "Apply muriate of potash",
        AcidicSoil => "Soil is acidic - apply lime",
        AlkalineSoil => "Soil is alkaline - apply gypsum",
        NoMajorDeficiencies => "No major deficiencies",
        HealthExcellent => "Excellent",
        HealthGood => "Good",
        HealthNeedsImprovement => "Needs improvement",

        SeedlingFertilizer => "Starter fertilizer (NPK 10:26:26)",
        SeedlingQuantity => "50 kg per hectare",
        SeedlingMethod => "Apply 5 cm below seed level",
        SeedlingTiming => "At sowing time",
        SeedlingPrecautionContact => "Avoid direct contact with seeds",
        SeedlingPrecautionMoisture => "Apply when soil is moist",

        VegetativeFertilizer => "Urea and NPK mixture",
        VegetativeQuantity => "100 kg urea + 50 kg NPK per hectare",
        VegetativeMethod => "Side dress along crop rows and incorporate",
        VegetativeTiming => "3-4 weeks after sowing",
        VegetativePrecautionWater => "Ensure water availability",
        VegetativePrecautionRain => "Avoid during heavy rains",

        FloweringFertilizer => "Potash rich fertilizer (NPK 12:32:16)",
        FloweringQuantity => "75 kg per hectare",
        FloweringMethod => "Foliar spray dissolved in water",
        FloweringTiming => "At flowering initiation",
        FloweringPrecautionHeat => "Avoid spraying in hot afternoon",
        FloweringPrecautionIrrigation => "Maintain proper irrigation",

        CommonPest => "Common pest",
        FieldInspection => "Regular field inspection",
        RemoveAffectedLeaves => "Remove affected leaves",
        CropRotation => "Practice crop rotation",
        NeemOilSpray => "Neem oil spray",
        CowUrineMixture => "Cow urine mixture",
        ConsultAgricultureDepartment => "Consult local agriculture department",

        DefaultRegion => "Maharashtra",
        PricePerQuintal => "₹{price} per quintal",
        StableTrend => "Stable to slightly increasing",
        MarketAdvisory => "Demand for {crop} is good. Sell at nearby mandi.",

        WeatherAdvisory => "Good conditions for spraying pesticides. Avoid irrigation for next 2 days due to expected rainfall.",
    }
}

fn hindi(phrase: Phrase) -> Option<&'static str> {
    match phrase {
        Phrase::CropExplanation => Some("आपकी मिट्टी और मौसम की स्थिति के अनुसार, इन फसलों की सिफारिश की जाती है। मिट्टी pH: {ph}, तापमान: {temp}°C"),
        _ => None,
    }
}

fn marathi(phrase: Phrase) -> Option<&'static str> {
    use Phrase::*;
    let s = match phrase {
        CropExplanation => "तुमच्या मातीच्या आणि हवामानाच्या परिस्थितीनुसार, या पिकांची शिफारस केली जाते. माती pH: {ph}, तापमान: {temp}°C",

        NitrogenDeficiency => "नायट्रोजनची कमतरता",
        NitrogenRemedy => "युरिया किंवा अमोनियम सल्फेट वापरा",
        PhosphorusDeficiency => "फॉस्फरसची कमतरता",
        PhosphorusRemedy => "सिंगल सुपर फॉस्फेट वापरा",
        PotassiumDeficiency => "पोटॅशियमची कमतरता",
        PotassiumRemedy => "म्युरेट ऑफ पोटॅश वापरा",
        AcidicSoil => "माती आम्लीय आहे - चुना वापरा",
        AlkalineSoil => "माती क्षारीय आहे - जिप्सम वापरा",
        NoMajorDeficiencies => "कोणतीही मोठी कमतरता नाही",
        HealthExcellent => "उत्तम",
        HealthGood => "चांगली",
        HealthNeedsImprovement => "सुधारणा आवश्यक",

        SeedlingFertilizer => "स्टार्टर खत (NPK 10:26:26)",
        SeedlingQuantity => "50 किलो प्रति हेक्टर",
        SeedlingMethod => "बियाण्याच्या खाली 5 सेमी खोलीवर द्या",
        SeedlingTiming => "पेरणीच्या वेळी",
        SeedlingPrecautionContact => "खत बियाण्याच्या थेट संपर्कात येऊ देऊ नका",
        SeedlingPrecautionMoisture => "माती ओलसर असताना द्या",

        VegetativeFertilizer => "युरिया आणि NPK मिश्रण",
        VegetativeQuantity => "100 किलो युरिया + 50 किलो NPK प्रति हेक्टर",
        VegetativeMethod => "पिकाच्या ओळीच्या बाजूला टाका आणि माती मिसळा",
        VegetativeTiming => "पेरणीनंतर 3-4 आठवड्यांनी",
        VegetativePrecautionWater => "पाण्याची उपलब्धता सुनिश्चित करा",
        VegetativePrecautionRain => "पावसाळ्यात देण्याचे टाळा",

        FloweringFertilizer => "पोटॅश युक्त खत (NPK 12:32:16)",
        FloweringQuantity => "75 किलो प्रति हेक्टर",
        FloweringMethod => "पाण्यात विरघळवून फवारणी",
        FloweringTiming => "फुलोरा सुरू झाल्यावर",
        FloweringPrecautionHeat => "दुपारच्या उष्णतेत फवारणी टाळा",
        FloweringPrecautionIrrigation => "योग्य पाणी व्यवस्थापन करा",

        CommonPest => "सामान्य कीटक",
        FieldInspection => "नियमित शेत तपासणी करा",
        RemoveAffectedLeaves => "प्रभावित पाने काढून टाका",
        CropRotation => "पिकाची फेरपालट करा",
        NeemOilSpray => "नीम तेल फवारणी",
        CowUrineMixture => "गोमूत्र मिश्रण",
        ConsultAgricultureDepartment => "स्थानिक कृषी विभागाशी संपर्क साधा",

        DefaultRegion => "महाराष्ट्र",
        PricePerQuintal => "₹{price} प्रति क्विंटल",
        StableTrend => "स्थिर ते किंचित वाढणारा",
        MarketAdvisory => "{crop}ची मागणी चांगली आहे. जवळच्या मंडीत विक्री करा.",

        WeatherAdvisory => return None,
    };
    Some(s)
}

fn marathi_term(term: &str) -> Option<&'static str> {
    let name = match term {
        "rice" => "तांदूळ",
        "wheat" => "गहू",
        "cotton" => "कापूस",
        "sugarcane" => "ऊस",
        "soybean" => "सोयाबीन",
        "maize" => "मका",
        "groundnut" => "शेंगदाणा",
        "onion" => "कांदा",
        "potato" => "बटाटा",
        "tomato" => "टोमॅटो",
        "chili" => "मिरची",
        "turmeric" => "हळद",
        "banana" => "केळी",
        "mango" => "आंबा",
        "grapes" => "द्राक्षे",
        "pomegranate" => "डाळिंब",
        "nitrogen" => "नायट्रोजन",
        "phosphorus" => "फॉस्फरस",
        "potassium" => "पोटॅशियम",
        "organic" => "सेंद्रिय",
        "pesticide" => "कीटकनाशक",
        "fertilizer" => "खत",
        "seed" => "बियाणे",
        "harvest" => "कापणी",
        "sowing" => "पेरणी",
        "irrigation" => "सिंचन",
        "rainfall" => "पाऊस",
        "temperature" => "तापमान",
        "humidity" => "आर्द्रता",
        "soil" => "माती",
        "clay" => "चिकणमाती",
        "sandy" => "वाळूमाती",
        "loamy" => "दुमट माती",
        _ => return None,
    };
    Some(name)
}
