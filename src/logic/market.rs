use super::translations::{crop_name, render, text, Phrase};
use crate::models::{Language, MarketQuote};

/// Price for crops missing from the table.
pub const DEFAULT_PRICE: u32 = 2000;

/// Base prices in rupees per quintal.
const BASE_PRICES: [(&str, u32); 8] = [
    ("rice", 2000),
    ("wheat", 2500),
    ("cotton", 6000),
    ("sugarcane", 3000),
    ("soybean", 4000),
    ("onion", 1500),
    ("potato", 1200),
    ("tomato", 2500),
];

pub fn base_price(crop: &str) -> u32 {
    let crop = crop.to_lowercase();
    BASE_PRICES
        .iter()
        .find(|(name, _)| *name == crop)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_PRICE)
}

/// Location to report, or the regional default when unset or blank.
pub fn location_or_default(location: Option<&str>, language: Language) -> String {
    match location {
        Some(loc) if !loc.is_empty() => loc.to_string(),
        _ => text(Phrase::DefaultRegion, language).to_string(),
    }
}

pub fn market_price(crop: &str, location: Option<&str>, language: Language) -> MarketQuote {
    let price = base_price(crop);
    let display_name = crop_name(crop, language);

    tracing::debug!(crop, price, "Quoting market price");

    MarketQuote {
        location: location_or_default(location, language),
        current_price: render(
            Phrase::PricePerQuintal,
            language,
            &[("price", price.to_string().as_str())],
        ),
        price_trend: text(Phrase::StableTrend, language).to_string(),
        market_advisory: render(Phrase::MarketAdvisory, language, &[("crop", display_name.as_str())]),
        crop: display_name,
        language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rice_defaults_to_maharashtra() {
        let quote = market_price("rice", None, Language::En);
        assert_eq!(quote.current_price, "₹2000 per quintal");
        assert_eq!(quote.location, "Maharashtra");
        assert_eq!(quote.crop, "rice");
        assert_eq!(quote.price_trend, "Stable to slightly increasing");
        assert_eq!(quote.market_advisory, "Demand for rice is good. Sell at nearby mandi.");
    }

    #[test]
    fn unknown_crop_uses_default_price() {
        let quote = market_price("nonexistent-crop", None, Language::En);
        assert_eq!(quote.current_price, "₹2000 per quintal");
        assert_eq!(quote.crop, "nonexistent-crop");
    }

    #[test]
    fn lookup_is_case_insensitive_and_echoes_input() {
        let quote = market_price("Cotton", Some("Nagpur"), Language::En);
        assert_eq!(quote.current_price, "₹6000 per quintal");
        assert_eq!(quote.crop, "Cotton");
        assert_eq!(quote.location, "Nagpur");
    }

    #[test]
    fn empty_location_falls_back() {
        assert_eq!(location_or_default(Some(""), Language::En), "Maharashtra");
        assert_eq!(location_or_default(None, Language::Mr), "महाराष्ट्र");
        assert_eq!(location_or_default(None, Language::Kn), "Maharashtra");
    }

    #[test]
    fn marathi_quote_translates_crop() {
        let quote = market_price("Wheat", None, Language::Mr);
        assert_eq!(quote.crop, "गहू");
        assert_eq!(quote.location, "महाराष्ट्र");
        assert_eq!(quote.current_price, "₹2500 प्रति क्विंटल");
        assert_eq!(quote.market_advisory, "गहूची मागणी चांगली आहे. जवळच्या मंडीत विक्री करा.");
    }

    #[test]
    fn marathi_quote_uses_full_glossary() {
        let quote = market_price("soil", None, Language::Mr);
        assert_eq!(quote.crop, "माती");
        assert_eq!(quote.current_price, "₹2000 प्रति क्विंटल");
    }

    #[test]
    fn every_table_price_is_reachable() {
        for (crop, price) in BASE_PRICES {
            assert_eq!(base_price(&crop.to_uppercase()), price);
        }
    }
}
