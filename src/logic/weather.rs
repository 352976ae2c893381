use super::market::location_or_default;
use super::translations::{text, Phrase};
use crate::models::{CurrentConditions, ForecastDay, Language, WeatherReport};

/// (day, temp, condition, chance of rain)
const FORECAST: [(&str, &str, &str, &str); 5] = [
    ("Today", "28°C", "Partly Cloudy", "10%"),
    ("Tomorrow", "30°C", "Sunny", "5%"),
    ("Day 3", "26°C", "Rainy", "80%"),
    ("Day 4", "24°C", "Cloudy", "40%"),
    ("Day 5", "29°C", "Sunny", "0%"),
];

/// Demo conditions and five-day outlook; no live weather source is queried.
pub fn weather_report(location: Option<&str>, language: Language) -> WeatherReport {
    WeatherReport {
        location: location_or_default(location, language),
        current: CurrentConditions {
            temperature: 28.0,
            humidity: 65.0,
            rainfall: 0.0,
            wind_speed: 12.0,
            condition: "Partly Cloudy".to_string(),
        },
        forecast: FORECAST
            .iter()
            .map(|(day, temp, condition, rain)| ForecastDay {
                day: day.to_string(),
                temp: temp.to_string(),
                condition: condition.to_string(),
                rain: rain.to_string(),
            })
            .collect(),
        advisory: text(Phrase::WeatherAdvisory, language).to_string(),
        language,
    }
}
