use super::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    Crop,
    Soil,
    Weather,
    Pest,
    Fertilizer,
    Market,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Crop => "crop",
            QueryType::Soil => "soil",
            QueryType::Weather => "weather",
            QueryType::Pest => "pest",
            QueryType::Fertilizer => "fertilizer",
            QueryType::Market => "market",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "crop" | "crops" => Some(QueryType::Crop),
            "soil" => Some(QueryType::Soil),
            "weather" => Some(QueryType::Weather),
            "pest" => Some(QueryType::Pest),
            "fertilizer" => Some(QueryType::Fertilizer),
            "market" => Some(QueryType::Market),
            _ => None,
        }
    }

    pub fn all() -> &'static [QueryType] {
        &[
            QueryType::Crop,
            QueryType::Soil,
            QueryType::Weather,
            QueryType::Pest,
            QueryType::Fertilizer,
            QueryType::Market,
        ]
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One logged request/response exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: String,
    pub query_type: QueryType,
    pub language: Language,
    pub request: serde_json::Value,
    pub response: serde_json::Value,
    pub user_location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl QueryRecord {
    pub fn new(
        query_type: QueryType,
        language: Language,
        request: serde_json::Value,
        response: serde_json::Value,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            query_type,
            language,
            request,
            response,
            user_location: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_location(mut self, location: Option<&str>) -> Self {
        self.user_location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_type_round_trip() {
        for query_type in QueryType::all() {
            assert_eq!(QueryType::from_str(query_type.as_str()), Some(*query_type));
        }
        assert_eq!(QueryType::from_str("irrigation"), None);
    }

    #[test]
    fn query_record_builder() {
        let record = QueryRecord::new(
            QueryType::Market,
            Language::Mr,
            serde_json::json!({"crop": "rice"}),
            serde_json::json!({"current_price": "₹2000 प्रति क्विंटल"}),
        )
        .with_location(Some("  Pune "));

        assert_eq!(record.user_location.as_deref(), Some("Pune"));
        assert_eq!(record.id.len(), 36);

        let blank = record.clone().with_location(Some("   "));
        assert!(blank.user_location.is_none());
    }
}
