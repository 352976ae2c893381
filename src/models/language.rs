use serde::{Deserialize, Serialize};

/// Response language. Only `Mr` (and `Hi` for crop explanations) carries its
/// own advisory strings; everything else reads the English table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
    Kn,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
            Language::Kn => "kn",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "mr" => Some(Language::Mr),
            "kn" => Some(Language::Kn),
            _ => None,
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Hi, Language::Mr, Language::Kn]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_from_str_accepts_codes() {
        assert_eq!(Language::from_str("en"), Some(Language::En));
        assert_eq!(Language::from_str("MR"), Some(Language::Mr));
        assert_eq!(Language::from_str(" hi "), Some(Language::Hi));
        assert_eq!(Language::from_str("hindi"), None);
        assert_eq!(Language::from_str("kn"), Some(Language::Kn));
        assert_eq!(Language::from_str("fr"), None);
        assert_eq!(Language::from_str(""), None);
    }

    #[test]
    fn language_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_str(lang.as_str()), Some(*lang));
        }
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::Mr).unwrap(), "\"mr\"");
        assert_eq!(Language::default(), Language::En);
    }
}
