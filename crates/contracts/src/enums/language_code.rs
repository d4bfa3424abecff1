use serde::{Deserialize, Serialize};
use std::fmt;

/// Языки, на которых заводятся описания услуги
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    Vi,
    En,
}

impl LanguageCode {
    /// Wire code ("vi", "en")
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::Vi => "vi",
            LanguageCode::En => "en",
        }
    }

    /// Human-readable label for selects
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::Vi => "Vietnamese (vi)",
            LanguageCode::En => "English (en)",
        }
    }

    pub fn all() -> Vec<LanguageCode> {
        vec![LanguageCode::Vi, LanguageCode::En]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "vi" => Some(LanguageCode::Vi),
            "en" => Some(LanguageCode::En),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for lang in LanguageCode::all() {
            assert_eq!(LanguageCode::from_code(lang.code()), Some(lang));
        }
        assert_eq!(LanguageCode::from_code(""), None);
        assert_eq!(LanguageCode::from_code("fr"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        assert_eq!(serde_json::to_string(&LanguageCode::Vi).unwrap(), "\"vi\"");
        let lang: LanguageCode = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, LanguageCode::En);
    }
}
