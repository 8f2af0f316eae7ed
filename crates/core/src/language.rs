//! Languages every destination must be translated into.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A supported translation language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Id,
}

impl LanguageCode {
    /// Every supported language, in submission order.
    pub const ALL: [LanguageCode; 2] = [LanguageCode::En, LanguageCode::Id];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Id => "id",
        }
    }
}

impl core::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(LanguageCode::En),
            "id" => Ok(LanguageCode::Id),
            other => Err(DomainError::UnsupportedLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_order_is_en_then_id() {
        assert_eq!(LanguageCode::ALL, [LanguageCode::En, LanguageCode::Id]);
    }

    #[test]
    fn parses_and_serializes_lowercase_codes() {
        assert_eq!("id".parse::<LanguageCode>().unwrap(), LanguageCode::Id);
        assert!("fr".parse::<LanguageCode>().is_err());
        assert_eq!(serde_json::to_string(&LanguageCode::En).unwrap(), "\"en\"");
    }
}
