//! Records as the API returns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tripdesk_core::{DestinationId, Entity, LanguageCode};

/// A bookable destination (tour/service), independent of language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Assigned by the backend on creation; absent on a malformed create response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DestinationId>,
    #[serde(default)]
    pub state_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub category_destination_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_destination_name: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub translations: Vec<DestinationTranslation>,
}

impl Destination {
    /// The translation for `lang`, if the backend has one.
    pub fn translation(&self, lang: LanguageCode) -> Option<&DestinationTranslation> {
        self.translations
            .iter()
            .find(|t| t.language_code == lang.as_str())
    }

    /// True when every supported language has a translation.
    pub fn is_complete(&self) -> bool {
        LanguageCode::ALL
            .iter()
            .all(|lang| self.translation(*lang).is_some())
    }
}

impl Entity for Destination {
    type Id = DestinationId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

/// Language-specific display content of a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationTranslation {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub destination_id: String,
    pub language_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub image: Vec<String>,
    #[serde(default)]
    pub detail_tour: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(rename = "createdAt")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDestination {
    pub id: String,
    pub name: String,
}

/// A state/city a destination can be located in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cities: Vec<State>,
}

/// One entry of the location picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationOption {
    /// `"<state>, <country>"`.
    pub label: String,
    /// The state id submitted as `state_id`.
    pub value: String,
}

/// Flatten countries into picker options, countries and states in server order.
pub fn location_options(countries: &[Country]) -> Vec<LocationOption> {
    countries
        .iter()
        .flat_map(|country| {
            country.cities.iter().map(move |state| LocationOption {
                label: format!("{}, {}", state.name, country.name),
                value: state.id.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_api_destination_with_translations() {
        let raw = json!({
            "id": "d-1",
            "state_id": "s-1",
            "category_destination_id": "c-1",
            "category_destination_name": "Religious Tour",
            "price": 1500000,
            "translations": [{
                "id": 7,
                "destination_id": "d-1",
                "language_code": "en",
                "name": "Umrah Plus",
                "slug": "umrah-plus",
                "description": "Twelve days",
                "thumbnail": "https://cdn.example.com/t.jpg",
                "image": ["https://cdn.example.com/1.jpg"],
                "detail_tour": ["Day 1: Arrival"],
                "facilities": ["Hotel"],
                "createdAt": "2025-01-02T03:04:05Z",
                "updatedAt": "2025-01-02T03:04:05Z"
            }]
        });

        let dest: Destination = serde_json::from_value(raw).unwrap();
        assert_eq!(dest.id().map(|id| id.as_str()), Some("d-1"));
        assert_eq!(dest.price, 1_500_000.0);

        let en = dest.translation(LanguageCode::En).unwrap();
        assert_eq!(en.detail_tour, vec!["Day 1: Arrival".to_string()]);
        assert!(en.created_at.is_some());
        assert!(dest.translation(LanguageCode::Id).is_none());
        assert!(!dest.is_complete());
    }

    #[test]
    fn create_response_without_id_deserializes_to_none() {
        let dest: Destination = serde_json::from_value(json!({
            "state_id": "s-1",
            "category_destination_id": "c-1",
            "price": 10
        }))
        .unwrap();
        assert!(dest.id.is_none());
    }

    #[test]
    fn location_options_label_state_then_country() {
        let countries = vec![
            Country {
                id: "sa".into(),
                name: "Saudi Arabia".into(),
                cities: vec![
                    State {
                        id: "mk".into(),
                        name: "Makkah".into(),
                    },
                    State {
                        id: "md".into(),
                        name: "Madinah".into(),
                    },
                ],
            },
            Country {
                id: "tr".into(),
                name: "Turkey".into(),
                cities: vec![],
            },
        ];

        let options = location_options(&countries);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Makkah, Saudi Arabia");
        assert_eq!(options[1].value, "md");
    }
}
