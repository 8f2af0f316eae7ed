//! Whole-form validation.
//!
//! Every violation is collected so the editor can mark all offending fields at
//! once; a form with any violation never reaches the submission coordinator.

use thiserror::Error;
use validator::ValidateUrl;

use tripdesk_core::{CategoryId, DomainError, LanguageCode, StateId};

use crate::form::{DestinationForm, ListField, TranslationForm};
use crate::language_map::PerLanguage;
use crate::payload::{DestinationScalars, TranslationPayload};

/// A single invalid field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Dotted path, e.g. `translations.en.image.0`.
    pub path: String,
    pub message: String,
}

/// All violations found in one form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", render(.0))]
pub struct ValidationErrors(pub Vec<FieldViolation>);

fn render(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.path, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// The message attached to `path`, if that field is invalid.
    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|v| v.path == path)
            .map(|v| v.message.as_str())
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(value: ValidationErrors) -> Self {
        DomainError::validation(render(&value.0))
    }
}

/// Form values that passed validation, shaped as request bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub scalars: DestinationScalars,
    pub translations: PerLanguage<TranslationPayload>,
}

#[derive(Default)]
struct Collector(Vec<FieldViolation>);

impl Collector {
    fn push(&mut self, path: impl Into<String>, message: &str) {
        self.0.push(FieldViolation {
            path: path.into(),
            message: message.to_string(),
        });
    }
}

impl DestinationForm {
    /// Validate the whole form and convert it into request payloads.
    pub fn validate(&self) -> Result<ValidatedForm, ValidationErrors> {
        let mut errors = Collector::default();

        let state_id = StateId::new(self.state_id.clone()).ok();
        if state_id.is_none() {
            errors.push("state_id", "Location is required");
        }
        let category_id = CategoryId::new(self.category_destination_id.clone()).ok();
        if category_id.is_none() {
            errors.push("category_destination_id", "Category is required");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            errors.push("price", "Price must be positive");
        }

        for (lang, t) in self.translations.iter() {
            validate_translation(lang, t, &mut errors);
        }

        match (state_id, category_id) {
            (Some(state_id), Some(category_destination_id)) if errors.0.is_empty() => {
                Ok(ValidatedForm {
                    scalars: DestinationScalars {
                        state_id,
                        category_destination_id,
                        price: self.price,
                    },
                    translations: PerLanguage::from_fn(|lang| {
                        to_payload(lang, self.translations.get(lang))
                    }),
                })
            }
            _ => Err(ValidationErrors(errors.0)),
        }
    }
}

fn validate_translation(lang: LanguageCode, t: &TranslationForm, errors: &mut Collector) {
    let prefix = format!("translations.{lang}");

    if t.name.is_empty() {
        errors.push(format!("{prefix}.name"), "Name is required");
    }
    if t.description.is_empty() {
        errors.push(format!("{prefix}.description"), "Description is required");
    }
    if !t.thumbnail.is_empty() && !t.thumbnail.validate_url() {
        errors.push(format!("{prefix}.thumbnail"), "Invalid URL");
    }

    for field in ListField::ALL {
        for (i, row) in t.rows(field).iter().enumerate() {
            let path = format!("{prefix}.{}.{i}", field.as_str());
            match field {
                ListField::Image if !row.validate_url() => errors.push(path, "Invalid URL"),
                ListField::DetailTour if row.is_empty() => errors.push(path, "Detail is required"),
                ListField::Facilities if row.is_empty() => {
                    errors.push(path, "Facility is required")
                }
                _ => {}
            }
        }
    }
}

fn to_payload(lang: LanguageCode, t: &TranslationForm) -> TranslationPayload {
    TranslationPayload {
        name: t.name.clone(),
        description: t.description.clone(),
        language_code: lang,
        thumbnail: t.thumbnail.clone(),
        image: t.image.clone(),
        detail_tour: t.detail_tour.clone(),
        facilities: t.facilities.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str) -> TranslationForm {
        TranslationForm {
            name: name.into(),
            description: "Twelve days in the holy cities".into(),
            thumbnail: "https://cdn.example.com/thumb.jpg".into(),
            image: vec!["https://cdn.example.com/1.jpg".into()],
            detail_tour: vec!["Day 1: Arrival".into()],
            facilities: vec!["Hotel".into(), "Visa".into()],
        }
    }

    fn valid_form() -> DestinationForm {
        DestinationForm {
            state_id: "s-1".into(),
            category_destination_id: "c-1".into(),
            price: 2500.0,
            translations: PerLanguage {
                en: filled("Umrah Plus"),
                id: filled("Umroh Plus"),
            },
        }
    }

    #[test]
    fn valid_form_converts_into_ordered_payloads() {
        let validated = valid_form().validate().unwrap();
        assert_eq!(validated.scalars.state_id.as_str(), "s-1");

        let langs: Vec<_> = validated
            .translations
            .iter()
            .map(|(lang, p)| (lang, p.language_code, p.name.as_str()))
            .collect();
        assert_eq!(
            langs,
            vec![
                (LanguageCode::En, LanguageCode::En, "Umrah Plus"),
                (LanguageCode::Id, LanguageCode::Id, "Umroh Plus"),
            ]
        );
    }

    #[test]
    fn empty_thumbnail_is_allowed() {
        let mut form = valid_form();
        form.translation_mut(LanguageCode::Id).thumbnail.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn blank_form_collects_every_violation() {
        let errors = DestinationForm::new().validate().unwrap_err();

        assert_eq!(errors.message_for("state_id"), Some("Location is required"));
        assert_eq!(
            errors.message_for("category_destination_id"),
            Some("Category is required")
        );
        for lang in ["en", "id"] {
            assert_eq!(
                errors.message_for(&format!("translations.{lang}.name")),
                Some("Name is required")
            );
            assert_eq!(
                errors.message_for(&format!("translations.{lang}.image.0")),
                Some("Invalid URL")
            );
            assert_eq!(
                errors.message_for(&format!("translations.{lang}.facilities.0")),
                Some("Facility is required")
            );
        }
        // 2 scalars + 5 per language
        assert_eq!(errors.violations().len(), 12);
    }

    #[test]
    fn negative_price_and_bad_urls_are_rejected() {
        let mut form = valid_form();
        form.price = -1.0;
        let en = form.translation_mut(LanguageCode::En);
        en.image.push("not a url".into());
        form.translation_mut(LanguageCode::Id).thumbnail = "cdn/thumb.jpg".into();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("price"), Some("Price must be positive"));
        assert_eq!(
            errors.message_for("translations.en.image.1"),
            Some("Invalid URL")
        );
        assert_eq!(
            errors.message_for("translations.id.thumbnail"),
            Some("Invalid URL")
        );
        assert_eq!(errors.violations().len(), 3);
    }

    #[test]
    fn only_empty_text_counts_as_missing() {
        let mut form = valid_form();
        form.state_id = " ".into();
        let id = form.translation_mut(LanguageCode::Id);
        id.name = " ".into();
        id.detail_tour = vec![" ".into()];
        assert!(form.validate().is_ok());

        form.translation_mut(LanguageCode::Id).name.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.message_for("translations.id.name"),
            Some("Name is required")
        );
        assert_eq!(errors.violations().len(), 1);
    }

    #[test]
    fn validation_errors_convert_to_domain_error() {
        let err: DomainError = DestinationForm::new().validate().unwrap_err().into();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("state_id")));
    }
}
