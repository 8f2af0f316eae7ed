//! Editable destination form.
//!
//! Holds the raw, unvalidated values the editor collects: the scalar fields
//! plus one [`TranslationForm`] per language, each with three ordered lists.

use serde::{Deserialize, Serialize};

use tripdesk_core::{DomainError, DomainResult, LanguageCode};

use crate::destination::Destination;
use crate::language_map::PerLanguage;

/// The ordered lists inside a translation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    Image,
    DetailTour,
    Facilities,
}

impl ListField {
    pub const ALL: [ListField; 3] = [
        ListField::Image,
        ListField::DetailTour,
        ListField::Facilities,
    ];

    /// Field name as it appears in the wire payload and validation paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListField::Image => "image",
            ListField::DetailTour => "detail_tour",
            ListField::Facilities => "facilities",
        }
    }
}

/// Form values for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationForm {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub image: Vec<String>,
    #[serde(default)]
    pub detail_tour: Vec<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
}

impl Default for TranslationForm {
    /// Empty text fields and a single empty row in every list.
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            thumbnail: String::new(),
            image: vec![String::new()],
            detail_tour: vec![String::new()],
            facilities: vec![String::new()],
        }
    }
}

impl TranslationForm {
    pub fn rows(&self, field: ListField) -> &[String] {
        match field {
            ListField::Image => &self.image,
            ListField::DetailTour => &self.detail_tour,
            ListField::Facilities => &self.facilities,
        }
    }

    fn rows_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Image => &mut self.image,
            ListField::DetailTour => &mut self.detail_tour,
            ListField::Facilities => &mut self.facilities,
        }
    }

    /// Append an empty row.
    pub fn push_row(&mut self, field: ListField) {
        self.rows_mut(field).push(String::new());
    }

    /// Remove the row at `index`.
    ///
    /// The last remaining row is never removed; returns whether a row was dropped.
    pub fn remove_row(&mut self, field: ListField, index: usize) -> bool {
        let rows = self.rows_mut(field);
        if rows.len() <= 1 || index >= rows.len() {
            return false;
        }
        rows.remove(index);
        true
    }

    /// Replace the text of the row at `index`.
    pub fn set_row(
        &mut self,
        field: ListField,
        index: usize,
        value: impl Into<String>,
    ) -> DomainResult<()> {
        let name = field.as_str();
        let rows = self.rows_mut(field);
        let len = rows.len();
        let Some(slot) = rows.get_mut(index) else {
            let msg = format!("{name} row {index} out of range (len {len})");
            return Err(DomainError::validation(msg));
        };
        *slot = value.into();
        Ok(())
    }
}

/// Values of the destination editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DestinationForm {
    pub state_id: String,
    pub category_destination_id: String,
    pub price: f64,
    pub translations: PerLanguage<TranslationForm>,
}

impl DestinationForm {
    /// Blank form for creating a destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from an existing destination.
    ///
    /// A language without a translation gets a blank [`TranslationForm`] so the
    /// user has to enter it before saving.
    pub fn from_destination(destination: &Destination) -> Self {
        Self {
            state_id: destination.state_id.clone(),
            category_destination_id: destination.category_destination_id.clone(),
            price: destination.price,
            translations: PerLanguage::from_fn(|lang| match destination.translation(lang) {
                Some(t) => TranslationForm {
                    name: t.name.clone(),
                    description: t.description.clone(),
                    thumbnail: t.thumbnail.clone(),
                    image: t.image.clone(),
                    detail_tour: t.detail_tour.clone(),
                    facilities: t.facilities.clone(),
                },
                None => TranslationForm::default(),
            }),
        }
    }

    pub fn translation(&self, lang: LanguageCode) -> &TranslationForm {
        self.translations.get(lang)
    }

    pub fn translation_mut(&mut self, lang: LanguageCode) -> &mut TranslationForm {
        self.translations.get_mut(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::DestinationTranslation;
    use proptest::prelude::*;

    fn translation(lang: &str, name: &str) -> DestinationTranslation {
        DestinationTranslation {
            id: 1,
            destination_id: "d-1".into(),
            language_code: lang.into(),
            name: name.into(),
            slug: String::new(),
            description: "desc".into(),
            thumbnail: String::new(),
            image: vec!["https://cdn.example.com/a.jpg".into()],
            detail_tour: vec!["Day 1".into(), "Day 2".into()],
            facilities: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn new_form_has_one_empty_row_per_list() {
        let form = DestinationForm::new();
        for (_, t) in form.translations.iter() {
            for field in ListField::ALL {
                assert_eq!(t.rows(field), [String::new()]);
            }
        }
    }

    #[test]
    fn prefill_uses_matching_translation_and_blanks_missing_language() {
        let dest = Destination {
            id: None,
            state_id: "s-1".into(),
            location: None,
            category_destination_id: "c-1".into(),
            category_destination_name: None,
            price: 99.0,
            translations: vec![translation("en", "Umrah")],
        };

        let form = DestinationForm::from_destination(&dest);
        assert_eq!(form.price, 99.0);
        assert_eq!(form.translation(LanguageCode::En).name, "Umrah");
        assert_eq!(form.translation(LanguageCode::En).detail_tour.len(), 2);
        assert_eq!(
            form.translation(LanguageCode::Id),
            &TranslationForm::default()
        );
    }

    #[test]
    fn last_row_is_never_removed() {
        let mut t = TranslationForm::default();
        assert!(!t.remove_row(ListField::Image, 0));
        t.push_row(ListField::Image);
        let url = "https://x.test/b.jpg";
        t.set_row(ListField::Image, 1, url).unwrap();
        assert!(t.remove_row(ListField::Image, 0));
        assert_eq!(t.image, vec![url.to_string()]);
    }

    #[test]
    fn set_row_out_of_range_is_rejected() {
        let mut t = TranslationForm::default();
        assert!(t.set_row(ListField::Facilities, 3, "WiFi").is_err());
    }

    proptest! {
        #[test]
        fn list_edits_never_empty_a_list(
            ops in proptest::collection::vec((any::<bool>(), 0usize..6), 0..40)
        ) {
            let mut t = TranslationForm::default();
            for (push, index) in ops {
                if push {
                    t.push_row(ListField::DetailTour);
                } else {
                    let before = t.detail_tour.len();
                    let removed = t.remove_row(ListField::DetailTour, index);
                    let expected = if removed { before - 1 } else { before };
                    prop_assert_eq!(t.detail_tour.len(), expected);
                }
                prop_assert!(!t.detail_tour.is_empty());
            }
        }
    }
}
