//! A value per supported language.

use serde::{Deserialize, Serialize};

use tripdesk_core::LanguageCode;

/// Exactly one `T` for each [`LanguageCode`].
///
/// Holding the languages as named fields (rather than a map) makes a missing
/// translation unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerLanguage<T> {
    pub en: T,
    pub id: T,
}

impl<T> PerLanguage<T> {
    pub fn get(&self, lang: LanguageCode) -> &T {
        match lang {
            LanguageCode::En => &self.en,
            LanguageCode::Id => &self.id,
        }
    }

    pub fn get_mut(&mut self, lang: LanguageCode) -> &mut T {
        match lang {
            LanguageCode::En => &mut self.en,
            LanguageCode::Id => &mut self.id,
        }
    }

    /// Build one value per language.
    pub fn from_fn(mut f: impl FnMut(LanguageCode) -> T) -> Self {
        Self {
            en: f(LanguageCode::En),
            id: f(LanguageCode::Id),
        }
    }

    /// Iterate in submission order ([`LanguageCode::ALL`]).
    pub fn iter(&self) -> impl Iterator<Item = (LanguageCode, &T)> {
        LanguageCode::ALL
            .into_iter()
            .map(move |lang| (lang, self.get(lang)))
    }
}
