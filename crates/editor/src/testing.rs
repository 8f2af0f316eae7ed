//! In-memory collaborators for coordinator and editor tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use tripdesk_catalog::{
    Destination, DestinationForm, DestinationScalars, PerLanguage, TranslationForm,
    TranslationPayload, ValidatedForm,
};
use tripdesk_client::{ApiError, EntityRepository, TranslationRepository};
use tripdesk_core::{DestinationId, LanguageCode};

use crate::notifier::Notifier;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    CreateEntity,
    UpdateEntity(String),
    CreateTranslation(String, LanguageCode),
    UpdateTranslation(String, LanguageCode),
}

impl Call {
    fn is_translation(&self) -> bool {
        matches!(
            self,
            Call::CreateTranslation(..) | Call::UpdateTranslation(..)
        )
    }
}

pub struct FakeRepo {
    calls: Mutex<Vec<Call>>,
    new_id: Option<String>,
    failures: Mutex<HashMap<Call, ApiError>>,
    gate: Option<Arc<Notify>>,
}

impl FakeRepo {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            new_id: Some("dst-1".into()),
            failures: Mutex::new(HashMap::new()),
            gate: None,
        }
    }

    /// Create responses carry no id.
    pub fn without_id() -> Self {
        Self {
            new_id: None,
            ..Self::new()
        }
    }

    /// Create responses carry `id` exactly as given.
    pub fn with_new_id(id: &str) -> Self {
        Self {
            new_id: Some(id.into()),
            ..Self::new()
        }
    }

    /// Entity writes wait for `gate` before answering.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    pub fn fail_on(self, call: Call, err: ApiError) -> Self {
        self.failures.lock().unwrap().insert(call, err);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn translation_calls(&self) -> usize {
        self.calls().iter().filter(|c| c.is_translation()).count()
    }

    async fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call.clone());
        if let (Some(gate), Call::CreateEntity | Call::UpdateEntity(_)) = (&self.gate, &call) {
            gate.notified().await;
        }
        match self.failures.lock().unwrap().get(&call) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn echo(&self, id: Option<String>, scalars: &DestinationScalars) -> Destination {
        Destination {
            id: id.map(|id| serde_json::from_value(json!(id)).unwrap()),
            state_id: scalars.state_id.to_string(),
            location: None,
            category_destination_id: scalars.category_destination_id.to_string(),
            category_destination_name: None,
            price: scalars.price,
            translations: Vec::new(),
        }
    }
}

#[async_trait]
impl EntityRepository for FakeRepo {
    async fn create(&self, scalars: &DestinationScalars) -> Result<Destination, ApiError> {
        self.record(Call::CreateEntity).await?;
        Ok(self.echo(self.new_id.clone(), scalars))
    }

    async fn update(
        &self,
        id: &DestinationId,
        scalars: &DestinationScalars,
    ) -> Result<Destination, ApiError> {
        self.record(Call::UpdateEntity(id.to_string())).await?;
        Ok(self.echo(Some(id.to_string()), scalars))
    }
}

#[async_trait]
impl TranslationRepository for FakeRepo {
    async fn create(
        &self,
        id: &DestinationId,
        lang: LanguageCode,
        fields: &TranslationPayload,
    ) -> Result<(), ApiError> {
        assert_eq!(fields.language_code, lang);
        let call = Call::CreateTranslation(id.to_string(), lang);
        self.record(call).await
    }

    async fn update(
        &self,
        id: &DestinationId,
        lang: LanguageCode,
        fields: &TranslationPayload,
    ) -> Result<(), ApiError> {
        assert_eq!(fields.language_code, lang);
        let call = Call::UpdateTranslation(id.to_string(), lang);
        self.record(call).await
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<(&'static str, String)> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, kind: &'static str, message: &str) {
        let mut events = self.events.lock().unwrap();
        events.push((kind, message.to_string()));
    }
}

impl Notifier for RecordingNotifier {
    fn loading(&self, message: &str) {
        self.push("loading", message);
    }

    fn success(&self, message: &str) {
        self.push("success", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }
}

pub fn api_error(status: u16, message: &str) -> ApiError {
    ApiError::Repository {
        status,
        body: json!({ "message": message }),
    }
}

pub fn filled_form() -> DestinationForm {
    let translation = |name: &str| TranslationForm {
        name: name.into(),
        description: "Twelve days in Makkah and Madinah".into(),
        thumbnail: "https://cdn.example.com/thumb.jpg".into(),
        image: vec!["https://cdn.example.com/1.jpg".into()],
        detail_tour: vec!["Day 1: Arrival".into()],
        facilities: vec!["Hotel".into()],
    };
    DestinationForm {
        state_id: "s-1".into(),
        category_destination_id: "c-1".into(),
        price: 2500.0,
        translations: PerLanguage {
            en: translation("Umrah Plus"),
            id: translation("Umroh Plus"),
        },
    }
}

pub fn valid_values() -> ValidatedForm {
    filled_form().validate().unwrap()
}
