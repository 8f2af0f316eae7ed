//! HTTP implementation of the destination endpoints.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::{Deserialize, Serialize};

use tripdesk_catalog::{
    CategoryDestination, Country, Destination, DestinationScalars, TranslationPayload,
};
use tripdesk_core::{DestinationId, LanguageCode, ValueObject};

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::repository::{EntityRepository, TranslationRepository};

const LIST_WITH_TRANSLATIONS: &str = "/destination/find-all-destination-with-translation";
const LIST_CATEGORIES: &str = "/destination/find-all-categories-destination";

/// Destination, category and country endpoints of the admin API.
#[derive(Debug, Clone)]
pub struct HttpDestinationRepository {
    api: ApiClient,
}

/// Create responses occasionally omit `data`; that is surfaced as a missing id
/// by the coordinator rather than as a decode failure.
#[derive(Debug, Deserialize)]
struct MaybeData {
    #[serde(default)]
    data: Option<Destination>,
}

impl HttpDestinationRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Every destination, each with its translations.
    pub async fn list_with_translations(&self) -> Result<Vec<Destination>, ApiError> {
        let req = self.api.request(Method::GET, LIST_WITH_TRANSLATIONS);
        self.api.send_data(req).await
    }

    pub async fn find_by_id(&self, id: &DestinationId) -> Result<Destination, ApiError> {
        let req = self.api.request(Method::GET, &format!("/destination/{id}"));
        self.api.send_data(req).await
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryDestination>, ApiError> {
        let req = self.api.request(Method::GET, LIST_CATEGORIES);
        self.api.send_data(req).await
    }

    /// Countries with their states, for the location picker.
    pub async fn list_countries(&self) -> Result<Vec<Country>, ApiError> {
        let req = self.api.request(Method::GET, "/countries/find-all");
        self.api.send_data(req).await
    }

    pub async fn delete(&self, id: &DestinationId) -> Result<(), ApiError> {
        let path = format!("/destination/{id}/delete");
        let req = self.api.request(Method::DELETE, &path);
        self.api.send_unit(req).await
    }

    /// A write request carrying `body` as JSON.
    fn write<B>(&self, method: Method, path: &str, body: &B) -> RequestBuilder
    where
        B: ValueObject + Serialize,
    {
        self.api.request(method, path).json(body)
    }

    fn translation_body(lang: LanguageCode, fields: &TranslationPayload) -> TranslationPayload {
        TranslationPayload {
            language_code: lang,
            ..fields.clone()
        }
    }
}

/// Record built from what was sent, for responses without `data`.
fn echo(id: Option<DestinationId>, scalars: &DestinationScalars) -> Destination {
    Destination {
        id,
        state_id: scalars.state_id.to_string(),
        location: None,
        category_destination_id: scalars.category_destination_id.to_string(),
        category_destination_name: None,
        price: scalars.price,
        translations: Vec::new(),
    }
}

#[async_trait]
impl EntityRepository for HttpDestinationRepository {
    async fn create(&self, scalars: &DestinationScalars) -> Result<Destination, ApiError> {
        let req = self.write(Method::POST, "/destination/create", scalars);
        let res: MaybeData = self.api.send(req).await?;

        Ok(res.data.unwrap_or_else(|| echo(None, scalars)))
    }

    async fn update(
        &self,
        id: &DestinationId,
        scalars: &DestinationScalars,
    ) -> Result<Destination, ApiError> {
        let path = format!("/destination/{id}/update");
        let req = self.write(Method::PUT, &path, scalars);
        let res: MaybeData = self.api.send(req).await?;

        Ok(res.data.unwrap_or_else(|| echo(Some(id.clone()), scalars)))
    }
}

#[async_trait]
impl TranslationRepository for HttpDestinationRepository {
    async fn create(
        &self,
        id: &DestinationId,
        lang: LanguageCode,
        fields: &TranslationPayload,
    ) -> Result<(), ApiError> {
        let path = format!("/destination/{id}/translation");
        let body = Self::translation_body(lang, fields);
        let req = self.write(Method::POST, &path, &body);
        self.api.send_unit(req).await
    }

    async fn update(
        &self,
        id: &DestinationId,
        lang: LanguageCode,
        fields: &TranslationPayload,
    ) -> Result<(), ApiError> {
        let path = format!("/destination/{id}/update-translation");
        let body = Self::translation_body(lang, fields);
        let req = self.write(Method::PUT, &path, &body);
        self.api.send_unit(req).await
    }
}
