//! Command handlers.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};

use tripdesk_catalog::{DestinationForm, location_options};
use tripdesk_client::{
    ApiClient, AuthApi, ClientConfig, Credentials, HttpDestinationRepository, Session,
};
use tripdesk_core::{DestinationId, Entity, LanguageCode};
use tripdesk_editor::{EditorOutcome, ServiceEditor, SubmissionCoordinator, TracingNotifier};

/// Clients shared by every command.
pub struct App {
    repo: Arc<HttpDestinationRepository>,
    auth: AuthApi,
    coordinator: SubmissionCoordinator,
}

impl App {
    /// Build clients from the environment; `api_url` overrides `TRIPDESK_API_URL`.
    pub fn from_env(api_url: Option<String>) -> anyhow::Result<Self> {
        let config = ClientConfig::from_lookup(|key| match (key, &api_url) {
            ("TRIPDESK_API_URL", Some(url)) => Some(url.clone()),
            _ => std::env::var(key).ok(),
        })
        .context("invalid configuration")?;

        let session = config
            .token
            .clone()
            .map(Session::with_token)
            .unwrap_or_default();
        let api = ApiClient::new(&config, session)
            .context("failed to build HTTP client")?;

        let authenticated = api.session().is_authenticated();
        tracing::debug!(api_url = %config.api_url, authenticated, "client ready");

        let repo = Arc::new(HttpDestinationRepository::new(api.clone()));
        let coordinator = SubmissionCoordinator::new(
            repo.clone(),
            repo.clone(),
            Arc::new(TracingNotifier),
        );

        Ok(Self {
            repo,
            auth: AuthApi::new(api),
            coordinator,
        })
    }

    pub async fn login(&self, email: String, password: String) -> anyhow::Result<()> {
        self.auth
            .login(&Credentials { email, password })
            .await
            .context("login failed")?;

        let token = self.auth.session().token().unwrap_or_default();
        println!("TRIPDESK_API_TOKEN={token}");
        Ok(())
    }

    pub async fn list(&self) -> anyhow::Result<()> {
        let destinations = self
            .repo
            .list_with_translations()
            .await
            .context("failed to list destinations")?;

        for destination in &destinations {
            let id = destination.id().map(|id| id.as_str()).unwrap_or("-");
            let name = destination
                .translation(LanguageCode::En)
                .map(|t| t.name.as_str())
                .unwrap_or("<no en translation>");
            let status = if destination.is_complete() {
                "complete"
            } else {
                "incomplete"
            };
            println!("{id}\t{}\t{name}\t{status}", destination.price);
        }
        tracing::info!(count = destinations.len(), "listed destinations");
        Ok(())
    }

    pub async fn references(&self) -> anyhow::Result<()> {
        let countries = self
            .repo
            .list_countries()
            .await
            .context("failed to list countries")?;
        let categories = self
            .repo
            .list_categories()
            .await
            .context("failed to list categories")?;

        println!("# locations");
        for option in location_options(&countries) {
            println!("{}\t{}", option.value, option.label);
        }
        println!("# categories");
        for category in categories {
            println!("{}\t{}", category.id, category.name);
        }
        Ok(())
    }

    pub async fn template(&self, id: Option<String>) -> anyhow::Result<()> {
        let form = match id {
            Some(id) => {
                let id: DestinationId = id.parse()?;
                let destination = self
                    .repo
                    .find_by_id(&id)
                    .await
                    .with_context(|| format!("failed to load destination {id}"))?;
                DestinationForm::from_destination(&destination)
            }
            None => DestinationForm::new(),
        };
        println!("{}", serde_json::to_string_pretty(&form)?);
        Ok(())
    }

    pub async fn submit(&self, file: &Path, id: Option<String>) -> anyhow::Result<()> {
        let raw = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read form file {}", file.display()))?;
        let form: DestinationForm = serde_json::from_str(&raw)
            .with_context(|| format!("invalid form JSON in {}", file.display()))?;

        let mut editor = match id {
            Some(id) => {
                let id: DestinationId = id.parse()?;
                let destination = self
                    .repo
                    .find_by_id(&id)
                    .await
                    .with_context(|| format!("failed to load destination {id}"))?;
                ServiceEditor::open_existing(&destination)?
            }
            None => ServiceEditor::open_new(),
        };
        *editor.form_mut() = form;

        let outcome = editor
            .save(&self.coordinator, |id| {
                tracing::info!(destination_id = %id, "destination list is stale; refetch");
            })
            .await;

        if let Some(errors) = outcome.violations() {
            for violation in errors.violations() {
                eprintln!("{}: {}", violation.path, violation.message);
            }
            bail!("form has {} invalid field(s)", errors.violations().len());
        }

        match outcome {
            EditorOutcome::Saved { id } => {
                println!("{id}");
                Ok(())
            }
            EditorOutcome::Failed { message, .. } => bail!("Failed: {message}"),
            EditorOutcome::Busy => bail!("a submission is already in progress"),
        }
    }

    pub async fn delete(&self, id: String) -> anyhow::Result<()> {
        let id: DestinationId = id.parse()?;
        self.repo
            .delete(&id)
            .await
            .with_context(|| format!("failed to delete destination {id}"))?;
        tracing::info!(destination_id = %id, "destination deleted");
        Ok(())
    }
}
