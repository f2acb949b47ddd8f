use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{CampaignError, Result};
use crate::schema::campaign::{CampaignDraft, CampaignPatch};

/// Supplies a category for campaigns created without one.
#[async_trait]
pub trait CategoryClassifier: Send + Sync {
    /// Category name for the page at `url`.
    async fn classify(&self, url: &str) -> Result<String>;
}

/// Client for a remote category extraction service (`GET {endpoint}?url=...`).
pub struct RemoteClassifier {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ClassifierResponse {
    category: ClassifierCategory,
}

#[derive(Debug, Deserialize)]
struct ClassifierCategory {
    name: String,
}

impl RemoteClassifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn fetch(&self, url: &str) -> reqwest::Result<String> {
        let body: ClassifierResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("url", url)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.category.name)
    }
}

#[async_trait]
impl CategoryClassifier for RemoteClassifier {
    async fn classify(&self, url: &str) -> Result<String> {
        self.fetch(url).await.map_err(|e| {
            tracing::warn!(endpoint = %self.endpoint, url, error = %e, "category classification failed");
            CampaignError::ClassificationUnavailable {
                reason: e.to_string(),
            }
        })
    }
}

/// Checks required fields, then fills `category` by classifying `source_url` if it was omitted.
/// The classifier is not consulted when the patch is incomplete or already has a category.
pub async fn resolve_draft(
    patch: CampaignPatch,
    classifier: &dyn CategoryClassifier,
    source_url: &str,
) -> Result<CampaignDraft> {
    let missing = patch.missing_required();
    if !missing.is_empty() {
        return Err(CampaignError::MissingRequiredFields { fields: missing });
    }

    let category = match &patch.category {
        Some(category) => category.clone(),
        None => classifier.classify(source_url).await?,
    };
    patch.into_draft(category)
}
