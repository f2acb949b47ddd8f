use std::sync::Arc;

use campaigns_core::chart::{ChartRenderer, SvgBarRenderer};
use campaigns_core::classify::{CategoryClassifier, RemoteClassifier};
use campaigns_core::store::{CampaignStore, InMemoryStore};
use tokio::sync::Mutex;

use crate::config::ServerConfig;

pub type SharedStore = Arc<Mutex<Box<dyn CampaignStore>>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub classifier: Arc<dyn CategoryClassifier>,
    pub renderer: Arc<dyn ChartRenderer>,
    /// Page handed to the classifier for campaigns created without a category.
    pub classifier_target_url: String,
}

impl AppState {
    pub fn new(
        store: impl CampaignStore + 'static,
        classifier: Arc<dyn CategoryClassifier>,
        renderer: Arc<dyn ChartRenderer>,
        classifier_target_url: impl Into<String>,
    ) -> Self {
        let store: Box<dyn CampaignStore> = Box::new(store);
        Self {
            store: Arc::new(Mutex::new(store)),
            classifier,
            renderer,
            classifier_target_url: classifier_target_url.into(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            InMemoryStore::new(config.public_base_url.clone()),
            Arc::new(RemoteClassifier::new(config.classifier_endpoint.clone())),
            Arc::new(SvgBarRenderer::default()),
            config.classifier_target_url.clone(),
        )
    }
}
