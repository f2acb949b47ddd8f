use crate::error::{CampaignError, Result};
use crate::schema::campaign::{Campaign, CampaignDraft, CampaignPatch};
use crate::store::CampaignStore;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    base_uri: String,
    campaigns: Vec<Campaign>,
}

impl InMemoryStore {
    /// `base_uri` is the externally visible server root, e.g. `http://localhost:8080`.
    pub fn new(base_uri: impl Into<String>) -> Self {
        let base_uri = base_uri.into();
        Self {
            base_uri: base_uri.trim_end_matches('/').to_string(),
            campaigns: Vec::new(),
        }
    }

    pub fn campaign_uri(&self, position: usize) -> String {
        format!("{}/api/campaigns/{}", self.base_uri, position)
    }

    fn index_of(&self, position: usize) -> Result<usize> {
        position
            .checked_sub(1)
            .filter(|&idx| idx < self.campaigns.len())
            .ok_or(CampaignError::NotFound)
    }
}

impl CampaignStore for InMemoryStore {
    fn list(&self) -> &[Campaign] {
        &self.campaigns
    }

    fn insert(&mut self, draft: CampaignDraft) -> Result<Campaign> {
        let position = self.campaigns.len() + 1;
        let campaign = Campaign::from_draft(self.campaign_uri(position), draft);
        self.campaigns.push(campaign.clone());
        tracing::debug!(position, uri = %campaign.uri, "inserted campaign");
        Ok(campaign)
    }

    fn update(&mut self, position: usize, patch: CampaignPatch) -> Result<Campaign> {
        let idx = self.index_of(position)?;
        let updated = patch.merge_onto(&self.campaigns[idx]);
        self.campaigns[idx] = updated.clone();
        tracing::debug!(position, "updated campaign");
        Ok(updated)
    }

    fn delete(&mut self, position: usize) -> Result<Campaign> {
        let idx = self.index_of(position)?;
        let removed = self.campaigns.remove(idx);
        tracing::debug!(position, remaining = self.campaigns.len(), "deleted campaign");
        Ok(removed)
    }
}
