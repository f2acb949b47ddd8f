pub mod memory;

use crate::error::{CampaignError, Result};
use crate::schema::campaign::{Campaign, CampaignDraft, CampaignPatch};

pub use memory::InMemoryStore;

/// Ordered campaign collection addressed by 1-based position.
pub trait CampaignStore: Send {
    fn list(&self) -> &[Campaign];

    /// The campaign at 1-based `position`, or `NotFound`.
    fn get(&self, position: usize) -> Result<&Campaign> {
        position
            .checked_sub(1)
            .and_then(|idx| self.list().get(idx))
            .ok_or(CampaignError::NotFound)
    }

    /// Appends a campaign at position `len + 1` and derives its `uri` from that position.
    fn insert(&mut self, draft: CampaignDraft) -> Result<Campaign>;

    /// Merges `patch` over the campaign at `position`. `uri` is never changed.
    fn update(&mut self, position: usize, patch: CampaignPatch) -> Result<Campaign>;

    /// Removes the campaign at `position`; later campaigns shift down by one.
    fn delete(&mut self, position: usize) -> Result<Campaign>;
}
