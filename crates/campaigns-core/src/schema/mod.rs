pub mod campaign;
pub mod fields;

pub use campaign::{Campaign, CampaignDraft, CampaignPatch};
pub use fields::{Field, FieldSet};
