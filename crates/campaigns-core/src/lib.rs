pub mod analysis;
pub mod chart;
pub mod classify;
pub mod error;
pub mod schema;
pub mod store;
pub mod validate;

pub use error::CampaignError;
