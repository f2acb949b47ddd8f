use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("missing required fields: {}", fields.join(", "))]
    MissingRequiredFields { fields: Vec<&'static str> },

    #[error("invalid request body: {reason}")]
    InvalidBody { reason: String },

    #[error("campaign not found")]
    NotFound,

    #[error("invalid query parameter '{param}': {reason}")]
    InvalidQueryParameter { param: &'static str, reason: String },

    #[error("category classification unavailable: {reason}")]
    ClassificationUnavailable { reason: String },
}

impl CampaignError {
    pub(crate) fn invalid_param(param: &'static str, reason: impl Into<String>) -> Self {
        CampaignError::InvalidQueryParameter {
            param,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = CampaignError> = std::result::Result<T, E>;
