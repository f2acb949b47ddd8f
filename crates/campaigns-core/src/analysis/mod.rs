pub mod cross_tab;
pub mod project;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{CampaignError, Result};
use crate::schema::campaign::Campaign;
use crate::schema::fields::FieldSet;
use crate::validate::params::{validate_dimensions, validate_duration, validate_fields, Dimensions, Duration};

pub use cross_tab::{cross_tabulate, CrossTab};
pub use project::project;

/// Raw query parameters of the analysis endpoint. `None` means absent.
#[derive(Debug, Clone, Default)]
pub struct AnalysisQuery {
    pub dimensions: Option<String>,
    pub fields: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub dimensions: Dimensions,
    pub fields: FieldSet,
    pub duration: Duration,
    pub cross_tab: CrossTab,
    pub campaigns: Vec<Map<String, Value>>,
}

/// Validates the query and builds both the count table and the projected view.
pub fn analyze(campaigns: &[Campaign], query: &AnalysisQuery) -> Result<Analysis> {
    if campaigns.is_empty() {
        return Err(CampaignError::NotFound);
    }

    let dimensions = validate_dimensions(query.dimensions.as_deref())?;
    let fields = validate_fields(query.fields.as_deref())?;
    let duration = validate_duration(query.duration.as_deref())?;

    let cross_tab = cross_tabulate(campaigns, dimensions);
    let projected = project(campaigns, &fields);

    Ok(Analysis {
        dimensions,
        fields,
        duration,
        cross_tab,
        campaigns: projected,
    })
}
