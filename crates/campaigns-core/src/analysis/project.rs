use serde_json::{Map, Value};

use crate::schema::campaign::Campaign;
use crate::schema::fields::FieldSet;

/// Reduces each campaign to the requested keys, keeping collection order.
/// `uri` is not a field and is never emitted.
pub fn project(campaigns: &[Campaign], fields: &FieldSet) -> Vec<Map<String, Value>> {
    campaigns
        .iter()
        .map(|campaign| {
            fields
                .iter()
                .map(|&f| (f.as_str().to_string(), campaign.value(f)))
                .collect()
        })
        .collect()
}
