use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{CampaignError, Result};
use crate::schema::fields::Field;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub uri: String,
    pub name: String,
    pub country: String,
    pub budget: Number,
    pub goal: String,
    pub category: String,
}

impl Campaign {
    pub fn from_draft(uri: String, draft: CampaignDraft) -> Self {
        Campaign {
            uri,
            name: draft.name,
            country: draft.country,
            budget: draft.budget,
            goal: draft.goal,
            category: draft.category,
        }
    }

    /// Categorical label of `field`, used as a cross-tab axis key.
    pub fn label(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Country => self.country.clone(),
            Field::Budget => budget_label(&self.budget),
            Field::Goal => self.goal.clone(),
            Field::Category => self.category.clone(),
        }
    }

    /// Value of `field` with its original JSON type.
    pub fn value(&self, field: Field) -> Value {
        match field {
            Field::Budget => Value::Number(self.budget.clone()),
            other => Value::String(self.label(other)),
        }
    }
}

// Integral floats share a label with the equal integer: 1000.0 groups with 1000.
fn budget_label(budget: &Number) -> String {
    match budget.as_f64() {
        Some(v) if budget.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{v:.0}"),
        _ => budget.to_string(),
    }
}

/// A fully specified campaign that has not been assigned a `uri` yet.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignDraft {
    pub name: String,
    pub country: String,
    pub budget: Number,
    pub goal: String,
    pub category: String,
}

/// Caller-supplied campaign content. `null` and absent are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub budget: Option<Number>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl CampaignPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.country.is_none()
            && self.budget.is_none()
            && self.goal.is_none()
            && self.category.is_none()
    }

    /// Required creation fields that are absent, in key order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(Field::Name.as_str());
        }
        if self.country.is_none() {
            missing.push(Field::Country.as_str());
        }
        if self.budget.is_none() {
            missing.push(Field::Budget.as_str());
        }
        if self.goal.is_none() {
            missing.push(Field::Goal.as_str());
        }
        missing
    }

    /// Fails with `MissingRequiredFields` unless name, country, budget and goal are all set.
    pub fn into_draft(self, category: String) -> Result<CampaignDraft> {
        let missing = self.missing_required();
        match (self.name, self.country, self.budget, self.goal) {
            (Some(name), Some(country), Some(budget), Some(goal)) => Ok(CampaignDraft {
                name,
                country,
                budget,
                goal,
                category: self.category.unwrap_or(category),
            }),
            _ => Err(CampaignError::MissingRequiredFields { fields: missing }),
        }
    }

    /// Supplied fields win; everything else, `uri` included, comes from `existing`.
    pub fn merge_onto(self, existing: &Campaign) -> Campaign {
        Campaign {
            uri: existing.uri.clone(),
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            country: self.country.unwrap_or_else(|| existing.country.clone()),
            budget: self.budget.unwrap_or_else(|| existing.budget.clone()),
            goal: self.goal.unwrap_or_else(|| existing.goal.clone()),
            category: self.category.unwrap_or_else(|| existing.category.clone()),
        }
    }
}
