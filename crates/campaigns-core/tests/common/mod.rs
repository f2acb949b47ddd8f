#![allow(dead_code)]

use campaigns_core::schema::{Campaign, CampaignDraft, CampaignPatch};
use campaigns_core::store::{CampaignStore, InMemoryStore};
use serde_json::Number;

pub const BASE_URI: &str = "http://localhost:8080";

pub fn draft(name: &str, country: &str, budget: u64, goal: &str, category: &str) -> CampaignDraft {
    CampaignDraft {
        name: name.into(),
        country: country.into(),
        budget: Number::from(budget),
        goal: goal.into(),
        category: category.into(),
    }
}

pub fn patch(name: &str, country: &str, budget: u64, goal: &str) -> CampaignPatch {
    CampaignPatch {
        name: Some(name.into()),
        country: Some(country.into()),
        budget: Some(Number::from(budget)),
        goal: Some(goal.into()),
        category: None,
    }
}

pub fn store_with(drafts: Vec<CampaignDraft>) -> InMemoryStore {
    let mut store = InMemoryStore::new(BASE_URI);
    for d in drafts {
        store.insert(d).expect("insert fixture campaign");
    }
    store
}

/// USA/Technology, USA/Sports, EGY/Technology.
pub fn three_campaigns() -> Vec<Campaign> {
    store_with(vec![
        draft("Spring launch", "USA", 1000, "Awareness", "Technology"),
        draft("Playoffs", "USA", 2500, "Conversion", "Sports"),
        draft("Cairo expo", "EGY", 1000, "Awareness", "Technology"),
    ])
    .list()
    .to_vec()
}
