use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::schema::campaign::Campaign;
use crate::validate::params::Dimensions;

/// Two-level count table: y label -> x label -> count.
///
/// Every y-bucket carries a count for every entry of `x_axis`, in `x_axis`
/// order, so all chart series line up on the same groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTab {
    pub x_axis: Vec<String>,
    pub table: IndexMap<String, IndexMap<String, u64>>,
}

impl CrossTab {
    /// One `(y label, counts in x_axis order)` pair per bucket.
    pub fn series(&self) -> impl Iterator<Item = (&str, Vec<u64>)> + '_ {
        self.table.iter().map(|(y, row)| {
            let counts = self
                .x_axis
                .iter()
                .map(|x| row.get(x).copied().unwrap_or(0))
                .collect();
            (y.as_str(), counts)
        })
    }

    pub fn total(&self) -> u64 {
        self.table.values().flat_map(|row| row.values()).sum()
    }
}

pub fn cross_tabulate(campaigns: &[Campaign], dims: Dimensions) -> CrossTab {
    // First-seen order, not sorted.
    let x_axis = campaigns
        .iter()
        .map(|c| c.label(dims.x))
        .collect::<IndexSet<_>>();

    let zeroed = x_axis
        .iter()
        .map(|x| (x.clone(), 0u64))
        .collect::<IndexMap<_, _>>();

    let mut table: IndexMap<String, IndexMap<String, u64>> = IndexMap::new();
    for campaign in campaigns {
        let row = table
            .entry(campaign.label(dims.y))
            .or_insert_with(|| zeroed.clone());
        *row.entry(campaign.label(dims.x)).or_insert(0) += 1;
    }

    tracing::debug!(
        x = %dims.x,
        y = %dims.y,
        groups = x_axis.len(),
        series = table.len(),
        "built cross-tab"
    );

    CrossTab {
        x_axis: x_axis.into_iter().collect(),
        table,
    }
}
