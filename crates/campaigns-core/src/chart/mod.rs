pub mod svg;

use crate::analysis::cross_tab::CrossTab;
use crate::validate::params::Dimensions;

pub use svg::SvgBarRenderer;

/// Grouped bar chart: one bar group per x label, one bar per series in each group.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_labels: Vec<String>,
    pub series: Vec<(String, Vec<u64>)>,
}

impl BarChart {
    pub fn from_cross_tab(tab: &CrossTab, dims: Dimensions) -> Self {
        BarChart {
            title: format!("{} by {}", dims.y, dims.x),
            x_labels: tab.x_axis.clone(),
            series: tab
                .series()
                .map(|(label, counts)| (label.to_string(), counts))
                .collect(),
        }
    }

    pub fn max_value(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|(_, counts)| counts.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Turns a chart into something a client can embed directly.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, chart: &BarChart) -> anyhow::Result<String>;
}
