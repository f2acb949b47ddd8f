use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed key set a campaign can be grouped or projected by.
///
/// Variant order is the canonical key order used for defaults and for
/// laying out projected records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Country,
    Budget,
    Goal,
    Category,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Country,
        Field::Budget,
        Field::Goal,
        Field::Category,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Country => "country",
            Field::Budget => "budget",
            Field::Goal => "goal",
            Field::Category => "category",
        }
    }

    /// `"name,country,budget,goal,category"`
    pub fn all_joined() -> String {
        Field::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    // Exact match only: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// A deduplicated set of fields. Iteration follows canonical key order.
pub type FieldSet = BTreeSet<Field>;
