//! Neighbor search strategies and result rows.

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::NodeId;
use crate::error::PrmError;

/// How `Roadmap::find_neighbors` locates candidates.
///
/// Both strategies produce identical, distance-ordered output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborSearch {
    /// Linear scan over all nodes.
    #[default]
    BruteForce,
    /// Planar R-tree; non-planar roadmaps fall back to the linear scan.
    RTree,
}

impl NeighborSearch {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::RTree => "rtree",
        }
    }
}

impl fmt::Display for NeighborSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NeighborSearch {
    type Err = PrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brute_force" | "brute-force" | "linear" => Ok(Self::BruteForce),
            "rtree" | "r-tree" | "kdtree" => Ok(Self::RTree),
            other => Err(PrmError::invalid_config(format!(
                "unknown neighbor search '{other}'"
            ))),
        }
    }
}

/// One neighbor-search hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub distance: f64,
    pub id: NodeId,
    pub(crate) index: NodeIndex,
}
