//! Node identifiers and node payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::space::Configuration;

/// Roadmap node id: sequential sample ids plus the start/goal sentinels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeId {
    Sample(u32),
    Start,
    Goal,
}

impl NodeId {
    pub fn is_sample(self) -> bool {
        matches!(self, Self::Sample(_))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sample(k) => write!(f, "{k}"),
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// A roadmap node. Never mutated after insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadmapNode {
    pub id: NodeId,
    pub position: Configuration,
    /// Optional display hint, e.g. a color for start/goal.
    pub tag: Option<String>,
}
