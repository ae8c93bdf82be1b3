//! JSON scenario files and plan reports.

use anyhow::{ensure, Context, Result};
use gaussprm::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One planning problem: environment, terminals, and planner options.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Scenario {
    pub environment: ObstacleField,
    #[serde(alias = "startList")]
    pub start: Vec<Vec<f64>>,
    #[serde(alias = "goalList")]
    pub goal: Vec<Vec<f64>>,
    #[serde(default)]
    pub config: PlanConfig,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            fs::read(path).with_context(|| format!("reading scenario {}", path.display()))?;
        let scenario: Scenario = serde_json::from_slice(&raw)
            .with_context(|| format!("parsing scenario {}", path.display()))?;
        ensure!(!scenario.start.is_empty(), "scenario has no start entries");
        ensure!(!scenario.goal.is_empty(), "scenario has no goal entries");
        Ok(scenario)
    }

    pub fn starts(&self) -> Vec<Configuration> {
        self.start.iter().map(|c| Configuration::from_slice(c)).collect()
    }

    pub fn goals(&self) -> Vec<Configuration> {
        self.goal.iter().map(|c| Configuration::from_slice(c)).collect()
    }
}

#[derive(Debug, Serialize)]
pub struct NodeRow {
    pub id: String,
    pub position: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Serializable summary of a `PlanOutcome`.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub found: bool,
    pub path: Vec<String>,
    pub waypoints: Vec<Vec<f64>>,
    pub path_length: f64,
    pub components: usize,
    pub stats: LearnStats,
    pub nodes: Vec<NodeRow>,
    pub edges: Vec<[String; 2]>,
}

impl From<&PlanOutcome> for PlanReport {
    fn from(out: &PlanOutcome) -> Self {
        Self {
            found: out.found(),
            path: out.path.iter().map(|id| id.to_string()).collect(),
            waypoints: out.waypoints().iter().map(|p| p.to_vec()).collect(),
            path_length: out.path_length(),
            components: out.roadmap.connected_components(),
            stats: out.stats,
            nodes: out
                .roadmap
                .nodes()
                .map(|n| NodeRow {
                    id: n.id.to_string(),
                    position: n.position.to_vec(),
                    tag: n.tag.clone(),
                })
                .collect(),
            edges: out
                .roadmap
                .edges()
                .map(|(a, b)| [a.to_string(), b.to_string()])
                .collect(),
        }
    }
}
