//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::PrmError;
use crate::roadmap::NeighborSearch;
use crate::sampling::{SamplerCfg, SamplerKind};

/// Options for one planning run.
///
/// Only `radius` and `num_nodes` shape the roadmap algorithm itself; the rest select
/// strategies and budgets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanConfig {
    /// Connection radius for neighbor search (strict `<`).
    pub radius: f64,
    /// Number of sample node attempts during roadmap learning.
    #[serde(alias = "numNodes")]
    pub num_nodes: usize,
    pub sampler: SamplerKind,
    pub neighbor_search: NeighborSearch,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
    pub sampler_cfg: SamplerCfg,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            num_nodes: 300,
            sampler: SamplerKind::default(),
            neighbor_search: NeighborSearch::default(),
            seed: None,
            sampler_cfg: SamplerCfg::default(),
        }
    }
}

impl PlanConfig {
    pub fn new(radius: f64, num_nodes: usize) -> Self {
        Self {
            radius,
            num_nodes,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sampler(mut self, sampler: SamplerKind) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn with_neighbor_search(mut self, search: NeighborSearch) -> Self {
        self.neighbor_search = search;
        self
    }

    pub fn validate(&self) -> Result<(), PrmError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PrmError::invalid_config(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if u32::try_from(self.num_nodes).is_err() {
            return Err(PrmError::invalid_config("num_nodes exceeds u32 id space"));
        }
        self.sampler_cfg.validate()
    }
}
