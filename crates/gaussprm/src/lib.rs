//! Probabilistic roadmap planning with narrow-passage-biased sampling.
//!
//! Modules
//! - `space`: configurations and environment limits.
//! - `collision`: the collision-checker seam and a planar obstacle field.
//! - `sampling`: Gaussian, bridge, and single-shot samplers.
//! - `roadmap`: graph storage, neighbor search, connectivity and path queries.
//! - `builder`: roadmap learning with component-aware edge pruning.
//! - `planner`: start/goal stitching and the `plan_path` entry point.
//!
//! Every planning call owns its roadmap; nothing is shared between calls.

pub mod builder;
pub mod cfg;
pub mod collision;
pub mod error;
pub mod planner;
pub mod roadmap;
pub mod sampling;
pub mod space;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::PlanConfig;
pub use error::PrmError;
pub use planner::{plan_path, GaussianPrm, PlanOutcome};
pub use space::Configuration;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::builder::{learn_roadmap, LearnStats};
    pub use crate::cfg::PlanConfig;
    pub use crate::collision::{check_start_goal, CollisionChecker, Obstacle, ObstacleField};
    pub use crate::error::PrmError;
    pub use crate::planner::{plan_path, plan_path_with_rng, GaussianPrm, PlanOutcome};
    pub use crate::roadmap::{Neighbor, NeighborSearch, NodeId, Roadmap, RoadmapNode};
    pub use crate::sampling::{
        bisection_angles, bridge_sample, bridge_sample_with_witness, gaussian_sample,
        simple_bridge_sample, simple_gaussian_sample, uniform_free_sample, BridgeWitness,
        NormalParams, SamplerCfg, SamplerKind,
    };
    pub use crate::space::{uniform_configuration, validate_limits, Configuration, Limits};
}
