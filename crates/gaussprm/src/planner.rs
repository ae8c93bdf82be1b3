//! Start/goal planning over a freshly learned roadmap.
//!
//! Flow per call
//! 1. Validate config, limits, and start/goal (first collision-free entry of each list is used).
//! 2. Learn a new roadmap owned by this call.
//! 3. Attach `start`, then `goal`, each by one edge to its nearest visible neighbor.
//! 4. Return the fewest-edges path; "no path" is an empty path, not an error.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::builder::{learn_roadmap, LearnStats};
use crate::cfg::PlanConfig;
use crate::collision::{check_start_goal, CollisionChecker};
use crate::error::PrmError;
use crate::roadmap::{NodeId, Roadmap};
use crate::space::{validate_limits, Configuration};

/// Display tag attached to the start/goal nodes.
pub const TERMINAL_TAG: &str = "lightgreen";

/// Result of one planning call. The roadmap is kept for inspection.
#[derive(Debug)]
pub struct PlanOutcome {
    /// Node ids from `start` to `goal`; empty if no path exists.
    pub path: Vec<NodeId>,
    pub roadmap: Roadmap,
    pub stats: LearnStats,
    pub start: Configuration,
    pub goal: Configuration,
}

impl PlanOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Configurations along the path.
    pub fn waypoints(&self) -> Vec<Configuration> {
        self.path
            .iter()
            .filter_map(|&id| self.roadmap.position(id).cloned())
            .collect()
    }

    /// Euclidean length of the polyline through the waypoints.
    pub fn path_length(&self) -> f64 {
        self.waypoints()
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .sum()
    }
}

/// Plan with an RNG seeded from `cfg.seed` (entropy if unset).
pub fn plan_path<C>(
    checker: &C,
    starts: &[Configuration],
    goals: &[Configuration],
    cfg: &PlanConfig,
) -> Result<PlanOutcome, PrmError>
where
    C: CollisionChecker + ?Sized,
{
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    plan_path_with_rng(checker, starts, goals, cfg, &mut rng)
}

/// Plan using a caller-provided RNG.
pub fn plan_path_with_rng<C, R>(
    checker: &C,
    starts: &[Configuration],
    goals: &[Configuration],
    cfg: &PlanConfig,
    rng: &mut R,
) -> Result<PlanOutcome, PrmError>
where
    C: CollisionChecker + ?Sized,
    R: Rng + ?Sized,
{
    cfg.validate()?;
    validate_limits(&checker.environment_limits())?;
    let (checked_starts, checked_goals) = check_start_goal(checker, starts, goals)?;
    let start = checked_starts[0].clone();
    let goal = checked_goals[0].clone();

    let mut roadmap = Roadmap::new(cfg.neighbor_search);
    let stats = learn_roadmap(&mut roadmap, checker, rng, cfg)?;

    let start_linked =
        connect_terminal(&mut roadmap, checker, NodeId::Start, &start, cfg.radius);
    let goal_linked = connect_terminal(&mut roadmap, checker, NodeId::Goal, &goal, cfg.radius);
    debug!(start_linked, goal_linked, "terminals attached");

    let path = roadmap
        .shortest_path(NodeId::Start, NodeId::Goal)
        .unwrap_or_default();
    info!(
        nodes = roadmap.node_count(),
        edges = roadmap.edge_count(),
        path_len = path.len(),
        "plan finished"
    );
    Ok(PlanOutcome {
        path,
        roadmap,
        stats,
        start,
        goal,
    })
}

/// Attach a terminal node by one edge to the nearest neighbor it can see.
///
/// The node is only inserted when such a neighbor exists.
fn connect_terminal<C>(
    roadmap: &mut Roadmap,
    checker: &C,
    id: NodeId,
    position: &Configuration,
    radius: f64,
) -> bool
where
    C: CollisionChecker + ?Sized,
{
    let target = roadmap
        .find_neighbors(position, radius)
        .into_iter()
        .find(|n| {
            roadmap
                .position(n.id)
                .is_some_and(|p| !checker.line_in_collision(position, p))
        });
    match target {
        Some(n) => {
            roadmap.add_node_with_tag(id, position.clone(), Some(TERMINAL_TAG.to_string()));
            roadmap.add_edge(id, n.id)
        }
        None => false,
    }
}

/// Planner bound to one collision checker.
pub struct GaussianPrm<C> {
    checker: C,
}

impl<C: CollisionChecker> GaussianPrm<C> {
    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    pub fn plan_path(
        &self,
        starts: &[Configuration],
        goals: &[Configuration],
        cfg: &PlanConfig,
    ) -> Result<PlanOutcome, PrmError> {
        plan_path(&self.checker, starts, goals, cfg)
    }
}
