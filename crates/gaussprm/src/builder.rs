//! Roadmap learning: sample, insert, and connect across components.
//!
//! Model
//! - Node attempts use ids `1..=num_nodes`. A failed draw consumes its id and inserts nothing.
//! - Each inserted node scans its neighbors nearest first. The scan stops at the first
//!   neighbor already in the new node's component; until then every neighbor with a free
//!   straight segment gets an edge. The result is a forest: no edge ever closes a cycle.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, trace};

use crate::cfg::PlanConfig;
use crate::collision::CollisionChecker;
use crate::error::PrmError;
use crate::roadmap::{NodeId, Roadmap};
use crate::sampling::{uniform_free_sample, SamplerKind};
use crate::space::{validate_limits, Configuration};

/// Counters from one `learn_roadmap` run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LearnStats {
    /// Node ids consumed.
    pub attempted: usize,
    /// Sample nodes inserted.
    pub inserted: usize,
    /// Attempts that produced no node.
    pub skipped: usize,
    /// Inserted nodes that came from the uniform fallback.
    pub fallbacks: usize,
    /// Edges added.
    pub edges: usize,
}

/// Populate `roadmap` with up to `cfg.num_nodes` sample nodes.
///
/// Sampling exhaustion is absorbed (the id is skipped); invalid limits or config abort.
/// On a populated roadmap, ids that are already present are skipped as well.
pub fn learn_roadmap<C, R>(
    roadmap: &mut Roadmap,
    checker: &C,
    rng: &mut R,
    cfg: &PlanConfig,
) -> Result<LearnStats, PrmError>
where
    C: CollisionChecker + ?Sized,
    R: Rng + ?Sized,
{
    cfg.validate()?;
    validate_limits(&checker.environment_limits())?;
    let num_nodes = u32::try_from(cfg.num_nodes)
        .map_err(|_| PrmError::invalid_config("num_nodes exceeds u32 id space"))?;

    let mut stats = LearnStats::default();
    for k in 1..=num_nodes {
        stats.attempted += 1;
        let Some((position, fallback)) = draw_node(checker, rng, cfg)? else {
            stats.skipped += 1;
            trace!(id = k, "sample skipped");
            continue;
        };
        let id = NodeId::Sample(k);
        let Some(edges) = insert_and_connect(roadmap, checker, id, position, cfg.radius) else {
            stats.skipped += 1;
            trace!(id = k, "id already in roadmap; sample skipped");
            continue;
        };
        stats.fallbacks += usize::from(fallback);
        stats.edges += edges;
        stats.inserted += 1;
    }
    debug!(
        attempted = stats.attempted,
        inserted = stats.inserted,
        skipped = stats.skipped,
        fallbacks = stats.fallbacks,
        edges = stats.edges,
        components = roadmap.connected_components(),
        "roadmap learned"
    );
    Ok(stats)
}

/// One configuration from the configured sampler, or the uniform fallback.
///
/// `Ok(None)` means every source was exhausted.
fn draw_node<C, R>(
    checker: &C,
    rng: &mut R,
    cfg: &PlanConfig,
) -> Result<Option<(Configuration, bool)>, PrmError>
where
    C: CollisionChecker + ?Sized,
    R: Rng + ?Sized,
{
    match cfg.sampler.draw(checker, rng, &cfg.sampler_cfg) {
        Ok(p) => return Ok(Some((p, false))),
        Err(e) if !e.is_recoverable() => return Err(e),
        Err(_) => {}
    }
    if !cfg.sampler_cfg.uniform_fallback || cfg.sampler == SamplerKind::Uniform {
        return Ok(None);
    }
    match uniform_free_sample(checker, rng, &cfg.sampler_cfg) {
        Ok(p) => Ok(Some((p, true))),
        Err(e) if e.is_recoverable() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Insert `id` and connect it nearest-first until it joins a component it already reaches.
///
/// Returns the number of edges added, or `None` if `id` is already present.
fn insert_and_connect<C>(
    roadmap: &mut Roadmap,
    checker: &C,
    id: NodeId,
    position: Configuration,
    radius: f64,
) -> Option<usize>
where
    C: CollisionChecker + ?Sized,
{
    if roadmap.contains(id) {
        return None;
    }
    // Search before inserting so the node does not find itself.
    let candidates = roadmap.find_neighbors(&position, radius);
    roadmap.add_node(id, position.clone());

    let mut added = 0;
    for n in candidates {
        if roadmap.same_component(id, n.id) {
            break;
        }
        let Some(target) = roadmap.position(n.id) else {
            continue;
        };
        if !checker.line_in_collision(&position, target) && roadmap.add_edge(id, n.id) {
            trace!(from = %id, to = %n.id, distance = n.distance, "edge");
            added += 1;
        }
    }
    Some(added)
}
