//! Narrow-passage-biased samplers.
//!
//! Purpose
//! - Produce one free configuration near an obstacle boundary per call, or report
//!   `PrmError::SamplingExhausted` once the retry budget is spent.
//! - Gaussian sampling finds a colliding anchor and searches around it for a free point;
//!   bridge sampling looks for a second colliding point and keeps the free midpoint.
//!
//! Model
//! - Anchors are uniform draws inside the environment limits that land in collision.
//! - Perturbation distances are normal draws; candidate directions come from
//!   `bisection_angles`, visited in the order the bisection produces them.
//! - All randomness flows through the caller's `Rng`, so a seeded generator replays a run.
//!
//! Budget
//! - Every sampler is bounded by
//!   `anchor_attempts × (max_anchor_draws + trials_per_anchor × angles)` point evaluations
//!   (bridge sampling adds one midpoint check per colliding partner).

mod angles;
mod bridge;
mod gaussian;
mod simple;

pub use angles::bisection_angles;
pub use bridge::{bridge_sample, bridge_sample_with_witness, BridgeWitness};
pub use gaussian::gaussian_sample;
pub use simple::{simple_bridge_sample, simple_gaussian_sample};

use rand::Rng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::collision::CollisionChecker;
use crate::error::PrmError;
use crate::space::{uniform_configuration, Configuration};

/// Parameters of a normal distribution for perturbation distances.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalParams {
    pub mean: f64,
    pub std_dev: f64,
}

impl NormalParams {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    pub(crate) fn distribution(&self) -> Result<Normal<f64>, PrmError> {
        Normal::new(self.mean, self.std_dev)
            .map_err(|e| PrmError::invalid_config(format!("normal distribution: {e}")))
    }

    fn validate(&self, name: &str) -> Result<(), PrmError> {
        if !self.mean.is_finite() {
            return Err(PrmError::invalid_config(format!("{name}.mean must be finite")));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(PrmError::invalid_config(format!(
                "{name}.std_dev must be finite and >= 0"
            )));
        }
        Ok(())
    }
}

/// Retry budgets and distributions shared by all samplers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerCfg {
    /// Outer attempts, each with a freshly drawn colliding anchor.
    pub anchor_attempts: usize,
    /// Uniform draws allowed per outer attempt while looking for a colliding anchor.
    pub max_anchor_draws: usize,
    /// Perturbation distances tried around each anchor.
    pub trials_per_anchor: usize,
    pub gaussian_rounds: u32,
    pub bridge_rounds: u32,
    pub gaussian: NormalParams,
    pub bridge: NormalParams,
    pub simple_gaussian: NormalParams,
    pub simple_bridge: NormalParams,
    /// When a biased sampler is exhausted, roadmap learning draws a uniform free
    /// configuration instead of skipping the node.
    pub uniform_fallback: bool,
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self {
            anchor_attempts: 10,
            max_anchor_draws: 1000,
            trials_per_anchor: 50,
            gaussian_rounds: 8,
            bridge_rounds: 2,
            gaussian: NormalParams::new(0.0, 1.0),
            bridge: NormalParams::new(1.0, 1.0),
            simple_gaussian: NormalParams::new(1.0, 1.0),
            simple_bridge: NormalParams::new(1.0, 4.0),
            uniform_fallback: true,
        }
    }
}

impl SamplerCfg {
    pub fn validate(&self) -> Result<(), PrmError> {
        if self.anchor_attempts == 0 {
            return Err(PrmError::invalid_config("anchor_attempts must be > 0"));
        }
        if self.max_anchor_draws == 0 {
            return Err(PrmError::invalid_config("max_anchor_draws must be > 0"));
        }
        if self.trials_per_anchor == 0 {
            return Err(PrmError::invalid_config("trials_per_anchor must be > 0"));
        }
        if self.gaussian_rounds > angles::MAX_ROUNDS || self.bridge_rounds > angles::MAX_ROUNDS {
            return Err(PrmError::invalid_config(format!(
                "bisection rounds must be <= {}",
                angles::MAX_ROUNDS
            )));
        }
        self.gaussian.validate("gaussian")?;
        self.bridge.validate("bridge")?;
        self.simple_gaussian.validate("simple_gaussian")?;
        self.simple_bridge.validate("simple_bridge")?;
        Ok(())
    }
}

/// Sampling strategy used by roadmap learning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerKind {
    #[default]
    Gaussian,
    Bridge,
    SimpleGaussian,
    SimpleBridge,
    /// Plain rejection sampling of free configurations.
    Uniform,
}

impl SamplerKind {
    pub const ALL: [SamplerKind; 5] = [
        Self::Gaussian,
        Self::Bridge,
        Self::SimpleGaussian,
        Self::SimpleBridge,
        Self::Uniform,
    ];

    pub fn draw<C, R>(
        self,
        checker: &C,
        rng: &mut R,
        cfg: &SamplerCfg,
    ) -> Result<Configuration, PrmError>
    where
        C: CollisionChecker + ?Sized,
        R: Rng + ?Sized,
    {
        match self {
            Self::Gaussian => gaussian_sample(checker, rng, cfg),
            Self::Bridge => bridge_sample(checker, rng, cfg),
            Self::SimpleGaussian => simple_gaussian_sample(checker, rng, cfg),
            Self::SimpleBridge => simple_bridge_sample(checker, rng, cfg),
            Self::Uniform => uniform_free_sample(checker, rng, cfg),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gaussian => "gaussian",
            Self::Bridge => "bridge",
            Self::SimpleGaussian => "simple_gaussian",
            Self::SimpleBridge => "simple_bridge",
            Self::Uniform => "uniform",
        }
    }
}

impl fmt::Display for SamplerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SamplerKind {
    type Err = PrmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s.replace('-', "_"))
            .ok_or_else(|| PrmError::invalid_config(format!("unknown sampler '{s}'")))
    }
}

/// Draw uniform configurations until one is free, up to `max_anchor_draws` times.
pub fn uniform_free_sample<C, R>(
    checker: &C,
    rng: &mut R,
    cfg: &SamplerCfg,
) -> Result<Configuration, PrmError>
where
    C: CollisionChecker + ?Sized,
    R: Rng + ?Sized,
{
    let limits = checker.environment_limits();
    crate::space::validate_limits(&limits)?;
    for _ in 0..cfg.max_anchor_draws {
        let p = uniform_configuration(rng, &limits);
        if !checker.point_in_collision(&p) {
            return Ok(p);
        }
    }
    Err(PrmError::SamplingExhausted {
        evaluations: cfg.max_anchor_draws,
    })
}

/// Draw uniform configurations until one collides. Counts every point check in `evaluations`.
fn find_anchor<C, R>(
    checker: &C,
    rng: &mut R,
    limits: &[(f64, f64)],
    max_draws: usize,
    evaluations: &mut usize,
) -> Option<Configuration>
where
    C: CollisionChecker + ?Sized,
    R: Rng + ?Sized,
{
    for _ in 0..max_draws {
        let p = uniform_configuration(rng, limits);
        *evaluations += 1;
        if checker.point_in_collision(&p) {
            return Some(p);
        }
    }
    None
}

#[cfg(test)]
mod tests;
