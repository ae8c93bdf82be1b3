//! Bridge test sampling: the free midpoint between two colliding points.

use rand::Rng;
use rand_distr::Distribution;

use super::{bisection_angles, find_anchor, SamplerCfg};
use crate::collision::CollisionChecker;
use crate::error::PrmError;
use crate::space::{validate_limits, Configuration};

/// An accepted bridge sample plus the two colliding points it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct BridgeWitness {
    pub sample: Configuration,
    pub anchor: Configuration,
    pub partner: Configuration,
}

/// Bridge sample without the witness points.
pub fn bridge_sample<C, R>(
    checker: &C,
    rng: &mut R,
    cfg: &SamplerCfg,
) -> Result<Configuration, PrmError>
where
    C: CollisionChecker + ?Sized,
    R: Rng + ?Sized,
{
    bridge_sample_with_witness(checker, rng, cfg).map(|w| w.sample)
}

/// Search for a colliding partner around a colliding anchor whose midpoint is free.
///
/// Distances are drawn from `N(bridge.mean, bridge.std_dev)`; directions are the
/// `bridge_rounds` bisection angles, which pair up antipodally (0/π, π/2/3π/2, ...).
pub fn bridge_sample_with_witness<C, R>(
    checker: &C,
    rng: &mut R,
    cfg: &SamplerCfg,
) -> Result<BridgeWitness, PrmError>
where
    C: CollisionChecker + ?Sized,
    R: Rng + ?Sized,
{
    let limits = checker.environment_limits();
    validate_limits(&limits)?;
    let normal = cfg.bridge.distribution()?;
    let angles = bisection_angles(cfg.bridge_rounds);
    let mut evaluations = 0usize;

    for _ in 0..cfg.anchor_attempts {
        let Some(anchor) = find_anchor(
            checker,
            rng,
            &limits,
            cfg.max_anchor_draws,
            &mut evaluations,
        ) else {
            continue;
        };
        for _ in 0..cfg.trials_per_anchor {
            let d = normal.sample(rng);
            for &alpha in &angles {
                let partner = anchor.offset_planar(d, alpha);
                evaluations += 1;
                if !checker.point_in_collision(&partner) {
                    continue;
                }
                let mid = anchor.midpoint(&partner);
                evaluations += 1;
                if !checker.point_in_collision(&mid) {
                    return Ok(BridgeWitness {
                        sample: mid,
                        anchor,
                        partner,
                    });
                }
            }
        }
    }
    Err(PrmError::SamplingExhausted { evaluations })
}
