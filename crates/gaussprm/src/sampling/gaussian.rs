//! Gaussian sampling around colliding anchors.

use rand::Rng;
use rand_distr::Distribution;

use super::{bisection_angles, find_anchor, SamplerCfg};
use crate::collision::CollisionChecker;
use crate::error::PrmError;
use crate::space::{validate_limits, Configuration};

/// Find a free configuration at a normally distributed distance from a colliding anchor.
///
/// For each anchor, every trial draws `d ~ N(gaussian.mean, gaussian.std_dev)` and walks the
/// bisection directions; the first free `anchor + d·(cos α, sin α)` is returned.
/// An environment without any collision yields `SamplingExhausted`, since no anchor exists.
pub fn gaussian_sample<C, R>(
    checker: &C,
    rng: &mut R,
    cfg: &SamplerCfg,
) -> Result<Configuration, PrmError>
where
    C: CollisionChecker + ?Sized,
    R: Rng + ?Sized,
{
    let limits = checker.environment_limits();
    validate_limits(&limits)?;
    let normal = cfg.gaussian.distribution()?;
    let angles = bisection_angles(cfg.gaussian_rounds);
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
                let candidate = anchor.offset_planar(d, alpha);
                evaluations += 1;
                if !checker.point_in_collision(&candidate) {
                    return Ok(candidate);
                }
            }
        }
    }
    Err(PrmError::SamplingExhausted { evaluations })
}
