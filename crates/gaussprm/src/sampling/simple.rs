//! Single-shot reference samplers without retry loops.
//!
//! Each draws one uniform point, requires it to collide, perturbs once in a uniformly
//! random direction, and accepts or rejects. Useful for illustration and as baselines.

use rand::Rng;
use rand_distr::Distribution;
use std::f64::consts::TAU;

use super::SamplerCfg;
use crate::collision::CollisionChecker;
use crate::error::PrmError;
use crate::space::{uniform_configuration, validate_limits, Configuration};

/// One Gaussian perturbation from one colliding draw; the perturbed point must be free.
pub fn simple_gaussian_sample<C, R>(
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
    let normal = cfg.simple_gaussian.distribution()?;

    let anchor = uniform_configuration(rng, &limits);
    if !checker.point_in_collision(&anchor) {
        return Err(PrmError::SamplingExhausted { evaluations: 1 });
    }
    let d = normal.sample(rng);
    let alpha = rng.gen_range(0.0..TAU);
    let candidate = anchor.offset_planar(d, alpha);
    if checker.point_in_collision(&candidate) {
        return Err(PrmError::SamplingExhausted { evaluations: 2 });
    }
    Ok(candidate)
}

/// One bridge test: both ends must collide and the midpoint must be free.
pub fn simple_bridge_sample<C, R>(
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
    let normal = cfg.simple_bridge.distribution()?;

    let anchor = uniform_configuration(rng, &limits);
    if !checker.point_in_collision(&anchor) {
        return Err(PrmError::SamplingExhausted { evaluations: 1 });
    }
    let d = normal.sample(rng);
    let alpha = rng.gen_range(0.0..TAU);
    let partner = anchor.offset_planar(d, alpha);
    if !checker.point_in_collision(&partner) {
        return Err(PrmError::SamplingExhausted { evaluations: 2 });
    }
    let mid = anchor.midpoint(&partner);
    if checker.point_in_collision(&mid) {
        return Err(PrmError::SamplingExhausted { evaluations: 3 });
    }
    Ok(mid)
}
