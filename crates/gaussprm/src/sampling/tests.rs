use super::*;
use crate::collision::{Obstacle, ObstacleField};
use crate::space::Limits;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Oracle with no collision anywhere.
struct FreeSpace;

impl CollisionChecker for FreeSpace {
    fn point_in_collision(&self, _p: &Configuration) -> bool {
        false
    }
    fn line_in_collision(&self, _a: &Configuration, _b: &Configuration) -> bool {
        false
    }
    fn environment_limits(&self) -> Limits {
        vec![(0.0, 10.0), (0.0, 10.0)]
    }
}

/// Two slabs leaving a vertical gap 4.8 < x < 5.2; everything else in the box collides.
fn narrow_passage() -> ObstacleField {
    ObstacleField::square(0.0, 10.0)
        .with_obstacle(Obstacle::rect(0.0, 0.0, 4.8, 10.0))
        .with_obstacle(Obstacle::rect(5.2, 0.0, 10.0, 10.0))
}

fn in_gap(p: &Configuration) -> bool {
    let x = p.coords()[0];
    x > 4.8 && x < 5.2
}

#[test]
fn gaussian_fails_without_obstacles() {
    let cfg = SamplerCfg::default();
    let mut rng = StdRng::seed_from_u64(1);
    let err = gaussian_sample(&FreeSpace, &mut rng, &cfg).unwrap_err();
    assert_eq!(
        err,
        PrmError::SamplingExhausted {
            evaluations: cfg.anchor_attempts * cfg.max_anchor_draws
        }
    );
    assert!(err.is_recoverable());
}

#[test]
fn gaussian_samples_land_in_passage() {
    let env = narrow_passage();
    let cfg = SamplerCfg::default();
    let mut rng = StdRng::seed_from_u64(42);
    let samples: Vec<_> = (0..20)
        .filter_map(|_| gaussian_sample(&env, &mut rng, &cfg).ok())
        .collect();
    assert!(!samples.is_empty());
    for p in &samples {
        assert!(!env.point_in_collision(p));
        assert!(in_gap(p));
    }
}

#[test]
fn gaussian_is_reproducible_for_a_seed() {
    let env = ObstacleField::square(0.0, 10.0).with_obstacle(Obstacle::circle(5.0, 5.0, 2.0));
    let cfg = SamplerCfg::default();
    let draw = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        gaussian_sample(&env, &mut rng, &cfg)
    };
    assert_eq!(draw(9), draw(9));
}

#[test]
fn bridge_midpoint_is_free_between_colliding_points() {
    let env = narrow_passage();
    let cfg = SamplerCfg::default();
    let mut rng = StdRng::seed_from_u64(7);
    let witnesses: Vec<_> = (0..20)
        .filter_map(|_| bridge_sample_with_witness(&env, &mut rng, &cfg).ok())
        .collect();
    assert!(!witnesses.is_empty());
    for w in &witnesses {
        assert!(!env.point_in_collision(&w.sample));
        assert!(env.point_in_collision(&w.anchor));
        assert!(env.point_in_collision(&w.partner));
        assert!(in_gap(&w.sample));
        let mid = w.anchor.midpoint(&w.partner);
        assert!(mid.distance(&w.sample) < 1e-12);
    }
}

#[test]
fn bridge_fails_without_obstacles() {
    let mut rng = StdRng::seed_from_u64(3);
    let err = bridge_sample(&FreeSpace, &mut rng, &SamplerCfg::default()).unwrap_err();
    assert!(matches!(err, PrmError::SamplingExhausted { .. }));
}

#[test]
fn simple_variants_fail_fast_on_free_anchor() {
    let cfg = SamplerCfg::default();
    let mut rng = StdRng::seed_from_u64(5);
    assert_eq!(
        simple_gaussian_sample(&FreeSpace, &mut rng, &cfg),
        Err(PrmError::SamplingExhausted { evaluations: 1 })
    );
    assert_eq!(
        simple_bridge_sample(&FreeSpace, &mut rng, &cfg),
        Err(PrmError::SamplingExhausted { evaluations: 1 })
    );
}

#[test]
fn simple_variants_only_return_free_points() {
    let env = narrow_passage();
    let cfg = SamplerCfg::default();
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        if let Ok(p) = simple_gaussian_sample(&env, &mut rng, &cfg) {
            assert!(in_gap(&p));
        }
        if let Ok(p) = simple_bridge_sample(&env, &mut rng, &cfg) {
            assert!(in_gap(&p));
        }
    }
}

#[test]
fn uniform_sampler_finds_free_space() {
    let env = ObstacleField::square(0.0, 10.0).with_obstacle(Obstacle::circle(5.0, 5.0, 2.0));
    let mut rng = StdRng::seed_from_u64(2);
    let p = uniform_free_sample(&env, &mut rng, &SamplerCfg::default()).unwrap();
    assert!(!env.point_in_collision(&p));
}

#[test]
fn invalid_limits_are_not_recoverable() {
    let env = ObstacleField::new(vec![(0.0, 1.0)]);
    let mut rng = StdRng::seed_from_u64(0);
    let err = gaussian_sample(&env, &mut rng, &SamplerCfg::default()).unwrap_err();
    assert!(matches!(err, PrmError::InvalidLimits { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn sampler_kind_parses_names() {
    for kind in SamplerKind::ALL {
        assert_eq!(kind.as_str().parse::<SamplerKind>().unwrap(), kind);
    }
    assert_eq!(
        "simple-bridge".parse::<SamplerKind>().unwrap(),
        SamplerKind::SimpleBridge
    );
    assert!("kd".parse::<SamplerKind>().is_err());
}

#[test]
fn cfg_validation_rejects_bad_budgets() {
    let mut cfg = SamplerCfg::default();
    assert!(cfg.validate().is_ok());
    cfg.trials_per_anchor = 0;
    assert!(cfg.validate().is_err());
    let cfg = SamplerCfg {
        gaussian: NormalParams::new(0.0, -1.0),
        ..SamplerCfg::default()
    };
    assert!(cfg.validate().is_err());
}

proptest! {
    #[test]
    fn bisection_angles_count(rounds in 0u32..12) {
        let a = bisection_angles(rounds);
        prop_assert_eq!(a.len(), 1 + (1usize << rounds));
        prop_assert!(a.iter().all(|&x| (0.0..=std::f64::consts::TAU).contains(&x)));
    }
}
