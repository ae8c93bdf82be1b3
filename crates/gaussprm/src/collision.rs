//! Collision checking seam and a reference obstacle field.
//!
//! Purpose
//! - `CollisionChecker` is the narrow oracle the samplers, roadmap learning, and planner
//!   consume: point and segment queries plus the environment limits.
//! - `ObstacleField` is a small planar implementation (circles and axis-aligned boxes)
//!   used by tests, benches, the example program, and the CLI scenarios.
//!
//! Conventions
//! - Obstacles live in the plane of the first two coordinates.
//! - Points outside the environment limits count as colliding.

use serde::{Deserialize, Serialize};

use crate::error::PrmError;
use crate::space::{Configuration, Limits};

/// Oracle answering collision queries for one environment.
pub trait CollisionChecker {
    fn point_in_collision(&self, p: &Configuration) -> bool;

    fn line_in_collision(&self, a: &Configuration, b: &Configuration) -> bool;

    fn environment_limits(&self) -> Limits;
}

impl<T: CollisionChecker + ?Sized> CollisionChecker for &T {
    fn point_in_collision(&self, p: &Configuration) -> bool {
        (**self).point_in_collision(p)
    }

    fn line_in_collision(&self, a: &Configuration, b: &Configuration) -> bool {
        (**self).line_in_collision(a, b)
    }

    fn environment_limits(&self) -> Limits {
        (**self).environment_limits()
    }
}

/// Planar obstacle shapes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Obstacle {
    Circle { center: [f64; 2], radius: f64 },
    Rect { min: [f64; 2], max: [f64; 2] },
}

impl Obstacle {
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::Circle {
            center: [x, y],
            radius,
        }
    }

    pub fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::Rect {
            min: [min_x, min_y],
            max: [max_x, max_y],
        }
    }

    #[inline]
    fn contains(&self, x: f64, y: f64) -> bool {
        match *self {
            Self::Circle { center, radius } => {
                let dx = x - center[0];
                let dy = y - center[1];
                (dx * dx + dy * dy).sqrt() <= radius
            }
            Self::Rect { min, max } => x >= min[0] && x <= max[0] && y >= min[1] && y <= max[1],
        }
    }
}

fn default_resolution() -> f64 {
    0.05
}

/// Box-limited planar environment populated with obstacles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObstacleField {
    pub limits: Limits,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    /// Maximum spacing between interpolated points on segment checks.
    #[serde(default = "default_resolution")]
    pub resolution: f64,
}

impl ObstacleField {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            obstacles: Vec::new(),
            resolution: default_resolution(),
        }
    }

    /// Square `[lo, hi]²` without obstacles.
    pub fn square(lo: f64, hi: f64) -> Self {
        Self::new(vec![(lo, hi), (lo, hi)])
    }

    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacles.push(obstacle);
        self
    }
}

impl CollisionChecker for ObstacleField {
    fn point_in_collision(&self, p: &Configuration) -> bool {
        // Obstacles live in the (x, y) plane.
        if p.dim() < 2 || !p.within(&self.limits) {
            return true;
        }
        let (x, y) = (p.coords()[0], p.coords()[1]);
        self.obstacles.iter().any(|o| o.contains(x, y))
    }

    fn line_in_collision(&self, a: &Configuration, b: &Configuration) -> bool {
        let dist = a.distance(b);
        let spacing = if self.resolution > 0.0 {
            self.resolution
        } else {
            default_resolution()
        };
        let steps = (dist / spacing).ceil().max(1.0) as usize;
        let delta = b.as_vector() - a.as_vector();
        (0..=steps).any(|i| {
            let t = i as f64 / steps as f64;
            let p = Configuration::from_slice((a.as_vector() + &delta * t).as_slice());
            self.point_in_collision(&p)
        })
    }

    fn environment_limits(&self) -> Limits {
        self.limits.clone()
    }
}

/// Keep the collision-free start and goal entries whose dimension matches the limits.
///
/// Fails with `InvalidInput` when either list has no usable entry.
pub fn check_start_goal<C: CollisionChecker + ?Sized>(
    checker: &C,
    starts: &[Configuration],
    goals: &[Configuration],
) -> Result<(Vec<Configuration>, Vec<Configuration>), PrmError> {
    let dim = checker.environment_limits().len();
    let free = |list: &[Configuration]| -> Vec<Configuration> {
        list.iter()
            .filter(|p| p.dim() == dim && !checker.point_in_collision(p))
            .cloned()
            .collect()
    };
    let checked_starts = free(starts);
    if checked_starts.is_empty() {
        return Err(PrmError::invalid_input("no collision-free start configuration"));
    }
    let checked_goals = free(goals);
    if checked_goals.is_empty() {
        return Err(PrmError::invalid_input("no collision-free goal configuration"));
    }
    Ok((checked_starts, checked_goals))
}
