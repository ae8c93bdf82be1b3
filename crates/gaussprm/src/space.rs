//! Configuration space primitives.
//!
//! - `Configuration`: an immutable point in planning space backed by `DVector<f64>`.
//! - `Limits`: per-dimension `(min, max)` ranges reported by the collision checker.
//!
//! The samplers perturb in the plane spanned by the first two coordinates; any further
//! coordinates are carried through unchanged.

use nalgebra::DVector;
use rand::Rng;
use std::fmt;

use crate::error::PrmError;

/// Per-dimension `(min, max)` ranges.
pub type Limits = Vec<(f64, f64)>;

/// A point in planning space.
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration(DVector<f64>);

impl Configuration {
    pub fn new(coords: Vec<f64>) -> Self {
        Self(DVector::from_vec(coords))
    }

    pub fn from_slice(coords: &[f64]) -> Self {
        Self(DVector::from_column_slice(coords))
    }

    /// Planar shorthand.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(vec![x, y])
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn coords(&self) -> &[f64] {
        self.0.as_slice()
    }

    #[inline]
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.iter().copied().collect()
    }

    /// Euclidean distance. Dimensions must agree.
    #[inline]
    pub fn distance(&self, other: &Configuration) -> f64 {
        (&self.0 - &other.0).norm()
    }

    pub fn midpoint(&self, other: &Configuration) -> Configuration {
        Self((&self.0 + &other.0) * 0.5)
    }

    /// `self + d·(cos α, sin α)` applied to the first two coordinates.
    pub fn offset_planar(&self, d: f64, alpha: f64) -> Configuration {
        let mut v = self.0.clone();
        v[0] += d * alpha.cos();
        v[1] += d * alpha.sin();
        Self(v)
    }

    /// True if every coordinate lies within its `(min, max)` range.
    pub fn within(&self, limits: &[(f64, f64)]) -> bool {
        self.dim() == limits.len()
            && self
                .0
                .iter()
                .zip(limits)
                .all(|(&c, &(lo, hi))| c >= lo && c <= hi)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c:.4}")?;
        }
        write!(f, "]")
    }
}

/// Check that limits describe a usable box of dimension >= 2.
pub fn validate_limits(limits: &[(f64, f64)]) -> Result<(), PrmError> {
    if limits.len() < 2 {
        return Err(PrmError::invalid_limits(format!(
            "need at least 2 dimensions, got {}",
            limits.len()
        )));
    }
    for (k, &(lo, hi)) in limits.iter().enumerate() {
        if !(lo.is_finite() && hi.is_finite()) {
            return Err(PrmError::invalid_limits(format!(
                "dimension {k} has non-finite bounds"
            )));
        }
        if lo > hi {
            return Err(PrmError::invalid_limits(format!(
                "dimension {k} has min {lo} > max {hi}"
            )));
        }
    }
    Ok(())
}

/// Draw a configuration uniformly inside `limits`.
pub fn uniform_configuration<R: Rng + ?Sized>(rng: &mut R, limits: &[(f64, f64)]) -> Configuration {
    let coords = limits
        .iter()
        .map(|&(lo, hi)| if lo < hi { rng.gen_range(lo..hi) } else { lo })
        .collect();
    Configuration::new(coords)
}
