//! Angle bisection schedule for candidate directions.

use std::f64::consts::TAU;

/// Upper bound on bisection rounds (2^20 angles in the last round).
pub(crate) const MAX_ROUNDS: u32 = 20;

/// Seeds `[0, 2π]` followed by the midpoints each bisection round inserts.
///
/// Round `k` (1-based) contributes `2^(k-1)` angles `(2j+1)·2π/2^k`, ascending, which is
/// the order repeated midpoint insertion into the sorted angle list produces. The seeds
/// denote the same direction; the duplicate only costs one extra evaluation.
pub fn bisection_angles(rounds: u32) -> Vec<f64> {
    let rounds = rounds.min(MAX_ROUNDS);
    let mut out = Vec::with_capacity(1 + (1usize << rounds));
    out.push(0.0);
    out.push(TAU);
    for k in 1..=rounds {
        let denom = (1u64 << k) as f64;
        let count = 1u64 << (k - 1);
        out.extend((0..count).map(|j| (2 * j + 1) as f64 * TAU / denom));
    }
    out
}
