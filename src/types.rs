//! Common scalar types and the shared numeric tolerance policy

use serde::{Deserialize, Serialize};

/// Flow identifier
pub type FlowId = u32;

/// Link identifier
pub type LinkId = u32;

/// Rate / capacity value (Mbit/s or any single consistent unit)
pub type Rate = f64;

/// Peeling level (1-based)
pub type Level = usize;

/// Relative tolerance shared by the saturation check, the peel tie
/// comparison, and the capacity-zero purge. Divergent tolerances across
/// those three sites produce subtly different precedence graphs, so there
/// is exactly one constant.
pub const RATE_TOLERANCE: f64 = 1e-8;

/// Approximate equality under [`RATE_TOLERANCE`].
///
/// Relative above magnitude 1, absolute below it. Two infinities of the
/// same sign compare equal.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= RATE_TOLERANCE * scale
}

/// True when `x` is within tolerance of zero.
#[must_use]
pub fn approx_zero(x: f64) -> bool {
    x.abs() <= RATE_TOLERANCE
}

/// Statistics from a solver run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveStats {
    /// Number of peeling levels
    pub levels: usize,
    /// Total links peeled across all levels
    pub links_peeled: usize,
    /// Number of single-link allocator invocations
    pub allocator_calls: usize,
    /// Time spent solving (seconds)
    pub solve_time_seconds: f64,
}
