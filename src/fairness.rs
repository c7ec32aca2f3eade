//! Jain's fairness index
//!
//! Compares observed flow throughputs against their theoretical fair
//! shares. The index ranges from 1/n (one flow hogs everything) to 1
//! (every flow sits exactly at its share).

use crate::bpg::BpgSolution;
use crate::{approx_zero, Error, FlowId, Rate, Result};
use std::collections::BTreeMap;

/// Jain's fairness index of `observed` rates normalized by `expected`.
///
/// Each observation is divided by its expected rate first, so a network
/// where every flow achieves its (unequal) fair share still scores 1.
pub fn jains_index(observed: &[Rate], expected: &[Rate]) -> Result<f64> {
    if observed.is_empty() {
        return Err(Error::invalid_input("no rates to compare"));
    }
    if observed.len() != expected.len() {
        return Err(Error::invalid_input(format!(
            "{} observed rates against {} expected",
            observed.len(),
            expected.len()
        )));
    }
    if expected.iter().any(|&e| !e.is_finite() || e <= 0.0) {
        return Err(Error::invalid_input("expected rates must be positive"));
    }

    let normalized: Vec<f64> = observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| o / e)
        .collect();
    let n = normalized.len() as f64;
    let mean = normalized.iter().sum::<f64>() / n;
    let mean_square = normalized.iter().map(|x| x * x).sum::<f64>() / n;
    if mean_square == 0.0 {
        return Ok(1.0);
    }
    Ok((mean * mean / mean_square).min(1.0))
}

/// Fairness of observed per-flow throughputs against a solved network.
///
/// Every rated flow must appear in `observed`. Flows whose fair share is
/// zero (their whole route was purged) cannot be normalized and are left
/// out of the index.
pub fn fairness_of(observed: &BTreeMap<FlowId, Rate>, solution: &BpgSolution) -> Result<f64> {
    let mut obs = Vec::with_capacity(solution.flow_rates.len());
    let mut exp = Vec::with_capacity(solution.flow_rates.len());
    for (&flow, &share) in &solution.flow_rates {
        if approx_zero(share) {
            continue;
        }
        let &rate = observed.get(&flow).ok_or(Error::unknown_flow(flow))?;
        obs.push(rate);
        exp.push(share);
    }
    jains_index(&obs, &exp)
}
