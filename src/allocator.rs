//! Single-link fair allocator
//!
//! Water-filling with minimum-rate floors over one link: flows whose floor
//! exceeds the equal share are pinned there and leave the shared pool, and
//! the freed capacity is re-divided among the rest until the allocation is
//! stable. The scalar summary of the result is the link's *advertised
//! rate*: the highest rate any flow above its floor receives, 0 when every
//! flow sits at its floor, and +∞ when the link is not saturated.

use crate::{approx_eq, Error, Rate, Result};

/// Result of allocating one link's capacity among its flows
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAllocation {
    /// Per-flow rates, parallel to the flow order the link was given
    pub rates: Vec<Rate>,
    /// The link's advertised rate
    pub advertised_rate: Rate,
}

/// Advertised rate of a link given an allocation.
///
/// +∞ when the rates do not sum to the capacity (the link is not
/// saturated), 0 when every flow is pinned at its floor, otherwise the
/// maximum rate among flows above their floor.
#[must_use]
pub fn advertised_rate(rates: &[Rate], min_rates: &[Rate], capacity: Rate) -> Rate {
    let total: Rate = rates.iter().sum();
    if !approx_eq(total, capacity) {
        return f64::INFINITY;
    }
    if rates.iter().zip(min_rates).all(|(r, m)| r == m) {
        return 0.0;
    }
    let above_floor = rates
        .iter()
        .zip(min_rates)
        .filter(|(r, m)| r > m)
        .map(|(&r, _)| r)
        .fold(f64::NEG_INFINITY, f64::max);
    // Every flow at or below its floor without matching it exactly: the
    // floors alone cover the capacity, nothing is above them.
    if above_floor == f64::NEG_INFINITY {
        0.0
    } else {
        above_floor
    }
}

/// Divide `capacity` among flows with the given minimum-rate floors.
///
/// Each pass computes the equal share of the unpinned pool, derives the
/// advertised rate, and pins every flow whose target (the larger of the
/// advertised rate and its floor) differs from its tentative share. The
/// loop ends on the first pass that pins nothing; every earlier pass pins
/// at least one flow, so at most `n + 1` passes run.
pub fn fill_link(capacity: Rate, min_rates: &[Rate]) -> Result<LinkAllocation> {
    let n = min_rates.len();
    if n == 0 {
        return Err(Error::internal("allocating a link with no flows"));
    }

    let mut rates = vec![0.0; n];
    let mut pinned = vec![false; n];
    let mut pinned_sum: Rate = 0.0;
    let mut pinned_count = 0usize;

    for _pass in 0..=n {
        if pinned_count == n {
            // All flows sit at their floors; an over-subscribed link
            // advertises +∞ here because the floors exceed the capacity.
            let ad = advertised_rate(&rates, min_rates, capacity);
            return Ok(LinkAllocation { rates, advertised_rate: ad });
        }

        let share = (capacity - pinned_sum) / (n - pinned_count) as Rate;
        for i in 0..n {
            if !pinned[i] {
                rates[i] = share;
            }
        }
        let ad = advertised_rate(&rates, min_rates, capacity);

        let mut changed = false;
        for i in 0..n {
            if pinned[i] {
                continue;
            }
            let target = ad.max(min_rates[i]);
            if rates[i] != target {
                rates[i] = target;
                pinned[i] = true;
                pinned_sum += target;
                pinned_count += 1;
                changed = true;
            }
        }

        if !changed {
            return Ok(LinkAllocation { rates, advertised_rate: ad });
        }
    }

    Err(Error::NoConvergence { iterations: n + 1 })
}
