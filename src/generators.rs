//! Synthetic network construction
//!
//! Builders for the network shapes the surrounding experiment tooling
//! uses: a linear chain of overlapping two-link flows, and flow-set
//! replication for scale-up runs. Both produce ordinary [`NetworkSpec`]s
//! and feed tests and benchmarks.

use crate::network::NetworkSpec;
use crate::{LinkId, Rate};

/// A chain of `num_links` equal-capacity links where flow `i` traverses
/// links `i` and `i + 1`, and the last flow rides only the last link.
/// Links and flows are numbered from 1.
#[must_use]
pub fn linear_network(num_links: u32, capacity: Rate) -> NetworkSpec {
    let flows = (1..=num_links).map(|link| {
        if link == num_links {
            (link, vec![link])
        } else {
            (link, vec![link, link + 1])
        }
    });
    let capacities = (1..=num_links).map(|link: LinkId| (link, capacity));
    NetworkSpec::from_routes(flows, capacities)
}

/// Replicate every flow of `base` until `factor` copies exist, assigning
/// replica ids after the current maximum and preserving routes and
/// minimum rates. `factor` of 1 returns the base unchanged.
#[must_use]
pub fn replicate(base: &NetworkSpec, factor: u32) -> NetworkSpec {
    let mut spec = base.clone();
    let mut next_id = base.flows.keys().copied().max().unwrap_or(0) + 1;
    for _ in 1..factor {
        for (flow, route) in &base.flows {
            spec.flows.insert(next_id, route.clone());
            if let Some(min_rates) = &base.min_rates {
                if let Some(&rate) = min_rates.get(flow) {
                    spec.min_rates
                        .get_or_insert_with(Default::default)
                        .insert(next_id, rate);
                }
            }
            next_id += 1;
        }
    }
    spec
}
