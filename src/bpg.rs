//! Bottleneck precedence graph engine
//!
//! Repeatedly scores every active link with the single-link allocator,
//! peels the links whose advertised rate is minimal within the connected
//! component the level started with, charges the committed rates of the
//! removed flows against their remaining links, and records one graph
//! level per outer iteration: the peeled links with their advertised
//! rates, plus direct and indirect precedence edges toward links peeled
//! one level later.
//!
//! The solve is single-threaded and deterministic: flows keep their input
//! order within a link, the peel scan walks the active links in ascending
//! id order and restarts from the lowest id after every peel, and every
//! float comparison shares one tolerance. Repeat runs on the same input
//! serialize byte-identically.

use crate::allocator::fill_link;
use crate::network::{Network, NetworkSpec};
use crate::{approx_eq, Error, FlowId, Level, LinkId, Rate, Result, SolveStats};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Instant;
use tracing::{debug, trace};

/// A solved bottleneck precedence graph with the final fair rates
///
/// `vertices` maps each 1-based level to the links peeled there with their
/// advertised rates. Edge lists are keyed by the *upper* level: an entry
/// under level `k` connects a link peeled at `k` to one peeled at `k + 1`.
/// `flow_rates` iterates ascending by flow id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BpgSolution {
    /// Peeling depth of the network
    pub levels: usize,
    /// Level → (link → advertised rate at removal)
    pub vertices: BTreeMap<Level, BTreeMap<LinkId, Rate>>,
    /// Upper level → direct precedence edges (from, to)
    pub direct_edges: BTreeMap<Level, Vec<(LinkId, LinkId)>>,
    /// Upper level → indirect precedence edges (from, to)
    pub indirect_edges: BTreeMap<Level, Vec<(LinkId, LinkId)>>,
    /// Flow → max-min fair rate, ascending by flow id
    pub flow_rates: BTreeMap<FlowId, Rate>,
    /// Run statistics (not part of the semantic output)
    #[serde(skip)]
    pub stats: SolveStats,
}

impl BpgSolution {
    /// The level a link was peeled at, if it became a vertex.
    #[must_use]
    pub fn level_of(&self, link: LinkId) -> Option<Level> {
        self.vertices
            .iter()
            .find(|(_, links)| links.contains_key(&link))
            .map(|(&level, _)| level)
    }

    /// The advertised rate a link was peeled at, if it became a vertex.
    #[must_use]
    pub fn advertised_rate_of(&self, link: LinkId) -> Option<Rate> {
        self.vertices
            .values()
            .find_map(|links| links.get(&link).copied())
    }

    /// Serialize the solution to JSON. Identical inputs produce identical
    /// bytes.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::internal(e.to_string()))
    }
}

/// Solve a network spec end to end: validate, build the state store, and
/// compute the precedence graph.
pub fn solve(spec: &NetworkSpec) -> Result<BpgSolution> {
    let mut network = Network::from_spec(spec)?;
    compute_bpg(&mut network)
}

/// Solve many independent networks in parallel. Each solve is still
/// strictly sequential internally.
pub fn solve_batch(specs: &[NetworkSpec]) -> Vec<Result<BpgSolution>> {
    specs.par_iter().map(solve).collect()
}

/// Compute the bottleneck precedence graph and fair rates of `network`,
/// consuming its active state.
pub fn compute_bpg(network: &mut Network) -> Result<BpgSolution> {
    if network.is_empty() {
        return Err(Error::invalid_input("network has no active links"));
    }
    let start = Instant::now();
    let mut stats = SolveStats::default();

    let mut level: Level = 1;
    let mut vertices: BTreeMap<Level, BTreeMap<LinkId, Rate>> = BTreeMap::new();
    let mut direct_edges: BTreeMap<Level, Vec<(LinkId, LinkId)>> = BTreeMap::new();
    let mut indirect_edges: BTreeMap<Level, Vec<(LinkId, LinkId)>> = BTreeMap::new();
    let mut flow_rates: BTreeMap<FlowId, Rate> = BTreeMap::new();

    // Potential precedent links carried over from the previous level;
    // level 0 starts every link with empty sets.
    let mut direct_potential: HashMap<LinkId, BTreeSet<LinkId>> = network
        .active_links()
        .into_iter()
        .map(|l| (l, BTreeSet::new()))
        .collect();
    let mut indirect_potential: HashMap<LinkId, BTreeSet<LinkId>> =
        direct_potential.clone();

    loop {
        // Score every active link.
        let active = network.active_links();
        let mut advertised: HashMap<LinkId, Rate> = HashMap::with_capacity(active.len());
        let mut committed: HashMap<LinkId, Vec<(FlowId, Rate)>> =
            HashMap::with_capacity(active.len());
        for &link in &active {
            let flows = network.flows_of(link)?;
            let floors = network.min_rates(&flows)?;
            let allocation = fill_link(network.capacity_of(link)?, &floors)?;
            stats.allocator_calls += 1;
            trace!(link, advertised_rate = allocation.advertised_rate, "scored link");
            advertised.insert(link, allocation.advertised_rate);
            committed.insert(link, flows.into_iter().zip(allocation.rates).collect());
        }

        // Peel every link whose advertised rate is minimal among the links
        // it was connected to when the level began. The scan restarts from
        // the lowest id after each peel; connectivity is answered from the
        // level-start snapshot so one removal cannot hide another link's
        // component.
        let snapshot = network.snapshot();
        let mut removed: BTreeSet<LinkId> = BTreeSet::new();
        'peeling: loop {
            for link in network.active_links() {
                let connected = network.connected_links_in(link, &snapshot)?;
                let min_advertised = connected
                    .iter()
                    .map(|k| OrderedFloat(advertised[k]))
                    .min()
                    .map_or(f64::INFINITY, |m| m.0);
                if !approx_eq(advertised[&link], min_advertised) {
                    continue;
                }

                let rates = &committed[&link];
                for &(flow, rate) in rates {
                    flow_rates.entry(flow).or_insert(rate);
                }
                let outcome = network.remove_link_and_flows(link, rates)?;
                for flow in outcome.orphaned_flows {
                    flow_rates.entry(flow).or_insert(0.0);
                }
                removed.insert(link);
                stats.links_peeled += 1;
                vertices
                    .entry(level)
                    .or_default()
                    .insert(link, advertised[&link]);
                if let Some(sources) = direct_potential.get(&link) {
                    for &src in sources {
                        direct_edges.entry(level - 1).or_default().push((src, link));
                    }
                }
                if let Some(sources) = indirect_potential.get(&link) {
                    for &src in sources {
                        indirect_edges.entry(level - 1).or_default().push((src, link));
                    }
                }
                continue 'peeling;
            }
            break;
        }
        debug!(level, peeled = removed.len(), "peeling level complete");

        // Potential precedent sets for the next level. A removed link j
        // precedes a surviving link i directly when they share a flow on
        // the original adjacency and j advertised strictly less; it
        // precedes indirectly when they share nothing but some surviving
        // link k shares flows with both and advertised strictly less
        // than i.
        let remaining = network.active_links();
        let mut next_direct: HashMap<LinkId, BTreeSet<LinkId>> =
            HashMap::with_capacity(remaining.len());
        let mut next_indirect: HashMap<LinkId, BTreeSet<LinkId>> =
            HashMap::with_capacity(remaining.len());
        for &i in &remaining {
            let mut direct = BTreeSet::new();
            let mut indirect = BTreeSet::new();
            for &j in &removed {
                if network.has_shared_flows(i, j, true)? {
                    if advertised[&j] < advertised[&i] {
                        direct.insert(j);
                    }
                    continue;
                }
                for &k in &remaining {
                    if advertised[&k] < advertised[&i]
                        && network.has_shared_flows(i, k, true)?
                        && network.has_shared_flows(j, k, true)?
                    {
                        indirect.insert(j);
                        break;
                    }
                }
            }
            next_direct.insert(i, direct);
            next_indirect.insert(i, indirect);
        }
        direct_potential = next_direct;
        indirect_potential = next_indirect;

        if network.is_empty() {
            break;
        }
        level += 1;
    }

    stats.levels = level;
    stats.solve_time_seconds = start.elapsed().as_secs_f64();
    Ok(BpgSolution {
        levels: level,
        vertices,
        direct_edges,
        indirect_edges,
        flow_rates,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rate_map(pairs: &[(FlowId, Rate)]) -> BTreeMap<FlowId, Rate> {
        pairs.iter().copied().collect()
    }

    fn vertex_map(pairs: &[(Level, &[(LinkId, Rate)])]) -> BTreeMap<Level, BTreeMap<LinkId, Rate>> {
        pairs
            .iter()
            .map(|&(level, links)| (level, links.iter().copied().collect()))
            .collect()
    }

    #[test]
    fn test_single_link_equal_share() {
        let spec = NetworkSpec::from_routes([(1, vec![1]), (2, vec![1])], [(1, 10.0)]);
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.levels, 1);
        assert_eq!(solution.vertices, vertex_map(&[(1, &[(1, 5.0)])]));
        assert!(solution.direct_edges.is_empty());
        assert!(solution.indirect_edges.is_empty());
        assert_eq!(solution.flow_rates, rate_map(&[(1, 5.0), (2, 5.0)]));
    }

    #[test]
    fn test_series_bottleneck_cascade() {
        // Flow 1 crosses both links; link 1 is the tighter bottleneck and
        // peels first, leaving 15 for flow 3 alone on link 2.
        let spec = NetworkSpec::from_routes(
            [(1, vec![1, 2]), (2, vec![1]), (3, vec![2])],
            [(1, 10.0), (2, 20.0)],
        );
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.levels, 2);
        assert_eq!(
            solution.vertices,
            vertex_map(&[(1, &[(1, 5.0)]), (2, &[(2, 15.0)])])
        );
        assert_eq!(solution.direct_edges, BTreeMap::from([(1, vec![(1, 2)])]));
        assert!(solution.indirect_edges.is_empty());
        assert_eq!(solution.flow_rates, rate_map(&[(1, 5.0), (2, 5.0), (3, 15.0)]));
    }

    #[test]
    fn test_parallel_unrelated_links() {
        let spec = NetworkSpec::from_routes([(1, vec![1]), (2, vec![2])], [(1, 10.0), (2, 7.0)]);
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.levels, 1);
        assert_eq!(solution.vertices, vertex_map(&[(1, &[(1, 10.0), (2, 7.0)])]));
        assert!(solution.direct_edges.is_empty());
        assert!(solution.indirect_edges.is_empty());
        assert_eq!(solution.flow_rates, rate_map(&[(1, 10.0), (2, 7.0)]));
    }

    #[test]
    fn test_min_rate_floor() {
        // The equal share 5 sits below flow 2's floor of 8; flow 1 gets
        // the remainder.
        let spec = NetworkSpec::from_routes([(1, vec![1]), (2, vec![1])], [(1, 10.0)])
            .with_min_rates([(1, 0.0), (2, 8.0)]);
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.flow_rates, rate_map(&[(1, 2.0), (2, 8.0)]));
        assert_eq!(solution.vertices, vertex_map(&[(1, &[(1, 2.0)])]));
    }

    #[test]
    fn test_infeasible_equal_split_reallocates() {
        let spec =
            NetworkSpec::from_routes([(1, vec![1]), (2, vec![1]), (3, vec![1])], [(1, 9.0)])
                .with_min_rates([(3, 5.0)]);
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.flow_rates, rate_map(&[(1, 2.0), (2, 2.0), (3, 5.0)]));
    }

    #[test]
    fn test_shared_witness_links_all_resolve_level_one() {
        // Links 1 and 2 share no flow; link 3 shares one with each. Both
        // tight links peel at the same minimal rate and take link 3's
        // flows with them, so link 3 is emptied inside level 1 and no edge
        // between links 1 and 2 can exist in either direction.
        let spec = NetworkSpec::from_routes(
            [(1, vec![1, 3]), (2, vec![2, 3]), (3, vec![1]), (4, vec![2])],
            [(1, 2.0), (2, 2.0), (3, 10.0)],
        );
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.levels, 1);
        assert_eq!(solution.vertices, vertex_map(&[(1, &[(1, 1.0), (2, 1.0)])]));
        assert!(solution.direct_edges.is_empty());
        assert!(solution.indirect_edges.is_empty());
        assert_eq!(
            solution.flow_rates,
            rate_map(&[(1, 1.0), (2, 1.0), (3, 1.0), (4, 1.0)])
        );
    }

    #[test]
    fn test_witness_link_with_own_flow_gets_direct_edges() {
        // Same shape, but link 3 carries a flow of its own and survives to
        // level 2, taking a direct edge from each level-1 link.
        let spec = NetworkSpec::from_routes(
            [
                (1, vec![1, 3]),
                (2, vec![2, 3]),
                (3, vec![1]),
                (4, vec![2]),
                (5, vec![3]),
            ],
            [(1, 2.0), (2, 2.0), (3, 10.0)],
        );
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.levels, 2);
        assert_eq!(
            solution.vertices,
            vertex_map(&[(1, &[(1, 1.0), (2, 1.0)]), (2, &[(3, 8.0)])])
        );
        assert_eq!(
            solution.direct_edges,
            BTreeMap::from([(1, vec![(1, 3), (2, 3)])])
        );
        assert!(solution.indirect_edges.is_empty());
        assert_eq!(
            solution.flow_rates,
            rate_map(&[(1, 1.0), (2, 1.0), (3, 1.0), (4, 1.0), (5, 8.0)])
        );
    }

    #[test]
    fn test_peel_scan_uses_level_start_adjacency() {
        // Chain 1 - 2 - 3 with rising advertised rates. After link 1 peels,
        // live adjacency would let link 2 peel in the same level (its only
        // remaining neighbour advertises more); the level-start snapshot
        // keeps link 1 in link 2's component, deferring link 2 to level 2
        // where it advertises 3.0 instead of 2.0.
        let spec = NetworkSpec::from_routes(
            [(1, vec![1, 2]), (2, vec![2, 3]), (3, vec![1]), (4, vec![3])],
            [(1, 2.0), (2, 4.0), (3, 6.0)],
        );
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.levels, 2);
        assert_eq!(
            solution.vertices,
            vertex_map(&[(1, &[(1, 1.0)]), (2, &[(2, 3.0), (3, 3.0)])])
        );
        assert_eq!(solution.flow_rates[&2], 3.0);
        assert_eq!(solution.direct_edges, BTreeMap::from([(1, vec![(1, 2)])]));
        // Link 3 shares no flow with link 1, but link 2 witnesses for both.
        assert_eq!(solution.indirect_edges, BTreeMap::from([(1, vec![(1, 3)])]));
        assert_eq!(
            solution.flow_rates,
            rate_map(&[(1, 1.0), (2, 3.0), (3, 1.0), (4, 3.0)])
        );
    }

    #[test]
    fn test_oversubscribed_floors_purge_and_zero_rate() {
        // The floors of flows 1 and 2 drain link 3 past zero when their
        // bottlenecks peel; link 3 is purged with flow 5 still aboard, and
        // the flow's whole route is gone so it carries rate 0.
        let spec = NetworkSpec::from_routes(
            [
                (1, vec![1, 3]),
                (2, vec![2, 3]),
                (3, vec![1]),
                (4, vec![2]),
                (5, vec![3]),
            ],
            [(1, 4.0), (2, 4.0), (3, 5.0)],
        )
        .with_min_rates([(1, 3.0), (2, 3.0)]);
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.levels, 1);
        assert_eq!(solution.vertices, vertex_map(&[(1, &[(1, 1.0), (2, 1.0)])]));
        assert_eq!(
            solution.flow_rates,
            rate_map(&[(1, 3.0), (2, 3.0), (3, 1.0), (4, 1.0), (5, 0.0)])
        );
        // Link 3 was purged, never peeled.
        assert_eq!(solution.level_of(3), None);
    }

    #[test]
    fn test_all_floors_advertise_zero_and_peel_first() {
        // Link 3's capacity is exactly covered by the floors of flows 1
        // and 2, so every flow on it sits at its floor, it advertises 0,
        // and it peels ahead of both feeder links.
        let spec = NetworkSpec::from_routes(
            [
                (1, vec![1, 3]),
                (2, vec![2, 3]),
                (3, vec![1]),
                (4, vec![2]),
                (5, vec![3]),
            ],
            [(1, 4.0), (2, 4.0), (3, 6.0)],
        )
        .with_min_rates([(1, 3.0), (2, 3.0)]);
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.levels, 2);
        assert_eq!(
            solution.vertices,
            vertex_map(&[(1, &[(3, 0.0)]), (2, &[(1, 1.0), (2, 1.0)])])
        );
        assert_eq!(
            solution.direct_edges,
            BTreeMap::from([(1, vec![(3, 1), (3, 2)])])
        );
        assert_eq!(
            solution.flow_rates,
            rate_map(&[(1, 3.0), (2, 3.0), (3, 1.0), (4, 1.0), (5, 0.0)])
        );
    }

    #[test]
    fn test_three_level_cascade_monotone() {
        // One long flow over three increasingly roomy links; advertised
        // rates never decrease across levels.
        let spec = NetworkSpec::from_routes(
            [(1, vec![1, 2, 3]), (2, vec![1]), (3, vec![2]), (4, vec![3])],
            [(1, 10.0), (2, 30.0), (3, 60.0)],
        );
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.levels, 2);
        assert_eq!(
            solution.vertices,
            vertex_map(&[(1, &[(1, 5.0)]), (2, &[(2, 25.0), (3, 55.0)])])
        );
        assert_eq!(
            solution.direct_edges,
            BTreeMap::from([(1, vec![(1, 2), (1, 3)])])
        );
        let mut previous_max = 0.0_f64;
        for links in solution.vertices.values() {
            let level_min = links.values().copied().fold(f64::INFINITY, f64::min);
            assert!(level_min >= previous_max);
            previous_max = links.values().copied().fold(previous_max, f64::max);
        }
    }

    #[test]
    fn test_determinism_byte_identical() {
        let spec = NetworkSpec::from_routes(
            [(1, vec![1, 2]), (2, vec![1]), (3, vec![2]), (4, vec![2, 3]), (5, vec![3])],
            [(1, 10.0), (2, 20.0), (3, 8.0)],
        );
        let first = solve(&spec).unwrap();
        let second = solve(&spec).unwrap();
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_flow_rates_sorted_ascending() {
        let spec = NetworkSpec::from_routes(
            [(9, vec![1]), (2, vec![1]), (7, vec![1])],
            [(1, 9.0)],
        );
        let solution = solve(&spec).unwrap();
        let ids: Vec<FlowId> = solution.flow_rates.keys().copied().collect();
        assert_eq!(ids, vec![2, 7, 9]);
    }

    #[test]
    fn test_solution_queries() {
        let spec = NetworkSpec::from_routes(
            [(1, vec![1, 2]), (2, vec![1]), (3, vec![2])],
            [(1, 10.0), (2, 20.0)],
        );
        let solution = solve(&spec).unwrap();
        assert_eq!(solution.level_of(1), Some(1));
        assert_eq!(solution.level_of(2), Some(2));
        assert_eq!(solution.level_of(42), None);
        assert_eq!(solution.advertised_rate_of(2), Some(15.0));
    }

    #[test]
    fn test_empty_input_rejected_before_solving() {
        let spec = NetworkSpec::from_routes([], [(1, 10.0)]);
        assert!(matches!(solve(&spec), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_drained_network_rejected() {
        let spec = NetworkSpec::from_routes([(1, vec![1])], [(1, 10.0)]);
        let mut network = Network::from_spec(&spec).unwrap();
        compute_bpg(&mut network).unwrap();
        assert!(matches!(
            compute_bpg(&mut network),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_solve_batch_matches_solve() {
        let specs = vec![
            NetworkSpec::from_routes([(1, vec![1]), (2, vec![1])], [(1, 10.0)]),
            NetworkSpec::from_routes(
                [(1, vec![1, 2]), (2, vec![1]), (3, vec![2])],
                [(1, 10.0), (2, 20.0)],
            ),
        ];
        let batch = solve_batch(&specs);
        assert_eq!(batch.len(), 2);
        for (spec, result) in specs.iter().zip(batch) {
            let solo = solve(spec).unwrap();
            let batched = result.unwrap();
            assert_eq!(solo.to_json().unwrap(), batched.to_json().unwrap());
        }
    }

    fn arb_network() -> impl Strategy<Value = NetworkSpec> {
        (1u32..=5).prop_flat_map(|num_links| {
            let links: Vec<LinkId> = (1..=num_links).collect();
            let routes = proptest::collection::vec(
                proptest::sample::subsequence(links, 1..=num_links as usize),
                1..=8,
            );
            let capacities =
                proptest::collection::vec(1.0f64..100.0, num_links as usize);
            (routes, capacities).prop_map(|(routes, capacities)| {
                NetworkSpec::from_routes(
                    routes
                        .into_iter()
                        .enumerate()
                        .map(|(i, route)| (i as FlowId + 1, route)),
                    capacities
                        .into_iter()
                        .enumerate()
                        .map(|(i, cap)| (i as LinkId + 1, cap)),
                )
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_every_flow_rated_exactly_once(spec in arb_network()) {
            let solution = solve(&spec).unwrap();
            let mut expected: Vec<FlowId> = spec.flows.keys().copied().collect();
            expected.sort_unstable();
            let rated: Vec<FlowId> = solution.flow_rates.keys().copied().collect();
            prop_assert_eq!(rated, expected);
            for &rate in solution.flow_rates.values() {
                prop_assert!(rate >= 0.0);
            }
        }

        #[test]
        fn prop_links_peel_at_most_once(spec in arb_network()) {
            let solution = solve(&spec).unwrap();
            let mut seen = BTreeSet::new();
            for links in solution.vertices.values() {
                for &link in links.keys() {
                    prop_assert!(seen.insert(link), "link {} peeled twice", link);
                }
            }
        }

        #[test]
        fn prop_rates_fit_original_capacities(spec in arb_network()) {
            let solution = solve(&spec).unwrap();
            let network = Network::from_spec(&spec).unwrap();
            for &link in spec.capacities.keys() {
                let capacity = network.original_capacity_of(link).unwrap();
                let used: Rate = network
                    .original_flows_of(link)
                    .unwrap()
                    .iter()
                    .map(|flow| solution.flow_rates[flow])
                    .sum();
                prop_assert!(
                    used <= capacity * (1.0 + 1e-6) + 1e-6,
                    "link {} oversubscribed: {} > {}",
                    link,
                    used,
                    capacity
                );
            }
        }

        #[test]
        fn prop_resolve_is_byte_identical(spec in arb_network()) {
            let first = solve(&spec).unwrap();
            let second = solve(&spec).unwrap();
            prop_assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
        }

        #[test]
        fn prop_direct_edges_are_sound(spec in arb_network()) {
            let solution = solve(&spec).unwrap();
            let network = Network::from_spec(&spec).unwrap();
            for pairs in solution.direct_edges.values() {
                for &(from, to) in pairs {
                    prop_assert!(network.has_shared_flows(from, to, true).unwrap());
                    let from_rate = solution.advertised_rate_of(from).unwrap();
                    let to_rate = solution.advertised_rate_of(to).unwrap();
                    prop_assert!(from_rate < to_rate);
                }
            }
            for pairs in solution.indirect_edges.values() {
                for &(from, to) in pairs {
                    prop_assert!(!network.has_shared_flows(from, to, true).unwrap());
                }
            }
        }
    }
}
