//! Network state store: the flow/link/capacity relations a solve runs over
//!
//! [`NetworkSpec`] is the input schema handed over by topology/config
//! collaborators: a flow→route mapping, per-link capacities, and optional
//! member-order and minimum-rate overrides. [`Network`] is the mutable
//! relational state the solver peels down, built as dense arenas over
//! interned ids with active bitsets layered on top. Flows and links are
//! only ever removed whole, so the live adjacency is exactly the pristine
//! adjacency filtered through the bitsets; the pristine view needed for
//! precedence-edge computation comes for free.

use crate::{approx_zero, Error, FlowId, LinkId, Rate, Result, RATE_TOLERANCE};
use bitvec::prelude::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// Input description of a network: flows, routes, capacities
///
/// Insertion order of the maps is significant: the order of flows within a
/// link (and therefore every downstream tie-break) follows it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Flow id → ordered list of traversed link ids
    pub flows: IndexMap<FlowId, Vec<LinkId>>,
    /// Link id → capacity (positive, one consistent unit across all links)
    pub capacities: IndexMap<LinkId, Rate>,
    /// Optional explicit flow order per link; derived from `flows` if absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_members: Option<IndexMap<LinkId, Vec<FlowId>>>,
    /// Optional minimum rate per flow; zero if absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rates: Option<IndexMap<FlowId, Rate>>,
    /// Optional expected link count; ids below it are registered even if
    /// no flow traverses them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_links: Option<u32>,
}

impl NetworkSpec {
    /// Build a spec from flow routes and link capacities.
    pub fn from_routes<F, C>(flows: F, capacities: C) -> Self
    where
        F: IntoIterator<Item = (FlowId, Vec<LinkId>)>,
        C: IntoIterator<Item = (LinkId, Rate)>,
    {
        Self {
            flows: flows.into_iter().collect(),
            capacities: capacities.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set minimum rates for a subset of flows.
    #[must_use]
    pub fn with_min_rates<M>(mut self, min_rates: M) -> Self
    where
        M: IntoIterator<Item = (FlowId, Rate)>,
    {
        self.min_rates = Some(min_rates.into_iter().collect());
        self
    }

    /// Override the flow order per link.
    #[must_use]
    pub fn with_link_members<L>(mut self, members: L) -> Self
    where
        L: IntoIterator<Item = (LinkId, Vec<FlowId>)>,
    {
        self.link_members = Some(members.into_iter().collect());
        self
    }

    /// Declare the expected link count.
    #[must_use]
    pub fn with_num_links(mut self, num_links: u32) -> Self {
        self.num_links = Some(num_links);
        self
    }

    /// Parse a spec from its JSON representation.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::invalid_input(e.to_string()))
    }

    /// Serialize the spec to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::internal(e.to_string()))
    }

    /// Validate the input. All malformed-input conditions are rejected
    /// here, before any solving happens.
    pub fn validate(&self) -> Result<()> {
        if self.flows.is_empty() {
            return Err(Error::invalid_input("flow set is empty"));
        }

        for (&flow, route) in &self.flows {
            if route.is_empty() {
                return Err(Error::invalid_input(format!("flow {flow} has an empty route")));
            }
            let mut seen = BTreeSet::new();
            for &link in route {
                if !seen.insert(link) {
                    return Err(Error::invalid_input(format!(
                        "flow {flow} traverses link {link} more than once"
                    )));
                }
                if !self.capacities.contains_key(&link) {
                    return Err(Error::invalid_input(format!(
                        "flow {flow} references unknown link {link}"
                    )));
                }
            }
        }

        let carrying: BTreeSet<LinkId> =
            self.flows.values().flatten().copied().collect();
        for (&link, &cap) in &self.capacities {
            if !cap.is_finite() || cap < 0.0 {
                return Err(Error::invalid_input(format!(
                    "link {link} has invalid capacity {cap}"
                )));
            }
            if cap == 0.0 && carrying.contains(&link) {
                return Err(Error::invalid_input(format!(
                    "link {link} carries flows but has no capacity"
                )));
            }
        }

        if let Some(min_rates) = &self.min_rates {
            for (&flow, &rate) in min_rates {
                if !self.flows.contains_key(&flow) {
                    return Err(Error::invalid_input(format!(
                        "minimum rate given for unknown flow {flow}"
                    )));
                }
                if !rate.is_finite() || rate < 0.0 {
                    return Err(Error::invalid_input(format!(
                        "flow {flow} has invalid minimum rate {rate}"
                    )));
                }
            }
        }

        if let Some(members) = &self.link_members {
            for (&link, flows) in members {
                let known = self.capacities.contains_key(&link)
                    || self.num_links.is_some_and(|n| link < n);
                if !known {
                    return Err(Error::invalid_input(format!(
                        "member list given for unknown link {link}"
                    )));
                }
                let listed: BTreeSet<FlowId> = flows.iter().copied().collect();
                if listed.len() != flows.len() {
                    return Err(Error::invalid_input(format!(
                        "member list for link {link} contains duplicates"
                    )));
                }
                let expected: BTreeSet<FlowId> = self
                    .flows
                    .iter()
                    .filter(|(_, route)| route.contains(&link))
                    .map(|(&f, _)| f)
                    .collect();
                if listed != expected {
                    return Err(Error::invalid_input(format!(
                        "member list for link {link} disagrees with flow routes"
                    )));
                }
            }
            // Every flow-carrying link needs an entry when the override is used.
            for &link in &carrying {
                if !members.contains_key(&link) {
                    return Err(Error::invalid_input(format!(
                        "member list missing flow-carrying link {link}"
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Frozen adjacency view taken at the start of a peeling sub-round
///
/// Peeling one link must not hide another link that was connected when the
/// round began, so connectivity queries within a round go through this.
#[derive(Debug, Clone)]
pub struct AdjacencySnapshot {
    links: BitVec,
    flows: BitVec,
}

/// Links and flows dropped as a side effect of one removal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalOutcome {
    /// Links purged by the cleanup pass (drained capacity or no flows left)
    pub purged_links: Vec<LinkId>,
    /// Flows whose entire route was purged; they carry a zero rate
    pub orphaned_flows: Vec<FlowId>,
}

/// Mutable relational state for one solve
///
/// Exclusively owned by the solver for the duration of a solve. The
/// pristine adjacency and capacities are immutable after construction.
#[derive(Debug, Clone)]
pub struct Network {
    link_ids: Vec<LinkId>,
    flow_ids: Vec<FlowId>,
    link_index: HashMap<LinkId, u32>,
    flow_index: HashMap<FlowId, u32>,
    /// Link indices in ascending id order; scan and cleanup order.
    sorted_links: Vec<u32>,
    /// Pristine flow → route (link indices).
    routes: Vec<SmallVec<[u32; 4]>>,
    /// Pristine link → member flows (input order).
    members: Vec<SmallVec<[u32; 8]>>,
    capacity0: Vec<Rate>,
    capacity: Vec<Rate>,
    min_rate: Vec<Rate>,
    link_active: BitVec,
    flow_active: BitVec,
}

impl Network {
    /// Construct the store from a validated input spec.
    pub fn from_spec(spec: &NetworkSpec) -> Result<Self> {
        spec.validate()?;

        let mut link_ids: Vec<LinkId> = Vec::with_capacity(spec.capacities.len());
        let mut link_index: HashMap<LinkId, u32> = HashMap::new();
        let mut capacity0: Vec<Rate> = Vec::with_capacity(spec.capacities.len());
        for (&id, &cap) in &spec.capacities {
            link_index.insert(id, link_ids.len() as u32);
            link_ids.push(id);
            capacity0.push(cap);
        }
        if let Some(n) = spec.num_links {
            for id in 0..n {
                if !link_index.contains_key(&id) {
                    link_index.insert(id, link_ids.len() as u32);
                    link_ids.push(id);
                    capacity0.push(0.0);
                }
            }
        }

        let mut flow_ids: Vec<FlowId> = Vec::with_capacity(spec.flows.len());
        let mut flow_index: HashMap<FlowId, u32> = HashMap::new();
        let mut routes: Vec<SmallVec<[u32; 4]>> = Vec::with_capacity(spec.flows.len());
        let mut members: Vec<SmallVec<[u32; 8]>> = vec![SmallVec::new(); link_ids.len()];
        for (&id, route) in &spec.flows {
            let f = flow_ids.len() as u32;
            flow_index.insert(id, f);
            flow_ids.push(id);
            let idx_route: SmallVec<[u32; 4]> =
                route.iter().map(|l| link_index[l]).collect();
            for &l in &idx_route {
                members[l as usize].push(f);
            }
            routes.push(idx_route);
        }

        // An explicit member list only reorders; validation pinned the sets.
        if let Some(member_spec) = &spec.link_members {
            for (&link, flows) in member_spec {
                let l = link_index[&link] as usize;
                members[l] = flows.iter().map(|f| flow_index[f]).collect();
            }
        }

        let mut min_rate = vec![0.0; flow_ids.len()];
        if let Some(min_rates) = &spec.min_rates {
            for (&flow, &rate) in min_rates {
                min_rate[flow_index[&flow] as usize] = rate;
            }
        }

        let mut sorted_links: Vec<u32> = (0..link_ids.len() as u32).collect();
        sorted_links.sort_by_key(|&l| link_ids[l as usize]);

        let num_links = link_ids.len();
        let num_flows = flow_ids.len();
        Ok(Self {
            link_ids,
            flow_ids,
            link_index,
            flow_index,
            sorted_links,
            routes,
            members,
            capacity: capacity0.clone(),
            capacity0,
            min_rate,
            link_active: bitvec![1; num_links],
            flow_active: bitvec![1; num_flows],
        })
    }

    fn known_link(&self, id: LinkId) -> Result<usize> {
        self.link_index
            .get(&id)
            .map(|&l| l as usize)
            .ok_or(Error::unknown_link(id))
    }

    fn active_link(&self, id: LinkId) -> Result<usize> {
        let l = self.known_link(id)?;
        if self.link_active[l] {
            Ok(l)
        } else {
            Err(Error::unknown_link(id))
        }
    }

    fn known_flow(&self, id: FlowId) -> Result<usize> {
        self.flow_index
            .get(&id)
            .map(|&f| f as usize)
            .ok_or(Error::unknown_flow(id))
    }

    fn active_flow(&self, id: FlowId) -> Result<usize> {
        let f = self.known_flow(id)?;
        if self.flow_active[f] {
            Ok(f)
        } else {
            Err(Error::unknown_flow(id))
        }
    }

    /// Links the flow currently traverses, in route order.
    pub fn links_of(&self, flow: FlowId) -> Result<Vec<LinkId>> {
        let f = self.active_flow(flow)?;
        Ok(self.routes[f]
            .iter()
            .filter(|&&l| self.link_active[l as usize])
            .map(|&l| self.link_ids[l as usize])
            .collect())
    }

    /// The flow's full original route, regardless of removals.
    pub fn original_links_of(&self, flow: FlowId) -> Result<Vec<LinkId>> {
        let f = self.known_flow(flow)?;
        Ok(self.routes[f].iter().map(|&l| self.link_ids[l as usize]).collect())
    }

    /// Flows currently traversing the link, in input order.
    pub fn flows_of(&self, link: LinkId) -> Result<Vec<FlowId>> {
        let l = self.active_link(link)?;
        Ok(self.members[l]
            .iter()
            .filter(|&&f| self.flow_active[f as usize])
            .map(|&f| self.flow_ids[f as usize])
            .collect())
    }

    /// The link's original flow set, regardless of removals.
    pub fn original_flows_of(&self, link: LinkId) -> Result<Vec<FlowId>> {
        let l = self.known_link(link)?;
        Ok(self.members[l].iter().map(|&f| self.flow_ids[f as usize]).collect())
    }

    /// Current (reduced) capacity of the link.
    pub fn capacity_of(&self, link: LinkId) -> Result<Rate> {
        let l = self.active_link(link)?;
        Ok(self.capacity[l])
    }

    /// Capacity the link was constructed with.
    pub fn original_capacity_of(&self, link: LinkId) -> Result<Rate> {
        let l = self.known_link(link)?;
        Ok(self.capacity0[l])
    }

    /// Minimum rates for the given flows, in the given order.
    pub fn min_rates(&self, flows: &[FlowId]) -> Result<Vec<Rate>> {
        flows
            .iter()
            .map(|&f| self.active_flow(f).map(|idx| self.min_rate[idx]))
            .collect()
    }

    /// Link ids that still carry at least one flow, ascending.
    pub fn active_links(&self) -> Vec<LinkId> {
        self.sorted_links
            .iter()
            .map(|&l| l as usize)
            .filter(|&l| {
                self.link_active[l]
                    && self.members[l].iter().any(|&f| self.flow_active[f as usize])
            })
            .map(|l| self.link_ids[l])
            .collect()
    }

    /// True when no active links remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted_links.iter().all(|&l| {
            let l = l as usize;
            !self.link_active[l]
                || !self.members[l].iter().any(|&f| self.flow_active[f as usize])
        })
    }

    /// Freeze the current adjacency for a peeling sub-round.
    #[must_use]
    pub fn snapshot(&self) -> AdjacencySnapshot {
        AdjacencySnapshot {
            links: self.link_active.clone(),
            flows: self.flow_active.clone(),
        }
    }

    fn connected_indices(&self, l: usize, links: &BitSlice, flows: &BitSlice) -> BTreeSet<u32> {
        let mut connected = BTreeSet::new();
        for &f in &self.members[l] {
            if !flows[f as usize] {
                continue;
            }
            for &k in &self.routes[f as usize] {
                if links[k as usize] {
                    connected.insert(k);
                }
            }
        }
        connected
    }

    /// Links sharing at least one flow with `link` in the current state
    /// (the link itself included), ascending.
    pub fn connected_links(&self, link: LinkId) -> Result<Vec<LinkId>> {
        let l = self.active_link(link)?;
        Ok(self
            .connected_indices(l, &self.link_active, &self.flow_active)
            .into_iter()
            .map(|k| self.link_ids[k as usize])
            .collect())
    }

    /// Same as [`Self::connected_links`], evaluated against a snapshot.
    pub fn connected_links_in(
        &self,
        link: LinkId,
        snapshot: &AdjacencySnapshot,
    ) -> Result<Vec<LinkId>> {
        let l = self.known_link(link)?;
        if !snapshot.links[l] {
            return Err(Error::unknown_link(link));
        }
        Ok(self
            .connected_indices(l, &snapshot.links, &snapshot.flows)
            .into_iter()
            .map(|k| self.link_ids[k as usize])
            .collect())
    }

    /// Whether two links share at least one flow. With `pristine` the
    /// original adjacency is consulted, which precedence-edge computation
    /// requires after either link has been peeled.
    pub fn has_shared_flows(&self, a: LinkId, b: LinkId, pristine: bool) -> Result<bool> {
        let (la, lb) = if pristine {
            (self.known_link(a)?, self.known_link(b)?)
        } else {
            (self.active_link(a)?, self.active_link(b)?)
        };
        let shared = self.members[la].iter().any(|&f| {
            (pristine || self.flow_active[f as usize]) && self.members[lb].contains(&f)
        });
        Ok(shared)
    }

    /// Additively adjust the link's capacity. The delta is typically
    /// negative: consumption a removed flow made on a still-active link.
    pub fn update_capacity(&mut self, link: LinkId, delta: Rate) -> Result<()> {
        let l = self.active_link(link)?;
        self.capacity[l] += delta;
        Ok(())
    }

    /// Remove `link` and every flow currently traversing it, charging each
    /// flow's committed rate against the other links on its route, then
    /// purge links left with drained capacity or no flows.
    ///
    /// A capacity that goes negative beyond tolerance is logged as a
    /// warning and healed by the purge. Flows whose entire route has been
    /// purged are deactivated and reported; they carry a zero rate.
    pub fn remove_link_and_flows(
        &mut self,
        link: LinkId,
        flow_rates: &[(FlowId, Rate)],
    ) -> Result<RemovalOutcome> {
        let l = self.active_link(link)?;

        let removed_flows: SmallVec<[u32; 8]> = self.members[l]
            .iter()
            .copied()
            .filter(|&f| self.flow_active[f as usize])
            .collect();

        for &f in &removed_flows {
            let id = self.flow_ids[f as usize];
            let rate = flow_rates
                .iter()
                .find(|(flow, _)| *flow == id)
                .map(|&(_, r)| r)
                .ok_or_else(|| Error::internal(format!("no committed rate for flow {id}")))?;
            for &k in &self.routes[f as usize] {
                if self.link_active[k as usize] {
                    self.capacity[k as usize] -= rate;
                }
            }
        }

        for &f in &removed_flows {
            self.flow_active.set(f as usize, false);
        }
        self.link_active.set(l, false);

        let mut outcome = RemovalOutcome::default();
        for i in 0..self.sorted_links.len() {
            let k = self.sorted_links[i] as usize;
            if !self.link_active[k] {
                continue;
            }
            let cap = self.capacity[k];
            if cap < 0.0 && !approx_zero(cap) {
                warn!(link = self.link_ids[k], capacity = cap, "link capacity went negative");
            }
            let emptied = !self.members[k].iter().any(|&f| self.flow_active[f as usize]);
            if cap <= RATE_TOLERANCE || emptied {
                self.link_active.set(k, false);
                outcome.purged_links.push(self.link_ids[k]);
            }
        }

        for f in 0..self.flow_ids.len() {
            if self.flow_active[f]
                && !self.routes[f].iter().any(|&k| self.link_active[k as usize])
            {
                self.flow_active.set(f, false);
                outcome.orphaned_flows.push(self.flow_ids[f]);
            }
        }

        Ok(outcome)
    }
}
