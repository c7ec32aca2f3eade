//! Graph view of a solved bottleneck precedence graph
//!
//! Downstream topology tooling wants the BPG as an actual graph rather
//! than level-keyed maps; [`BpgSolution::to_graph`] builds a [`petgraph`]
//! digraph with one node per peeled link and one edge per recorded
//! precedence, tagged direct or indirect.

use crate::bpg::BpgSolution;
use crate::{Level, LinkId, Rate};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A BPG vertex: a link together with the level and rate it peeled at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BpgNode {
    /// The peeled link
    pub link: LinkId,
    /// Level the link was peeled at
    pub level: Level,
    /// Advertised rate at removal
    pub advertised_rate: Rate,
}

/// Kind of precedence between two bottleneck links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// The links share at least one flow
    Direct,
    /// The links share no flow but a third link's flows span both
    Indirect,
}

impl BpgSolution {
    /// Build a directed graph of the precedence structure. Edges point
    /// from the earlier (tighter) bottleneck to the later one.
    #[must_use]
    pub fn to_graph(&self) -> DiGraph<BpgNode, EdgeKind> {
        let mut graph = DiGraph::new();
        let mut nodes: HashMap<LinkId, NodeIndex> = HashMap::new();
        for (&level, links) in &self.vertices {
            for (&link, &advertised_rate) in links {
                let index = graph.add_node(BpgNode { link, level, advertised_rate });
                nodes.insert(link, index);
            }
        }
        let tagged = [
            (&self.direct_edges, EdgeKind::Direct),
            (&self.indirect_edges, EdgeKind::Indirect),
        ];
        for (edges, kind) in tagged {
            for pairs in edges.values() {
                for &(from, to) in pairs {
                    if let (Some(&a), Some(&b)) = (nodes.get(&from), nodes.get(&to)) {
                        graph.add_edge(a, b, kind);
                    }
                }
            }
        }
        graph
    }
}
