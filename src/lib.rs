//! # lexfair
//!
//! Lexicographic max-min fair rate allocation over capacitated networks,
//! with the bottleneck precedence graph (BPG) as a byproduct: which link
//! constrains which flows, at what level, and which earlier bottleneck it
//! inherited pressure from.
//!
//! ## Modules
//!
//! - [`network`] - Input schema and the mutable network state store
//! - [`allocator`] - Max-min water-filling over a single link
//! - [`bpg`] - The peeling engine and the solved precedence graph
//! - [`graph`] - `petgraph` view of a solution
//! - [`fairness`] - Jain's fairness index against solved rates
//! - [`generators`] - Synthetic networks for tests and benchmarks
//!
//! ## Quick Start
//!
//! ```rust
//! use lexfair::network::NetworkSpec;
//! use lexfair::bpg;
//!
//! // Two flows share one 10 Mbit/s link and split it evenly.
//! let spec = NetworkSpec::from_routes(
//!     [(1, vec![1]), (2, vec![1])],
//!     [(1, 10.0)],
//! );
//! let solution = bpg::solve(&spec).unwrap();
//! assert_eq!(solution.levels, 1);
//! assert_eq!(solution.flow_rates[&1], 5.0);
//! assert_eq!(solution.flow_rates[&2], 5.0);
//! ```
//!
//! A cascade: the tight link peels first and its advertised rate is
//! charged against the links its flows also cross.
//!
//! ```rust
//! use lexfair::network::NetworkSpec;
//! use lexfair::bpg;
//!
//! let spec = NetworkSpec::from_routes(
//!     [(1, vec![1, 2]), (2, vec![1]), (3, vec![2])],
//!     [(1, 10.0), (2, 20.0)],
//! );
//! let solution = bpg::solve(&spec).unwrap();
//! assert_eq!(solution.levels, 2);
//! assert_eq!(solution.flow_rates[&3], 15.0);
//! assert_eq!(solution.direct_edges[&1], vec![(1, 2)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod allocator;
pub mod bpg;
pub mod fairness;
pub mod generators;
pub mod graph;
pub mod network;

mod error;
mod types;

pub use error::{Error, Result};
pub use types::*;

/// Prelude for common imports
pub mod prelude {
    pub use crate::bpg::{compute_bpg, solve, solve_batch, BpgSolution};
    pub use crate::graph::{BpgNode, EdgeKind};
    pub use crate::network::{Network, NetworkSpec};
    pub use crate::Error;
    pub use crate::Result;
}
