// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable directed acyclic graphs (DAGs) over arbitrary ordered node values.
//!
//! A [`Dag`] is built from a list of nodes, a list of directed edges or both. Construction
//! walks the graph depth-first and rejects any input containing a directed cycle with
//! [`DagError::CycleDetected`], so every `Dag` value is guaranteed to be acyclic. Once built,
//! the graph can't be changed anymore.
//!
//! Built graphs offer their sources (nodes without incoming edges), sinks (nodes without
//! outgoing edges), adjacency lookups and a topological ordering of all nodes computed with
//! Kahn's algorithm.
//!
//! Edges can carry a payload of any type. Edges without payload use `()`, see [`UntypedEdge`].
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use p2panda_dag::{Dag, DagError};
//!
//! //  /--[B]--\
//! // [A]------>[C]
//! //  \--[D]-->[E]
//! let dag = Dag::from_untyped_edges([
//!     ('a', 'b'),
//!     ('a', 'c'),
//!     ('a', 'd'),
//!     ('b', 'c'),
//!     ('d', 'e'),
//! ])?;
//!
//! assert_eq!(dag.sources(), [&'a']);
//! assert_eq!(dag.sinks(), [&'c', &'e']);
//! assert_eq!(dag.topological_sort(), [&'a', &'b', &'d', &'c', &'e']);
//!
//! // Edges pointing back to where they came from are rejected.
//! let result = Dag::from_untyped_edges([('a', 'b'), ('b', 'a')]);
//! assert_eq!(
//!     result,
//!     Err(DagError::CycleDetected {
//!         path: vec!['a', 'b', 'a']
//!     })
//! );
//! # Ok(())
//! # }
//! ```
mod builder;
pub mod edge;
pub mod error;
mod graph;
mod sort;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
mod views;

pub use edge::{Edge, UntypedEdge};
pub use error::DagError;
pub use graph::Dag;
pub use sort::{TieBreak, topological_sort};
