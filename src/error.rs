// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for building and sorting directed acyclic graphs.
use std::fmt::{self, Debug};

use thiserror::Error;

/// Error types for building and sorting a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DagError<N: Debug> {
    /// Given nodes and edges contain a directed cycle.
    ///
    /// `path` lists the nodes of one detected cycle in edge order, starting and ending with the
    /// same node. A self-loop on `a` is reported as `[a, a]`.
    #[error("cycle detected: {}", DisplayPath(.path))]
    CycleDetected {
        /// Nodes forming the cycle.
        path: Vec<N>,
    },
}

impl<N: Debug> DagError<N> {
    /// Returns the nodes of the detected cycle.
    pub fn cycle(&self) -> &[N] {
        match self {
            DagError::CycleDetected { path } => path,
        }
    }
}

struct DisplayPath<'a, N>(&'a [N]);

impl<N: Debug> fmt::Display for DisplayPath<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, node) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{:?}", node)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DagError;

    #[test]
    fn renders_cycle_path() {
        let error = DagError::CycleDetected {
            path: vec!['a', 'b', 'a'],
        };
        assert_eq!(error.to_string(), "cycle detected: 'a' -> 'b' -> 'a'");
        assert_eq!(error.cycle(), ['a', 'b', 'a']);
    }
}
