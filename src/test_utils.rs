// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers for testing code which builds and sorts graphs.
use std::collections::BTreeMap;
use std::fmt::Debug;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::edge::Edge;
use crate::graph::Dag;

/// Installs a `tracing` subscriber printing to stdout when `RUST_LOG` is set.
pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}

/// Panics if `order` is not a permutation of the graph's nodes in which every edge points
/// forward.
pub fn assert_topological_order<N, P>(dag: &Dag<N, P>, order: &[&N])
where
    N: Ord + Clone + Debug,
{
    assert_eq!(
        order.len(),
        dag.len(),
        "every node gets sorted exactly once"
    );

    let mut positions = BTreeMap::new();
    for (position, node) in order.iter().enumerate() {
        assert!(dag.contains(node), "{:?} is not part of the graph", node);
        assert!(
            positions.insert(*node, position).is_none(),
            "{:?} got sorted twice",
            node
        );
    }

    for edge in dag.edges() {
        let (source, target) = edge.key();
        assert!(
            positions[source] < positions[target],
            "{:?} sorted after {:?}",
            source,
            target
        );
    }
}

/// Generates `edge_count` random edges between `node_count` nodes which never form a cycle.
///
/// Nodes are shuffled before picking edges so the generated graphs are not trivially sorted
/// already. The same seed always yields the same edges.
pub fn random_dag_edges(seed: u64, node_count: u32, edge_count: usize) -> Vec<Edge<u32>> {
    assert!(node_count >= 2, "acyclic edges need at least two nodes");

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut labels: Vec<u32> = (0..node_count).collect();
    labels.shuffle(&mut rng);

    (0..edge_count)
        .map(|_| {
            let source = rng.random_range(0..node_count - 1);
            let target = rng.random_range(source + 1..node_count);
            Edge::untyped(labels[source as usize], labels[target as usize])
        })
        .collect()
}
