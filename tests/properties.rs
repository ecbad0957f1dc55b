// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;

use p2panda_dag::test_utils::{assert_topological_order, random_dag_edges, setup_logging};
use p2panda_dag::{Dag, DagError, Edge, TieBreak, topological_sort};

const SEEDS: u64 = 64;

#[test]
fn random_acyclic_graphs_sort_in_edge_order() {
    setup_logging();

    for seed in 0..SEEDS {
        let edges = random_dag_edges(seed, 24, 60);
        let dag = Dag::from_edges(edges.clone()).unwrap();

        let endpoints: BTreeSet<u32> = edges
            .iter()
            .flat_map(|edge| [*edge.source(), *edge.target()])
            .collect();
        let nodes: BTreeSet<u32> = dag.nodes().iter().copied().collect();
        assert_eq!(nodes, endpoints);

        for tie_break in [TieBreak::Insertion, TieBreak::Ordered] {
            let sorted = dag.topological_sort_by(tie_break);
            assert_topological_order(&dag, &sorted);

            // Layers flatten into the very same order.
            let layered: Vec<&u32> = dag.layers_by(tie_break).into_iter().flatten().collect();
            assert_eq!(layered, sorted);
        }

        let owned: Vec<u32> = dag.topological_sort().into_iter().copied().collect();
        assert_eq!(topological_sort(edges).unwrap(), owned);
    }
}

#[test]
fn sources_and_sinks_match_degrees() {
    for seed in 0..SEEDS {
        let edges = random_dag_edges(seed, 16, 20);
        let dag = Dag::from_nodes_and_edges([100, 101], edges).unwrap();

        for node in dag.nodes() {
            let in_degree = dag.in_degree(node).unwrap();
            let out_degree = dag.out_degree(node).unwrap();

            assert_eq!(dag.sources().contains(&node), in_degree == 0);
            assert_eq!(dag.sinks().contains(&node), out_degree == 0);
            assert_eq!(dag.predecessors(node).is_empty(), in_degree == 0);
            assert_eq!(dag.successors(node).is_empty(), out_degree == 0);
        }

        // Isolated nodes are both.
        assert!(dag.sources().contains(&&100));
        assert!(dag.sinks().contains(&&101));
    }
}

#[test]
fn closing_any_path_is_rejected() {
    for seed in 0..SEEDS {
        let edges = random_dag_edges(seed, 12, 18);
        let dag = Dag::from_edges(edges.clone()).unwrap();

        let source = *dag.sources()[0];
        let Some(&target) = dag
            .nodes()
            .iter()
            .find(|node| **node != source && dag.has_path(&source, node))
        else {
            continue;
        };

        let mut cyclic = edges;
        cyclic.push(Edge::untyped(target, source));

        let Err(DagError::CycleDetected { path }) = Dag::from_edges(cyclic) else {
            panic!("back edge {} -> {} was not detected", target, source);
        };
        assert!(path.len() >= 3);
        assert_eq!(path.first(), path.last());
    }
}

#[test]
fn every_layer_is_deeper_than_its_predecessors() {
    for seed in 0..SEEDS {
        let dag = Dag::from_edges(random_dag_edges(seed, 20, 40)).unwrap();

        let mut depth = std::collections::BTreeMap::new();
        for (index, layer) in dag.layers().into_iter().enumerate() {
            for node in layer {
                depth.insert(*node, index);
            }
        }

        for edge in dag.edges() {
            assert!(depth[edge.source()] < depth[edge.target()]);
        }

        // A node below the first layer has a predecessor in the layer right above.
        for node in dag.nodes() {
            if depth[node] > 0 {
                assert!(
                    dag.predecessors(node)
                        .iter()
                        .any(|predecessor| depth[*predecessor] + 1 == depth[node])
                );
            }
        }
    }
}
