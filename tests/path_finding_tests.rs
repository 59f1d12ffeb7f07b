use dijkstra_paths::algorithm::traits::ShortestPathAlgorithm;
use dijkstra_paths::graph::{Graph, GraphConfig, MatrixGraph};
use dijkstra_paths::{Dijkstra, Error, ShortestPathEngine, ShortestPathResult, StaleEntryPolicy};
use ordered_float::OrderedFloat;

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;
const D: usize = 3;
const E: usize = 4;
const F: usize = 5;
const G: usize = 6;
const H: usize = 7;

fn builtin_engine() -> ShortestPathEngine<u64> {
    ShortestPathEngine::from_config(&GraphConfig::builtin()).unwrap()
}

// Sum of edge weights along the predecessor chain must equal the distance
fn assert_chains_consistent(graph: &MatrixGraph<u64>, result: &ShortestPathResult<u64>) {
    for v in 0..graph.vertex_count() {
        match result.distances[v] {
            Some(dist) => {
                let path = result.path_to(v).expect("reachable vertex should have a path");
                assert_eq!(path[0], result.source);
                let total: u64 = path
                    .windows(2)
                    .map(|w| graph.get_edge_weight(w[0], w[1]).expect("path uses a missing edge"))
                    .sum();
                assert_eq!(total, dist, "chain weight mismatch for vertex {}", v);
            }
            None => {
                assert_eq!(result.predecessors[v], None);
                assert!(result.path_to(v).is_none());
            }
        }
    }
}

#[test]
fn test_builtin_graph_from_a() {
    let engine = builtin_engine();
    let result = engine.compute_shortest_paths(A).unwrap();

    let expected = [0, 1, 3, 4, 5, 6, 5, 3];
    for (v, &d) in expected.iter().enumerate() {
        assert_eq!(result.distances[v], Some(d), "distance to vertex {}", v);
    }

    assert_eq!(
        result.predecessors,
        vec![None, Some(A), Some(B), Some(C), Some(D), Some(E), Some(B), Some(B)]
    );
    assert_chains_consistent(engine.graph(), &result);
}

#[test]
fn test_builtin_graph_paths() {
    let engine = builtin_engine();
    let result = engine.compute_shortest_paths(A).unwrap();

    assert_eq!(result.path_to(F), Some(vec![A, B, C, D, E, F]));
    assert_eq!(result.path_to(H), Some(vec![A, B, H]));
    assert_eq!(result.path_to(A), Some(vec![A]));
    assert_eq!(result.chain_from(G), vec![G, B, A]);
}

#[test]
fn test_builtin_graph_stats() {
    let result = builtin_engine().compute_shortest_paths(A).unwrap();

    assert_eq!(result.stats.pushes, 11);
    assert_eq!(result.stats.pops, 11);
    assert_eq!(result.stats.stale_pops, 3);
    assert_eq!(result.stats.relaxations, 10);
}

#[test]
fn test_every_source_has_zero_distance_and_no_predecessor() {
    let engine = builtin_engine();
    for source in 0..engine.vertex_count() {
        let result = engine.compute_shortest_paths(source).unwrap();
        assert_eq!(result.distances[source], Some(0));
        assert_eq!(result.predecessors[source], None);
        assert_chains_consistent(engine.graph(), &result);
    }
}

#[test]
fn test_invalid_source_is_rejected() {
    let engine = builtin_engine();
    match engine.compute_shortest_paths(8) {
        Err(Error::InvalidSource(8, 8)) => {}
        other => panic!("expected InvalidSource, got {:?}", other),
    }
}

#[test]
fn test_repeated_and_interleaved_queries_agree() {
    let engine = builtin_engine();

    let first_a = engine.compute_shortest_paths(A).unwrap();
    let first_g = engine.compute_shortest_paths(G).unwrap();
    let second_a = engine.compute_shortest_paths(A).unwrap();

    let g_then = builtin_engine().compute_shortest_paths(G).unwrap();

    assert_eq!(first_a.distances, second_a.distances);
    assert_eq!(first_a.predecessors, second_a.predecessors);
    assert_eq!(first_g.distances, g_then.distances);
    assert_eq!(first_g.predecessors, g_then.predecessors);
}

#[test]
fn test_rescan_policy_matches_skip() {
    let config = GraphConfig::builtin();
    let skip = ShortestPathEngine::from_config(&config).unwrap();
    let rescan = ShortestPathEngine::from_config(&config)
        .unwrap()
        .with_algorithm(Dijkstra::new().with_stale_policy(StaleEntryPolicy::Rescan));

    for source in 0..skip.vertex_count() {
        let a = skip.compute_shortest_paths(source).unwrap();
        let b = rescan.compute_shortest_paths(source).unwrap();
        assert_eq!(a.distances, b.distances);
        assert_eq!(a.predecessors, b.predecessors);
        assert_eq!(a.stats.pushes, b.stats.pushes);
        assert_eq!(a.stats.stale_pops, b.stats.stale_pops);
    }
}

#[test]
fn test_single_node_graph() {
    let graph: MatrixGraph<u64> = MatrixGraph::from_edges(1, Vec::new()).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(0)]);
    assert_eq!(result.predecessors, vec![None]);
}

#[test]
fn test_disconnected_component_is_unreachable() {
    // 0 -> 1 -> 2 and a separate 3 <-> 4 component with cheap edges
    let graph = MatrixGraph::from_edges(
        5,
        vec![(0, 1, 7u64), (1, 2, 100), (3, 4, 0), (4, 3, 1)],
    )
    .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(0), Some(7), Some(107), None, None]);
    assert_eq!(result.predecessors[3], None);
    assert_eq!(result.predecessors[4], None);
    assert_eq!(result.chain_from(4), vec![4]);
}

#[test]
fn test_directed_edges_are_one_way() {
    let graph = MatrixGraph::from_edges(2, vec![(0, 1, 3u32)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 1).unwrap();

    assert_eq!(result.distances, vec![None, Some(0)]);
}

#[test]
fn test_zero_weight_cycle_keeps_source_root() {
    let graph = MatrixGraph::from_edges(3, vec![(0, 1, 0u64), (1, 2, 0), (2, 0, 0)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(0), Some(0), Some(0)]);
    assert_eq!(result.predecessors, vec![None, Some(0), Some(1)]);
}

#[test]
fn test_float_weights() {
    let graph = MatrixGraph::from_edges(
        3,
        vec![
            (0, 1, OrderedFloat(1.5)),
            (1, 2, OrderedFloat(2.25)),
            (0, 2, OrderedFloat(4.0)),
        ],
    )
    .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[2], Some(OrderedFloat(3.75)));
    assert_eq!(result.predecessors[2], Some(1));
}

#[test]
fn test_distance_overflow_is_reported() {
    // Vertex 2 can only be reached with a distance of 300, which u8 cannot hold
    let graph = MatrixGraph::from_edges(3, vec![(0, 1, 200u8), (1, 2, 100)]).unwrap();
    match Dijkstra::new().compute_shortest_paths(&graph, 0) {
        Err(Error::DistanceOverflow(1, 2)) => {}
        other => panic!("expected DistanceOverflow, got {:?}", other),
    }
}

#[test]
fn test_overflowing_edge_ignored_when_shorter_path_exists() {
    let graph = MatrixGraph::from_edges(3, vec![(0, 1, 200u8), (1, 2, 100), (0, 2, 1)]).unwrap();

    for policy in [StaleEntryPolicy::Skip, StaleEntryPolicy::Rescan] {
        let result = Dijkstra::new()
            .with_stale_policy(policy)
            .compute_shortest_paths(&graph, 0)
            .unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(200), Some(1)]);
        assert_eq!(result.predecessors, vec![None, Some(0), Some(0)]);
    }
}

#[test]
fn test_overflowing_chain_from_config() {
    let max = i64::MAX;
    let config = GraphConfig::from_json_str(&format!(
        r#"{{
            "node_count": 4,
            "edges": [
                {{ "from": 0, "to": 1, "weight": {max} }},
                {{ "from": 1, "to": 2, "weight": {max} }},
                {{ "from": 2, "to": 3, "weight": {max} }},
                {{ "from": 0, "to": 3, "weight": 1 }}
            ]
        }}"#
    ))
    .unwrap();

    let result = ShortestPathEngine::from_config(&config)
        .unwrap()
        .compute_shortest_paths(0)
        .unwrap();
    let max = max as u64;
    assert_eq!(result.distances, vec![Some(0), Some(max), Some(2 * max), Some(1)]);
    assert_eq!(result.predecessors[3], Some(0));
}

#[test]
fn test_get_path_uses_existing_edges() {
    let engine = builtin_engine();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(engine.graph(), D).unwrap();

    for target in 0..engine.vertex_count() {
        let path = <Dijkstra as ShortestPathAlgorithm<u64, MatrixGraph<u64>>>::get_path(&dijkstra, &result, target)
            .expect("builtin graph is connected");
        assert_eq!(path[0], D);
        assert_eq!(*path.last().unwrap(), target);
        for w in path.windows(2) {
            assert!(engine.graph().has_edge(w[0], w[1]));
        }
    }
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = builtin_engine();
    let sequential: Vec<_> = (0..engine.vertex_count())
        .map(|s| engine.compute_shortest_paths(s).unwrap().distances)
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..engine.vertex_count())
            .map(|s| {
                let engine = &engine;
                scope.spawn(move || engine.compute_shortest_paths(s).unwrap().distances)
            })
            .collect();

        for (s, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), sequential[s]);
        }
    });
}
