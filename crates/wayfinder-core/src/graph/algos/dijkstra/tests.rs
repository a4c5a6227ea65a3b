use super::*;
use crate::graph::Graph;
use crate::queue::QueueKind;

const KINDS: [QueueKind; 2] = [QueueKind::Linear, QueueKind::Heap];

fn graph_with(vertex_count: usize, edges: &[(usize, usize, u64)]) -> (Graph, Vec<VertexId>) {
    let mut g = Graph::new();
    let v: Vec<VertexId> = (0..vertex_count).map(|_| g.add_vertex()).collect();
    for &(a, b, weight) in edges {
        assert!(g.add_edge(v[a], v[b], weight));
    }
    (g, v)
}

fn pentagon() -> (Graph, Vec<VertexId>) {
    graph_with(
        5,
        &[(0, 1, 1), (1, 2, 1), (2, 4, 1), (0, 3, 1), (3, 4, 3)],
    )
}

fn search(g: &Graph, from: VertexId, to: VertexId, queue: QueueKind) -> Option<Path> {
    dijkstra_with(g, from, to, &SearchOptions { queue }).unwrap()
}

fn assert_walkable(g: &Graph, path: &Path) {
    let total: u64 = path
        .vertices()
        .windows(2)
        .map(|step| {
            g.edge_weight(step[0], step[1])
                .unwrap_or_else(|| panic!("{} -> {} is not an edge", step[0], step[1]))
        })
        .sum();
    assert_eq!(total, path.weight());
}

#[test]
fn test_lighter_first_ordering() {
    let light = FrontierItem {
        vertex: VertexId::new(1),
        predecessor: None,
        weight: 1,
    };
    let heavy = FrontierItem {
        vertex: VertexId::new(2),
        predecessor: None,
        weight: 2,
    };
    let also_light = FrontierItem {
        vertex: VertexId::new(3),
        predecessor: Some(VertexId::new(1)),
        weight: 1,
    };

    assert_eq!(lighter_first(&light, &heavy), Ordering::Greater);
    assert_eq!(lighter_first(&heavy, &light), Ordering::Less);
    assert_eq!(lighter_first(&light, &also_light), Ordering::Equal);
}

#[test]
fn test_pentagon_takes_the_longer_lighter_route() {
    let (g, v) = pentagon();
    for kind in KINDS {
        let path = search(&g, v[0], v[4], kind).expect("v4 is reachable");

        assert_eq!(path.length(), 3, "{kind}");
        assert_eq!(path.weight(), 3, "{kind}");
        assert_eq!(path.vertices(), &[v[0], v[1], v[2], v[4]], "{kind}");
        assert_walkable(&g, &path);
    }
}

#[test]
fn test_default_queue_matches_explicit_linear() {
    let (g, v) = pentagon();
    assert_eq!(
        dijkstra(&g, v[0], v[4]).unwrap(),
        search(&g, v[0], v[4], QueueKind::Linear)
    );
}

#[test]
fn test_house_graph() {
    let (g, v) = graph_with(
        5,
        &[
            (0, 1, 1),
            (0, 2, 2),
            (0, 3, 3),
            (1, 2, 4),
            (2, 3, 5),
            (1, 4, 6),
            (3, 4, 7),
        ],
    );
    for kind in KINDS {
        let path = search(&g, v[0], v[4], kind).unwrap();
        assert_eq!(path.vertices(), &[v[0], v[1], v[4]]);
        assert_eq!(path.weight(), 7);

        let path = search(&g, v[2], v[4], kind).unwrap();
        assert_eq!(path.weight(), 9);
        assert_walkable(&g, &path);
    }
}

#[test]
fn test_stale_duplicate_is_skipped() {
    // v1 is first pushed at weight 5 via v0, then at weight 2 via v2
    let (g, v) = graph_with(4, &[(0, 1, 5), (0, 2, 1), (2, 1, 1), (1, 3, 1)]);
    for kind in KINDS {
        let path = search(&g, v[0], v[3], kind).unwrap();
        assert_eq!(path.vertices(), &[v[0], v[2], v[1], v[3]], "{kind}");
        assert_eq!(path.weight(), 3, "{kind}");
    }
}

#[test]
fn test_source_equals_destination() {
    let (g, v) = pentagon();
    let path = dijkstra(&g, v[3], v[3]).unwrap().unwrap();
    assert_eq!(path.vertices(), &[v[3]]);
    assert_eq!(path.length(), 0);
    assert_eq!(path.weight(), 0);
}

#[test]
fn test_disconnected_destination_is_unreachable() {
    let (g, v) = graph_with(5, &[(0, 1, 1), (1, 2, 1), (3, 4, 1)]);
    for kind in KINDS {
        assert_eq!(search(&g, v[0], v[4], kind), None, "{kind}");
    }
}

#[test]
fn test_isolated_destination_is_unreachable() {
    let (mut g, v) = pentagon();
    assert!(g.remove_edge(v[2], v[4]));
    assert!(g.remove_edge(v[3], v[4]));
    assert_eq!(dijkstra(&g, v[0], v[4]).unwrap(), None);
}

#[test]
fn test_missing_endpoints_are_errors() {
    let (mut g, v) = pentagon();
    let ghost = VertexId::new(77);

    let err = dijkstra(&g, ghost, v[0]).unwrap_err();
    assert!(matches!(err, WayfinderError::VertexNotFound { id } if id == ghost));

    let err = dijkstra(&g, v[0], ghost).unwrap_err();
    assert!(matches!(err, WayfinderError::VertexNotFound { id } if id == ghost));

    assert!(g.remove_vertex(v[4]));
    assert!(dijkstra(&g, v[0], v[4]).is_err());
}

#[test]
fn test_route_around_removed_vertex() {
    let (mut g, v) = pentagon();
    assert!(g.remove_vertex(v[2]));

    let path = dijkstra(&g, v[0], v[4]).unwrap().unwrap();
    assert_eq!(path.vertices(), &[v[0], v[3], v[4]]);
    assert_eq!(path.weight(), 4);
}

#[test]
fn test_equal_weight_routes_pick_a_minimal_one() {
    // Two routes of weight 2 from v0 to v3
    let (g, v) = graph_with(4, &[(0, 1, 1), (1, 3, 1), (0, 2, 1), (2, 3, 1)]);
    for kind in KINDS {
        let path = search(&g, v[0], v[3], kind).unwrap();
        assert_eq!(path.weight(), 2);
        assert_eq!(path.length(), 2);
        assert_walkable(&g, &path);
    }
    assert_eq!(
        search(&g, v[0], v[3], QueueKind::Linear),
        search(&g, v[0], v[3], QueueKind::Heap)
    );
}
