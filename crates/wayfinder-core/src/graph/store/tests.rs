use super::*;

/// Five vertices, seven edges with weights 1..=7
fn build_house() -> (Graph, Vec<VertexId>) {
    let mut g = Graph::new();
    let v: Vec<VertexId> = (0..5).map(|_| g.add_vertex()).collect();

    assert!(g.add_edge(v[0], v[1], 1));
    assert!(g.add_edge(v[0], v[2], 2));
    assert!(g.add_edge(v[0], v[3], 3));
    assert!(g.add_edge(v[1], v[2], 4));
    assert!(g.add_edge(v[2], v[3], 5));
    assert!(g.add_edge(v[1], v[4], 6));
    assert!(g.add_edge(v[3], v[4], 7));

    (g, v)
}

#[test]
fn test_new_graph_is_empty() {
    let g = Graph::new();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.vertices().count(), 0);
}

#[test]
fn test_vertex_ids_increase_from_zero() {
    let mut g = Graph::new();
    let ids: Vec<u64> = (0..4).map(|_| g.add_vertex().value()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn test_removed_ids_are_not_reused() {
    let mut g = Graph::new();
    let v0 = g.add_vertex();
    let v1 = g.add_vertex();
    assert!(g.remove_vertex(v1));

    let v2 = g.add_vertex();
    assert_eq!(v2.value(), 2);
    assert!(!g.contains_vertex(v1));
    assert!(g.contains_vertex(v0));
}

#[test]
fn test_build_queries() {
    let (g, v) = build_house();

    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edge_count(), 7);

    let expected = [
        (0, 1, 1),
        (0, 2, 2),
        (0, 3, 3),
        (1, 2, 4),
        (2, 3, 5),
        (1, 4, 6),
        (3, 4, 7),
    ];
    for (a, b, weight) in expected {
        assert!(g.has_edge(v[a], v[b]));
        assert!(g.has_edge(v[b], v[a]));
        assert_eq!(g.edge_weight(v[a], v[b]), Some(weight));
        assert_eq!(g.edge_weight(v[b], v[a]), Some(weight));
    }

    let degrees: Vec<usize> = v.iter().map(|&id| g.degree(id).unwrap()).collect();
    assert_eq!(degrees, vec![3, 3, 3, 3, 2]);
}

#[test]
fn test_remove_vertex_drops_incident_edges() {
    let mut g = Graph::new();
    let v0 = g.add_vertex();
    let v1 = g.add_vertex();
    let v2 = g.add_vertex();

    assert!(g.add_edge(v0, v1, 1));
    assert!(g.add_edge(v0, v2, 2));
    assert!(g.add_edge(v1, v2, 3));
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.degree(v0), Some(2));

    assert!(g.remove_vertex(v2));

    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(v0, v1));
    assert!(!g.has_edge(v0, v2));
    assert!(!g.has_edge(v1, v2));
    assert_eq!(g.edge_weight(v0, v1), Some(1));
    assert_eq!(g.edge_weight(v0, v2), None);
    assert_eq!(g.edge_weight(v1, v2), None);
    assert_eq!(g.degree(v0), Some(1));
    assert_eq!(g.degree(v1), Some(1));
    assert_eq!(g.degree(v2), None);
}

#[test]
fn test_remove_missing_vertex() {
    let mut g = Graph::new();
    assert!(!g.remove_vertex(VertexId::new(0)));
}

#[test]
fn test_add_edge_rejections() {
    let mut g = Graph::new();
    let v0 = g.add_vertex();
    let v1 = g.add_vertex();
    let ghost = VertexId::new(99);

    assert!(!g.add_edge(v0, v0, 1), "self-loop accepted");
    assert!(!g.add_edge(v0, v1, 0), "zero weight accepted");
    assert!(!g.add_edge(v0, ghost, 1), "missing endpoint accepted");
    assert!(!g.add_edge(ghost, v0, 1), "missing endpoint accepted");
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.degree(v0), Some(0));
}

#[test]
fn test_add_existing_edge_is_idempotent() {
    let (mut g, v) = build_house();

    assert!(g.add_edge(v[0], v[1], 1));
    assert!(g.add_edge(v[1], v[0], 42));

    assert_eq!(g.edge_count(), 7);
    assert_eq!(g.degree(v[0]), Some(3));
    assert_eq!(g.degree(v[1]), Some(3));
    assert_eq!(g.edge_weight(v[0], v[1]), Some(1));
}

#[test]
fn test_remove_edge() {
    let (mut g, v) = build_house();

    assert!(g.remove_edge(v[4], v[1]));
    assert_eq!(g.edge_count(), 6);
    assert!(!g.has_edge(v[1], v[4]));
    assert_eq!(g.degree(v[1]), Some(2));
    assert_eq!(g.degree(v[4]), Some(1));

    assert!(!g.remove_edge(v[1], v[4]), "second removal should fail");
    assert!(!g.remove_edge(v[0], VertexId::new(50)));
    assert_eq!(g.edge_count(), 6);
}

#[test]
fn test_queries_on_missing_vertex() {
    let (g, v) = build_house();
    let ghost = VertexId::new(1000);

    assert!(!g.contains_vertex(ghost));
    assert_eq!(g.degree(ghost), None);
    assert!(!g.has_edge(ghost, v[0]));
    assert_eq!(g.edge_weight(v[0], ghost), None);
    assert_eq!(g.neighbors(ghost).count(), 0);

    let mut calls = 0;
    g.for_each_adjacent(ghost, |_, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_neighbors_in_insertion_order() {
    let (g, v) = build_house();

    let records: Vec<(u64, Weight)> = g
        .neighbors(v[0])
        .map(|record| (record.vertex.value(), record.weight))
        .collect();
    assert_eq!(records, vec![(1, 1), (2, 2), (3, 3)]);
    assert_eq!(g.neighbors(v[0]).len(), 3);

    let mut seen = Vec::new();
    g.for_each_adjacent(v[4], |neighbor, weight| seen.push((neighbor.value(), weight)));
    assert_eq!(seen, vec![(1, 6), (3, 7)]);
}

#[test]
fn test_edges_lists_each_edge_once() {
    let (g, _) = build_house();

    let mut edges: Vec<(u64, u64, Weight)> = g
        .edges()
        .map(|(a, b, w)| (a.value(), b.value(), w))
        .collect();
    edges.sort();

    assert_eq!(
        edges,
        vec![
            (0, 1, 1),
            (0, 2, 2),
            (0, 3, 3),
            (1, 2, 4),
            (1, 4, 6),
            (2, 3, 5),
            (3, 4, 7),
        ]
    );
}
