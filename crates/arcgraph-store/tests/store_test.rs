use arcgraph_store::{Edge, Error, GraphStore, Node};

fn ids<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Vec<&'a str> {
    edges.into_iter().map(|e| e.id.as_str()).collect()
}

fn store_with(vertices: &[&str]) -> GraphStore {
    let mut g = GraphStore::new();
    for v in vertices {
        assert!(g.add_vertex(Node::new(*v)));
    }
    g
}

#[test]
fn add_vertex_initializes_empty_adjacency() {
    let g = store_with(&["a"]);

    assert!(g.contains_vertex("a"));
    assert_eq!(g.vertex("a").map(|n| n.id.as_str()), Some("a"));
    assert!(g.in_edges("a").is_empty());
    assert!(g.out_edges("a").is_empty());
    assert_eq!(g.degree("a"), 0);
}

#[test]
fn re_adding_a_vertex_is_a_no_op() {
    let mut g = GraphStore::new();
    assert!(g.add_vertex(Node::new("a").at(1.0, 2.0)));
    assert!(!g.add_vertex(Node::new("a").at(9.0, 9.0)));

    assert_eq!(g.vertex_count(), 1);
    let a = g.vertex("a").unwrap();
    assert_eq!((a.x, a.y), (1.0, 2.0));
}

#[test]
fn re_adding_an_edge_is_a_no_op() {
    let mut g = store_with(&["a", "b", "c"]);
    assert_eq!(g.add_edge(Edge::new("e", "KNOWS"), "a", "b"), Ok(true));
    assert_eq!(g.add_edge(Edge::new("e", "LIKES"), "b", "c"), Ok(false));

    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge("e").map(|e| e.edge_type.as_str()), Some("KNOWS"));
    assert_eq!(g.source("e").map(|n| n.id.as_str()), Some("a"));
    assert_eq!(g.dest("e").map(|n| n.id.as_str()), Some("b"));
    assert!(g.out_edges("b").is_empty());
    assert!(g.in_edges("c").is_empty());
}

#[test]
fn add_edge_rejects_missing_endpoints_without_mutation() {
    let mut g = store_with(&["a"]);

    assert_eq!(
        g.add_edge(Edge::new("e", "KNOWS"), "a", "ghost"),
        Err(Error::InvalidReference {
            edge_id: "e".to_string(),
            vertex_id: "ghost".to_string(),
        })
    );
    assert_eq!(
        g.add_edge(Edge::new("e", "KNOWS"), "ghost", "a"),
        Err(Error::InvalidReference {
            edge_id: "e".to_string(),
            vertex_id: "ghost".to_string(),
        })
    );
    assert!(!g.contains_edge("e"));
    assert_eq!(g.degree("a"), 0);
}

#[test]
fn duplicate_edge_id_wins_over_missing_endpoint() {
    let mut g = store_with(&["a", "b"]);
    g.add_edge(Edge::new("e", "KNOWS"), "a", "b").unwrap();

    assert_eq!(g.add_edge(Edge::new("e", "KNOWS"), "a", "ghost"), Ok(false));
}

#[test]
fn edges_respect_direction() {
    let mut g = store_with(&["a", "b"]);
    g.add_edge(Edge::new("ab", "KNOWS"), "a", "b").unwrap();

    assert_eq!(ids(g.out_edges("a")), vec!["ab"]);
    assert_eq!(ids(g.in_edges("b")), vec!["ab"]);
    assert!(g.in_edges("a").is_empty());
    assert!(g.out_edges("b").is_empty());
}

#[test]
fn parallel_edges_are_kept() {
    let mut g = store_with(&["a", "b"]);
    g.add_edge(Edge::new("e1", "KNOWS"), "a", "b").unwrap();
    g.add_edge(Edge::new("e2", "KNOWS"), "a", "b").unwrap();

    assert_eq!(ids(g.out_edges("a")), vec!["e1", "e2"]);
    assert_eq!(g.degree("b"), 2);
}

#[test]
fn neighbors_are_deduplicated() {
    let mut g = store_with(&["a", "b", "c"]);
    g.add_edge(Edge::new("ab1", "KNOWS"), "a", "b").unwrap();
    g.add_edge(Edge::new("ab2", "KNOWS"), "a", "b").unwrap();
    g.add_edge(Edge::new("ba", "KNOWS"), "b", "a").unwrap();
    g.add_edge(Edge::new("ca", "KNOWS"), "c", "a").unwrap();

    let mut neighbors: Vec<&str> = g.neighbors("a").iter().map(|n| n.id.as_str()).collect();
    neighbors.sort();
    assert_eq!(neighbors, vec!["b", "c"]);
}

#[test]
fn unknown_vertex_reads_degrade_to_empty() {
    let mut g = GraphStore::new();

    assert!(g.vertex("nope").is_none());
    assert!(g.edge("nope").is_none());
    assert!(g.source("nope").is_none());
    assert!(g.endpoints("nope").is_none());
    assert!(g.in_edges("nope").is_empty());
    assert!(g.out_edges("nope").is_empty());
    assert!(g.neighbors("nope").is_empty());
    assert_eq!(g.degree("nope"), 0);
    assert!(!g.remove_edge("nope"));
    assert!(!g.remove_vertex("nope"));
}

#[test]
fn remove_edge_detaches_both_sides() {
    let mut g = store_with(&["a", "b"]);
    g.add_edge(Edge::new("ab", "KNOWS"), "a", "b").unwrap();

    assert!(g.remove_edge("ab"));
    assert!(!g.remove_edge("ab"));
    assert!(!g.contains_edge("ab"));
    assert!(g.source("ab").is_none());
    assert!(g.out_edges("a").is_empty());
    assert!(g.in_edges("b").is_empty());
    assert_eq!(g.vertex_count(), 2);
}

#[test]
fn remove_vertex_drains_incident_edges() {
    let mut g = store_with(&["a", "b", "c", "d"]);
    g.add_edge(Edge::new("ba", "KNOWS"), "b", "a").unwrap();
    g.add_edge(Edge::new("ca", "KNOWS"), "c", "a").unwrap();
    g.add_edge(Edge::new("ad", "KNOWS"), "a", "d").unwrap();
    g.add_edge(Edge::new("bc", "KNOWS"), "b", "c").unwrap();

    assert!(g.remove_vertex("a"));

    assert!(!g.contains_vertex("a"));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(ids(g.edges()), vec!["bc"]);
    assert_eq!(ids(g.out_edges("b")), vec!["bc"]);
    assert!(g.out_edges("c").is_empty());
    assert!(g.in_edges("d").is_empty());
    assert!(g.neighbors("d").is_empty());
}

#[test]
fn remove_vertex_with_self_loop() {
    let mut g = store_with(&["a", "b"]);
    g.add_edge(Edge::new("aa", "SELF"), "a", "a").unwrap();
    g.add_edge(Edge::new("ab", "KNOWS"), "a", "b").unwrap();

    assert_eq!(g.degree("a"), 3);
    assert_eq!(ids(g.incident_edges("a")), vec!["aa", "ab"]);

    assert!(g.remove_vertex("a"));
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.degree("b"), 0);
}

#[test]
fn add_then_remove_vertex_restores_counts() {
    let mut g = store_with(&["a", "b"]);
    g.add_edge(Edge::new("ab", "KNOWS"), "a", "b").unwrap();

    assert!(g.add_vertex(Node::new("tmp")));
    assert!(g.remove_vertex("tmp"));

    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn freed_slots_do_not_leak_old_adjacency() {
    let mut g = store_with(&["a", "b"]);
    g.add_edge(Edge::new("ab", "KNOWS"), "a", "b").unwrap();
    g.remove_vertex("b");

    // Reuses the slots freed above.
    g.add_vertex(Node::new("c"));
    g.add_edge(Edge::new("ca", "KNOWS"), "c", "a").unwrap();

    assert_eq!(ids(g.in_edges("a")), vec!["ca"]);
    assert!(g.out_edges("a").is_empty());
    assert!(g.in_edges("c").is_empty());
    assert_eq!(
        g.endpoints("ca")
            .map(|(s, d)| (s.id.as_str(), d.id.as_str())),
        Some(("c", "a"))
    );
}

#[test]
fn set_position_and_size_update_the_vertex() {
    let mut g = store_with(&["a"]);

    assert!(g.set_position("a", 10.0, -4.0));
    assert!(g.set_size("a", 30.0, -1.0));
    assert!(!g.set_position("nope", 0.0, 0.0));

    let a = g.vertex("a").unwrap();
    assert_eq!((a.x, a.y, a.width, a.height), (10.0, -4.0, 30.0, 0.0));
}

#[test]
fn vertices_lists_every_member() {
    let mut g = store_with(&["a", "b", "c"]);
    g.remove_vertex("b");

    let mut all: Vec<&str> = g.vertices().map(|n| n.id.as_str()).collect();
    all.sort();
    assert_eq!(all, vec!["a", "c"]);

    g.clear();
    assert!(g.is_empty());
    assert_eq!(g.vertices().count(), 0);
}

#[test]
fn removing_a_high_degree_hub_keeps_spoke_adjacency_intact() {
    const SPOKES: usize = 50_000;

    let mut g = store_with(&["hub", "x"]);
    for i in 0..SPOKES {
        let s = format!("s{i}");
        g.add_vertex(Node::new(s.clone()));
        g.add_edge(Edge::new(format!("out{i}"), "OUT"), "hub", &s).unwrap();
        g.add_edge(Edge::new(format!("in{i}"), "IN"), &s, "hub").unwrap();
    }
    g.add_edge(Edge::new("x1", "REL"), "x", "s7").unwrap();
    g.add_edge(Edge::new("x2", "REL"), "s7", "x").unwrap();
    g.add_edge(Edge::new("loop", "SELF"), "hub", "hub").unwrap();

    assert!(g.remove_vertex("hub"));

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.vertex_count(), SPOKES + 1);
    assert_eq!(ids(g.in_edges("s7")), vec!["x1"]);
    assert_eq!(ids(g.out_edges("s7")), vec!["x2"]);
    assert_eq!(g.degree("s0"), 0);
    assert_eq!(g.degree(&format!("s{}", SPOKES - 1)), 0);
}
