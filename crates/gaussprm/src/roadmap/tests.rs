use super::*;
use proptest::prelude::*;

fn line_roadmap(search: NeighborSearch) -> Roadmap {
    let mut rm = Roadmap::new(search);
    for (k, x) in [0.0, 1.0, 2.0, 3.0, 4.0].into_iter().enumerate() {
        assert!(rm.add_node(NodeId::Sample(k as u32 + 1), Configuration::xy(x, 0.0)));
    }
    rm
}

#[test]
fn duplicate_ids_and_bad_edges_are_rejected() {
    let mut rm = line_roadmap(NeighborSearch::BruteForce);
    assert!(!rm.add_node(NodeId::Sample(1), Configuration::xy(9.0, 9.0)));
    assert_eq!(rm.node_count(), 5);
    assert!(rm.add_edge(NodeId::Sample(1), NodeId::Sample(2)));
    assert!(!rm.add_edge(NodeId::Sample(2), NodeId::Sample(1)));
    assert!(!rm.add_edge(NodeId::Sample(3), NodeId::Sample(3)));
    assert!(!rm.add_edge(NodeId::Sample(1), NodeId::Goal));
    assert_eq!(rm.edge_count(), 1);
    assert!(rm.has_edge(NodeId::Sample(2), NodeId::Sample(1)));
}

#[test]
fn components_follow_edges() {
    let mut rm = line_roadmap(NeighborSearch::BruteForce);
    assert_eq!(rm.connected_components(), 5);
    rm.add_edge(NodeId::Sample(1), NodeId::Sample(2));
    rm.add_edge(NodeId::Sample(2), NodeId::Sample(3));
    assert!(rm.same_component(NodeId::Sample(1), NodeId::Sample(3)));
    assert!(!rm.same_component(NodeId::Sample(1), NodeId::Sample(4)));
    assert!(rm.same_component(NodeId::Sample(5), NodeId::Sample(5)));
    assert!(!rm.same_component(NodeId::Start, NodeId::Sample(1)));
    assert_eq!(rm.connected_components(), 3);
}

#[test]
fn shortest_path_counts_edges() {
    let mut rm = line_roadmap(NeighborSearch::BruteForce);
    for k in 1..5 {
        rm.add_edge(NodeId::Sample(k), NodeId::Sample(k + 1));
    }
    // Shortcut 1-5 makes the two-edge route via 5 shorter than the chain.
    rm.add_edge(NodeId::Sample(1), NodeId::Sample(5));
    let path = rm.shortest_path(NodeId::Sample(1), NodeId::Sample(4)).unwrap();
    assert_eq!(
        path,
        vec![NodeId::Sample(1), NodeId::Sample(5), NodeId::Sample(4)]
    );
    assert!(rm.shortest_path(NodeId::Sample(1), NodeId::Goal).is_none());
}

#[test]
fn neighbors_are_strictly_inside_and_sorted() {
    let rm = line_roadmap(NeighborSearch::BruteForce);
    let hits = rm.find_neighbors(&Configuration::xy(2.2, 0.0), 2.0);
    let ids: Vec<_> = hits.iter().map(|n| n.id).collect();
    // x = 0.0 is 2.2 away and excluded.
    assert_eq!(
        ids,
        vec![
            NodeId::Sample(3),
            NodeId::Sample(4),
            NodeId::Sample(2),
            NodeId::Sample(5)
        ]
    );
    // Radius boundary is exclusive.
    let hits = rm.find_neighbors(&Configuration::xy(0.0, 0.0), 1.0);
    assert_eq!(hits.len(), 1);
}

#[test]
fn ties_keep_insertion_order() {
    for search in [NeighborSearch::BruteForce, NeighborSearch::RTree] {
        let mut rm = Roadmap::new(search);
        rm.add_node(NodeId::Sample(1), Configuration::xy(1.0, 0.0));
        rm.add_node(NodeId::Sample(2), Configuration::xy(-1.0, 0.0));
        rm.add_node(NodeId::Sample(3), Configuration::xy(0.0, 1.0));
        let ids: Vec<_> = rm
            .find_neighbors(&Configuration::xy(0.0, 0.0), 5.0)
            .into_iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(
            ids,
            vec![NodeId::Sample(1), NodeId::Sample(2), NodeId::Sample(3)]
        );
    }
}

#[test]
fn clear_resets_everything() {
    let mut rm = line_roadmap(NeighborSearch::RTree);
    rm.add_edge(NodeId::Sample(1), NodeId::Sample(2));
    rm.clear();
    assert!(rm.is_empty());
    assert_eq!(rm.edge_count(), 0);
    assert!(rm
        .find_neighbors(&Configuration::xy(0.0, 0.0), 10.0)
        .is_empty());
    assert!(rm.add_node(NodeId::Sample(1), Configuration::xy(0.0, 0.0)));
}

#[test]
fn non_planar_roadmap_falls_back_to_scan() {
    let mut rm = Roadmap::new(NeighborSearch::RTree);
    rm.add_node(NodeId::Sample(1), Configuration::new(vec![0.0, 0.0, 0.0]));
    rm.add_node(NodeId::Sample(2), Configuration::new(vec![0.0, 0.0, 3.0]));
    let hits = rm.find_neighbors(&Configuration::new(vec![0.0, 0.0, 1.0]), 2.5);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id, NodeId::Sample(1));
}

#[test]
fn node_id_display() {
    assert_eq!(NodeId::Sample(12).to_string(), "12");
    assert_eq!(NodeId::Start.to_string(), "start");
    assert_eq!(NodeId::Goal.to_string(), "goal");
}

proptest! {
    #[test]
    fn neighbor_strategies_agree(
        pts in prop::collection::vec((0.0f64..10.0, 0.0f64..10.0), 0..60),
        qx in 0.0f64..10.0,
        qy in 0.0f64..10.0,
        radius in 0.1f64..6.0,
    ) {
        let mut brute = Roadmap::new(NeighborSearch::BruteForce);
        let mut tree = Roadmap::new(NeighborSearch::RTree);
        for (k, &(x, y)) in pts.iter().enumerate() {
            brute.add_node(NodeId::Sample(k as u32), Configuration::xy(x, y));
            tree.add_node(NodeId::Sample(k as u32), Configuration::xy(x, y));
        }
        let q = Configuration::xy(qx, qy);
        let a = brute.find_neighbors(&q, radius);
        let b = tree.find_neighbors(&q, radius);
        prop_assert!(a.windows(2).all(|w| w[0].distance <= w[1].distance));
        prop_assert!(a.iter().all(|n| n.distance < radius));
        let ids_a: Vec<_> = a.iter().map(|n| n.id).collect();
        let ids_b: Vec<_> = b.iter().map(|n| n.id).collect();
        prop_assert_eq!(ids_a, ids_b);
    }
}
