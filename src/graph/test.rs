use std::str::FromStr;
use strum::VariantArray;

use crate::graph::{
    Edge, FloorOrdering, Graph, GraphBuilder, GraphError, MapSnapshot, Node, NodeType,
};
use crate::route::CostModel;

fn node(id: &str, kind: NodeType, floor: &str, x: f64, y: f64) -> Node {
    Node {
        id: id.into(),
        long_name: format!("{id} (long)"),
        short_name: id.to_string(),
        kind,
        floor: floor.into(),
        x,
        y,
    }
}

fn two_floor_snapshot() -> MapSnapshot {
    MapSnapshot {
        nodes: vec![
            node("AHALL00101", NodeType::Hall, "1", 0.0, 0.0),
            node("ADEPT00101", NodeType::Department, "1", 40.0, 0.0),
            node("AELEV00101", NodeType::Elevator, "1", 40.0, 30.0),
            node("AELEV00102", NodeType::Elevator, "2", 40.0, 30.0),
            node("ACONF00102", NodeType::Conference, "2", 0.0, 30.0),
        ],
        edges: vec![
            Edge::new("AHALL00101", "ADEPT00101"),
            Edge::new("ADEPT00101", "AELEV00101"),
            Edge::new("AELEV00101", "AELEV00102"),
            Edge::new("AELEV00102", "ACONF00102"),
        ],
    }
}

#[test_log::test]
fn builds_two_floor_map() {
    let graph = Graph::from_snapshot(&two_floor_snapshot()).expect("snapshot should build");

    assert_eq!(graph.size(), 5);
    assert_eq!(graph.edge_count(), 4);

    let info = graph.get(&"ADEPT00101".into()).expect("known id");
    assert_eq!(info.kind, NodeType::Department);
    assert_eq!(info.floor, "1".into());
}

#[test]
fn duplicate_edges_collapse_to_one() {
    let mut snapshot = two_floor_snapshot();
    snapshot.edges.push(Edge::new("AHALL00101", "ADEPT00101"));
    // Reversed orientation of an undirected edge is a duplicate too.
    snapshot.edges.push(Edge::new("ADEPT00101", "AHALL00101"));

    let graph = Graph::from_snapshot(&snapshot).expect("duplicates are not an error");
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn missing_endpoint_is_a_build_error() {
    let mut snapshot = two_floor_snapshot();
    snapshot.edges.push(Edge::new("AHALL00101", "GHOST"));

    let err = Graph::from_snapshot(&snapshot).expect_err("dangling endpoint must not build");
    assert_eq!(
        err,
        GraphError::MissingEndpoint {
            start: "AHALL00101".into(),
            end: "GHOST".into(),
            missing: "GHOST".into(),
        }
    );
}

#[test]
fn duplicate_node_id_is_a_build_error() {
    let mut snapshot = two_floor_snapshot();
    snapshot
        .nodes
        .push(node("AHALL00101", NodeType::Hall, "2", 9.0, 9.0));

    let err = Graph::from_snapshot(&snapshot).expect_err("duplicate id must not build");
    assert_eq!(err, GraphError::DuplicateNode("AHALL00101".into()));
}

#[test]
fn unknown_floor_is_a_build_error() {
    let mut snapshot = two_floor_snapshot();
    snapshot
        .nodes
        .push(node("XDEPT00109", NodeType::Department, "9", 0.0, 0.0));

    let err = Graph::from_snapshot(&snapshot).expect_err("unlisted floor must not build");
    assert_eq!(
        err,
        GraphError::UnknownFloor {
            node: "XDEPT00109".into(),
            floor: "9".into(),
        }
    );
}

#[test]
fn coincident_nodes_derive_zero_weight_and_fail() {
    let mut snapshot = two_floor_snapshot();
    snapshot
        .nodes
        .push(node("XHALL00101", NodeType::Hall, "1", 0.0, 0.0));
    snapshot.edges.push(Edge::new("AHALL00101", "XHALL00101"));

    assert!(matches!(
        Graph::from_snapshot(&snapshot),
        Err(GraphError::NonPositiveWeight { weight, .. }) if weight == 0.0
    ));
}

#[test]
fn self_loop_is_a_build_error() {
    let mut snapshot = two_floor_snapshot();
    snapshot.edges.push(Edge::new("AHALL00101", "AHALL00101"));

    assert!(matches!(
        Graph::from_snapshot(&snapshot),
        Err(GraphError::NonPositiveWeight { .. })
    ));
}

#[test]
fn isolated_nodes_are_valid() {
    let mut snapshot = two_floor_snapshot();
    snapshot
        .nodes
        .push(node("XRETL00101", NodeType::Retail, "1", 500.0, 500.0));

    let graph = Graph::from_snapshot(&snapshot).expect("isolated nodes are fine");
    assert_eq!(graph.size(), 6);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn floor_ordering_measures_by_rank_not_label() {
    let ordering = FloorOrdering::default();

    // String comparison would place "L2" above "2"; the table knows
    // better.
    assert_eq!(ordering.gap(&"L2".into(), &"2".into()), Some(3));
    assert_eq!(ordering.gap(&"L2".into(), &"L1".into()), Some(1));
    assert_eq!(ordering.gap(&"1".into(), &"1".into()), Some(0));
    assert_eq!(ordering.gap(&"1".into(), &"PH".into()), None);

    assert_eq!(ordering.rank(&"L2".into()), Some(0));
    assert!(!ordering.contains(&"PH".into()));
}

#[test]
fn custom_floor_ordering_is_honoured() {
    let ordering = FloorOrdering::new(["B", "G", "M", "1"]);
    let model = CostModel::new(100.0);

    let snapshot = MapSnapshot {
        nodes: vec![
            node("XELEV000B1", NodeType::Elevator, "B", 0.0, 0.0),
            node("XELEV00011", NodeType::Elevator, "1", 0.0, 0.0),
        ],
        edges: vec![Edge::new("XELEV000B1", "XELEV00011")],
    };

    let graph = GraphBuilder::new(ordering, model)
        .build(&snapshot)
        .expect("custom ordering should build");

    // B to 1 spans three boundaries at 100 apiece.
    let a = graph.resolve(&"XELEV000B1".into()).expect("interned");
    let b = graph.resolve(&"XELEV00011".into()).expect("interned");
    assert_eq!(graph.graph.edge_weight(a, b), Some(&300.0));

    let (_, distance) = graph
        .nearest_connector(&"B".into(), [3.0, 4.0])
        .expect("floor B has an exit");
    assert_eq!(distance, 5.0);
}

#[test]
fn connector_index_tracks_cross_floor_edges_not_node_types() {
    // A lab wired straight to another floor still counts as a way out;
    // an elevator with no cross-floor edge does not.
    let snapshot = MapSnapshot {
        nodes: vec![
            node("XLABS00101", NodeType::Lab, "1", 10.0, 0.0),
            node("XLABS00102", NodeType::Lab, "2", 10.0, 0.0),
            node("XELEV00101", NodeType::Elevator, "1", 90.0, 0.0),
        ],
        edges: vec![Edge::new("XLABS00101", "XLABS00102")],
    };

    let graph = Graph::from_snapshot(&snapshot).expect("snapshot should build");

    let (exit, _) = graph
        .nearest_connector(&"1".into(), [80.0, 0.0])
        .expect("floor 1 can be left");
    assert_eq!(exit.id, "XLABS00101".into());

    assert!(graph.nearest_connector(&"2".into(), [0.0, 0.0]).is_some());
}

#[test]
fn node_type_wire_names_round_trip() {
    for kind in NodeType::VARIANTS {
        assert_eq!(NodeType::from_str(&kind.to_string()), Ok(*kind));
    }

    assert_eq!(NodeType::from_str("ELEV"), Ok(NodeType::Elevator));
    assert!(NodeType::from_str("LIFT").is_err());

    assert!(NodeType::Stairs.is_connector());
    assert!(!NodeType::Conference.is_connector());
    assert!(!NodeType::Hall.is_destination());
    assert!(NodeType::Restroom.is_destination());
}
