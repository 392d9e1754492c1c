//! End-to-end tests for grid-world construction.
//!
//! Covers the occupancy-map scan, edge symmetry, diagonal wiring and
//! weighting, action-label randomization, and the hand-built two-room world.

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use empowerment_rs::{
    Action, Coord, GridGraph, GridWorldBuilder, OccupancyMap, generate_grid_world, layouts,
    shuffle_action_labels, two_rooms,
};

/// Every directed edge must have a companion edge in the reverse direction
/// carrying the opposite action label.
fn assert_symmetric(graph: &GridGraph) {
    for edge in graph.edges() {
        let companion = graph
            .out_edges(edge.dst)
            .iter()
            .find(|e| e.dst == edge.src && e.action == edge.action.opposite());
        assert!(
            companion.is_some(),
            "edge {} -> {} ({}) has no reverse companion",
            edge.src,
            edge.dst,
            edge.action,
        );
    }
}

// ============================================================================
// 1. Scan order and node identity
// ============================================================================

#[test]
fn test_staircase_nodes_in_scan_order() {
    let graph = generate_grid_world(&layouts::simple()).unwrap();

    let expected: Vec<Coord> = [(0, 0), (0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4)]
        .into_iter()
        .map(Coord::from)
        .collect();
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn test_construction_is_deterministic() {
    let a = generate_grid_world(&layouts::unequal_rooms()).unwrap();
    let b = generate_grid_world(&layouts::unequal_rooms()).unwrap();

    assert_eq!(a.nodes().collect::<Vec<_>>(), b.nodes().collect::<Vec<_>>());
    assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
}

// ============================================================================
// 2. Edge symmetry and self-loop freedom
// ============================================================================

#[test]
fn test_generated_worlds_are_symmetric() {
    for name in ["line", "simple", "unequal_rooms_small", "unequal_rooms", "six_rooms"] {
        let map = layouts::by_name(name).unwrap();
        let graph = generate_grid_world(&map).unwrap();
        assert_symmetric(&graph);

        let diag = GridWorldBuilder::new().diagonals(true).build(&map).unwrap();
        assert_symmetric(&diag);
    }
}

#[test]
fn test_no_self_loops() {
    let graph = GridWorldBuilder::new()
        .diagonals(true)
        .build(&layouts::six_rooms())
        .unwrap();
    assert!(graph.edges().all(|e| e.src != e.dst));
}

// ============================================================================
// 3. Action vocabulary
// ============================================================================

#[test]
fn test_action_vocabulary() {
    let map = layouts::line();

    let cardinal = generate_grid_world(&map).unwrap();
    assert_eq!(cardinal.actions().len(), 5);
    assert!(cardinal.actions().contains(&Action::Stay));
    assert!(!cardinal.actions().contains(&Action::NorthEast));

    let diagonal = GridWorldBuilder::new().diagonals(true).build(&map).unwrap();
    assert_eq!(diagonal.actions().len(), 9);
    assert!(diagonal.actions().contains(&Action::NorthEast));
}

// ============================================================================
// 4. Diagonal wiring and distance weighting
// ============================================================================

#[test]
fn test_diagonal_block_wiring() {
    // A 2x2 block: each node gets two cardinal neighbors and one diagonal.
    let map = OccupancyMap::parse(&["11", "11"]).unwrap();
    let graph = GridWorldBuilder::new().diagonals(true).build(&map).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 12);
    for node in graph.nodes() {
        assert_eq!(graph.out_edges(*node).len(), 3);
        assert_eq!(
            graph.out_edges(*node).iter().filter(|e| e.action.is_diagonal()).count(),
            1,
        );
    }
}

#[test]
fn test_diagonal_edges_carry_sqrt2_under_euclidean() {
    let map = OccupancyMap::parse(&["11", "11"]).unwrap();
    let graph = GridWorldBuilder::new().diagonals(true).build(&map).unwrap();

    for edge in graph.edges() {
        let expected = if edge.action.is_diagonal() { std::f64::consts::SQRT_2 } else { 1.0 };
        assert_eq!(edge.distance, expected);
    }
}

#[test]
fn test_diagonal_edges_unit_weight_without_euclidean() {
    let map = OccupancyMap::parse(&["11", "11"]).unwrap();
    let graph = GridWorldBuilder::new()
        .diagonals(true)
        .euclidean_distance(false)
        .build(&map)
        .unwrap();

    assert!(graph.edges().all(|e| e.distance == 1.0));
}

// ============================================================================
// 5. Action-label randomization
// ============================================================================

#[test]
fn test_shuffle_preserves_topology() {
    let map = layouts::unequal_rooms_small();
    let mut shuffled = GridWorldBuilder::new().diagonals(true).build(&map).unwrap();
    let original = shuffled.clone();

    let mut rng = StdRng::seed_from_u64(7);
    shuffle_action_labels(&mut shuffled, &mut rng);

    // Same node set, same (src, dst, distance) sequence.
    assert_eq!(
        original.nodes().collect::<Vec<_>>(),
        shuffled.nodes().collect::<Vec<_>>(),
    );
    let endpoints = |g: &GridGraph| {
        g.edges().map(|e| (e.src, e.dst, e.distance.to_bits())).collect::<Vec<_>>()
    };
    assert_eq!(endpoints(&original), endpoints(&shuffled));

    // Per node, the outgoing label multiset is only permuted.
    for node in original.nodes() {
        let mut before: Vec<Action> =
            original.out_edges(*node).iter().map(|e| e.action).collect();
        let mut after: Vec<Action> =
            shuffled.out_edges(*node).iter().map(|e| e.action).collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }
}

#[test]
fn test_shuffle_is_reproducible_with_fixed_seed() {
    let map = layouts::unequal_rooms_small();

    let mut a = generate_grid_world(&map).unwrap();
    let mut b = generate_grid_world(&map).unwrap();
    shuffle_action_labels(&mut a, &mut StdRng::seed_from_u64(42));
    shuffle_action_labels(&mut b, &mut StdRng::seed_from_u64(42));

    assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
}

// ============================================================================
// 6. Malformed input
// ============================================================================

#[test]
fn test_ragged_rows_fail_fast() {
    let err = OccupancyMap::from_rows(vec![vec![1, 1, 1], vec![1, 1]]).unwrap_err();
    assert!(matches!(
        err,
        empowerment_rs::Error::MalformedMap { row: 1, got: 2, expected: 3 },
    ));
}

// ============================================================================
// 7. Two-room world
// ============================================================================

#[test]
fn test_two_rooms_shape() {
    let graph = two_rooms().unwrap();

    // 9x5 cells minus the four missing dividing-column cells.
    assert_eq!(graph.node_count(), 41);
    assert_symmetric(&graph);

    // The doorway connects east-west only.
    let door = Coord::new(4, 2);
    let mut actions: Vec<Action> =
        graph.out_edges(door).iter().map(|e| e.action).collect();
    actions.sort();
    assert_eq!(actions, vec![Action::East, Action::West]);

    // No edges into the missing dividing-column cells.
    for y in [0, 1, 3, 4] {
        assert!(!graph.contains(Coord::new(4, y)));
    }
}

#[test]
fn test_two_rooms_connects_both_rooms() {
    use empowerment_rs::{OriginConvention, node_empowerment};

    let graph = two_rooms().unwrap();

    // Every other cell is within six hops of the doorway, so from there the
    // whole 41-node world is reachable.
    let door = Coord::new(4, 2);
    let bits = node_empowerment(&graph, door, 6, OriginConvention::Inclusive).unwrap();
    assert_eq!(bits, 40f64.log2());
}
