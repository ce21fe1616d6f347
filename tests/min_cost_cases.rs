use mincost_core::{min_cost, EdgeList, UNREACHABLE};

#[test]
fn single_existing_edge() {
    assert_eq!(min_cost(2, &[1], &[2], &[3]), 3);
}

#[test]
fn no_edge_between_source_and_destination() {
    assert_eq!(min_cost(3, &[1], &[2], &[3]), 1);
}

#[test]
fn direct_edge_among_several() {
    assert_eq!(min_cost(4, &[1, 1, 1, 2], &[2, 3, 4, 1], &[3, 3, 3, 3]), 3);
}

#[test]
fn edge_in_opposite_direction() {
    assert_eq!(min_cost(2, &[2], &[1], &[3]), UNREACHABLE);
    assert_eq!(UNREACHABLE, i32::MAX);
}

#[test]
fn loop_edges() {
    assert_eq!(min_cost(4, &[1, 2, 3, 3, 4, 3, 4], &[2, 3, 4, 1, 1, 1, 2], &[3; 7]), 9);
}

#[test]
fn single_node() {
    assert_eq!(min_cost(1, &[], &[], &[]), 0);
}

#[test]
fn duplicate_edge_last_one_wins() {
    assert_eq!(min_cost(2, &[1, 1], &[2, 2], &[7, 4]), 4);
    assert_eq!(min_cost(2, &[1, 1], &[2, 2], &[4, 7]), 7);
}

#[test]
fn longest_path() {
    let nodes = 1000;
    let weight = 1_000_000;
    let edges = EdgeList::line_with_back_edges(nodes, weight);
    assert_eq!(edges.len(), nodes * (nodes - 1) / 2);
    assert_eq!(min_cost(nodes, &edges.from, &edges.to, &edges.weight), weight * (nodes as i32 - 1));
}

#[test]
fn repeated_calls_agree() {
    let edges = EdgeList::random(50, 800, 20, 11);
    let first = min_cost(50, &edges.from, &edges.to, &edges.weight);
    for _ in 0..3 {
        assert_eq!(min_cost(50, &edges.from, &edges.to, &edges.weight), first);
    }
}
