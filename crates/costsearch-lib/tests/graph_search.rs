use costsearch_lib::{
    solve, solve_fn, AdjacencyGraph, CostLedger, Entry, SearchOptions, StateGraph, TieBreak,
    UniformCostSearch,
};

#[test]
fn two_node_graph_without_goal_edge_is_exhausted() {
    let mut graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
    graph.add_edge("start", "dead-end", 3);
    assert_eq!(graph.node_count(), 2);

    let error = solve_fn(
        "start",
        |state| *state == "island",
        |state| graph.successors(state),
    )
    .unwrap_err();
    assert!(error.is_exhausted());
    assert!(format!("{error}").contains("after expanding 2 entries"));
}

#[test]
fn ledger_discards_superseded_entry() {
    let mut ledger: CostLedger<&str, u32> = CostLedger::new();
    assert!(ledger.offer("x", 10));
    assert!(ledger.offer("x", 3));
    assert!(!ledger.offer("x", 3));

    let superseded = Entry::new("x", 10);
    let current = Entry::new("x", 3);
    assert!(ledger.settle(&current));
    assert!(!ledger.settle(&superseded));
    assert_eq!(ledger.best(&"x"), Some(3));
    assert_eq!(ledger.stale_discarded(), 1);
}

#[test]
fn signed_costs_are_supported() {
    let mut graph: AdjacencyGraph<u8, i64> = AdjacencyGraph::new();
    graph.add_undirected_edge(0, 1, 4);
    graph.add_undirected_edge(1, 2, 4);
    graph.add_undirected_edge(0, 2, 9);
    graph.mark_goal(2);

    let solution = solve(0, &graph).unwrap();
    assert_eq!(solution.cost, 8);
    assert_eq!(solution.path, vec![0, 1, 2]);
}

#[test]
fn saturating_costs_do_not_wrap() {
    let mut graph: AdjacencyGraph<u8, u8> = AdjacencyGraph::new();
    graph.add_edge(0, 1, 200);
    graph.add_edge(1, 2, 200);
    graph.mark_goal(2);

    let solution = solve(0, &graph).unwrap();
    assert_eq!(solution.cost, u8::MAX);
}

/// Amphipod-style puzzle state: sort a short sequence by adjacent swaps where
/// moving the larger token costs its value.
#[test]
fn puzzle_state_search_with_closures() {
    let initial = vec![3u8, 1, 2];
    let solution = solve_fn(
        initial,
        |state: &Vec<u8>| state.windows(2).all(|w| w[0] <= w[1]),
        |state: &Vec<u8>| {
            (0..state.len() - 1)
                .map(|i| {
                    let mut next = state.clone();
                    next.swap(i, i + 1);
                    let cost = u32::from(state[i].max(state[i + 1]));
                    (next, cost)
                })
                .collect::<Vec<_>>()
        },
    )
    .expect("sorted order reachable");

    // Two swaps, each moving the 3.
    assert_eq!(solution.cost, 6);
    assert_eq!(solution.state, vec![1, 2, 3]);
    assert_eq!(solution.hop_count(), 2);
}

#[test]
fn lifo_prefers_latest_equal_cost_entry() {
    let mut graph: AdjacencyGraph<u8, u32> = AdjacencyGraph::new();
    for middle in 1..=3 {
        graph.add_edge(0, middle, 1);
        graph.add_edge(middle, 9, 1);
    }
    graph.mark_goal(9);

    let search = |tie_break| {
        UniformCostSearch::with_options(SearchOptions::default().with_tie_break(tie_break))
            .solve(0, &graph)
            .unwrap()
            .path
    };
    assert_eq!(search(TieBreak::Fifo), vec![0, 1, 9]);
    assert_eq!(search(TieBreak::Lifo), vec![0, 3, 9]);
}
