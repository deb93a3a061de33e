//! A* results checked against an exhaustive breadth-first distance table.

use eight_puzzle::{manhattan_distance, solve, successors, Move, PuzzleError, State, GOAL};
use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::sync::OnceLock;

/// Exact move counts to the goal for every state reachable from it.
fn distances() -> &'static HashMap<State, u32> {
    static TABLE: OnceLock<HashMap<State, u32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = HashMap::from([(GOAL, 0)]);
        let mut queue = VecDeque::from([GOAL]);
        while let Some(state) = queue.pop_front() {
            let d = table[&state];
            for next in successors(&state) {
                table.entry(next).or_insert_with(|| {
                    queue.push_back(next);
                    d + 1
                });
            }
        }
        table
    })
}

/// A start state reached by walking the blank randomly away from the goal.
fn walked_state() -> impl Strategy<Value = State> {
    prop::collection::vec(0..Move::ALL.len(), 0..40).prop_map(|walk| {
        walk.into_iter().fold(GOAL, |state, i| {
            state.apply_move(Move::ALL[i]).unwrap_or(state)
        })
    })
}

#[test]
fn reachable_half_of_the_state_space() {
    let table = distances();
    assert_eq!(table.len(), 181_440);
    assert_eq!(table.values().copied().max(), Some(31));
    assert!(table.keys().all(State::is_solvable));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn path_is_optimal_and_contiguous(start in walked_state()) {
        let solution = solve(&start).unwrap();
        let steps = solution.steps();

        prop_assert_eq!(steps[0].state, start);
        prop_assert_eq!(steps[steps.len() - 1].state, GOAL);
        prop_assert_eq!(solution.moves(), distances()[&start]);
        for (i, step) in steps.iter().enumerate() {
            prop_assert_eq!(step.g, i as u32);
            prop_assert_eq!(step.h, manhattan_distance(&step.state));
        }
        prop_assert_eq!(solution.directions().len(), steps.len() - 1);
    }

    #[test]
    fn heuristic_never_overestimates(start in walked_state()) {
        prop_assert!(manhattan_distance(&start) <= distances()[&start]);
    }

    #[test]
    fn successors_are_sorted_single_moves(start in walked_state()) {
        let next = successors(&start);
        prop_assert!((2..=4).contains(&next.len()));
        prop_assert!(next.windows(2).all(|w| w[0] < w[1]));
        for state in &next {
            prop_assert!(start.move_between(state).is_some());
            prop_assert!(State::new(state.tiles()).is_ok());
        }
    }

    #[test]
    fn solving_is_deterministic(start in walked_state()) {
        prop_assert_eq!(solve(&start).unwrap(), solve(&start).unwrap());
    }
}

#[test]
fn swapped_tiles_are_unreachable() {
    let start: State = "[1, 2, 3, 4, 5, 6, 8, 7, 0]".parse().unwrap();
    assert!(!start.is_solvable());
    assert!(!distances().contains_key(&start));
    assert!(matches!(
        solve(&start),
        Err(PuzzleError::SearchExhausted { .. })
    ));
}
