use std::collections::HashSet;

use proptest::prelude::*;
use tricky_circles::action::parse_path;
use tricky_circles::{solve, survey, Action, Sequence, MAX_LEN, MIN_LEN};

fn arb_sequence() -> impl Strategy<Value = Sequence> {
    (MIN_LEN..=MAX_LEN)
        .prop_flat_map(|len| Just((0..len as u8).collect::<Vec<_>>()).prop_shuffle())
        .prop_map(|symbols| Sequence::new(&symbols).unwrap())
}

/// Every state a solve could visit is reachable by some mix of actions, so
/// walking the whole reachable component covers them.
fn reachable_from(start: &Sequence) -> HashSet<Sequence> {
    let mut seen = HashSet::from([*start]);
    let mut stack = vec![*start];
    while let Some(state) = stack.pop() {
        for (_, next) in state.successors() {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen
}

#[test_log::test]
fn test_end_to_end_four_circles() {
    let start = Sequence::new(&[1, 0, 3, 2]).unwrap();
    let solution = solve(&start).unwrap();

    assert_eq!(solution.distance, 2);
    assert_eq!(solution.actions, parse_path("ab").unwrap());
    assert_eq!(
        start.replay(&solution.actions).last(),
        Some(&start.target())
    );
}

#[test]
fn test_every_arrangement_is_solvable() {
    let expected_diameters = [6, 8, 10, 14, 19];
    for (len, diameter) in (MIN_LEN..=MAX_LEN).zip(expected_diameters) {
        let survey = survey(len).unwrap();
        assert!(survey.is_complete(), "length {len}");
        assert_eq!(survey.diameter(), diameter, "length {len}");
        assert_eq!(
            survey.layer_sizes().iter().sum::<usize>(),
            survey.permutations()
        );
    }
}

#[test]
fn test_solver_matches_survey_exhaustively() {
    for len in MIN_LEN..=6 {
        let survey = survey(len).unwrap();
        for (seq, &distance) in survey.iter() {
            let solution = solve(seq).unwrap();
            assert_eq!(solution.distance, distance, "{seq}");
            assert_eq!(solution.actions.len(), distance, "{seq}");
        }
    }
}

#[test]
fn test_states_keep_their_symbols() {
    let start = Sequence::new(&[4, 6, 0, 2, 7, 1, 3, 5]).unwrap();
    let mut expected = start.symbols().to_vec();
    expected.sort_unstable();

    let states = reachable_from(&start);
    assert_eq!(states.len(), 40320);
    for state in states {
        let mut symbols = state.symbols().to_vec();
        symbols.sort_unstable();
        assert_eq!(symbols, expected);
    }
}

#[test]
fn test_first_shortest_path_is_returned() {
    // Both "ab" and "ba" sort this row; `a` is expanded first.
    let start = Sequence::new(&[1, 0, 3, 2]).unwrap();
    let via_b = start.replay(&[Action::ShiftLastTwo, Action::ShiftFirstTwo]);
    assert_eq!(via_b.last(), Some(&start.target()));
    assert_eq!(solve(&start).unwrap().actions[0], Action::ShiftFirstTwo);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solution_sorts_the_row(start in arb_sequence()) {
        let solution = solve(&start).unwrap();
        prop_assert_eq!(solution.actions.len(), solution.distance);

        let end = start.replay(&solution.actions).last().copied().unwrap_or(start);
        prop_assert_eq!(end, start.target());
    }

    #[test]
    fn solution_is_deterministic(start in arb_sequence()) {
        let first = solve(&start).unwrap();
        let second = solve(&start).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn solution_is_minimal(start in arb_sequence()) {
        let survey = survey(start.len()).unwrap();
        prop_assert_eq!(Some(solve(&start).unwrap().distance), survey.distance(&start));
    }

    #[test]
    fn no_action_is_a_no_op(start in arb_sequence()) {
        for action in Action::ALL {
            let next = action.apply(&start);
            prop_assert_ne!(next, start);
            prop_assert_eq!(action.undo(&next), start);
        }
    }
}
