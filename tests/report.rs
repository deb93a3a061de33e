use eight_puzzle::report::{print_solve, print_succ};
use eight_puzzle::{PuzzleError, State};
use rstest::rstest;

fn succ_text(input: &str) -> String {
    let state: State = input.parse().unwrap();
    let mut out = Vec::new();
    print_succ(&state, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn solve_text(input: &str) -> String {
    let state: State = input.parse().unwrap();
    let mut out = Vec::new();
    print_solve(&state, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn successors_of_reversed_board() {
    assert_eq!(
        succ_text("8,7,6,5,4,3,2,1,0"),
        "[8, 7, 6, 5, 4, 0, 2, 1, 3] h=17\n\
         [8, 7, 6, 5, 4, 3, 2, 0, 1] h=17\n"
    );
}

#[test]
fn one_move_solution() {
    assert_eq!(
        solve_text("1,2,3,4,5,6,7,0,8"),
        "[1, 2, 3, 4, 5, 6, 7, 0, 8] h=1 moves: 0\n\
         [1, 2, 3, 4, 5, 6, 7, 8, 0] h=0 moves: 1\n"
    );
}

#[test]
fn two_move_solution() {
    assert_eq!(
        solve_text("1,2,3,4,0,6,7,5,8"),
        "[1, 2, 3, 4, 0, 6, 7, 5, 8] h=2 moves: 0\n\
         [1, 2, 3, 4, 5, 6, 7, 0, 8] h=1 moves: 1\n\
         [1, 2, 3, 4, 5, 6, 7, 8, 0] h=0 moves: 2\n"
    );
}

#[rstest]
#[case("4,3,8,5,1,6,7,2,0", 22)]
#[case("2,5,8,4,3,6,7,1,0", 18)]
fn last_line_is_the_goal(#[case] input: &str, #[case] moves: usize) {
    let text = solve_text(input);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), moves + 1);
    assert_eq!(
        lines.last().copied(),
        Some(format!("[1, 2, 3, 4, 5, 6, 7, 8, 0] h=0 moves: {}", moves).as_str())
    );
}

#[rstest]
#[case("1,2,3")]
#[case("1,2,3,4,5,6,7,8,9")]
#[case("0,0,1,2,3,4,5,6,7")]
fn malformed_input_is_rejected(#[case] input: &str) {
    assert!(matches!(
        input.parse::<State>(),
        Err(PuzzleError::InvalidState { .. })
    ));
}
