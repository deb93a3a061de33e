use crate::puzzle::{State, SIDE};

/// Every state one blank move away from `state`, sorted lexicographically.
///
/// Callers depend on the order: it fixes the output of `print_succ` and the
/// push order of the search.
pub fn successors(state: &State) -> Vec<State> {
    let blank = state.blank_index();
    let (row, col) = ((blank / SIDE) as isize, (blank % SIDE) as isize);
    let candidates = [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)];

    let mut next: Vec<State> = candidates
        .into_iter()
        .filter(|&(r, c)| (0..SIDE as isize).contains(&r) && (0..SIDE as isize).contains(&c))
        .map(|(r, c)| state.swap_blank_with(r as usize * SIDE + c as usize))
        .collect();
    next.sort_unstable();
    next
}
