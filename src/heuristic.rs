use crate::puzzle::{State, CELLS, GOAL, SIDE};

/// Goal cell of every tile value, derived once from [`GOAL`].
const GOAL_POSITIONS: [usize; CELLS] = goal_positions();

const fn goal_positions() -> [usize; CELLS] {
    let goal = GOAL.tiles_const();
    let mut positions = [0; CELLS];
    let mut i = 0;
    while i < CELLS {
        positions[goal[i] as usize] = i;
        i += 1;
    }
    positions
}

/// Sum of Manhattan distances of tiles 1..=8 from their goal cells.
///
/// The blank does not count, so only the goal itself scores zero.
pub fn manhattan_distance(state: &State) -> u32 {
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(index, &tile)| {
            let target = GOAL_POSITIONS[tile as usize];
            let rows = (index / SIDE).abs_diff(target / SIDE);
            let cols = (index % SIDE).abs_diff(target % SIDE);
            (rows + cols) as u32
        })
        .sum()
}
