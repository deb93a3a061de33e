use crate::error::PuzzleError;
use crossterm::style::{style, Stylize};
use rand::{seq::SliceRandom, thread_rng, Rng};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Width and height of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board, blank included.
pub const CELLS: usize = SIDE * SIDE;

/// The solved layout: tiles in reading order with the blank last.
pub const GOAL: State = State {
    tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
};

/// Direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// (row, col) delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One configuration of the board, stored row-major with 0 as the blank.
///
/// The derived ordering compares tiles lexicographically, which is the
/// tie-break the search relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    tiles: [u8; CELLS],
}

impl State {
    /// Validates that `tiles` is a permutation of 0..=8.
    pub fn new(tiles: &[u8]) -> Result<Self, PuzzleError> {
        if tiles.len() != CELLS {
            return Err(PuzzleError::invalid(format!(
                "expected {} tiles, got {}",
                CELLS,
                tiles.len()
            )));
        }

        let mut seen = [false; CELLS];
        for &tile in tiles {
            let slot = seen.get_mut(tile as usize).ok_or_else(|| {
                PuzzleError::invalid(format!("tile {} is outside 0..={}", tile, CELLS - 1))
            })?;
            if *slot {
                return Err(PuzzleError::invalid(format!("tile {} appears twice", tile)));
            }
            *slot = true;
        }

        let mut board = [0; CELLS];
        board.copy_from_slice(tiles);
        Ok(Self { tiles: board })
    }

    /// Draws a uniformly random solvable state.
    pub fn random() -> Self {
        Self::shuffled(&mut thread_rng())
    }

    /// Draws a random solvable state from `rng`, rejecting odd-parity layouts.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles = GOAL.tiles;
        loop {
            tiles.shuffle(rng);
            let candidate = Self { tiles };
            if candidate.is_solvable() {
                return candidate;
            }
        }
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub(crate) const fn tiles_const(&self) -> [u8; CELLS] {
        self.tiles
    }

    pub fn blank_index(&self) -> usize {
        // Every constructor guarantees exactly one blank.
        self.tiles.iter().position(|&t| t == 0).unwrap_or(CELLS - 1)
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Returns a copy with the blank and the tile at `index` exchanged.
    pub(crate) fn swap_blank_with(&self, index: usize) -> Self {
        let mut tiles = self.tiles;
        tiles.swap(self.blank_index(), index);
        Self { tiles }
    }

    /// Slides the blank one cell, or `None` if that would leave the board.
    pub fn apply_move(&self, movement: Move) -> Option<Self> {
        let (dr, dc) = movement.as_offset();
        let blank = self.blank_index();

        let new_row = (blank / SIDE) as isize + dr;
        let new_col = (blank % SIDE) as isize + dc;

        if new_row >= 0 && new_row < SIDE as isize && new_col >= 0 && new_col < SIDE as isize {
            Some(self.swap_blank_with(new_row as usize * SIDE + new_col as usize))
        } else {
            None
        }
    }

    /// The single blank move that turns `self` into `next`, if there is one.
    pub fn move_between(&self, next: &State) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|&m| self.apply_move(m).as_ref() == Some(next))
    }

    /// Whether the goal lies in the same parity class as this state.
    ///
    /// On an odd-width board a blank move never changes the parity of the
    /// tile inversion count, and the goal has zero inversions.
    pub fn is_solvable(&self) -> bool {
        count_inversions(&self.tiles) % 2 == 0
    }

    /// Writes the board as a 3x3 grid with the blank dimmed.
    pub fn render_grid<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.tiles.chunks(SIDE) {
            for &tile in row {
                if tile == 0 {
                    write!(out, "{} ", style(" .").dark_grey())?;
                } else {
                    write!(out, "{} ", style(format!("{:2}", tile)).bold())?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn count_inversions(tiles: &[u8]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tile)?;
        }
        write!(f, "]")
    }
}

impl FromStr for State {
    type Err = PuzzleError;

    /// Accepts integers separated by commas or whitespace, optionally
    /// wrapped in brackets, so the `Display` form parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim().trim_start_matches('[').trim_end_matches(']');
        let tiles = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>()
                    .map_err(|_| PuzzleError::invalid(format!("`{}` is not a tile number", part)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&tiles)
    }
}

impl TryFrom<&[u8]> for State {
    type Error = PuzzleError;

    fn try_from(tiles: &[u8]) -> Result<Self, Self::Error> {
        Self::new(tiles)
    }
}
