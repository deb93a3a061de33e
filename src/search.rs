//! A* search over puzzle states toward [`GOAL`].
//!
//! Expanded nodes live in an append-only arena (the closed list); a node's
//! index there is its identity and later nodes point back at their parent
//! by that index. The open set is a min-heap keyed on `(f, state, g, h,
//! parent)`, so equal-priority nodes resolve to the lexicographically
//! smaller state.

use crate::error::PuzzleError;
use crate::heuristic::manhattan_distance;
use crate::puzzle::{Move, State, GOAL};
use crate::successors::successors;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::{debug, instrument, trace};

/// One entry on the reconstructed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub state: State,
    /// Moves taken from the start.
    pub g: u32,
    /// Manhattan distance to the goal.
    pub h: u32,
}

/// An optimal path from the start state to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<Step>,
    expanded: usize,
    generated: usize,
}

impl Solution {
    /// Path from start to goal, both included.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of moves in the solution.
    pub fn moves(&self) -> u32 {
        self.steps.last().map_or(0, |step| step.g)
    }

    /// Blank moves that walk the path.
    pub fn directions(&self) -> Vec<Move> {
        self.steps
            .windows(2)
            .filter_map(|pair| pair[0].state.move_between(&pair[1].state))
            .collect()
    }

    /// Nodes moved to the closed list.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Nodes pushed onto the open set, the root included.
    pub fn generated(&self) -> usize {
        self.generated
    }
}

// Field order is the heap order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Node {
    priority: u32,
    state: State,
    g: u32,
    h: u32,
    parent: Option<usize>,
}

impl Node {
    fn new(state: State, g: u32, parent: Option<usize>) -> Self {
        let h = manhattan_distance(&state);
        Self {
            priority: g + h,
            state,
            g,
            h,
            parent,
        }
    }
}

impl From<&Node> for Step {
    fn from(node: &Node) -> Self {
        Self {
            state: node.state,
            g: node.g,
            h: node.h,
        }
    }
}

/// What the search knows about a state it has discovered.
#[derive(Debug, Default, Clone, Copy)]
struct Record {
    /// g of the live open entry; heap entries with any other g are stale.
    open_g: Option<u32>,
    /// Largest g among closed copies of the state.
    closed_g: Option<u32>,
}

struct Search {
    open: BinaryHeap<Reverse<Node>>,
    closed: Vec<Node>,
    records: HashMap<State, Record>,
    generated: usize,
}

impl Search {
    fn new(start: State) -> Self {
        let mut search = Self {
            open: BinaryHeap::new(),
            closed: Vec::new(),
            records: HashMap::new(),
            generated: 0,
        };
        search.push(Node::new(start, 0, None));
        search
    }

    fn push(&mut self, node: Node) {
        self.records.entry(node.state).or_default().open_g = Some(node.g);
        self.open.push(Reverse(node));
        self.generated += 1;
    }

    /// Pops the best live node, discarding entries superseded by a cheaper
    /// rediscovery of the same state.
    fn pop_live(&mut self) -> Option<Node> {
        while let Some(Reverse(node)) = self.open.pop() {
            let record = self.records.entry(node.state).or_default();
            if record.open_g == Some(node.g) {
                record.open_g = None;
                return Some(node);
            }
            trace!(state = %node.state, g = node.g, "skipping stale open entry");
        }
        None
    }

    fn close(&mut self, node: Node) -> usize {
        let record = self.records.entry(node.state).or_default();
        record.closed_g = Some(record.closed_g.map_or(node.g, |g| g.max(node.g)));
        self.closed.push(node);
        self.closed.len() - 1
    }

    /// Runs until the goal is closed and returns its arena index.
    fn run(&mut self) -> Result<usize, PuzzleError> {
        loop {
            let Some(node) = self.pop_live() else {
                return Err(PuzzleError::SearchExhausted {
                    expanded: self.closed.len(),
                });
            };
            let index = self.close(node);

            if node.state == GOAL {
                return Ok(index);
            }

            trace!(state = %node.state, g = node.g, h = node.h, "expanding");
            for next in successors(&node.state) {
                let candidate = Node::new(next, node.g + 1, Some(index));
                match self.records.get(&next).copied() {
                    None => self.push(candidate),
                    Some(record) => {
                        let improves = |known: Option<u32>| known.is_some_and(|g| candidate.g < g);
                        // Closed copies stay in the arena; only the open entry is replaced.
                        if improves(record.open_g) || improves(record.closed_g) {
                            self.push(candidate);
                        }
                    }
                }
            }
        }
    }

    fn reconstruct(&self, goal: usize) -> Vec<Step> {
        let mut steps = Vec::new();
        let mut cursor = Some(goal);
        while let Some(index) = cursor {
            let node = &self.closed[index];
            steps.push(Step::from(node));
            cursor = node.parent;
        }
        steps.reverse();
        steps
    }
}

/// Finds a minimum-move path from `start` to [`GOAL`].
///
/// There is no up-front solvability check: a state in the wrong parity
/// class drains the open set and yields [`PuzzleError::SearchExhausted`].
#[instrument(skip_all, fields(start = %start))]
pub fn solve(start: &State) -> Result<Solution, PuzzleError> {
    let mut search = Search::new(*start);
    let goal = search.run().inspect_err(|err| debug!(%err, "search failed"))?;
    let steps = search.reconstruct(goal);

    debug!(
        moves = steps.len() - 1,
        expanded = search.closed.len(),
        generated = search.generated,
        "solved"
    );

    Ok(Solution {
        steps,
        expanded: search.closed.len(),
        generated: search.generated,
    })
}
