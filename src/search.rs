//! Uninformed and informed search over sliding-tile states.
//!
//! All three strategies share the same shape: a frontier of discovered
//! states, a handled set keyed by full board layout, and goal-testing on
//! successors as they are generated. A state enters the handled set the
//! moment it is discovered, not when it is expanded, so no state is enqueued
//! twice. Because successors are goal-tested rather than expanded states, an
//! already-solved start is returned before the loop begins.
//!
//! Exhausting the frontier without reaching a solved board is a normal
//! outcome reported as `None`; it happens exactly when the start state lies
//! in the unsolvable half of the permutation space.

use crate::puzzle::Puzzle;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Depth-first search. Finds some solution, not necessarily a shortest one;
/// memory stays proportional to the deepest explored branch.
pub fn dfs(start: &Puzzle) -> Option<Puzzle> {
    if start.is_solved() {
        return Some(start.clone());
    }

    let mut stack = vec![start.clone()];
    let mut handled = FxHashSet::default();
    handled.insert(start.clone());

    while let Some(board) = stack.pop() {
        for state in board.successors() {
            if handled.contains(&state) {
                continue;
            }
            if state.is_solved() {
                return Some(state);
            }
            handled.insert(state.clone());
            stack.push(state);
        }
    }
    None
}

/// Breadth-first search. The returned state is reached by the minimum number
/// of slides from the start.
pub fn bfs(start: &Puzzle) -> Option<Puzzle> {
    if start.is_solved() {
        return Some(start.clone());
    }

    let mut queue = VecDeque::new();
    queue.push_back(start.clone());
    let mut handled = FxHashSet::default();
    handled.insert(start.clone());

    while let Some(board) = queue.pop_front() {
        for state in board.successors() {
            if handled.contains(&state) {
                continue;
            }
            if state.is_solved() {
                return Some(state);
            }
            handled.insert(state.clone());
            queue.push_back(state);
        }
    }
    None
}

/// A frontier entry carrying its precomputed priority. Ordering looks at the
/// priority only; two entries with equal priority compare equal regardless
/// of their boards, which is fine inside a heap where ties may break
/// arbitrarily.
struct Scored {
    priority: u32,
    state: Puzzle,
}

impl PartialEq for Scored {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Scored {}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// Informed search expanding the frontier entry with the lowest heuristic
/// value first.
///
/// The priority is the heuristic estimate of each state alone, with no
/// accumulated path cost. That makes this greedy best-first search: it
/// typically reaches a solved board after far fewer expansions than BFS, but
/// carries no shortest-solution guarantee even though the heuristic is
/// admissible.
pub fn best_first<H>(start: &Puzzle, heuristic: H) -> Option<Puzzle>
where
    H: Fn(&Puzzle) -> u32,
{
    if start.is_solved() {
        return Some(start.clone());
    }

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(Scored {
        priority: heuristic(start),
        state: start.clone(),
    }));
    let mut handled = FxHashSet::default();
    handled.insert(start.clone());

    while let Some(Reverse(entry)) = frontier.pop() {
        for state in entry.state.successors() {
            if state.is_solved() {
                return Some(state);
            }
            if handled.contains(&state) {
                continue;
            }
            handled.insert(state.clone());
            frontier.push(Reverse(Scored {
                priority: heuristic(&state),
                state,
            }));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::manhattan_distance;
    use crate::puzzle::Move;

    fn one_slide_from_solved() -> Puzzle {
        Puzzle::new(2).unwrap().try_move(Move::Left).unwrap()
    }

    fn unsolvable() -> Puzzle {
        // Odd permutation: swapping tiles 0 and 1 flips solvability.
        Puzzle::from_cells(2, vec![Some(1), Some(0), Some(2), None]).unwrap()
    }

    #[test]
    fn solved_start_is_returned_unchanged() {
        let solved = Puzzle::new(3).unwrap();
        assert_eq!(dfs(&solved).as_ref(), Some(&solved));
        assert_eq!(bfs(&solved).as_ref(), Some(&solved));
        assert_eq!(
            best_first(&solved, manhattan_distance).as_ref(),
            Some(&solved)
        );
    }

    #[test]
    fn all_strategies_solve_a_one_slide_board() {
        let start = one_slide_from_solved();
        assert!(dfs(&start).is_some_and(|p| p.is_solved()));
        assert!(bfs(&start).is_some_and(|p| p.is_solved()));
        assert!(best_first(&start, manhattan_distance).is_some_and(|p| p.is_solved()));
    }

    #[test]
    fn exhausted_frontier_reports_no_solution() {
        let start = unsolvable();
        assert_eq!(dfs(&start), None);
        assert_eq!(bfs(&start), None);
        assert_eq!(best_first(&start, manhattan_distance), None);
    }

    #[test]
    fn best_first_works_with_a_constant_heuristic() {
        // With every priority equal the heap degenerates into an arbitrary
        // ordering; the search must still terminate on a solved state.
        let start = one_slide_from_solved();
        assert!(best_first(&start, |_| 0).is_some_and(|p| p.is_solved()));
    }
}
