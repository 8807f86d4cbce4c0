//! Sliding-tile puzzle search and a disjoint-set structure.
//!
//! The puzzle half models an N×N board ([`Puzzle`]) and solves it with three
//! interchangeable strategies in [`search`]: depth-first, breadth-first, and
//! heuristic-guided best-first using [`manhattan_distance`]. The
//! [`DisjointSet`] is an independent union-find over arbitrary label types.

pub mod disjoint_set;
pub mod heuristic;
pub mod puzzle;
pub mod search;

pub use disjoint_set::{DisjointSet, DisjointSetError};
pub use heuristic::manhattan_distance;
pub use puzzle::{Move, Puzzle, PuzzleError};
