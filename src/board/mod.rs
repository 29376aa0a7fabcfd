//! Board Model
//!
//! Typed representation of the 7x7 board text grid.
//! No validation logic or CLI concerns - pure data representation.

pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::{Board, BoardError, INTERIOR, SIZE};
