//! Board Loading
//!
//! The validator core only consumes an ordered sequence of row strings.
//! This module is the collaborator that produces that sequence from a file
//! and turns it into a typed board, read once and reused by every check.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::board::Board;

/// Read the raw board rows from a file, one row per line.
///
/// Surrounding whitespace is stripped from each line; the content itself is
/// left for [`Board::parse`] to judge.
pub fn read_board_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file '{}'", path.display()))?;
    let lines: Vec<String> = text.lines().map(|line| line.trim().to_string()).collect();
    debug!("read {} rows from {}", lines.len(), path.display());
    Ok(lines)
}

/// Load and parse a board from a file in one step.
pub fn load_board(path: &Path) -> Result<Board> {
    let lines = read_board_lines(path)?;
    let board = Board::parse(&lines)
        .with_context(|| format!("malformed board in '{}'", path.display()))?;
    Ok(board)
}
