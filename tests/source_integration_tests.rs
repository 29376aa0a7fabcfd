//! Tests for the file-loading collaborator.

use std::fs;

use skyscrapers_checker::source::{load_board, read_board_lines};
use skyscrapers_checker::validation::{check_skyscrapers, VisibilityPolicy};

const VALID_BOARD: &str = "***21**\n412453*\n423145*\n*543215\n*35214*\n*41532*\n*2*1***\n";

#[test]
fn load_board_from_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("board.txt");
    fs::write(&path, VALID_BOARD).expect("write board file");

    let board = load_board(&path).expect("load board");
    assert!(check_skyscrapers(&board, VisibilityPolicy::Lagging));
}

#[test]
fn line_endings_and_padding_are_stripped() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("board.txt");
    let crlf = VALID_BOARD.replace('\n', " \r\n");
    fs::write(&path, crlf).expect("write board file");

    let lines = read_board_lines(&path).expect("read lines");
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "***21**");

    let board = load_board(&path).expect("load board");
    assert!(check_skyscrapers(&board, VisibilityPolicy::Lagging));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("does-not-exist.txt");

    let err = load_board(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read board file"));
}

#[test]
fn malformed_board_is_rejected_at_load() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("board.txt");
    fs::write(&path, "***21**\n412453*\n").expect("write board file");

    let err = load_board(&path).unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("malformed board"));
    assert!(rendered.contains("expected 7 rows"));
}
