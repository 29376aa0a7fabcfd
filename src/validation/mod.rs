//! Validation Engine
//!
//! Clean separation of validation logic from board construction and CLI
//! concerns.

pub mod engine;
pub mod visibility;

pub use engine::{
    check_skyscrapers, column_checks, is_complete, row_uniqueness, row_visibility, validate_board,
    Diagnostic, Severity,
};
pub use visibility::{visible_from_left, visible_from_right, VisibilityPolicy};

// Re-export common types
pub use engine::ValidationResult;
