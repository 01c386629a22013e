//! History: the caretaker stack of level snapshots.
//!
//! # Invariants
//! - Snapshots are pushed on save and popped on undo; nothing else changes the stack.
//! - An undone snapshot is discarded. There is no redo.
//! - Undo on an empty history is a normal outcome, not an error.

mod stack;

pub use stack::{LevelHistory, UndoOutcome};

pub fn crate_info() -> &'static str {
    "levelsave-history v0.1.0"
}
