//! Level: the mutable game-level state and the snapshots it produces.
//!
//! # Invariants
//! - A snapshot never shares its inventory with a live level.
//! - Restoring copies the snapshot's fields; the snapshot stays untouched.
//! - Snapshots are immutable once captured.

pub mod capture;
pub mod level;

pub use capture::{CaptureError, CaptureStrategy, FieldCopy, SerdeCopy, deep_copy};
pub use level::{GameLevel, LevelError, Snapshot};

pub fn crate_info() -> &'static str {
    "levelsave-level v0.1.0"
}
