//! Ways of producing an independent copy of a level's state.
//!
//! [`FieldCopy`] is what [`GameLevel::snapshot`] does. [`SerdeCopy`] gets the
//! same result by round-tripping the level through JSON; it exists for types
//! where writing the copy by hand is not practical.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::level::{GameLevel, Snapshot};

/// Errors from capturing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("deep copy failed: {0}")]
    DeepCopy(#[from] serde_json::Error),
}

/// Produces a snapshot of a level that shares no mutable data with it.
pub trait CaptureStrategy {
    fn capture(&self, level: &GameLevel) -> Result<Snapshot, CaptureError>;
}

/// Manual field-by-field copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldCopy;

impl CaptureStrategy for FieldCopy {
    fn capture(&self, level: &GameLevel) -> Result<Snapshot, CaptureError> {
        Ok(level.snapshot())
    }
}

/// Deep copy through a serialize/deserialize round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeCopy;

impl CaptureStrategy for SerdeCopy {
    fn capture(&self, level: &GameLevel) -> Result<Snapshot, CaptureError> {
        let mut copy = deep_copy(level)?;
        tracing::debug!(items = copy.inventory().len(), "captured level via serde copy");
        // `copy` is a fresh value, so its inventory can move straight in.
        let inventory = std::mem::take(copy.inventory_mut());
        Ok(Snapshot::from_parts(
            copy.player_position_x(),
            copy.player_position_y(),
            inventory,
            copy.score(),
        ))
    }
}

impl GameLevel {
    /// Capture a snapshot using an explicit strategy.
    pub fn snapshot_with<S: CaptureStrategy + ?Sized>(
        &self,
        strategy: &S,
    ) -> Result<Snapshot, CaptureError> {
        strategy.capture(self)
    }
}

/// Deep-copy any serde value by writing it to JSON bytes and reading it back.
pub fn deep_copy<T: Serialize + DeserializeOwned>(value: &T) -> Result<T, CaptureError> {
    let bytes = serde_json::to_vec(value)?;
    Ok(serde_json::from_slice(&bytes)?)
}
