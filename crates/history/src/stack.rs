use levelsave_level::{CaptureError, CaptureStrategy, GameLevel, Snapshot};

/// Result of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum UndoOutcome {
    /// The most recent snapshot was applied and dropped.
    Restored,
    /// Nothing left to undo; the level was not touched.
    HistoryExhausted,
}

impl UndoOutcome {
    pub fn is_restored(self) -> bool {
        matches!(self, Self::Restored)
    }
}

/// Chronological stack of snapshots for one level.
///
/// The history owns its snapshots but never the level itself: callers lend
/// the level for the duration of `save` or `undo`.
#[derive(Debug, Default)]
pub struct LevelHistory {
    snapshots: Vec<Snapshot>,
}

impl LevelHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the level and push it onto the stack.
    pub fn save(&mut self, level: &GameLevel) {
        self.snapshots.push(level.snapshot());
        tracing::debug!(depth = self.snapshots.len(), "saved level snapshot");
    }

    /// Like [`save`](Self::save) but with an explicit capture strategy.
    /// Nothing is pushed if the capture fails.
    pub fn save_with<S: CaptureStrategy + ?Sized>(
        &mut self,
        level: &GameLevel,
        strategy: &S,
    ) -> Result<(), CaptureError> {
        let snap = level.snapshot_with(strategy)?;
        self.snapshots.push(snap);
        tracing::debug!(depth = self.snapshots.len(), "saved level snapshot");
        Ok(())
    }

    /// Restore the level to the most recent snapshot and discard it.
    pub fn undo(&mut self, level: &mut GameLevel) -> UndoOutcome {
        let Some(snap) = self.snapshots.pop() else {
            tracing::info!("cannot undo further");
            return UndoOutcome::HistoryExhausted;
        };
        level.restore(&snap);
        tracing::debug!(depth = self.snapshots.len(), "undid level snapshot");
        UndoOutcome::Restored
    }

    /// Number of snapshots on the stack.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether an undo would restore anything.
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// The snapshot the next undo would apply.
    pub fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}
