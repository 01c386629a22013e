use serde::{Deserialize, Serialize};

/// Errors from level operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// The mutable state of a game level: player position, inventory, and score.
///
/// This is the originator. It hands out [`Snapshot`]s of itself and can be
/// rolled back to any snapshot it produced. Inventory order is meaningful and
/// duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLevel {
    player_position_x: i32,
    player_position_y: i32,
    inventory: Vec<String>,
    score: i32,
}

/// A point-in-time copy of a [`GameLevel`].
///
/// Fields are set once at capture and only readable afterwards. Not `Clone`:
/// a snapshot has exactly one owner, usually a history stack.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    player_position_x: i32,
    player_position_y: i32,
    inventory: Vec<String>,
    score: i32,
}

impl Snapshot {
    /// Build a snapshot from owned parts. Callers must hand over an inventory
    /// that nothing else holds.
    pub(crate) fn from_parts(
        player_position_x: i32,
        player_position_y: i32,
        inventory: Vec<String>,
        score: i32,
    ) -> Self {
        Self {
            player_position_x,
            player_position_y,
            inventory,
            score,
        }
    }

    pub fn player_position_x(&self) -> i32 {
        self.player_position_x
    }

    pub fn player_position_y(&self) -> i32 {
        self.player_position_y
    }

    /// Items captured at snapshot time, in insertion order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}

impl GameLevel {
    /// Create a level with every field given explicitly.
    pub fn new(
        player_position_x: i32,
        player_position_y: i32,
        inventory: Vec<String>,
        score: i32,
    ) -> Self {
        Self {
            player_position_x,
            player_position_y,
            inventory,
            score,
        }
    }

    pub fn player_position_x(&self) -> i32 {
        self.player_position_x
    }

    pub fn set_player_position_x(&mut self, x: i32) {
        self.player_position_x = x;
    }

    pub fn player_position_y(&self) -> i32 {
        self.player_position_y
    }

    pub fn set_player_position_y(&mut self, y: i32) {
        self.player_position_y = y;
    }

    /// Move the player to `(x, y)`.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.player_position_x = x;
        self.player_position_y = y;
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Mutable access to the live inventory.
    pub fn inventory_mut(&mut self) -> &mut Vec<String> {
        &mut self.inventory
    }

    /// Append an item to the end of the inventory.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.push(item.into());
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn set_score(&mut self, score: i32) {
        self.score = score;
    }

    /// Capture the current state as a snapshot.
    ///
    /// The inventory is copied element by element, so later mutations of this
    /// level never reach the returned snapshot.
    pub fn snapshot(&self) -> Snapshot {
        tracing::debug!(
            items = self.inventory.len(),
            score = self.score,
            "capturing level snapshot"
        );
        Snapshot::from_parts(
            self.player_position_x,
            self.player_position_y,
            self.inventory.clone(),
            self.score,
        )
    }

    /// Overwrite every field with a copy of the snapshot's values.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        tracing::debug!(
            items = snapshot.inventory.len(),
            score = snapshot.score,
            "restoring level from snapshot"
        );
        self.player_position_x = snapshot.player_position_x;
        self.player_position_y = snapshot.player_position_y;
        self.inventory = snapshot.inventory.clone();
        self.score = snapshot.score;
    }

    /// Checked form of [`restore`](Self::restore) for callers that may not
    /// have a snapshot. An absent snapshot leaves the level untouched.
    pub fn try_restore(&mut self, snapshot: Option<&Snapshot>) -> Result<(), LevelError> {
        let snapshot =
            snapshot.ok_or(LevelError::InvalidArgument("cannot restore from a missing snapshot"))?;
        self.restore(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_level() -> GameLevel {
        GameLevel::new(0, 0, vec!["Sword".into(), "Shield".into()], 0)
    }

    #[test]
    fn default_level_is_empty() {
        let level = GameLevel::default();
        assert_eq!(level.player_position_x(), 0);
        assert_eq!(level.player_position_y(), 0);
        assert!(level.inventory().is_empty());
        assert_eq!(level.score(), 0);
    }

    #[test]
    fn snapshot_copies_all_fields() {
        let mut level = starting_level();
        level.move_to(3, -4);
        level.set_score(12);

        let snap = level.snapshot();
        assert_eq!(snap.player_position_x(), 3);
        assert_eq!(snap.player_position_y(), -4);
        assert_eq!(snap.inventory(), ["Sword", "Shield"]);
        assert_eq!(snap.score(), 12);
    }

    #[test]
    fn snapshot_unaffected_by_later_mutation() {
        let mut level = starting_level();
        let snap = level.snapshot();

        level.set_player_position_x(5);
        level.set_player_position_y(10);
        level.add_item("Bow");
        level.inventory_mut()[0] = "Broken Sword".into();
        level.set_score(50);

        assert_eq!(snap.player_position_x(), 0);
        assert_eq!(snap.player_position_y(), 0);
        assert_eq!(snap.inventory(), ["Sword", "Shield"]);
        assert_eq!(snap.score(), 0);
    }

    #[test]
    fn restore_of_own_snapshot_is_identity() {
        let mut level = GameLevel::new(7, 8, vec!["Bow".into(), "Bow".into()], 99);
        let before = level.clone();
        let snap = level.snapshot();
        level.restore(&snap);
        assert_eq!(level, before);
    }

    #[test]
    fn restore_overwrites_every_field() {
        let mut level = starting_level();
        let snap = level.snapshot();

        level.move_to(15, 20);
        level.add_item("Healing Potion");
        level.set_score(100);

        level.restore(&snap);
        assert_eq!(level, starting_level());
    }

    #[test]
    fn restored_inventory_is_independent_of_snapshot() {
        let mut level = starting_level();
        let snap = level.snapshot();
        level.restore(&snap);

        level.add_item("Bow");
        assert_eq!(snap.inventory(), ["Sword", "Shield"]);

        // The same snapshot can be applied again and still holds the old items.
        level.restore(&snap);
        assert_eq!(level.inventory(), ["Sword", "Shield"]);
    }

    #[test]
    fn try_restore_missing_snapshot_is_rejected() {
        let mut level = starting_level();
        level.set_score(42);
        let before = level.clone();

        let err = level.try_restore(None).unwrap_err();
        assert!(matches!(err, LevelError::InvalidArgument(_)));
        assert_eq!(level, before);
    }

    #[test]
    fn try_restore_with_snapshot_succeeds() {
        let mut level = starting_level();
        let snap = level.snapshot();
        level.set_score(1);
        assert!(level.try_restore(Some(&snap)).is_ok());
        assert_eq!(level.score(), 0);
    }

    #[test]
    fn duplicates_and_order_preserved() {
        let mut level = GameLevel::default();
        level.add_item("Arrow");
        level.add_item("Bow");
        level.add_item("Arrow");
        let snap = level.snapshot();
        assert_eq!(snap.inventory(), ["Arrow", "Bow", "Arrow"]);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let level = GameLevel::new(5, 10, vec!["Bow".into()], 50);
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(
            json,
            r#"{"playerPositionX":5,"playerPositionY":10,"inventory":["Bow"],"score":50}"#
        );
        let back: GameLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }

    #[test]
    fn snapshot_serializes_like_its_level() {
        let mut level = GameLevel::new(5, 10, vec!["Sword".into(), "Bow".into()], 50);
        let snap = level.snapshot();
        let level_json = serde_json::to_string(&level).unwrap();
        assert_eq!(serde_json::to_string(&snap).unwrap(), level_json);

        level.set_score(0);
        assert_eq!(serde_json::to_string(&snap).unwrap(), level_json);
    }
}
