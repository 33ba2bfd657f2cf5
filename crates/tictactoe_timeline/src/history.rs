//! Immutable board snapshots and the history that owns them.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An immutable board captured after a move.
///
/// There is no way to change a snapshot in place. New snapshots are derived
/// copy-on-write with [`Snapshot::with_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
}

impl Snapshot {
    /// The all-empty starting snapshot.
    pub fn empty() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Returns a copy of this snapshot with `player` placed at `pos`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut board = self.board;
        board.set(pos, Square::Occupied(player));
        Self { board }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Ordered snapshots from game start to the latest recorded move.
///
/// Index 0 is always the empty board. The list only grows by appending and
/// only shrinks by truncating the future after a past step, both of which
/// are reserved for [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
        }
    }

    /// Number of snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least the starting snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at `step`, if recorded.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// The most recently recorded snapshot.
    pub fn latest(&self) -> &Snapshot {
        // Never empty: created with the starting snapshot and never truncated below it.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates over the snapshots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Drops every snapshot after `step`.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) {
        let keep = step + 1;
        if keep < self.snapshots.len() {
            debug!(discarded = self.snapshots.len() - keep, "Discarding future snapshots");
            self.snapshots.truncate(keep);
        }
    }

    /// Builds a history from raw snapshots without any checks.
    #[cfg(test)]
    pub(crate) fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }

    /// Appends a snapshot and returns its step.
    #[instrument(skip_all, fields(len = self.snapshots.len()))]
    pub(crate) fn push(&mut self, snapshot: Snapshot) -> usize {
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
