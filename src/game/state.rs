//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Sets remain to be claimed.
    InProgress,
    /// All 13 sets have been claimed.
    GameOver,
}
