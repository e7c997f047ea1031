pub mod board;
pub mod eval;
pub mod movegen;
pub mod search;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use eval::*;
pub use movegen::*;
pub use search::{best_move, pick_best_move, SearchOutcome, NO_ACTION_SCORE};
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all laserchess engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best action found (None if no legal actions)
    pub best_move: Option<Move>,
    /// Score from white's perspective, in centipawns
    pub score: i32,
    /// Search depth reached
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// Trait that all laserchess engines implement.
///
/// Allows swapping between the full alpha-beta engine and cheap baselines.
pub trait Engine: Send {
    /// Search the position with the given search limits.
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
