//! Minimax Laserchess Engine
//!
//! Iterative-deepening minimax with alpha-beta pruning over the full action
//! set (relocations and shots), with material-based evaluation.

use laser_core::{pick_best_move, Engine, GameState, SearchLimits, SearchResult};


/// The main playing engine: deepens one ply at a time until the depth budget
/// or the wall clock runs out, keeping the deepest completed iteration.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, state: &GameState, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();
        let outcome = pick_best_move(state, &limits, &mut self.nodes);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth: outcome.depth_completed,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
