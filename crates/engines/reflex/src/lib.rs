//! Reflex Laserchess Engine
//!
//! A one-rule baseline: if the enemy king can be shot right now, shoot it;
//! otherwise play a uniformly random legal action. Useful for:
//! - Testing infrastructure without paying for a real search
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing action generation

use laser_core::{
    all_actions, Engine, GameState, MoveKind, PieceKind, SearchLimits, SearchResult,
};
use rand::seq::SliceRandom;
use rand::thread_rng;


#[derive(Debug, Clone, Default)]
pub struct ReflexEngine {
    nodes: u64,
}

impl ReflexEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ReflexEngine {
    fn search(&mut self, state: &GameState, _limits: SearchLimits) -> SearchResult {
        let actions = all_actions(state);
        self.nodes = 1;

        let enemy = state.side_to_move.other();
        let king_shot = actions.iter().copied().find(|mv| {
            mv.kind == MoveKind::Shoot
                && matches!(state.piece_at(mv.to),
                    Some(p) if p.color == enemy && p.kind == PieceKind::King)
        });

        let best_move = king_shot.or_else(|| actions.choose(&mut thread_rng()).copied());

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Reflex v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
