//! Async search host.
//!
//! Callers hand over a snapshot of the game state and a difficulty level; the
//! search runs on a blocking worker thread so an async caller (UI loop,
//! network handler) is never stalled behind a deep search.

mod config;

pub use config::{HostConfig, LevelLimits};

use std::time::Duration;

use laser_core::{Engine, GameState, Move, SearchLimits, SearchResult};
use minimax_engine::MinimaxEngine;
use reflex_engine::ReflexEngine;

/// Which engine the host dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Minimax,
    Reflex,
}

pub struct SearchHost {
    config: HostConfig,
    engine: EngineKind,
}

impl SearchHost {
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            engine: EngineKind::Minimax,
        }
    }

    pub fn with_engine(config: HostConfig, engine: EngineKind) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Full search result for a snapshot at the given difficulty level.
    ///
    /// The snapshot is moved into the worker, so the caller's live state can
    /// keep changing while the search runs.
    pub async fn search(&self, snapshot: GameState, level: u8) -> Option<SearchResult> {
        let limits = self.config.limits_for(level);
        let engine_kind = self.engine;

        tokio::task::spawn_blocking(move || {
            let mut engine: Box<dyn Engine> = match engine_kind {
                EngineKind::Minimax => Box::new(MinimaxEngine::new()),
                EngineKind::Reflex => Box::new(ReflexEngine::new()),
            };
            let limits =
                SearchLimits::depth_and_time(limits.depth, Duration::from_millis(limits.time_ms));
            engine.search(&snapshot, limits)
        })
        .await
        .ok()
    }

    /// The chosen move only. None when the side to move has no legal actions.
    pub async fn best_move(&self, snapshot: GameState, level: u8) -> Option<Move> {
        self.search(snapshot, level).await?.best_move
    }
}
