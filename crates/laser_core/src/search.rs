//! Iterative-deepening minimax with alpha-beta pruning.
//!
//! Scores are from white's perspective throughout: white maximizes, black
//! minimizes. Time is polled only between depth iterations and between root
//! candidates; once a root candidate's subtree search starts it runs to
//! completion.

use std::time::Duration;

use crate::{
    board::GameState,
    eval::evaluate,
    movegen::all_actions,
    time_control::SearchLimits,
    types::{Color, Move},
};

/// Terminal score for a side with no legal actions, from white's perspective.
pub const NO_ACTION_SCORE: i32 = 100_000;

/// Result from `pick_best_move` indicating how far the search got.
pub struct SearchOutcome {
    /// Best move with its score (None if no legal actions exist)
    pub best_move: Option<(Move, i32)>,
    /// Deepest iteration that ran to completion (0 if none did)
    pub depth_completed: u8,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Searches `state` under a depth budget and wall-clock budget and returns the
/// chosen move. Returns None when `depth_budget` is 0 or the side to move has
/// no legal actions.
pub fn best_move(state: &GameState, depth_budget: u8, time_budget_ms: u64) -> Option<Move> {
    if depth_budget == 0 {
        return None;
    }
    let limits = SearchLimits::depth_and_time(depth_budget, Duration::from_millis(time_budget_ms));
    limits.start();
    let mut nodes = 0u64;
    pick_best_move(state, &limits, &mut nodes)
        .best_move
        .map(|(mv, _)| mv)
}

/// Iterative deepening driver. `limits.start()` must have been called.
///
/// Each completed depth iteration replaces the previous result; a partial
/// deeper iteration is discarded. Depth 1 runs without clock checks, so a
/// position with legal actions always yields a move even on an expired clock.
pub fn pick_best_move(state: &GameState, limits: &SearchLimits, nodes: &mut u64) -> SearchOutcome {
    let actions = all_actions(state);
    if actions.is_empty() || limits.depth == 0 {
        return SearchOutcome {
            best_move: None,
            depth_completed: 0,
            stopped: false,
        };
    }

    let white = state.side_to_move == Color::White;
    let tc = &limits.time_control;

    let mut best: Option<(Move, i32)> = None;
    let mut depth_completed = 0u8;
    let mut stopped = false;

    'deepening: for depth in 1..=limits.depth {
        if depth > 1 && tc.check_time() {
            stopped = true;
            break;
        }

        let mut iter_best: Option<(Move, i32)> = None;
        for &mv in &actions {
            if depth > 1 && tc.check_time() {
                stopped = true;
                break 'deepening;
            }

            let mut child = state.clone();
            child.apply(mv);
            *nodes += 1;
            let value = minimax(&child, depth - 1, i32::MIN, i32::MAX, nodes);

            // Strict improvement only: ties keep the first-found candidate.
            let better = match iter_best {
                None => true,
                Some((_, b)) => {
                    if white {
                        value > b
                    } else {
                        value < b
                    }
                }
            };
            if better {
                iter_best = Some((mv, value));
            }
        }

        best = iter_best;
        depth_completed = depth;
    }

    SearchOutcome {
        best_move: best,
        depth_completed,
        stopped,
    }
}

fn minimax(state: &GameState, depth: u8, mut alpha: i32, mut beta: i32, nodes: &mut u64) -> i32 {
    if depth == 0 {
        return evaluate(state);
    }

    let actions = all_actions(state);
    let maximizing = state.side_to_move == Color::White;
    if actions.is_empty() {
        // No actions is a loss for the side to move, not a draw.
        return if maximizing {
            -NO_ACTION_SCORE
        } else {
            NO_ACTION_SCORE
        };
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in actions {
            let mut child = state.clone();
            child.apply(mv);
            *nodes += 1;
            let value = minimax(&child, depth - 1, alpha, beta, nodes);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in actions {
            let mut child = state.clone();
            child.apply(mv);
            *nodes += 1;
            let value = minimax(&child, depth - 1, alpha, beta, nodes);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
