use std::io::{self, BufRead, Write};
use std::time::Duration;

use laser_core::{
    all_actions, coord_to_sq, legal_moves, legal_shots, sq_to_coord, Color, Engine, GameState,
    Move, MoveKind, SearchLimits,
};
use minimax_engine::MinimaxEngine;
use reflex_engine::ReflexEngine;

fn main() {
    // Line-oriented protocol over stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let mut state = GameState::startpos();
    let mut engine: Box<dyn Engine> = Box::new(MinimaxEngine::new());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "new" => {
                // Optional reload duration: new 3
                let reload = parts
                    .get(1)
                    .and_then(|s| s.parse::<u8>().ok())
                    .filter(|&n| n > 0)
                    .unwrap_or(1);
                state = GameState::with_reload(reload);
                engine.new_game();
                writeln!(stdout, "ok").ok();
            }
            "fen" => {
                if parts.len() < 4 {
                    writeln!(stdout, "error expected extended fen").ok();
                } else {
                    state = GameState::from_fen(&parts[1..].join(" "));
                    writeln!(stdout, "ok").ok();
                }
            }
            "print" => {
                writeln!(stdout, "{}", state.to_fen()).ok();
            }
            "moves" => match parts.get(1).and_then(|c| coord_to_sq(c)) {
                Some(from) => {
                    let list: Vec<String> =
                        legal_moves(&state, from).iter().map(|&s| sq_to_coord(s)).collect();
                    writeln!(stdout, "{}", list.join(" ")).ok();
                }
                None => {
                    writeln!(stdout, "error expected square").ok();
                }
            },
            "shots" => match parts.get(1).and_then(|c| coord_to_sq(c)) {
                Some(from) => {
                    let list: Vec<String> =
                        legal_shots(&state, from).iter().map(|&s| sq_to_coord(s)).collect();
                    writeln!(stdout, "{}", list.join(" ")).ok();
                }
                None => {
                    writeln!(stdout, "error expected square").ok();
                }
            },
            "move" => {
                commit(&mut state, parts.get(1), MoveKind::Relocate, &mut stdout);
            }
            "shoot" => {
                commit(&mut state, parts.get(1), MoveKind::Shoot, &mut stdout);
            }
            "go" => {
                let limits = parse_go(&parts[1..]);
                let result = engine.search(&state, limits);
                writeln!(
                    stdout,
                    "info depth {} score {} nodes {}",
                    result.depth, result.score, result.nodes
                )
                .ok();
                match result.best_move {
                    Some(mv) => {
                        writeln!(stdout, "bestmove {}", action_str(mv)).ok();
                    }
                    None => {
                        writeln!(stdout, "bestmove none").ok();
                    }
                }
            }
            "engine" => match parts.get(1).copied() {
                Some("minimax") => {
                    engine = Box::new(MinimaxEngine::new());
                    writeln!(stdout, "ok {}", engine.name()).ok();
                }
                Some("reflex") => {
                    engine = Box::new(ReflexEngine::new());
                    writeln!(stdout, "ok {}", engine.name()).ok();
                }
                _ => {
                    writeln!(stdout, "error unknown engine").ok();
                }
            },
            "quit" => break,
            _ => {
                // ignore unknown commands
            }
        }
        stdout.flush().ok();
    }
}

/// Parses `go [depth N] [time MS]` into search limits.
fn parse_go(args: &[&str]) -> SearchLimits {
    let mut depth: u8 = SearchLimits::default().depth;
    let mut time_ms: Option<u64> = None;

    let mut i = 0;
    while i < args.len() {
        match (args.get(i), args.get(i + 1)) {
            (Some(&"depth"), Some(v)) => {
                if let Ok(d) = v.parse() {
                    depth = d;
                }
                i += 2;
            }
            (Some(&"time"), Some(v)) => {
                if let Ok(t) = v.parse() {
                    time_ms = Some(t);
                }
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    match time_ms {
        Some(ms) => SearchLimits::depth_and_time(depth, Duration::from_millis(ms)),
        None => SearchLimits::depth(depth),
    }
}

/// Validates and applies a `move e2e4` or `shoot a1a8` action, then reports
/// the committed action and any winner.
fn commit(state: &mut GameState, arg: Option<&&str>, kind: MoveKind, stdout: &mut io::Stdout) {
    let mv = match arg.and_then(|a| parse_action(a, kind)) {
        Some(mv) => mv,
        None => {
            writeln!(stdout, "error expected from-to squares").ok();
            return;
        }
    };

    let legal = match kind {
        MoveKind::Relocate => legal_moves(state, mv.from).contains(&mv.to),
        MoveKind::Shoot => legal_shots(state, mv.from).contains(&mv.to),
    };
    if !legal {
        writeln!(stdout, "error illegal action").ok();
        return;
    }

    state.apply(mv);
    writeln!(stdout, "ok {}", action_str(mv)).ok();

    if !state.king_alive(Color::White) {
        writeln!(stdout, "winner black").ok();
    } else if !state.king_alive(Color::Black) {
        writeln!(stdout, "winner white").ok();
    } else if all_actions(state).is_empty() {
        // No legal actions loses for the side to move.
        match state.side_to_move {
            Color::White => writeln!(stdout, "winner black").ok(),
            Color::Black => writeln!(stdout, "winner white").ok(),
        };
    }
}

fn parse_action(arg: &str, kind: MoveKind) -> Option<Move> {
    if arg.len() != 4 || !arg.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&arg[..2])?;
    let to = coord_to_sq(&arg[2..])?;
    Some(Move { from, to, kind })
}

fn action_str(mv: Move) -> String {
    let verb = match mv.kind {
        MoveKind::Relocate => "move",
        MoveKind::Shoot => "shoot",
    };
    format!("{} {}{}", verb, sq_to_coord(mv.from), sq_to_coord(mv.to))
}
