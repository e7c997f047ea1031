use crate::{board::*, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const ORTHO_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ALL_DIRS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Destinations the piece on `from` may relocate to. Empty when the square is
/// empty or holds a piece that is not on move.
pub fn legal_moves(state: &GameState, from: u8) -> Vec<u8> {
    let piece = match state.piece_at(from) {
        Some(p) if p.color == state.side_to_move => p,
        _ => return Vec::new(),
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => gen_pawn_moves(state, from, piece.color, &mut out),
        PieceKind::Knight => gen_step_moves(state, from, piece.color, &KNIGHT_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider_moves(state, from, piece.color, &DIAG_DIRS, &mut out),
        PieceKind::Rook => gen_slider_moves(state, from, piece.color, &ORTHO_DIRS, &mut out),
        PieceKind::Queen => gen_slider_moves(state, from, piece.color, &ALL_DIRS, &mut out),
        PieceKind::King => {
            gen_step_moves(state, from, piece.color, &KING_DELTAS, &mut out);
            gen_castle_moves(state, from, piece.color, &mut out);
        }
    }
    out
}

/// Enemy squares the piece on `from` may shoot. A square that is still
/// reloading fires nothing regardless of pattern.
pub fn legal_shots(state: &GameState, from: u8) -> Vec<u8> {
    let piece = match state.piece_at(from) {
        Some(p) if p.color == state.side_to_move => p,
        _ => return Vec::new(),
    };
    if state.reload.is_loading(from) {
        return Vec::new();
    }

    let mut out = Vec::new();
    match piece.kind {
        // Pawns shoot only diagonally forward, never straight.
        PieceKind::Pawn => {
            let dr = forward(piece.color);
            for dc in [-1, 1] {
                push_enemy_step(state, from, piece.color, dr, dc, &mut out);
            }
        }
        PieceKind::Knight => {
            for (dr, dc) in KNIGHT_DELTAS {
                push_enemy_step(state, from, piece.color, dr, dc, &mut out);
            }
        }
        PieceKind::Bishop => gen_shot_rays(state, from, piece.color, &DIAG_DIRS, &mut out),
        PieceKind::Rook => gen_shot_rays(state, from, piece.color, &ORTHO_DIRS, &mut out),
        PieceKind::Queen => gen_shot_rays(state, from, piece.color, &ALL_DIRS, &mut out),
        PieceKind::King => {
            for (dr, dc) in KING_DELTAS {
                push_enemy_step(state, from, piece.color, dr, dc, &mut out);
            }
        }
    }
    out
}

/// Every action available to the side to move, in the order the search visits
/// them: squares row-major from black's back rank, relocations before shots.
pub fn all_actions(state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for from in 0..64u8 {
        match state.piece_at(from) {
            Some(p) if p.color == state.side_to_move => {}
            _ => continue,
        }
        for to in legal_moves(state, from) {
            out.push(Move::relocate(from, to));
        }
        for to in legal_shots(state, from) {
            out.push(Move::shot(from, to));
        }
    }
    out
}

/// Castling eligibility: the right is still held, king and rook sit on their
/// original squares, and the corridor between them is empty. Deliberately no
/// check/through-check condition in this game.
pub fn can_castle(state: &GameState, color: Color, kingside: bool) -> bool {
    let right = match (color, kingside) {
        (Color::White, true) => state.castling.wk,
        (Color::White, false) => state.castling.wq,
        (Color::Black, true) => state.castling.bk,
        (Color::Black, false) => state.castling.bq,
    };
    if !right {
        return false;
    }

    let home = king_home(color);
    let king = Piece {
        color,
        kind: PieceKind::King,
    };
    let rook = Piece {
        color,
        kind: PieceKind::Rook,
    };
    if state.piece_at(home) != Some(king) {
        return false;
    }

    if kingside {
        state.piece_at(home + 3) == Some(rook)
            && state.piece_at(home + 1).is_none()
            && state.piece_at(home + 2).is_none()
    } else {
        state.piece_at(home - 4) == Some(rook)
            && state.piece_at(home - 1).is_none()
            && state.piece_at(home - 2).is_none()
            && state.piece_at(home - 3).is_none()
    }
}

fn forward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

fn gen_pawn_moves(state: &GameState, from: u8, color: Color, out: &mut Vec<u8>) {
    let r = row_of(from);
    let c = col_of(from);
    let dr = forward(color);
    let start_row = match color {
        Color::White => 6,
        Color::Black => 1,
    };

    if let Some(one) = sq(r + dr, c) {
        if state.piece_at(one).is_none() {
            out.push(one);
            if r == start_row {
                if let Some(two) = sq(r + 2 * dr, c) {
                    if state.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = sq(r + dr, c + dc) {
            if let Some(target) = state.piece_at(to) {
                if target.color != color {
                    out.push(to);
                }
            }
        }
    }
}

fn gen_step_moves(state: &GameState, from: u8, color: Color, deltas: &[(i8, i8)], out: &mut Vec<u8>) {
    let r = row_of(from);
    let c = col_of(from);
    for (dr, dc) in deltas {
        if let Some(to) = sq(r + dr, c + dc) {
            match state.piece_at(to) {
                None => out.push(to),
                Some(target) if target.color != color => out.push(to),
                _ => {}
            }
        }
    }
}

fn gen_slider_moves(state: &GameState, from: u8, color: Color, dirs: &[(i8, i8)], out: &mut Vec<u8>) {
    let r0 = row_of(from);
    let c0 = col_of(from);
    for (dr, dc) in dirs {
        let mut r = r0 + dr;
        let mut c = c0 + dc;
        while let Some(to) = sq(r, c) {
            match state.piece_at(to) {
                None => out.push(to),
                Some(target) => {
                    if target.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            r += dr;
            c += dc;
        }
    }
}

fn gen_castle_moves(state: &GameState, from: u8, color: Color, out: &mut Vec<u8>) {
    if from != king_home(color) {
        return;
    }
    if can_castle(state, color, true) {
        out.push(from + 2);
    }
    if can_castle(state, color, false) {
        out.push(from - 2);
    }
}

// Single-step shot: target square must hold an enemy.
fn push_enemy_step(state: &GameState, from: u8, color: Color, dr: i8, dc: i8, out: &mut Vec<u8>) {
    if let Some(to) = sq(row_of(from) + dr, col_of(from) + dc) {
        if let Some(target) = state.piece_at(to) {
            if target.color != color {
                out.push(to);
            }
        }
    }
}

// Ray shot: the first occupied square terminates the ray; it is a target only
// if it holds an enemy.
fn gen_shot_rays(state: &GameState, from: u8, color: Color, dirs: &[(i8, i8)], out: &mut Vec<u8>) {
    let r0 = row_of(from);
    let c0 = col_of(from);
    for (dr, dc) in dirs {
        let mut r = r0 + dr;
        let mut c = c0 + dc;
        while let Some(to) = sq(r, c) {
            if let Some(target) = state.piece_at(to) {
                if target.color != color {
                    out.push(to);
                }
                break;
            }
            r += dr;
            c += dc;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
