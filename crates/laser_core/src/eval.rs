use crate::{board::GameState, types::*};

/// Material-only evaluation, positive for white. The king's weight is large
/// enough that losing it dominates any other material swing.
pub fn evaluate(state: &GameState) -> i32 {
    let mut score = 0i32;
    for square in 0..64u8 {
        if let Some(piece) = state.piece_at(square) {
            let v = match piece.kind {
                PieceKind::Pawn => 100,
                PieceKind::Knight => 320,
                PieceKind::Bishop => 330,
                PieceKind::Rook => 500,
                PieceKind::Queen => 900,
                PieceKind::King => 20_000,
            };
            score += if piece.color == Color::White { v } else { -v };
        }
    }
    score
}
