use super::*;
use crate::board::GameState;

#[test]
fn test_startpos_actions() {
    let state = GameState::startpos();
    let actions = all_actions(&state);
    // 16 pawn moves + 4 knight moves; nothing can shoot from the start.
    assert_eq!(actions.len(), 20);
    assert!(actions.iter().all(|mv| mv.kind == MoveKind::Relocate));
}

#[test]
fn test_empty_or_enemy_square_queries_are_empty() {
    let state = GameState::startpos();
    let e4 = coord_to_sq("e4").unwrap();
    let e7 = coord_to_sq("e7").unwrap();
    assert!(legal_moves(&state, e4).is_empty());
    assert!(legal_shots(&state, e4).is_empty());
    // Black pawn while white is on move.
    assert!(legal_moves(&state, e7).is_empty());
    assert!(legal_shots(&state, e7).is_empty());
}

#[test]
fn test_pawn_single_and_double_step() {
    let state = GameState::startpos();
    let e2 = coord_to_sq("e2").unwrap();
    let moves = legal_moves(&state, e2);
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&coord_to_sq("e3").unwrap()));
    assert!(moves.contains(&coord_to_sq("e4").unwrap()));
}

#[test]
fn test_pawn_blocked() {
    // White pawn e2 blocked by a black rook on e3: no forward moves at all.
    let state = GameState::from_fen("k7/8/8/8/8/4r3/4P3/7K w - - 1");
    let e2 = coord_to_sq("e2").unwrap();
    assert!(legal_moves(&state, e2).is_empty());
}

#[test]
fn test_pawn_captures_diagonally() {
    let state = GameState::from_fen("k7/8/8/3p4/4P3/8/8/7K w - - 1");
    let e4 = coord_to_sq("e4").unwrap();
    let moves = legal_moves(&state, e4);
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&coord_to_sq("e5").unwrap()));
    assert!(moves.contains(&coord_to_sq("d5").unwrap()));
}

#[test]
fn test_pawn_shoots_diagonally_only() {
    let state = GameState::from_fen("k7/8/8/3p4/4P3/8/8/7K w - - 1");
    let e4 = coord_to_sq("e4").unwrap();
    assert_eq!(legal_shots(&state, e4), vec![coord_to_sq("d5").unwrap()]);

    // An enemy dead ahead is neither a move nor a shot target.
    let state = GameState::from_fen("k7/8/8/4p3/4P3/8/8/7K w - - 1");
    assert!(legal_moves(&state, e4).is_empty());
    assert!(legal_shots(&state, e4).is_empty());
}

#[test]
fn test_knight_moves_from_start() {
    let state = GameState::startpos();
    let b1 = coord_to_sq("b1").unwrap();
    let moves = legal_moves(&state, b1);
    assert_eq!(moves.len(), 2);
    assert!(moves.contains(&coord_to_sq("a3").unwrap()));
    assert!(moves.contains(&coord_to_sq("c3").unwrap()));
}

#[test]
fn test_knight_shoots_over_blockers() {
    // The knight's shot pattern is its jump pattern; intervening pieces are
    // irrelevant.
    let state = GameState::from_fen("k7/8/3p4/4p3/4N3/8/8/7K w - - 1");
    let e4 = coord_to_sq("e4").unwrap();
    assert_eq!(legal_shots(&state, e4), vec![coord_to_sq("d6").unwrap()]);
}

#[test]
fn test_slider_moves_blocked_by_friend_include_enemy() {
    let state = GameState::from_fen("k7/8/8/8/r7/8/8/R2N3K w - - 1");
    let a1 = coord_to_sq("a1").unwrap();
    let moves = legal_moves(&state, a1);
    // Up the a-column to the enemy rook inclusive, right up to the knight.
    assert!(moves.contains(&coord_to_sq("a4").unwrap()));
    assert!(!moves.contains(&coord_to_sq("a5").unwrap()));
    assert!(moves.contains(&coord_to_sq("c1").unwrap()));
    assert!(!moves.contains(&coord_to_sq("d1").unwrap()));
}

#[test]
fn test_rook_shot_hits_first_occupied_square_only() {
    let state = GameState::from_fen("r7/8/8/8/r7/8/8/R6K w - - 1");
    let a1 = coord_to_sq("a1").unwrap();
    // The closer rook terminates the ray; the one on a8 is shielded.
    assert_eq!(legal_shots(&state, a1), vec![coord_to_sq("a4").unwrap()]);
}

#[test]
fn test_shot_blocked_by_friendly_piece() {
    let state = GameState::from_fen("k7/8/8/8/P7/8/8/R6K w - - 1");
    let a1 = coord_to_sq("a1").unwrap();
    assert!(legal_shots(&state, a1).is_empty());
}

#[test]
fn test_reload_gates_all_shots() {
    let state = GameState::from_fen("k7/8/8/8/8/8/8/R6K w - a1:1 1");
    let a1 = coord_to_sq("a1").unwrap();
    assert!(legal_shots(&state, a1).is_empty());

    // Same position without the pending timer shoots the king.
    let state = GameState::from_fen("k7/8/8/8/8/8/8/R6K w - - 1");
    assert_eq!(legal_shots(&state, a1), vec![coord_to_sq("a8").unwrap()]);
}

#[test]
fn test_king_moves_and_castling_destinations() {
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 1");
    let e1 = coord_to_sq("e1").unwrap();
    let moves = legal_moves(&state, e1);
    // Five adjacent squares plus both castling destinations.
    assert_eq!(moves.len(), 7);
    assert!(moves.contains(&coord_to_sq("g1").unwrap()));
    assert!(moves.contains(&coord_to_sq("c1").unwrap()));
}

#[test]
fn test_castling_requires_empty_corridor() {
    // Bishop on f1 blocks kingside; queenside stays available.
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 1");
    assert!(!can_castle(&state, Color::White, true));
    assert!(can_castle(&state, Color::White, false));
}

#[test]
fn test_castling_requires_rook_identity() {
    // A queen standing on h1 does not satisfy the kingside rook condition.
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2Q w KQkq - 1");
    assert!(!can_castle(&state, Color::White, true));
}

#[test]
fn test_castling_requires_right_flag() {
    let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w kq - 1");
    assert!(!can_castle(&state, Color::White, true));
    assert!(!can_castle(&state, Color::White, false));
    assert!(can_castle(&state, Color::Black, true));
}

#[test]
fn test_all_actions_mixes_moves_and_shots() {
    let state = GameState::from_fen("k7/8/8/8/8/8/8/R6K w - - 1");
    let actions = all_actions(&state);
    let a1 = coord_to_sq("a1").unwrap();
    let a8 = coord_to_sq("a8").unwrap();
    assert!(actions.contains(&Move::relocate(a1, a8)));
    assert!(actions.contains(&Move::shot(a1, a8)));
    // Per square, relocations come before shots.
    let relocate_idx = actions
        .iter()
        .position(|mv| *mv == Move::relocate(a1, a8))
        .unwrap();
    let shot_idx = actions
        .iter()
        .position(|mv| *mv == Move::shot(a1, a8))
        .unwrap();
    assert!(relocate_idx < shot_idx);
}
