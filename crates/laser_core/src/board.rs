use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }
    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }
}

/// Per-square shot cooldowns, indexed by square. 0 means ready to shoot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReloadTimers {
    turns: [u8; 64],
}

impl ReloadTimers {
    pub fn none() -> Self {
        Self { turns: [0; 64] }
    }

    pub fn get(&self, square: u8) -> u8 {
        self.turns[square as usize]
    }

    pub fn set(&mut self, square: u8, turns: u8) {
        self.turns[square as usize] = turns;
    }

    pub fn is_loading(&self, square: u8) -> bool {
        self.turns[square as usize] > 0
    }

    /// Moves a pending timer together with the piece that owns it.
    pub fn migrate(&mut self, from: u8, to: u8) {
        if self.turns[from as usize] > 0 {
            self.turns[to as usize] = self.turns[from as usize];
            self.turns[from as usize] = 0;
        }
    }

    /// One completed turn by either side: every pending timer counts down by 1.
    pub fn tick(&mut self) {
        for t in self.turns.iter_mut() {
            if *t > 0 {
                *t -= 1;
            }
        }
    }

    /// Squares that currently carry a pending timer.
    pub fn pending(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.turns
            .iter()
            .enumerate()
            .filter(|(_, &t)| t > 0)
            .map(|(i, &t)| (i as u8, t))
    }
}

// Home squares used for castling inference and eligibility.
pub const WHITE_KING_HOME: u8 = 60;
pub const BLACK_KING_HOME: u8 = 4;

pub fn king_home(color: Color) -> u8 {
    match color {
        Color::White => WHITE_KING_HOME,
        Color::Black => BLACK_KING_HOME,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub reload: ReloadTimers,
    /// Configured cooldown set on a square when it fires. Chosen per game.
    pub reload_turns: u8,
}

impl GameState {
    pub fn startpos() -> Self {
        Self::with_reload(1)
    }

    pub fn with_reload(reload_turns: u8) -> Self {
        let mut state = GameState {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            reload: ReloadTimers::none(),
            reload_turns,
        };

        // Pawns: black on row 1, white on row 6.
        for c in 0..8 {
            state.board[8 + c] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
            state.board[48 + c] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
        }
        // Back ranks: black on row 0, white on row 7.
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (c, &kind) in back.iter().enumerate() {
            state.board[c] = Some(Piece {
                color: Color::Black,
                kind,
            });
            state.board[56 + c] = Some(Piece {
                color: Color::White,
                kind,
            });
        }
        state
    }

    /// Parses the extended-FEN form produced by `to_fen`:
    /// `<placement> <side> <castling> <reload|-> <reload_turns>`.
    ///
    /// The reload field lists pending timers as `<coord>:<turns>` entries joined
    /// by commas. Panics on malformed input; this is a test and setup tool.
    pub fn from_fen(fen: &str) -> Self {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(parts.len() >= 3, "Invalid FEN: expected at least 3 fields");

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let reload_part = parts.get(3).copied().unwrap_or("-");
        let reload_turns_part = parts.get(4).copied().unwrap_or("1");

        let mut board = [None; 64];
        let rows: Vec<&str> = board_part.split('/').collect();
        assert!(rows.len() == 8, "Invalid FEN board section");

        // Placement is listed from row 0 (black's back rank) downward.
        for (row_idx, row_str) in rows.iter().enumerate() {
            let mut col: i8 = 0;
            let row = row_idx as i8;
            for ch in row_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let piece = Piece::from_char(ch)
                        .unwrap_or_else(|| panic!("Invalid piece char in FEN: {}", ch));
                    let square = sq(row, col).expect("Square out of bounds while parsing FEN");
                    board[square as usize] = Some(piece);
                    col += 1;
                }
                assert!(col <= 8, "Too many columns in FEN row");
            }
            assert!(col == 8, "Not enough columns in FEN row");
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => panic!("Invalid side to move in FEN: {}", stm_part),
        };

        let mut castling = CastlingRights::none();
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => panic!("Invalid castling char in FEN: {}", c),
                }
            }
        }

        let mut reload = ReloadTimers::none();
        if reload_part != "-" {
            for entry in reload_part.split(',') {
                let (coord, turns) = entry
                    .split_once(':')
                    .unwrap_or_else(|| panic!("Invalid reload entry in FEN: {}", entry));
                let square = coord_to_sq(coord)
                    .unwrap_or_else(|| panic!("Invalid reload square in FEN: {}", coord));
                let turns: u8 = turns.parse().expect("Invalid reload turns in FEN");
                reload.set(square, turns);
            }
        }

        let reload_turns: u8 = reload_turns_part
            .parse()
            .expect("Invalid reload duration in FEN");
        assert!(reload_turns > 0, "Reload duration must be positive");

        GameState {
            board,
            side_to_move,
            castling,
            reload,
            reload_turns,
        }
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.board[row * 8 + col] {
                    None => empty += 1,
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if row < 7 {
                fen.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.castling.wk {
            castling.push('K');
        }
        if self.castling.wq {
            castling.push('Q');
        }
        if self.castling.bk {
            castling.push('k');
        }
        if self.castling.bq {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let reload: Vec<String> = self
            .reload
            .pending()
            .map(|(square, turns)| format!("{}:{}", sq_to_coord(square), turns))
            .collect();
        let reload = if reload.is_empty() {
            "-".to_string()
        } else {
            reload.join(",")
        };

        format!("{} {} {} {} {}", fen, side, castling, reload, self.reload_turns)
    }

    pub fn piece_at(&self, square: u8) -> Option<Piece> {
        self.board[square as usize]
    }
    pub fn set_piece(&mut self, square: u8, piece: Option<Piece>) {
        self.board[square as usize] = piece;
    }

    pub fn king_alive(&self, color: Color) -> bool {
        self.board.iter().any(|p| {
            matches!(p, Some(pc) if pc.color == color && pc.kind == PieceKind::King)
        })
    }

    /// Commits a relocation produced by the move generator. Ordinary movement
    /// doubles as capture; a king travelling two columns from its home square
    /// drags the matching rook along (castling).
    pub fn apply_move(&mut self, mv: Move) {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");

        if moved.kind == PieceKind::King && from == king_home(moved.color) {
            if to == from + 2 {
                // Kingside: rook jumps from the h-column to beside the king.
                let rook_from = from + 3;
                let rook_to = from + 1;
                self.board[rook_to as usize] = self.board[rook_from as usize].take();
                self.reload.migrate(rook_from, rook_to);
            } else if to == from - 2 {
                let rook_from = from - 4;
                let rook_to = from - 1;
                self.board[rook_to as usize] = self.board[rook_from as usize].take();
                self.reload.migrate(rook_from, rook_to);
            }
        }

        self.board[to as usize] = self.board[from as usize].take();
        self.reload.migrate(from, to);
        self.update_castling_rights(moved, from);
        self.end_turn();
    }

    /// Commits a shot produced by the move generator: the target square is
    /// cleared, the firer stays put and starts reloading.
    pub fn apply_shot(&mut self, mv: Move) {
        self.board[mv.to as usize] = None;
        self.reload.set(mv.from, self.reload_turns);
        self.end_turn();
    }

    /// Commits either action kind.
    pub fn apply(&mut self, mv: Move) {
        match mv.kind {
            MoveKind::Relocate => self.apply_move(mv),
            MoveKind::Shoot => self.apply_shot(mv),
        }
    }

    // Rights clear when the king moves at all, or when a rook moves out of
    // column 0 or 7. Keyed off the moved piece and its origin column only;
    // losing a rook to a shot leaves the (harmless) right in place.
    fn update_castling_rights(&mut self, moved: Piece, from: u8) {
        match (moved.color, moved.kind) {
            (Color::White, PieceKind::King) => {
                self.castling.wk = false;
                self.castling.wq = false;
            }
            (Color::Black, PieceKind::King) => {
                self.castling.bk = false;
                self.castling.bq = false;
            }
            (Color::White, PieceKind::Rook) => {
                if col_of(from) == 0 {
                    self.castling.wq = false;
                }
                if col_of(from) == 7 {
                    self.castling.wk = false;
                }
            }
            (Color::Black, PieceKind::Rook) => {
                if col_of(from) == 0 {
                    self.castling.bq = false;
                }
                if col_of(from) == 7 {
                    self.castling.bk = false;
                }
            }
            _ => {}
        }
    }

    // Every committed action by either side ends a turn: the other side is to
    // move and all pending reload timers count down once. The timer set by a
    // shot this very turn is decremented too.
    fn end_turn(&mut self) {
        self.side_to_move = self.side_to_move.other();
        self.reload.tick();
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
