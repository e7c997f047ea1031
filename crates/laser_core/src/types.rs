#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Case-coded letter encoding: uppercase = white, lowercase = black.
    pub fn to_char(self) -> char {
        let ch = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        let color = if ch.is_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Piece { color, kind })
    }
}

/// One committed action: relocate (ordinary move, capture, castling) or shoot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    Relocate,
    Shoot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub kind: MoveKind,
}

impl Move {
    pub fn relocate(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Relocate,
        }
    }
    pub fn shot(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            kind: MoveKind::Shoot,
        }
    }
}

// Helpers. Row 0 is black's back rank, row 7 is white's back rank.
pub fn row_of(square: u8) -> i8 {
    (square / 8) as i8
}
pub fn col_of(square: u8) -> i8 {
    (square % 8) as i8
}
pub fn sq(row: i8, col: i8) -> Option<u8> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as u8) * 8 + (col as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(square: u8) -> String {
    let f = (b'a' + (square % 8)) as char;
    let r = (b'0' + (8 - square / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let col = f - b'a';
    let row = 8 - (r - b'0');
    Some(row * 8 + col)
}
