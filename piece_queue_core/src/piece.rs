use enum_iterator::Sequence;
use std::fmt::{Display, Formatter};

/// Type tag of an upcoming piece.
#[derive(Copy, Clone, Sequence, PartialEq, Eq, Hash, Debug)]
pub enum PieceType {
    I,
    O,
    T,
    L,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub piece_type: PieceType,
    pub id: u32,
}

impl PieceType {
    pub fn tag(&self) -> char {
        match self {
            Self::I => 'I',
            Self::O => 'O',
            Self::T => 'T',
            Self::L => 'L',
        }
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl Piece {
    pub fn new(piece_type: PieceType, id: u32) -> Self {
        Self { piece_type, id }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}]", self.piece_type, self.id)
    }
}
