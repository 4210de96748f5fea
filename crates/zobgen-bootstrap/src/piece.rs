use std::{
    fmt::{self, Display},
    str::FromStr,
};

#[derive(Eq, Hash, Debug, Clone, Copy, PartialEq)]
/// Represents a type of piece, such as a [pawn](`PieceKind::Pawn`) or a
/// [queen](`PieceKind::Queen`), independent of color.
///
/// The declaration order is the table order: `PieceKind::ALL[kind.index()] ==
/// kind`, values are drawn pawn-first, and the emitted piece table lists its
/// blocks in the same order. Reordering the variants relocates every
/// generated value, so the ordinal is part of the output contract.
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
}

impl PieceKind {
    /// The number of piece kinds.
    pub const COUNT: usize = 6;

    /// Every piece kind, in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Pawn,
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::King,
        Self::Queen,
    ];

    /// The table index of this piece kind.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
        }
        .fmt(f)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("piece kind must be `pawn`, `rook`, `knight`, `bishop`, `king` or `queen`")]
pub struct ParsePieceKindError;

impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "pawn" => PieceKind::Pawn,
            "rook" => PieceKind::Rook,
            "knight" => PieceKind::Knight,
            "bishop" => PieceKind::Bishop,
            "king" => PieceKind::King,
            "queen" => PieceKind::Queen,
            _ => return Err(ParsePieceKindError),
        })
    }
}
