use rand::{distributions::Standard, prelude::Distribution, Rng};

use crate::{Color, PieceKind};

/// One key for every (piece kind, square, color) triple, indexed as
/// `[kind.index()][square][color.index()]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristPieces(pub [[[u64; Color::COUNT]; 64]; PieceKind::COUNT]);

impl Distribution<ZobristPieces> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ZobristPieces {
        let mut table = [[[0u64; Color::COUNT]; 64]; PieceKind::COUNT];

        // The nesting is the draw order: kinds pawn-first, squares ascending,
        // white before black. Which value lands in which slot depends on
        // nothing else, so this must not be rearranged.
        for kind in PieceKind::ALL {
            for square in 0..64 {
                for color in Color::ALL {
                    table[kind.index()][square][color.index()] = rng.gen();
                }
            }
        }

        ZobristPieces(table)
    }
}

/// One key per castling-rights configuration, indexed by the rights bitmask
/// (king-side and queen-side for each color, so 2^4 configurations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristCastlingRights(pub [u64; 16]);

impl Distribution<ZobristCastlingRights> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ZobristCastlingRights {
        ZobristCastlingRights(rng.gen())
    }
}

/// One key per square eligible for an en-passant capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristEnPassant(pub [u64; 64]);

impl Distribution<ZobristEnPassant> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ZobristEnPassant {
        ZobristEnPassant(rng.gen())
    }
}

/// The full set of keys drawn by one generation run: 768 piece keys, then 16
/// castling keys, then 64 en-passant keys, 848 draws in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristMap {
    pub pieces: ZobristPieces,
    pub castling_rights: ZobristCastlingRights,
    pub en_passant: ZobristEnPassant,
}

impl Distribution<ZobristMap> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ZobristMap {
        // Field order here is draw order.
        ZobristMap {
            pieces: rng.gen(),
            castling_rights: rng.gen(),
            en_passant: rng.gen(),
        }
    }
}

impl ZobristMap {
    /// Every key of the map, flattened in draw order.
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.pieces
            .0
            .iter()
            .flatten()
            .flatten()
            .copied()
            .chain(self.castling_rights.0)
            .chain(self.en_passant.0)
    }
}
