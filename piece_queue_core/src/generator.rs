use crate::consts;
use crate::piece::{Piece, PieceType};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Produces pieces with uniformly random tags and sequential ids.
pub struct PieceGenerator<R: RngCore> {
    rng: R,
    next_id: u32,
}

impl PieceGenerator<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> PieceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            next_id: consts::FIRST_PIECE_ID,
        }
    }

    /// Id that the next call to [`Self::generate`] will assign.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn generate(&mut self) -> Piece {
        let idx = self.rng.next_u32() as usize % enum_iterator::cardinality::<PieceType>();
        let piece_type = enum_iterator::all::<PieceType>()
            .nth(idx)
            .expect("index is below the type cardinality");
        let piece = Piece::new(piece_type, self.next_id);
        self.next_id += 1;
        log::debug!("Generated piece {piece}");
        piece
    }
}

impl<R: RngCore> Iterator for PieceGenerator<R> {
    type Item = Piece;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}
