//! Bag module - 7-bag random piece generation
//!
//! Each bag holds one of every piece kind in a uniformly shuffled order and is
//! drawn until empty, then refilled and reshuffled. Any 7 draws starting at a
//! bag boundary contain each kind exactly once; a kind may still appear at the
//! end of one bag and again at the start of the next.
//!
//! A seeded bag replays the same sequence, which the tests and replays rely on.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct Bag {
    /// Kinds left in the current bag; drawn from the back
    remaining: Vec<PieceKind>,
    rng: StdRng,
}

impl Bag {
    /// Create a bag with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a bag seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            remaining: Vec::with_capacity(PieceKind::ALL.len()),
            rng,
        }
    }

    /// Refill with all 7 kinds and shuffle
    fn refill(&mut self) {
        self.remaining.clear();
        self.remaining.extend_from_slice(&PieceKind::ALL);
        self.remaining.shuffle(&mut self.rng);
    }

    /// Draw the next piece, refilling the bag when it is empty
    pub fn next(&mut self) -> PieceKind {
        if self.remaining.is_empty() {
            self.refill();
        }
        match self.remaining.pop() {
            Some(kind) => kind,
            // refill() always leaves 7 kinds behind
            None => unreachable!("bag refilled but empty"),
        }
    }

    /// Kinds still waiting in the current bag
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}
