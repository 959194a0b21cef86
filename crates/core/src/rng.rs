//! RNG module - seeded piece randomizers
//!
//! Two ways of choosing the next piece kind:
//!
//! - **Uniform**: every draw picks one of the seven kinds independently.
//! - **Bag**: the seven kinds are shuffled into a bag and dealt out before a
//!   fresh bag is shuffled, so droughts are bounded.
//!
//! Both are driven by a small LCG so a game is reproducible from its seed.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Seed 0 is reserved; it maps to 1.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `[0, max)`. `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG have short periods; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Which randomizer a game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    #[default]
    Uniform,
    Bag,
}

impl Randomizer {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::Bag => "bag",
        }
    }
}

/// Endless stream of piece kinds
#[derive(Debug, Clone)]
pub struct PieceSource {
    mode: Randomizer,
    rng: SimpleRng,
    bag: [PieceKind; 7],
    /// Next undealt slot in `bag`; 7 means empty.
    bag_index: usize,
}

impl PieceSource {
    pub fn new(mode: Randomizer, seed: u32) -> Self {
        Self {
            mode,
            rng: SimpleRng::new(seed),
            bag: PieceKind::ALL,
            bag_index: PieceKind::ALL.len(),
        }
    }

    pub fn mode(&self) -> Randomizer {
        self.mode
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        match self.mode {
            Randomizer::Uniform => {
                let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[idx]
            }
            Randomizer::Bag => {
                if self.bag_index >= self.bag.len() {
                    self.bag = PieceKind::ALL;
                    self.rng.shuffle(&mut self.bag);
                    self.bag_index = 0;
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }
}
