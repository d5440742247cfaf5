//! RNG module - random piece selection
//!
//! Pieces are drawn uniformly from the seven kinds using a small LCG, so a
//! given seed always replays the same game. A fixed cycle of kinds is also
//! available for scripted play.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max.max(1)
    }
}

#[derive(Debug, Clone)]
enum Mode {
    Uniform(SimpleRng),
    Cycle { kinds: Vec<PieceKind>, next: usize },
}

/// Source of the next piece kind to spawn
#[derive(Debug, Clone)]
pub struct PieceSource {
    mode: Mode,
}

impl PieceSource {
    /// Uniform random kinds from a seed
    pub fn uniform(seed: u32) -> Self {
        Self {
            mode: Mode::Uniform(SimpleRng::new(seed)),
        }
    }

    /// Repeat the given kinds in order. An empty list cycles all seven.
    pub fn cycle(kinds: &[PieceKind]) -> Self {
        let kinds = if kinds.is_empty() {
            PieceKind::ALL.to_vec()
        } else {
            kinds.to_vec()
        };
        Self {
            mode: Mode::Cycle { kinds, next: 0 },
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match &mut self.mode {
            Mode::Uniform(rng) => {
                let i = rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[i]
            }
            Mode::Cycle { kinds, next } => {
                let kind = kinds[*next % kinds.len()];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::uniform(1)
    }
}
