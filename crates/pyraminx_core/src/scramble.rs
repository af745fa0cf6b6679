//! Deterministic scramble generation.

use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{Direction, PyraminxState, Section, Twist};

/// Number of twists in a scramble when none is specified.
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 25;

/// Parameters to deterministically generate a twist sequence to scramble a
/// puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Number of twists to generate.
    pub length: u32,
    /// Random seed. The same seed and length always produce the same twists.
    pub seed: String,
}
impl ScrambleParams {
    /// Generates new scramble parameters with a random seed.
    pub fn new(length: u32) -> Self {
        let seed = rand::rng().random::<u64>().to_string();
        Self::with_seed(length, seed)
    }

    /// Constructs scramble parameters with a specific seed.
    pub fn with_seed(length: u32, seed: impl Into<String>) -> Self {
        Self {
            length,
            seed: seed.into(),
        }
    }

    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = sha2::Sha256::new();
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        rand_chacha::ChaCha12Rng::from_seed(sha256.finalize().into())
    }

    /// Generates the scramble twists.
    pub fn twists(&self) -> Vec<Twist> {
        let mut rng = self.rng();
        let twists: Vec<Twist> = (0..self.length)
            .map(|_| {
                let section = Section::ALL[rng.random_range(0..Section::ALL.len())];
                let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
                Twist::new(section, direction)
            })
            .collect();
        log::debug!("generated {} scramble twists from seed {:?}", twists.len(), self.seed);
        twists
    }
}

/// Output of scrambling a puzzle.
#[derive(Debug, Clone)]
pub struct ScrambledPyraminx {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Scramble twists applied.
    pub twists: Vec<Twist>,
    /// State of the puzzle after scrambling.
    pub state: PyraminxState,
}

/// Scrambles a solved puzzle.
pub fn scramble(params: ScrambleParams) -> ScrambledPyraminx {
    PyraminxState::new_scrambled(params)
}
