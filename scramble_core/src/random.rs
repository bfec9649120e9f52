//! Sources of randomness for the generator.
//!
//! The generator only ever asks two questions: which vocabulary index to draw, and whether to
//! reverse the drawn move. Production code answers them with an unseeded `fastrand` generator;
//! tests answer them from a script so that a run can be replayed exactly.

/// The randomness the generator consumes
///
/// # Panics
///
/// `ScrambleGenerator::generate` panics if `index` returns a value outside `0..len`
pub trait RandomSource {
    /// A uniformly chosen index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// A fair coin flip
    fn coin_flip(&mut self) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Randomness from a `fastrand` generator
#[derive(Debug, Clone)]
pub struct FastrandSource {
    rng: fastrand::Rng,
}

impl FastrandSource {
    /// Seeded from process entropy, so every run differs
    #[must_use]
    pub fn new() -> FastrandSource {
        FastrandSource {
            rng: fastrand::Rng::new(),
        }
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> FastrandSource {
        FastrandSource {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastrandSource {
    fn default() -> Self {
        FastrandSource::new()
    }
}

impl RandomSource for FastrandSource {
    fn index(&mut self, len: usize) -> usize {
        self.rng.usize(..len)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.bool()
    }
}

/// Replays fixed draws. Once a script is used up its last value repeats forever.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    indices: Vec<usize>,
    flips: Vec<bool>,
    next_index: usize,
    next_flip: usize,
}

impl ScriptedSource {
    /// # Panics
    ///
    /// Panics if either script is empty
    #[must_use]
    pub fn new(indices: Vec<usize>, flips: Vec<bool>) -> ScriptedSource {
        assert!(!indices.is_empty(), "The index script must not be empty");
        assert!(!flips.is_empty(), "The coin flip script must not be empty");

        ScriptedSource {
            indices,
            flips,
            next_index: 0,
            next_flip: 0,
        }
    }

    /// How many index draws have been made so far
    #[must_use]
    pub fn draws(&self) -> usize {
        self.next_index
    }
}

impl RandomSource for ScriptedSource {
    fn index(&mut self, len: usize) -> usize {
        let idx = self.indices[self.next_index.min(self.indices.len() - 1)];
        self.next_index += 1;

        assert!(idx < len, "Scripted index {idx} is out of range for {len} moves");

        idx
    }

    fn coin_flip(&mut self) -> bool {
        let flip = self.flips[self.next_flip.min(self.flips.len() - 1)];
        self.next_flip += 1;
        flip
    }
}
