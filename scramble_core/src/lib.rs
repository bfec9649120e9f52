#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]

pub mod direction;
mod error;
pub mod generator;
pub mod moves;
pub mod random;

pub use direction::{Axis, Direction};
pub use error::ScrambleError;
pub use generator::{GeneratorConfig, Scramble, ScrambleEntry, ScrambleGenerator};
pub use moves::{Move, Vocabulary};
pub use random::{FastrandSource, RandomSource, ScriptedSource};

/// Generate a scramble of `count` slots from the standard vocabulary using an unseeded random
/// source
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `count` is zero and `GenerationExhausted` if a slot runs out
/// of attempts
pub fn generate(count: usize) -> Result<Scramble, ScrambleError> {
    ScrambleGenerator::new(
        Vocabulary::standard(),
        GeneratorConfig::default(),
        FastrandSource::new(),
    )?
    .generate(count)
}

#[cfg(test)]
mod tests {
    use crate::generate;

    #[test_log::test]
    fn standard_generation() {
        let scramble = generate(15).unwrap();
        assert_eq!(scramble.slots(), 15);
        assert!(!scramble.is_empty());
        assert!(scramble.len() <= 15);
    }

    #[test_log::test]
    fn zero_count_is_rejected() {
        assert!(generate(0).is_err());
    }
}
