use std::fmt::{self, Display};

use itertools::Itertools;
use log::{debug, trace};

use crate::{Direction, Move, RandomSource, ScrambleError, Vocabulary};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Consecutive identical moves are folded into one entry at most this many times
pub const MAX_REPEAT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// How many candidates a single slot may draw before generation gives up
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// A move in a scramble along with how many times in a row it is performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleEntry {
    move_: Move,
    repeat_count: u8,
}

impl ScrambleEntry {
    fn new(move_: Move) -> ScrambleEntry {
        ScrambleEntry {
            move_,
            repeat_count: 1,
        }
    }

    #[must_use]
    pub fn move_(&self) -> &Move {
        &self.move_
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        self.move_.symbol()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.move_.direction()
    }

    #[must_use]
    pub fn repeat_count(&self) -> u8 {
        self.repeat_count
    }

    #[must_use]
    pub fn is_doubled(&self) -> bool {
        self.repeat_count > 1
    }

    /// The prefix displayed before the symbol
    #[must_use]
    pub fn annotation(&self) -> &'static str {
        if self.is_doubled() { "2x " } else { "" }
    }
}

impl Display for ScrambleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.annotation(), self.move_)
    }
}

/// A generated sequence of moves, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scramble {
    entries: Vec<ScrambleEntry>,
    slots: usize,
}

impl Scramble {
    /// The number of generation slots that were filled. Consolidated moves fill a slot without
    /// adding an entry.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently generated entry
    #[must_use]
    pub fn top(&self) -> Option<&ScrambleEntry> {
        self.entries.last()
    }

    pub fn pop(&mut self) -> Option<ScrambleEntry> {
        self.entries.pop()
    }

    #[must_use]
    pub fn entries(&self) -> &[ScrambleEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScrambleEntry> {
        self.entries.iter()
    }

    fn push(&mut self, move_: Move) {
        self.entries.push(ScrambleEntry::new(move_));
        self.slots += 1;
    }

    fn consolidate_top(&mut self) {
        if let Some(top) = self.entries.last_mut() {
            top.repeat_count += 1;
            self.slots += 1;
        }
    }
}

impl IntoIterator for Scramble {
    type Item = ScrambleEntry;
    type IntoIter = std::vec::IntoIter<ScrambleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Scramble {
    type Item = &'a ScrambleEntry;
    type IntoIter = std::slice::Iter<'a, ScrambleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.iter().join(" "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Accept,
    Consolidate,
    Reject,
}

fn judge(top: Option<&ScrambleEntry>, candidate: &Move) -> Verdict {
    let Some(top) = top else {
        return Verdict::Accept;
    };

    if top.move_ == *candidate {
        if top.repeat_count < MAX_REPEAT {
            Verdict::Consolidate
        } else {
            Verdict::Reject
        }
    } else if candidate.is_reverse_of(&top.move_) {
        Verdict::Reject
    } else {
        Verdict::Accept
    }
}

/// Draws scrambles from a vocabulary
pub struct ScrambleGenerator<'v, R> {
    vocabulary: &'v Vocabulary,
    config: GeneratorConfig,
    rng: R,
}

impl<'v, R: RandomSource> ScrambleGenerator<'v, R> {
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the config allows no attempts per slot
    pub fn new(
        vocabulary: &'v Vocabulary,
        config: GeneratorConfig,
        rng: R,
    ) -> Result<ScrambleGenerator<'v, R>, ScrambleError> {
        if config.max_attempts == 0 {
            return Err(ScrambleError::InvalidConfiguration(
                "at least one attempt per slot is required",
            ));
        }

        Ok(ScrambleGenerator {
            vocabulary,
            config,
            rng,
        })
    }

    /// Generate a scramble that fills `count` slots.
    ///
    /// Each candidate is drawn uniformly from the vocabulary and reversed on a coin flip. It is
    /// then checked against the last entry only: an identical move doubles that entry, a move that
    /// undoes it is redrawn, and anything else is appended.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `count` is zero, and `GenerationExhausted` if some slot
    /// draws `max_attempts` candidates without one being usable. No partial scramble is returned.
    ///
    /// # Panics
    ///
    /// Panics if the random source returns an index outside the vocabulary
    pub fn generate(&mut self, count: usize) -> Result<Scramble, ScrambleError> {
        if count == 0 {
            return Err(ScrambleError::InvalidConfiguration(
                "a scramble needs at least one move",
            ));
        }

        let mut scramble = Scramble {
            entries: Vec::with_capacity(count),
            slots: 0,
        };

        'slots: for slot in 1..=count {
            for attempt in 1..=self.config.max_attempts {
                let candidate = self.draw();

                match judge(scramble.top(), &candidate) {
                    Verdict::Accept => {
                        trace!("Slot {slot}: accepted {candidate} on attempt {attempt}");
                        scramble.push(candidate);
                        continue 'slots;
                    }
                    Verdict::Consolidate => {
                        trace!("Slot {slot}: doubled {candidate} on attempt {attempt}");
                        scramble.consolidate_top();
                        continue 'slots;
                    }
                    Verdict::Reject => {
                        trace!("Slot {slot}: rejected {candidate}");
                    }
                }
            }

            debug!(
                "Slot {slot} exhausted {} attempts after {}",
                self.config.max_attempts, scramble
            );

            return Err(ScrambleError::GenerationExhausted {
                slot,
                attempts: self.config.max_attempts,
            });
        }

        debug!(
            "Generated {} entries over {} slots: {scramble}",
            scramble.len(),
            scramble.slots()
        );

        Ok(scramble)
    }

    fn draw(&mut self) -> Move {
        let idx = self.rng.index(self.vocabulary.len());
        let move_ = self.vocabulary.get(idx).unwrap_or_else(|| {
            panic!(
                "Random source produced index {idx} for {} moves",
                self.vocabulary.len()
            )
        });

        if self.rng.coin_flip() {
            move_.reversed()
        } else {
            move_.clone()
        }
    }
}
