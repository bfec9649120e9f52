use std::{
    fmt::{self, Display},
    sync::LazyLock,
};

use internment::ArcIntern;
use itertools::Itertools;

use crate::{Direction, ScrambleError};

/// Prefix that marks a move as the reverse of its base move
pub const REVERSE_MARKER: char = '\'';

/// A single puzzle operation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    symbol: ArcIntern<str>,
    direction: Direction,
}

impl Move {
    #[must_use]
    pub fn new(symbol: &str, direction: Direction) -> Move {
        Move {
            symbol: ArcIntern::from(symbol),
            direction,
        }
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The move that undoes this one: the reverse marker is toggled and the direction is flipped
    #[must_use]
    pub fn reversed(&self) -> Move {
        let symbol = match self.symbol.strip_prefix(REVERSE_MARKER) {
            Some(base) => ArcIntern::from(base),
            None => ArcIntern::from(format!("{REVERSE_MARKER}{}", self.symbol()).as_str()),
        };

        Move {
            symbol,
            direction: self.direction.opposite(),
        }
    }

    #[must_use]
    pub fn is_reverse_of(&self, other: &Move) -> bool {
        *self == other.reversed()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

static STANDARD: LazyLock<Vocabulary> = LazyLock::new(|| {
    use Direction::{Clockwise, CounterClockwise, Down, Left, Right, Up};

    Vocabulary {
        moves: [
            ("U", Left),
            ("D", Right),
            ("R", Up),
            ("L", Down),
            ("F", Clockwise),
            ("B", CounterClockwise),
            ("Uw", Left),
            ("Dw", Right),
            ("Rw", Up),
            ("Lw", Down),
            ("Fw", Clockwise),
            ("Bw", CounterClockwise),
            ("X", Up),
            ("Y", Left),
            ("Z", Clockwise),
            ("M", Down),
            ("E", Right),
            ("S", Clockwise),
        ]
        .into_iter()
        .map(|(symbol, direction)| Move::new(symbol, direction))
        .collect(),
    }
});

/// The moves a scramble is drawn from, each in its natural direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    moves: Vec<Move>,
}

impl Vocabulary {
    /// Create a vocabulary from a list of moves
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `moves` is empty
    pub fn new(moves: Vec<Move>) -> Result<Vocabulary, ScrambleError> {
        if moves.is_empty() {
            return Err(ScrambleError::InvalidConfiguration(
                "the move vocabulary is empty",
            ));
        }

        Ok(Vocabulary { moves })
    }

    /// The cube catalog: face turns, wide turns, whole cube rotations and slice moves
    #[must_use]
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Move> {
        self.moves.get(idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

impl Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.moves
                .iter()
                .map(|move_| format!("{move_}:{}", move_.direction()))
                .join(" ")
        )
    }
}
