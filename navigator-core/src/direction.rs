//! Canonical directions assigned to reference route steps.
//!
//! # Examples
//! ```
//! use navigator_core::Direction;
//!
//! assert_eq!(Direction::from_instruction("turn left onto north street"), Direction::Left);
//! assert_eq!(Direction::North.to_string(), "north");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The single direction a reference step is reduced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// A left turn.
    Left,
    /// A right turn.
    Right,
    /// Carry straight on.
    Straight,
    /// Head north.
    North,
    /// Head south.
    South,
    /// Head east.
    East,
    /// Head west.
    West,
    /// No recognised direction.
    Unknown,
}

/// Instruction phrases checked in order; the first hit decides the direction.
const PRECEDENCE: [(&[&str], Direction); 7] = [
    (&["turn left", "left"], Direction::Left),
    (&["turn right", "right"], Direction::Right),
    (&["straight", "continue"], Direction::Straight),
    (&["north"], Direction::North),
    (&["south"], Direction::South),
    (&["east"], Direction::East),
    (&["west"], Direction::West),
];

impl Direction {
    /// Classify a lowercased instruction.
    ///
    /// Turn words take precedence over cardinal words, so
    /// `"turn left onto north street"` is [`Direction::Left`].
    #[must_use]
    pub fn from_instruction(instruction: &str) -> Self {
        PRECEDENCE
            .iter()
            .find(|(phrases, _)| phrases.iter().any(|phrase| instruction.contains(phrase)))
            .map_or(Self::Unknown, |(_, direction)| *direction)
    }

    /// Return the direction as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Straight => "straight",
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Unknown => "unknown",
        }
    }

    /// Report whether the direction carries any information.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
