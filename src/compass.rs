//! Ship headings and their single-character codes.

use core::fmt;

/// Heading of a ship. `Unknown` is what an unrecognized code decodes to and
/// is never accepted as a placement heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    North,
    South,
    East,
    West,
    Unknown,
}

impl Compass {
    /// The four placement headings.
    pub const ALL: [Compass; 4] = [Compass::North, Compass::South, Compass::East, Compass::West];

    /// Character code of the heading. West is `'o'` (oeste).
    pub const fn direction(self) -> char {
        match self {
            Compass::North => 'n',
            Compass::South => 's',
            Compass::East => 'e',
            Compass::West => 'o',
            Compass::Unknown => 'u',
        }
    }

    /// Decode a character code; anything outside `n`, `s`, `e`, `o` is
    /// `Unknown`. Case-sensitive.
    pub const fn from_char(c: char) -> Compass {
        match c {
            'n' => Compass::North,
            's' => Compass::South,
            'e' => Compass::East,
            'o' => Compass::West,
            _ => Compass::Unknown,
        }
    }

    pub fn is_known(self) -> bool {
        self != Compass::Unknown
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.direction())
    }
}
