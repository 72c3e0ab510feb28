//! The six hex directions
//!
//! Directions are ordered clockwise starting at north-east. All arithmetic on
//! them wraps modulo 6.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction from a cell towards one of its six neighbors
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HexDirection {
    NE,
    E,
    SE,
    SW,
    W,
    NW,
}

impl HexDirection {
    /// All directions in cyclic order
    pub const ALL: [HexDirection; 6] = [
        HexDirection::NE,
        HexDirection::E,
        HexDirection::SE,
        HexDirection::SW,
        HexDirection::W,
        HexDirection::NW,
    ];

    /// Position of this direction in the cycle (0..6)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index`, wrapping around the cycle
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Counter-clockwise neighbor direction (`previous(NE) == NW`)
    #[inline]
    pub fn previous(self) -> Self {
        Self::from_index(self.index() + 5)
    }

    /// Clockwise neighbor direction (`next(NW) == NE`)
    #[inline]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for HexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HexDirection::NE => "NE",
            HexDirection::E => "E",
            HexDirection::SE => "SE",
            HexDirection::SW => "SW",
            HexDirection::W => "W",
            HexDirection::NW => "NW",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(HexDirection::NE.opposite(), HexDirection::SW);
        assert_eq!(HexDirection::E.opposite(), HexDirection::W);
        assert_eq!(HexDirection::SE.opposite(), HexDirection::NW);
        assert_eq!(HexDirection::NW.opposite(), HexDirection::SE);
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(HexDirection::NE.previous(), HexDirection::NW);
        assert_eq!(HexDirection::NW.next(), HexDirection::NE);
        assert_eq!(HexDirection::from_index(6), HexDirection::NE);
        assert_eq!(HexDirection::from_index(11), HexDirection::NW);
    }

    #[test]
    fn test_cyclicity() {
        for d in HexDirection::ALL {
            assert_eq!(d.previous().next(), d);
            assert_eq!(d.next().previous(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, d) in HexDirection::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(HexDirection::from_index(i), *d);
        }
    }

    #[test]
    fn test_ordering_matches_cycle() {
        assert!(HexDirection::NE < HexDirection::E);
        assert!(HexDirection::SE < HexDirection::SW);
        assert_eq!(HexDirection::W.to_string(), "W");
    }
}
