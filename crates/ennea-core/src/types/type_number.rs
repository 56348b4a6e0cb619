//! Primary type identifiers, centers, and the fixed wheel relations.
//!
//! The nine types, their three centers, and the directed growth/stress
//! arrows are closed reference data. Every relation here is a total
//! function over [`TypeNumber`]; nothing is looked up at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// One of the nine primary types.
///
/// `TypeNumber` is the only primary key for individual-type data. The set is
/// closed; values outside {1..9} are rejected at the `TryFrom<u8>` boundary
/// and cannot be represented.
///
/// # Example
/// ```
/// use ennea_core::types::{Center, TypeNumber};
///
/// let four = TypeNumber::Four;
/// assert_eq!(four.number(), 4);
/// assert_eq!(four.center(), Center::Heart);
/// assert_eq!(four.integration(), TypeNumber::One);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TypeNumber {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
}

impl TypeNumber {
    /// Returns the numeric identifier (1-9).
    #[inline]
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Returns the canonical name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            Self::One => "The Reformer",
            Self::Two => "The Helper",
            Self::Three => "The Achiever",
            Self::Four => "The Individualist",
            Self::Five => "The Investigator",
            Self::Six => "The Loyalist",
            Self::Seven => "The Enthusiast",
            Self::Eight => "The Challenger",
            Self::Nine => "The Peacemaker",
        }
    }

    /// Returns the center of intelligence this type belongs to.
    ///
    /// Each type belongs to exactly one center; each center contains
    /// exactly three types.
    pub fn center(&self) -> Center {
        match self {
            Self::Five | Self::Six | Self::Seven => Center::Head,
            Self::Two | Self::Three | Self::Four => Center::Heart,
            Self::Eight | Self::Nine | Self::One => Center::Gut,
        }
    }

    /// Returns the type this one moves toward in growth (integration).
    ///
    /// The arrow is directed: `One.integration() == Seven` does not imply
    /// `Seven.integration() == One`.
    pub fn integration(&self) -> TypeNumber {
        match self {
            Self::One => Self::Seven,
            Self::Two => Self::Four,
            Self::Three => Self::Six,
            Self::Four => Self::One,
            Self::Five => Self::Eight,
            Self::Six => Self::Nine,
            Self::Seven => Self::Five,
            Self::Eight => Self::Two,
            Self::Nine => Self::Three,
        }
    }

    /// Returns the type this one moves toward under stress (disintegration).
    pub fn disintegration(&self) -> TypeNumber {
        match self {
            Self::One => Self::Four,
            Self::Two => Self::Eight,
            Self::Three => Self::Nine,
            Self::Four => Self::Two,
            Self::Five => Self::Seven,
            Self::Six => Self::Three,
            Self::Seven => Self::One,
            Self::Eight => Self::Five,
            Self::Nine => Self::Six,
        }
    }

    /// Returns true if the two types sit next to each other on the wheel.
    ///
    /// Adjacency is symmetric: numeric difference of 1, or the {1,9} pair
    /// (the wheel wraps).
    pub fn is_adjacent_to(&self, other: TypeNumber) -> bool {
        let (a, b) = (self.number(), other.number());
        a.abs_diff(b) == 1 || (a.min(b) == 1 && a.max(b) == 9)
    }

    /// Returns both wheel neighbours (the wing positions), lower wrap first.
    ///
    /// ```
    /// use ennea_core::types::TypeNumber;
    ///
    /// assert_eq!(TypeNumber::One.wings(), (TypeNumber::Nine, TypeNumber::Two));
    /// assert_eq!(TypeNumber::Nine.wings(), (TypeNumber::Eight, TypeNumber::One));
    /// ```
    pub fn wings(&self) -> (TypeNumber, TypeNumber) {
        match self {
            Self::One => (Self::Nine, Self::Two),
            Self::Two => (Self::One, Self::Three),
            Self::Three => (Self::Two, Self::Four),
            Self::Four => (Self::Three, Self::Five),
            Self::Five => (Self::Four, Self::Six),
            Self::Six => (Self::Five, Self::Seven),
            Self::Seven => (Self::Six, Self::Eight),
            Self::Eight => (Self::Seven, Self::Nine),
            Self::Nine => (Self::Eight, Self::One),
        }
    }

    /// Returns all nine types in numeric order.
    #[inline]
    pub fn all() -> [TypeNumber; 9] {
        [
            Self::One,
            Self::Two,
            Self::Three,
            Self::Four,
            Self::Five,
            Self::Six,
            Self::Seven,
            Self::Eight,
            Self::Nine,
        ]
    }
}

impl TryFrom<u8> for TypeNumber {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            7 => Ok(Self::Seven),
            8 => Ok(Self::Eight),
            9 => Ok(Self::Nine),
            other => Err(CoreError::InvalidTypeNumber(other)),
        }
    }
}

impl From<TypeNumber> for u8 {
    fn from(value: TypeNumber) -> Self {
        value.number()
    }
}

impl fmt::Display for TypeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One of the three centers of intelligence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Center {
    /// Thinking center: types 5, 6, 7.
    Head,
    /// Feeling center: types 2, 3, 4.
    Heart,
    /// Instinctive center: types 8, 9, 1.
    Gut,
}

impl Center {
    /// Returns the three types belonging to this center, in canonical
    /// tritype-digit order.
    pub fn types(&self) -> [TypeNumber; 3] {
        match self {
            Self::Head => [TypeNumber::Five, TypeNumber::Six, TypeNumber::Seven],
            Self::Heart => [TypeNumber::Two, TypeNumber::Three, TypeNumber::Four],
            Self::Gut => [TypeNumber::Eight, TypeNumber::Nine, TypeNumber::One],
        }
    }

    /// Returns all centers in canonical head/heart/gut order.
    #[inline]
    pub fn all() -> [Center; 3] {
        [Self::Head, Self::Heart, Self::Gut]
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Head => "head",
            Self::Heart => "heart",
            Self::Gut => "gut",
        };
        write!(f, "{}", s)
    }
}
