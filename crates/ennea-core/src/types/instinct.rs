//! Instinctual variants and dominance stacks.
//!
//! A stack names the dominant and secondary instinct; the third, unmentioned
//! instinct is the blind spot. Blind spots are derived, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One of the three instinctual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InstinctType {
    /// Self-preservation ("sp"): safety, comfort, material security.
    #[serde(rename = "sp")]
    SelfPreservation,
    /// Social ("so"): belonging, group standing, shared purpose.
    #[serde(rename = "so")]
    Social,
    /// Sexual/one-to-one ("sx"): intensity, chemistry, deep bonds.
    #[serde(rename = "sx")]
    Sexual,
}

impl InstinctType {
    /// Returns the two-letter code used in stack notation.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::SelfPreservation => "sp",
            Self::Social => "so",
            Self::Sexual => "sx",
        }
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelfPreservation => "Self-Preservation",
            Self::Social => "Social",
            Self::Sexual => "Sexual",
        }
    }

    /// Parses a two-letter code; `None` for anything unrecognized.
    pub fn from_code(code: &str) -> Option<InstinctType> {
        match code {
            "sp" => Some(Self::SelfPreservation),
            "so" => Some(Self::Social),
            "sx" => Some(Self::Sexual),
            _ => None,
        }
    }

    /// Returns all three instincts in sp/so/sx order.
    #[inline]
    pub fn all() -> [InstinctType; 3] {
        [Self::SelfPreservation, Self::Social, Self::Sexual]
    }
}

impl fmt::Display for InstinctType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An ordered pair of distinct instincts: dominant first, secondary second.
///
/// Serialized as `"dominant/secondary"` (e.g. `"sp/so"`). Order matters:
/// `"sp/so"` and `"so/sp"` are different stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstinctStack {
    pub dominant: InstinctType,
    pub secondary: InstinctType,
}

impl InstinctStack {
    /// Creates a stack from two distinct instincts.
    ///
    /// Fails with [`CoreError::MalformedInstinctStack`] when the two
    /// instincts are the same: a stack must leave exactly one instinct out.
    pub fn new(dominant: InstinctType, secondary: InstinctType) -> Result<Self, CoreError> {
        if dominant == secondary {
            return Err(CoreError::MalformedInstinctStack {
                input: format!("{}/{}", dominant, secondary),
            });
        }
        Ok(Self { dominant, secondary })
    }

    /// Returns the blind spot: the unique instinct not present in the stack.
    ///
    /// Total by construction - a 2-of-3 stack always leaves exactly one
    /// instinct out.
    pub fn blind_spot(&self) -> InstinctType {
        InstinctType::all()
            .into_iter()
            .find(|i| *i != self.dominant && *i != self.secondary)
            .unwrap_or(InstinctType::SelfPreservation)
    }
}

impl FromStr for InstinctStack {
    type Err = CoreError;

    /// Parses `"dominant/secondary"` notation.
    ///
    /// Fails with [`CoreError::MalformedInstinctStack`] unless the string
    /// splits on `/` into exactly two distinct known codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoreError::MalformedInstinctStack {
            input: s.to_string(),
        };

        let mut parts = s.split('/');
        let dominant = parts
            .next()
            .and_then(InstinctType::from_code)
            .ok_or_else(malformed)?;
        let secondary = parts
            .next()
            .and_then(InstinctType::from_code)
            .ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        Self::new(dominant, secondary).map_err(|_| malformed())
    }
}

impl fmt::Display for InstinctStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.dominant, self.secondary)
    }
}

/// Curated prose for one dominance stack, keyed by the exact ordered pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackDescription {
    pub dominant: InstinctType,
    pub secondary: InstinctType,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for instinct in InstinctType::all() {
            assert_eq!(InstinctType::from_code(instinct.code()), Some(instinct));
        }
        assert_eq!(InstinctType::from_code("xx"), None);
    }

    #[test]
    fn test_parse_valid_stack() {
        let stack: InstinctStack = "sp/so".parse().unwrap();
        assert_eq!(stack.dominant, InstinctType::SelfPreservation);
        assert_eq!(stack.secondary, InstinctType::Social);
    }

    #[test]
    fn test_parse_rejects_wrong_separator() {
        assert!("sp-so".parse::<InstinctStack>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        assert!("sp/zz".parse::<InstinctStack>().is_err());
        assert!("zz/so".parse::<InstinctStack>().is_err());
    }

    #[test]
    fn test_parse_rejects_extra_segments() {
        assert!("sp/so/sx".parse::<InstinctStack>().is_err());
    }

    #[test]
    fn test_parse_rejects_duplicate_instinct() {
        assert!("sp/sp".parse::<InstinctStack>().is_err());
    }

    #[test]
    fn test_blind_spot_is_total_over_all_six_stacks() {
        let cases = [
            ("sp/so", InstinctType::Sexual),
            ("so/sp", InstinctType::Sexual),
            ("sp/sx", InstinctType::Social),
            ("sx/sp", InstinctType::Social),
            ("so/sx", InstinctType::SelfPreservation),
            ("sx/so", InstinctType::SelfPreservation),
        ];
        for (input, expected) in cases {
            let stack: InstinctStack = input.parse().unwrap();
            assert_eq!(stack.blind_spot(), expected, "blind spot of {}", input);
        }
    }

    #[test]
    fn test_display_roundtrip() {
        let stack: InstinctStack = "sx/sp".parse().unwrap();
        assert_eq!(stack.to_string(), "sx/sp");
    }

    #[test]
    fn test_serde_uses_short_codes() {
        let json = serde_json::to_string(&InstinctType::SelfPreservation).unwrap();
        assert_eq!(json, "\"sp\"");
        let parsed: InstinctType = serde_json::from_str("\"sx\"").unwrap();
        assert_eq!(parsed, InstinctType::Sexual);
    }
}
