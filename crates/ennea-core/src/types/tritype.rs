//! Tritype codes: one type drawn from each center, in fixed order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::{Center, TypeNumber};

/// A three-digit code naming one type per center, in head/heart/gut order.
///
/// Construction through [`TritypeCode::compose`] enforces center membership
/// (head digit from {5,6,7}, heart from {2,3,4}, gut from {8,9,1}); parsing
/// with `FromStr` deliberately does not - see [`TritypeCode::decompose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TritypeCode {
    head: TypeNumber,
    heart: TypeNumber,
    gut: TypeNumber,
}

impl TritypeCode {
    /// Composes a code from one type per center.
    ///
    /// Fails with [`CoreError::InvalidTritypeComposition`] unless each type
    /// belongs to the center implied by its position. This is the only path
    /// that can receive untrusted input in practice; curated codes are
    /// pre-validated.
    pub fn compose(
        head: TypeNumber,
        heart: TypeNumber,
        gut: TypeNumber,
    ) -> Result<Self, CoreError> {
        for (position, type_number) in [
            (Center::Head, head),
            (Center::Heart, heart),
            (Center::Gut, gut),
        ] {
            if type_number.center() != position {
                return Err(CoreError::InvalidTritypeComposition {
                    position,
                    type_number,
                });
            }
        }
        Ok(Self { head, heart, gut })
    }

    /// Returns the (head, heart, gut) triple.
    ///
    /// Infallible and center-unchecked by design: stored and curated codes
    /// are trusted as pre-validated, so no center membership re-check is
    /// performed here. Callers must not rely on this method for validation
    /// of user-supplied input - that is what [`TritypeCode::compose`] is for.
    #[inline]
    pub fn decompose(&self) -> (TypeNumber, TypeNumber, TypeNumber) {
        (self.head, self.heart, self.gut)
    }

    /// The head-center digit.
    #[inline]
    pub fn head(&self) -> TypeNumber {
        self.head
    }

    /// The heart-center digit.
    #[inline]
    pub fn heart(&self) -> TypeNumber {
        self.heart
    }

    /// The gut-center digit.
    #[inline]
    pub fn gut(&self) -> TypeNumber {
        self.gut
    }
}

impl FromStr for TritypeCode {
    type Err = CoreError;

    /// Parses three ASCII digits into type numbers.
    ///
    /// Only digit validity is checked; center membership is not re-validated
    /// (curated codes are trusted). Non-digit characters or a length other
    /// than 3 fail with [`CoreError::MalformedTritypeCode`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoreError::MalformedTritypeCode {
            input: s.to_string(),
        };

        let digits: Vec<TypeNumber> = s
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .and_then(|d| TypeNumber::try_from(d as u8).ok())
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(malformed)?;

        match digits.as_slice() {
            [head, heart, gut] => Ok(Self {
                head: *head,
                heart: *heart,
                gut: *gut,
            }),
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<String> for TritypeCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TritypeCode> for String {
    fn from(code: TritypeCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for TritypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.head, self.heart, self.gut)
    }
}

/// A curated tritype profile from the archetype catalogue.
///
/// Only archetypal examples are catalogued, not all 27 possible codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tritype {
    pub code: TritypeCode,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_valid() {
        let code =
            TritypeCode::compose(TypeNumber::Five, TypeNumber::Two, TypeNumber::Eight).unwrap();
        assert_eq!(code.to_string(), "528");
    }

    #[test]
    fn test_compose_rejects_wrong_centers() {
        // 2 is a heart type and cannot sit in the head position.
        let err =
            TritypeCode::compose(TypeNumber::Two, TypeNumber::Five, TypeNumber::Eight).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidTritypeComposition {
                position: Center::Head,
                type_number: TypeNumber::Two,
            }
        ));
    }

    #[test]
    fn test_compose_checks_each_position() {
        assert!(TritypeCode::compose(TypeNumber::Five, TypeNumber::Eight, TypeNumber::One).is_err());
        assert!(TritypeCode::compose(TypeNumber::Five, TypeNumber::Two, TypeNumber::Three).is_err());
    }

    #[test]
    fn test_roundtrip_all_valid_compositions() {
        for head in Center::Head.types() {
            for heart in Center::Heart.types() {
                for gut in Center::Gut.types() {
                    let code = TritypeCode::compose(head, heart, gut).unwrap();
                    assert_eq!(code.decompose(), (head, heart, gut));

                    let reparsed: TritypeCode = code.to_string().parse().unwrap();
                    assert_eq!(reparsed, code);
                }
            }
        }
    }

    #[test]
    fn test_parse_does_not_recheck_centers() {
        // "258" has every digit in the wrong position; parse trusts it.
        let code: TritypeCode = "258".parse().unwrap();
        assert_eq!(
            code.decompose(),
            (TypeNumber::Two, TypeNumber::Five, TypeNumber::Eight)
        );
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!("5a8".parse::<TritypeCode>().is_err());
        assert!("".parse::<TritypeCode>().is_err());
        assert!("5289".parse::<TritypeCode>().is_err());
        assert!("52".parse::<TritypeCode>().is_err());
    }

    #[test]
    fn test_parse_rejects_zero_digit() {
        assert!("508".parse::<TritypeCode>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let code: TritypeCode = "638".parse().unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"638\"");
        let parsed: TritypeCode = serde_json::from_str("\"638\"").unwrap();
        assert_eq!(parsed, code);
    }
}
