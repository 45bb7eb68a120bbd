//! Die faces and the rolled-number readout.

use serde::{Deserialize, Serialize};

use crate::core::MoveError;

/// A valid face of a six-sided die, `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// The face that grants another roll.
    pub const SIX: DieFace = DieFace(6);

    /// Create a face, `None` outside `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse the face string a dice collaborator reports.
    ///
    /// ```
    /// use rust_dicerace::dice::DieFace;
    ///
    /// assert_eq!(DieFace::parse("4").unwrap().value(), 4);
    /// assert!(DieFace::parse("").is_err());
    /// assert!(DieFace::parse("7").is_err());
    /// ```
    pub fn parse(face: &str) -> Result<Self, MoveError> {
        face.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| MoveError::InvalidRollFace {
                face: face.to_owned(),
            })
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Text for the rolled-number readout: the face itself when it is a
    /// valid result, `"?"` while rolling or for anything unreadable.
    #[must_use]
    pub fn label(face: &str) -> &str {
        match Self::parse(face) {
            Ok(_) => face.trim(),
            Err(_) => "?",
        }
    }
}

impl TryFrom<u8> for DieFace {
    type Error = MoveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| MoveError::InvalidRollFace {
            face: value.to_string(),
        })
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> Self {
        face.0
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert!(DieFace::new(0).is_none());
        assert!(DieFace::new(7).is_none());
        for v in 1..=6 {
            assert_eq!(DieFace::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn test_parse_rejects_junk() {
        for face in ["", "0", "7", "-1", "six", "1.5", "256"] {
            let err = DieFace::parse(face).unwrap_err();
            assert_eq!(
                err,
                MoveError::InvalidRollFace {
                    face: face.to_string()
                }
            );
        }
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(DieFace::parse(" 3 ").unwrap().value(), 3);
    }

    #[test]
    fn test_label() {
        assert_eq!(DieFace::label("5"), "5");
        assert_eq!(DieFace::label(""), "?");
        assert_eq!(DieFace::label("9"), "?");
        assert_eq!(DieFace::label("x"), "?");
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&DieFace::SIX).unwrap();
        assert_eq!(json, "6");
        assert_eq!(serde_json::from_str::<DieFace>("2").unwrap().value(), 2);
        assert!(serde_json::from_str::<DieFace>("9").is_err());
    }
}
