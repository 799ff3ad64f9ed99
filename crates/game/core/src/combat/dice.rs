//! `NdM` damage expressions.

use std::fmt;
use std::str::FromStr;

/// Upper bound on dice per expression; larger counts are treated as malformed.
pub const MAX_DICE: u32 = 100;

/// Upper bound on faces per die.
pub const MAX_SIDES: u32 = 1000;

/// Parsed `NdM` expression: roll `count` dice with `sides` faces and sum them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageDice {
    pub count: u32,
    pub sides: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    #[error("damage dice '{0}' is not in NdM form")]
    Malformed(String),

    #[error("damage dice '{0}' must have at least one die with at least one face")]
    Empty(String),

    #[error("damage dice '{0}' rolls more than {MAX_DICE} dice")]
    TooMany(String),

    #[error("damage dice '{0}' has more than {MAX_SIDES} faces")]
    TooManySides(String),
}

impl crate::error::GameError for DiceError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "DICE_MALFORMED",
            Self::Empty(_) => "DICE_EMPTY",
            Self::TooMany(_) => "DICE_TOO_MANY",
            Self::TooManySides(_) => "DICE_TOO_MANY_SIDES",
        }
    }
}

impl DamageDice {
    pub const fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }

    /// Parses `expr`, falling back to `fallback` when it is malformed.
    pub fn parse_or(expr: &str, fallback: DamageDice) -> DamageDice {
        match expr.parse() {
            Ok(dice) => dice,
            Err(error) => {
                tracing::warn!(%error, "using fallback damage dice {fallback}");
                fallback
            }
        }
    }

    /// Sum of already-rolled faces, saturating at `i32::MAX`.
    pub fn total(faces: &[u32]) -> i32 {
        faces.iter().fold(0i32, |sum, &face| {
            sum.saturating_add(i32::try_from(face).unwrap_or(i32::MAX))
        })
    }
}

impl FromStr for DamageDice {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (count, sides) = trimmed
            .split_once(['d', 'D'])
            .ok_or_else(|| DiceError::Malformed(s.to_string()))?;
        // "d6" means one die
        let count = if count.trim().is_empty() {
            1
        } else {
            count
                .trim()
                .parse::<u32>()
                .map_err(|_| DiceError::Malformed(s.to_string()))?
        };
        let sides = sides
            .trim()
            .parse::<u32>()
            .map_err(|_| DiceError::Malformed(s.to_string()))?;

        if count == 0 || sides == 0 {
            return Err(DiceError::Empty(s.to_string()));
        }
        if count > MAX_DICE {
            return Err(DiceError::TooMany(s.to_string()));
        }
        if sides > MAX_SIDES {
            return Err(DiceError::TooManySides(s.to_string()));
        }
        Ok(Self { count, sides })
    }
}

impl fmt::Display for DamageDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_expressions() {
        assert_eq!("1d8".parse::<DamageDice>(), Ok(DamageDice::new(1, 8)));
        assert_eq!(" 2D6 ".parse::<DamageDice>(), Ok(DamageDice::new(2, 6)));
        assert_eq!("d4".parse::<DamageDice>(), Ok(DamageDice::new(1, 4)));
    }

    #[test]
    fn rejects_malformed_expressions() {
        assert!(matches!("sword".parse::<DamageDice>(), Err(DiceError::Malformed(_))));
        assert!(matches!("1d".parse::<DamageDice>(), Err(DiceError::Malformed(_))));
        assert!(matches!("0d6".parse::<DamageDice>(), Err(DiceError::Empty(_))));
        assert!(matches!("1d0".parse::<DamageDice>(), Err(DiceError::Empty(_))));
        assert!(matches!("500d6".parse::<DamageDice>(), Err(DiceError::TooMany(_))));
        assert!(matches!(
            "2d4294967295".parse::<DamageDice>(),
            Err(DiceError::TooManySides(_))
        ));
        assert_eq!("1d1000".parse::<DamageDice>(), Ok(DamageDice::new(1, MAX_SIDES)));
    }

    #[test]
    fn total_never_wraps_negative() {
        assert_eq!(DamageDice::total(&[3, 5]), 8);
        assert_eq!(DamageDice::total(&[u32::MAX, u32::MAX]), i32::MAX);
        assert_eq!(DamageDice::total(&[i32::MAX as u32, 1]), i32::MAX);
    }

    #[test]
    fn malformed_falls_back() {
        let unarmed = DamageDice::new(1, 4);
        assert_eq!(DamageDice::parse_or("2x6", unarmed), unarmed);
        assert_eq!(DamageDice::parse_or("3d10", unarmed), DamageDice::new(3, 10));
    }
}
