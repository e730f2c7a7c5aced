//! The closed player-choice domain and the actuator zone domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three decisions a player can make each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    /// Immediate purchase; the money is gone.
    Spend,
    /// Keep the money toward a goal.
    Save,
    /// Put the money at risk for a possible gain.
    Invest,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spend => "spend",
            Self::Save => "save",
            Self::Invest => "invest",
        };
        f.write_str(name)
    }
}

/// A symbolic physical target location for the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// The spend zone.
    Red,
    /// The save zone.
    Blue,
    /// The invest zone.
    Yellow,
    /// The neutral home position.
    Center,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Center => "center",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_deserializes_from_lowercase() {
        let choice: Choice = serde_json::from_str("\"invest\"").unwrap();
        assert_eq!(choice, Choice::Invest);
    }

    #[test]
    fn test_choice_rejects_unknown_value() {
        let result: Result<Choice, _> = serde_json::from_str("\"gamble\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_zone_serializes_to_lowercase() {
        assert_eq!(serde_json::to_string(&Zone::Center).unwrap(), "\"center\"");
    }

    #[test]
    fn test_choice_display_matches_wire_name() {
        assert_eq!(Choice::Spend.to_string(), "spend");
        assert_eq!(Choice::Save.to_string(), "save");
        assert_eq!(Choice::Invest.to_string(), "invest");
    }
}
