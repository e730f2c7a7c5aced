//! The game's data model: scenarios, consequences, and the decision log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The emotional register of a consequence, mirrored by the actuator's
/// expression and voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Positive outcome.
    Happy,
    /// Negative outcome.
    Sad,
    /// Nothing gained, nothing lost.
    Neutral,
    /// Big win or fresh start.
    Excited,
}

/// The three labeled option descriptions presented with a scenario.
///
/// The strings are opaque narrative text; only their association with a
/// [`crate::choice::Choice`] is structured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOptions {
    /// What spending means in this scenario.
    pub spend: String,
    /// What saving means in this scenario.
    pub save: String,
    /// What investing means in this scenario.
    pub invest: String,
}

impl ScenarioOptions {
    /// Returns the description text for the given choice.
    #[must_use]
    pub fn description(&self, choice: crate::choice::Choice) -> &str {
        match choice {
            crate::choice::Choice::Spend => &self.spend,
            crate::choice::Choice::Save => &self.save,
            crate::choice::Choice::Invest => &self.invest,
        }
    }
}

/// A narrative prompt awaiting the player's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// The story setup, two or three sentences.
    pub narrative: String,
    /// The balance the scenario was generated against. Always set from the
    /// session balance, never from a generator echo.
    pub balance_at_generation: f64,
    /// The three choice descriptions.
    pub options: ScenarioOptions,
}

/// The narrated, numeric, and emotional outcome of a choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consequence {
    /// What happened as a result of the choice.
    pub narrative_result: String,
    /// Signed change applied to the balance.
    pub balance_change: f64,
    /// The balance after the change. For fallback content this is always
    /// `balance + balance_change`; generator output is trusted verbatim.
    pub new_balance: f64,
    /// The one-sentence financial lesson.
    pub lesson: String,
    /// Emotional register of the outcome.
    pub mood: Mood,
}

/// One completed decision in the append-only session log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// The chosen option's description text.
    pub choice_description: String,
    /// Signed balance change produced by the choice.
    pub balance_change: f64,
    /// When the choice was committed.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_wire_names_are_camel_case() {
        let scenario = Scenario {
            narrative: "A test.".to_owned(),
            balance_at_generation: 10.0,
            options: ScenarioOptions {
                spend: "a".to_owned(),
                save: "b".to_owned(),
                invest: "c".to_owned(),
            },
        };

        let json = serde_json::to_value(&scenario).unwrap();
        assert!(json.get("balanceAtGeneration").is_some());
        assert_eq!(json["options"]["invest"], "c");
    }

    #[test]
    fn test_consequence_wire_names_are_camel_case() {
        let consequence = Consequence {
            narrative_result: "It went well.".to_owned(),
            balance_change: 8.0,
            new_balance: 18.0,
            lesson: "Risk can pay off.".to_owned(),
            mood: Mood::Excited,
        };

        let json = serde_json::to_value(&consequence).unwrap();
        assert_eq!(json["narrativeResult"], "It went well.");
        assert_eq!(json["balanceChange"], 8.0);
        assert_eq!(json["newBalance"], 18.0);
        assert_eq!(json["mood"], "excited");
    }

    #[test]
    fn test_mood_rejects_unknown_value() {
        let result: Result<Mood, _> = serde_json::from_str("\"furious\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_options_description_resolves_each_choice() {
        let options = ScenarioOptions {
            spend: "buy it".to_owned(),
            save: "keep it".to_owned(),
            invest: "grow it".to_owned(),
        };

        assert_eq!(options.description(crate::choice::Choice::Spend), "buy it");
        assert_eq!(options.description(crate::choice::Choice::Save), "keep it");
        assert_eq!(options.description(crate::choice::Choice::Invest), "grow it");
    }
}
