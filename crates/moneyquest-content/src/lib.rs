//! MoneyQuest — Fallback Content Library.
//!
//! A fixed table of hand-authored scenario and consequence templates used
//! whenever the content generator is unconfigured, unreachable, or returns
//! something that does not parse. Selection is uniformly random through an
//! injected [`DeterministicRng`]; consequences always recompute
//! `new_balance` from the input balance so the balance arithmetic holds by
//! construction on this path.

use moneyquest_core::choice::Choice;
use moneyquest_core::model::{Consequence, Mood, Scenario, ScenarioOptions};
use moneyquest_core::rng::DeterministicRng;

struct ScenarioTemplate {
    narrative: &'static str,
    spend: &'static str,
    save: &'static str,
    invest: &'static str,
}

struct ConsequenceTemplate {
    narrative_result: &'static str,
    balance_change: f64,
    lesson: &'static str,
    mood: Mood,
}

const SCENARIOS: [ScenarioTemplate; 3] = [
    ScenarioTemplate {
        narrative: "You're at the school fair and you have 10 dollars! There's a cool yo-yo for sale, your friend wants to save up for a pizza party, and there's a mini lemonade stand kit you could buy to sell drinks.",
        spend: "Buy the awesome light-up yo-yo for 10 dollars",
        save: "Save your money for the pizza party next week",
        invest: "Buy the lemonade stand kit to make more money",
    },
    ScenarioTemplate {
        narrative: "It's your birthday and grandma gave you 15 dollars! Your favorite video game just went on sale, you've been wanting to save for new sneakers, and your neighbor will pay you to help with their garden project.",
        spend: "Buy the video game while it's on sale for 15 dollars",
        save: "Put it toward your sneaker savings goal",
        invest: "Use it to buy garden supplies and earn 20 dollars helping your neighbor",
    },
    ScenarioTemplate {
        narrative: "You found 12 dollars doing chores! The ice cream truck is outside, you're saving for a new bike, and there's a car wash fundraiser where you could earn double your money.",
        spend: "Get ice cream and treats for 12 dollars",
        save: "Add it to your bike savings jar",
        invest: "Use it for supplies for the car wash to earn 24 dollars",
    },
];

const SPEND_CONSEQUENCES: [ConsequenceTemplate; 1] = [ConsequenceTemplate {
    narrative_result: "You had an amazing time with your new purchase! The joy was instant and you had so much fun. But now your wallet is empty and you'll need to wait for more money.",
    balance_change: -10.0,
    lesson: "Spending feels great now, but the money is gone forever.",
    mood: Mood::Happy,
}];

const SAVE_CONSEQUENCES: [ConsequenceTemplate; 1] = [ConsequenceTemplate {
    narrative_result: "Great job being patient! You resisted the temptation and kept your money safe. You're getting closer to your big goal, even though it was hard to wait.",
    balance_change: 0.0,
    lesson: "Saving takes patience, but it helps you reach bigger dreams.",
    mood: Mood::Neutral,
}];

// Invest is the risk/reward branch: one winning template, one losing.
const INVEST_CONSEQUENCES: [ConsequenceTemplate; 2] = [
    ConsequenceTemplate {
        narrative_result: "Wow! Your investment paid off! People loved your lemonade stand and you made extra money. Taking a smart risk really worked out this time!",
        balance_change: 8.0,
        lesson: "Investing can grow your money, but it takes effort and smart choices.",
        mood: Mood::Excited,
    },
    ConsequenceTemplate {
        narrative_result: "Oh no! It rained and nobody came to your lemonade stand. You lost some money on supplies. Investing doesn't always work out, but you learned something valuable.",
        balance_change: -3.0,
        lesson: "Investments can lose money sometimes, but that's part of learning.",
        mood: Mood::Sad,
    },
];

/// Picks a fallback scenario for the given balance.
#[must_use]
pub fn pick_scenario(balance: f64, rng: &mut dyn DeterministicRng) -> Scenario {
    let template = &SCENARIOS[rng.next_index(SCENARIOS.len())];
    Scenario {
        narrative: template.narrative.to_owned(),
        balance_at_generation: balance,
        options: ScenarioOptions {
            spend: template.spend.to_owned(),
            save: template.save.to_owned(),
            invest: template.invest.to_owned(),
        },
    }
}

/// Picks a fallback consequence for the given choice and balance.
///
/// `new_balance` is recomputed here, so
/// `new_balance == balance + balance_change` always holds for fallback
/// content.
#[must_use]
pub fn pick_consequence(choice: Choice, balance: f64, rng: &mut dyn DeterministicRng) -> Consequence {
    let templates: &[ConsequenceTemplate] = match choice {
        Choice::Spend => &SPEND_CONSEQUENCES,
        Choice::Save => &SAVE_CONSEQUENCES,
        Choice::Invest => &INVEST_CONSEQUENCES,
    };
    let template = &templates[rng.next_index(templates.len())];

    Consequence {
        narrative_result: template.narrative_result.to_owned(),
        balance_change: template.balance_change,
        new_balance: balance + template.balance_change,
        lesson: template.lesson.to_owned(),
        mood: template.mood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneyquest_test_support::{MockRng, SequenceRng};

    #[test]
    fn test_pick_scenario_carries_input_balance() {
        // Arrange
        let mut rng = MockRng;

        // Act
        let scenario = pick_scenario(42.5, &mut rng);

        // Assert
        assert_eq!(scenario.balance_at_generation, 42.5);
        assert!(!scenario.narrative.is_empty());
        assert!(!scenario.options.spend.is_empty());
        assert!(!scenario.options.save.is_empty());
        assert!(!scenario.options.invest.is_empty());
    }

    #[test]
    fn test_pick_scenario_selects_by_rng_index() {
        // Arrange
        let mut rng = SequenceRng::new(vec![2]);

        // Act
        let scenario = pick_scenario(10.0, &mut rng);

        // Assert
        assert!(scenario.narrative.starts_with("You found 12 dollars"));
    }

    #[test]
    fn test_save_consequence_leaves_balance_unchanged() {
        // Arrange
        let mut rng = MockRng;

        // Act
        let consequence = pick_consequence(Choice::Save, 10.0, &mut rng);

        // Assert
        assert_eq!(consequence.balance_change, 0.0);
        assert_eq!(consequence.new_balance, 10.0);
        assert_eq!(consequence.mood, Mood::Neutral);
    }

    #[test]
    fn test_spend_consequence_costs_ten() {
        // Arrange
        let mut rng = MockRng;

        // Act
        let consequence = pick_consequence(Choice::Spend, 10.0, &mut rng);

        // Assert
        assert_eq!(consequence.balance_change, -10.0);
        assert_eq!(consequence.new_balance, 0.0);
        assert_eq!(consequence.mood, Mood::Happy);
    }

    #[test]
    fn test_invest_has_winning_and_losing_branches() {
        // Arrange
        let mut winning_rng = SequenceRng::new(vec![0]);
        let mut losing_rng = SequenceRng::new(vec![1]);

        // Act
        let win = pick_consequence(Choice::Invest, 10.0, &mut winning_rng);
        let loss = pick_consequence(Choice::Invest, 10.0, &mut losing_rng);

        // Assert
        assert_eq!(win.balance_change, 8.0);
        assert_eq!(win.new_balance, 18.0);
        assert_eq!(win.mood, Mood::Excited);
        assert_eq!(loss.balance_change, -3.0);
        assert_eq!(loss.new_balance, 7.0);
        assert_eq!(loss.mood, Mood::Sad);
    }

    #[test]
    fn test_balance_arithmetic_holds_for_every_choice() {
        for choice in [Choice::Spend, Choice::Save, Choice::Invest] {
            let mut rng = MockRng;
            let consequence = pick_consequence(choice, -2.5, &mut rng);
            assert_eq!(
                consequence.new_balance,
                -2.5 + consequence.balance_change,
                "invariant broken for {choice}"
            );
        }
    }

    #[test]
    fn test_negative_balance_is_not_clamped() {
        let mut rng = MockRng;
        let consequence = pick_consequence(Choice::Spend, 4.0, &mut rng);
        assert_eq!(consequence.new_balance, -6.0);
    }
}
