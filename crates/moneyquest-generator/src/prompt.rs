//! Instruction builders for the content generator.
//!
//! The prompts demand bare JSON in the exact scenario/consequence shapes;
//! the adapter still tolerates fenced output when parsing.

use moneyquest_core::choice::Choice;

/// System preamble sent with every generation request.
pub const SYSTEM_INSTRUCTION: &str = "You are a financial education expert for children. \
     Always respond with valid JSON only, no markdown formatting.";

/// Builds the instruction for a new scenario tailored to the player.
#[must_use]
pub fn scenario_prompt(age: u8, balance: f64) -> String {
    format!(
        r#"You are a financial literacy tutor for kids aged {age}.

Current Balance: ${balance}

Generate a simple, age-appropriate financial scenario where the child needs to make a decision with their money.

Return ONLY valid JSON in this exact format (no markdown, no backticks, no explanations):
{{
  "scenario": "A brief, fun story about a financial situation (2-3 sentences)",
  "options": {{
    "spend": "A fun immediate purchase option",
    "save": "A savings goal option",
    "invest": "A way to potentially grow the money"
  }}
}}

Make it engaging, relatable, and appropriate for a {age}-year-old child."#
    )
}

/// Builds the instruction for the consequence of a chosen option.
#[must_use]
pub fn consequence_prompt(choice: Choice, choice_description: &str, balance: f64, age: u8) -> String {
    let choice_name = choice.to_string().to_uppercase();
    format!(
        r#"You are teaching a {age}-year-old about financial consequences.

The child chose to: {choice_name}
Specifically: "{choice_description}"
Current Balance: ${balance}

Generate a consequence for this choice. Make it realistic but kid-friendly.

For SPEND: Money decreases (immediate gratification)
For SAVE: Money stays same, progress toward goal (delayed gratification)
For INVEST: Small chance of growth OR small loss (risk/reward)

Return ONLY valid JSON in this exact format (no markdown, no backticks):
{{
  "result": "What happened as a result of the choice (2-3 sentences, fun story)",
  "balanceChange": -10,
  "newBalance": {example_balance},
  "lesson": "One sentence financial lesson the child learned",
  "emotion": "happy"
}}

The balanceChange should be a number (positive for gain, negative for loss).
The emotion should be one of: happy, sad, neutral, excited.
Make the story engaging and the lesson clear!"#,
        example_balance = balance - 10.0
    )
}
