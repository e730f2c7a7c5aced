//! Choice-to-zone mapping.

use moneyquest_core::choice::{Choice, Zone};

/// Maps a choice to its physical zone. Total over the closed choice
/// domain; `Zone::Center` is reserved for the home position and is never
/// the target of a choice.
#[must_use]
pub fn zone_for_choice(choice: Choice) -> Zone {
    match choice {
        Choice::Spend => Zone::Red,
        Choice::Save => Zone::Blue,
        Choice::Invest => Zone::Yellow,
    }
}
