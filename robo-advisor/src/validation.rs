//! Slot value checks run while the bot is still eliciting.

use crate::slot;
use robo_advisor_lex::Message;

/// Users must be younger than this to get a recommendation.
pub const RETIREMENT_AGE: f64 = 65.0;

/// Smallest amount, in dollars, the bot will build a portfolio for.
pub const MINIMUM_INVESTMENT: f64 = 5000.0;

/// Outcome of [`validate_data`]. An invalid result always names the slot
/// to elicit again and carries the prompt for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violated_slot: Option<&'static str>,
    pub message: Option<Message>,
}

impl ValidationResult {
    fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            violated_slot: None,
            message: None,
        }
    }

    fn invalid(violated_slot: &'static str, content: &str) -> Self {
        ValidationResult {
            is_valid: false,
            violated_slot: Some(violated_slot),
            message: Some(Message::plain_text(content)),
        }
    }
}

/// Checks the age and the investment amount, in that order. Slots the
/// user has not filled yet are skipped.
pub fn validate_data(age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
    if let Some(age) = age {
        match parse_number(age) {
            None => return ValidationResult::invalid(slot::AGE, "Please provide your age as a number"),
            Some(age) if age < 0.0 => {
                return ValidationResult::invalid(
                    slot::AGE,
                    "Cannot compute for the unborn, please provide an age of 0 or greater",
                )
            }
            Some(age) if age >= RETIREMENT_AGE => {
                return ValidationResult::invalid(
                    slot::AGE,
                    "Cannot provide portfolio recommendation for your age, please provide an age between 0 and 65",
                )
            }
            Some(_) => {}
        }
    }

    if let Some(amount) = investment_amount {
        match parse_number(amount) {
            None => {
                return ValidationResult::invalid(
                    slot::INVESTMENT_AMOUNT,
                    "Please provide the investment amount as a number",
                )
            }
            Some(amount) if amount < MINIMUM_INVESTMENT => {
                return ValidationResult::invalid(
                    slot::INVESTMENT_AMOUNT,
                    "The investment amount selected cannot be used, please provide amount of $5,000 or greater",
                )
            }
            Some(_) => {}
        }
    }

    ValidationResult::valid()
}

// Lex hands numbers over as strings; anything that is not a finite number is rejected.
fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
