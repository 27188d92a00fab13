#![warn(rust_2018_idioms)]
//! A Lex code hook that recommends a starter portfolio.
//!
//! While Lex elicits slots (`DialogCodeHook`) the hook validates the user's
//! age and investment amount and re-prompts for the first invalid one. At
//! fulfillment (`FulfillmentCodeHook`) it looks the chosen risk level up in a
//! fixed bonds/equities table and closes the conversation.

pub mod dispatch;
pub mod error;
pub mod risk;
pub mod validation;

use robo_advisor_lex::{lambda::Context, LexEvent, LexResponse};
use tracing::info;

pub use crate::{
    dispatch::{dispatch, Intent},
    error::AdvisorError,
    risk::{recommendation, RiskLevel},
    validation::{validate_data, ValidationResult},
};

/// Slot names of the `RecommendPortfolio` intent.
pub mod slot {
    pub const FIRST_NAME: &str = "firstName";
    pub const AGE: &str = "age";
    pub const INVESTMENT_AMOUNT: &str = "investmentAmount";
    pub const RISK_LEVEL: &str = "riskLevel";
}

/// Entry point invoked by the runtime for every Lex event.
pub async fn handle(event: LexEvent, ctx: Context) -> Result<LexResponse, AdvisorError> {
    info!(
        intent = ?event.intent_name(),
        source = ?event.invocation_source,
        function = %ctx.env_config.function_name,
        "lex code hook invoked"
    );
    dispatch(event)
}
