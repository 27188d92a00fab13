//! Intent routing and the three dialog replies of `RecommendPortfolio`.

use crate::{error::AdvisorError, risk::recommendation, slot, validation::validate_data};
use robo_advisor_lex::{CurrentIntent, FulfillmentState, InvocationSource, LexEvent, LexResponse, Message};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// The intents this bot handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    RecommendPortfolio,
}

impl FromStr for Intent {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RecommendPortfolio" => Ok(Intent::RecommendPortfolio),
            other => Err(AdvisorError::UnsupportedIntent(other.to_owned())),
        }
    }
}

/// Routes the event to the handler for its intent.
pub fn dispatch(event: LexEvent) -> Result<LexResponse, AdvisorError> {
    let intent = event.intent_name().ok_or(AdvisorError::MissingIntent)?.parse::<Intent>()?;

    match intent {
        Intent::RecommendPortfolio => recommend_portfolio(event),
    }
}

/// Dialog management and fulfillment for recommending a portfolio.
pub fn recommend_portfolio(event: LexEvent) -> Result<LexResponse, AdvisorError> {
    match event.invocation_source {
        InvocationSource::DialogCodeHook => Ok(review_slots(event)),
        InvocationSource::FulfillmentCodeHook => fulfill(event),
    }
}

// Re-prompts for the first invalid slot, clearing its value, or hands the
// dialog back to Lex.
fn review_slots(event: LexEvent) -> LexResponse {
    let result = validate_data(event.slot(slot::AGE), event.slot(slot::INVESTMENT_AMOUNT));
    let LexEvent {
        session_attributes,
        current_intent,
        ..
    } = event;
    let CurrentIntent { name, mut slots, .. } = current_intent;

    match result.violated_slot {
        Some(violated) if !result.is_valid => {
            warn!(slot = violated, "invalid slot value, eliciting it again");
            slots.insert(violated.to_owned(), None);
            LexResponse::elicit_slot(
                session_attributes,
                name.unwrap_or_default(),
                slots,
                violated,
                result.message,
            )
        }
        _ => {
            debug!("slots valid, delegating to lex");
            LexResponse::delegate(session_attributes, slots)
        }
    }
}

fn fulfill(event: LexEvent) -> Result<LexResponse, AdvisorError> {
    let first_name = event
        .slot(slot::FIRST_NAME)
        .ok_or(AdvisorError::MissingSlot(slot::FIRST_NAME))?;
    let risk_level = event
        .slot(slot::RISK_LEVEL)
        .ok_or(AdvisorError::MissingSlot(slot::RISK_LEVEL))?;
    let advice = recommendation(risk_level)?;
    info!(risk_level = %risk_level, "recommending portfolio");

    let content = format!(
        "{} thank you for your information; based on the risk level you defined, \
         my recommendation is to choose an investment portfolio with {}",
        first_name, advice
    );
    Ok(LexResponse::close(
        event.session_attributes,
        FulfillmentState::Fulfilled,
        Message::plain_text(content),
    ))
}
