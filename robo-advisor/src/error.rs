use thiserror::Error;

/// Failures that end an invocation instead of re-prompting the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error("event carries no intent name")]
    MissingIntent,

    #[error("slot {0} is required for fulfillment")]
    MissingSlot(&'static str),

    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),
}
