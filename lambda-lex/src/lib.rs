#![warn(rust_2018_idioms)]
//! Amazon Lex (V1) code hook types for Rust functions running on
//! [`robo_advisor_runtime`](../robo_advisor_runtime/index.html).
//!
//! Lex invokes a code hook with a [`LexEvent`](request/struct.LexEvent.html)
//! and expects a [`LexResponse`](response/struct.LexResponse.html) naming the
//! next dialog action.
//!
//! ```rust,no_run
//! use robo_advisor_lex::{
//!     lambda::{handler_fn, run, Context, Error},
//!     LexEvent, LexResponse,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     run(handler_fn(hook)).await
//! }
//!
//! async fn hook(event: LexEvent, _: Context) -> Result<LexResponse, Error> {
//!     Ok(LexResponse::delegate(event.session_attributes, event.current_intent.slots))
//! }
//! ```

pub use robo_advisor_runtime as lambda;

pub mod request;
pub mod response;

pub use crate::{
    request::{Bot, CurrentIntent, InvocationSource, LexEvent, SessionAttributes, Slots},
    response::{ContentType, DialogAction, FulfillmentState, LexResponse, Message},
};
