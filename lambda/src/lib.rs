#![deny(clippy::all)]
#![warn(missing_docs, nonstandard_style, rust_2018_idioms)]

//! A minimal client for the AWS Lambda Runtime API.
//!
//! The runtime polls the Runtime API for the next invocation, deserializes
//! the event into the handler's input type, calls the handler and posts
//! the serialized output (or a diagnostic, when the handler fails) back
//! to the Runtime API. Invocations are processed strictly one at a time.
//!
//! ```no_run
//! use robo_advisor_runtime::{handler_fn, run, Context, Error};
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     run(handler_fn(echo)).await
//! }
//!
//! async fn echo(event: Value, _: Context) -> Result<Value, Error> {
//!     Ok(event)
//! }
//! ```
use futures_core::Stream;
use futures_util::StreamExt;
use http::{Request, Response};
use hyper::Body;
use serde::{de::DeserializeOwned, Serialize};
use std::{any::type_name, convert::TryFrom, fmt, future::Future};
use tracing::{debug, error, info_span, trace, warn};
use tracing_futures::Instrument;

mod client;
mod requests;
mod types;

use client::Client;
use requests::{EventCompletionRequest, EventErrorRequest, IntoRequest, NextEventRequest};
use types::Diagnostic;
pub use types::{Config, Context};

/// Error type that lambdas may result in
pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type reported when an event body does not match the handler's input type.
const INVALID_EVENT_ERROR: &str = "InvalidEventDataError";

/// A trait describing an asynchronous function `A` to `B`.
pub trait Handler<A, B> {
    /// Errors returned by this handler.
    type Error;
    /// Response of this handler.
    type Fut: Future<Output = Result<B, Self::Error>>;
    /// Handle the incoming event.
    fn call(&mut self, event: A, context: Context) -> Self::Fut;
}

/// Returns a new [`HandlerFn`] with the given closure.
///
/// [`HandlerFn`]: struct.HandlerFn.html
pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn { f }
}

/// A [`Handler`] implemented by a closure.
///
/// [`Handler`]: trait.Handler.html
#[derive(Clone, Debug)]
pub struct HandlerFn<F> {
    f: F,
}

impl<F, A, B, Error, Fut> Handler<A, B> for HandlerFn<F>
where
    F: Fn(A, Context) -> Fut,
    Fut: Future<Output = Result<B, Error>>,
{
    type Error = Error;
    type Fut = Fut;
    fn call(&mut self, req: A, ctx: Context) -> Self::Fut {
        (self.f)(req, ctx)
    }
}

/// Starts the Lambda Rust runtime and begins polling for events on the
/// [Lambda Runtime APIs](https://docs.aws.amazon.com/lambda/latest/dg/runtimes-api.html).
///
/// Configuration is read from the standard Lambda environment variables;
/// see [`Config::from_env`](struct.Config.html#method.from_env).
pub async fn run<A, B, F>(handler: F) -> Result<(), Error>
where
    F: Handler<A, B>,
    F::Error: fmt::Display,
    A: DeserializeOwned,
    B: Serialize,
{
    trace!("loading config from env");
    let config = Config::from_env()?;
    let runtime = Runtime::new(config)?;
    runtime.run(runtime.incoming(), handler).await
}

/// A Runtime API client bound to one function configuration.
#[derive(Debug)]
pub struct Runtime {
    client: Client,
    config: Config,
}

impl Runtime {
    /// Creates a runtime talking to the Runtime API at `config.endpoint`.
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = Client::new(&config.endpoint)?;
        Ok(Self { client, config })
    }

    /// An endless stream of invocations, each one the result of a
    /// `next` poll against the Runtime API.
    pub fn incoming(&self) -> impl Stream<Item = Result<Response<Body>, Error>> + '_ {
        let client = &self.client;
        async_stream::stream! {
            loop {
                trace!("waiting for next event");
                let res = match NextEventRequest.into_req() {
                    Ok(req) => client.call(req).await,
                    Err(e) => Err(e),
                };
                yield res;
            }
        }
    }

    /// Processes each invocation of `incoming` with `handler` until the
    /// stream ends or the Runtime API fails.
    pub async fn run<S, F, A, B>(&self, incoming: S, mut handler: F) -> Result<(), Error>
    where
        S: Stream<Item = Result<Response<Body>, Error>>,
        F: Handler<A, B>,
        F::Error: fmt::Display,
        A: DeserializeOwned,
        B: Serialize,
    {
        tokio::pin!(incoming);
        while let Some(event) = incoming.next().await {
            let event = event?;
            let (parts, body) = event.into_parts();
            let ctx = Context::try_from(parts.headers)?.with_config(&self.config);
            let body = hyper::body::to_bytes(body).await?;

            let span = info_span!("invocation", request_id = %ctx.request_id);
            let req = self.invoke(&mut handler, &body, ctx).instrument(span).await?;
            let res = self.client.call(req).await?;
            if !res.status().is_success() {
                warn!(status = %res.status(), "runtime api rejected the invocation result");
            }
        }
        Ok(())
    }

    async fn invoke<F, A, B>(&self, handler: &mut F, body: &[u8], ctx: Context) -> Result<Request<Body>, Error>
    where
        F: Handler<A, B>,
        F::Error: fmt::Display,
        A: DeserializeOwned,
        B: Serialize,
    {
        let request_id = ctx.request_id.clone();
        let event = match deserialize::<A>(body) {
            Ok(event) => event,
            Err(diagnostic) => {
                error!(error = %diagnostic.error_message, "failed to deserialize event");
                return EventErrorRequest {
                    request_id: &request_id,
                    diagnostic,
                }
                .into_req();
            }
        };

        match handler.call(event, ctx).await {
            Ok(response) => {
                debug!("handler succeeded");
                EventCompletionRequest {
                    request_id: &request_id,
                    body: response,
                }
                .into_req()
            }
            Err(err) => {
                error!(error = %err, "handler failed");
                EventErrorRequest {
                    request_id: &request_id,
                    diagnostic: Diagnostic {
                        error_type: type_name::<F::Error>().to_owned(),
                        error_message: err.to_string(),
                    },
                }
                .into_req()
            }
        }
    }
}

fn deserialize<A>(body: &[u8]) -> Result<A, Diagnostic>
where
    A: DeserializeOwned,
{
    let mut de = serde_json::Deserializer::from_slice(body);
    serde_path_to_error::deserialize(&mut de).map_err(|err| Diagnostic {
        error_type: INVALID_EVENT_ERROR.to_owned(),
        error_message: format!("invalid event at {}: {}", err.path(), err.inner()),
    })
}
