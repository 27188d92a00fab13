use robo_advisor::handle;
use robo_advisor_lex::lambda::{handler_fn, run, Error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch does not render ANSI colors.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .init();

    run(handler_fn(handle)).await
}
