use crate::Error;
use http::{uri::PathAndQuery, Request, Response, Uri};
use hyper::{client::HttpConnector, Body};
use tracing::trace;

/// HTTP client for the Lambda Runtime API.
#[derive(Debug, Clone)]
pub(crate) struct Client {
    base: Uri,
    client: hyper::Client<HttpConnector>,
}

impl Client {
    /// Builds a client for a Runtime API endpoint given as `host:port`,
    /// the form of `AWS_LAMBDA_RUNTIME_API`.
    pub(crate) fn new(endpoint: &str) -> Result<Self, Error> {
        let base = format!("http://{}", endpoint).parse::<Uri>()?;
        Ok(Self {
            base,
            client: hyper::Client::new(),
        })
    }

    pub(crate) async fn call(&self, req: Request<Body>) -> Result<Response<Body>, Error> {
        let req = self.set_origin(req)?;
        trace!(method = %req.method(), uri = %req.uri(), "calling runtime api");
        let res = self.client.request(req).await?;
        Ok(res)
    }

    fn set_origin(&self, req: Request<Body>) -> Result<Request<Body>, Error> {
        let (mut parts, body) = req.into_parts();
        let path = parts
            .uri
            .path_and_query()
            .cloned()
            .unwrap_or_else(|| PathAndQuery::from_static("/"));
        let mut builder = Uri::builder().path_and_query(path);
        if let Some(scheme) = self.base.scheme() {
            builder = builder.scheme(scheme.clone());
        }
        if let Some(authority) = self.base.authority() {
            builder = builder.authority(authority.clone());
        }
        parts.uri = builder.build()?;
        Ok(Request::from_parts(parts, body))
    }
}
