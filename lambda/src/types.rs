use crate::Error;
use http::HeaderMap;
use serde::Serialize;
use std::{
    convert::TryFrom,
    env,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Configuration derived from the environment the Lambda service
/// provides to every function instance.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// The host and port of the Runtime API.
    pub endpoint: String,
    /// The name of the function.
    pub function_name: String,
    /// The amount of memory available to the function in MB.
    pub memory: i32,
    /// The version of the function being executed.
    pub version: String,
    /// The name of the Amazon CloudWatch Logs stream for the function.
    pub log_stream: String,
    /// The name of the Amazon CloudWatch Logs group for the function.
    pub log_group: String,
}

impl Config {
    /// Attempts to read configuration from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).ok_or_else(|| Error::from(format!("missing environment variable {}", key)));

        Ok(Config {
            endpoint: var("AWS_LAMBDA_RUNTIME_API")?,
            function_name: var("AWS_LAMBDA_FUNCTION_NAME")?,
            memory: var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE")?.parse::<i32>()?,
            version: var("AWS_LAMBDA_FUNCTION_VERSION")?,
            log_stream: var("AWS_LAMBDA_LOG_STREAM_NAME")?,
            log_group: var("AWS_LAMBDA_LOG_GROUP_NAME")?,
        })
    }
}

/// The Lambda function execution context. The values in this struct
/// are populated using the [Lambda environment variables](https://docs.aws.amazon.com/lambda/latest/dg/current-function-versions.html)
/// and the headers returned by the poll request to the Runtime APIs.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Context {
    /// The AWS request ID generated by the Lambda service.
    pub request_id: String,
    /// The execution deadline for the current invocation in milliseconds.
    pub deadline: u64,
    /// The ARN of the Lambda function being invoked.
    pub invoked_function_arn: String,
    /// The X-Ray trace ID for the current invocation.
    pub xray_trace_id: Option<String>,
    /// Lambda function configuration from the local environment variables.
    /// Includes information such as the function name, memory allocation,
    /// version, and log streams.
    pub env_config: Config,
}

impl TryFrom<HeaderMap> for Context {
    type Error = Error;

    fn try_from(headers: HeaderMap) -> Result<Self, Self::Error> {
        Ok(Context {
            request_id: required(&headers, "lambda-runtime-aws-request-id")?.to_owned(),
            deadline: required(&headers, "lambda-runtime-deadline-ms")?.parse::<u64>()?,
            invoked_function_arn: required(&headers, "lambda-runtime-invoked-function-arn")?.to_owned(),
            xray_trace_id: headers
                .get("lambda-runtime-trace-id")
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned),
            ..Default::default()
        })
    }
}

impl Context {
    pub(crate) fn with_config(self, config: &Config) -> Self {
        Self {
            env_config: config.clone(),
            ..self
        }
    }

    /// The execution deadline as a point in time.
    pub fn deadline(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.deadline)
    }
}

fn required<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, Error> {
    let value = headers
        .get(name)
        .ok_or_else(|| format!("missing runtime header {}", name))?;
    Ok(value.to_str()?)
}

/// Error payload accepted by the Runtime API's error endpoints.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Diagnostic {
    pub(crate) error_type: String,
    pub(crate) error_message: String,
}
