use thiserror::Error;

/// Failure taxonomy for the two remote calls.
///
/// The first three variants cover transport-level outcomes: the server
/// answered with an error status, the request went out but nothing came
/// back, or the request never left this process. `Rejected` is the fourth,
/// logical case: transport succeeded but the envelope reported
/// `succeeded: false`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The envelope reported `succeeded: false` on an otherwise good
    /// response.
    #[error("{}", message.as_deref().unwrap_or("request did not succeed"))]
    Rejected { message: Option<String> },

    /// The server answered with a non-success status code.
    #[error("server returned status {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// The request was sent but no response arrived.
    #[error("unable to reach the server")]
    Unreachable(#[source] reqwest::Error),

    /// The request could not be composed or sent at all, or the response
    /// body was not the expected shape.
    #[error("request could not be completed")]
    Malformed(#[source] reqwest::Error),

    /// The configured base URL is not usable.
    #[error("invalid base URL: {0}")]
    BaseUrl(String),
}

impl ApiError {
    /// Render the failure as the message shown to the user.
    ///
    /// `fallback` is the call-specific default used when the server did
    /// not supply a message of its own.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message } => message
                .clone()
                .unwrap_or_else(|| fallback.to_string()),
            ApiError::Server { message, .. } => {
                format!("Server Error: {}", message.as_deref().unwrap_or(fallback))
            }
            ApiError::Unreachable(_) => "Network Error: Unable to reach the server.".to_string(),
            ApiError::Malformed(_) | ApiError::BaseUrl(_) => {
                "Error: Something went wrong. Please try again.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() || err.is_decode() {
            ApiError::Malformed(err)
        } else {
            // Connect failures, timeouts and mid-flight transport errors
            // all mean the same thing to the user: no answer arrived.
            ApiError::Unreachable(err)
        }
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::BaseUrl(err.to_string())
    }
}
