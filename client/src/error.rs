use thiserror::Error;

/// Failures of one evaluation round trip.
///
/// Every variant renders as the single user-facing message the UI shows;
/// nothing here is retried and nothing is fatal to the app.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// Transport failure: connect, send, or reading the body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not JSON at all.
    #[error("Server response was not valid JSON")]
    NotJson,

    /// Success status, valid JSON, but not shaped like an assessment.
    #[error("Server response did not match the expected assessment: {0}")]
    Shape(#[source] serde_json::Error),

    /// Non-success status. `message` is the server's `detail` field when it
    /// carried one, else a generic message naming the status code.
    #[error("{message}")]
    Server { status: u16, message: String },
}
