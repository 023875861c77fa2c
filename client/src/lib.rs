use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use venture_protocol::{EvaluateRequest, Evaluation};

mod error;

pub use error::EvaluateError;

/// HTTP client for the business-idea evaluation endpoint.
#[derive(Debug, Clone)]
pub struct EvaluatorClient {
    http: reqwest::Client,
    endpoint: String,
}

impl EvaluatorClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one idea/location pair and decode the returned assessment.
    pub async fn evaluate(&self, request: &EvaluateRequest) -> Result<Evaluation, EvaluateError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting evaluation request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = %status, bytes = body.len(), "evaluation response received");

        decode_response(status, &body)
    }
}

/// Decode one response body. The body must be JSON whatever the status;
/// non-success statuses may carry a `detail` message for the user.
fn decode_response(status: StatusCode, body: &str) -> Result<Evaluation, EvaluateError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|err| {
        tracing::warn!(status = %status, %err, "response body was not JSON");
        EvaluateError::NotJson
    })?;

    if !status.is_success() {
        let code = status.as_u16();
        let message = value
            .get("detail")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Server error: {code}"));
        return Err(EvaluateError::Server {
            status: code,
            message,
        });
    }

    serde_json::from_value(value).map_err(EvaluateError::Shape)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).unwrap()
    }

    #[test]
    fn well_formed_success_body_decodes() {
        let body = r#"{
            "rating": "8/10",
            "explanation": "Strong foot traffic, little competition.",
            "competitors": [
                {"name": "Bean There", "rating": 4.2, "user_ratings_total": 87, "vicinity": "Main St 4"}
            ]
        }"#;
        let evaluation = decode_response(status(200), body).unwrap();
        assert_eq!(evaluation.rating, "8/10");
        assert_eq!(evaluation.competitors.len(), 1);
    }

    #[test]
    fn error_detail_becomes_the_message() {
        let err = decode_response(status(422), r#"{"detail":"Location not found"}"#).unwrap_err();
        match err {
            EvaluateError::Server { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "Location not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_without_detail_names_the_status_code() {
        let err = decode_response(status(500), r#"{"error":"boom"}"#).unwrap_err();
        assert!(err.to_string().contains("500"), "got: {err}");
    }

    #[test]
    fn error_with_non_object_body_falls_back_to_the_status_code() {
        let err = decode_response(status(503), r#""unavailable""#).unwrap_err();
        assert!(err.to_string().contains("503"), "got: {err}");
    }

    #[test]
    fn non_json_body_is_a_fixed_message() {
        let err = decode_response(status(200), "<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), "Server response was not valid JSON");
    }

    #[test]
    fn success_body_with_wrong_shape_is_rejected() {
        let err = decode_response(status(200), r#"{"unexpected":true}"#).unwrap_err();
        assert!(matches!(err, EvaluateError::Shape(_)));
    }
}
