use serde::{Deserialize, Serialize};

/// Payload submitted to the evaluation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub business_idea: String,
    pub location: String,
}

/// One nearby business competing with the submitted idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub rating: f64,
    pub user_ratings_total: u64,
    pub vicinity: String,
}

/// Assessment returned by the evaluation endpoint.
///
/// `rating` is free-form text; the service phrases it for display and the
/// client never computes with it. Corrected fields carry whatever the server
/// sent back, including echoes of the submitted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub rating: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_business_idea: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub competitors: Vec<Competitor>,
}

impl Evaluation {
    /// Server-corrected location, only when it differs from what was sent.
    pub fn location_correction(&self, submitted: &EvaluateRequest) -> Option<&str> {
        self.corrected_location
            .as_deref()
            .filter(|corrected| *corrected != submitted.location)
    }

    /// Server-corrected business idea, only when it differs from what was sent.
    pub fn business_idea_correction(&self, submitted: &EvaluateRequest) -> Option<&str> {
        self.corrected_business_idea
            .as_deref()
            .filter(|corrected| *corrected != submitted.business_idea)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_the_wire_body() {
        let request = EvaluateRequest {
            business_idea: "mobile dog grooming".to_string(),
            location: "Lisbon".to_string(),
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"business_idea":"mobile dog grooming","location":"Lisbon"}"#
        );
    }

    #[test]
    fn evaluation_deserializes_without_optional_fields() {
        let evaluation: Evaluation =
            serde_json::from_str(r#"{"rating":"7/10","explanation":"Solid demand."}"#).unwrap();
        assert_eq!(evaluation.rating, "7/10");
        assert_eq!(evaluation.explanation, "Solid demand.");
        assert!(evaluation.corrected_location.is_none());
        assert!(evaluation.corrected_business_idea.is_none());
        assert!(evaluation.competitors.is_empty());
    }

    #[test]
    fn evaluation_deserializes_with_competitors() {
        let body = r#"{
            "rating": "4/10",
            "explanation": "Crowded market.",
            "corrected_location": "Lisbon, Portugal",
            "competitors": [
                {"name": "PetSpa", "rating": 4.6, "user_ratings_total": 213, "vicinity": "Rua Augusta 12"}
            ]
        }"#;
        let evaluation: Evaluation = serde_json::from_str(body).unwrap();
        assert_eq!(evaluation.corrected_location.as_deref(), Some("Lisbon, Portugal"));
        assert_eq!(evaluation.competitors.len(), 1);
        assert_eq!(evaluation.competitors[0].name, "PetSpa");
        assert_eq!(evaluation.competitors[0].user_ratings_total, 213);
    }

    #[test]
    fn corrections_show_only_when_they_differ() {
        let submitted = EvaluateRequest {
            business_idea: "coffee cart".to_string(),
            location: "lisbon".to_string(),
        };
        let evaluation = Evaluation {
            rating: "6/10".to_string(),
            explanation: "ok".to_string(),
            corrected_location: Some("Lisbon, Portugal".to_string()),
            corrected_business_idea: Some("coffee cart".to_string()),
            competitors: Vec::new(),
        };
        assert_eq!(
            evaluation.location_correction(&submitted),
            Some("Lisbon, Portugal")
        );
        // An echo of the submitted value is not a correction.
        assert_eq!(evaluation.business_idea_correction(&submitted), None);
    }
}
