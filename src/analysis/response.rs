// src/analysis/response.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures on the collaborator boundary. All of them surface to the user
/// as the same recoverable analysis-failure path; none of them panics.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("the model returned no response text")]
    EmptyResponse,
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

/// Structured analysis result. The model is treated as a black box: beyond
/// presence and type of these six fields, nothing about value ranges or
/// string formats is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeEstimate {
    pub estimated_chest: f64,
    pub estimated_waist: f64,
    pub estimated_hips: f64,
    pub recommended_size: String,
    pub reasoning: String,
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Extracts the first candidate's text and parses it as a `SizeEstimate`.
/// A body that is not JSON, has no text part, or is missing a required
/// field comes back as an error value, never a panic.
pub fn parse_response(body: &str) -> Result<SizeEstimate, AnalysisError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

    let text = response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .filter_map(|part| part.text)
        .next()
        .ok_or(AnalysisError::EmptyResponse)?;

    serde_json::from_str(&text).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str) -> String {
        serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[test]
    fn parses_a_complete_result() {
        let body = wrap(
            r#"{"estimatedChest":96,"estimatedWaist":82.5,"estimatedHips":98,
                "recommendedSize":"M","reasoning":"Середня статура.","confidence":85}"#,
        );
        let estimate = parse_response(&body).unwrap();
        assert_eq!(estimate.recommended_size, "M");
        assert_eq!(estimate.estimated_waist, 82.5);
        assert_eq!(estimate.confidence, 85.0);
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let body = wrap(r#"{"estimatedChest":96,"estimatedWaist":82,"estimatedHips":98,"reasoning":"...","confidence":85}"#);
        assert!(matches!(
            parse_response(&body),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_json_result_text_is_malformed() {
        let body = wrap("I cannot analyze this image.");
        assert!(matches!(
            parse_response(&body),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }

    #[test]
    fn empty_candidates_is_empty_response() {
        assert!(matches!(
            parse_response(r#"{"candidates":[]}"#),
            Err(AnalysisError::EmptyResponse)
        ));
        assert!(matches!(
            parse_response(r#"{}"#),
            Err(AnalysisError::EmptyResponse)
        ));
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            parse_response("<html>502 Bad Gateway</html>"),
            Err(AnalysisError::MalformedResponse(_))
        ));
    }
}
