// src/analysis/client.rs
use super::payload::{GenerateContentRequest, GEMINI_MODEL_ID};
use super::response::{parse_response, AnalysisError, SizeEstimate};

const GENERATE_CONTENT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Sends one analysis request and parses the structured result.
///
/// Runs to completion or terminal failure: there is no timeout, retry or
/// cancellation; at most one request is in flight at a time (the UI keeps
/// the submit control disabled while waiting).
pub async fn analyze_size(
    api_key: &str,
    request: &GenerateContentRequest,
) -> Result<SizeEstimate, AnalysisError> {
    let url = format!("{}/{}:generateContent", GENERATE_CONTENT_BASE_URL, GEMINI_MODEL_ID);

    let body = reqwest::Client::new()
        .post(&url)
        .header("x-goog-api-key", api_key)
        .json(request)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_response(&body)
}
