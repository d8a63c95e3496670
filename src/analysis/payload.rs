// src/analysis/payload.rs
//! Assembles the `generateContent` request sent to the model.
//!
//! Field names must match the Gemini REST wire format exactly (camelCase),
//! and the response schema names the six fields the rest of the app relies
//! on — see `response::SizeEstimate`.

use serde::Serialize;
use serde_json::{json, Value};

use crate::charts::SizeRow;
use crate::locale::Language;

pub const GEMINI_MODEL_ID: &str = "gemini-2.5-flash";
pub const ANALYSIS_TEMPERATURE: f64 = 0.4;

/// The user's photo, ready for the wire: MIME type plus the raw base64
/// body (no data-URL prefix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoAttachment {
    pub mime_type: String,
    pub data: String,
}

/// Everything the user supplies for one analysis. Height is required and
/// form-validated to [140, 220] cm; weight is optional ([40, 150] kg when
/// present).
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub height: String,
    pub weight: String,
    pub photo: PhotoAttachment,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One request part: either the inline image or a text block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<PhotoAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn image(photo: PhotoAttachment) -> Self {
        Self {
            inline_data: Some(photo),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            inline_data: None,
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
    pub temperature: f64,
}

/// Schema constraining the model to the six required result fields. The
/// reasoning description carries the requested output language.
fn response_schema(language: Language) -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "estimatedChest": { "type": "NUMBER", "description": "Estimated chest circumference in cm" },
            "estimatedWaist": { "type": "NUMBER", "description": "Estimated waist circumference in cm" },
            "estimatedHips": { "type": "NUMBER", "description": "Estimated hips circumference in cm" },
            "recommendedSize": { "type": "STRING", "description": "The recommended size label from the chart (e.g. XS, 44, or combined)" },
            "reasoning": {
                "type": "STRING",
                "description": format!(
                    "A brief explanation in {} language of why this size was chosen.",
                    language.reasoning_language()
                )
            },
            "confidence": { "type": "NUMBER", "description": "Confidence score from 0 to 100" }
        },
        "required": [
            "estimatedChest", "estimatedWaist", "estimatedHips",
            "recommendedSize", "reasoning", "confidence"
        ]
    })
}

fn build_prompt(input: &AnalysisInput, chart_context: &str) -> String {
    let weight_text = if input.weight.trim().is_empty() {
        "Unknown".to_string()
    } else {
        format!("{} kg", input.weight.trim())
    };

    format!(
        "You are an expert professional tailor and stylist.\n\
         Analyze the provided image of the person alongside their self-reported height ({height} cm) and weight ({weight}).\n\
         \n\
         Your task is to:\n\
         1. Estimate their Chest, Waist, and Hips measurements (in cm) based on their visual body type (ectomorph, mesomorph, endomorph) and known parameters.\n\
         2. Compare these estimated measurements against the provided Size Chart below.\n\
         3. Recommend the best fitting size from the chart.\n\
         \n\
         Size Chart Data (JSON):\n\
         {chart}\n\
         \n\
         Provide the output in strict JSON format.",
        height = input.height.trim(),
        weight = weight_text,
        chart = chart_context,
    )
}

/// Builds the full request: image part first, then the prompt with the
/// active chart's rows embedded as a JSON array of flat records.
pub fn build_request(
    input: &AnalysisInput,
    chart_rows: &[SizeRow],
    language: Language,
) -> Result<GenerateContentRequest, serde_json::Error> {
    let chart_context = serde_json::to_string(chart_rows)?;
    let prompt = build_prompt(input, &chart_context);

    Ok(GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part::image(input.photo.clone()), Part::text(prompt)],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(language),
            temperature: ANALYSIS_TEMPERATURE,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::defaults::default_charts;

    fn sample_input(weight: &str) -> AnalysisInput {
        AnalysisInput {
            height: "175".to_string(),
            weight: weight.to_string(),
            photo: PhotoAttachment {
                mime_type: "image/png".to_string(),
                data: "aGVsbG8=".to_string(),
            },
        }
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let chart = &default_charts()[0];
        let request = build_request(&sample_input("70"), &chart.data, Language::En).unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["parts"][0]["inlineData"]["mimeType"], "image/png");
        assert!(value["contents"][0]["parts"][0].get("text").is_none());
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["temperature"], 0.4);

        let required = value["generationConfig"]["responseSchema"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 6);
        assert!(required.contains(&serde_json::json!("recommendedSize")));
    }

    #[test]
    fn prompt_embeds_height_weight_and_chart_json() {
        let chart = &default_charts()[0];
        let request = build_request(&sample_input("70"), &chart.data, Language::Uk).unwrap();
        let prompt = request.contents[0].parts[1].text.as_deref().unwrap();

        assert!(prompt.contains("height (175 cm)"));
        assert!(prompt.contains("weight (70 kg)"));
        assert!(prompt.contains(r#""int":"XS""#));
    }

    #[test]
    fn missing_weight_becomes_unknown() {
        let chart = &default_charts()[0];
        let request = build_request(&sample_input("  "), &chart.data, Language::En).unwrap();
        let prompt = request.contents[0].parts[1].text.as_deref().unwrap();
        assert!(prompt.contains("weight (Unknown)"));
    }

    #[test]
    fn reasoning_description_carries_requested_language() {
        let schema = response_schema(Language::Ru);
        let description = schema["properties"]["reasoning"]["description"]
            .as_str()
            .unwrap();
        assert!(description.contains("Russian"));
    }
}
