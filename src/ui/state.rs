// src/ui/state.rs
use bevy::prelude::*;
use bevy_egui::egui;
use std::ops::RangeInclusive;

use crate::analysis::{PhotoAttachment, SizeEstimate};
use crate::charts::{EditorError, EditorSession};
use crate::locale::Language;
use crate::ui::photo::LoadedPhoto;

/// Height accepted by the form, in centimeters.
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 140.0..=220.0;
/// Weight accepted by the form when present, in kilograms.
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 40.0..=150.0;

/// Which main panel is showing. While `Analyzing`, exactly one request is
/// in flight and the submit control stays disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppStep {
    #[default]
    Input,
    Analyzing,
    Result,
}

/// All transient frontend state: the step machine, form fields, photo
/// attachment and preview, reference-table toggle, and the chart editor
/// session while the modal is open.
#[derive(Resource, Default)]
pub struct AppUiState {
    pub step: AppStep,
    pub language: Language,
    pub error_banner: Option<String>,
    pub result: Option<SizeEstimate>,

    pub height_input: String,
    pub weight_input: String,
    pub photo: Option<PhotoAttachment>,
    /// Decoded preview waiting to be uploaded as an egui texture.
    pub pending_preview: Option<egui::ColorImage>,
    pub preview_texture: Option<egui::TextureHandle>,
    /// A file is being dragged over the window.
    pub drop_hover: bool,

    pub show_table: bool,
    pub editor: Option<EditorSession>,
    pub editor_error: Option<EditorError>,
}

impl AppUiState {
    pub fn height_valid(&self) -> bool {
        self.height_input
            .trim()
            .parse::<f64>()
            .map(|h| HEIGHT_RANGE_CM.contains(&h))
            .unwrap_or(false)
    }

    /// Weight is optional; when present it must parse into range.
    pub fn weight_valid(&self) -> bool {
        let trimmed = self.weight_input.trim();
        trimmed.is_empty()
            || trimmed
                .parse::<f64>()
                .map(|w| WEIGHT_RANGE_KG.contains(&w))
                .unwrap_or(false)
    }

    /// The form boundary: photo and in-range height required, weight
    /// optional, and never while a request is already in flight.
    pub fn can_submit(&self) -> bool {
        self.step != AppStep::Analyzing
            && self.photo.is_some()
            && self.height_valid()
            && self.weight_valid()
    }

    pub fn attach_photo(&mut self, loaded: LoadedPhoto) {
        self.photo = Some(loaded.attachment);
        self.pending_preview = Some(loaded.preview);
        self.preview_texture = None;
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
        self.pending_preview = None;
        self.preview_texture = None;
    }

    /// Back to a clean input step, keeping the entered measurements.
    pub fn reset_result(&mut self) {
        self.result = None;
        self.error_banner = None;
        self.step = AppStep::Input;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_photo(height: &str, weight: &str) -> AppUiState {
        AppUiState {
            height_input: height.to_string(),
            weight_input: weight.to_string(),
            photo: Some(PhotoAttachment {
                mime_type: "image/png".to_string(),
                data: "aGVsbG8=".to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn height_and_photo_suffice_without_weight() {
        assert!(state_with_photo("175", "").can_submit());
    }

    #[test]
    fn missing_photo_blocks_submission() {
        let mut state = state_with_photo("175", "");
        state.clear_photo();
        assert!(!state.can_submit());
    }

    #[test]
    fn height_out_of_range_blocks_submission() {
        assert!(!state_with_photo("135", "").can_submit());
        assert!(!state_with_photo("221", "").can_submit());
        assert!(!state_with_photo("abc", "").can_submit());
        assert!(!state_with_photo("", "70").can_submit());
    }

    #[test]
    fn weight_must_be_in_range_when_present() {
        assert!(state_with_photo("175", "70").can_submit());
        assert!(!state_with_photo("175", "30").can_submit());
        assert!(!state_with_photo("175", "200").can_submit());
        assert!(!state_with_photo("175", "heavy").can_submit());
    }

    #[test]
    fn no_submission_while_analyzing() {
        let mut state = state_with_photo("175", "70");
        state.step = AppStep::Analyzing;
        assert!(!state.can_submit());
    }

    #[test]
    fn reset_returns_to_input_and_clears_result() {
        let mut state = state_with_photo("175", "70");
        state.step = AppStep::Result;
        state.error_banner = Some("boom".to_string());
        state.reset_result();
        assert_eq!(state.step, AppStep::Input);
        assert!(state.result.is_none());
        assert!(state.error_banner.is_none());
        // Measurements survive a reset.
        assert_eq!(state.height_input, "175");
    }
}
