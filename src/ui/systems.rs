// src/ui/systems.rs
use bevy::prelude::*;
use bevy::window::FileDragAndDrop;
use std::any;

use crate::analysis::AnalysisTaskResult;
use crate::charts::events::ChartOperationFeedback;
use crate::ui::photo;
use crate::ui::state::{AppStep, AppUiState};
use crate::ui::UiFeedbackState;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<ChartOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Prioritize showing the first non-error, or the last error
        if !event.is_error {
            break;
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Drains background analysis results into the step machine. A success
/// moves to the result card; a failure re-shows the input step with a
/// localized banner and leaves resubmission to the user.
pub fn handle_analysis_task_results(
    mut ev_results: EventReader<AnalysisTaskResult>,
    mut state: ResMut<AppUiState>,
) {
    for event in ev_results.read() {
        if state.step != AppStep::Analyzing {
            info!("Ignoring analysis result received outside the Analyzing step.");
            continue;
        }
        match &event.result {
            Ok(estimate) => {
                info!(
                    "Analysis complete: recommended size '{}' (confidence {:.0}).",
                    estimate.recommended_size, estimate.confidence
                );
                state.result = Some(estimate.clone());
                state.error_banner = None;
                state.step = AppStep::Result;
            }
            Err(message) => {
                error!("Analysis failed: {}", message);
                let translations = state.language.translations();
                state.error_banner = Some(translations.error_analysis.to_string());
                state.step = AppStep::Input;
            }
        }
    }
}

/// Native drag-and-drop intake. Non-image files are silently ignored;
/// drops are only accepted while the input form is showing.
pub fn handle_dropped_files(
    mut drop_events: EventReader<FileDragAndDrop>,
    mut state: ResMut<AppUiState>,
) {
    for event in drop_events.read() {
        match event {
            FileDragAndDrop::HoveredFile { .. } => state.drop_hover = true,
            FileDragAndDrop::HoveredFileCanceled { .. } => state.drop_hover = false,
            FileDragAndDrop::DroppedFile { path_buf, .. } => {
                state.drop_hover = false;
                if state.step != AppStep::Input {
                    continue;
                }
                if let Some(loaded) = photo::load_photo(path_buf) {
                    info!("Photo attached from drop: '{}'.", path_buf.display());
                    state.attach_photo(loaded);
                }
            }
        }
    }
}

/// Carrier component for events produced on background tasks; spawned via
/// `Commands` from `run_on_main_thread` and drained by `forward_events`.
#[derive(Component)]
pub struct SendEvent<E: Event> {
    pub event: E,
}

pub fn forward_events<E: Event + Clone + std::fmt::Debug>(
    mut commands: Commands,
    mut writer: EventWriter<E>,
    query: Query<(Entity, &SendEvent<E>)>,
    mut event_type_name: Local<String>,
) {
    if event_type_name.is_empty() {
        *event_type_name = any::type_name::<E>()
            .split("::")
            .last()
            .unwrap_or("UnknownEvent")
            .to_string();
    }

    for (entity, send_event_component) in query.iter() {
        debug!(
            "Forwarding event type '{}': {:?}",
            *event_type_name, send_event_component.event
        );
        writer.write(send_event_component.event.clone());
        commands.entity(entity).despawn();
    }
}
