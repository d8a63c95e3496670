// src/charts/events.rs
use bevy::prelude::Event;

/// Outcome of a chart-store operation surfaced to the user (save applied,
/// category deleted, validation rejected, ...). Collected into the UI
/// feedback line by `ui::systems::handle_ui_feedback`.
#[derive(Event, Debug, Clone)]
pub struct ChartOperationFeedback {
    pub message: String,
    pub is_error: bool,
}
