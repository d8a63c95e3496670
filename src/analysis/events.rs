// src/analysis/events.rs
use bevy::prelude::Event;

use super::response::SizeEstimate;

/// Terminal outcome of one background analysis request. Written back onto
/// the main thread via `ui::systems::SendEvent` and consumed by
/// `ui::systems::handle_analysis_task_results`.
#[derive(Event, Debug, Clone)]
pub struct AnalysisTaskResult {
    pub result: Result<SizeEstimate, String>,
}
