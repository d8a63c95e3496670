// src/analysis/plugin.rs
use bevy::prelude::*;

use super::events::AnalysisTaskResult;
use crate::ui::systems::{forward_events, handle_analysis_task_results};

/// Plugin wiring the collaborator boundary into the app: the result event
/// plus the systems that drain task results back into UI state.
pub struct AnalysisPlugin;

impl Plugin for AnalysisPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AnalysisTaskResult>().add_systems(
            Update,
            (
                handle_analysis_task_results,
                forward_events::<AnalysisTaskResult>.after(handle_analysis_task_results),
            ),
        );
    }
}
