// src/charts/plugin.rs
use bevy::prelude::*;

use super::events::ChartOperationFeedback;
use super::registry::ChartRegistry;

/// Plugin owning the canonical chart list and its feedback channel.
pub struct ChartsPlugin;

impl Plugin for ChartsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChartRegistry>()
            .add_event::<ChartOperationFeedback>();

        info!("ChartsPlugin initialized with default chart set.");
    }
}
