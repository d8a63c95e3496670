// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod photo;
pub mod state;
pub mod systems;

use elements::main_view::app_ui;
use state::AppUiState;
use systems::{handle_dropped_files, handle_ui_feedback};

/// Last chart-store operation message shown in the footer line.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the single-window egui frontend.
pub struct AppUiPlugin;

impl Plugin for AppUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<AppUiState>()
            .add_systems(Update, (handle_ui_feedback, handle_dropped_files))
            .add_systems(EguiContextPass, app_ui);

        info!("AppUiPlugin initialized.");
    }
}
