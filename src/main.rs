// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;

mod analysis;
mod charts;
mod locale;
mod settings;
mod ui;

use analysis::AnalysisPlugin;
use charts::ChartsPlugin;
use settings::SessionApiKey;
use ui::AppUiPlugin;

fn main() {
    // Missing credential is fatal before any request machinery exists.
    let api_key = match settings::load_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .insert_resource(SessionApiKey(api_key))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "FitLens — AI Size Assistant".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .add_plugins(ChartsPlugin)
        .add_plugins(AnalysisPlugin)
        .add_plugins(AppUiPlugin)
        .add_systems(Startup, log_api_key_status)
        .run();
}

fn log_api_key_status(api_key: Res<SessionApiKey>) {
    info!(
        "API key loaded from {} ({} chars).",
        settings::API_KEY_ENV_VAR,
        api_key.0.len()
    );
}
