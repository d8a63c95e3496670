// src/ui/elements/input_form.rs
use bevy::prelude::*;
use bevy_egui::egui;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::analysis::{client, payload, AnalysisInput, AnalysisTaskResult};
use crate::charts::ChartRegistry;
use crate::settings::SessionApiKey;
use crate::ui::photo;
use crate::ui::state::{AppStep, AppUiState};
use crate::ui::systems::SendEvent;

/// The photo + measurements form. Also owns submission: the request runs
/// as a background task and reports back through `SendEvent`.
pub fn show_input_form(
    ui: &mut egui::Ui,
    state: &mut AppUiState,
    registry: &ChartRegistry,
    api_key: &SessionApiKey,
    runtime: &TokioTasksRuntime,
    commands: &mut Commands,
) {
    let t = state.language.translations();

    // A decoded preview waits until an egui context is available.
    if let Some(image) = state.pending_preview.take() {
        state.preview_texture =
            Some(ui.ctx()
                .load_texture("photo-preview", image, egui::TextureOptions::LINEAR));
    }

    ui.label(egui::RichText::new(t.photo_label).strong());
    ui.add_space(4.0);

    if let Some(texture) = state.preview_texture.clone() {
        ui.add(
            egui::Image::new(&texture)
                .max_width(ui.available_width().min(460.0))
                .max_height(340.0),
        );
        if ui.small_button("✖").clicked() {
            state.clear_photo();
        }
    } else {
        let zone_text = format!("📷\n\n{}\n{}\n\n{}", t.drag_drop, t.or_click, t.file_hint);
        let mut zone = ui.add_sized(
            [ui.available_width().min(460.0), 220.0],
            egui::Button::new(zone_text),
        );
        if state.drop_hover {
            zone = zone.highlight();
        }
        if zone.clicked() {
            let picked = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                .pick_file();
            if let Some(path) = picked {
                match photo::load_photo(&path) {
                    Some(loaded) => {
                        info!("Photo attached from picker: '{}'.", path.display());
                        state.attach_photo(loaded);
                    }
                    None => info!("Selected file is not an image; ignoring."),
                }
            }
        }
    }

    ui.add_space(10.0);
    egui::Grid::new("measurements")
        .num_columns(2)
        .spacing([18.0, 6.0])
        .show(ui, |ui| {
            ui.label(t.height_label);
            ui.label(t.weight_label);
            ui.end_row();
            ui.add(
                egui::TextEdit::singleline(&mut state.height_input)
                    .hint_text("175")
                    .desired_width(120.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut state.weight_input)
                    .hint_text("70")
                    .desired_width(120.0),
            );
            ui.end_row();
        });

    ui.add_space(10.0);
    let analyzing = state.step == AppStep::Analyzing;
    let button_label = if analyzing { t.analyzing_btn } else { t.analyze_btn };
    ui.horizontal(|ui| {
        if analyzing {
            ui.add(egui::Spinner::new());
        }
        let submit = ui.add_enabled(
            state.can_submit(),
            egui::Button::new(egui::RichText::new(button_label).strong()),
        );
        if submit.clicked() {
            submit_analysis(state, registry, api_key, runtime, commands);
        }
    });

    ui.add_space(6.0);
    ui.small(t.privacy_note);
}

/// Builds the request from the active chart and current form values, then
/// hands it to the tokio runtime. Exactly one request can be in flight:
/// `can_submit` blocks the button until the terminal result event.
fn submit_analysis(
    state: &mut AppUiState,
    registry: &ChartRegistry,
    api_key: &SessionApiKey,
    runtime: &TokioTasksRuntime,
    commands: &mut Commands,
) {
    let t = state.language.translations();
    let Some(photo) = state.photo.clone() else {
        return;
    };

    let input = AnalysisInput {
        height: state.height_input.trim().to_string(),
        weight: state.weight_input.trim().to_string(),
        photo,
    };

    let request = match payload::build_request(&input, &registry.active().data, state.language) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to serialize analysis request: {}", e);
            state.error_banner = Some(t.error_analysis.to_string());
            return;
        }
    };

    info!(
        "Submitting analysis request (chart '{}', {} rows).",
        registry.active_id(),
        registry.active().data.len()
    );
    state.step = AppStep::Analyzing;
    state.error_banner = None;

    let api_key_value = api_key.0.clone();
    let task_entity = commands.spawn_empty().id();

    runtime.spawn_background_task(move |mut ctx| async move {
        let result = client::analyze_size(&api_key_value, &request)
            .await
            .map_err(|e| e.to_string());
        ctx.run_on_main_thread(move |world_ctx| {
            world_ctx
                .world
                .commands()
                .entity(task_entity)
                .insert(SendEvent::<AnalysisTaskResult> {
                    event: AnalysisTaskResult { result },
                });
        })
        .await;
    });
}
