// src/ui/elements/main_view.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::charts::events::ChartOperationFeedback;
use crate::charts::{ChartRegistry, EditorSession};
use crate::locale::{chart_display_name, Language};
use crate::settings::SessionApiKey;
use crate::ui::elements::{chart_editor, input_form, result_card, size_table};
use crate::ui::state::{AppStep, AppUiState};
use crate::ui::UiFeedbackState;

/// The single egui frame: header, reference side panel, and the central
/// input/result area, plus the chart-editor modal when open.
#[allow(clippy::too_many_arguments)]
pub fn app_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<AppUiState>,
    mut registry: ResMut<ChartRegistry>,
    ui_feedback: Res<UiFeedbackState>,
    api_key: Res<SessionApiKey>,
    runtime: Res<TokioTasksRuntime>,
    mut feedback_writer: EventWriter<ChartOperationFeedback>,
    mut commands: Commands,
) {
    let ctx = contexts.ctx_mut();
    let t = state.language.translations();

    chart_editor::show_chart_editor(ctx, &mut state, &mut registry, &mut feedback_writer);

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading(format!("👕 {}", t.app_title));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_id_salt("language")
                    .selected_text(state.language.short_label())
                    .width(64.0)
                    .show_ui(ui, |ui| {
                        for lang in Language::ALL {
                            ui.selectable_value(&mut state.language, lang, lang.short_label());
                        }
                    });
                if ui.button("⚙").on_hover_text(t.editor_title).clicked()
                    && state.editor.is_none()
                {
                    let mut session = EditorSession::open(registry.charts());
                    chart_editor::seed_localized_name(&mut session, t);
                    state.editor = Some(session);
                    state.editor_error = None;
                }
            });
        });
        ui.label(t.app_subtitle);
        ui.add_space(4.0);
    });

    egui::TopBottomPanel::bottom("feedback").show(ctx, |ui| {
        if ui_feedback.last_message.is_empty() {
            ui.small("");
        } else {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
    });

    egui::SidePanel::right("reference")
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            let toggle_label = if state.show_table {
                t.hide_table
            } else {
                t.show_table
            };
            if ui.button(format!("⊞ {}", toggle_label)).clicked() {
                state.show_table = !state.show_table;
            }
            ui.separator();

            if state.show_table {
                let chart = registry.active();
                ui.strong(chart_display_name(t, chart));
                ui.add_space(4.0);
                let highlight = state
                    .result
                    .as_ref()
                    .map(|result| result.recommended_size.clone());
                size_table::show_size_table(ui, chart, highlight.as_deref());
            } else {
                ui.strong(t.instructions_title);
                ui.add_space(4.0);
                ui.label(format!("• {}", t.instructions_step1));
                ui.label(format!("• {}", t.instructions_step2));
                ui.label(format!("• {}", t.instructions_step3));
                ui.add_space(8.0);
                ui.small(t.instructions_note);
            }
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(t.select_category.to_uppercase())
                    .small()
                    .strong(),
            );

            let entries: Vec<(String, String)> = registry
                .charts()
                .iter()
                .map(|c| (c.id.clone(), chart_display_name(t, c).to_string()))
                .collect();
            let active_label = chart_display_name(t, registry.active()).to_string();
            egui::ComboBox::from_id_salt("chart-category")
                .width(280.0)
                .selected_text(active_label)
                .show_ui(ui, |ui| {
                    for (id, name) in &entries {
                        if ui
                            .selectable_label(registry.active_id() == id.as_str(), name)
                            .clicked()
                        {
                            registry.set_active(id);
                        }
                    }
                });

            let active = registry.active();
            ui.small(format!(
                "{}: {}  |  {} {}",
                t.using_table,
                chart_display_name(t, active),
                active.data.len(),
                t.rows
            ));
            ui.separator();

            if let Some(message) = state.error_banner.clone() {
                ui.colored_label(egui::Color32::from_rgb(200, 60, 60), message);
                ui.add_space(6.0);
            }

            match state.step {
                AppStep::Input | AppStep::Analyzing => {
                    input_form::show_input_form(
                        ui,
                        &mut state,
                        &registry,
                        &api_key,
                        &runtime,
                        &mut commands,
                    );
                }
                AppStep::Result => {
                    if let Some(result) = state.result.clone() {
                        if result_card::show_result_card(ui, &result, t) {
                            state.reset_result();
                        }
                    } else {
                        // A result step without a result cannot render; fall back.
                        state.step = AppStep::Input;
                    }
                }
            }
        });
    });
}
