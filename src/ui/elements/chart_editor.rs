// src/ui/elements/chart_editor.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::charts::events::ChartOperationFeedback;
use crate::charts::{ChartRegistry, EditorError, EditorSession};
use crate::locale::{chart_display_name, Translations};
use crate::ui::state::AppUiState;

fn editor_error_text(t: &'static Translations, error: EditorError) -> &'static str {
    match error {
        EditorError::DuplicateHeader => t.error_unique,
        EditorError::EmptyHeader => t.error_empty,
        EditorError::LastCategory => t.error_delete_last,
    }
}

/// Seeds the name field with the localized display name of the active
/// chart. Built-in charts open under their translated names, and saving
/// bakes the current-language name in, exactly like renaming would.
pub fn seed_localized_name(session: &mut EditorSession, t: &'static Translations) {
    let localized = session
        .charts()
        .iter()
        .find(|c| c.id == session.active_id())
        .map(|c| chart_display_name(t, c).to_string());
    if let Some(name) = localized {
        session.name_edit = name;
    }
}

/// The modal chart editor. Draws nothing while no session is open. All
/// edits go into the session's working copy; the live registry changes
/// only on a successful save.
pub fn show_chart_editor(
    ctx: &egui::Context,
    state: &mut AppUiState,
    registry: &mut ChartRegistry,
    feedback_writer: &mut EventWriter<ChartOperationFeedback>,
) {
    let t = state.language.translations();
    let current_error = state.editor_error;
    let Some(session) = state.editor.as_mut() else {
        return;
    };

    let mut open = true;
    let mut save_clicked = false;
    let mut cancel_clicked = false;
    let mut set_error: Option<Option<EditorError>> = None;

    egui::Window::new(t.editor_title)
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([860.0, 540.0])
        .show(ctx, |ui| {
            if let Some(error) = current_error {
                ui.colored_label(
                    egui::Color32::from_rgb(200, 60, 60),
                    editor_error_text(t, error),
                );
                ui.separator();
            }

            ui.horizontal_top(|ui| {
                // Sidebar: category list.
                ui.vertical(|ui| {
                    ui.set_width(200.0);
                    ui.label(
                        egui::RichText::new(t.your_categories.to_uppercase())
                            .small()
                            .strong(),
                    );
                    ui.add_space(4.0);

                    let entries: Vec<(String, String)> = session
                        .charts()
                        .iter()
                        .map(|c| (c.id.clone(), chart_display_name(t, c).to_string()))
                        .collect();
                    let active_id = session.active_id().to_string();
                    let can_delete = entries.len() > 1;

                    let mut select_id: Option<String> = None;
                    let mut delete_id: Option<String> = None;
                    for (id, name) in &entries {
                        let selected = *id == active_id;
                        ui.horizontal(|ui| {
                            let label = if selected {
                                session.name_edit.clone()
                            } else {
                                name.clone()
                            };
                            if ui.selectable_label(selected, label).clicked() && !selected {
                                select_id = Some(id.clone());
                            }
                            if can_delete && ui.small_button("🗑").clicked() {
                                delete_id = Some(id.clone());
                            }
                        });
                    }

                    ui.add_space(8.0);
                    if ui.button(format!("+ {}", t.add_table)).clicked() {
                        session.add_category();
                        set_error = Some(None);
                    }

                    if let Some(id) = select_id {
                        session.select_chart(&id);
                        seed_localized_name(session, t);
                        set_error = Some(None);
                    }
                    if let Some(id) = delete_id {
                        match session.delete_category(&id) {
                            Ok(()) => set_error = Some(None),
                            Err(e) => set_error = Some(Some(e)),
                        }
                    }
                });

                ui.separator();

                // Editor area: name field, toolbar, grid.
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(t.category_name_placeholder).small());
                        ui.add(
                            egui::TextEdit::singleline(&mut session.name_edit)
                                .desired_width(220.0),
                        );
                        ui.separator();
                        if ui.button(format!("+ {}", t.add_column)).clicked() {
                            session.grid.add_column(t.new_column);
                        }
                    });
                    ui.add_space(6.0);

                    egui::ScrollArea::both()
                        .id_salt("chart-grid-scroll")
                        .max_height(380.0)
                        .show(ui, |ui| {
                            let col_count = session.grid.headers.len();
                            let mut remove_col: Option<usize> = None;
                            let mut remove_row: Option<usize> = None;

                            egui::Grid::new("chart-grid").striped(true).show(ui, |ui| {
                                ui.label("#");
                                for (i, header) in
                                    session.grid.headers.iter_mut().enumerate()
                                {
                                    ui.horizontal(|ui| {
                                        ui.add(
                                            egui::TextEdit::singleline(header)
                                                .desired_width(96.0),
                                        );
                                        if col_count > 1 && ui.small_button("✖").clicked() {
                                            remove_col = Some(i);
                                        }
                                    });
                                }
                                ui.end_row();

                                for (row_index, row) in
                                    session.grid.rows.iter_mut().enumerate()
                                {
                                    if ui.small_button("🗑").clicked() {
                                        remove_row = Some(row_index);
                                    }
                                    for cell in row.iter_mut() {
                                        ui.add(
                                            egui::TextEdit::singleline(cell)
                                                .desired_width(96.0),
                                        );
                                    }
                                    ui.end_row();
                                }
                            });

                            if let Some(i) = remove_col {
                                session.grid.remove_column(i);
                            }
                            if let Some(i) = remove_row {
                                session.grid.remove_row(i);
                            }
                        });

                    if ui.button(format!("+ {}", t.add_row)).clicked() {
                        session.grid.add_row();
                    }

                    ui.add_space(8.0);
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button(t.cancel).clicked() {
                            cancel_clicked = true;
                        }
                        if ui
                            .button(egui::RichText::new(t.save).strong())
                            .clicked()
                        {
                            save_clicked = true;
                        }
                    });
                });
            });
        });

    if save_clicked {
        match session.save() {
            Ok(charts) => {
                registry.replace_all(charts);
                feedback_writer.write(ChartOperationFeedback {
                    message: format!("Size charts saved ({} categories).", registry.charts().len()),
                    is_error: false,
                });
                info!("Chart editor saved; live chart list replaced.");
                state.editor = None;
                state.editor_error = None;
                return;
            }
            Err(e) => {
                set_error = Some(Some(e));
            }
        }
    }

    if let Some(error) = set_error {
        state.editor_error = error;
    }

    if cancel_clicked || !open {
        state.editor = None;
        state.editor_error = None;
        info!("Chart editor closed; working copy discarded.");
    }
}
