// src/ui/elements/size_table.rs
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::charts::highlight::row_matches;
use crate::charts::ChartCategory;

const HIGHLIGHT_COLOR: egui::Color32 = egui::Color32::from_rgb(139, 92, 246);

/// Read-only reference table for the active chart. Rows matching the
/// recommended size are emphasized; several rows may match at once.
pub fn show_size_table(ui: &mut egui::Ui, chart: &ChartCategory, highlight: Option<&str>) {
    let Some(first) = chart.data.first() else {
        return;
    };
    let headers: Vec<&String> = first.keys().collect();

    egui::ScrollArea::both()
        .id_salt("size-table-scroll")
        .max_height(460.0)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            for _ in &headers {
                table = table.column(Column::auto().at_least(56.0));
            }

            table
                .header(22.0, |mut header_row| {
                    for header in &headers {
                        header_row.col(|ui| {
                            ui.strong(header.to_uppercase());
                        });
                    }
                })
                .body(|mut body| {
                    for record in &chart.data {
                        let matched = highlight
                            .map(|recommended| row_matches(record, recommended))
                            .unwrap_or(false);
                        body.row(20.0, |mut row| {
                            for header in &headers {
                                row.col(|ui| {
                                    let value =
                                        record.get(*header).map(String::as_str).unwrap_or("");
                                    if matched {
                                        ui.label(
                                            egui::RichText::new(value)
                                                .strong()
                                                .color(HIGHLIGHT_COLOR),
                                        );
                                    } else {
                                        ui.label(value);
                                    }
                                });
                            }
                        });
                    }
                });
        });
}
