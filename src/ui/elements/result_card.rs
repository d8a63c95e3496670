// src/ui/elements/result_card.rs
use bevy_egui::egui;

use crate::analysis::SizeEstimate;
use crate::locale::Translations;

const ACCENT_COLOR: egui::Color32 = egui::Color32::from_rgb(139, 92, 246);

/// Shows the recommendation card. Returns true when "try again" was
/// clicked and the caller should reset to the input step.
pub fn show_result_card(
    ui: &mut egui::Ui,
    result: &SizeEstimate,
    t: &'static Translations,
) -> bool {
    let mut reset = false;

    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(t.rec_title.to_uppercase())
                .small()
                .color(egui::Color32::GRAY),
        );
        ui.label(
            egui::RichText::new(&result.recommended_size)
                .size(56.0)
                .strong()
                .color(ACCENT_COLOR),
        );
        ui.add_space(16.0);

        ui.label(
            egui::RichText::new(t.ai_estimates.to_uppercase())
                .small()
                .color(egui::Color32::GRAY),
        );
        ui.add_space(4.0);
        ui.columns(3, |columns| {
            show_measurement(&mut columns[0], t.chest, result.estimated_chest);
            show_measurement(&mut columns[1], t.waist, result.estimated_waist);
            show_measurement(&mut columns[2], t.hips, result.estimated_hips);
        });

        ui.add_space(16.0);
        ui.group(|ui| {
            ui.set_width(ui.available_width().min(460.0));
            ui.label(&result.reasoning);
        });

        ui.add_space(12.0);
        if ui.button(format!("⟲ {}", t.try_again)).clicked() {
            reset = true;
        }
    });

    reset
}

fn show_measurement(ui: &mut egui::Ui, label: &str, value: f64) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(label.to_uppercase())
                .small()
                .color(egui::Color32::GRAY),
        );
        ui.label(egui::RichText::new(format!("{value:.0}")).size(22.0).strong());
        ui.small("см");
    });
}
