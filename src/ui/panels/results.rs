// LogSage - ui/panels/results.rs
//
// Analysis result pane. The service response is rendered as-is; no markup
// sanitisation beyond what the model returned.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the analysis results pane into the given `ui`.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.strong("Analysis Results");
        if let Some(ref result) = state.analysis_result {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Copy").clicked() {
                    ui.ctx().copy_text(result.clone());
                }
            });
        }
    });
    ui.separator();

    match state.analysis_result {
        Some(ref result) => {
            egui::ScrollArea::vertical()
                .id_salt("analysis_result")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(result.as_str()));
                });
        }
        None if state.analysis_in_progress => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Extracting error context and querying the AI service\u{2026}");
            });
        }
        None => {
            ui.label(
                egui::RichText::new("Results will appear here after an analysis completes.")
                    .color(theme::MUTED_TEXT),
            );
        }
    }
}
