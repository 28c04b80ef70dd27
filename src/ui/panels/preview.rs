// LogSage - ui/panels/preview.rs
//
// Raw log preview pane: the first part of the loaded document in a
// monospace scroll area, plus the Analyze action.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::PREVIEW_MAX_CHARS;

/// Render the preview pane into the given `ui`.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.strong("Raw Log Preview");
        if let Some(ref doc) = state.document {
            ui.label(
                egui::RichText::new(doc.display_name())
                    .color(theme::MUTED_TEXT)
                    .monospace(),
            );
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let analyze = ui.add_enabled(
                state.can_analyze(),
                egui::Button::new("Analyze Logs"),
            );
            if analyze.clicked() {
                state.request_analysis = true;
            }
            if state.analysis_in_progress {
                ui.spinner();
                ui.label("Analyzing\u{2026}");
            }
        });
    });
    ui.separator();

    match state.document {
        Some(ref doc) => {
            // Truncate on a char boundary; a byte slice could split a
            // multi-byte character and panic.
            let preview: String = doc.text.chars().take(PREVIEW_MAX_CHARS).collect();
            let truncated = doc.text.chars().count() > PREVIEW_MAX_CHARS;

            egui::ScrollArea::vertical()
                .id_salt("raw_preview")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(preview).monospace());
                    if truncated {
                        ui.label(
                            egui::RichText::new(format!(
                                "\u{2026} preview truncated to {PREVIEW_MAX_CHARS} characters"
                            ))
                            .color(theme::MUTED_TEXT)
                            .italics(),
                        );
                    }
                });
        }
        None => {
            ui.label(
                egui::RichText::new("No log file loaded. Use File \u{25b8} Open Log\u{2026}")
                    .color(theme::MUTED_TEXT),
            );
        }
    }
}
