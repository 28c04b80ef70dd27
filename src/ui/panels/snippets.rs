// LogSage - ui/panels/snippets.rs
//
// Sidebar list of extracted error snippets with the matched line numbers.
// Populated once an analysis has been started for the current document.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::MAX_SIDEBAR_SNIPPETS;

/// Render the snippet sidebar into the given `ui`.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.strong(format!("Error Context ({})", state.snippets.len()));
    ui.separator();

    if state.snippets.is_empty() {
        let hint = if state.document.is_some() {
            "No snippets yet. Run Analyze Logs to extract error context."
        } else {
            "Open a log file to begin."
        };
        ui.label(egui::RichText::new(hint).color(theme::MUTED_TEXT));
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("snippet_list")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for snippet in state.snippets.iter().take(MAX_SIDEBAR_SNIPPETS) {
                ui.label(
                    egui::RichText::new(format!("line {}", snippet.line_number))
                        .color(theme::ERROR_TEXT)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new(&snippet.text)
                        .monospace()
                        .size(theme::SNIPPET_TEXT_SIZE),
                );
                ui.separator();
            }

            let hidden = state.snippets.len().saturating_sub(MAX_SIDEBAR_SNIPPETS);
            if hidden > 0 {
                ui.label(
                    egui::RichText::new(format!("\u{2026} and {hidden} more"))
                        .color(theme::MUTED_TEXT)
                        .italics(),
                );
            }
        });
}
