// LogSage - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and manages the analysis lifecycle.

use crate::app::analysis::AnalysisManager;
use crate::app::state::AppState;
use crate::app::upload;
use crate::core::model::AnalysisProgress;
use crate::ui;
use crate::util::constants::ALLOWED_EXTENSIONS;

/// The LogSage application.
pub struct LogSageApp {
    pub state: AppState,
    pub analysis_manager: AnalysisManager,
}

impl LogSageApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            analysis_manager: AnalysisManager::new(),
        }
    }
}

impl eframe::App for LogSageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll for analysis progress
        let messages = self.analysis_manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                AnalysisProgress::Started => {
                    self.state.status_message =
                        "Analyzing\u{2026} querying the AI service.".to_string();
                    self.state.analysis_in_progress = true;
                }
                AnalysisProgress::Completed { text } => {
                    self.state.status_message = "Analysis complete.".to_string();
                    self.state.analysis_result = Some(text);
                    self.state.analysis_in_progress = false;
                }
                AnalysisProgress::Failed { error } => {
                    self.state.status_message = format!("Analysis failed: {error}");
                    self.state.analysis_in_progress = false;
                }
            }
        }
        // Repaint while a request is in flight so the spinner keeps moving.
        if had_messages || self.state.analysis_in_progress {
            ctx.request_repaint();
        }

        // ---- Handle flags set by panels or the CLI ----
        // pending_open: a file path queued for loading.
        if let Some(path) = self.state.pending_open.take() {
            match upload::load_log_document(&path) {
                Ok(document) => {
                    // A new upload starts an independent flow: detach from
                    // any in-flight analysis so its result is never
                    // attributed to the new document.
                    self.analysis_manager.reset();
                    self.state.analysis_in_progress = false;
                    self.state.set_document(document);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load log file");
                    self.state.status_message =
                        crate::util::error::LogSageError::from(e).to_string();
                }
            }
        }
        // request_analysis: the preview panel's Analyze button was clicked.
        if self.state.request_analysis {
            self.state.request_analysis = false;
            if let Some(config) = self.state.config.clone() {
                self.state.snippets = self.state.extract_snippets();
                self.state.analysis_result = None;
                self.state.analysis_in_progress = true;
                self.state.status_message = format!(
                    "Found {} error snippet(s); requesting analysis\u{2026}",
                    self.state.snippets.len()
                );
                self.analysis_manager
                    .start_analysis(self.state.snippets.clone(), config);
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Log\u{2026}").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Log files", ALLOWED_EXTENSIONS)
                            .pick_file()
                        {
                            self.state.pending_open = Some(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.analysis_in_progress {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.state.config.is_none() {
                        ui.label(
                            egui::RichText::new("service not configured")
                                .color(ui::theme::WARNING_TEXT),
                        );
                    } else {
                        ui.label(
                            egui::RichText::new("service ready").color(ui::theme::OK_TEXT),
                        );
                    }
                });
            });
        });

        // Preview pane (top of the central area)
        egui::TopBottomPanel::top("preview_pane")
            .resizable(true)
            .default_height(ui::theme::PREVIEW_PANE_HEIGHT)
            .show(ctx, |ui| {
                ui::panels::preview::render(ui, &mut self.state);
            });

        // Left sidebar: extracted snippets.
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::snippets::render(ui, &self.state);
            });

        // Central panel: analysis results.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::results::render(ui, &self.state);
        });
    }
}
