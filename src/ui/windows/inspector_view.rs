//! Content-inspection panel ("DevTools"): document status, the navigation
//! event log and egui's own inspector.

use crate::ui::content::LoadStatus;
use crate::ui::window::{AppState, AppWindow};
use eframe::egui::{self, Vec2};

#[derive(Default)]
pub struct InspectorView {
    open: bool,
}

impl AppWindow for InspectorView {
    fn name(&self) -> &str {
        "DevTools"
    }
    fn is_open(&self) -> bool {
        self.open
    }
    fn open(&mut self) {
        self.open = true;
    }
    fn close(&mut self) {
        self.open = false;
    }
    fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn show(&mut self, ctx: &egui::Context, state: &AppState<'_>) {
        egui::Window::new(self.name())
            .default_size(Vec2::new(420.0, 480.0))
            .open(&mut self.open)
            .show(ctx, |ui| {
                let content = state.content;

                egui::CollapsingHeader::new("Document")
                    .default_open(true)
                    .show(ui, |ui| {
                        egui::Grid::new("inspector_document")
                            .num_columns(2)
                            .show(ui, |ui| {
                                ui.label("Mode");
                                ui.monospace(format!("{:?}", state.mode));
                                ui.end_row();

                                ui.label("Window");
                                ui.monospace(
                                    state
                                        .window
                                        .map(|id| id.0.to_string())
                                        .unwrap_or_else(|| "none".to_string()),
                                );
                                ui.end_row();

                                ui.label("Source");
                                ui.monospace(
                                    content
                                        .source()
                                        .map(ToString::to_string)
                                        .unwrap_or_default(),
                                );
                                ui.end_row();

                                ui.label("Load #");
                                ui.monospace(content.generation().to_string());
                                ui.end_row();

                                ui.label("Status");
                                let (status, preload) = match content.status() {
                                    LoadStatus::Idle => ("idle".to_string(), None),
                                    LoadStatus::Loading => ("loading".to_string(), None),
                                    LoadStatus::Loaded(doc) => {
                                        (format!("loaded, {} bytes", doc.bytes), Some(doc.preload_found))
                                    }
                                    LoadStatus::Failed(e) => (format!("failed: {e}"), None),
                                };
                                ui.monospace(status);
                                ui.end_row();

                                ui.label("Preload");
                                ui.monospace(match preload {
                                    Some(true) => "injected",
                                    Some(false) => "not found",
                                    None => "-",
                                });
                                ui.end_row();
                            });
                    });

                if let Some(options) = state.options {
                    egui::CollapsingHeader::new("Web preferences").show(ui, |ui| {
                        egui::Grid::new("inspector_prefs")
                            .num_columns(2)
                            .show(ui, |ui| {
                                ui.label("Node integration");
                                ui.monospace(options.node_integration.to_string());
                                ui.end_row();

                                ui.label("Context isolation");
                                ui.monospace(options.context_isolation.to_string());
                                ui.end_row();

                                ui.label("Preload script");
                                ui.monospace(options.preload.display().to_string());
                                ui.end_row();
                            });
                    });
                }

                egui::CollapsingHeader::new("Events")
                    .default_open(true)
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .max_height(160.0)
                            .stick_to_bottom(true)
                            .show(ui, |ui| {
                                for event in content.events() {
                                    ui.monospace(event);
                                }
                            });
                    });

                egui::CollapsingHeader::new("egui").show(ui, |ui| {
                    ctx.inspection_ui(ui);
                });
            });
    }
}
