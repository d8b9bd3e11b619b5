//! Central content view: shows the component the content layer was last
//! told to display, plus the state of the current load.

use crate::types::ComponentId;
use crate::ui::content::LoadStatus;
use crate::ui::window::AppState;
use eframe::egui::{self, Color32, RichText};

#[derive(Default)]
pub struct ContentView;

impl ContentView {
    pub fn render_inline(&self, ui: &mut egui::Ui, state: &AppState<'_>) {
        let content = state.content;

        let heading = match content.active() {
            Some(ComponentId::Magnetization) => "Magnetization Calculator",
            Some(ComponentId::Arbitrary) => "Arbitrary Lattice",
            None => "Ising Model Calculator",
        };
        ui.heading(heading);

        ui.horizontal(|ui| {
            ui.label("Source:");
            match content.source() {
                Some(source) => ui.monospace(source.to_string()),
                None => ui.weak("none"),
            };
        });

        ui.add_space(8.0);

        match content.status() {
            LoadStatus::Idle => {
                ui.weak("No window content.");
            }
            LoadStatus::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading…");
                });
            }
            LoadStatus::Loaded(doc) => {
                ui.label(format!("{} bytes loaded", doc.bytes));
            }
            LoadStatus::Failed(error) => {
                ui.label(
                    RichText::new(format!("Failed to load content: {error}"))
                        .color(Color32::from_rgb(255, 64, 64)),
                );
            }
        }
    }
}
