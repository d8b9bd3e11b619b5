//! Informational dialogs queued by the shell (e.g. About).

use std::collections::VecDeque;

use crate::types::MessageBox;
use eframe::egui;

#[derive(Default)]
pub struct MessageBoxView {
    queue: VecDeque<MessageBox>,
}

impl MessageBoxView {
    pub fn push(&mut self, message: MessageBox) {
        self.queue.push_back(message);
    }

    /// Draw the oldest dialog. Any of its buttons dismisses it; the rest of
    /// the UI stays interactive.
    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(message) = self.queue.front() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(message.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message.message.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    for button in &message.buttons {
                        if ui.button(button.as_str()).clicked() {
                            dismissed = true;
                        }
                    }
                });
            });

        if dismissed {
            self.queue.pop_front();
        }
    }
}
