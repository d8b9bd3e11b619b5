//! The `AppWindow` trait and the shared `AppState` view passed to each window.
//!
//! Floating panels (currently only the inspector) implement `AppWindow`
//! and are drawn by `App::update` after the central content view.

use crate::config::BuildMode;
use crate::shell::window::WindowId;
use crate::types::WindowOptions;
use crate::ui::content::ContentState;

/// Read-only view of shell state shared with every window's `show` call.
pub struct AppState<'a> {
    pub content: &'a ContentState,
    pub mode: BuildMode,
    /// Live window, if the shell has one.
    pub window: Option<WindowId>,
    pub options: Option<&'a WindowOptions>,
}

/// Trait implemented by every floating panel.
///
/// Each window owns its own open/closed flag and any window-specific UI state.
pub trait AppWindow {
    /// Display name, also used as the egui window title.
    fn name(&self) -> &str;

    fn is_open(&self) -> bool;

    /// Force the window open.
    fn open(&mut self);

    /// Force the window closed.
    fn close(&mut self);

    /// Toggle the window's open/closed state.
    fn toggle(&mut self);

    /// Draw the window contents.  Called every frame by `App::update`.
    fn show(&mut self, ctx: &egui::Context, state: &AppState<'_>);
}
