//! [`Host`] implementation backed by the eframe viewport.
//!
//! eframe owns a single native viewport for the whole process. The shell's
//! window handle maps onto it: creating a window (re)configures and restores
//! the viewport, and commands sent through the handle are drained by
//! `App::update` every frame.

use std::sync::mpsc::Receiver;

use crate::shell::Host;
use crate::shell::menu::MenuTree;
use crate::shell::window::{WindowCommand, WindowHandle, WindowId};
use crate::types::{MessageBox, WindowOptions};
use crate::ui::windows::message_box::MessageBoxView;

pub struct EguiHost {
    resident: bool,
    next_window_id: u64,
    /// Receiving end of the live window's command channel.
    commands: Option<Receiver<WindowCommand>>,
    /// Options of the live window.
    options: Option<WindowOptions>,
    /// Set on window creation; applied to the viewport on the next frame.
    pending_viewport: Option<WindowOptions>,
    menu: Option<MenuTree>,
    dialogs: MessageBoxView,
    quit_requested: bool,
}

impl EguiHost {
    pub fn new(resident: bool) -> Self {
        Self {
            resident,
            next_window_id: 1,
            commands: None,
            options: None,
            pending_viewport: None,
            menu: None,
            dialogs: MessageBoxView::default(),
            quit_requested: false,
        }
    }

    /// Whether this platform keeps apps alive with no windows.
    pub fn platform_resident() -> bool {
        cfg!(target_os = "macos")
    }

    /// Commands queued by the live window since the last call.
    pub fn drain_commands(&self) -> Vec<WindowCommand> {
        self.commands
            .as_ref()
            .map(|rx| rx.try_iter().collect())
            .unwrap_or_default()
    }

    /// The native window went away; stop listening to its handle.
    pub fn window_destroyed(&mut self) {
        self.commands = None;
        self.options = None;
    }

    pub fn options(&self) -> Option<&WindowOptions> {
        self.options.as_ref()
    }

    pub fn take_pending_viewport(&mut self) -> Option<WindowOptions> {
        self.pending_viewport.take()
    }

    pub fn menu(&self) -> Option<&MenuTree> {
        self.menu.as_ref()
    }

    pub fn dialogs_mut(&mut self) -> &mut MessageBoxView {
        &mut self.dialogs
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

impl Host for EguiHost {
    fn resident_without_windows(&self) -> bool {
        self.resident
    }

    fn create_window(&mut self, options: &WindowOptions) -> WindowHandle {
        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;

        let (handle, rx) = WindowHandle::new(id);
        self.commands = Some(rx);
        self.options = Some(options.clone());
        self.pending_viewport = Some(options.clone());
        log::debug!("Created window {id:?} ({}x{})", options.width, options.height);
        handle
    }

    fn set_application_menu(&mut self, menu: MenuTree) {
        self.menu = Some(menu);
    }

    fn show_message_box(&mut self, message: MessageBox) {
        self.dialogs.push(message);
    }

    fn quit(&mut self) {
        self.quit_requested = true;
    }
}
