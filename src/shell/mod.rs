//! Application shell: window lifecycle, menu wiring and navigation events.
//!
//! The [`Shell`] never talks to a GUI toolkit directly. Each lifecycle
//! signal is a method taking the [`Host`] that delivered it, so the same
//! controller runs under eframe and under the recording host in the tests.
//!
//! Lifecycle:
//!
//! ```text
//! Uninitialized ──ready──▶ Ready ──closed──▶ Windowless ──activate──▶ Ready
//!                            │                   │
//!                            └──quit / closed────┴──quit──▶ Terminated
//! ```
//!
//! `Windowless` is only entered on platforms that keep applications
//! resident without windows.

pub mod menu;
pub mod window;

use crate::config::ShellConfig;
use crate::types::{MessageBox, WindowOptions};
use menu::{MenuAction, MenuCommand, MenuTree, StandardAction};
use window::WindowHandle;

/// Platform services the shell relies on.
pub trait Host {
    /// True where closing every window leaves the app running (macOS dock).
    fn resident_without_windows(&self) -> bool;

    /// Create the native window and return the shell's handle on it.
    fn create_window(&mut self, options: &WindowOptions) -> WindowHandle;

    /// Install `menu` as the application menu, replacing any previous one.
    fn set_application_menu(&mut self, menu: MenuTree);

    /// Show a non-blocking informational dialog.
    fn show_message_box(&mut self, message: MessageBox);

    /// Terminate the application.
    fn quit(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Uninitialized,
    Ready,
    Windowless,
    Terminated,
}

pub struct Shell {
    config: ShellConfig,
    window: Option<WindowHandle>,
    state: ShellState,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            window: None,
            state: ShellState::Uninitialized,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn window(&self) -> Option<&WindowHandle> {
        self.window.as_ref()
    }

    // ── Lifecycle signals ──────────────────────────────────────────────────────

    /// Platform ready: build the window, load content, install the menu.
    pub fn on_ready(&mut self, host: &mut dyn Host) {
        if self.state != ShellState::Uninitialized {
            log::warn!("Ignoring ready signal in state {:?}", self.state);
            return;
        }
        self.create_window(host);
    }

    /// The window reported itself closed.
    pub fn on_window_closed(&mut self) {
        if self.state == ShellState::Terminated {
            return;
        }
        if let Some(window) = self.window.take() {
            log::debug!("Window {:?} closed", window.id());
        }
    }

    /// No windows remain.
    pub fn on_all_windows_closed(&mut self, host: &mut dyn Host) {
        if self.state == ShellState::Terminated {
            return;
        }
        if host.resident_without_windows() {
            log::info!("All windows closed; staying resident");
            self.state = ShellState::Windowless;
        } else {
            self.quit(host);
        }
    }

    /// Platform activation (e.g. dock icon clicked). Recreates the window
    /// only when none exists.
    pub fn on_activate(&mut self, host: &mut dyn Host) {
        match self.state {
            ShellState::Uninitialized | ShellState::Terminated => {}
            ShellState::Ready | ShellState::Windowless => {
                if self.window.is_none() {
                    self.create_window(host);
                }
            }
        }
    }

    // ── Menu ───────────────────────────────────────────────────────────────────

    /// Route an activated menu entry.
    pub fn dispatch(&mut self, host: &mut dyn Host, command: MenuCommand) {
        if self.state == ShellState::Terminated {
            return;
        }
        match command {
            MenuCommand::Standard(StandardAction::Quit) => self.quit(host),
            MenuCommand::Standard(action) => self.window_action(action),
            MenuCommand::Custom(MenuAction::SwitchComponent(component)) => {
                if let Some(window) = &self.window {
                    log::debug!("Switching content to {component}");
                    let _ = window.switch_component(component);
                }
            }
            MenuCommand::Custom(MenuAction::About) => {
                host.show_message_box(MessageBox::about());
            }
        }
    }

    fn window_action(&self, action: StandardAction) {
        let Some(window) = &self.window else {
            return;
        };
        // Delivery is best-effort; a closed channel means the window is going away.
        let _ = match action {
            StandardAction::Reload | StandardAction::ForceReload => {
                let ignore_cache = action == StandardAction::ForceReload;
                if let Some(source) = window.source() {
                    log::debug!("Reloading {source} (ignore_cache={ignore_cache})");
                }
                window.reload(ignore_cache)
            }
            StandardAction::ToggleDevTools => window.toggle_dev_tools(),
            StandardAction::ToggleFullscreen => window.toggle_fullscreen(),
            StandardAction::Quit => Ok(()),
        };
    }

    // ── Internals ──────────────────────────────────────────────────────────────

    fn create_window(&mut self, host: &mut dyn Host) {
        let mut window = host.create_window(&self.config.window_options());
        let source = self.config.content_source();
        log::info!("Window {:?} loading {source}", window.id());
        let _ = window.load(source);

        host.set_application_menu(MenuTree::application());

        if self.config.mode.is_dev() {
            let _ = window.open_dev_tools();
        }

        self.window = Some(window);
        self.state = ShellState::Ready;
    }

    fn quit(&mut self, host: &mut dyn Host) {
        log::info!("Quitting");
        self.window = None;
        self.state = ShellState::Terminated;
        host.quit();
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::mpsc::Receiver;

    use super::window::{WindowCommand, WindowId};
    use super::*;
    use crate::config::BuildMode;
    use crate::types::{ComponentId, ContentSource, NavigationEvent};

    /// Host that records everything the shell asks of it.
    #[derive(Default)]
    struct TestHost {
        resident: bool,
        windows: Vec<(WindowOptions, Receiver<WindowCommand>)>,
        menus: Vec<MenuTree>,
        dialogs: Vec<MessageBox>,
        quit_calls: usize,
    }

    impl TestHost {
        fn resident() -> Self {
            Self {
                resident: true,
                ..Default::default()
            }
        }

        /// Commands received by the `n`th window created so far.
        fn commands(&self, n: usize) -> Vec<WindowCommand> {
            self.windows[n].1.try_iter().collect()
        }
    }

    impl Host for TestHost {
        fn resident_without_windows(&self) -> bool {
            self.resident
        }

        fn create_window(&mut self, options: &WindowOptions) -> WindowHandle {
            let id = WindowId(self.windows.len() as u64 + 1);
            let (handle, rx) = WindowHandle::new(id);
            self.windows.push((options.clone(), rx));
            handle
        }

        fn set_application_menu(&mut self, menu: MenuTree) {
            self.menus.push(menu);
        }

        fn show_message_box(&mut self, message: MessageBox) {
            self.dialogs.push(message);
        }

        fn quit(&mut self) {
            self.quit_calls += 1;
        }
    }

    fn shell(mode: BuildMode) -> Shell {
        Shell::new(ShellConfig::new(mode, "/opt/ising"))
    }

    fn nav(component: ComponentId) -> WindowCommand {
        WindowCommand::Send(NavigationEvent::switch_component(component))
    }

    fn switch(component: ComponentId) -> MenuCommand {
        MenuCommand::Custom(MenuAction::SwitchComponent(component))
    }

    #[test]
    fn dev_startup_loads_dev_server_and_opens_devtools() {
        let mut host = TestHost::default();
        let mut shell = shell(BuildMode::Development);
        shell.on_ready(&mut host);

        assert_eq!(shell.state(), ShellState::Ready);
        assert_eq!(host.windows.len(), 1);
        assert_eq!(
            host.commands(0),
            vec![
                WindowCommand::Load(ContentSource::Url("http://localhost:3000".into())),
                WindowCommand::OpenDevTools,
            ]
        );
        assert_eq!(host.menus, vec![MenuTree::application()]);
    }

    #[test]
    fn prod_startup_loads_packaged_file_without_devtools() {
        let mut host = TestHost::default();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);

        assert_eq!(
            host.commands(0),
            vec![WindowCommand::Load(ContentSource::File(PathBuf::from(
                "/opt/ising/../build/index.html"
            )))]
        );
    }

    #[test]
    fn window_gets_fixed_options() {
        let mut host = TestHost::default();
        shell(BuildMode::Production).on_ready(&mut host);

        let opts = &host.windows[0].0;
        assert_eq!((opts.width, opts.height), (1200.0, 900.0));
        assert!(!opts.context_isolation);
        assert_eq!(opts.preload, PathBuf::from("/opt/ising/preload.js"));
    }

    #[test]
    fn second_ready_signal_is_ignored() {
        let mut host = TestHost::default();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);
        shell.on_ready(&mut host);
        assert_eq!(host.windows.len(), 1);
    }

    #[test]
    fn view_entries_emit_navigation_events() {
        let mut host = TestHost::default();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);
        host.commands(0);

        shell.dispatch(&mut host, switch(ComponentId::Magnetization));
        shell.dispatch(&mut host, switch(ComponentId::Arbitrary));
        shell.dispatch(&mut host, switch(ComponentId::Magnetization));

        assert_eq!(
            host.commands(0),
            vec![
                nav(ComponentId::Magnetization),
                nav(ComponentId::Arbitrary),
                nav(ComponentId::Magnetization),
            ]
        );
        assert!(host.dialogs.is_empty());
    }

    #[test]
    fn about_shows_dialog_and_sends_nothing() {
        let mut host = TestHost::default();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);
        host.commands(0);

        shell.dispatch(&mut host, MenuCommand::Custom(MenuAction::About));

        assert_eq!(host.dialogs.len(), 1);
        let dialog = &host.dialogs[0];
        assert_eq!(dialog.title, "About Ising Model Calculator");
        assert_eq!(dialog.message, "Ising Model Calculator v1.0.0");
        assert_eq!(dialog.buttons, vec!["OK".to_string()]);
        assert!(host.commands(0).is_empty());
    }

    #[test]
    fn standard_actions_target_live_window() {
        let mut host = TestHost::default();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);
        host.commands(0);

        for action in [
            StandardAction::Reload,
            StandardAction::ForceReload,
            StandardAction::ToggleDevTools,
            StandardAction::ToggleFullscreen,
        ] {
            shell.dispatch(&mut host, MenuCommand::Standard(action));
        }

        assert_eq!(
            host.commands(0),
            vec![
                WindowCommand::Reload {
                    ignore_cache: false
                },
                WindowCommand::Reload { ignore_cache: true },
                WindowCommand::ToggleDevTools,
                WindowCommand::ToggleFullscreen,
            ]
        );
    }

    #[test]
    fn closing_last_window_quits_on_non_resident_platform() {
        let mut host = TestHost::default();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);

        shell.on_window_closed();
        assert!(shell.window().is_none());
        shell.on_all_windows_closed(&mut host);

        assert_eq!(shell.state(), ShellState::Terminated);
        assert_eq!(host.quit_calls, 1);

        shell.on_activate(&mut host);
        assert_eq!(host.windows.len(), 1);
    }

    #[test]
    fn resident_platform_stays_alive_and_reactivates_once() {
        let mut host = TestHost::resident();
        let mut shell = shell(BuildMode::Development);
        shell.on_ready(&mut host);

        shell.on_window_closed();
        shell.on_all_windows_closed(&mut host);
        assert_eq!(shell.state(), ShellState::Windowless);
        assert_eq!(host.quit_calls, 0);

        shell.on_activate(&mut host);
        shell.on_activate(&mut host);
        assert_eq!(host.windows.len(), 2);
        assert_eq!(shell.state(), ShellState::Ready);
        assert_eq!(shell.window().map(|w| w.id()), Some(WindowId(2)));

        // Recreated window follows the startup sequence.
        assert_eq!(
            host.commands(1),
            vec![
                WindowCommand::Load(ContentSource::Url("http://localhost:3000".into())),
                WindowCommand::OpenDevTools,
            ]
        );
        assert_eq!(host.menus.len(), 2);
    }

    #[test]
    fn activate_with_live_window_does_nothing() {
        let mut host = TestHost::default();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);
        shell.on_activate(&mut host);
        assert_eq!(host.windows.len(), 1);
    }

    #[test]
    fn navigation_goes_only_to_current_window() {
        let mut host = TestHost::resident();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);
        shell.on_window_closed();
        shell.on_all_windows_closed(&mut host);
        shell.on_activate(&mut host);
        host.commands(1);

        shell.dispatch(&mut host, switch(ComponentId::Arbitrary));

        assert_eq!(host.commands(1), vec![nav(ComponentId::Arbitrary)]);
        assert!(
            !host
                .commands(0)
                .contains(&nav(ComponentId::Arbitrary))
        );
    }

    #[test]
    fn quit_from_menu_terminates_even_when_resident() {
        let mut host = TestHost::resident();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);

        shell.dispatch(&mut host, MenuCommand::Standard(StandardAction::Quit));
        assert_eq!(shell.state(), ShellState::Terminated);
        assert_eq!(host.quit_calls, 1);
        assert!(shell.window().is_none());

        // Everything after termination is inert.
        shell.dispatch(&mut host, MenuCommand::Custom(MenuAction::About));
        shell.on_all_windows_closed(&mut host);
        assert!(host.dialogs.is_empty());
        assert_eq!(host.quit_calls, 1);
    }

    #[test]
    fn window_actions_without_window_are_noops() {
        let mut host = TestHost::resident();
        let mut shell = shell(BuildMode::Production);
        shell.on_ready(&mut host);
        shell.on_window_closed();
        shell.on_all_windows_closed(&mut host);

        shell.dispatch(&mut host, switch(ComponentId::Magnetization));
        shell.dispatch(&mut host, MenuCommand::Standard(StandardAction::Reload));
        assert_eq!(shell.state(), ShellState::Windowless);
        assert_eq!(host.windows.len(), 1);
    }
}
