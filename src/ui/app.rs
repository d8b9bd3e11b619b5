//! Application orchestrator: binds the shell to the eframe viewport and
//! draws the menu bar, content view and floating panels.

use std::sync::mpsc::{self as std_mpsc, Receiver as StdReceiver};
use std::thread;

use crate::config::ShellConfig;
use crate::network::{LoadRequest, LoaderMessage, client};
use crate::shell::menu::{MenuCommand, MenuEntry, StandardAction};
use crate::shell::window::WindowCommand;
use crate::shell::{Shell, ShellState};
use crate::types::ContentSource;
use crate::ui::content::ContentState;
use crate::ui::host::EguiHost;
use crate::ui::window::{AppState, AppWindow};
use crate::ui::windows::{content_view::ContentView, inspector_view::InspectorView};
use eframe::egui::{self, Key, KeyboardShortcut, Modifiers, ViewportCommand};
use once_cell::sync::Lazy;
use tokio::sync::mpsc::{self as tokio_mpsc, Sender as TokioSender};

// ── Accelerators ───────────────────────────────────────────────────────────────

/// Shortcuts for the standard menu actions. Entries with more modifiers come
/// first: egui matches shortcuts ignoring extra SHIFT.
static SHORTCUTS: Lazy<Vec<(KeyboardShortcut, StandardAction)>> = Lazy::new(|| {
    vec![
        (
            KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::R),
            StandardAction::ForceReload,
        ),
        (
            KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::I),
            StandardAction::ToggleDevTools,
        ),
        (
            KeyboardShortcut::new(Modifiers::COMMAND, Key::R),
            StandardAction::Reload,
        ),
        (
            KeyboardShortcut::new(Modifiers::COMMAND, Key::Q),
            StandardAction::Quit,
        ),
        (
            KeyboardShortcut::new(Modifiers::NONE, Key::F11),
            StandardAction::ToggleFullscreen,
        ),
    ]
});

/// Un-minimized frames tolerated after a resident close before the shell
/// assumes the platform refused to minimize the window.
const MINIMIZE_GRACE_FRAMES: u32 = 2;

fn shortcut_for(action: StandardAction) -> Option<&'static KeyboardShortcut> {
    SHORTCUTS
        .iter()
        .find(|(_, a)| *a == action)
        .map(|(shortcut, _)| shortcut)
}

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// Lifecycle decisions live in [`Shell`]; `App` only:
/// 1. Turns viewport events, shortcuts and menu clicks into shell signals.
/// 2. Applies the window commands the shell sends to the viewport and
///    content layer.
/// 3. Forwards loads to the background loader and collects outcomes.
pub struct App {
    shell: Shell,
    host: EguiHost,
    rx: StdReceiver<LoaderMessage>,
    load_tx: TokioSender<LoadRequest>,

    content: ContentState,
    content_view: ContentView,
    inspector: InspectorView,

    /// Close has been sent to the viewport after a quit.
    close_sent: bool,
    /// Windowless and the viewport has been seen minimized; un-minimizing it
    /// is the activation signal.
    restore_armed: bool,
    /// Un-minimized frames seen while windowless.
    windowless_frames: u32,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ShellConfig) -> Self {
        let host = EguiHost::new(EguiHost::platform_resident());
        Self::with_host(cc.egui_ctx.clone(), config, host)
    }

    fn with_host(ctx: egui::Context, config: ShellConfig, host: EguiHost) -> Self {
        let (tx, rx) = std_mpsc::channel();
        let (load_tx, load_rx) = tokio_mpsc::channel(16);

        // Background Tokio runtime for content loads, on a dedicated OS thread.
        thread::spawn(move || {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(client::run_loader_loop(&tx, &ctx, load_rx)),
                Err(e) => log::error!("Failed to build Tokio runtime: {e}"),
            }
        });

        let mut app = Self {
            shell: Shell::new(config),
            host,
            rx,
            load_tx,
            content: ContentState::default(),
            content_view: ContentView,
            inspector: InspectorView::default(),
            close_sent: false,
            restore_armed: false,
            windowless_frames: 0,
        };

        // The creation context is eframe's "ready" signal.
        app.shell.on_ready(&mut app.host);
        app
    }

    fn dispatch(&mut self, command: MenuCommand) {
        self.shell.dispatch(&mut self.host, command);
    }

    // ── Input ──────────────────────────────────────────────────────────────────

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let fired: Vec<StandardAction> = ctx.input_mut(|i| {
            SHORTCUTS
                .iter()
                .filter(|(shortcut, _)| i.consume_shortcut(shortcut))
                .map(|(_, action)| *action)
                .collect()
        });
        for action in fired {
            self.dispatch(MenuCommand::Standard(action));
        }
    }

    /// Draw the application menu; returns the entry clicked this frame.
    fn menu_bar(&self, ctx: &egui::Context) -> Option<MenuCommand> {
        let menu = self.host.menu()?;
        let mut clicked = None;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                for group in menu.groups() {
                    ui.menu_button(group.label.as_str(), |ui| {
                        for entry in &group.entries {
                            let Some(label) = entry.label() else {
                                ui.separator();
                                continue;
                            };
                            let mut button = egui::Button::new(label);
                            if let MenuEntry::Standard(action) = entry {
                                if let Some(shortcut) = shortcut_for(*action) {
                                    button = button.shortcut_text(ctx.format_shortcut(shortcut));
                                }
                            }
                            if ui.add(button).clicked() {
                                clicked = entry.command();
                                ui.close();
                            }
                        }
                    });
                }
            });
        });

        clicked
    }

    /// Map viewport close/restore onto the shell's closed/activate signals.
    fn handle_viewport(&mut self, ctx: &egui::Context) {
        let (close_requested, minimized, fullscreen, focused) = ctx.input(|i| {
            let vp = i.viewport();
            (
                vp.close_requested(),
                vp.minimized.unwrap_or(false),
                vp.fullscreen.unwrap_or(false),
                vp.focused.unwrap_or(true),
            )
        });

        if close_requested {
            if self.host.quit_requested() {
                return;
            }
            self.shell.on_window_closed();
            self.host.window_destroyed();
            self.content.reset();
            self.inspector.close();
            self.shell.on_all_windows_closed(&mut self.host);

            if !self.host.quit_requested() {
                // Stay resident: keep the native window around, out of the way.
                // A fullscreen window cannot be minimized.
                if fullscreen {
                    ctx.send_viewport_cmd(ViewportCommand::Fullscreen(false));
                }
                ctx.send_viewport_cmd(ViewportCommand::CancelClose);
                ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
                self.restore_armed = false;
                self.windowless_frames = 0;
            }
            return;
        }

        if self.shell.state() != ShellState::Windowless {
            return;
        }
        if minimized {
            self.restore_armed = true;
            return;
        }
        self.windowless_frames = self.windowless_frames.saturating_add(1);
        // Restored after a minimize, or the minimize never happened and the
        // window is still up and in use.
        let refused = self.windowless_frames > MINIMIZE_GRACE_FRAMES && focused;
        if self.restore_armed || refused {
            self.restore_armed = false;
            self.windowless_frames = 0;
            self.shell.on_activate(&mut self.host);
        }
    }

    // ── Window commands ────────────────────────────────────────────────────────

    fn apply_window_commands(&mut self, ctx: &egui::Context) {
        if let Some(options) = self.host.take_pending_viewport() {
            ctx.send_viewport_cmd(ViewportCommand::Title(options.title.clone()));
            ctx.send_viewport_cmd(ViewportCommand::InnerSize(egui::vec2(
                options.width,
                options.height,
            )));
            ctx.send_viewport_cmd(ViewportCommand::Minimized(false));
            ctx.send_viewport_cmd(ViewportCommand::Focus);
        }

        for command in self.host.drain_commands() {
            match command {
                WindowCommand::Load(source) => {
                    self.content.reset();
                    self.inspector.close();
                    let generation = self.content.begin_load(source.clone());
                    self.request_load(source, generation, false);
                }
                WindowCommand::Reload { ignore_cache } => {
                    if let Some((source, generation)) = self.content.begin_reload() {
                        self.request_load(source, generation, ignore_cache);
                    }
                }
                WindowCommand::Send(event) => self.content.navigate(&event),
                WindowCommand::OpenDevTools => self.inspector.open(),
                WindowCommand::ToggleDevTools => self.inspector.toggle(),
                WindowCommand::ToggleFullscreen => {
                    let fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                    ctx.send_viewport_cmd(ViewportCommand::Fullscreen(!fullscreen));
                }
            }
        }
    }

    fn request_load(&mut self, source: ContentSource, generation: u64, ignore_cache: bool) {
        let Some(options) = self.host.options() else {
            return;
        };
        let req = LoadRequest {
            generation,
            source,
            preload: options.preload.clone(),
            ignore_cache,
        };
        if let Err(e) = self.load_tx.try_send(req) {
            log::warn!("Content loader unavailable: {e}");
            self.content.apply(LoaderMessage::Failed {
                generation,
                error: format!("content loader unavailable: {e}"),
            });
        }
    }

    /// One UI frame.
    fn frame(&mut self, ctx: &egui::Context) {
        // ── 1. Input: shortcuts, menu, viewport events ────────────────────────
        self.handle_shortcuts(ctx);
        if let Some(command) = self.menu_bar(ctx) {
            self.dispatch(command);
        }
        self.handle_viewport(ctx);

        // ── 2. Apply what the shell asked for ─────────────────────────────────
        self.apply_window_commands(ctx);

        // ── 3. Drain loader outcomes ──────────────────────────────────────────
        while let Ok(msg) = self.rx.try_recv() {
            self.content.apply(msg);
        }

        if self.host.quit_requested() {
            if !self.close_sent {
                self.close_sent = true;
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
            return;
        }

        // ── 4. Content + floating panels ──────────────────────────────────────
        let state = AppState {
            content: &self.content,
            mode: self.shell.config().mode,
            window: self.shell.window().map(|w| w.id()),
            options: self.host.options(),
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            self.content_view.render_inline(ui, &state);
        });

        if self.inspector.is_open() {
            self.inspector.show(ctx, &state);
        }
        self.host.dialogs_mut().show(ctx);
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}
