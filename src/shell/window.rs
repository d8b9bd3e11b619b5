//! The shell's handle on its top-level window.
//!
//! A [`WindowHandle`] is the sending half of a command channel; the host
//! keeps the receiving half and applies each [`WindowCommand`] to the native
//! window and its content layer. Dropping the handle closes the channel.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::{Result, ShellError};
use crate::types::{ComponentId, ContentSource, NavigationEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// Commands a window handle sends to whatever hosts the window.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCommand {
    Load(ContentSource),
    Reload { ignore_cache: bool },
    Send(NavigationEvent),
    OpenDevTools,
    ToggleDevTools,
    ToggleFullscreen,
}

pub struct WindowHandle {
    id: WindowId,
    source: Option<ContentSource>,
    tx: Sender<WindowCommand>,
}

impl WindowHandle {
    /// Create a handle plus the receiver the host drains.
    pub fn new(id: WindowId) -> (Self, Receiver<WindowCommand>) {
        let (tx, rx) = mpsc::channel();
        let handle = Self {
            id,
            source: None,
            tx,
        };
        (handle, rx)
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Source of the most recent [`load`](Self::load), if any.
    pub fn source(&self) -> Option<&ContentSource> {
        self.source.as_ref()
    }

    pub fn load(&mut self, source: ContentSource) -> Result<()> {
        self.source = Some(source.clone());
        self.command(WindowCommand::Load(source))
    }

    pub fn reload(&self, ignore_cache: bool) -> Result<()> {
        self.command(WindowCommand::Reload { ignore_cache })
    }

    /// Emit a navigation event on the `switch-component` channel.
    pub fn switch_component(&self, component: ComponentId) -> Result<()> {
        self.command(WindowCommand::Send(NavigationEvent::switch_component(
            component,
        )))
    }

    pub fn open_dev_tools(&self) -> Result<()> {
        self.command(WindowCommand::OpenDevTools)
    }

    pub fn toggle_dev_tools(&self) -> Result<()> {
        self.command(WindowCommand::ToggleDevTools)
    }

    pub fn toggle_fullscreen(&self) -> Result<()> {
        self.command(WindowCommand::ToggleFullscreen)
    }

    fn command(&self, cmd: WindowCommand) -> Result<()> {
        self.tx.send(cmd).map_err(|_| ShellError::ChannelClosed)
    }
}

impl std::fmt::Debug for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowHandle")
            .field("id", &self.id)
            .field("source", &self.source)
            .finish()
    }
}
