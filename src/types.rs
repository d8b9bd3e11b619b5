//! Shared data-model types passed between the shell, its host and the
//! content layer.
//!
//! # Content channel
//!
//! The content layer only ever hears from the shell through
//! [`NavigationEvent`]s on the `switch-component` channel. The payload is a
//! closed set ([`ComponentId`]), serialised as a bare lowercase string so the
//! wire form matches what the content layer listens for:
//!
//! ```json
//! {"channel":"switch-component","payload":"magnetization"}
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ── Content source ─────────────────────────────────────────────────────────────

/// Where a window's content is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Live network address (development).
    Url(String),
    /// Local packaged file (production).
    File(PathBuf),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Url(url) => f.write_str(url),
            ContentSource::File(path) => write!(f, "file://{}", path.display()),
        }
    }
}

// ── Window options ─────────────────────────────────────────────────────────────

/// Construction options for the top-level window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowOptions {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Content scripts get full host capabilities.
    pub node_integration: bool,
    /// Disabled: content shares the preload script's context.
    pub context_isolation: bool,
    /// Script injected before content loads.
    pub preload: PathBuf,
}

// ── Navigation events ──────────────────────────────────────────────────────────

/// Channel name for every navigation event.
pub const SWITCH_COMPONENT_CHANNEL: &str = "switch-component";

/// Views the content layer can switch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentId {
    Magnetization,
    Arbitrary,
}

impl ComponentId {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentId::Magnetization => "magnetization",
            ComponentId::Arbitrary => "arbitrary",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-way message telling the content layer which view to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEvent {
    pub channel: String,
    pub payload: ComponentId,
}

impl NavigationEvent {
    pub fn switch_component(payload: ComponentId) -> Self {
        Self {
            channel: SWITCH_COMPONENT_CHANNEL.to_string(),
            payload,
        }
    }

    /// Wire form, as shown in the inspector's event log.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

// ── Dialogs ────────────────────────────────────────────────────────────────────

/// Informational dialog shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBox {
    pub title: String,
    pub message: String,
    pub buttons: Vec<String>,
}

impl MessageBox {
    pub fn about() -> Self {
        Self {
            title: "About Ising Model Calculator".to_string(),
            message: "Ising Model Calculator v1.0.0".to_string(),
            buttons: vec!["OK".to_string()],
        }
    }
}
