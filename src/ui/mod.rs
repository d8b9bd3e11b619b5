//! UI layer: App orchestrator, eframe-backed host, content state, and panels.

pub mod app;
pub mod content;
pub mod host;
pub mod window;
pub mod windows;
