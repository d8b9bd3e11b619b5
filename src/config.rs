//! Process-level configuration, resolved once at start-up.
//!
//! The build mode decides where the window's content comes from:
//!
//! * **Development** loads from the local dev server at [`DEV_SERVER_URL`]
//!   and opens the inspector automatically.
//! * **Production** loads the packaged entry file next to the install dir.
//!
//! `ISING_IS_DEV` forces the mode (`0` = production, any other integer =
//! development); otherwise debug builds are development builds.

use std::env;
use std::path::{Path, PathBuf};

use crate::types::{ContentSource, WindowOptions};

/// Address of the content dev server.
pub const DEV_SERVER_URL: &str = "http://localhost:3000";

/// Packaged content entry, relative to the install directory.
pub const PACKAGED_ENTRY: &str = "../build/index.html";

/// Preload script injected before content loads, relative to the install directory.
pub const PRELOAD_SCRIPT: &str = "preload.js";

pub const WINDOW_TITLE: &str = "Ising Model Calculator";
pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 900.0;

const DEV_ENV_VAR: &str = "ISING_IS_DEV";
const INSTALL_DIR_ENV_VAR: &str = "ISING_INSTALL_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Resolve the mode from the raw `ISING_IS_DEV` value, falling back to
    /// the build profile when it is unset or not an integer.
    pub fn resolve(flag: Option<&str>, debug_build: bool) -> Self {
        match flag.and_then(|v| v.trim().parse::<i64>().ok()) {
            Some(0) => BuildMode::Production,
            Some(_) => BuildMode::Development,
            None if debug_build => BuildMode::Development,
            None => BuildMode::Production,
        }
    }

    pub fn is_dev(self) -> bool {
        self == BuildMode::Development
    }
}

/// Everything the shell needs to know about its environment.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub mode: BuildMode,
    /// Directory the application is installed in; relative paths hang off it.
    pub install_dir: PathBuf,
}

impl ShellConfig {
    pub fn new(mode: BuildMode, install_dir: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            install_dir: install_dir.into(),
        }
    }

    /// Read the process environment. Called exactly once, from `main`.
    pub fn from_env() -> Self {
        let flag = env::var(DEV_ENV_VAR).ok();
        let mode = BuildMode::resolve(flag.as_deref(), cfg!(debug_assertions));

        let install_dir = match env::var_os(INSTALL_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => default_install_dir(),
        };

        log::info!(
            "Resolved build mode {mode:?}, install dir {}",
            install_dir.display()
        );
        Self::new(mode, install_dir)
    }

    /// Content to load into the main window for the current build mode.
    pub fn content_source(&self) -> ContentSource {
        match self.mode {
            BuildMode::Development => ContentSource::Url(DEV_SERVER_URL.to_string()),
            BuildMode::Production => ContentSource::File(self.install_dir.join(PACKAGED_ENTRY)),
        }
    }

    pub fn preload_path(&self) -> PathBuf {
        self.install_dir.join(PRELOAD_SCRIPT)
    }

    /// Options for the single top-level window.
    pub fn window_options(&self) -> WindowOptions {
        WindowOptions {
            title: WINDOW_TITLE.to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            node_integration: true,
            context_isolation: false,
            preload: self.preload_path(),
        }
    }
}

fn default_install_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
