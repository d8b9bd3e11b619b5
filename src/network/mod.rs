//! Content loading: inter-thread message types for the background loader.

pub mod client;

use std::path::PathBuf;

use crate::types::ContentSource;

/// Sent from the UI thread to the background loader.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// Increments on every load/reload; outcomes for older generations are stale.
    pub generation: u64,
    pub source: ContentSource,
    pub preload: PathBuf,
    /// Force reload: bypass HTTP caches.
    pub ignore_cache: bool,
}

/// What the loader found at a content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub bytes: usize,
    pub preload_found: bool,
}

/// Sent from the background loader back to the UI thread.
#[derive(Debug, Clone)]
pub enum LoaderMessage {
    Loaded {
        generation: u64,
        document: LoadedDocument,
    },
    Failed {
        generation: u64,
        error: String,
    },
}

impl LoaderMessage {
    pub fn generation(&self) -> u64 {
        match self {
            LoaderMessage::Loaded { generation, .. } | LoaderMessage::Failed { generation, .. } => {
                *generation
            }
        }
    }
}
