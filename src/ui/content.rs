//! State of the content layer hosted in the main window: what is loaded,
//! which component is showing, and which navigation events arrived.

use std::collections::VecDeque;

use crate::network::{LoadedDocument, LoaderMessage};
use crate::types::{ComponentId, ContentSource, NavigationEvent, SWITCH_COMPONENT_CHANNEL};

const EVENT_LOG_CAP: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded(LoadedDocument),
    Failed(String),
}

#[derive(Debug)]
pub struct ContentState {
    source: Option<ContentSource>,
    generation: u64,
    status: LoadStatus,
    active: Option<ComponentId>,
    /// Wire form of received navigation events, oldest first.
    events: VecDeque<String>,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            source: None,
            generation: 0,
            status: LoadStatus::Idle,
            active: None,
            events: VecDeque::with_capacity(EVENT_LOG_CAP),
        }
    }
}

impl ContentState {
    pub fn source(&self) -> Option<&ContentSource> {
        self.source.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn active(&self) -> Option<ComponentId> {
        self.active
    }

    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }

    /// Forget everything about the previous window's content. The generation
    /// keeps counting so late outcomes for the old window stay stale.
    pub fn reset(&mut self) {
        self.source = None;
        self.status = LoadStatus::Idle;
        self.active = None;
        self.events.clear();
    }

    /// Start loading `source`; returns the generation tagging the request.
    pub fn begin_load(&mut self, source: ContentSource) -> u64 {
        self.source = Some(source);
        self.generation += 1;
        self.status = LoadStatus::Loading;
        self.generation
    }

    /// Start reloading the current source, if there is one.
    pub fn begin_reload(&mut self) -> Option<(ContentSource, u64)> {
        let source = self.source.clone()?;
        let generation = self.begin_load(source.clone());
        Some((source, generation))
    }

    /// Apply a loader outcome. Returns `false` for stale outcomes.
    pub fn apply(&mut self, msg: LoaderMessage) -> bool {
        if msg.generation() != self.generation {
            return false;
        }
        self.status = match msg {
            LoaderMessage::Loaded { document, .. } => LoadStatus::Loaded(document),
            LoaderMessage::Failed { error, .. } => LoadStatus::Failed(error),
        };
        true
    }

    /// Handle an event from the shell. Only `switch-component` is understood.
    pub fn navigate(&mut self, event: &NavigationEvent) {
        if event.channel != SWITCH_COMPONENT_CHANNEL {
            return;
        }
        if self.events.len() == EVENT_LOG_CAP {
            self.events.pop_front();
        }
        self.events.push_back(event.to_json());
        self.active = Some(event.payload);
    }
}
