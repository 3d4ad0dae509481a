//! Settings file watcher for hot reload.
//!
//! Watches the directory containing the settings file (editors often replace
//! files by rename, which a watch on the file itself would miss) and reports
//! changes to that one file through a non-blocking [`SettingsWatcher::poll`].

use crate::error::{InkboardError, InkboardResult};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use tracing::{debug, warn};

pub use crate::settings::default_settings_path;

/// What happened to the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    // Dropping the watcher stops the watch
    _watcher: RecommendedWatcher,
    events: Receiver<SettingsEvent>,
}

impl SettingsWatcher {
    /// Start watching `path`. The file itself need not exist yet, but its
    /// directory is created if missing.
    pub fn new(path: impl Into<PathBuf>) -> InkboardResult<Self> {
        let path = path.into();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let (tx, events) = mpsc::channel();
        let target = path.clone();
        let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
            let event = match result {
                Ok(event) => classify(&event, &target),
                Err(e) => Some(SettingsEvent::Error(e.to_string())),
            };
            if let Some(event) = event {
                // The receiver is gone once the watcher is dropped
                let _ = tx.send(event);
            }
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        debug!(path = %path.display(), "Watching settings file");
        Ok(Self {
            path,
            _watcher: watcher,
            events,
        })
    }

    /// Watch the settings file at its default location.
    pub fn for_default_path() -> InkboardResult<Self> {
        let path = default_settings_path().ok_or(InkboardError::NoConfigDir)?;
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next pending change, if any. Bursts of events (one save often
    /// produces several) are collapsed into the most recent one.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.events.try_recv() {
                Ok(event) => latest = Some(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!(path = %self.path.display(), "Settings watcher disconnected");
                    break;
                }
            }
        }
        latest
    }
}

impl std::fmt::Debug for SettingsWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsWatcher").field("path", &self.path).finish()
    }
}

fn classify(event: &Event, target: &Path) -> Option<SettingsEvent> {
    let file_name = target.file_name()?;
    if !event.paths.iter().any(|p| p.file_name() == Some(file_name)) {
        return None;
    }

    match event.kind {
        EventKind::Create(_) => Some(SettingsEvent::Created),
        EventKind::Modify(_) => Some(SettingsEvent::Modified),
        EventKind::Remove(_) => Some(SettingsEvent::Deleted),
        _ => None,
    }
}
