use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug)]
pub enum FileEvent {
    /// The tasks file (or its sibling config) changed on disk.
    Changed(Vec<PathBuf>),
}

/// A file system watcher for the tasks file and its `gantry.toml` sibling.
pub struct ScheduleWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl ScheduleWatcher {
    /// Start watching the directory containing `tasks_path`.
    /// Returns a `ScheduleWatcher` whose `poll()` method should be called each tick.
    pub fn start(tasks_path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let watched_file = tasks_path.to_path_buf();
        let config_file = tasks_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("gantry.toml");
        // Watch the directory, not the file: editors replace files on save
        let dir = tasks_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                let relevant: Vec<PathBuf> = event
                    .paths
                    .into_iter()
                    .filter(|p| p == &watched_file || p == &config_file)
                    .collect();

                if !relevant.is_empty() {
                    let _ = tx.send(FileEvent::Changed(relevant));
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        Ok(ScheduleWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending file events.
    /// Returns all queued events (may be empty).
    pub fn poll(&self) -> Vec<FileEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }
}
