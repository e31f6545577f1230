use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug, PartialEq, Eq)]
pub enum FileEvent {
    /// The list file was created, modified, or removed.
    Changed(PathBuf),
}

/// Watches a single list file.
///
/// Editors often replace files instead of writing in place, so the parent
/// directory is watched and events are filtered down to the file's path.
pub struct ListWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl ListWatcher {
    /// Start watching `path`. Call `poll()` once per tick.
    pub fn start(path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let target = path.to_path_buf();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = path.file_name().map(|n| n.to_os_string());

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(e) => {
                        tracing::warn!(error = %e, "file watcher error");
                        return;
                    }
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                let relevant = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                if relevant {
                    let _ = tx.send(FileEvent::Changed(target.clone()));
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        Ok(ListWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll. Bursts of events collapse into one.
    pub fn poll(&self) -> Option<FileEvent> {
        let mut last = None;
        while let Ok(evt) = self.rx.try_recv() {
            last = Some(evt);
        }
        last
    }
}
