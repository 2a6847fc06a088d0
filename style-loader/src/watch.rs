//! Reloading a style file when it changes on disk.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::Duration;

use notify::{watcher, DebouncedEvent, RecommendedWatcher, RecursiveMode, Watcher};

use crate::{StyleLoadError, StyleSheet};

const DEBOUNCE_DELAY: Duration = Duration::from_millis(250);

/// Watches a style file.
///
/// Notifications arrive on notify's own thread; call [`poll`] from the UI
/// thread to pick them up.
///
/// [`poll`]: StyleWatcher::poll
pub struct StyleWatcher {
    path: PathBuf,
    rx: Receiver<DebouncedEvent>,
    // dropping the watcher stops the notifications
    _watcher: RecommendedWatcher,
}

impl StyleWatcher {
    pub fn new(path: impl Into<PathBuf>) -> Result<StyleWatcher, StyleLoadError> {
        let path = path.into();
        let (tx, rx) = channel();
        let mut watcher = watcher(tx, DEBOUNCE_DELAY)?;
        watcher.watch(&path, RecursiveMode::NonRecursive)?;
        Ok(StyleWatcher {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// If the file has changed since the last call, load it again.
    pub fn poll(&self) -> Option<Result<StyleSheet, StyleLoadError>> {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(DebouncedEvent::Write(_))
                | Ok(DebouncedEvent::Create(_))
                | Ok(DebouncedEvent::Rename(..)) => changed = true,
                Ok(DebouncedEvent::Error(e, path)) => {
                    log::warn!("error watching {:?}: '{}'", path, e)
                }
                Ok(_) => (),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("style watcher for {:?} disconnected", self.path);
                    break;
                }
            }
        }

        if changed {
            log::info!("reloading styles from {:?}", self.path);
            Some(StyleSheet::load(&self.path))
        } else {
            None
        }
    }
}
