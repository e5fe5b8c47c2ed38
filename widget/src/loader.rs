//! Background index loading.
//!
//! The index is fetched once on a dedicated thread. Its single outcome is
//! delivered over a channel so the owner can keep handling input while
//! the load is in flight.

use fastsearch_core::{IndexConfig, IndexSource, LoadError, Record, load_index};
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

type LoadResult = Result<Vec<Record>, LoadError>;

/// An index load in progress.
pub struct PendingIndex {
    rx: Receiver<LoadResult>,
    taken: bool,
}

impl PendingIndex {
    /// Starts loading `source` on a background thread.
    pub fn spawn(source: IndexSource, timeout: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(load_index(&source, timeout));
        });

        Self { rx, taken: false }
    }

    /// Resolves the configured location and starts loading it.
    pub fn from_config(config: &IndexConfig) -> Result<Self, LoadError> {
        Ok(Self::spawn(config.source()?, config.timeout()))
    }

    /// Returns the outcome if the load has finished and was not taken yet.
    pub fn try_take(&mut self) -> Option<LoadResult> {
        if self.taken {
            return None;
        }

        let outcome = match self.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(loader_stopped()),
        };
        self.taken = true;
        Some(outcome)
    }

    /// Blocks until the load finishes.
    pub fn wait(self) -> LoadResult {
        self.rx.recv().unwrap_or_else(|_| Err(loader_stopped()))
    }
}

fn loader_stopped() -> LoadError {
    LoadError::Io(io::Error::other("index loader stopped without a result"))
}
