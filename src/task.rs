//! Long-running operations on a dedicated worker thread.
//!
//! The worker sends progress events and exactly one final result over a
//! channel. The caller decides how to wait; the work itself cannot be
//! interrupted once started.

use crate::error::{Result, SweeperError};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Update sent by a background task.
#[derive(Debug, Clone)]
pub enum TaskEvent<P, T> {
    /// Intermediate progress.
    Progress(P),
    /// The task finished with this result.
    Finished(T),
}

/// Handle to an operation running on its own thread.
pub struct BackgroundTask<P, T> {
    name: String,
    events: Receiver<TaskEvent<P, T>>,
    handle: Option<JoinHandle<()>>,
}

impl<P, T> BackgroundTask<P, T>
where
    P: Send + 'static,
    T: Send + 'static,
{
    /// Start `work` on a new named thread. `work` receives a reporter for
    /// progress events; its return value becomes the task result.
    pub fn spawn<F>(name: &str, work: F) -> Result<Self>
    where
        F: FnOnce(&dyn Fn(P)) -> T + Send + 'static,
    {
        let (tx, events) = mpsc::channel();

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                let progress_tx = tx.clone();
                let report = move |p: P| {
                    // The receiver may have gone away; the work still runs to completion
                    let _ = progress_tx.send(TaskEvent::Progress(p));
                };
                let result = work(&report);
                let _ = tx.send(TaskEvent::Finished(result));
            })
            .map_err(|source| SweeperError::Io {
                path: name.into(),
                source,
            })?;

        tracing::debug!(task = name, "Background task started");

        Ok(Self {
            name: name.to_string(),
            events,
            handle: Some(handle),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Block until the task finishes.
    ///
    /// `on_progress` runs on the calling thread for every progress event;
    /// `on_tick` runs whenever `tick` elapses without an event.
    pub fn wait_with<FP, FT>(
        mut self,
        tick: Duration,
        mut on_progress: FP,
        mut on_tick: FT,
    ) -> Result<T>
    where
        FP: FnMut(P),
        FT: FnMut(),
    {
        loop {
            match self.events.recv_timeout(tick) {
                Ok(TaskEvent::Progress(p)) => on_progress(p),
                Ok(TaskEvent::Finished(result)) => {
                    if let Some(handle) = self.handle.take() {
                        let _ = handle.join();
                    }
                    tracing::debug!(task = %self.name, "Background task finished");
                    return Ok(result);
                }
                Err(RecvTimeoutError::Timeout) => on_tick(),
                Err(RecvTimeoutError::Disconnected) => {
                    if let Some(handle) = self.handle.take() {
                        let _ = handle.join();
                    }
                    return Err(SweeperError::Task(self.name.clone()));
                }
            }
        }
    }

    /// Block until the task finishes, discarding progress.
    pub fn wait(self) -> Result<T> {
        self.wait_with(Duration::from_millis(100), |_| {}, || {})
    }
}
