//! Keyed background tasks
//!
//! At most one task runs per key: spawning under a busy key aborts the older
//! task first. A finished task's action goes to the runtime inbox. An aborted
//! task never delivers.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::action::Action;

pub struct TaskManager<A> {
    running: HashMap<&'static str, AbortHandle>,
    inbox: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A> {
    pub(crate) fn new(inbox: mpsc::UnboundedSender<A>) -> Self {
        Self {
            running: HashMap::new(),
            inbox,
        }
    }

    /// Abort the task under `key`, if any
    pub fn cancel(&mut self, key: &'static str) {
        if let Some(handle) = self.running.remove(key) {
            handle.abort();
            debug!(task = key, "Task aborted");
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.running.drain() {
            handle.abort();
        }
    }
}

impl<A: Action> TaskManager<A> {
    /// Run `task` in the background and dispatch the action it resolves to
    pub fn spawn<F>(&mut self, key: &'static str, task: F)
    where
        F: Future<Output = A> + Send + 'static,
    {
        self.cancel(key);

        let inbox = self.inbox.clone();
        let handle = tokio::spawn(async move {
            let action = task.await;
            if inbox.send(action).is_err() {
                debug!(task = key, "Runtime gone, discarding task result");
            }
        });
        self.running.insert(key, handle.abort_handle());
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
