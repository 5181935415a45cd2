//! Platform sleep and the single-task slot used by the notice auto-dismiss
//! and the account view's save.

use std::time::Duration;

use dioxus::core::Task;

/// Wait for `duration` on the current platform's executor.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// A handle to a running task that can be stopped.
pub trait Cancel {
    fn cancel(self);
}

impl Cancel for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

/// Holds at most one pending task. Storing a new one or clearing the slot
/// cancels the task it held.
#[derive(Debug)]
pub struct TaskSlot<T: Cancel> {
    current: Option<T>,
}

impl<T: Cancel> Default for TaskSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Cancel> TaskSlot<T> {
    pub fn replace(&mut self, task: T) {
        self.cancel();
        self.current = Some(task);
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.current.take() {
            task.cancel();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.current.is_some()
    }
}
