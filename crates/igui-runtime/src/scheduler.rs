#![forbid(unsafe_code)]

//! Next-tick task queue.
//!
//! Reacting to a close notification must not re-enter the session it
//! belongs to while the host is still unwinding that notification. Work of
//! that kind is queued here and run by the next
//! [`GuiManager::tick`](crate::GuiManager::tick).
//!
//! Tasks run in FIFO order. A task queued while a tick is draining the
//! queue lands in the following tick, never the current one.

use std::collections::VecDeque;
use std::fmt;

use crate::host::Host;
use crate::manager::GuiManager;

/// One deferred unit of work.
pub type Task = Box<dyn FnOnce(&mut GuiManager, &mut dyn Host)>;

/// FIFO of tasks waiting for the next tick.
#[derive(Default)]
pub struct TaskQueue {
    pending: VecDeque<Task>,
}

impl fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl TaskQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task for the next tick.
    pub fn push(&mut self, task: Task) {
        self.pending.push_back(task);
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take the current batch, leaving the queue empty for new work.
    pub fn take_batch(&mut self) -> VecDeque<Task> {
        std::mem::take(&mut self.pending)
    }

    /// Drop every queued task.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
