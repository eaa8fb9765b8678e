//! Deferring work until the current update has settled.

use std::cell::RefCell;
use std::time::Duration;

/// Runs a task after the current event and the updates it triggers.
pub trait Tick {
    fn next_tick(&self, task: Box<dyn FnOnce()>);
}

/// Defers through Floem's timer queue, which runs after the current
/// event has been dispatched and signal effects have flushed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloemTick;

impl Tick for FloemTick {
    fn next_tick(&self, task: Box<dyn FnOnce()>) {
        floem::action::exec_after(Duration::ZERO, move |_| task());
    }
}

/// A queue the host drains itself with [`TickQueue::flush`].
#[derive(Default)]
pub struct TickQueue {
    tasks: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl TickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    /// Run every queued task, including ones queued while flushing.
    /// Returns how many ran.
    pub fn flush(&self) -> usize {
        let mut ran = 0;
        loop {
            let batch = std::mem::take(&mut *self.tasks.borrow_mut());
            if batch.is_empty() {
                return ran;
            }
            for task in batch {
                task();
                ran += 1;
            }
        }
    }
}

impl Tick for TickQueue {
    fn next_tick(&self, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push(task);
    }
}
