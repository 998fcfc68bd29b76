//! Main-thread task queue.
//!
//! Delayed work (timers, the tail of an animation) is posted here instead of
//! sleeping. The frame loop drains due tasks with [`run_due`] before each
//! composition, so every task body runs on the UI thread between frames.
//! Each post returns a [`TaskHandle`]; cancelling it guarantees the body will
//! never run.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_time::{Duration, Instant};

use crate::TaskResult;
use crate::animation::now;

thread_local! {
    static QUEUE: RefCell<TaskQueue> = RefCell::new(TaskQueue::default());
}

#[derive(Default)]
struct TaskQueue {
    next_seq: u64,
    tasks: Vec<Queued>,
}

struct Queued {
    due: Instant,
    seq: u64,
    handle: TaskHandle,
    body: Box<dyn FnOnce() -> TaskResult>,
}

impl TaskQueue {
    /// Moves cancelled tasks out so their bodies can be dropped after the
    /// queue borrow is released.
    fn take_cancelled(&mut self) -> Vec<Queued> {
        let (cancelled, live): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|t| t.handle.is_cancelled());
        self.tasks = live;
        cancelled
    }

    /// Removes and returns the earliest task due at `at` that was posted
    /// before `horizon`.
    fn pop_due(&mut self, at: Instant, horizon: u64) -> Option<Queued> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= at && t.seq < horizon)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        Some(self.tasks.swap_remove(idx))
    }
}

/// Cancellable handle to a queued task.
#[derive(Clone)]
pub struct TaskHandle(Rc<TaskState>);

struct TaskState {
    label: &'static str,
    cancelled: Cell<bool>,
    finished: Cell<bool>,
}

impl TaskHandle {
    /// No-op once the task has run.
    pub fn cancel(&self) {
        if self.is_pending() {
            self.0.cancelled.set(true);
            log::trace!("task `{}` cancelled", self.0.label);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.cancelled.get()
    }

    pub fn is_finished(&self) -> bool {
        self.0.finished.get()
    }

    pub fn is_pending(&self) -> bool {
        !self.is_cancelled() && !self.is_finished()
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("label", &self.0.label)
            .field("cancelled", &self.is_cancelled())
            .field("finished", &self.is_finished())
            .finish()
    }
}

pub fn post(label: &'static str, body: impl FnOnce() -> TaskResult + 'static) -> TaskHandle {
    post_delayed(label, Duration::ZERO, body)
}

/// Queues `body` to run on the first drain at or after `now() + delay`.
pub fn post_delayed(
    label: &'static str,
    delay: Duration,
    body: impl FnOnce() -> TaskResult + 'static,
) -> TaskHandle {
    let handle = TaskHandle(Rc::new(TaskState {
        label,
        cancelled: Cell::new(false),
        finished: Cell::new(false),
    }));
    let due = now() + delay;
    // Cancelled entries go here too, not only in `run_due`, so cancel and
    // re-post cycles between drains stay bounded.
    let cancelled = QUEUE.with(|q| {
        let mut q = q.borrow_mut();
        let cancelled = q.take_cancelled();
        let seq = q.next_seq;
        q.next_seq += 1;
        q.tasks.push(Queued {
            due,
            seq,
            handle: handle.clone(),
            body: Box::new(body),
        });
        cancelled
    });
    drop(cancelled);
    handle
}

/// Runs every task that is due, in deadline order. Returns how many ran.
///
/// Tasks posted by a running task are left for the next drain, even when
/// they are already due.
pub fn run_due() -> usize {
    let at = now();
    let horizon = QUEUE.with(|q| q.borrow().next_seq);
    let mut ran = 0;
    loop {
        let (next, cancelled) = QUEUE.with(|q| {
            let mut q = q.borrow_mut();
            let cancelled = q.take_cancelled();
            (q.pop_due(at, horizon), cancelled)
        });
        drop(cancelled);
        let Some(task) = next else {
            break;
        };
        task.handle.0.finished.set(true);
        ran += 1;
        if let Err(e) = (task.body)() {
            log::trace!("task `{}` skipped: {e}", task.handle.0.label);
        }
    }
    ran
}

/// Number of queued tasks that have not been cancelled.
pub fn pending_tasks() -> usize {
    QUEUE.with(|q| {
        q.borrow()
            .tasks
            .iter()
            .filter(|t| !t.handle.is_cancelled())
            .count()
    })
}

/// Raw queue length, cancelled entries included.
#[cfg(test)]
pub(crate) fn queued_len() -> usize {
    QUEUE.with(|q| q.borrow().tasks.len())
}

pub fn next_deadline() -> Option<Instant> {
    QUEUE.with(|q| {
        q.borrow()
            .tasks
            .iter()
            .filter(|t| !t.handle.is_cancelled())
            .map(|t| t.due)
            .min()
    })
}

/// Drops every queued task without running it.
pub fn clear() {
    let tasks = QUEUE.with(|q| std::mem::take(&mut q.borrow_mut().tasks));
    for t in &tasks {
        t.handle.cancel();
    }
}
