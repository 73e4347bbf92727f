//! UI-thread task scheduling
//!
//! HUD operations never run inline. `show`, `set_progress` and the asset
//! swap of `dismiss` are queued with [`Scheduler::run_soon`]; the removal
//! half of `dismiss` is a timer measured from the moment `dismiss` was
//! called. Tasks are not `Send`: everything stays on the UI thread.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

/// Deferred unit of UI work
pub type Task = Box<dyn FnOnce() + 'static>;

pub trait Scheduler {
    /// Run `task` after the work already queued
    fn run_soon(&self, task: Task);

    /// Run `task` once `delay` has elapsed from this call
    fn run_after(&self, delay: Duration, task: Task);
}

struct Timer {
    deadline: Duration,
    seq: u64,
    task: Task,
}

/// Deterministic scheduler driven by an explicit clock.
///
/// The demo advances it from `iced::window::frames()`; tests advance it by
/// hand. Queued tasks always drain before due timers, and timers fire in
/// deadline order, ties broken by registration order.
#[derive(Default)]
pub struct FrameScheduler {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    queue: RefCell<VecDeque<Task>>,
    timers: RefCell<Vec<Timer>>,
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("now", &self.now.get())
            .field("queued", &self.queue.borrow().len())
            .field("timers", &self.timers.borrow().len())
            .finish()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of queued tasks plus pending timers
    pub fn pending(&self) -> usize {
        self.queue.borrow().len() + self.timers.borrow().len()
    }

    pub fn has_pending(&self) -> bool {
        self.pending() > 0
    }

    /// Run queued tasks, including any they queue, until the queue is empty
    pub fn run_until_idle(&self) {
        loop {
            // The borrow must end before the task runs; tasks queue more work
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }

    /// Move the clock forward by `by`, running everything that comes due
    pub fn advance(&self, by: Duration) {
        self.advance_to(self.now.get() + by);
    }

    /// Move the clock to `time`, running everything that comes due.
    /// A time in the past only drains the queue.
    pub fn advance_to(&self, time: Duration) {
        self.run_until_idle();

        while let Some(timer) = self.take_due(time) {
            if timer.deadline > self.now.get() {
                self.now.set(timer.deadline);
            }
            (timer.task)();
            self.run_until_idle();
        }

        if time > self.now.get() {
            self.now.set(time);
        }
    }

    fn take_due(&self, time: Duration) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= time)
            .min_by_key(|(_, t)| (t.deadline, t.seq))
            .map(|(i, _)| i)?;
        Some(timers.swap_remove(index))
    }
}

impl Scheduler for FrameScheduler {
    fn run_soon(&self, task: Task) {
        self.queue.borrow_mut().push_back(task);
    }

    fn run_after(&self, delay: Duration, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        self.timers.borrow_mut().push(Timer {
            deadline: self.now.get() + delay,
            seq,
            task,
        });
    }
}

/// Scheduler backed by the current tokio `LocalSet`.
///
/// Deadlines are captured when `run_after` is called, so several timers
/// with different delays are independent. Must be used from inside a
/// `LocalSet`, since tasks are not `Send`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn run_soon(&self, task: Task) {
        tokio::task::spawn_local(async move { task() });
    }

    fn run_after(&self, delay: Duration, task: Task) {
        let deadline = tokio::time::Instant::now() + delay;
        tokio::task::spawn_local(async move {
            tokio::time::sleep_until(deadline).await;
            task();
        });
    }
}
