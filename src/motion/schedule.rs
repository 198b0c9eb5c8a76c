//! Cancellable repeating tasks.
//!
//! A [`RepeatingTask`] owns a step function and keeps exactly one callback
//! pending on a [`Timer`] at a time. Each step decides how long to wait before
//! the next one. Stopping the task (explicitly, on drop, or from a view's
//! cleanup) cancels the pending callback, and a callback that still manages to
//! fire afterwards does nothing.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use thiserror::Error;

/// When a timer should run a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    After(Duration),
    NextFrame,
}

/// What a step wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    After(Duration),
    NextFrame,
    Stop,
}

impl Wait {
    fn trigger(self) -> Option<Trigger> {
        match self {
            Wait::After(d) => Some(Trigger::After(d)),
            Wait::NextFrame => Some(Trigger::NextFrame),
            Wait::Stop => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("couldn't register timer callback: {0}")]
    Register(String),
}

pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a callback later and forget about it on request.
pub trait Timer: Send + 'static {
    type Handle: Send + 'static;

    fn schedule(&self, trigger: Trigger, callback: Callback) -> Result<Self::Handle, ScheduleError>;

    fn cancel(&self, handle: Self::Handle);
}

type Step = Box<dyn FnMut() -> Wait + Send + 'static>;

struct TaskState<T: Timer> {
    timer: T,
    pending: Option<T::Handle>,
    running: bool,
}

struct Shared<T: Timer> {
    state: Mutex<TaskState<T>>,
    step: Mutex<Step>,
}

pub struct RepeatingTask<T: Timer> {
    shared: Arc<Shared<T>>,
}

impl<T: Timer> RepeatingTask<T> {
    /// Starts the task; `step` first runs once `first` elapses.
    pub fn start(timer: T, first: Trigger, step: impl FnMut() -> Wait + Send + 'static) -> Self {
        let shared = Arc::new(Shared {
            state: Mutex::new(TaskState {
                timer,
                pending: None,
                running: true,
            }),
            step: Mutex::new(Box::new(step)),
        });
        arm(&shared, first);
        Self { shared }
    }

    /// Runs `f` once after `delay`.
    pub fn once(timer: T, delay: Duration, f: impl FnOnce() + Send + 'static) -> Self {
        let mut f = Some(f);
        Self::start(timer, Trigger::After(delay), move || {
            if let Some(f) = f.take() {
                f();
            }
            Wait::Stop
        })
    }

    pub fn is_running(&self) -> bool {
        self.shared
            .state
            .lock()
            .expect("task state lock poisoned")
            .running
    }

    pub fn stop(&self) {
        let mut state = self.shared.state.lock().expect("task state lock poisoned");
        state.running = false;
        if let Some(handle) = state.pending.take() {
            state.timer.cancel(handle);
        }
    }
}

impl<T: Timer> Drop for RepeatingTask<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm<T: Timer>(shared: &Arc<Shared<T>>, trigger: Trigger) {
    let weak: Weak<Shared<T>> = Arc::downgrade(shared);
    let callback: Callback = Box::new(move || {
        if let Some(shared) = weak.upgrade() {
            fire(&shared);
        }
    });

    let mut state = shared.state.lock().expect("task state lock poisoned");
    if !state.running {
        return;
    }
    match state.timer.schedule(trigger, callback) {
        Ok(handle) => state.pending = Some(handle),
        Err(err) => {
            log::warn!("repeating task stopped: {err}");
            state.running = false;
        }
    }
}

fn fire<T: Timer>(shared: &Arc<Shared<T>>) {
    {
        let mut state = shared.state.lock().expect("task state lock poisoned");
        if !state.running {
            return;
        }
        state.pending = None;
    }

    // the state lock is released here so the step may stop the task itself
    let wait = {
        let mut step = shared.step.lock().expect("task step lock poisoned");
        (*step)()
    };

    match wait.trigger() {
        Some(trigger) => arm(shared, trigger),
        None => {
            shared
                .state
                .lock()
                .expect("task state lock poisoned")
                .running = false;
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::*;

    struct Entry {
        id: u64,
        // None means "next frame"
        due: Option<Duration>,
        callback: Callback,
    }

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        entries: Vec<Entry>,
    }

    /// A timer driven by hand: frames and virtual time only advance when told.
    #[derive(Clone, Default)]
    pub(crate) struct ManualTimer {
        queue: Arc<Mutex<Queue>>,
    }

    impl ManualTimer {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn pending(&self) -> usize {
            self.queue.lock().unwrap().entries.len()
        }

        /// Runs every frame callback queued before this call.
        pub(crate) fn frame(&self) {
            let ready = {
                let mut queue = self.queue.lock().unwrap();
                let (ready, rest): (Vec<_>, Vec<_>) =
                    queue.entries.drain(..).partition(|e| e.due.is_none());
                queue.entries = rest;
                ready
            };
            for entry in ready {
                (entry.callback)();
            }
        }

        /// Moves the clock forward, firing timeouts in due order.
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.queue.lock().unwrap().now + by;
            loop {
                let next = {
                    let mut queue = self.queue.lock().unwrap();
                    let earliest = queue
                        .entries
                        .iter()
                        .enumerate()
                        .filter_map(|(i, e)| e.due.filter(|d| *d <= target).map(|d| (d, e.id, i)))
                        .min();
                    match earliest {
                        Some((due, _, i)) => {
                            queue.now = due;
                            Some(queue.entries.remove(i))
                        }
                        None => {
                            queue.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(entry) => (entry.callback)(),
                    None => break,
                }
            }
        }
    }

    impl Timer for ManualTimer {
        type Handle = u64;

        fn schedule(&self, trigger: Trigger, callback: Callback) -> Result<u64, ScheduleError> {
            let mut queue = self.queue.lock().unwrap();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = match trigger {
                Trigger::After(d) => Some(queue.now + d),
                Trigger::NextFrame => None,
            };
            queue.entries.push(Entry { id, due, callback });
            Ok(id)
        }

        fn cancel(&self, handle: u64) {
            self.queue.lock().unwrap().entries.retain(|e| e.id != handle);
        }
    }

    /// Refuses every registration, like a browser without timers.
    pub(crate) struct BrokenTimer;

    impl Timer for BrokenTimer {
        type Handle = ();

        fn schedule(&self, _trigger: Trigger, _callback: Callback) -> Result<(), ScheduleError> {
            Err(ScheduleError::Register("no timers here".to_string()))
        }

        fn cancel(&self, _handle: ()) {}
    }
}

#[cfg(test)]
mod tests {
    use super::manual::{BrokenTimer, ManualTimer};
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> usize) {
        let count = Arc::new(AtomicUsize::new(0));
        let read = {
            let count = count.clone();
            move || count.load(Ordering::SeqCst)
        };
        (count, read)
    }

    #[test]
    fn test_frame_task_runs_once_per_frame() {
        let timer = ManualTimer::new();
        let (count, runs) = counter();
        let task = RepeatingTask::start(timer.clone(), Trigger::NextFrame, move || {
            count.fetch_add(1, Ordering::SeqCst);
            Wait::NextFrame
        });

        assert_eq!(runs(), 0);
        for expected in 1..=5 {
            timer.frame();
            assert_eq!(runs(), expected);
            assert_eq!(timer.pending(), 1);
        }
        assert!(task.is_running());
    }

    #[test]
    fn test_timeouts_follow_returned_delays() {
        let timer = ManualTimer::new();
        let (count, runs) = counter();
        let _task = RepeatingTask::start(
            timer.clone(),
            Trigger::After(Duration::from_millis(100)),
            move || {
                count.fetch_add(1, Ordering::SeqCst);
                Wait::After(Duration::from_millis(50))
            },
        );

        timer.advance(Duration::from_millis(99));
        assert_eq!(runs(), 0);
        timer.advance(Duration::from_millis(1));
        assert_eq!(runs(), 1);
        // 100ms more covers two 50ms steps
        timer.advance(Duration::from_millis(100));
        assert_eq!(runs(), 3);
    }

    #[test]
    fn test_stop_cancels_pending_callback() {
        let timer = ManualTimer::new();
        let (count, runs) = counter();
        let task = RepeatingTask::start(timer.clone(), Trigger::NextFrame, move || {
            count.fetch_add(1, Ordering::SeqCst);
            Wait::NextFrame
        });

        timer.frame();
        task.stop();
        assert!(!task.is_running());
        assert_eq!(timer.pending(), 0);
        timer.frame();
        timer.frame();
        assert_eq!(runs(), 1);
    }

    #[test]
    fn test_step_returning_stop_ends_task() {
        let timer = ManualTimer::new();
        let (count, runs) = counter();
        let task = RepeatingTask::start(timer.clone(), Trigger::NextFrame, move || {
            let n = count.fetch_add(1, Ordering::SeqCst) + 1;
            if n == 3 {
                Wait::Stop
            } else {
                Wait::NextFrame
            }
        });

        for _ in 0..10 {
            timer.frame();
        }
        assert_eq!(runs(), 3);
        assert!(!task.is_running());
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_once_fires_a_single_time() {
        let timer = ManualTimer::new();
        let (count, runs) = counter();
        let task = RepeatingTask::once(timer.clone(), Duration::from_millis(3000), move || {
            count.fetch_add(1, Ordering::SeqCst);
        });

        timer.advance(Duration::from_millis(2999));
        assert_eq!(runs(), 0);
        timer.advance(Duration::from_secs(10));
        assert_eq!(runs(), 1);
        assert!(!task.is_running());
    }

    #[test]
    fn test_repeated_mount_and_unmount_leaves_nothing_pending() {
        let timer = ManualTimer::new();
        let (count, runs) = counter();

        for _ in 0..20 {
            let count = count.clone();
            let frames = RepeatingTask::start(timer.clone(), Trigger::NextFrame, {
                let count = count.clone();
                move || {
                    count.fetch_add(1, Ordering::SeqCst);
                    Wait::NextFrame
                }
            });
            let ticks = RepeatingTask::start(
                timer.clone(),
                Trigger::After(Duration::from_millis(100)),
                move || {
                    count.fetch_add(1, Ordering::SeqCst);
                    Wait::After(Duration::from_millis(100))
                },
            );
            timer.frame();
            drop(frames);
            drop(ticks);
        }

        assert_eq!(timer.pending(), 0);
        let before = runs();
        timer.frame();
        timer.advance(Duration::from_secs(60));
        assert_eq!(runs(), before);
    }

    #[test]
    fn test_callback_fired_after_drop_is_a_no_op() {
        // a timer that can't cancel still can't revive a dropped task
        struct Leaky(ManualTimer);

        impl Timer for Leaky {
            type Handle = u64;

            fn schedule(&self, trigger: Trigger, callback: Callback) -> Result<u64, ScheduleError> {
                self.0.schedule(trigger, callback)
            }

            fn cancel(&self, _handle: u64) {}
        }

        let timer = ManualTimer::new();
        let (count, runs) = counter();
        let task = RepeatingTask::start(Leaky(timer.clone()), Trigger::NextFrame, move || {
            count.fetch_add(1, Ordering::SeqCst);
            Wait::NextFrame
        });
        drop(task);

        assert_eq!(timer.pending(), 1);
        timer.frame();
        assert_eq!(runs(), 0);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_registration_failure_stops_task() {
        let task = RepeatingTask::start(BrokenTimer, Trigger::NextFrame, || Wait::NextFrame);
        assert!(!task.is_running());
    }
}
