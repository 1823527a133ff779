//! Hooks for stopping an unbounded search early

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Polled by the enumeration loop; returning `true` abandons the search
pub trait Interrupt {
    fn should_stop(&self) -> bool;
}

impl<T: Interrupt + ?Sized> Interrupt for &T {
    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}

impl<T: Interrupt> Interrupt for Option<T> {
    fn should_stop(&self) -> bool {
        self.as_ref().is_some_and(|inner| inner.should_stop())
    }
}

/// Never interrupts
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Interrupt for Never {
    fn should_stop(&self) -> bool {
        false
    }
}

/// Stops once a wall-clock instant has passed
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }
}

impl Interrupt for Deadline {
    fn should_stop(&self) -> bool {
        Instant::now() >= self.at
    }
}

/// Shared cancellation flag; clones observe the same flag, so one thread can
/// cancel a search running on another.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Interrupt for CancelToken {
    fn should_stop(&self) -> bool {
        self.is_cancelled()
    }
}
