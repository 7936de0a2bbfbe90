//! Admission control for pipeline executions.
//!
//! A counting semaphore with a hard capacity: acquiring beyond capacity is
//! an immediate error, not a wait. This protects worker memory (each
//! in-flight request holds vectors and model buffers), it is not a
//! correctness mechanism.


use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("recommendation task capacity reached ({capacity} in flight)")]
pub struct CapacityError {
    pub capacity: usize,
}

/// Bounds the number of simultaneously in-flight pipeline executions.
///
/// Cloning shares the same counter, so one limiter can be handed to every
/// worker.
#[derive(Debug, Clone)]
pub struct TaskLimiter {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    in_flight: Mutex<usize>,
    capacity: usize,
}

impl TaskLimiter {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                in_flight: Mutex::new(0),
                capacity,
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity
    }

    pub fn in_flight(&self) -> usize {
        *self.inner.in_flight.lock()
    }

    /// Acquires a slot, or fails immediately when at capacity. The slot is
    /// released when the returned permit drops.
    pub fn acquire(&self) -> Result<TaskPermit, CapacityError> {
        let mut in_flight = self.inner.in_flight.lock();
        if *in_flight >= self.inner.capacity {
            debug!(capacity = self.inner.capacity, "task limiter at capacity");
            return Err(CapacityError {
                capacity: self.inner.capacity,
            });
        }
        *in_flight += 1;
        Ok(TaskPermit {
            inner: Arc::clone(&self.inner),
        })
    }
}

/// RAII guard for one admitted task.
#[derive(Debug)]
pub struct TaskPermit {
    inner: Arc<Inner>,
}

impl Drop for TaskPermit {
    fn drop(&mut self) {
        let mut in_flight = self.inner.in_flight.lock();
        *in_flight = in_flight.saturating_sub(1);
    }
}
