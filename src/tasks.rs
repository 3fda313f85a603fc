//! Ordered execution of bulk operations.
//!
//! Bulk print, folder print and print-then-delete all go through [`run_ordered`]:
//! one item at a time, in the given order, every item attempted regardless of
//! earlier failures, with an optional pause after each request to keep the
//! backend's print queue in submission order. There is no cancellation.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::ClientError;

/// Something that can wait without blocking the event loop.
#[async_trait(?Send)]
pub trait Pause {
    async fn pause(&self, duration: Duration);
}

#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPause;

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl Pause for TokioPause {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// A failed item of a batch.
#[derive(Debug)]
pub struct TaskFailure {
    pub item: String,
    pub error: ClientError,
}

/// Outcome of a full batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub attempted: usize,
    pub failures: Vec<TaskFailure>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs `task` for every item strictly in order and collects the failures.
///
/// With a non-zero `delay`, `pauser` waits that long after each request, the
/// last one included, so a following batch is paced as well.
pub async fn run_ordered<I, F, Fut, P>(items: I, delay: Duration, pauser: &P, mut task: F) -> BatchReport
where
    I: IntoIterator<Item = String>,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), ClientError>>,
    P: Pause + ?Sized,
{
    let mut report = BatchReport::default();
    for item in items {
        report.attempted += 1;
        if let Err(error) = task(item.clone()).await {
            tracing::warn!("batch item {} failed: {}", item, error);
            report.failures.push(TaskFailure { item, error });
        }
        if !delay.is_zero() {
            pauser.pause(delay).await;
        }
    }
    report
}
