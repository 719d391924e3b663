//! Timed auto-advance for the hero carousel
//!
//! [`AutoAdvance`] owns a tokio task that calls [`Carousel::next`] once per
//! period. The task is tied to the handle: stopping or dropping the handle
//! aborts it, so it never advances a carousel whose view has gone away.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::domain::carousel::Carousel;

/// Carousel shared between its view and the auto-advance task
pub type SharedCarousel<T> = Arc<Mutex<Carousel<T>>>;

#[derive(Debug)]
pub struct AutoAdvance {
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl AutoAdvance {
    /// Start advancing `carousel` every `period`. The first advance happens
    /// one full period after the call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T>(carousel: SharedCarousel<T>, period: Duration) -> Self
    where
        T: Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match carousel.lock() {
                    Ok(mut carousel) => {
                        let index = carousel.next();
                        tracing::trace!(index, "Auto-advanced carousel");
                    }
                    Err(_) => {
                        tracing::warn!("Carousel lock poisoned, stopping auto-advance");
                        break;
                    }
                }
            }
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "Auto-advance started");

        Self {
            handle: Some(handle),
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Cancel the timer. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Auto-advance stopped");
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}
