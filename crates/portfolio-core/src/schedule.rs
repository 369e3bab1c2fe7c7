//! Scheduled tasks tied to the view's lifetime.
//!
//! A [`ScheduledTask`] owns a tokio task and aborts it when dropped, so a
//! timer can never fire after whoever holds it has gone away. Timer
//! callbacks only send [`ViewEvent`]s; the view applies them on its own
//! thread.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};

use crate::config::TimingConfig;
use crate::error::ConfigResult;
use crate::events::ViewEvent;

/// Shortest period a repeating task runs with.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A running timer task, cancelled on drop.
#[derive(Debug)]
pub struct ScheduledTask {
    name: &'static str,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Runs `f` once after `delay`.
    pub fn once<F>(name: &'static str, delay: Duration, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::spawn(name, async move {
            sleep(delay).await;
            f();
        })
    }

    /// Runs `f` every `period`, first after one full period.
    ///
    /// A zero period is raised to one millisecond.
    pub fn repeating<F>(name: &'static str, period: Duration, mut f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let period = period.max(MIN_PERIOD);
        Self::spawn(name, async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                f();
            }
        })
    }

    fn spawn<Fut>(name: &'static str, fut: Fut) -> Self
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        tracing::debug!(task = name, "Scheduled task started");
        Self {
            name,
            handle: tokio::spawn(fut),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns whether the task has run to completion.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if !self.is_finished() {
            tracing::debug!(task = self.name, "Cancelling scheduled task");
        }
        self.handle.abort();
    }
}

/// The timers a mounted view holds: the loading gate and the carousel.
///
/// Acquire with [`ViewTimers::start`] when the view mounts; dropping the
/// value (or calling [`ViewTimers::stop`]) releases both.
#[derive(Debug)]
pub struct ViewTimers {
    loading: ScheduledTask,
    carousel: ScheduledTask,
}

impl ViewTimers {
    /// Starts both timers, sending their events to `tx`.
    ///
    /// Fails if `timing` has a zero carousel period.
    pub fn start(
        timing: &TimingConfig,
        tx: mpsc::UnboundedSender<ViewEvent>,
    ) -> ConfigResult<Self> {
        timing.validate()?;

        let loading_tx = tx.clone();
        let loading = ScheduledTask::once("loading-gate", timing.splash(), move || {
            let _ = loading_tx.send(ViewEvent::LoadingFinished);
        });

        let carousel = ScheduledTask::repeating("carousel", timing.carousel_interval(), move || {
            let _ = tx.send(ViewEvent::CarouselTick);
        });

        Ok(Self { loading, carousel })
    }

    /// Releases both timers.
    pub fn stop(self) {
        tracing::debug!(
            loading = self.loading.name(),
            carousel = self.carousel.name(),
            "Stopping view timers"
        );
    }
}
