//! Transient notifications.
//!
//! The view only asks a [`Notifier`] to show a message for a while. The
//! desktop app uses [`ToastNotifier`], which turns that request into a
//! timed series of [`ViewEvent`]s: shown after the enter delay, hiding once
//! the visible duration has passed, removed after the exit transition.
//! A lifecycle always runs to completion once started.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::events::ViewEvent;

/// Identifies one toast for its whole lifecycle.
pub type ToastId = u64;

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Created, still off screen.
    Pending,
    /// On screen.
    Shown,
    /// Sliding out, about to be removed.
    Hiding,
}

/// A toast tracked by the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn new(id: ToastId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            phase: ToastPhase::Pending,
        }
    }
}

/// Something that can put a short-lived message in front of the user.
pub trait Notifier {
    /// Shows `message` for `duration` and returns the toast's id.
    fn show(&self, message: &str, duration: Duration) -> ToastId;
}

/// Enter and exit transition durations around the visible period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimeline {
    pub enter: Duration,
    pub exit: Duration,
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(100),
            exit: Duration::from_millis(300),
        }
    }
}

/// Notifier that drives toast phases through the view's event channel.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    tx: mpsc::UnboundedSender<ViewEvent>,
    timeline: ToastTimeline,
    next_id: Arc<AtomicU64>,
}

impl ToastNotifier {
    /// Creates a notifier that sends phase changes to `tx`.
    pub fn new(tx: mpsc::UnboundedSender<ViewEvent>, timeline: ToastTimeline) -> Self {
        Self {
            tx,
            timeline,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Notifier for ToastNotifier {
    fn show(&self, message: &str, duration: Duration) -> ToastId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(id, message, "Showing toast");

        // Detached: the lifecycle is never cancelled.
        tokio::spawn(run_lifecycle(self.tx.clone(), id, self.timeline, duration));

        id
    }
}

async fn run_lifecycle(
    tx: mpsc::UnboundedSender<ViewEvent>,
    id: ToastId,
    timeline: ToastTimeline,
    visible_for: Duration,
) {
    sleep(timeline.enter).await;
    emit(&tx, ViewEvent::ToastShown(id));

    sleep(visible_for).await;
    emit(&tx, ViewEvent::ToastHiding(id));

    sleep(timeline.exit).await;
    emit(&tx, ViewEvent::ToastRemoved(id));
}

fn emit(tx: &mpsc::UnboundedSender<ViewEvent>, event: ViewEvent) {
    if tx.send(event).is_err() {
        tracing::trace!("View gone, toast event dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::UnboundedReceiver<ViewEvent>) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifecycle_timeline() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = ToastNotifier::new(tx, ToastTimeline::default());

        let id = notifier.show("Message sent successfully!", Duration::from_millis(3000));

        sleep(Duration::from_millis(99)).await;
        assert!(drain(&mut rx).is_empty());

        // Shown ~100ms after show()
        sleep(Duration::from_millis(2)).await;
        assert_eq!(drain(&mut rx), vec![ViewEvent::ToastShown(id)]);

        // Still visible just before 3000ms on screen
        sleep(Duration::from_millis(2997)).await;
        assert!(drain(&mut rx).is_empty());

        sleep(Duration::from_millis(3)).await;
        assert_eq!(drain(&mut rx), vec![ViewEvent::ToastHiding(id)]);

        sleep(Duration::from_millis(300)).await;
        assert_eq!(drain(&mut rx), vec![ViewEvent::ToastRemoved(id)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_unique() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let notifier = ToastNotifier::new(tx, ToastTimeline::default());
        let cloned = notifier.clone();

        let a = notifier.show("a", Duration::from_millis(10));
        let b = cloned.show("b", Duration::from_millis(10));
        assert_ne!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifecycle_survives_closed_channel() {
        let (tx, rx) = mpsc::unbounded_channel();
        let notifier = ToastNotifier::new(tx, ToastTimeline::default());
        notifier.show("bye", Duration::from_millis(3000));
        drop(rx);

        // Must not panic when the receiver is gone
        sleep(Duration::from_millis(4000)).await;
    }
}
