/*
[INPUT]:  Outcome messages from store operations
[OUTPUT]: Transient success/error notification, auto-dismissed after 3s
[POS]:    Feedback layer - status banner channel
[UPDATE]: When notification kinds or dismissal timing change
*/

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// How long a notification stays visible
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Monotonic sequence number; a newer notification always has a larger one
    pub seq: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Default)]
struct Scheduled {
    seq: u64,
    dismissal: Option<CancellationToken>,
}

/// Cloneable handle to the single notification slot.
///
/// Auto-dismissal runs on the current tokio runtime. Outside one, a
/// notification stays visible until `dismiss` or the next `notify`.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: Arc<watch::Sender<Option<Notification>>>,
    scheduled: Arc<Mutex<Scheduled>>,
    dismiss_after: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_dismiss_after(DISMISS_AFTER)
    }

    pub fn with_dismiss_after(dismiss_after: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            tx: Arc::new(tx),
            scheduled: Arc::new(Mutex::new(Scheduled::default())),
            dismiss_after,
        }
    }

    /// Show a notification, superseding the current one and its dismissal
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        let token = CancellationToken::new();

        let seq = {
            let mut scheduled = self.scheduled.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(previous) = scheduled.dismissal.replace(token.clone()) {
                previous.cancel();
            }
            scheduled.seq += 1;
            scheduled.seq
        };

        match kind {
            NotificationKind::Success => tracing::info!(seq, %message, "notification"),
            NotificationKind::Error => tracing::warn!(seq, %message, "notification"),
        }

        self.tx.send_replace(Some(Notification { seq, kind, message }));

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(seq, "no tokio runtime; notification stays until dismissed");
            return;
        };
        let tx = self.tx.clone();
        let delay = self.dismiss_after;
        runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    clear_if_current(&tx, seq);
                }
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NotificationKind::Error, message);
    }

    /// Close the current notification immediately
    pub fn dismiss(&self) {
        let seq = {
            let mut scheduled = self.scheduled.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(token) = scheduled.dismissal.take() {
                token.cancel();
            }
            scheduled.seq
        };
        clear_if_current(&self.tx, seq);
    }

    /// Currently visible notification, if any
    pub fn current(&self) -> Option<Notification> {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every show/dismiss
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.tx.subscribe()
    }
}

fn clear_if_current(tx: &watch::Sender<Option<Notification>>, seq: u64) {
    tx.send_if_modified(|slot| match slot {
        Some(current) if current.seq == seq => {
            *slot = None;
            true
        }
        _ => false,
    });
}
