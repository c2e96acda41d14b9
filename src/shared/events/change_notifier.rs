// src/shared/events/change_notifier.rs
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Named "something changed, re-read it" signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeSignal {
    PortfolioContentChanged,
    ContactMessagesChanged,
    AnalyticsUpdated,
    AdminSessionChanged,
}

impl fmt::Display for ChangeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeSignal::PortfolioContentChanged => "portfolio_content_changed",
            ChangeSignal::ContactMessagesChanged => "contact_messages_changed",
            ChangeSignal::AnalyticsUpdated => "analytics_updated",
            ChangeSignal::AdminSessionChanged => "admin_session_changed",
        };
        f.write_str(name)
    }
}

pub type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, ChangeSignal, Listener)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Publish/subscribe channel shared by everything that reads or writes
/// persisted content. Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &lock(&self.registry).listeners.len())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, signal: ChangeSignal, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, signal, Arc::new(listener)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Calls every listener currently subscribed to `signal`, in
    /// subscription order, and returns how many were called.
    ///
    /// The registry lock is released before listeners run, so a listener
    /// may subscribe or unsubscribe without deadlocking.
    pub fn publish(&self, signal: ChangeSignal) -> usize {
        let targets: Vec<Listener> = lock(&self.registry)
            .listeners
            .iter()
            .filter(|(_, s, _)| *s == signal)
            .map(|(_, _, listener)| Arc::clone(listener))
            .collect();

        for listener in &targets {
            listener();
        }

        tracing::debug!(%signal, listeners = targets.len(), "change signal published");
        targets.len()
    }

    /// Subscribes a flag that is raised on every publish of `signal`, for
    /// readers that refresh lazily on their next access.
    pub fn watch(&self, signal: ChangeSignal) -> Watch {
        let raised = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&raised);
        let subscription = self.subscribe(signal, move || flag.store(true, Ordering::SeqCst));
        Watch {
            raised,
            _subscription: subscription,
        }
    }

    pub fn subscriber_count(&self, signal: ChangeSignal) -> usize {
        lock(&self.registry)
            .listeners
            .iter()
            .filter(|(_, s, _)| *s == signal)
            .count()
    }
}

/// Disposer returned by [`ChangeNotifier::subscribe`]. Dropping it
/// unsubscribes as well.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work.
    }

    fn remove(&self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).listeners.retain(|(id, _, _)| *id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.remove();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Flag raised by [`ChangeNotifier::watch`].
#[derive(Debug)]
pub struct Watch {
    raised: Arc<AtomicBool>,
    _subscription: Subscription,
}

impl Watch {
    /// Returns whether the signal fired since the last call, and lowers
    /// the flag.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::SeqCst)
    }
}
