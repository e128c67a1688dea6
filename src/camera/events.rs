//! Change notification for observable values.
//!
//! A [`ChangeNotifier`] holds a list of callbacks plus a suspended flag.
//! Callbacks receive a shared reference to the sender, so they can read the
//! new state but cannot mutate it; a notification can never recurse into
//! another one.

use std::fmt;

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// Multicast "changed" event with a suspend flag.
///
/// The flag is a plain boolean, not a counter: nested suspends do not stack
/// and a single resume fully re-enables delivery.
pub struct ChangeNotifier<T> {
    observers: Vec<(SubscriptionId, Callback<T>)>,
    next_id: u64,
    suspended: bool,
}

impl<T> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ChangeNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .field("suspended", &self.suspended)
            .finish()
    }
}

impl<T> ChangeNotifier<T> {
    /// Create an empty, non-suspended notifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
            suspended: false,
        }
    }

    /// Register a callback. It is invoked on every delivered notification.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&T) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True when nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Stop delivering notifications until [`resume`](Self::resume).
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Re-enable delivery. Does not fire by itself.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    /// Whether delivery is currently suspended.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Invoke every callback with `sender`, unless suspended.
    ///
    /// Returns true if the notification was delivered.
    pub fn notify(&mut self, sender: &T) -> bool {
        if self.suspended || self.observers.is_empty() {
            return false;
        }
        for (_, callback) in &mut self.observers {
            callback(sender);
        }
        true
    }
}
