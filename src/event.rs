use std::fmt;

use tracing::debug;

pub const ADDED_MESSAGE: &str = "The element was enqueued.";
pub const DELETED_MESSAGE: &str = "The element was dequeued.";
pub const CLEARED_MESSAGE: &str = "The queue is cleared.";

/// The three lifecycle feeds a queue publishes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueEvent {
    Added,
    Deleted,
    Cleared,
}

impl QueueEvent {
    pub fn message(self) -> &'static str {
        match self {
            QueueEvent::Added => ADDED_MESSAGE,
            QueueEvent::Deleted => DELETED_MESSAGE,
            QueueEvent::Cleared => CLEARED_MESSAGE,
        }
    }
}

/// Payload delivered to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueArgs {
    event: QueueEvent,
    message: &'static str,
}

impl QueueArgs {
    fn new(event: QueueEvent) -> Self {
        Self {
            event,
            message: event.message(),
        }
    }

    pub fn event(&self) -> QueueEvent {
        self.event
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    event: QueueEvent,
    id: u64,
}

impl Subscription {
    pub fn event(&self) -> QueueEvent {
        self.event
    }
}

type Callback = Box<dyn FnMut(&QueueArgs) + Send>;

// subscribers in subscription order
#[derive(Default)]
struct Feed {
    subscribers: Vec<(u64, Callback)>,
}

impl Feed {
    fn publish(&mut self, args: &QueueArgs) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(args);
        }
    }

    fn remove(&mut self, id: u64) -> bool {
        match self.subscribers.iter().position(|(sid, _)| *sid == id) {
            Some(idx) => {
                // keep the order of the remaining subscribers
                self.subscribers.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[derive(Default)]
pub(crate) struct Feeds {
    next_id: u64,
    added: Feed,
    deleted: Feed,
    cleared: Feed,
}

impl Feeds {
    fn feed_mut(&mut self, event: QueueEvent) -> &mut Feed {
        match event {
            QueueEvent::Added => &mut self.added,
            QueueEvent::Deleted => &mut self.deleted,
            QueueEvent::Cleared => &mut self.cleared,
        }
    }

    pub(crate) fn subscribe(&mut self, event: QueueEvent, callback: Callback) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;

        self.feed_mut(event).subscribers.push((id, callback));
        debug!(?event, id, "subscribed");

        Subscription { event, id }
    }

    pub(crate) fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let removed = self.feed_mut(subscription.event).remove(subscription.id);
        debug!(event = ?subscription.event, id = subscription.id, removed, "unsubscribed");

        removed
    }

    pub(crate) fn publish(&mut self, event: QueueEvent) {
        self.feed_mut(event).publish(&QueueArgs::new(event));
    }

    pub(crate) fn subscriber_count(&self, event: QueueEvent) -> usize {
        match event {
            QueueEvent::Added => self.added.subscribers.len(),
            QueueEvent::Deleted => self.deleted.subscribers.len(),
            QueueEvent::Cleared => self.cleared.subscribers.len(),
        }
    }
}

impl fmt::Debug for Feeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feeds")
            .field("added", &self.added.subscribers.len())
            .field("deleted", &self.deleted.subscribers.len())
            .field("cleared", &self.cleared.subscribers.len())
            .finish()
    }
}
