mod iter;

pub use iter::{IntoIter, Iter};

use std::{fmt, marker::PhantomData, ops::Range, ptr::NonNull};

use tracing::{debug, trace};

use crate::error::{QueueError, Result};
use crate::event::{Feeds, QueueArgs, QueueEvent, Subscription};

/// Singly-linked FIFO queue with lifecycle notifications.
///
/// Nodes are leaked from `Box` on enqueue and reclaimed on dequeue or release;
/// the queue owns every node reachable from `head`. `tail` caches the last node
/// so that `enqueue` is O(1). The queue does no locking of its own.
pub struct Queue<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    count: usize,
    feeds: Feeds,
    _marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for Queue<T> {}

struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self { value, next: None }
    }

    fn new_non_null(value: T) -> NonNull<Self> {
        let node = Box::new(Self::new(value));
        NonNull::from(Box::leak(node))
    }
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            head: None,
            tail: None,
            count: 0,
            feeds: Feeds::default(),
            _marker: PhantomData,
        }
    }

    /// Builds a queue holding the elements of `source` in iteration order.
    ///
    /// Fails with `InvalidArgument` when no source is given.
    pub fn from_source<I>(source: Option<I>) -> Result<Queue<T>>
    where
        I: IntoIterator<Item = T>,
    {
        match source {
            Some(source) => Ok(source.into_iter().collect()),
            None => {
                debug!("from_source without a source sequence");
                Err(QueueError::invalid_argument("the source sequence is absent"))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Value of the first node, if any.
    pub fn head(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by this queue, kept alive by `&self`.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    /// Value of the last node, if any.
    pub fn tail(&self) -> Option<&T> {
        // SAFETY: `tail` is the last live node of the chain, kept alive by `&self`.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    pub fn enqueue(&mut self, value: T) {
        let node = Node::new_non_null(value);

        match self.tail {
            // SAFETY: `tail` is the last live node and `&mut self` excludes any reader.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.count += 1;
        trace!(len = self.count, "enqueued");

        self.feeds.publish(QueueEvent::Added);
    }

    pub fn dequeue(&mut self) -> Result<T> {
        let value = match self.unlink_head() {
            Some(value) => value,
            None => {
                debug!("dequeue on an empty queue");
                return Err(QueueError::empty_queue());
            }
        };
        trace!(len = self.count, "dequeued");

        self.feeds.publish(QueueEvent::Deleted);
        if self.count == 0 {
            self.feeds.publish(QueueEvent::Cleared);
        }

        Ok(value)
    }

    pub fn peek(&self) -> Result<&T> {
        self.head().ok_or_else(|| {
            debug!("peek on an empty queue");
            QueueError::empty_queue()
        })
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Drops every element at once and fires a single `Cleared` notification,
    /// even when the queue was already empty.
    pub fn clear(&mut self) {
        self.release();
        trace!("cleared");

        self.feeds.publish(QueueEvent::Cleared);
    }

    /// Clones the elements into `destination[index..index + len]` in FIFO order.
    ///
    /// Checks run in a fixed order: absent destination (`InvalidArgument`),
    /// negative index (`OutOfRange`), empty queue (`InvalidOperation`), then a
    /// destination too short to hold every element (`OutOfRange`). Slots outside
    /// the written range are left untouched.
    pub fn copy_to(&self, destination: Option<&mut [T]>, index: isize) -> Result<()>
    where
        T: Clone,
    {
        let range = self
            .copy_range(destination.as_ref().map(|dest| dest.len()), index)
            .map_err(|err| {
                debug!(%err, "copy_to rejected");
                err
            })?;

        if let Some(destination) = destination {
            for (slot, value) in destination[range].iter_mut().zip(self.iter()) {
                slot.clone_from(value);
            }
        }

        Ok(())
    }

    fn copy_range(&self, dest_len: Option<usize>, index: isize) -> Result<Range<usize>> {
        let dest_len =
            dest_len.ok_or_else(|| QueueError::invalid_argument("the destination is absent"))?;

        let start = usize::try_from(index)
            .map_err(|_| QueueError::out_of_range(format!("index {} is negative", index)))?;

        if self.is_empty() {
            return Err(QueueError::invalid_operation(
                "cannot copy from an empty queue",
            ));
        }

        match start.checked_add(self.count) {
            Some(end) if end <= dest_len => Ok(start..end),
            _ => Err(QueueError::out_of_range(format!(
                "{} elements starting at {} do not fit into length {}",
                self.count, start, dest_len
            ))),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.count)
    }

    /// Registers `callback` on the feed for `event`.
    ///
    /// Callbacks run synchronously after the mutation that triggers them, in
    /// the order they were subscribed.
    pub fn subscribe<F>(&mut self, event: QueueEvent, callback: F) -> Subscription
    where
        F: FnMut(&QueueArgs) + Send + 'static,
    {
        self.feeds.subscribe(event, Box::new(callback))
    }

    /// Returns false if the subscription was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.feeds.unsubscribe(subscription)
    }

    pub fn subscriber_count(&self, event: QueueEvent) -> usize {
        self.feeds.subscriber_count(event)
    }

    // detach the first node without notifying anyone
    fn unlink_head(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` came from `Box::leak` in `enqueue` and is unlinked exactly once here.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;

        if self.head.is_none() {
            self.tail = None;
        }
        self.count -= 1;

        Some(node.value)
    }

    // reclaim the chain node by node
    fn release(&mut self) {
        while self.unlink_head().is_some() {}
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}
