//! Synchronous board-change notification.

use std::fmt;

use crate::board::Board;

/// Callback invoked with the board after every accepted move
pub type BoardCallback = Box<dyn FnMut(&Board) + Send>;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subscription(u64);

impl Subscription {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Subscribers in subscription order.
///
/// Ids are never reused, so a stale handle can not remove a later subscriber.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    subscribers: Vec<(Subscription, BoardCallback)>,
}

impl Observers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: BoardCallback) -> Subscription {
        let handle = Subscription(self.next_id);
        self.next_id += 1;
        self.subscribers.push((handle, callback));
        handle
    }

    /// Remove one subscriber; false if the handle is unknown
    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != handle);
        self.subscribers.len() != before
    }

    /// Call every subscriber with `board`, oldest first.
    pub fn notify(&mut self, board: &Board) {
        trace_log!("notifying {} subscribers", self.subscribers.len());
        for (_, callback) in &mut self.subscribers {
            callback(board);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
