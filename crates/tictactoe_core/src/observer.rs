//! Change notification for the game state model.
//!
//! A presentation layer registers a callback and re-renders from the
//! events it receives. Callbacks run synchronously, on the thread that
//! mutated the game, before the mutating call returns.

use super::action::Move;
use super::outcome::Outcome;
use super::types::{Board, Player};
use tracing::{instrument, trace};

/// A change to observable game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was accepted. Emitted before the resulting [`GameEvent::BoardChanged`].
    MoveAccepted(Move),
    /// The board contents changed.
    BoardChanged(Board),
    /// The player to move changed.
    TurnChanged(Player),
    /// The outcome changed.
    OutcomeChanged(Outcome),
}

/// Handle returned by [`Observers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("subscription#{_0}")]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&GameEvent)>;

/// Registry of event callbacks, notified in subscription order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and returns its handle.
    #[instrument(skip(self, callback))]
    pub fn subscribe(&mut self, callback: impl FnMut(&GameEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        trace!(%id, observers = self.callbacks.len(), "Observer registered");
        id
    }

    /// Removes a callback. Returns `false` if the handle was unknown.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Delivers `event` to a single subscriber.
    pub(crate) fn notify_one(&mut self, id: SubscriptionId, event: &GameEvent) {
        if let Some((_, callback)) = self.callbacks.iter_mut().find(|(existing, _)| *existing == id) {
            callback(event);
        }
    }

    /// Delivers `event` to every subscriber.
    pub fn notify(&mut self, event: &GameEvent) {
        trace!(?event, observers = self.callbacks.len(), "Notifying observers");
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns true if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();

        let first = Rc::clone(&seen);
        observers.subscribe(move |_| first.borrow_mut().push(1));
        let second = Rc::clone(&seen);
        observers.subscribe(move |_| second.borrow_mut().push(2));

        observers.notify(&GameEvent::TurnChanged(Player::O));
        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();
        let counter = Rc::clone(&count);
        let id = observers.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&GameEvent::OutcomeChanged(Outcome::Draw));
        assert_eq!(*count.borrow(), 0);
        assert!(observers.is_empty());
    }
}
