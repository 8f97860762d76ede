//! Stack membership notifications.
//!
//! Listeners subscribe on a [`Navigator`](crate::Navigator) and are called
//! whenever a screen registers or identifiers leave the stack. Delivery is
//! synchronous, on the navigator's control context, after the stack model
//! has been updated and while no internal borrow is held, so a listener may
//! read or command the navigator.

use crate::host::ScreenRef;
use crate::identity::ScreenId;
use std::fmt;
use std::rc::Rc;

/// A change to stack membership.
#[derive(Clone)]
pub enum StackEvent {
    /// A screen surfaced in the host and received an identifier.
    Registered { screen: ScreenRef, id: ScreenId },

    /// Identifiers left the stack, top first.
    Removed { ids: Vec<ScreenId> },
}

impl StackEvent {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. })
    }
}

impl fmt::Debug for StackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registered { screen, id } => f
                .debug_struct("StackEvent::Registered")
                .field("screen", &screen.title())
                .field("id", id)
                .finish(),
            Self::Removed { ids } => f
                .debug_struct("StackEvent::Removed")
                .field("ids", ids)
                .finish(),
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Rc<dyn Fn(&StackEvent)>;

/// Ordered list of listeners.
#[derive(Default)]
pub struct Listeners {
    next: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(candidate, _)| *candidate != id);
        self.entries.len() != before
    }

    /// Copy of the current listeners, for calling without holding a borrow.
    pub fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
