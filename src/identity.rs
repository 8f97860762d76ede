//! Screen and container identity.
//!
//! A [`ScreenId`] is minted once per screen instance and never reused. The
//! screen objects themselves belong to the host, so the navigator does not
//! own them: [`IdentityRegistry`] keeps a side table from a host entry to its
//! identifier that only holds [`Weak`] back-references. A binding disappears
//! when the navigator releases it or when the host drops the screen.

use crate::host::{Screen, ScreenRef};
use crate::logger::Logger;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use uuid::Uuid;

/// Opaque, globally unique identifier of one screen instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(String);

impl ScreenId {
    /// Mint a fresh identifier (random 128-bit token).
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ScreenId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ScreenId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier minted for a host container when a navigator attaches to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address of the host allocation. Stable while we hold a `Weak` to it,
/// since the allocation is not freed until the last weak reference goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EntryKey(usize);

impl EntryKey {
    fn of(screen: &ScreenRef) -> Self {
        Self(Rc::as_ptr(screen).cast::<()>() as usize)
    }
}

struct Binding {
    screen: Weak<dyn Screen>,
    id: ScreenId,
}

impl Binding {
    fn is_alive(&self) -> bool {
        self.screen.strong_count() > 0
    }
}

/// Side table mapping host entries to their identifiers.
pub struct IdentityRegistry {
    by_entry: HashMap<EntryKey, Binding>,
    by_id: HashMap<ScreenId, EntryKey>,
    logger: Arc<Logger>,
}

impl IdentityRegistry {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            by_entry: HashMap::new(),
            by_id: HashMap::new(),
            logger,
        }
    }

    /// Return a fresh identifier. Never collides with one already issued.
    pub fn mint(&self) -> ScreenId {
        loop {
            let id = ScreenId::mint();
            if !self.by_id.contains_key(&id) {
                return id;
            }
        }
    }

    /// Identifier bound to `screen`, if any.
    pub fn identifier_of(&self, screen: &ScreenRef) -> Option<ScreenId> {
        self.by_entry
            .get(&EntryKey::of(screen))
            .filter(|binding| binding.is_alive())
            .map(|binding| binding.id.clone())
    }

    /// Host entry bound to `id`, if it is still alive.
    pub fn entry_of(&self, id: &ScreenId) -> Option<ScreenRef> {
        let key = self.by_id.get(id)?;
        self.by_entry.get(key)?.screen.upgrade()
    }

    /// Bind `screen` to `id`. One-shot: returns `false` and leaves the
    /// existing binding alone if either side is already bound.
    pub fn associate(&mut self, screen: &ScreenRef, id: ScreenId) -> bool {
        let key = EntryKey::of(screen);
        if let Some(existing) = self.by_entry.get(&key).filter(|b| b.is_alive()) {
            self.logger.debug(&format!(
                "fail to associate {} with {}: already bound to {}.",
                screen.title(),
                id,
                existing.id
            ));
            return false;
        }
        if self.by_id.contains_key(&id) {
            self.logger.debug(&format!(
                "fail to associate {} with {}: identifier already in use.",
                screen.title(),
                id
            ));
            return false;
        }

        // A dead binding at this key is a leftover from a dropped screen.
        if let Some(stale) = self.by_entry.remove(&key) {
            self.by_id.remove(&stale.id);
        }
        self.by_id.insert(id.clone(), key);
        self.by_entry.insert(
            key,
            Binding {
                screen: Rc::downgrade(screen),
                id,
            },
        );
        true
    }

    /// Drop the binding for `id`. Returns whether one existed.
    pub fn release(&mut self, id: &ScreenId) -> bool {
        match self.by_id.remove(id) {
            Some(key) => {
                self.by_entry.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Drop every binding whose screen the host has torn down and return
    /// their identifiers.
    pub fn prune(&mut self) -> Vec<ScreenId> {
        let dead: Vec<EntryKey> = self
            .by_entry
            .iter()
            .filter(|(_, binding)| !binding.is_alive())
            .map(|(key, _)| *key)
            .collect();

        let mut released = Vec::with_capacity(dead.len());
        for key in dead {
            if let Some(binding) = self.by_entry.remove(&key) {
                self.by_id.remove(&binding.id);
                released.push(binding.id);
            }
        }
        released
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl fmt::Debug for IdentityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityRegistry")
            .field("bindings", &self.by_id.len())
            .finish()
    }
}
