//! The boundary to the host navigation container.
//!
//! The container that actually holds and renders screens belongs to the
//! host UI toolkit. The navigator reaches it through the [`NavigationHost`]
//! trait and never owns the screens it contains; it only keeps weak
//! back-references to them (see [`IdentityRegistry`](crate::IdentityRegistry)).
//!
//! [`HostAdapter`] wraps one attached container. It forwards mutation
//! primitives to the host and records which screens surfaced as a side
//! effect, so the navigator can register them once the mutation returns.
//!
//! [`MemoryHost`] is a complete in-memory container for headless use and
//! tests. Its `simulate_*` methods mutate the stack the way a user gesture
//! would, without going through the navigator.

use crate::identity::ContainerId;
use crate::logger::Logger;
use crate::transition::HostTransition;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A host-owned screen instance occupying one stack position.
pub trait Screen: 'static {
    /// Human-readable name used in log lines.
    fn title(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Shared handle to a host screen. Identity is the allocation, so clones of
/// one handle refer to the same screen.
pub type ScreenRef = Rc<dyn Screen>;

/// Mutation and inspection primitives of a host navigation container.
///
/// Implementations are handles onto a container owned elsewhere, which is
/// why every method takes `&self`. Implementations must not call back into
/// the navigator from inside these methods; screens that appear through
/// host-driven navigation are reported with
/// [`Navigator::screen_appeared`](crate::Navigator::screen_appeared).
pub trait NavigationHost {
    /// Live snapshot of the container's screens, root first.
    fn entries(&self) -> Vec<ScreenRef>;

    /// Append `screen` as the new top.
    fn push(&self, screen: ScreenRef, animated: bool) -> HostTransition;

    /// Remove every screen above the root.
    fn pop_to_root(&self, animated: bool) -> HostTransition;

    /// Remove every screen above `screen`. No-op if it is not in the stack.
    fn pop_to(&self, screen: &ScreenRef, animated: bool) -> HostTransition;

    /// Replace the whole stack without animation.
    fn set_entries(&self, entries: Vec<ScreenRef>);

    fn top(&self) -> Option<ScreenRef> {
        self.entries().last().cloned()
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Name used in log lines.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// One attached host container.
pub struct HostAdapter<H: NavigationHost> {
    host: H,
    container_id: ContainerId,
    surfaced: Vec<ScreenRef>,
    logger: Arc<Logger>,
}

impl<H: NavigationHost> HostAdapter<H> {
    /// Record `host` and surface its root. Fails if the container is empty.
    pub fn attach(host: H, logger: Arc<Logger>) -> Option<Self> {
        let root = host.top()?;
        let container_id = ContainerId::mint();
        logger.info(&format!(
            "add new navigation {} ({}).",
            host.describe(),
            container_id
        ));
        Some(Self {
            host,
            container_id,
            surfaced: vec![root],
            logger,
        })
    }

    pub fn container_id(&self) -> &ContainerId {
        &self.container_id
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn current_entries(&self) -> Vec<ScreenRef> {
        self.host.entries()
    }

    pub fn push(&mut self, screen: ScreenRef, animated: bool) -> HostTransition {
        let transition = self.host.push(Rc::clone(&screen), animated);
        self.surface(screen);
        transition
    }

    pub fn pop_to_root(&mut self, animated: bool) -> HostTransition {
        self.host.pop_to_root(animated)
    }

    pub fn pop_to(&mut self, screen: &ScreenRef, animated: bool) -> HostTransition {
        self.host.pop_to(screen, animated)
    }

    /// Collapse the host stack to its root and its current top.
    pub fn collapse_to_root_and_top(&mut self) {
        let entries = self.host.entries();
        if entries.len() <= 2 {
            return;
        }
        let kept: Vec<ScreenRef> = entries
            .first()
            .into_iter()
            .chain(entries.last())
            .cloned()
            .collect();
        self.logger.debug(&format!(
            "collapse host stack {} -> {}.",
            entries.len(),
            kept.len()
        ));
        self.host.set_entries(kept);
    }

    /// Report a screen the host just surfaced.
    pub fn surface(&mut self, screen: ScreenRef) {
        self.surfaced.push(screen);
    }

    /// Screens surfaced since the last call, in order of appearance.
    pub fn take_surfaced(&mut self) -> Vec<ScreenRef> {
        std::mem::take(&mut self.surfaced)
    }
}

impl<H: NavigationHost> fmt::Debug for HostAdapter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostAdapter")
            .field("host", &self.host.describe())
            .field("container_id", &self.container_id)
            .field("entries", &self.host.len())
            .field("surfaced", &self.surfaced.len())
            .finish()
    }
}

// ============================================================================
// MemoryHost
// ============================================================================

/// Record of a mutation a [`MemoryHost`] received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Push { title: String, animated: bool },
    PopToRoot { animated: bool },
    PopTo { title: String, animated: bool },
    SetEntries { count: usize },
}

#[derive(Default)]
struct MemoryHostState {
    entries: Vec<ScreenRef>,
    transition: HostTransition,
    calls: Vec<HostCall>,
}

/// In-memory navigation container.
///
/// Cloning yields another handle to the same container, which is how a
/// test keeps a handle for simulating gestures after giving one to the
/// navigator.
#[derive(Clone, Default)]
pub struct MemoryHost {
    state: Rc<RefCell<MemoryHostState>>,
}

impl MemoryHost {
    /// Container holding only `root`.
    pub fn with_root(root: ScreenRef) -> Self {
        let host = Self::default();
        host.state.borrow_mut().entries.push(root);
        host
    }

    /// Report `transition` from every later push or pop.
    pub fn with_transition(self, transition: HostTransition) -> Self {
        self.state.borrow_mut().transition = transition;
        self
    }

    /// Mutations received through the [`NavigationHost`] trait, oldest first.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state.borrow().calls.clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.state
            .borrow()
            .entries
            .iter()
            .map(|screen| screen.title())
            .collect()
    }

    /// Host-driven back gesture: drop the top unless it is the root.
    pub fn simulate_back(&self) -> Option<ScreenRef> {
        let mut state = self.state.borrow_mut();
        if state.entries.len() <= 1 {
            return None;
        }
        state.entries.pop()
    }

    /// Host-driven pop keeping entries `0..=index`.
    pub fn simulate_pop_to(&self, index: usize) -> Vec<ScreenRef> {
        let mut state = self.state.borrow_mut();
        if index + 1 >= state.entries.len() {
            return Vec::new();
        }
        state.entries.split_off(index + 1)
    }

    /// Host-driven forward navigation. The caller reports the screen to the
    /// navigator with `screen_appeared`.
    pub fn simulate_push(&self, screen: ScreenRef) {
        self.state.borrow_mut().entries.push(screen);
    }
}

impl NavigationHost for MemoryHost {
    fn entries(&self) -> Vec<ScreenRef> {
        self.state.borrow().entries.clone()
    }

    fn push(&self, screen: ScreenRef, animated: bool) -> HostTransition {
        let mut state = self.state.borrow_mut();
        state.calls.push(HostCall::Push {
            title: screen.title(),
            animated,
        });
        state.entries.push(screen);
        state.transition
    }

    fn pop_to_root(&self, animated: bool) -> HostTransition {
        let mut state = self.state.borrow_mut();
        state.calls.push(HostCall::PopToRoot { animated });
        state.entries.truncate(1);
        state.transition
    }

    fn pop_to(&self, screen: &ScreenRef, animated: bool) -> HostTransition {
        let mut state = self.state.borrow_mut();
        state.calls.push(HostCall::PopTo {
            title: screen.title(),
            animated,
        });
        if let Some(position) = state
            .entries
            .iter()
            .position(|entry| Rc::ptr_eq(entry, screen))
        {
            state.entries.truncate(position + 1);
        }
        state.transition
    }

    fn set_entries(&self, entries: Vec<ScreenRef>) {
        let mut state = self.state.borrow_mut();
        state.calls.push(HostCall::SetEntries {
            count: entries.len(),
        });
        state.entries = entries;
    }

    fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    fn describe(&self) -> String {
        "MemoryHost".to_string()
    }
}

impl fmt::Debug for MemoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryHost")
            .field("entries", &self.titles())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogLevel;

    struct Page(&'static str);

    impl Screen for Page {
        fn title(&self) -> String {
            self.0.to_string()
        }
    }

    fn page(name: &'static str) -> ScreenRef {
        Rc::new(Page(name))
    }

    fn quiet() -> Arc<Logger> {
        Arc::new(Logger::new(LogLevel::Warning))
    }

    #[test]
    fn test_attach_surfaces_root() {
        let root = page("root");
        let host = MemoryHost::with_root(Rc::clone(&root));
        let mut adapter = HostAdapter::attach(host, quiet()).unwrap();

        let surfaced = adapter.take_surfaced();
        assert_eq!(surfaced.len(), 1);
        assert!(Rc::ptr_eq(&surfaced[0], &root));
        assert!(adapter.take_surfaced().is_empty());
    }

    #[test]
    fn test_attach_empty_host_fails() {
        assert!(HostAdapter::attach(MemoryHost::default(), quiet()).is_none());
    }

    #[test]
    fn test_push_surfaces_screen() {
        let mut adapter = HostAdapter::attach(MemoryHost::with_root(page("root")), quiet()).unwrap();
        adapter.take_surfaced();

        let transition = adapter.push(page("a"), true);

        assert_eq!(transition, HostTransition::Untracked);
        assert_eq!(adapter.take_surfaced().len(), 1);
        assert_eq!(adapter.host().titles(), ["root", "a"]);
    }

    #[test]
    fn test_collapse_keeps_root_and_top() {
        let host = MemoryHost::with_root(page("root"));
        let mut adapter = HostAdapter::attach(host.clone(), quiet()).unwrap();
        for name in ["a", "b", "c"] {
            adapter.push(page(name), false);
        }

        adapter.collapse_to_root_and_top();

        assert_eq!(host.titles(), ["root", "c"]);
        assert_eq!(host.calls().last(), Some(&HostCall::SetEntries { count: 2 }));
    }

    #[test]
    fn test_memory_host_pop_to() {
        let a = page("a");
        let host = MemoryHost::with_root(page("root"));
        host.push(Rc::clone(&a), true);
        host.push(page("b"), true);

        host.pop_to(&a, false);
        assert_eq!(host.titles(), ["root", "a"]);

        host.pop_to(&page("stranger"), false);
        assert_eq!(host.titles(), ["root", "a"]);
    }

    #[test]
    fn test_simulated_gestures() {
        let host = MemoryHost::with_root(page("root"))
            .with_transition(HostTransition::immediate());
        host.simulate_push(page("a"));
        host.simulate_push(page("b"));
        host.simulate_push(page("c"));

        assert_eq!(host.simulate_back().map(|s| s.title()), Some("c".to_string()));
        assert_eq!(host.simulate_pop_to(0).len(), 2);
        assert!(host.simulate_back().is_none());
        assert_eq!(host.titles(), ["root"]);
        assert!(host.calls().is_empty());
        assert_eq!(host.push(page("d"), true), HostTransition::immediate());
    }
}
