//! The navigator engine.
//!
//! [`Navigator`] keeps an identifier-addressed model of a push/pop stack in
//! sync with an attached [`NavigationHost`]. It owns three pieces of state:
//!
//! - the [`StackModel`] — identifiers the navigator believes are on the
//!   stack, root first;
//! - the [`IdentityRegistry`] — which host screen carries which identifier;
//! - the attached [`HostAdapter`] — the live container, which the host may
//!   mutate on its own (a back gesture, for instance).
//!
//! # Command protocol
//!
//! Every command runs as one transaction:
//!
//! 1. Reconcile the model against the host's live entries
//! 2. Validate preconditions
//! 3. Compute the identifiers to drop
//! 4. Mutate the host
//! 5. Mutate the model and register surfaced screens
//! 6. Schedule the completion callback once the host transition settles
//!
//! Commands return immediately. Their outcome arrives later through the
//! completion callback, always via the [`Scheduler`] and never inside the
//! command call. A callback for command C runs after the model was updated
//! for C, so reading the navigator inside it shows the post-command stack.
//!
//! # Overlapping commands
//!
//! A command is in flight from its host mutation until its settlement. What
//! happens to commands issued meanwhile is set by [`OverlapPolicy`].
//!
//! # Threading
//!
//! A navigator and its host belong to one control context (the UI thread).
//! The handle is `!Send`; clones share state.

use crate::error::{CommandResult, NavigatorError};
use crate::events::{Listeners, StackEvent, SubscriptionId};
use crate::host::{HostAdapter, NavigationHost, ScreenRef};
use crate::identity::{ContainerId, IdentityRegistry, ScreenId};
use crate::logger::Logger;
use crate::scheduler::Scheduler;
use crate::stack::StackModel;
use crate::trace_log;
use crate::transition::{HostTransition, DEFAULT_SETTLE_DELAY};
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Configuration
// ============================================================================

/// What to do with a command issued while another one is still settling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Run it after the in-flight command (and everything queued before it)
    /// has settled.
    #[default]
    Queue,

    /// Fail it with [`NavigatorError::Busy`].
    Reject,

    /// Run it immediately, racing the in-flight transition.
    Allow,
}

/// Navigator configuration.
///
/// ```
/// use std::time::Duration;
/// use stack_navigator::{NavigatorConfig, OverlapPolicy};
///
/// let config = NavigatorConfig::new()
///     .settle_delay(Duration::from_millis(300))
///     .overlap(OverlapPolicy::Reject);
/// assert_eq!(config.settle_delay, Duration::from_millis(300));
/// ```
#[derive(Debug, Clone)]
pub struct NavigatorConfig {
    /// How long an untracked host transition is assumed to take.
    pub settle_delay: Duration,

    pub overlap: OverlapPolicy,

    /// Logging port. `None` means [`Logger::shared`].
    pub logger: Option<Arc<Logger>>,
}

impl NavigatorConfig {
    pub fn new() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            overlap: OverlapPolicy::Queue,
            logger: None,
        }
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn overlap(mut self, policy: OverlapPolicy) -> Self {
        self.overlap = policy;
        self
    }

    pub fn logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = Some(logger);
        self
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for [`Navigator::push_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushOptions {
    pub animated: bool,

    /// Drop every screen between the root and the pushed one.
    pub drop_all_from_root: bool,
}

impl PushOptions {
    pub fn new() -> Self {
        Self {
            animated: true,
            drop_all_from_root: false,
        }
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn drop_all_from_root(mut self, drop: bool) -> Self {
        self.drop_all_from_root = drop;
        self
    }
}

impl Default for PushOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Completion callback of a command.
pub type Completion = Box<dyn FnOnce(CommandResult)>;

/// Produces the screen a push command installs.
pub type ScreenBuilder = Box<dyn FnOnce() -> ScreenRef>;

// ============================================================================
// Commands
// ============================================================================

enum Command {
    Push {
        builder: ScreenBuilder,
        options: PushOptions,
    },
    PopToRoot {
        animated: bool,
    },
    PopToId {
        id: ScreenId,
        animated: bool,
    },
    PopToIndex {
        index: usize,
        animated: bool,
    },
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push { options, .. } => f
                .debug_struct("Push")
                .field("options", options)
                .finish_non_exhaustive(),
            Self::PopToRoot { animated } => f
                .debug_struct("PopToRoot")
                .field("animated", animated)
                .finish(),
            Self::PopToId { id, animated } => f
                .debug_struct("PopToId")
                .field("id", id)
                .field("animated", animated)
                .finish(),
            Self::PopToIndex { index, animated } => f
                .debug_struct("PopToIndex")
                .field("index", index)
                .field("animated", animated)
                .finish(),
        }
    }
}

struct Pending {
    command: Command,
    on_complete: Completion,
}

enum Admission {
    Run,
    Enqueue,
    Fail(NavigatorError),
}

// ============================================================================
// Core state
// ============================================================================

struct Core<H: NavigationHost> {
    adapter: Option<HostAdapter<H>>,
    registry: IdentityRegistry,
    stack: StackModel,
    listeners: Listeners,
    queue: VecDeque<Pending>,
    in_flight: usize,
    settle_delay: Duration,
    overlap: OverlapPolicy,
    logger: Arc<Logger>,
    scheduler: Rc<dyn Scheduler>,
}

impl<H: NavigationHost> Core<H> {
    fn new(config: NavigatorConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        let logger = config.logger.unwrap_or_else(Logger::shared);
        Self {
            adapter: None,
            registry: IdentityRegistry::new(Arc::clone(&logger)),
            stack: StackModel::new(Arc::clone(&logger)),
            listeners: Listeners::new(),
            queue: VecDeque::new(),
            in_flight: 0,
            settle_delay: config.settle_delay,
            overlap: config.overlap,
            logger,
            scheduler,
        }
    }

    fn admit(&self) -> Admission {
        if self.adapter.is_none() {
            return Admission::Fail(NavigatorError::NotAttached);
        }
        match self.overlap {
            OverlapPolicy::Allow => Admission::Run,
            OverlapPolicy::Queue if self.in_flight > 0 || !self.queue.is_empty() => {
                Admission::Enqueue
            }
            OverlapPolicy::Reject if self.in_flight > 0 => {
                Admission::Fail(NavigatorError::Busy)
            }
            _ => Admission::Run,
        }
    }

    fn adapter_mut(&mut self) -> Result<&mut HostAdapter<H>, NavigatorError> {
        self.adapter.as_mut().ok_or(NavigatorError::NotAttached)
    }

    /// Drop model entries whose host screen is gone.
    fn reconcile(&mut self, events: &mut Vec<StackEvent>) {
        let Some(adapter) = self.adapter.as_ref() else {
            return;
        };
        let live: HashSet<ScreenId> = adapter
            .current_entries()
            .iter()
            .filter_map(|screen| self.registry.identifier_of(screen))
            .collect();
        self.registry.prune();

        let gone: HashSet<ScreenId> = self
            .stack
            .ids()
            .iter()
            .filter(|id| !live.contains(*id))
            .cloned()
            .collect();
        if gone.is_empty() {
            return;
        }

        let removed = self.stack.remove_all(&gone);
        self.logger.info(&format!(
            "host removed {} screen(s) without a command: {:?}.",
            removed.len(),
            removed
        ));
        self.forget(removed, events);
        self.dump();
    }

    /// Register every screen the adapter surfaced.
    fn register_surfaced(&mut self, events: &mut Vec<StackEvent>) {
        let surfaced = match self.adapter.as_mut() {
            Some(adapter) => adapter.take_surfaced(),
            None => return,
        };
        for screen in surfaced {
            self.register(screen, events);
        }
    }

    fn register(&mut self, screen: ScreenRef, events: &mut Vec<StackEvent>) {
        let in_host = self.adapter.as_ref().is_some_and(|adapter| {
            adapter
                .current_entries()
                .iter()
                .any(|entry| Rc::ptr_eq(entry, &screen))
        });
        if !in_host {
            self.logger.debug(&format!(
                "fail to add {} because the host does not hold it.",
                screen.title()
            ));
            return;
        }

        if let Some(existing) = self.registry.identifier_of(&screen) {
            if self.stack.contains(&existing) {
                self.logger.debug(&format!(
                    "fail to add {} because {} already exists.",
                    screen.title(),
                    existing
                ));
                return;
            }
            // Still bound but missing from the model: restore it under its
            // original identifier.
            self.stack.append(existing.clone());
            self.announce(screen, existing, events);
            return;
        }

        let id = self.registry.mint();
        if !self.registry.associate(&screen, id.clone()) {
            return;
        }
        self.stack.append(id.clone());
        self.announce(screen, id, events);
    }

    fn announce(&self, screen: ScreenRef, id: ScreenId, events: &mut Vec<StackEvent>) {
        self.logger.info(&format!("success to add {}.", id));
        self.dump();
        events.push(StackEvent::Registered { screen, id });
        self.logger.debug("queued stack membership change.");
    }

    /// Release identifiers that left the model and emit a removal event.
    fn forget(&mut self, mut removed: Vec<ScreenId>, events: &mut Vec<StackEvent>) {
        if removed.is_empty() {
            return;
        }
        for id in &removed {
            self.registry.release(id);
        }
        removed.reverse();
        events.push(StackEvent::Removed { ids: removed });
    }

    fn dump(&self) {
        let host_count = self
            .adapter
            .as_ref()
            .map_or(0, |adapter| adapter.host().len());
        let ids: Vec<&str> = self.stack.ids().iter().map(ScreenId::as_str).collect();
        self.logger
            .debug(&format!("now: {} / {:?}.", host_count, ids));
    }

    fn push(
        &mut self,
        screen: ScreenRef,
        options: PushOptions,
        events: &mut Vec<StackEvent>,
    ) -> Result<HostTransition, NavigatorError> {
        self.reconcile(events);
        let title = screen.title();
        let adapter = self.adapter_mut()?;
        let transition = adapter.push(screen, options.animated);

        if options.drop_all_from_root {
            adapter.collapse_to_root_and_top();
            // The pushed screen is appended again when it registers below.
            let dropped = self.stack.truncate_to_first();
            self.forget(dropped, events);
        }

        self.register_surfaced(events);
        self.logger
            .info(&format!("success to push view, now: {}.", title));
        self.dump();
        Ok(transition)
    }

    fn pop_to_root(
        &mut self,
        animated: bool,
        events: &mut Vec<StackEvent>,
    ) -> Result<HostTransition, NavigatorError> {
        self.reconcile(events);
        let transition = self.adapter_mut()?.pop_to_root(animated);
        let dropped = self.stack.truncate_to_first();
        self.forget(dropped, events);

        self.logger.info("success to pop to root.");
        self.dump();
        Ok(transition)
    }

    fn pop_to_id(
        &mut self,
        id: &ScreenId,
        animated: bool,
        events: &mut Vec<StackEvent>,
    ) -> Result<HostTransition, NavigatorError> {
        if id.is_empty() {
            self.logger.debug("require an identifier to pop view.");
            return Err(NavigatorError::EmptyId);
        }
        self.reconcile(events);

        let entries = self.adapter_mut()?.current_entries();
        let mut above = HashSet::new();
        let mut target = None;
        for screen in entries.iter().rev() {
            match self.registry.identifier_of(screen) {
                Some(candidate) if candidate == *id => {
                    target = Some(Rc::clone(screen));
                    break;
                }
                Some(candidate) => {
                    above.insert(candidate);
                }
                None => {}
            }
        }

        let Some(target) = target else {
            self.logger
                .debug(&format!("fail to pop view {}: not in the host stack.", id));
            return Err(NavigatorError::NotFound { id: id.clone() });
        };

        let transition = self.adapter_mut()?.pop_to(&target, animated);
        if !above.is_empty() {
            let removed = self.stack.remove_all(&above);
            self.forget(removed, events);
        }

        self.logger.info(&format!("success to pop view {}.", id));
        self.dump();
        Ok(transition)
    }

    fn pop_to_index(
        &mut self,
        index: usize,
        animated: bool,
        events: &mut Vec<StackEvent>,
    ) -> Result<HostTransition, NavigatorError> {
        self.reconcile(events);

        let entries = self.adapter_mut()?.current_entries();
        if index >= entries.len().saturating_sub(1) {
            self.logger.debug(&format!(
                "fail to pop view with index {}, host holds {} screen(s).",
                index,
                entries.len()
            ));
            return Err(NavigatorError::IndexOutOfRange {
                index,
                count: entries.len(),
            });
        }

        let target = Rc::clone(&entries[index]);
        let doomed: HashSet<ScreenId> = entries[index + 1..]
            .iter()
            .filter_map(|screen| self.registry.identifier_of(screen))
            .collect();

        let transition = self.adapter_mut()?.pop_to(&target, animated);
        if !doomed.is_empty() {
            let removed = self.stack.remove_all(&doomed);
            self.forget(removed, events);
        }

        self.logger.info(&format!(
            "success to pop view {} at index {}.",
            target.title(),
            index
        ));
        self.dump();
        Ok(transition)
    }
}

impl<H: NavigationHost> Drop for Core<H> {
    fn drop(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        self.logger.warning(&format!(
            "navigator dropped, cancelling {} queued command(s).",
            self.queue.len()
        ));
        for pending in self.queue.drain(..) {
            trace_log!("cancelled {:?}", pending.command);
            let on_complete = pending.on_complete;
            self.scheduler.schedule(
                Duration::ZERO,
                Box::new(move || on_complete(Err(NavigatorError::Cancelled))),
            );
        }
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Handle to a navigator. Clones share state.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use std::time::Duration;
/// use stack_navigator::{ManualScheduler, MemoryHost, Navigator, PushOptions, Screen};
///
/// struct Page(&'static str);
/// impl Screen for Page {}
///
/// let scheduler = Rc::new(ManualScheduler::new());
/// let host = MemoryHost::with_root(Rc::new(Page("home")));
/// let navigator = Navigator::new(scheduler.clone());
/// navigator.attach(host).unwrap();
///
/// navigator.push_view(|| Rc::new(Page("detail")), PushOptions::new(), |result| {
///     assert!(result.is_ok());
/// });
/// assert_eq!(navigator.num_of_items(), 2);
///
/// scheduler.advance(Duration::from_millis(250));
/// ```
pub struct Navigator<H: NavigationHost> {
    core: Rc<RefCell<Core<H>>>,
}

impl<H: NavigationHost + 'static> Navigator<H> {
    /// Create an unattached navigator with the default configuration.
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self::with_config(NavigatorConfig::default(), scheduler)
    }

    pub fn with_config(config: NavigatorConfig, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            core: Rc::new(RefCell::new(Core::new(config, scheduler))),
        }
    }

    /// Attach to `host`, minting a container identifier and registering the
    /// host's current top as the root.
    pub fn attach(&self, host: H) -> Result<ContainerId, NavigatorError> {
        self.with_core(|core, events| {
            if core.adapter.is_some() {
                core.logger.warning("navigator is already attached.");
                return Err(NavigatorError::AlreadyAttached);
            }
            let adapter = HostAdapter::attach(host, Arc::clone(&core.logger)).ok_or_else(|| {
                core.logger.warning("cannot attach to a container without a root.");
                NavigatorError::EmptyHost
            })?;
            let container_id = adapter.container_id().clone();
            core.adapter = Some(adapter);
            core.register_surfaced(events);
            Ok(container_id)
        })
    }

    pub fn is_attached(&self) -> bool {
        self.core.borrow().adapter.is_some()
    }

    pub fn container_id(&self) -> Option<ContainerId> {
        self.core
            .borrow()
            .adapter
            .as_ref()
            .map(|adapter| adapter.container_id().clone())
    }

    pub fn logger(&self) -> Arc<Logger> {
        Arc::clone(&self.core.borrow().logger)
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    /// Push the screen produced by `builder`.
    ///
    /// With `drop_all_from_root`, every screen between the root and the new
    /// one is dropped, leaving `[root, new]`. A push that reaches the host
    /// always completes with `Ok(())`; hosts have no way to refuse one.
    pub fn push_view<B, C>(&self, builder: B, options: PushOptions, on_complete: C)
    where
        B: FnOnce() -> ScreenRef + 'static,
        C: FnOnce(CommandResult) + 'static,
    {
        self.submit(
            Command::Push {
                builder: Box::new(builder),
                options,
            },
            Box::new(on_complete),
        );
    }

    /// Pop everything above the root.
    pub fn pop_to_root<C>(&self, animated: bool, on_complete: C)
    where
        C: FnOnce(CommandResult) + 'static,
    {
        self.submit(Command::PopToRoot { animated }, Box::new(on_complete));
    }

    /// Pop every screen above the one identified by `id`, leaving it on top.
    ///
    /// Fails with [`NavigatorError::EmptyId`] for an empty identifier and
    /// [`NavigatorError::NotFound`] if no host screen carries it.
    pub fn pop_to_id<C>(&self, id: impl Into<ScreenId>, animated: bool, on_complete: C)
    where
        C: FnOnce(CommandResult) + 'static,
    {
        self.submit(
            Command::PopToId {
                id: id.into(),
                animated,
            },
            Box::new(on_complete),
        );
    }

    /// Pop every screen above position `index` (0 = root).
    ///
    /// `index` must be below the current top; anything else fails with
    /// [`NavigatorError::IndexOutOfRange`].
    pub fn pop_to_index<C>(&self, index: usize, animated: bool, on_complete: C)
    where
        C: FnOnce(CommandResult) + 'static,
    {
        self.submit(
            Command::PopToIndex { index, animated },
            Box::new(on_complete),
        );
    }

    // ------------------------------------------------------------------------
    // Host hooks
    // ------------------------------------------------------------------------

    /// Registration hook for screens the host surfaced on its own, such as
    /// host-driven forward navigation. The screen must already be in the
    /// host's entries.
    pub fn screen_appeared(&self, screen: ScreenRef) {
        self.with_core(|core, events| {
            let Some(adapter) = core.adapter.as_mut() else {
                core.logger
                    .warning(&format!("{} appeared before attach.", screen.title()));
                return;
            };
            adapter.surface(screen);
            core.reconcile(events);
            core.register_surfaced(events);
        });
    }

    /// Reconcile the model with the host now.
    pub fn sync(&self) {
        self.with_core(|core, events| core.reconcile(events));
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    /// Number of screens on the stack, root included.
    pub fn num_of_items(&self) -> usize {
        self.with_core(|core, events| {
            core.reconcile(events);
            core.stack.count()
        })
    }

    pub fn top_identifier(&self) -> Option<ScreenId> {
        self.with_core(|core, events| {
            core.reconcile(events);
            core.stack.top().cloned()
        })
    }

    /// Snapshot of every identifier, root first.
    pub fn identifiers(&self) -> Vec<ScreenId> {
        self.with_core(|core, events| {
            core.reconcile(events);
            core.stack.ids().to_vec()
        })
    }

    pub fn identifier_of(&self, screen: &ScreenRef) -> Option<ScreenId> {
        self.core.borrow().registry.identifier_of(screen)
    }

    pub fn screen_of(&self, id: &ScreenId) -> Option<ScreenRef> {
        self.core.borrow().registry.entry_of(id)
    }

    /// Commands waiting behind an in-flight one.
    pub fn pending_commands(&self) -> usize {
        self.core.borrow().queue.len()
    }

    /// Whether a host transition has not settled yet.
    pub fn is_settling(&self) -> bool {
        self.core.borrow().in_flight > 0
    }

    // ------------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------------

    pub fn subscribe(&self, listener: impl Fn(&StackEvent) + 'static) -> SubscriptionId {
        self.core.borrow_mut().listeners.subscribe(Rc::new(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.core.borrow_mut().listeners.unsubscribe(id)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Run `f` on the core, then deliver the events it produced with no
    /// borrow held.
    fn with_core<R>(&self, f: impl FnOnce(&mut Core<H>, &mut Vec<StackEvent>) -> R) -> R {
        let mut events = Vec::new();
        let (result, listeners) = {
            let mut core = self.core.borrow_mut();
            let result = f(&mut *core, &mut events);
            let listeners = if events.is_empty() {
                Vec::new()
            } else {
                core.listeners.snapshot()
            };
            (result, listeners)
        };
        for event in &events {
            for listener in &listeners {
                listener(event);
            }
        }
        result
    }

    fn submit(&self, command: Command, on_complete: Completion) {
        let admission = self.core.borrow().admit();
        match admission {
            Admission::Run => self.execute(command, on_complete),
            Admission::Enqueue => {
                let mut core = self.core.borrow_mut();
                core.logger.debug(&format!(
                    "navigation in flight, queued {:?} behind {} command(s).",
                    command,
                    core.queue.len()
                ));
                core.queue.push_back(Pending {
                    command,
                    on_complete,
                });
            }
            Admission::Fail(error) => {
                self.core
                    .borrow()
                    .logger
                    .warning(&format!("refused {:?}: {}.", command, error));
                self.fail(error, on_complete);
            }
        }
    }

    fn execute(&self, command: Command, on_complete: Completion) {
        trace_log!("executing {:?}", command);
        let outcome = match command {
            Command::Push { builder, options } => {
                // Built outside the core borrow; builders may read the navigator.
                let screen = builder();
                self.with_core(|core, events| core.push(screen, options, events))
            }
            Command::PopToRoot { animated } => {
                self.with_core(|core, events| core.pop_to_root(animated, events))
            }
            Command::PopToId { id, animated } => {
                self.with_core(|core, events| core.pop_to_id(&id, animated, events))
            }
            Command::PopToIndex { index, animated } => {
                self.with_core(|core, events| core.pop_to_index(index, animated, events))
            }
        };

        match outcome {
            Ok(transition) => {
                let delay = {
                    let mut core = self.core.borrow_mut();
                    core.in_flight += 1;
                    transition.settle_after(core.settle_delay)
                };
                self.settle(delay, on_complete);
            }
            Err(error) => self.fail(error, on_complete),
        }
    }

    fn settle(&self, delay: Duration, on_complete: Completion) {
        let core: Weak<RefCell<Core<H>>> = Rc::downgrade(&self.core);
        self.scheduler().schedule(
            delay,
            Box::new(move || {
                let Some(core) = core.upgrade() else {
                    on_complete(Ok(()));
                    return;
                };
                {
                    let mut state = core.borrow_mut();
                    state.in_flight = state.in_flight.saturating_sub(1);
                }
                on_complete(Ok(()));
                Navigator { core }.drain_queue();
            }),
        );
    }

    fn fail(&self, error: NavigatorError, on_complete: Completion) {
        self.scheduler()
            .schedule(Duration::ZERO, Box::new(move || on_complete(Err(error))));
    }

    fn scheduler(&self) -> Rc<dyn Scheduler> {
        Rc::clone(&self.core.borrow().scheduler)
    }

    /// Start queued commands until one of them is in flight.
    fn drain_queue(&self) {
        loop {
            let next = {
                let mut core = self.core.borrow_mut();
                if core.in_flight > 0 {
                    None
                } else {
                    core.queue.pop_front()
                }
            };
            let Some(pending) = next else {
                break;
            };
            trace_log!("dequeued {:?}", pending.command);
            self.execute(pending.command, pending.on_complete);
        }
    }
}

impl<H: NavigationHost> Clone for Navigator<H> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<H: NavigationHost> fmt::Debug for Navigator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.core.try_borrow() {
            Ok(core) => f
                .debug_struct("Navigator")
                .field("adapter", &core.adapter)
                .field("stack", &core.stack.ids())
                .field("queued", &core.queue.len())
                .field("in_flight", &core.in_flight)
                .finish(),
            Err(_) => f.write_str("Navigator { <busy> }"),
        }
    }
}
