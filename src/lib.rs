//! # stack-navigator
//!
//! An identifier-addressed push/pop navigation stack that stays in sync with
//! a host navigation container the navigator does not own.
//!
//! The host (a UI toolkit's navigation controller, or the in-memory
//! [`MemoryHost`]) holds and renders the screens. The [`Navigator`] keeps its
//! own ordered list of [`ScreenId`]s, one per screen, and reconciles that list
//! with the host whenever it runs a command, registers a screen, or answers a
//! read, so pops the host performs on its own (a swipe-back gesture) are
//! picked up without the navigator having issued them.
//!
//! # Quick start
//!
//! ```
//! use std::rc::Rc;
//! use std::time::Duration;
//! use stack_navigator::{ManualScheduler, MemoryHost, Navigator, PushOptions, Screen};
//!
//! struct Page(&'static str);
//!
//! impl Screen for Page {
//!     fn title(&self) -> String {
//!         self.0.to_string()
//!     }
//! }
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let host = MemoryHost::with_root(Rc::new(Page("home")));
//! let navigator = Navigator::new(scheduler.clone());
//! navigator.attach(host.clone())?;
//!
//! for name in ["list", "detail", "edit"] {
//!     navigator.push_view(move || Rc::new(Page(name)), PushOptions::new(), |_| {});
//! }
//! scheduler.run_until_idle();
//! assert_eq!(navigator.num_of_items(), 4);
//!
//! // Pop back to "list" by position.
//! navigator.pop_to_index(1, true, |result| assert!(result.is_ok()));
//! scheduler.advance(Duration::from_millis(250));
//! assert_eq!(host.titles(), ["home", "list"]);
//!
//! // The user swipes back; the next read notices.
//! host.simulate_back();
//! assert_eq!(navigator.num_of_items(), 1);
//! # Ok::<(), stack_navigator::NavigatorError>(())
//! ```
//!
//! # Modules
//!
//! - [`navigator`] — the engine, its configuration and command queue
//! - [`host`] — the host boundary and the in-memory host
//! - [`identity`] — screen identifiers and the identity side table
//! - [`stack`] — the ordered identifier model
//! - [`transition`] — settlement of host transitions
//! - [`scheduler`] — deferred completion delivery
//! - [`events`] — stack membership notifications
//! - [`logger`] — the leveled logging port
//! - [`link`] — reusable push triggers
//! - [`error`] — error types
//!
//! # Feature flags
//!
//! | Feature   | Default | Description                                      |
//! |-----------|---------|--------------------------------------------------|
//! | `log`     | yes     | Facade logging through the `log` crate           |
//! | `tracing` | no      | Facade logging through `tracing` (exclusive with `log`) |
//! | `tokio`   | no      | [`TokioScheduler`](scheduler::TokioScheduler)    |

pub mod error;
pub mod events;
pub mod host;
pub mod identity;
pub mod link;
pub mod logger;
pub mod logging;
pub mod navigator;
pub mod scheduler;
pub mod stack;
pub mod transition;

pub use error::{CommandResult, NavigatorError};
pub use events::{Listener, StackEvent, SubscriptionId};
pub use host::{HostAdapter, HostCall, MemoryHost, NavigationHost, Screen, ScreenRef};
pub use identity::{ContainerId, IdentityRegistry, ScreenId};
pub use link::NavigationLink;
pub use logger::{FacadeDelegate, LogDelegate, LogLevel, Logger};
pub use navigator::{Completion, Navigator, NavigatorConfig, OverlapPolicy, PushOptions};
pub use scheduler::{ManualScheduler, Scheduler, Task};
#[cfg(feature = "tokio")]
pub use scheduler::TokioScheduler;
pub use stack::StackModel;
pub use transition::{HostTransition, DEFAULT_SETTLE_DELAY};
