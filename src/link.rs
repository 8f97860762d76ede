//! Reusable push triggers.
//!
//! A [`NavigationLink`] pairs a destination builder with push options, so a
//! button or menu item can hold one and call [`activate`](NavigationLink::activate)
//! whenever it is pressed. Each activation builds a fresh screen instance.

use crate::host::{NavigationHost, ScreenRef};
use crate::navigator::{Navigator, PushOptions};
use std::fmt;
use std::rc::Rc;

/// Destination plus push options, activated on demand.
///
/// ```
/// use std::rc::Rc;
/// use stack_navigator::{ManualScheduler, MemoryHost, NavigationLink, Navigator, Screen};
///
/// struct Page;
/// impl Screen for Page {}
///
/// let scheduler = Rc::new(ManualScheduler::new());
/// let navigator = Navigator::new(scheduler.clone());
/// navigator.attach(MemoryHost::with_root(Rc::new(Page))).unwrap();
///
/// let link = NavigationLink::new(|| Rc::new(Page)).animated(false);
/// link.activate(&navigator);
/// link.activate(&navigator);
/// scheduler.run_until_idle();
/// assert_eq!(navigator.num_of_items(), 3);
/// ```
#[derive(Clone)]
pub struct NavigationLink {
    destination: Rc<dyn Fn() -> ScreenRef>,
    options: PushOptions,
}

impl NavigationLink {
    pub fn new(destination: impl Fn() -> ScreenRef + 'static) -> Self {
        Self {
            destination: Rc::new(destination),
            options: PushOptions::new(),
        }
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.options.animated = animated;
        self
    }

    /// Drop everything between the root and the destination on activation.
    pub fn drop_all_from_root(mut self, drop: bool) -> Self {
        self.options.drop_all_from_root = drop;
        self
    }

    pub fn options(&self) -> PushOptions {
        self.options
    }

    /// Push a fresh destination onto `navigator` and log the outcome.
    pub fn activate<H: NavigationHost + 'static>(&self, navigator: &Navigator<H>) {
        self.activate_with(navigator, |_| {});
    }

    /// Like [`activate`](Self::activate), also handing the outcome to
    /// `on_complete`.
    pub fn activate_with<H, C>(&self, navigator: &Navigator<H>, on_complete: C)
    where
        H: NavigationHost + 'static,
        C: FnOnce(crate::CommandResult) + 'static,
    {
        let destination = Rc::clone(&self.destination);
        let logger = navigator.logger();
        navigator.push_view(
            move || destination(),
            self.options,
            move |result| {
                logger.debug(&format!("link activation finished: {:?}.", result));
                on_complete(result);
            },
        );
    }
}

impl fmt::Debug for NavigationLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationLink")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
