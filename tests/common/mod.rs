//! Test utilities for navigator tests
//!
//! Provides a screen fixture, a navigator harness over [`MemoryHost`] with a
//! manual clock, and a recorder for completion results.

#![allow(dead_code)]

use stack_navigator::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Screen fixture identified by its title
pub struct Page(pub &'static str);

impl Screen for Page {
    fn title(&self) -> String {
        self.0.to_string()
    }
}

pub fn page(name: &'static str) -> ScreenRef {
    Rc::new(Page(name))
}

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Logger that keeps quiet unless something goes wrong
pub fn quiet_logger() -> Arc<Logger> {
    Arc::new(Logger::new(LogLevel::Warning))
}

/// Navigator attached to a fresh in-memory host with root "root"
pub struct Harness {
    pub navigator: Navigator<MemoryHost>,
    pub host: MemoryHost,
    pub scheduler: Rc<ManualScheduler>,
    pub results: Rc<RefCell<Vec<CommandResult>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(NavigatorConfig::new())
    }

    pub fn with_config(config: NavigatorConfig) -> Self {
        init_logging();
        let config = if config.logger.is_some() {
            config
        } else {
            config.logger(quiet_logger())
        };
        let scheduler = Rc::new(ManualScheduler::new());
        let navigator = Navigator::with_config(config, scheduler.clone());
        let host = MemoryHost::with_root(page("root"));
        navigator
            .attach(host.clone())
            .expect("attach to a host with a root");
        Self {
            navigator,
            host,
            scheduler,
            results: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Completion callback appending to `results`
    pub fn recorder(&self) -> impl FnOnce(CommandResult) + 'static {
        let sink = self.results.clone();
        move |result| sink.borrow_mut().push(result)
    }

    pub fn push(&self, name: &'static str) {
        self.navigator
            .push_view(move || page(name), PushOptions::new(), self.recorder());
    }

    /// Push and let the transition settle
    pub fn push_settled(&self, name: &'static str) {
        self.push(name);
        self.settle();
    }

    pub fn settle(&self) {
        self.scheduler.run_until_idle();
    }

    pub fn last_result(&self) -> Option<CommandResult> {
        self.results.borrow().last().cloned()
    }

    pub fn result_count(&self) -> usize {
        self.results.borrow().len()
    }

    /// Identifier of the screen at host position `index`
    pub fn id_at(&self, index: usize) -> ScreenId {
        let screen = self.host.entries()[index].clone();
        self.navigator
            .identifier_of(&screen)
            .expect("screen is registered")
    }
}

/// Assert the host shows exactly `titles`, root first
pub fn assert_host(harness: &Harness, titles: &[&str]) {
    assert_eq!(harness.host.titles(), titles, "host stack mismatch");
}
