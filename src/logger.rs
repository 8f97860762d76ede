//! Leveled logging port.
//!
//! [`Logger`] is the sink every navigator component writes its user-facing
//! log lines to. It filters by a minimum [`LogLevel`] and forwards accepted
//! messages either to an installed [`LogDelegate`] or, when none is
//! installed, to the console.
//!
//! Components take an `Arc<Logger>` at construction time. A process-wide
//! default exists ([`Logger::shared`]) for the composition root; nothing in
//! the crate reaches for it except [`NavigatorConfig`](crate::NavigatorConfig)
//! when no logger was supplied.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use stack_navigator::{LogDelegate, LogLevel, Logger};
//!
//! #[derive(Default)]
//! struct Capture(Mutex<Vec<String>>);
//!
//! impl LogDelegate for Capture {
//!     fn log(&self, level: LogLevel, message: &str) {
//!         self.0.lock().unwrap().push(format!("{level:?}: {message}"));
//!     }
//! }
//!
//! let capture = Arc::new(Capture::default());
//! let logger = Logger::new(LogLevel::Debug);
//! logger.set_delegate(capture.clone());
//! logger.log(LogLevel::Debug, "hello");
//! assert!(capture.0.lock().unwrap().iter().any(|line| line == "Debug: hello"));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

/// Severity of a log line. Ordered `None < Debug < Info < Warning`.
///
/// A message is emitted when its level is greater than or equal to the
/// logger's threshold, so a threshold of [`LogLevel::None`] lets everything
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    None = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warning = 3,
}

impl LogLevel {
    /// Tag printed in front of console lines, e.g. `[INFO]`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Debug => "[DEBUG]",
            Self::Info => "[INFO]",
            Self::Warning => "[WARNING]",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::Debug,
            2 => Self::Info,
            _ => Self::Warning,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
        };
        f.write_str(name)
    }
}

/// Receiver for log lines that passed the level filter.
pub trait LogDelegate: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    /// Name shown when the delegate is installed.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Delegate forwarding port messages into the `log` / `tracing` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeDelegate;

impl LogDelegate for FacadeDelegate {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::None => {
                crate::trace_log!("{}", message);
            }
            LogLevel::Debug => {
                crate::debug_log!("{}", message);
            }
            LogLevel::Info => {
                crate::info_log!("{}", message);
            }
            LogLevel::Warning => {
                crate::warn_log!("{}", message);
            }
        }
    }

    fn name(&self) -> &str {
        "FacadeDelegate"
    }
}

/// Prefix of every console line.
pub const CONSOLE_PREFIX: &str = "[StackNavigator]";

/// Format a line the way the console sink prints it.
pub fn format_console_line(level: LogLevel, message: &str) -> String {
    format!("{CONSOLE_PREFIX}{} {message}", level.tag())
}

/// Leveled logging port with a pluggable delegate.
pub struct Logger {
    level: AtomicU8,
    delegate: RwLock<Option<Arc<dyn LogDelegate>>>,
}

impl Logger {
    /// Create a logger with the given threshold and no delegate.
    pub fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            delegate: RwLock::new(None),
        }
    }

    /// Process-wide default logger, threshold [`LogLevel::Info`].
    pub fn shared() -> Arc<Logger> {
        static SHARED: OnceLock<Arc<Logger>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(Logger::default())))
    }

    /// Current threshold.
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Change the threshold. Applies to every later call.
    pub fn set_level(&self, level: LogLevel) {
        self.log(
            LogLevel::Info,
            &format!("set level: {} -> {}", self.level(), level),
        );
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Install the delegate, replacing any previous one.
    pub fn set_delegate(&self, delegate: Arc<dyn LogDelegate>) {
        self.log(
            LogLevel::Info,
            &format!("set delegate: {}", delegate.name()),
        );
        if let Ok(mut slot) = self.delegate.write() {
            *slot = Some(delegate);
        }
    }

    /// Remove the delegate; later lines go to the console again.
    pub fn clear_delegate(&self) {
        if let Ok(mut slot) = self.delegate.write() {
            *slot = None;
        }
    }

    /// Whether a line at `level` would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Emit `message` at `level` if it passes the threshold.
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let delegate = self
            .delegate
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().map(Arc::clone));
        match delegate {
            Some(delegate) => delegate.log(level, message),
            None => println!("{}", format_console_line(level, message)),
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_delegate = self
            .delegate
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false);
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("has_delegate", &has_delegate)
            .finish()
    }
}
