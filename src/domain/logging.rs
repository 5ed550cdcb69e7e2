use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Display;

/// Severity, ordered so that a minimum level can filter with `<`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Which layer a log line comes from
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub metadata: Option<String>,
}

impl LogEntry {
    /// Stamped with the installed clock
    pub fn new(level: LogLevel, component: LogComponent, message: &str, metadata: Option<&str>) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
            metadata: metadata.map(str::to_string),
        }
    }
}

/// Source of wall-clock time in milliseconds
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message, None));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message, None));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message, None));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message, None));
    }

    /// Attach a request body or status line next to the message
    fn log_with_metadata(&self, level: LogLevel, component: LogComponent, message: &str, metadata: &str) {
        self.log(LogEntry::new(level, component, message, Some(metadata)));
    }
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static CLOCK: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

/// Install the process-wide logger. Later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

/// Install the process-wide clock. Later calls are ignored.
pub fn init_time_provider(clock: Box<dyn TimeProvider>) {
    let _ = CLOCK.set(clock);
}

pub fn get_logger() -> &'static dyn Logger {
    LOGGER.get().map_or(&SilentLogger, |logger| logger.as_ref())
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    CLOCK.get().map_or(&TickClock, |clock| clock.as_ref())
}

/// Used until `init_logger` runs, and in native tests
struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Counts calls instead of reading a clock
struct TickClock;

impl TimeProvider for TickClock {
    fn current_timestamp(&self) -> u64 {
        static TICKS: AtomicU64 = AtomicU64::new(0);
        TICKS.fetch_add(1, Ordering::Relaxed)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{timestamp}")
    }
}

/// Compiled out of release builds
#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().info($component, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().warn($component, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::Info.to_string(), " INFO");
    }

    #[test]
    fn component_display_carries_layer_prefix() {
        assert_eq!(LogComponent::Application("Reducer").to_string(), "APP:Reducer");
        assert_eq!(LogComponent::Infrastructure("Http").to_string(), "INF:Http");
    }

    #[test]
    fn entries_keep_metadata_apart_from_message() {
        let entry = LogEntry::new(LogLevel::Warn, LogComponent::Domain("Test"), "slow", Some("status=503"));
        assert_eq!(entry.message, "slow");
        assert_eq!(entry.metadata.as_deref(), Some("status=503"));
        assert!(LogEntry::new(LogLevel::Info, LogComponent::Domain("Test"), "ok", None).metadata.is_none());
    }
}
