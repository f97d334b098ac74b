//! Application-wide constants

/// Number of entries in the placeholder collection
pub const DEFAULT_ITEM_COUNT: usize = 5;

/// Text prefix for placeholder entries, numbered from 1
pub const DEFAULT_ITEM_PREFIX: &str = "Default List Name";

/// Event poll timeout in milliseconds
pub const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Default interval between items file checks in milliseconds
pub const DEFAULT_WATCH_INTERVAL_MS: u64 = 500;

/// Channel buffer size for watcher messages
pub const WATCH_CHANNEL_SIZE: usize = 16;

/// Default list title
pub const DEFAULT_TITLE: &str = "Items";

/// Data directory relative to home (logs)
pub const DATA_SUBDIR: &str = ".local/share/picklist";

/// Log file name prefix for the daily rolling appender
pub const LOG_FILE: &str = "picklist.log";
