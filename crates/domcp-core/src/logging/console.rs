//! Console logger implementation
//!
//! Everything goes to stderr: stdout belongs to tool output and, when hosted
//! by an MCP transport, to protocol frames.

use super::traits::{LogLevel, Logger};

/// A logger that writes to stderr, dropping entries below `min_level`
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a new console logger with default prefix at info level
    pub fn new() -> Self {
        Self {
            prefix: "[domcp]".to_string(),
            min_level: LogLevel::Info,
        }
    }

    /// Create a console logger with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::new()
        }
    }

    /// Set the minimum level that gets written
    pub fn with_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    fn write(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        eprintln!("{} {}: {}", self.prefix, level, message);
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.write(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.write(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logger_creation() {
        let logger = ConsoleLogger::new();
        assert_eq!(logger.prefix, "[domcp]");
        assert_eq!(logger.min_level(), LogLevel::Info);

        let custom = ConsoleLogger::with_prefix("[test]").with_level(LogLevel::Error);
        assert_eq!(custom.prefix, "[test]");
        assert_eq!(custom.min_level(), LogLevel::Error);
    }

    #[test]
    fn test_console_logger_logs() {
        // Just make sure it doesn't panic
        let logger = ConsoleLogger::new().with_level(LogLevel::Debug);
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }
}
