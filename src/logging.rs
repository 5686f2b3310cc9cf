//! # Logging
//!
//! Thin helpers over the `log` facade. The codecs themselves only emit
//! `debug!` lines when they reject input; binaries call [`init_logger`] once at
//! start-up and control verbosity through `RUST_LOG`.

use log::{debug, info, log_enabled, Level};

use crate::util::hex::format_hex_compact;

/// Initializes the logger with the `env_logger` crate.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    let _ = env_logger::try_init();
}

/// Logs an informational message.
pub fn log_info(message: &str) {
    if log_enabled!(Level::Info) {
        info!("{message}");
    }
}

/// Logs a debug message.
pub fn log_debug(message: &str) {
    if log_enabled!(Level::Debug) {
        debug!("{message}");
    }
}

/// Logs a byte buffer as compact hex at debug level.
///
/// The hex string is only built when debug logging is enabled.
pub fn log_bytes_hex(label: &str, data: &[u8]) {
    if log_enabled!(Level::Debug) {
        debug!("{label} ({} bytes): {}", data.len(), format_hex_compact(data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_without_logger_is_noop() {
        log_info("info");
        log_debug("debug");
        log_bytes_hex("frame", &[0x68, 0x31]);
    }

    #[test]
    fn test_init_logger_twice() {
        init_logger();
        init_logger();
    }
}
