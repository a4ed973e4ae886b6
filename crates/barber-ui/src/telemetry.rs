//! Logging initialisation for the page controller.
//!
//! # Design
//! - One `fmt` layer filtered by the configured directive.
//! - In the browser each formatted event becomes one console call at the
//!   matching severity; natively events go to stderr.
//! - Timestamps are omitted: the console stamps lines itself and wasm32 has no clock.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;
use crate::error::{Result, UiError};

/// Browser console method used for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleMethod {
    /// `console.error`.
    Error,
    /// `console.warn`.
    Warn,
    /// `console.info`.
    Info,
    /// `console.debug`.
    Debug,
}

/// Console method for a tracing level. `TRACE` shares `console.debug`.
#[must_use]
pub fn console_method(level: Level) -> ConsoleMethod {
    if level == Level::ERROR {
        ConsoleMethod::Error
    } else if level == Level::WARN {
        ConsoleMethod::Warn
    } else if level == Level::INFO {
        ConsoleMethod::Info
    } else {
        ConsoleMethod::Debug
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns [`UiError::Telemetry`] when the filter directive is invalid or a
/// subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_new(&settings.level).map_err(|err| UiError::Telemetry {
        detail: format!("invalid filter '{}': {err}", settings.level),
    })?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .without_time()
                .with_writer(writer()),
        )
        .try_init()
        .map_err(|err| UiError::Telemetry {
            detail: err.to_string(),
        })
}

#[cfg(not(target_arch = "wasm32"))]
fn writer() -> fn() -> std::io::Stderr {
    std::io::stderr
}

#[cfg(target_arch = "wasm32")]
const fn writer() -> console::ConsoleMakeWriter {
    console::ConsoleMakeWriter
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    use super::{ConsoleMethod, console_method};

    /// Produces one [`ConsoleWriter`] per event.
    #[derive(Clone, Copy, Debug)]
    pub(super) struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it on drop.
    pub(super) struct ConsoleWriter {
        method: ConsoleMethod,
        buffer: Vec<u8>,
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                method: console_method(Level::INFO),
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                method: console_method(*meta.level()),
                buffer: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buffer);
            let message = JsValue::from_str(line.trim_end());
            match self.method {
                ConsoleMethod::Error => web_sys::console::error_1(&message),
                ConsoleMethod::Warn => web_sys::console::warn_1(&message),
                ConsoleMethod::Info => web_sys::console::info_1(&message),
                ConsoleMethod::Debug => web_sys::console::debug_1(&message),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(console_method(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(console_method(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(console_method(Level::INFO), ConsoleMethod::Info);
        assert_eq!(console_method(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(console_method(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn invalid_filter_is_reported() {
        let settings = LoggingSettings {
            level: "barber_ui=info=debug".to_string(),
        };
        let err = init_logging(&settings).unwrap_err();
        assert!(
            matches!(err, UiError::Telemetry { ref detail } if detail.contains("barber_ui=info=debug"))
        );
    }

    #[test]
    fn init_logging_installs_subscriber_once() {
        let settings = LoggingSettings::default();
        let first = init_logging(&settings);
        let second = init_logging(&settings);
        assert!(first.is_ok());
        assert!(matches!(second, Err(UiError::Telemetry { .. })));
    }
}
