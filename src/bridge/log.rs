// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bridge the [`log`] facade to a [`Registry`].

use crate::Level;
use crate::registry::Registry;
use crate::registry::default_registry;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

/// A [`log::Log`] implementation that routes records of the `log` crate to a registry.
///
/// `log` has no fatal level, so records arrive at most at [`Level::Error`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBridge {
    registry: Option<&'static Registry>,
}

impl LogBridge {
    /// Create a bridge routing to `registry`.
    pub fn new(registry: &'static Registry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    fn registry(&self) -> &'static Registry {
        self.registry.unwrap_or_else(default_registry)
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.registry().enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        self.registry().log(
            record.level().into(),
            record.file().unwrap_or_default(),
            record.line().unwrap_or_default(),
            *record.args(),
        );
    }

    fn flush(&self) {
        let _ = self.registry().flush();
    }
}

/// Route the `log` crate to the default registry.
///
/// # Errors
///
/// Return an error if a global logger of the `log` crate has already been set.
///
/// # Examples
///
/// ```
/// if logfan::bridge::setup_log_crate().is_err() {
///     eprintln!("failed to set logger");
/// }
///
/// log::info!("routed through the root handler");
/// ```
pub fn setup_log_crate() -> Result<(), log::SetLoggerError> {
    static BRIDGE: LogBridge = LogBridge { registry: None };
    log::set_logger(&BRIDGE)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::Write;
    use std::sync::Arc;
    use std::sync::Mutex;

    use log::Log;

    use super::*;
    use crate::ROOT;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bridge_maps_levels() {
        assert_eq!(Level::from(log::Level::Trace), Level::Trace);
        assert_eq!(Level::from(log::Level::Error), Level::Error);
    }

    #[test]
    fn test_bridge_routes_to_registry() {
        let registry: &'static Registry = Box::leak(Box::new(Registry::new()));
        registry.set_quiet(ROOT, true).unwrap();
        let buffer = Buffer::default();
        registry
            .add_writer_handler(buffer.clone(), Level::Debug, "capture")
            .unwrap();

        let bridge = LogBridge::new(registry);
        assert!(!bridge.enabled(&log::Metadata::builder().level(log::Level::Trace).build()));
        assert!(bridge.enabled(&log::Metadata::builder().level(log::Level::Debug).build()));

        bridge.log(
            &log::Record::builder()
                .args(format_args!("hello {}", "bridge"))
                .level(log::Level::Warn)
                .file(Some("src/lib.rs"))
                .line(Some(10))
                .build(),
        );

        let text = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(text.ends_with(" WARN  src/lib.rs:10: hello bridge\n"), "{text:?}");
    }
}
