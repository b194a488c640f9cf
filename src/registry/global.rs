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

//! The process-wide default registry and configuration entry points operating on it.

use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

use crate::Error;
use crate::Level;
use crate::format::Format;
use crate::handler::FileMode;
use crate::handler::HandlerInfo;
use crate::handler::Stream;
use crate::registry::Registry;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

static DEFAULT_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Return the process-wide default registry, initializing it on first use.
///
/// Unless [`set_default_registry`] ran first, the default registry holds the default root handler
/// whose level can be overridden with the [`DEFAULT_LEVEL_ENV`](crate::DEFAULT_LEVEL_ENV)
/// environment variable.
pub fn default_registry() -> &'static Registry {
    DEFAULT_REGISTRY.get_or_init(|| {
        Registry::builder()
            .level_from_default_env()
            .build()
            .unwrap_or_else(|err| {
                DefaultTrap::default().trap(&err);
                Registry::new()
            })
    })
}

/// Install `registry` as the process-wide default registry.
///
/// # Errors
///
/// Return the given registry back if the default registry has already been initialized, either
/// by a previous call or by a log call through the default registry.
///
/// # Examples
///
/// ```
/// use logfan::Level;
/// use logfan::Registry;
///
/// let registry = Registry::builder().root_level(Level::Debug).build().unwrap();
/// if logfan::set_default_registry(registry).is_err() {
///     eprintln!("default registry already initialized");
/// }
/// ```
pub fn set_default_registry(registry: Registry) -> Result<(), Registry> {
    DEFAULT_REGISTRY.set(registry)
}

/// Register a stream handler with the default registry.
///
/// See [`Registry::add_stream_handler`].
pub fn add_stream_handler(
    stream: Stream,
    level: Level,
    name: impl Into<String>,
) -> Result<HandlerInfo, Error> {
    default_registry().add_stream_handler(stream, level, name)
}

/// Register a file handler with the default registry.
///
/// See [`Registry::add_file_handler`].
pub fn add_file_handler(
    path: impl AsRef<Path>,
    mode: FileMode,
    level: Level,
    name: impl Into<String>,
) -> Result<HandlerInfo, Error> {
    default_registry().add_file_handler(path, mode, level, name)
}

/// Register a writer handler with the default registry.
///
/// See [`Registry::add_writer_handler`].
pub fn add_writer_handler(
    writer: impl Write + Send + 'static,
    level: Level,
    name: impl Into<String>,
) -> Result<HandlerInfo, Error> {
    default_registry().add_writer_handler(writer, level, name)
}

/// Remove a handler from the default registry.
pub fn remove_handler(name: &str) -> Result<HandlerInfo, Error> {
    default_registry().remove_handler(name)
}

/// Look up a handler of the default registry.
pub fn lookup(name: &str) -> Result<HandlerInfo, Error> {
    default_registry().lookup(name)
}

/// Set the minimum level of a handler of the default registry.
pub fn set_level(name: &str, level: Level) -> Result<(), Error> {
    default_registry().set_level(name, level)
}

/// Set the quiet flag of a handler of the default registry.
pub fn set_quiet(name: &str, quiet: bool) -> Result<(), Error> {
    default_registry().set_quiet(name, quiet)
}

/// Bind a new format to a handler of the default registry.
pub fn set_format(name: &str, format: impl Into<Box<dyn Format>>) -> Result<(), Error> {
    default_registry().set_format(name, format)
}

/// Set the date format of a handler of the default registry.
pub fn set_date_format(name: &str, date_format: impl Into<String>) -> Result<(), Error> {
    default_registry().set_date_format(name, date_format)
}

/// Flush all handlers of the default registry.
pub fn flush() -> Result<(), Error> {
    default_registry().flush()
}
