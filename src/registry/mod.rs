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

//! The handler registry and the dispatch pipeline.

use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use jiff::Zoned;

use crate::Error;
use crate::ErrorKind;
use crate::Level;
use crate::format::Format;
use crate::handler::Destination;
use crate::handler::FileMode;
use crate::handler::Handler;
use crate::handler::HandlerInfo;
use crate::handler::Stream;
use crate::trap::Trap;

mod builder;
mod global;

pub use self::builder::DEFAULT_LEVEL_ENV;
pub use self::builder::RegistryBuilder;
pub use self::global::*;

/// The name of the handler that every registry starts with.
pub const ROOT: &str = "root";

/// An ordered collection of uniquely named handlers.
///
/// Every registry starts with a [`ROOT`] handler and offers each log call to all of its handlers
/// in registration order. One lock guards the handler list and all handler configuration: it is
/// held for the whole fan-out of a log call and for every add, update and remove, so lines are
/// never interleaved and configuration changes are never observed halfway.
///
/// # Examples
///
/// ```
/// use logfan::Level;
/// use logfan::Registry;
/// use logfan::Stream;
///
/// let registry = Registry::new();
/// registry.add_stream_handler(Stream::Stdout, Level::Debug, "console").unwrap();
/// registry.set_quiet(logfan::ROOT, true).unwrap();
///
/// logfan::debug!(registry: registry, "Debug message {}", 2);
/// ```
pub struct Registry {
    handlers: Mutex<Vec<Handler>>,
    trap: Box<dyn Trap>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("handlers", &*self.handlers())
            .field("trap", &self.trap)
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry holding only the default root handler.
    ///
    /// The root handler writes to [`Stream::Stderr`] at [`Level::Info`] with
    /// [`ColorFormat`](crate::format::ColorFormat) and
    /// [`DEFAULT_DATE_FORMAT`](crate::DEFAULT_DATE_FORMAT).
    pub fn new() -> Registry {
        RegistryBuilder::default().build_unchecked()
    }

    /// Create a [`RegistryBuilder`] to configure the root handler.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub(crate) fn from_parts(root: Handler, trap: Box<dyn Trap>) -> Registry {
        Registry {
            handlers: Mutex::new(vec![root]),
            trap,
        }
    }

    fn handlers(&self) -> MutexGuard<'_, Vec<Handler>> {
        self.handlers.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn register(
        &self,
        name: String,
        level: Level,
        format: Arc<dyn Format>,
        destination: impl FnOnce() -> Result<Destination, Error>,
    ) -> Result<HandlerInfo, Error> {
        let mut handlers = self.handlers();
        if handlers.iter().any(|h| h.name() == name) {
            return Err(Error::duplicate_handler(&name));
        }

        let handler = Handler::new(name, destination()?, level, format);
        let info = handler.info();
        handlers.push(handler);
        Ok(info)
    }

    fn update<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Handler) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let mut handlers = self.handlers();
        match handlers.iter_mut().find(|h| h.name() == name) {
            Some(handler) => f(handler),
            None => Err(Error::handler_not_found(name)),
        }
    }

    /// Register a handler writing to a process output stream.
    ///
    /// The handler renders with [`ColorFormat`](crate::format::ColorFormat).
    ///
    /// # Errors
    ///
    /// Return an error of [`ErrorKind::DuplicateHandler`] if `name` is already registered.
    pub fn add_stream_handler(
        &self,
        stream: Stream,
        level: Level,
        name: impl Into<String>,
    ) -> Result<HandlerInfo, Error> {
        let format = Arc::new(crate::format::ColorFormat::default());
        self.register(name.into(), level, format, || {
            Ok(Destination::Stream(stream))
        })
    }

    /// Register a handler writing to the file at `path`.
    ///
    /// The handler renders with [`PlainFormat`](crate::format::PlainFormat) and flushes after
    /// every line.
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * `name` is already registered ([`ErrorKind::DuplicateHandler`]); the file is not touched.
    /// * The file cannot be opened ([`ErrorKind::Io`]); nothing is registered.
    pub fn add_file_handler(
        &self,
        path: impl AsRef<Path>,
        mode: FileMode,
        level: Level,
        name: impl Into<String>,
    ) -> Result<HandlerInfo, Error> {
        let path = path.as_ref();
        let format = Arc::new(crate::format::PlainFormat::default());
        self.register(name.into(), level, format, || Destination::open(path, mode))
    }

    /// Register a handler writing to an arbitrary writer.
    ///
    /// The handler renders with [`PlainFormat`](crate::format::PlainFormat) and flushes the
    /// writer after every line.
    ///
    /// # Errors
    ///
    /// Return an error of [`ErrorKind::DuplicateHandler`] if `name` is already registered.
    pub fn add_writer_handler(
        &self,
        writer: impl Write + Send + 'static,
        level: Level,
        name: impl Into<String>,
    ) -> Result<HandlerInfo, Error> {
        let format = Arc::new(crate::format::PlainFormat::default());
        self.register(name.into(), level, format, || {
            Ok(Destination::Writer(Box::new(writer)))
        })
    }

    /// Remove the handler registered under `name`, flushing its destination.
    ///
    /// The handler is removed even if the final flush fails; that failure is sent to the
    /// registry's [`Trap`].
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * `name` is the [`ROOT`] handler ([`ErrorKind::RootHandler`]).
    /// * `name` is not registered ([`ErrorKind::HandlerNotFound`]).
    pub fn remove_handler(&self, name: &str) -> Result<HandlerInfo, Error> {
        if name == ROOT {
            return Err(Error::new(
                ErrorKind::RootHandler,
                "the root handler cannot be removed",
            ));
        }

        let mut handlers = self.handlers();
        let Some(index) = handlers.iter().position(|h| h.name() == name) else {
            return Err(Error::handler_not_found(name));
        };

        let mut handler = handlers.remove(index);
        drop(handlers);

        let info = handler.info();
        if let Err(err) = handler.flush() {
            self.trap.trap(&err);
        }
        Ok(info)
    }

    /// Look up the configuration of the handler registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<HandlerInfo, Error> {
        self.update(name, |handler| Ok(handler.info()))
    }

    /// The names of all handlers in registration order.
    pub fn handler_names(&self) -> Vec<String> {
        self.handlers()
            .iter()
            .map(|h| h.name().to_string())
            .collect()
    }

    /// Set the minimum level of the handler registered under `name`.
    pub fn set_level(&self, name: &str, level: Level) -> Result<(), Error> {
        self.update(name, |handler| {
            handler.set_level(level);
            Ok(())
        })
    }

    /// Set the quiet flag of the handler registered under `name`.
    ///
    /// A quiet handler emits nothing, whatever the level of the record.
    pub fn set_quiet(&self, name: &str, quiet: bool) -> Result<(), Error> {
        self.update(name, |handler| {
            handler.set_quiet(quiet);
            Ok(())
        })
    }

    /// Bind a new format to the handler registered under `name`.
    pub fn set_format(&self, name: &str, format: impl Into<Box<dyn Format>>) -> Result<(), Error> {
        let format: Box<dyn Format> = format.into();
        let format: Arc<dyn Format> = Arc::from(format);
        self.update(name, |handler| {
            handler.set_format(format);
            Ok(())
        })
    }

    /// Set the date format of the handler registered under `name`.
    ///
    /// The format follows [`jiff::fmt::strtime`] conventions.
    ///
    /// # Errors
    ///
    /// Return an error of [`ErrorKind::InvalidConfig`] if the date format cannot be rendered, in
    /// which case the previous date format is kept.
    pub fn set_date_format(&self, name: &str, date_format: impl Into<String>) -> Result<(), Error> {
        let date_format = date_format.into();
        self.update(name, |handler| handler.set_date_format(date_format))
    }

    /// Flush the destinations of all handlers.
    pub fn flush(&self) -> Result<(), Error> {
        let mut handlers = self.handlers();
        let mut errors = handlers
            .iter_mut()
            .filter_map(|handler| handler.flush().err());
        match errors.next() {
            None => Ok(()),
            Some(first) => Err(errors.fold(first, |acc, err| acc.with_source(err))),
        }
    }

    /// Whether any handler would emit a record at `level`.
    pub fn enabled(&self, level: Level) -> bool {
        self.handlers().iter().any(|h| h.should_emit(level))
    }

    /// Dispatch one log call to every handler.
    ///
    /// Errors raised by handlers are sent to the registry's [`Trap`]; logging never fails the
    /// caller. Use the [`log!`](crate::log) family of macros to capture the source location.
    pub fn log(&self, level: Level, file: &str, line: u32, args: fmt::Arguments) {
        if let Err(err) = self.try_log(level, file, line, args) {
            self.trap.trap(&err);
        }
    }

    /// Dispatch one log call to every handler, reporting failures.
    ///
    /// Every handler is offered the call even if an earlier one fails. The first failure is
    /// returned with the following ones attached as sources.
    pub fn try_log(
        &self,
        level: Level,
        file: &str,
        line: u32,
        args: fmt::Arguments,
    ) -> Result<(), Error> {
        // expand before locking: a `Display` argument may log to this registry
        let payload = match args.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(args.to_string()),
        };
        let now = Zoned::now();

        let mut handlers = self.handlers();
        let mut errors = handlers
            .iter_mut()
            .filter(|handler| handler.should_emit(level))
            .filter_map(|handler| handler.emit(&now, level, file, line, &payload).err());

        match errors.next() {
            None => Ok(()),
            Some(first) => Err(errors.fold(first, |acc, err| acc.with_source(err))),
        }
    }
}
