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

use std::borrow::Cow;
use std::sync::Arc;

use crate::Error;
use crate::Level;
use crate::format::ColorFormat;
use crate::format::Format;
use crate::handler::DEFAULT_DATE_FORMAT;
use crate::handler::Destination;
use crate::handler::Handler;
use crate::handler::Stream;
use crate::handler::validate_date_format;
use crate::registry::ROOT;
use crate::registry::Registry;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// The environment variable read by [`RegistryBuilder::level_from_default_env`].
pub const DEFAULT_LEVEL_ENV: &str = "LOGFAN_LEVEL";

/// A builder for configuring the root handler of a [`Registry`].
///
/// # Examples
///
/// ```
/// use logfan::Level;
/// use logfan::Registry;
/// use logfan::Stream;
/// use logfan::format::PlainFormat;
///
/// let registry = Registry::builder()
///     .root_stream(Stream::Stdout)
///     .root_level(Level::Debug)
///     .root_format(PlainFormat::default())
///     .root_date_format(logfan::DATE_TIME_FORMAT)
///     .build()
///     .unwrap();
/// ```
#[must_use = "call `build` to construct a registry"]
#[derive(Debug)]
pub struct RegistryBuilder {
    root_level: Level,
    root_stream: Stream,
    root_format: Arc<dyn Format>,
    root_date_format: String,
    level_env: Option<String>,
    trap: Box<dyn Trap>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        RegistryBuilder {
            root_level: Level::Info,
            root_stream: Stream::Stderr,
            root_format: Arc::new(ColorFormat::default()),
            root_date_format: DEFAULT_DATE_FORMAT.to_string(),
            level_env: None,
            trap: Box::new(DefaultTrap::default()),
        }
    }
}

impl RegistryBuilder {
    /// Set the minimum level of the root handler. Default to [`Level::Info`].
    pub fn root_level(mut self, level: Level) -> Self {
        self.root_level = level;
        self
    }

    /// Set the stream of the root handler. Default to [`Stream::Stderr`].
    pub fn root_stream(mut self, stream: Stream) -> Self {
        self.root_stream = stream;
        self
    }

    /// Set the format of the root handler. Default to [`ColorFormat`].
    pub fn root_format(mut self, format: impl Into<Box<dyn Format>>) -> Self {
        let format: Box<dyn Format> = format.into();
        self.root_format = Arc::from(format);
        self
    }

    /// Set the date format of the root handler. Default to [`DEFAULT_DATE_FORMAT`].
    pub fn root_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.root_date_format = date_format.into();
        self
    }

    /// Read the root level from the environment variable `name` when it is set.
    ///
    /// The value is a level name such as `debug` or `WARN`, and takes precedence over
    /// [`root_level`](RegistryBuilder::root_level). Handlers filter by level alone, so the value
    /// is a single level rather than an `env_filter` directive list; per-target directives such
    /// as `my_crate=debug` are rejected as malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use logfan::Registry;
    ///
    /// let registry = Registry::builder().level_from_env("MY_LOG").build();
    /// ```
    pub fn level_from_env<'a, E>(mut self, name: E) -> Self
    where
        E: Into<Cow<'a, str>>,
    {
        self.level_env = Some(name.into().into_owned());
        self
    }

    /// Read the root level from the [`DEFAULT_LEVEL_ENV`] environment variable when it is set.
    pub fn level_from_default_env(self) -> Self {
        self.level_from_env(DEFAULT_LEVEL_ENV)
    }

    /// Set the trap for errors raised while dispatching. Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`Registry`].
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * The root date format cannot be rendered.
    /// * The configured environment variable holds a malformed level.
    pub fn build(mut self) -> Result<Registry, Error> {
        validate_date_format(&self.root_date_format)?;

        if let Some(name) = self.level_env.as_deref() {
            if let Ok(value) = std::env::var(name) {
                self.root_level = value
                    .trim()
                    .parse()
                    .map_err(|err: Error| err.with_context("env", name))?;
            }
        }

        Ok(self.build_unchecked())
    }

    pub(crate) fn build_unchecked(self) -> Registry {
        let destination = Destination::Stream(self.root_stream);
        let mut root = Handler::new(ROOT, destination, self.root_level, self.root_format);
        if root.set_date_format(self.root_date_format).is_err() {
            let _ = root.set_date_format(DEFAULT_DATE_FORMAT);
        }
        Registry::from_parts(root, self.trap)
    }
}
