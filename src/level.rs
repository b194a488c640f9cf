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

//! Severity levels.

use std::fmt;
use std::str::FromStr;

use colored::Color;

use crate::Error;
use crate::ErrorKind;

/// An enum representing the available verbosity levels of the logger.
///
/// Levels are ordered by increasing severity, so a handler with a minimum level of
/// [`Level::Warn`] emits `Warn`, `Error` and `Fatal` records.
///
/// # Examples
///
/// ```
/// use logfan::Level;
///
/// assert!(Level::Trace < Level::Debug);
/// assert!(Level::Error < Level::Fatal);
/// assert_eq!(Level::Warn.as_str(), "WARN");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Designates very low priority, often extremely verbose, information.
    Trace,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates very serious errors.
    Error,
    /// Designates errors the program cannot recover from.
    Fatal,
}

const LEVELS: [Level; 6] = [
    Level::Trace,
    Level::Debug,
    Level::Info,
    Level::Warn,
    Level::Error,
    Level::Fatal,
];

impl Level {
    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Return the default terminal color of the `Level`.
    pub fn color(&self) -> Color {
        match self {
            Level::Trace => Color::BrightBlue,
            Level::Debug => Color::Cyan,
            Level::Info => Color::Green,
            Level::Warn => Color::Yellow,
            Level::Error => Color::Red,
            Level::Fatal => Color::Magenta,
        }
    }

    /// Return the ANSI escape sequence that switches the foreground to [`Level::color`].
    pub fn color_tag(&self) -> &'static str {
        match self {
            Level::Trace => "\x1b[94m",
            Level::Debug => "\x1b[36m",
            Level::Info => "\x1b[32m",
            Level::Warn => "\x1b[33m",
            Level::Error => "\x1b[31m",
            Level::Fatal => "\x1b[35m",
        }
    }

    /// Return the position of the `Level` in the severity table, starting from `0` for `Trace`.
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    /// Look up a `Level` by its position in the severity table.
    pub fn from_index(index: usize) -> Option<Level> {
        LEVELS.get(index).copied()
    }

    /// Iterate over all levels from the least to the most severe.
    pub fn iter() -> impl DoubleEndedIterator<Item = Level> {
        LEVELS.into_iter()
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;
    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for level in LEVELS {
            if s.eq_ignore_ascii_case(level.as_str()) {
                return Ok(level);
            }
        }

        Err(Error::new(ErrorKind::InvalidConfig, format!("malformed level: {s:?}")))
    }
}
