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

//! Format functions that render the prefix of a log line.

use std::fmt;
use std::io;

use crate::Error;
use crate::record::Record;

mod color;
mod custom;
mod plain;

pub use self::color::ColorFormat;
pub use self::custom::CustomFormat;
pub use self::plain::PlainFormat;

/// A format function that renders the prefix of a log line.
///
/// A format writes everything that precedes the message body: usually the timestamp, the source
/// location and the level tag. The handler appends the message body and the trailing newline
/// itself, so two formats fed the same record always agree on the body.
pub trait Format: fmt::Debug + Send + Sync + 'static {
    /// Write the prefix of `record` to `out`.
    fn format(&self, record: &Record, out: &mut dyn io::Write) -> Result<(), Error>;
}

impl<T: Format> From<T> for Box<dyn Format> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// The arrangement of the prefix fields used by the built-in formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrefixStyle {
    /// `{time} {LEVEL} {file}:{line}: `
    #[default]
    LevelFirst,
    /// `{time} [{file}:{line}] {LEVEL}: `
    LocationFirst,
}
