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

use std::io;

use crate::Error;
use crate::format::Format;
use crate::format::PrefixStyle;
use crate::record::Record;

/// A format that renders the prefix as plain text, suitable for files.
///
/// Output format:
///
/// ```text
/// 22:44:57 INFO  src/main.rs:12: Info message 3
/// 22:44:57 WARN  src/main.rs:13: Warn message 4
/// ```
///
/// # Examples
///
/// ```
/// use logfan::format::PlainFormat;
///
/// let format = PlainFormat::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlainFormat {
    style: PrefixStyle,
}

impl PlainFormat {
    /// Set the arrangement of the prefix fields.
    pub fn style(mut self, style: PrefixStyle) -> Self {
        self.style = style;
        self
    }
}

impl Format for PlainFormat {
    fn format(&self, record: &Record, out: &mut dyn io::Write) -> Result<(), Error> {
        let time = record.time();
        let level = record.level();
        let file = record.file();
        let line = record.line();

        match self.style {
            PrefixStyle::LevelFirst => write!(out, "{time} {level:<5} {file}:{line}: "),
            PrefixStyle::LocationFirst => write!(out, "{time} [{file}:{line}] {level:<5}: "),
        }
        .map_err(Error::from_io_error)
    }
}
