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

//! Log record handed to a [`Format`](crate::Format).

use std::borrow::Cow;

use jiff::Zoned;

use crate::Level;

/// The payload of a log message, as seen by one handler.
///
/// A record is built once per handler during dispatch: the observed time is shared by all
/// handlers, but its text rendering depends on the date format of the handler at hand.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: &'a Zoned,
    time: &'a str,

    // the metadata
    level: Level,
    file: &'a str,
    line: u32,

    // the payload
    payload: &'a str,
}

impl<'a> Record<'a> {
    /// The observed time.
    pub fn timestamp(&self) -> &'a Zoned {
        self.now
    }

    /// The observed time, rendered with the handler's date format.
    pub fn time(&self) -> &'a str {
        self.time
    }

    /// The verbosity level of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The source file containing the message.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The filename of the source file.
    pub fn filename(&self) -> Cow<'a, str> {
        std::path::Path::new(self.file)
            .file_name()
            .map(std::ffi::OsStr::to_string_lossy)
            .unwrap_or_default()
    }

    /// The line containing the message.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The message body.
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// Returns a new builder.
    pub fn builder(now: &'a Zoned) -> RecordBuilder<'a> {
        RecordBuilder::new(now)
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl<'a> RecordBuilder<'a> {
    /// Create a builder observing the given time.
    pub fn new(now: &'a Zoned) -> Self {
        RecordBuilder {
            record: Record {
                now,
                time: "",
                level: Level::Info,
                file: "",
                line: 0,
                payload: "",
            },
        }
    }

    /// Set [`time`](Record::time).
    pub fn time(mut self, time: &'a str) -> Self {
        self.record.time = time;
        self
    }

    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.record.level = level;
        self
    }

    /// Set [`file`](Record::file).
    pub fn file(mut self, file: &'a str) -> Self {
        self.record.file = file;
        self
    }

    /// Set [`line`](Record::line).
    pub fn line(mut self, line: u32) -> Self {
        self.record.line = line;
        self
    }

    /// Set [`payload`](Record::payload).
    pub fn payload(mut self, payload: &'a str) -> Self {
        self.record.payload = payload;
        self
    }

    /// Invoke the builder and return a `Record`
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
