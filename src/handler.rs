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

//! Handlers: named, independently configured log sinks.

use std::fmt;
use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use jiff::Zoned;

use crate::Error;
use crate::ErrorKind;
use crate::Level;
use crate::format::Format;
use crate::record::Record;

/// The date format installed on new handlers, e.g. `22:44:57`.
pub const DEFAULT_DATE_FORMAT: &str = "%H:%M:%S";

/// A date format with the calendar date, e.g. `2024-08-11 22:44:57`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An RFC 3339 date format with milliseconds, e.g. `2024-08-11T22:44:57.172+08:00`.
pub const RFC3339_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// A process output stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stream {
    /// The standard output stream.
    Stdout,
    /// The standard error stream.
    #[default]
    Stderr,
}

/// How a file handler opens its file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FileMode {
    /// Keep existing content and append new lines, creating the file if needed.
    #[default]
    Append,
    /// Discard existing content, creating the file if needed.
    Truncate,
}

impl FileMode {
    /// Return the string representation of the `FileMode`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileMode::Append => "append",
            FileMode::Truncate => "truncate",
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileMode {
    type Err = Error;

    /// Parse a mode, accepting `fopen`-style `"a"` and `"w"` as well as the full names.
    fn from_str(s: &str) -> Result<FileMode, Self::Err> {
        match s {
            "a" | "append" => Ok(FileMode::Append),
            "w" | "truncate" => Ok(FileMode::Truncate),
            _ => Err(Error::new(
                ErrorKind::InvalidConfig,
                format!("malformed file mode: {s:?}"),
            )),
        }
    }
}

/// The kind of destination a handler writes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DestinationKind {
    /// A process output stream.
    Stream(Stream),
    /// A file at the given path.
    File(PathBuf),
    /// A user supplied writer.
    Writer,
}

/// Where a handler writes its lines. Exactly one is chosen when the handler is created.
pub(crate) enum Destination {
    Stream(Stream),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
    Writer(Box<dyn Write + Send>),
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stream(stream) => f.debug_tuple("Stream").field(stream).finish(),
            Destination::File { path, .. } => f.debug_struct("File").field("path", path).finish(),
            Destination::Writer(_) => f.write_str("Writer { ... }"),
        }
    }
}

impl Destination {
    pub(crate) fn open(path: &Path, mode: FileMode) -> Result<Destination, Error> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            FileMode::Append => options.append(true),
            FileMode::Truncate => options.write(true).truncate(true),
        };

        let file = options.open(path).map_err(|err| {
            Error::new(ErrorKind::Io, "failed to open log file")
                .with_context("path", path.display())
                .with_context("mode", mode)
                .with_source(err)
        })?;

        Ok(Destination::File {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    fn kind(&self) -> DestinationKind {
        match self {
            Destination::Stream(stream) => DestinationKind::Stream(*stream),
            Destination::File { path, .. } => DestinationKind::File(path.clone()),
            Destination::Writer(_) => DestinationKind::Writer,
        }
    }

    // one write_all per line so a line is never split across writes
    fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        match self {
            Destination::Stream(Stream::Stdout) => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(line)?;
                stdout.flush()
            }
            Destination::Stream(Stream::Stderr) => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(line)?;
                stderr.flush()
            }
            Destination::File { writer, .. } => {
                writer.write_all(line)?;
                writer.flush()
            }
            Destination::Writer(writer) => {
                writer.write_all(line)?;
                writer.flush()
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::Stream(Stream::Stdout) => io::stdout().flush(),
            Destination::Stream(Stream::Stderr) => io::stderr().flush(),
            Destination::File { writer, .. } => writer.flush(),
            Destination::Writer(writer) => writer.flush(),
        }
    }
}

/// A named, independently configured log sink.
///
/// Handlers are owned by a [`Registry`](crate::Registry) and configured through it by name.
#[derive(Debug)]
pub(crate) struct Handler {
    name: String,
    destination: Destination,
    level: Level,
    quiet: bool,
    format: Arc<dyn Format>,
    date_format: String,
}

impl Handler {
    pub(crate) fn new(
        name: impl Into<String>,
        destination: Destination,
        level: Level,
        format: Arc<dyn Format>,
    ) -> Self {
        Self {
            name: name.into(),
            destination,
            level,
            quiet: false,
            format,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn should_emit(&self, level: Level) -> bool {
        !self.quiet && level >= self.level
    }

    /// Render one line for this handler and write it to the destination.
    pub(crate) fn emit(
        &mut self,
        now: &Zoned,
        level: Level,
        file: &str,
        line: u32,
        payload: &str,
    ) -> Result<(), Error> {
        let time = render_time(&self.date_format, now)?;
        let record = Record::builder(now)
            .time(&time)
            .level(level)
            .file(file)
            .line(line)
            .payload(payload)
            .build();

        let mut bytes = Vec::with_capacity(time.len() + payload.len() + 64);
        self.format.format(&record, &mut bytes)?;
        bytes.extend_from_slice(payload.as_bytes());
        bytes.push(b'\n');

        self.destination.write_line(&bytes).map_err(|err| {
            Error::from_io_error(err)
                .with_context("handler", &self.name)
                .with_context("destination", format!("{:?}", self.destination))
        })
    }

    pub(crate) fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    pub(crate) fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub(crate) fn set_format(&mut self, format: Arc<dyn Format>) {
        self.format = format;
    }

    pub(crate) fn set_date_format(&mut self, date_format: impl Into<String>) -> Result<(), Error> {
        let date_format = date_format.into();
        validate_date_format(&date_format)?;
        self.date_format = date_format;
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> Result<(), Error> {
        self.destination.flush().map_err(|err| {
            Error::from_io_error(err).with_context("handler", &self.name)
        })
    }

    pub(crate) fn info(&self) -> HandlerInfo {
        HandlerInfo {
            name: self.name.clone(),
            destination: self.destination.kind(),
            level: self.level,
            quiet: self.quiet,
            format: self.format.clone(),
            date_format: self.date_format.clone(),
        }
    }
}

impl Drop for Handler {
    fn drop(&mut self) {
        let _ = self.destination.flush();
    }
}

pub(crate) fn render_time(date_format: &str, now: &Zoned) -> Result<String, Error> {
    jiff::fmt::strtime::format(date_format, now).map_err(|err| {
        Error::new(ErrorKind::InvalidConfig, "failed to render date format")
            .with_context("date_format", date_format)
            .with_source(err)
    })
}

pub(crate) fn validate_date_format(date_format: &str) -> Result<(), Error> {
    render_time(date_format, &Zoned::now()).map(|_| ())
}

/// A snapshot of a handler's configuration.
///
/// Returned by the registry's add and lookup operations. A snapshot does not follow later
/// configuration changes; look the handler up again to observe them.
#[derive(Clone, Debug)]
pub struct HandlerInfo {
    name: String,
    destination: DestinationKind,
    level: Level,
    quiet: bool,
    format: Arc<dyn Format>,
    date_format: String,
}

impl HandlerInfo {
    /// The unique name of the handler.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the handler writes to.
    pub fn destination(&self) -> &DestinationKind {
        &self.destination
    }

    /// The minimum level the handler emits.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether the handler is quiet.
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// The format bound to the handler.
    pub fn format(&self) -> &Arc<dyn Format> {
        &self.format
    }

    /// The date format of the handler.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }
}
