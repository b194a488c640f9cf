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

use std::fmt;
use std::io;

use crate::Error;
use crate::format::Format;
use crate::record::Record;

type FormatFunction =
    dyn Fn(&Record, &mut dyn io::Write) -> Result<(), Error> + Send + Sync + 'static;

/// A format that you can pass the custom format function.
///
/// The custom format function receives the [`Record`] and the destination, and takes full control
/// over the prefix text. For example:
///
/// ```
/// use std::io::Write;
///
/// use logfan::Error;
/// use logfan::format::CustomFormat;
///
/// let format = CustomFormat::new(|record, out| {
///     write!(out, "{} [{}] ", record.level(), record.filename()).map_err(Error::from_io_error)
/// });
/// ```
pub struct CustomFormat {
    f: Box<FormatFunction>,
}

impl fmt::Debug for CustomFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CustomFormat {{ ... }}")
    }
}

impl CustomFormat {
    /// Create a format from the given function.
    pub fn new(
        format: impl Fn(&Record, &mut dyn io::Write) -> Result<(), Error> + Send + Sync + 'static,
    ) -> Self {
        CustomFormat {
            f: Box::new(format),
        }
    }
}

impl Format for CustomFormat {
    fn format(&self, record: &Record, out: &mut dyn io::Write) -> Result<(), Error> {
        (self.f)(record, out)
    }
}
