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

//! Logfan is a leveled logging facility that fans each log call out to named, independently
//! configured handlers.
//!
//! # Overview
//!
//! A [`Registry`] owns an ordered set of handlers. Each handler has its own destination (a
//! process stream, a file or any writer), minimum [`Level`], quiet flag, [`Format`] and date
//! format. Every registry starts with a [`ROOT`] handler writing colored lines to standard error
//! at [`Level::Info`], so logging works before any configuration.
//!
//! # Examples
//!
//! Log through the default registry:
//!
//! ```
//! logfan::trace!("Trace message {}", 1); // below the root level, not emitted
//! logfan::warn!("Warn message {}", 4);
//! ```
//!
//! Add handlers and configure them by name:
//!
//! ```
//! use logfan::FileMode;
//! use logfan::Level;
//! use logfan::Registry;
//! use logfan::format::PlainFormat;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let registry = Registry::new();
//! registry
//!     .add_file_handler(dir.path().join("program.log"), FileMode::Truncate, Level::Warn, "file1")
//!     .unwrap();
//! registry.set_quiet(logfan::ROOT, true).unwrap();
//! registry.set_date_format("file1", logfan::DATE_TIME_FORMAT).unwrap();
//! registry.set_format("file1", PlainFormat::default()).unwrap();
//!
//! logfan::error!(registry: registry, "Error message {}", 5);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod format;
pub mod trap;

mod error;
mod handler;
mod level;
mod macros;
mod record;
mod registry;

pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::format::Format;
pub use self::handler::DATE_TIME_FORMAT;
pub use self::handler::DEFAULT_DATE_FORMAT;
pub use self::handler::DestinationKind;
pub use self::handler::FileMode;
pub use self::handler::HandlerInfo;
pub use self::handler::RFC3339_DATE_FORMAT;
pub use self::handler::Stream;
pub use self::level::Level;
pub use self::record::Record;
pub use self::record::RecordBuilder;
pub use self::registry::*;
pub use self::trap::Trap;
