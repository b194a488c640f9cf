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

//! Logging macros.

/// Log a message at the given level, capturing the source file and line.
///
/// Without a `registry:` argument the message goes to the [default
/// registry](crate::default_registry).
///
/// # Examples
///
/// ```
/// use logfan::Level;
/// use logfan::Registry;
///
/// logfan::log!(Level::Info, "Info message {}", 3);
///
/// let registry = Registry::new();
/// logfan::log!(registry: registry, Level::Warn, "Warn message {}", 4);
/// ```
#[macro_export]
macro_rules! log {
    (registry: $registry:expr, $level:expr, $($arg:tt)+) => {
        $registry.log($level, ::std::file!(), ::std::line!(), ::std::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log!(registry: $crate::default_registry(), $level, $($arg)+)
    };
}

/// Log a message at the trace level.
///
/// # Examples
///
/// ```
/// logfan::trace!("Trace message {}", 1);
/// ```
#[macro_export]
macro_rules! trace {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::log!(registry: $registry, $crate::Level::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Trace, $($arg)+)
    };
}

/// Log a message at the debug level.
///
/// # Examples
///
/// ```
/// logfan::debug!("Debug message {}", 2);
/// ```
#[macro_export]
macro_rules! debug {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::log!(registry: $registry, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Log a message at the info level.
///
/// # Examples
///
/// ```
/// logfan::info!("Info message {}", 3);
/// ```
#[macro_export]
macro_rules! info {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::log!(registry: $registry, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Log a message at the warn level.
///
/// # Examples
///
/// ```
/// logfan::warn!("Warn message {}", 4);
/// ```
#[macro_export]
macro_rules! warn {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::log!(registry: $registry, $crate::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// Log a message at the error level.
///
/// # Examples
///
/// ```
/// logfan::error!("Error message {}", 5);
/// ```
#[macro_export]
macro_rules! error {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::log!(registry: $registry, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Log a message at the fatal level.
///
/// This only logs; terminating the process is left to the caller.
///
/// # Examples
///
/// ```
/// logfan::fatal!("Fatal message {}", 6);
/// ```
#[macro_export]
macro_rules! fatal {
    (registry: $registry:expr, $($arg:tt)+) => {
        $crate::log!(registry: $registry, $crate::Level::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Fatal, $($arg)+)
    };
}
