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

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::Error;
use crate::Level;
use crate::format::Format;
use crate::format::PrefixStyle;
use crate::record::Record;

/// A format that renders the prefix with ANSI colors.
///
/// Output format:
///
/// ```text
/// 22:44:57 INFO  src/main.rs:12: Info message 3
/// 22:44:57 WARN  src/main.rs:13: Warn message 4
/// ```
///
/// The level tag is colored per level and the source location is gray. Each level color can be
/// customized with [`error_color`](ColorFormat::error_color) and so on. Colors follow the
/// `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` conventions honored by [`colored`], and can be
/// turned off with [`no_color`](ColorFormat::no_color).
///
/// # Examples
///
/// ```
/// use logfan::format::ColorFormat;
/// use logfan::format::PrefixStyle;
///
/// let format = ColorFormat::default().style(PrefixStyle::LocationFirst);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorFormat {
    colors: LevelColor,
    no_color: bool,
    style: PrefixStyle,
}

impl ColorFormat {
    /// Set the arrangement of the prefix fields.
    pub fn style(mut self, style: PrefixStyle) -> Self {
        self.style = style;
        self
    }

    /// Customize the color of the fatal log level. Default to magenta.
    pub fn fatal_color(mut self, color: Color) -> Self {
        self.colors.fatal = color;
        self
    }

    /// Customize the color of the error log level. Default to red.
    pub fn error_color(mut self, color: Color) -> Self {
        self.colors.error = color;
        self
    }

    /// Customize the color of the warn log level. Default to yellow.
    pub fn warn_color(mut self, color: Color) -> Self {
        self.colors.warn = color;
        self
    }

    /// Customize the color of the info log level. Default to green.
    pub fn info_color(mut self, color: Color) -> Self {
        self.colors.info = color;
        self
    }

    /// Customize the color of the debug log level. Default to cyan.
    pub fn debug_color(mut self, color: Color) -> Self {
        self.colors.debug = color;
        self
    }

    /// Customize the color of the trace log level. Default to bright blue.
    pub fn trace_color(mut self, color: Color) -> Self {
        self.colors.trace = color;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    fn format_location(&self, location: String) -> ColoredString {
        if self.no_color {
            ColoredString::from(location)
        } else {
            location.as_str().bright_black()
        }
    }
}

impl Format for ColorFormat {
    fn format(&self, record: &Record, out: &mut dyn io::Write) -> Result<(), Error> {
        let time = record.time();
        let level = self.colors.colorize_level(self.no_color, record.level());
        let file = record.file();
        let line = record.line();

        match self.style {
            PrefixStyle::LevelFirst => {
                let location = self.format_location(format!("{file}:{line}:"));
                write!(out, "{time} {level:<5} {location} ")
            }
            PrefixStyle::LocationFirst => {
                let location = self.format_location(format!("[{file}:{line}]"));
                write!(out, "{time} {location} {level:<5}: ")
            }
        }
        .map_err(Error::from_io_error)
    }
}

/// Colors for different log levels.
#[derive(Debug, Clone)]
struct LevelColor {
    fatal: Color,
    error: Color,
    warn: Color,
    info: Color,
    debug: Color,
    trace: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            fatal: Level::Fatal.color(),
            error: Level::Error.color(),
            warn: Level::Warn.color(),
            info: Level::Info.color(),
            debug: Level::Debug.color(),
            trace: Level::Trace.color(),
        }
    }
}

impl LevelColor {
    fn colorize_level(&self, no_color: bool, level: Level) -> ColoredString {
        if no_color {
            ColoredString::from(level.as_str())
        } else {
            let color = match level {
                Level::Fatal => self.fatal,
                Level::Error => self.error,
                Level::Warn => self.warn,
                Level::Info => self.info,
                Level::Debug => self.debug,
                Level::Trace => self.trace,
            };
            level.as_str().color(color)
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Zoned;

    use super::*;

    fn render(format: &ColorFormat, level: Level) -> String {
        colored::control::set_override(true);
        let now = Zoned::now();
        let record = Record::builder(&now)
            .time("12:00:00")
            .level(level)
            .file("src/main.rs")
            .line(42)
            .payload("ignored")
            .build();
        let mut out = Vec::new();
        format.format(&record, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_level_first() {
        let text = render(&ColorFormat::default(), Level::Warn);
        assert_eq!(
            text,
            "12:00:00 \x1b[33mWARN \x1b[0m \x1b[90msrc/main.rs:42:\x1b[0m "
        );
    }

    #[test]
    fn test_location_first() {
        let format = ColorFormat::default().style(PrefixStyle::LocationFirst);
        let text = render(&format, Level::Error);
        assert_eq!(
            text,
            "12:00:00 \x1b[90m[src/main.rs:42]\x1b[0m \x1b[31mERROR\x1b[0m: "
        );
    }

    #[test]
    fn test_default_colors_match_level_tags() {
        for level in Level::iter() {
            let text = render(&ColorFormat::default(), level);
            assert!(text.contains(level.color_tag()), "{level}: {text:?}");
        }
    }

    #[test]
    fn test_custom_level_color() {
        let format = ColorFormat::default().info_color(Color::BrightWhite);
        let text = render(&format, Level::Info);
        assert!(text.contains("\x1b[97mINFO "), "{text:?}");
        assert!(!text.contains(Level::Info.color_tag()), "{text:?}");
    }

    #[test]
    fn test_no_color() {
        let format = ColorFormat::default().no_color();
        let text = render(&format, Level::Warn);
        insta::assert_snapshot!(text + "body", @"12:00:00 WARN  src/main.rs:42: body");
    }

    #[test]
    fn test_payload_is_not_rendered() {
        let text = render(&ColorFormat::default(), Level::Info);
        assert!(!text.contains("ignored"));
    }
}
