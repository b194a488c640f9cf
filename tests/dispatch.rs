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
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use logfan::Error;
use logfan::Level;
use logfan::ROOT;
use logfan::Registry;
use logfan::format::ColorFormat;
use logfan::format::CustomFormat;
use logfan::format::PlainFormat;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn registry_with(handlers: &[(&str, Level)]) -> (Registry, Vec<Buffer>) {
    let registry = Registry::new();
    registry.set_quiet(ROOT, true).unwrap();
    let buffers = handlers
        .iter()
        .map(|(name, level)| {
            let buffer = Buffer::default();
            registry
                .add_writer_handler(buffer.clone(), *level, *name)
                .unwrap();
            buffer
        })
        .collect();
    (registry, buffers)
}

#[test]
fn test_min_level_filters_lower_levels() {
    for (i, min) in Level::iter().enumerate() {
        let (registry, buffers) = registry_with(&[("h", min)]);
        for level in Level::iter() {
            logfan::log!(registry: registry, level, "at {}", level);
        }

        let lines = buffers[0].lines();
        assert_eq!(lines.len(), 6 - i, "min level {min}: {lines:?}");
        for (line, level) in lines.iter().zip(Level::iter().skip(i)) {
            assert!(line.ends_with(&format!("at {level}")), "{line}");
        }
    }
}

#[test]
fn test_quiet_only_silences_its_own_handler() {
    let (registry, buffers) = registry_with(&[("loud", Level::Trace), ("quiet", Level::Trace)]);
    registry.set_quiet("quiet", true).unwrap();

    logfan::trace!(registry: registry, "Trace message {}", 1);
    logfan::fatal!(registry: registry, "Fatal message {}", 6);

    assert_eq!(buffers[0].lines().len(), 2);
    assert!(buffers[1].lines().is_empty());

    registry.set_quiet("quiet", false).unwrap();
    logfan::fatal!(registry: registry, "Fatal message {}", 6);
    assert_eq!(buffers[1].lines().len(), 1);
}

#[test]
fn test_formats_differ_only_in_prefix() {
    let (registry, buffers) = registry_with(&[("plain", Level::Trace), ("custom", Level::Trace)]);
    registry
        .set_format(
            "custom",
            CustomFormat::new(|record, out| {
                write!(out, "[{}] ", record.level()).map_err(Error::from_io_error)
            }),
        )
        .unwrap();

    logfan::warn!(registry: registry, "Warn message {}", 4);

    let plain = &buffers[0].lines()[0];
    let custom = &buffers[1].lines()[0];
    assert_ne!(plain, custom);
    assert_eq!(custom, "[WARN] Warn message 4");
    assert!(plain.ends_with(": Warn message 4"), "{plain}");
}

#[test]
fn test_color_format_embeds_level_tag() {
    colored::control::set_override(true);
    let (registry, buffers) = registry_with(&[("color", Level::Trace)]);
    registry.set_format("color", ColorFormat::default()).unwrap();
    registry.set_date_format("color", "T").unwrap();

    logfan::warn!(registry: registry, "Warn message {}", 4);

    let line = &buffers[0].lines()[0];
    assert!(line.starts_with("T \x1b[33mWARN "), "{line:?}");
    assert!(line.ends_with("Warn message 4"), "{line:?}");
}

#[test]
fn test_date_format_is_per_handler() {
    let (registry, buffers) = registry_with(&[("a", Level::Trace), ("b", Level::Trace)]);
    registry.set_date_format("a", "A-%Y").unwrap();
    registry.set_date_format("b", "B").unwrap();
    registry.set_format("b", PlainFormat::default()).unwrap();

    logfan::info!(registry: registry, "Info message {}", 3);

    assert!(buffers[0].lines()[0].starts_with("A-2"));
    assert!(buffers[1].lines()[0].starts_with("B INFO "));
}

#[test]
fn test_handlers_are_visited_in_registration_order() {
    let shared = Buffer::default();
    let registry = Registry::new();
    registry.set_quiet(ROOT, true).unwrap();
    for name in ["first", "second", "third"] {
        registry
            .add_writer_handler(shared.clone(), Level::Trace, name)
            .unwrap();
        registry
            .set_format(
                name,
                CustomFormat::new(move |_, out| {
                    write!(out, "{name}: ").map_err(Error::from_io_error)
                }),
            )
            .unwrap();
    }

    logfan::info!(registry: registry, "hi");

    assert_eq!(shared.lines(), vec!["first: hi", "second: hi", "third: hi"]);
}

#[test]
fn test_level_change_applies_to_next_call() {
    let (registry, buffers) = registry_with(&[("h", Level::Info)]);
    logfan::debug!(registry: registry, "dropped");
    registry.set_level("h", Level::Debug).unwrap();
    logfan::debug!(registry: registry, "kept");

    let lines = buffers[0].lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("kept"));
    assert_eq!(registry.lookup("h").unwrap().level(), Level::Debug);
}

#[test]
fn test_source_location_is_captured() {
    let (registry, buffers) = registry_with(&[("h", Level::Trace)]);
    let line = line!() + 1;
    logfan::error!(registry: registry, "Error message {}", 5);

    let text = &buffers[0].lines()[0];
    assert!(
        text.contains(&format!("{}:{line}: ", file!())),
        "{text}"
    );
}
