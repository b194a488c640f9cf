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

use std::collections::HashSet;
use std::fs;
use std::sync::Arc;
use std::thread;

use logfan::FileMode;
use logfan::Level;
use logfan::ROOT;
use logfan::Registry;
use rand::Rng;
use rand::distr::Alphanumeric;
use tempfile::TempDir;

const THREADS: usize = 8;
const LINES_PER_THREAD: usize = 200;

#[test]
fn test_concurrent_lines_are_never_torn() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("concurrent.log");

    let registry = Arc::new(Registry::new());
    registry.set_quiet(ROOT, true).unwrap();
    registry
        .add_file_handler(&path, FileMode::Truncate, Level::Trace, "file")
        .unwrap();
    registry.set_date_format("file", "").unwrap();

    let handles = (0..THREADS)
        .map(|t| {
            let registry = registry.clone();
            thread::spawn(move || {
                let mut rng = rand::rng();
                let mut expected = Vec::with_capacity(LINES_PER_THREAD);
                for i in 0..LINES_PER_THREAD {
                    let len = rng.random_range(1..512);
                    let filler = (&mut rng)
                        .sample_iter(&Alphanumeric)
                        .take(len)
                        .map(char::from)
                        .collect::<String>();
                    let message = format!("thread={t} seq={i} {filler}");
                    logfan::info!(registry: registry, "{message}");
                    expected.push(message);
                }
                expected
            })
        })
        .collect::<Vec<_>>();

    let mut expected = HashSet::new();
    for handle in handles {
        expected.extend(handle.join().unwrap());
    }

    let content = fs::read_to_string(&path).unwrap();
    let mut seen = HashSet::new();
    for line in content.lines() {
        let (prefix, message) = line
            .split_once(": thread=")
            .unwrap_or_else(|| panic!("torn line: {line:?}"));
        assert!(prefix.starts_with(" INFO "), "torn line: {line:?}");
        let message = format!("thread={message}");
        assert!(expected.contains(&message), "torn line: {line:?}");
        assert!(seen.insert(message), "duplicated line: {line:?}");
    }
    assert_eq!(seen.len(), THREADS * LINES_PER_THREAD);
}

#[test]
fn test_reconfiguration_while_logging() {
    let registry = Arc::new(Registry::new());
    registry.set_quiet(ROOT, true).unwrap();
    registry
        .add_writer_handler(std::io::sink(), Level::Trace, "sink")
        .unwrap();

    let logger = {
        let registry = registry.clone();
        thread::spawn(move || {
            for i in 0..1000 {
                logfan::debug!(registry: registry, "message {i}");
            }
        })
    };

    for i in 0..1000 {
        let level = Level::from_index(i % 6).unwrap();
        registry.set_level("sink", level).unwrap();
        registry.set_quiet("sink", i % 2 == 0).unwrap();
        let info = registry.lookup("sink").unwrap();
        assert_eq!(info.level(), level);
        assert_eq!(info.quiet(), i % 2 == 0);
    }

    logger.join().unwrap();
}
