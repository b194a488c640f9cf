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

//! The stream destinations are process-wide, so each test re-runs this binary as a child process
//! that logs through the default registry, and inspects what the child wrote.

use std::env;
use std::process::Command;
use std::process::Output;

use logfan::Level;
use logfan::ROOT;
use logfan::Stream;

const CHILD_ENV: &str = "LOGFAN_STREAM_OUTPUT_CHILD";

fn run_child(test: &str) -> Output {
    let exe = env::current_exe().expect("failed to locate the test binary");
    Command::new(exe)
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test)
        .env("CLICOLOR_FORCE", "1")
        .env_remove("NO_COLOR")
        .env_remove(logfan::DEFAULT_LEVEL_ENV)
        .output()
        .expect("failed to run the test binary")
}

fn is_child(test: &str) -> bool {
    env::var(CHILD_ENV).is_ok_and(|value| value == test)
}

fn message_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .filter(|line| line.contains(" message "))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_root_writes_colored_lines_to_stderr() {
    const TEST: &str = "test_root_writes_colored_lines_to_stderr";
    if is_child(TEST) {
        logfan::trace!("Trace message {}", 1);
        logfan::warn!("Warn message {}", 4);
        return;
    }

    let output = run_child(TEST);
    assert!(output.status.success(), "{output:?}");

    let lines = message_lines(&output.stderr);
    assert_eq!(lines.len(), 1, "{lines:?}");
    let line = &lines[0];
    assert!(line.contains("\x1b[33mWARN \x1b[0m"), "{line:?}");
    assert!(line.contains("tests/stream_output.rs:"), "{line:?}");
    assert!(line.ends_with(" Warn message 4"), "{line:?}");
    assert!(message_lines(&output.stdout).is_empty(), "{output:?}");
}

#[test]
fn test_stdout_handler_writes_to_stdout() {
    const TEST: &str = "test_stdout_handler_writes_to_stdout";
    if is_child(TEST) {
        logfan::add_stream_handler(Stream::Stdout, Level::Debug, "console").unwrap();
        logfan::set_quiet(ROOT, true).unwrap();
        logfan::trace!("Trace message {}", 1);
        logfan::debug!("Debug message {}", 2);
        return;
    }

    let output = run_child(TEST);
    assert!(output.status.success(), "{output:?}");

    let lines = message_lines(&output.stdout);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("\x1b[36mDEBUG\x1b[0m"), "{:?}", lines[0]);
    assert!(lines[0].ends_with(" Debug message 2"), "{:?}", lines[0]);
    assert!(message_lines(&output.stderr).is_empty(), "{output:?}");
}
