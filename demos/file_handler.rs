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

use logfan::FileMode;
use logfan::Level;
use logfan::ROOT;
use logfan::Stream;

fn main() {
    logfan::bridge::setup_log_crate().unwrap();

    let file1 = "file1";
    logfan::add_file_handler("program.log", FileMode::Truncate, Level::Warn, file1).unwrap();
    logfan::add_stream_handler(Stream::Stdout, Level::Debug, "console").unwrap();
    logfan::set_quiet(ROOT, true).unwrap();

    logfan::debug!("Debug message {}", 2);
    logfan::warn!("Warn message {}", 4);
    log::error!("Error message {}", 5);

    logfan::flush().unwrap();
}
