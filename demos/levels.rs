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

use logfan::Error;
use logfan::Level;
use logfan::ROOT;
use logfan::format::ColorFormat;
use logfan::format::CustomFormat;
use logfan::format::PrefixStyle;

fn main() {
    logfan::set_level(ROOT, Level::Trace).unwrap();
    logfan::set_date_format(ROOT, logfan::DATE_TIME_FORMAT).unwrap();

    logfan::trace!("Trace message {}", 1);
    logfan::debug!("Debug message {}", 2);
    logfan::info!("Info message {}", 3);

    logfan::set_format(ROOT, ColorFormat::default().style(PrefixStyle::LocationFirst)).unwrap();
    logfan::warn!("Warn message {}", 4);

    logfan::set_format(
        ROOT,
        CustomFormat::new(|record, out| {
            write!(
                out,
                "{}\x1b[0m \x1b[90m[{}:{}] {}{:<5}:\x1b[0m ",
                record.time(),
                record.filename(),
                record.line(),
                record.level().color_tag(),
                record.level(),
            )
            .map_err(Error::from_io_error)
        }),
    )
    .unwrap();
    logfan::error!("Error message {}", 5);
    logfan::fatal!("Fatal message {}", 6);
}
