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

use std::fmt::Write;
use std::path::Path;

use jiff::tz::TimeZone;

use crate::Error;
use crate::layout::Layout;
use crate::record::Record;

/// A layout that formats log record as text.
///
/// Output format:
///
/// ```text
/// TRACE: 2024/08/11 22:44:57 main.rs:51: Hello trace!
/// INFO: 2024/08/11 22:44:57 main.rs:52: Hello info!
/// WARN: 2024/08/11 22:44:57 main.rs:53: Hello warn!
/// ERROR: 2024/08/11 22:44:57 main.rs:54: Hello error!
/// ```
///
/// The timestamp is rendered in the system timezone unless [`TextLayout::timezone`] is set.
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
/// use logforth_levelfile::layout::TextLayout;
///
/// let layout = TextLayout::default().timezone(TimeZone::UTC);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    tz: Option<TimeZone>,
    full_file_path: bool,
}

impl TextLayout {
    /// Set the timezone for timestamps.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Print the source file as recorded instead of its base name.
    pub fn full_file_path(mut self) -> Self {
        self.full_file_path = true;
        self
    }

    fn file<'a>(&self, record: &Record<'a>) -> &'a str {
        let file = record.file();
        if self.full_file_path {
            return file;
        }

        Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file)
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let tz = self.tz.clone().unwrap_or_else(TimeZone::system);
        let time = record.time().to_zoned(tz);

        let prefix = record.level().prefix();
        let time = time.strftime("%Y/%m/%d %H:%M:%S");
        let file = self.file(record);
        let line = record.line();
        let message = record.args();

        let mut text = String::new();
        write!(&mut text, "{prefix}{time} {file}:{line}: {message}")
            .map_err(|err| Error::new("failed to format log record").with_source(err))?;
        Ok(text.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use jiff::tz::TimeZone;

    use super::*;
    use crate::Level;

    fn render(layout: &TextLayout, record: &Record) -> String {
        String::from_utf8(layout.format(record).unwrap()).unwrap()
    }

    #[test]
    fn test_format_line() {
        let now: Timestamp = "2024-08-11T14:44:57.172105Z".parse().unwrap();
        let record = Record::new(Level::Info, format_args!("val1 = val2"))
            .with_location("src/app/main.rs", 42)
            .with_time(now);

        let layout = TextLayout::default().timezone(TimeZone::UTC);
        assert_eq!(
            render(&layout, &record),
            "INFO: 2024/08/11 14:44:57 main.rs:42: val1 = val2"
        );

        let layout = layout.full_file_path();
        assert_eq!(
            render(&layout, &record),
            "INFO: 2024/08/11 14:44:57 src/app/main.rs:42: val1 = val2"
        );
    }

    #[test]
    fn test_prefix_per_level() {
        let now: Timestamp = "2024-01-02T03:04:05Z".parse().unwrap();
        let layout = TextLayout::default().timezone(TimeZone::fixed(jiff::tz::offset(8)));

        for level in Level::ALL {
            let record = Record::new(level, format_args!("msg"))
                .with_location("lib.rs", 1)
                .with_time(now);
            let expected = format!("{}2024/01/02 11:04:05 lib.rs:1: msg", level.prefix());
            assert_eq!(render(&layout, &record), expected);
        }
    }
}
