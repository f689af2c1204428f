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

//! The payload handed from a logger to its level files.

use std::fmt;
use std::panic::Location;

use jiff::Timestamp;

use crate::Level;

/// The payload of a log message.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: Timestamp,

    level: Level,
    file: &'a str,
    line: u32,

    // the payload
    args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    /// Create a record observed now, located at the caller of this function.
    #[track_caller]
    pub fn new(level: Level, args: fmt::Arguments<'a>) -> Self {
        let location = Location::caller();
        Self {
            now: Timestamp::now(),
            level,
            file: location.file(),
            line: location.line(),
            args,
        }
    }

    /// Override the source location, for records that come from another logging facade.
    pub fn with_location(mut self, file: &'a str, line: u32) -> Self {
        self.file = file;
        self.line = line;
        self
    }

    /// Override the observed time.
    pub fn with_time(mut self, now: Timestamp) -> Self {
        self.now = now;
        self
    }

    /// The observed time.
    pub fn time(&self) -> Timestamp {
        self.now
    }

    /// The severity of the message.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The source file containing the message.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The line containing the message.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The message body.
    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }
}

/// Displays a list of values separated by a single space.
pub(crate) struct Join<'a>(pub(crate) &'a [&'a dyn fmt::Display]);

impl fmt::Display for Join<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_is_caller() {
        let line = line!() + 1;
        let record = Record::new(Level::Info, format_args!("hello"));
        assert!(record.file().ends_with("record.rs"));
        assert_eq!(record.line(), line);
        assert_eq!(record.level(), Level::Info);
        assert_eq!(record.args().to_string(), "hello");
    }

    #[test]
    fn test_with_location() {
        let record = Record::new(Level::Trace, format_args!("x")).with_location("src/main.rs", 7);
        assert_eq!(record.file(), "src/main.rs");
        assert_eq!(record.line(), 7);
    }

    #[test]
    fn test_join() {
        assert_eq!(Join(&[]).to_string(), "");
        assert_eq!(Join(&[&"val1 = val2"]).to_string(), "val1 = val2");
        assert_eq!(Join(&[&"a", &1_i32, &2.5_f64, &'c']).to_string(), "a 1 2.5 c");
    }
}
