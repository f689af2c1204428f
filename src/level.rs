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

//! Severity levels and their backing files.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A severity level. Each level is written to its own file.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Level {
    /// Fine-grained diagnostic output, written to `trace.log`.
    Trace = 0,
    /// Informational output, written to `info.log`.
    Info = 1,
    /// Potential problems, written to `warning.log`.
    Warning = 2,
    /// Failures, written to `error.log`. Also the target of the panic variants.
    Error = 3,
}

impl Level {
    /// All levels, in the order their files are opened.
    pub const ALL: [Level; 4] = [Level::Trace, Level::Info, Level::Warning, Level::Error];

    /// The name of the file this level is written to.
    pub const fn file_name(self) -> &'static str {
        match self {
            Level::Trace => "trace.log",
            Level::Info => "info.log",
            Level::Warning => "warning.log",
            Level::Error => "error.log",
        }
    }

    /// The tag every line of this level starts with.
    pub const fn prefix(self) -> &'static str {
        match self {
            Level::Trace => "TRACE: ",
            Level::Info => "INFO: ",
            Level::Warning => "WARN: ",
            Level::Error => "ERROR: ",
        }
    }

    /// Return the string representation of the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, Level); 5] = [
            ("trace", Level::Trace),
            ("info", Level::Info),
            ("warn", Level::Warning),
            ("warning", Level::Warning),
            ("error", Level::Error),
        ];

        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, level)| *level)
            .ok_or_else(|| Error::new("malformed level").with_context("input", s))
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Trace,
        }
    }
}
