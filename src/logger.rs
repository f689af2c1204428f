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

//! The leveled logging interface and its file-backed implementation.

use std::fmt;

use crate::Level;
use crate::record::Join;

mod builder;
mod file;

pub use self::builder::FileLoggerBuilder;
pub use self::file::FileLogger;

/// The capability set of a leveled logger.
///
/// Every level has a "line" method, which joins its arguments with a single space, and a
/// "formatted" method, which takes pre-rendered [`fmt::Arguments`] (see the [`infof!`] family of
/// macros). Each call appends exactly one line to the level's output. The panic variants write to
/// the error level, flush, and then panic with the rendered message; they never return.
///
/// All methods track their caller, so the line is attributed to the code calling the logger.
///
/// [`infof!`]: crate::infof
pub trait Logger: fmt::Debug + Send + Sync {
    /// Write one line at `level`.
    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    /// Make written lines durable.
    fn flush(&self);

    /// Write the arguments joined by spaces to the trace level.
    #[track_caller]
    fn traceln(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Trace, format_args!("{}", Join(args)));
    }

    /// Write formatted arguments to the trace level.
    #[track_caller]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    /// Write the arguments joined by spaces to the info level.
    #[track_caller]
    fn infoln(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Info, format_args!("{}", Join(args)));
    }

    /// Write formatted arguments to the info level.
    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Write the arguments joined by spaces to the warning level.
    #[track_caller]
    fn warningln(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Warning, format_args!("{}", Join(args)));
    }

    /// Write formatted arguments to the warning level.
    #[track_caller]
    fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warning, args);
    }

    /// Write the arguments joined by spaces to the error level.
    #[track_caller]
    fn errorln(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Error, format_args!("{}", Join(args)));
    }

    /// Write formatted arguments to the error level.
    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Write the arguments joined by spaces to the error level, then panic with them.
    #[track_caller]
    fn panicln(&self, args: &[&dyn fmt::Display]) -> ! {
        let message = Join(args).to_string();
        self.log(Level::Error, format_args!("{message}"));
        self.flush();
        panic!("{message}");
    }

    /// Write formatted arguments to the error level, then panic with them.
    #[track_caller]
    fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.log(Level::Error, format_args!("{message}"));
        self.flush();
        panic!("{message}");
    }
}

/// Write the arguments joined by spaces to the trace level.
///
/// ```
/// # let dir = tempfile::TempDir::new().unwrap();
/// # let logger = logforth_levelfile::FileLogger::new(dir.path()).unwrap();
/// logforth_levelfile::traceln!(logger, "entering", 42);
/// ```
#[macro_export]
macro_rules! traceln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            ($logger).traceln(&[$(&$arg as &dyn ::std::fmt::Display),*])
        }
    };
}

/// Write formatted arguments to the trace level.
#[macro_export]
macro_rules! tracef {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::Logger as _;
            ($logger).tracef(::std::format_args!($($arg)+))
        }
    };
}

/// Write the arguments joined by spaces to the info level.
#[macro_export]
macro_rules! infoln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            ($logger).infoln(&[$(&$arg as &dyn ::std::fmt::Display),*])
        }
    };
}

/// Write formatted arguments to the info level.
///
/// ```
/// # let dir = tempfile::TempDir::new().unwrap();
/// # let logger = logforth_levelfile::FileLogger::new(dir.path()).unwrap();
/// logforth_levelfile::infof!(logger, "v1={} v2={}", "a", "b");
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::Logger as _;
            ($logger).infof(::std::format_args!($($arg)+))
        }
    };
}

/// Write the arguments joined by spaces to the warning level.
#[macro_export]
macro_rules! warningln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            ($logger).warningln(&[$(&$arg as &dyn ::std::fmt::Display),*])
        }
    };
}

/// Write formatted arguments to the warning level.
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::Logger as _;
            ($logger).warningf(::std::format_args!($($arg)+))
        }
    };
}

/// Write the arguments joined by spaces to the error level.
#[macro_export]
macro_rules! errorln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            ($logger).errorln(&[$(&$arg as &dyn ::std::fmt::Display),*])
        }
    };
}

/// Write formatted arguments to the error level.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::Logger as _;
            ($logger).errorf(::std::format_args!($($arg)+))
        }
    };
}

/// Write the arguments joined by spaces to the error level, then panic.
#[macro_export]
macro_rules! panicln {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            ($logger).panicln(&[$(&$arg as &dyn ::std::fmt::Display),*])
        }
    };
}

/// Write formatted arguments to the error level, then panic.
#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {
        {
            use $crate::Logger as _;
            ($logger).panicf(::std::format_args!($($arg)+))
        }
    };
}
