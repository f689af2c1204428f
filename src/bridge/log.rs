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

use crate::Error;
use crate::FileLogger;
use crate::Level;
use crate::record::Record;

impl log::Log for FileLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        let file = record.file().unwrap_or("???");
        let line = record.line().unwrap_or_default();
        self.log_record(&Record::new(level, *record.args()).with_location(file, line));
    }

    fn flush(&self) {
        FileLogger::flush(self);
    }
}

impl FileLogger {
    /// Install this logger as the global [`log`] logger and return a handle to it.
    ///
    /// `debug!` records go to the trace file, as there is no debug level. Keep the returned handle
    /// to [release](FileLogger::release) the files on shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been installed.
    ///
    /// # Examples
    ///
    /// ```
    /// use logforth_levelfile::FileLogger;
    ///
    /// let dir = tempfile::TempDir::new().unwrap();
    /// let logger = FileLogger::new(dir.path()).unwrap().try_apply().unwrap();
    ///
    /// log::info!("This line is written to info.log.");
    /// logger.release();
    /// ```
    pub fn try_apply(self) -> Result<&'static FileLogger, Error> {
        let logger: &'static FileLogger = Box::leak(Box::new(self));
        if let Err(err) = log::set_logger(logger) {
            logger.release();
            return Err(Error::new("failed to set up global logger").with_source(err));
        }
        log::set_max_level(log::LevelFilter::Trace);
        Ok(logger)
    }

    /// Install this logger as the global [`log`] logger and return a handle to it.
    ///
    /// # Panics
    ///
    /// This function will panic if a global logger has already been installed.
    pub fn apply(self) -> &'static FileLogger {
        self.try_apply()
            .expect("FileLogger::apply should not be called after the global logger initialized")
    }
}
