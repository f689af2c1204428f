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

use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::FileLoggerBuilder;
use crate::Level;
use crate::Logger;
use crate::Trap;
use crate::append::LevelFile;
use crate::record::Record;

/// A logger that writes each [`Level`] to its own append-only file in a directory.
///
/// | Level   | File          | Line prefix |
/// |---------|---------------|-------------|
/// | Trace   | `trace.log`   | `TRACE: `   |
/// | Info    | `info.log`    | `INFO: `    |
/// | Warning | `warning.log` | `WARN: `    |
/// | Error   | `error.log`   | `ERROR: `   |
///
/// All four files are opened when the logger is built and stay open until [`FileLogger::release`]
/// is called or the logger is dropped. Writes after release are reported to the trap and
/// discarded.
///
/// # Examples
///
/// ```
/// use logforth_levelfile::FileLogger;
/// use logforth_levelfile::Logger;
///
/// let dir = tempfile::TempDir::new().unwrap();
/// let logger = FileLogger::new(dir.path()).unwrap();
/// logger.infoln(&[&"val1 = val2"]);
/// logforth_levelfile::errorf!(logger, "v1={} v2={}", "a", "b");
/// logger.release();
/// ```
pub struct FileLogger {
    dir: PathBuf,
    // indexed by `Level::index`
    files: [LevelFile; 4],
    trap: Box<dyn Trap>,
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogger")
            .field("dir", &self.dir)
            .field("trap", &self.trap)
            .finish_non_exhaustive()
    }
}

impl FileLogger {
    /// Create a logger writing into `dir` with the default layout and trap.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or a log file cannot be opened.
    pub fn new(dir: impl Into<PathBuf>) -> Result<FileLogger, Error> {
        FileLoggerBuilder::new(dir).build()
    }

    /// Create a [`FileLoggerBuilder`] writing into `dir`.
    pub fn builder(dir: impl Into<PathBuf>) -> FileLoggerBuilder {
        FileLoggerBuilder::new(dir)
    }

    pub(crate) fn from_parts(dir: PathBuf, files: [LevelFile; 4], trap: Box<dyn Trap>) -> Self {
        debug_assert!(
            files
                .iter()
                .zip(Level::ALL)
                .all(|(file, level)| file.level() == level)
        );
        Self { dir, files, trap }
    }

    /// The directory holding the log files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The path of the file `level` is written to.
    pub fn path(&self, level: Level) -> &Path {
        self.file(level).path()
    }

    /// Write one line at `level`, returning the error instead of trapping it.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting or writing fails, or if the logger is released.
    #[track_caller]
    pub fn try_log(&self, level: Level, args: fmt::Arguments<'_>) -> Result<(), Error> {
        self.file(level).append(&Record::new(level, args))
    }

    /// Write a prepared record, trapping any error.
    pub fn log_record(&self, record: &Record) {
        if let Err(err) = self.file(record.level()).append(record) {
            self.trap.trap(&err);
        }
    }

    /// Sync all level files to disk, trapping any error.
    pub fn flush(&self) {
        for file in &self.files {
            if let Err(err) = file.flush() {
                self.trap.trap(&err);
            }
        }
    }

    /// Close all level files.
    ///
    /// Calling it more than once does nothing. Lines written afterwards are reported to the trap
    /// and discarded.
    pub fn release(&self) {
        for file in &self.files {
            if let Err(err) = file.close() {
                self.trap.trap(&err);
            }
        }
    }

    /// Whether [`FileLogger::release`] has been called.
    pub fn is_released(&self) -> bool {
        self.files.iter().all(LevelFile::is_closed)
    }

    fn file(&self, level: Level) -> &LevelFile {
        &self.files[level.index()]
    }
}

impl Logger for FileLogger {
    #[track_caller]
    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log_record(&Record::new(level, args));
    }

    fn flush(&self) {
        FileLogger::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_files_indexed_by_level() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let logger = FileLogger::new(temp_dir.path()).unwrap();
        for level in Level::ALL {
            assert_eq!(logger.path(level), temp_dir.path().join(level.file_name()));
        }
        assert_eq!(logger.dir(), temp_dir.path());
        logger.release();
    }

    #[test]
    fn test_try_log_location() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let logger = FileLogger::new(temp_dir.path()).unwrap();

        let line = line!() + 1;
        logger.try_log(Level::Warning, format_args!("careful")).unwrap();
        logger.release();

        let content = fs::read_to_string(logger.path(Level::Warning)).unwrap();
        assert!(content.contains(&format!(" file.rs:{line}: careful")), "{content}");
    }

    #[test]
    fn test_release_is_idempotent() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let logger = FileLogger::new(temp_dir.path()).unwrap();
        assert!(!logger.is_released());

        logger.release();
        logger.release();
        assert!(logger.is_released());

        let err = logger
            .try_log(Level::Info, format_args!("after release"))
            .unwrap_err();
        assert_eq!(err.message(), "log file is released");
    }
}
