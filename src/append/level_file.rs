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

use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Error;
use crate::Layout;
use crate::Level;
use crate::record::Record;

/// An append-only file that receives the lines of one [`Level`].
///
/// Each line is formatted by the bound layout first and then written with a single
/// `write_all` under a per-file lock, so lines from concurrent callers never interleave.
#[derive(Debug)]
pub struct LevelFile {
    level: Level,
    path: PathBuf,
    layout: Arc<dyn Layout>,
    // `None` once released
    file: Mutex<Option<File>>,
}

impl LevelFile {
    /// Open (or create) the file of `level` inside `dir` in append mode.
    ///
    /// Existing content is never truncated. The directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or created.
    pub fn open(dir: &Path, level: Level, layout: Arc<dyn Layout>) -> Result<Self, Error> {
        let path = dir.join(level.file_name());
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|err| {
                Error::new("failed to open log file")
                    .with_context("path", path.display())
                    .with_source(err)
            })?;

        Ok(Self {
            level,
            path,
            layout,
            file: Mutex::new(Some(file)),
        })
    }

    /// The level whose lines go to this file.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The path of this file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether [`LevelFile::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    /// Format `record` and append it as one line.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting fails, the write fails, or the file is closed.
    pub fn append(&self, record: &Record) -> Result<(), Error> {
        let mut bytes = self.layout.format(record)?;
        if bytes.last() != Some(&b'\n') {
            bytes.push(b'\n');
        }

        let mut file = self.lock();
        let file = file.as_mut().ok_or_else(|| self.closed_error())?;
        file.write_all(&bytes).map_err(|err| {
            Error::new("failed to write log line")
                .with_context("path", self.path.display())
                .with_source(err)
        })
    }

    /// Sync written lines to disk. Does nothing once the file is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sync fails.
    pub fn flush(&self) -> Result<(), Error> {
        match self.lock().as_mut() {
            None => Ok(()),
            Some(file) => file.sync_data().map_err(|err| {
                Error::new("failed to sync log file")
                    .with_context("path", self.path.display())
                    .with_source(err)
            }),
        }
    }

    /// Close the file. Later appends fail; closing twice does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if pending data cannot be flushed before the handle is dropped.
    pub fn close(&self) -> Result<(), Error> {
        let Some(mut file) = self.lock().take() else {
            return Ok(());
        };

        file.flush().map_err(|err| {
            Error::new("failed to close log file")
                .with_context("path", self.path.display())
                .with_source(err)
        })
    }

    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        // a panic never happens while the lock is held, but recover anyway
        self.file.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn closed_error(&self) -> Error {
        Error::new("log file is released")
            .with_context("level", self.level)
            .with_context("path", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use rand::Rng;
    use rand::distr::Alphanumeric;
    use tempfile::TempDir;

    use super::*;
    use crate::layout::TextLayout;

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect()
    }

    fn open(dir: &Path, level: Level) -> LevelFile {
        LevelFile::open(dir, level, Arc::new(TextLayout::default())).unwrap()
    }

    #[test]
    fn test_append_line() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let file = open(temp_dir.path(), Level::Warning);
        assert_eq!(file.path(), temp_dir.path().join("warning.log"));

        let rand_str = generate_random_string();
        file.append(&Record::new(Level::Warning, format_args!("{rand_str}")))
            .unwrap();
        file.flush().unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("WARN: "), "{content}");
        assert!(content.ends_with(&format!(": {rand_str}\n")), "{content}");
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_message_with_newline_is_not_doubled() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let file = open(temp_dir.path(), Level::Info);
        file.append(&Record::new(Level::Info, format_args!("done\n")))
            .unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.ends_with(": done\n"), "{content}");
        assert!(!content.ends_with("\n\n"));
    }

    #[test]
    fn test_reopen_appends() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("trace.log");
        fs::write(&path, "previous line\n").unwrap();

        let file = open(temp_dir.path(), Level::Trace);
        file.append(&Record::new(Level::Trace, format_args!("next line")))
            .unwrap();
        file.close().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "previous line");
        assert!(lines[1].ends_with("next line"));
    }

    #[test]
    fn test_append_after_close() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let file = open(temp_dir.path(), Level::Error);
        assert!(!file.is_closed());

        file.close().unwrap();
        assert!(file.is_closed());
        file.close().unwrap();
        file.flush().unwrap();

        let err = file
            .append(&Record::new(Level::Error, format_args!("lost")))
            .unwrap_err();
        assert_eq!(err.message(), "log file is released");
        assert_eq!(err.context("level"), Some("ERROR"));
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "");
    }

    #[test]
    fn test_open_missing_directory() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let missing = temp_dir.path().join("missing");
        let err = LevelFile::open(&missing, Level::Info, Arc::new(TextLayout::default()))
            .unwrap_err();
        assert_eq!(err.message(), "failed to open log file");
        assert!(err.context("path").unwrap().ends_with("info.log"));
    }
}
