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

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::Error;
use crate::FileLogger;
use crate::Layout;
use crate::Level;
use crate::Trap;
use crate::append::LevelFile;
use crate::layout::TextLayout;
use crate::trap::DefaultTrap;

/// A builder to configure and create a [`FileLogger`].
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
/// use logforth_levelfile::FileLogger;
/// use logforth_levelfile::layout::TextLayout;
///
/// let dir = tempfile::TempDir::new().unwrap();
/// let logger = FileLogger::builder(dir.path().join("logs"))
///     .layout(TextLayout::default().timezone(TimeZone::UTC))
///     .build()
///     .unwrap();
/// logger.release();
/// ```
#[must_use = "call `build` to open the log files"]
#[derive(Debug)]
pub struct FileLoggerBuilder {
    dir: PathBuf,
    layout: Box<dyn Layout>,
    trap: Box<dyn Trap>,
}

impl FileLoggerBuilder {
    /// Create a new builder writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            layout: Box::new(TextLayout::default()),
            trap: Box::new(DefaultTrap::default()),
        }
    }

    /// Sets the layout shared by all level files.
    ///
    /// Default to [`TextLayout`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Sets the trap that receives write errors.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Create the directory and open one file per level.
    ///
    /// Missing parent directories are created; existing files are appended to. If any file fails
    /// to open, the files opened before it are closed and no logger is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or a log file cannot be opened.
    pub fn build(self) -> Result<FileLogger, Error> {
        let FileLoggerBuilder { dir, layout, trap } = self;

        fs::create_dir_all(&dir).map_err(|err| {
            Error::new("failed to create log directory")
                .with_context("path", dir.display())
                .with_source(err)
        })?;

        let layout: Arc<dyn Layout> = Arc::from(layout);
        let open = |level| LevelFile::open(&dir, level, layout.clone());

        // each `?` drops the files opened so far, which closes them
        let [trace, info, warning, error] = Level::ALL;
        let files = [open(trace)?, open(info)?, open(warning)?, open(error)?];

        Ok(FileLogger::from_parts(dir, files, trap))
    }
}
