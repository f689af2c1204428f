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

//! A leveled logger that writes each severity to its own append-only file.
//!
//! # Overview
//!
//! A [`FileLogger`] is bound to a directory. Building it creates the directory and opens one file
//! per [`Level`]: `trace.log`, `info.log`, `warning.log` and `error.log`. Every line starts with
//! the level's tag, followed by the local date and time and the caller's source location:
//!
//! ```text
//! INFO: 2024/08/11 22:44:57 main.rs:12: val1 = val2
//! ```
//!
//! Files are opened in append mode and never truncated. Write errors are handed to a [`Trap`]
//! rather than returned, and the panic variants write to `error.log` before panicking.
//!
//! # Examples
//!
//! ```
//! use logforth_levelfile::FileLogger;
//! use logforth_levelfile::Logger;
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let logger = FileLogger::new(dir.path().join("logs")).unwrap();
//!
//! logger.infoln(&[&"val1", &"=", &"val2"]);
//! logforth_levelfile::errorf!(logger, "v1={} v2={}", "a", "b");
//! logforth_levelfile::warningln!(logger, "disk usage", 93_u32, "%");
//!
//! logger.release();
//! ```
//!
//! The logger can also serve the [`log`] facade, see [`FileLogger::try_apply`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod layout;
pub mod record;
pub mod trap;

mod bridge;
mod error;
mod level;
mod logger;

pub use self::error::Error;
pub use self::layout::Layout;
pub use self::level::Level;
pub use self::logger::FileLogger;
pub use self::logger::FileLoggerBuilder;
pub use self::logger::Logger;
pub use self::trap::Trap;
