// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Number of rotated log files kept around, older ones are deleted.
pub const MAX_LOG_FILES: usize = 7;

/// Log file that rotates at midnight. `path_str` is used as the directory and file name
/// prefix, eg: `/tmp/rgbc.log` produces `/tmp/rgbc.log.2025-01-31`.
///
/// # Errors
///
/// If `path_str` has no file name, or the file can't be created.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    let file_stem = path.file_name().ok_or_else(|| {
        miette::miette!(format!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        ))
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_stem.to_string_lossy().into_owned())
        .max_log_files(MAX_LOG_FILES)
        .build(parent)
        .into_diagnostic()
}
