// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::{ops::Deref,
          path::{Path, PathBuf},
          sync::atomic::{AtomicUsize, Ordering}};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Uniquely named directory under [`std::env::temp_dir`], removed (with its contents)
/// when dropped.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    #[must_use]
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

impl Deref for TempDir {
    type Target = Path;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl Drop for TempDir {
    fn drop(&mut self) { std::fs::remove_dir_all(&self.inner).ok(); }
}

/// # Errors
///
/// If the directory can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let id = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
    let nanos = chrono::Local::now().timestamp_subsec_nanos();
    let name = format!("rgb_cube_{}_{id}_{nanos}", std::process::id());
    let new_temp_dir = std::env::temp_dir().join(name);
    std::fs::create_dir_all(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_removed_on_drop() {
        let dir = try_create_temp_dir().unwrap();
        let path = dir.inner.clone();
        assert!(path.is_dir());
        drop(dir);
        assert!(!path.exists());
    }
}
