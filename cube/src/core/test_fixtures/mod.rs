// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod stdout_mock;
pub mod temp_dir;

// Re-export.
pub use stdout_mock::*;
pub use temp_dir::*;
