//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural
//! principles:
//! - The engine core stays free of rendering dependencies
//! - No blocking sleeps inside the engine's tick loop
//!
//! These tests are designed to catch violations early in the development
//! cycle.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// All Rust source files under the given workspace-relative directory
pub fn source_files(relative: &str) -> Vec<PathBuf> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative);
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.path().to_path_buf())
        .collect()
}
