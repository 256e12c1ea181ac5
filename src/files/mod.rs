//! Document-root filesystem access
//!
//! Resolves request paths against the document root and classifies what
//! they point at. All lookups go through [`resolve`] first, which enforces
//! the containment invariant.

pub mod listing;
pub mod resolve;

pub use resolve::{ResolveError, resolve};

use std::io;
use std::path::PathBuf;

/// What a resolved path points at on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Directory(PathBuf),
    File(PathBuf),
}

/// Classifies a canonical path as a servable directory or file.
///
/// The path came out of [`resolve`], so it existed a moment ago; if it
/// vanished in between, the metadata call reports `NotFound` and the caller
/// answers 404.
pub async fn classify(path: PathBuf) -> io::Result<Target> {
    let meta = tokio::fs::metadata(&path).await?;

    if meta.is_dir() {
        Ok(Target::Directory(path))
    } else {
        Ok(Target::File(path))
    }
}
