use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ResolveError {
    /// The request path does not exist under the document root.
    NotFound,
    /// The canonical path escapes the document root.
    Outside,
    /// Any other filesystem failure during resolution.
    Io(io::Error),
}

/// Resolves a request path against the document root.
///
/// Leading slashes are stripped so the join stays anchored at the root, then
/// the joined path is canonicalized. The canonical result must be the root
/// itself or a descendant of it; `..` segments and symlinks that lead
/// outside fail with [`ResolveError::Outside`] and are never served.
pub async fn resolve(root: &Path, request_path: &str) -> Result<PathBuf, ResolveError> {
    let relative = request_path.trim_start_matches('/');
    let joined = root.join(relative);

    let canonical_root = tokio::fs::canonicalize(root)
        .await
        .map_err(ResolveError::Io)?;

    let canonical = match tokio::fs::canonicalize(&joined).await {
        Ok(path) => path,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ResolveError::NotFound),
        Err(e) => return Err(ResolveError::Io(e)),
    };

    if !canonical.starts_with(&canonical_root) {
        return Err(ResolveError::Outside);
    }

    Ok(canonical)
}
