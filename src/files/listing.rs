use std::io;
use std::path::Path;

/// Renders the plain-text listing for a directory.
///
/// Format: a `listing {path}` line, a `total {count}` line, then one line
/// per entry in enumeration order. Subdirectories get a `  <DIR>` suffix.
/// An empty directory lists as `total 0` with zero entry lines.
pub async fn render(dir: &Path) -> io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let is_dir = entry.file_type().await?.is_dir();
        entries.push((entry.file_name(), is_dir));
    }

    let mut buffer = String::new();
    buffer.push_str(&format!("listing {}\n", dir.display()));
    buffer.push_str(&format!("total {}\n", entries.len()));

    for (name, is_dir) in entries {
        let name = name.to_string_lossy();
        if is_dir {
            buffer.push_str(&format!("{}  <DIR>\n", name));
        } else {
            buffer.push_str(&format!("{}\n", name));
        }
    }

    Ok(buffer)
}
