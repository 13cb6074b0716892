use std::io;
use std::path::Path;

/// Creates the parent directory of `out` if it is missing.
pub fn ensure_parent_dir(out: &Path) -> io::Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
