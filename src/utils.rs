use std::path::{Path, absolute};

/// Absolute form of `path` for display, falling back to the path as given.
pub fn absolute_display(path: &Path) -> String {
    match absolute(path) {
        Ok(resolved) => resolved.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
