//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand a leading `~` and normalize a directory argument.
///
/// An empty argument means the current directory.
pub fn expand_dir(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return normalize_path(Path::new("."));
    }
    let expanded = shellexpand::tilde(&raw).into_owned();
    normalize_path(Path::new(&expanded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/path/file.txt"));
    }

    #[test]
    fn test_expand_dir_empty_is_cwd() {
        let cwd = normalize_path(Path::new("."));
        assert_eq!(expand_dir(Path::new("")), cwd);
    }

    #[test]
    fn test_expand_dir_tilde() {
        let expanded = expand_dir(Path::new("~/sdwan-data"));
        assert!(expanded.is_absolute());
        assert!(!expanded.to_string_lossy().contains('~'));
    }
}
