//! JSON file discovery for backup directories.

use crate::{debug, log};
use anyhow::{Result, bail};
use jwalk::WalkDir;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// `*.json` files directly inside `dir`, sorted by path.
pub fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("directory not found: {}", dir.display());
    }

    let mut files: Vec<_> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| {
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            if !is_json {
                debug!("scan"; "skipping {}: not a .json file", path.display());
            }
            is_json
        })
        .collect();
    files.sort();

    Ok(files)
}

/// Backup file type: the file name up to its first `.`.
pub fn file_type(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()?.split('.').next()
}

/// Read and decode a JSON file, warning and returning `None` on failure.
pub fn load_json(path: &Path) -> Option<Value> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            log!("warning"; "unable to read {}: {}", path.display(), err);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(err) => {
            log!("warning"; "unable to decode JSON in {}: {}", path.display(), err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_files_sorted_and_flat() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "[]").unwrap();
        fs::write(dir.path().join("a.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.json"), "[]").unwrap();

        let files = json_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_json_files_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(json_files(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_file_type() {
        assert_eq!(file_type(Path::new("x/policy_lists_site.json")), Some("policy_lists_site"));
        assert_eq!(file_type(Path::new("Hub.values.json")), Some("Hub"));
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        fs::write(&good, r#"[{"a": 1}]"#).unwrap();
        fs::write(&bad, "[{").unwrap();

        assert!(load_json(&good).unwrap().is_array());
        assert!(load_json(&bad).is_none());
        assert!(load_json(&dir.path().join("missing.json")).is_none());
    }
}
