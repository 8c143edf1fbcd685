//! Per-group output buffers.
//!
//! Lines accumulate in memory, one buffer per group, and are only written by
//! [`TextStreams::flush`]. Nothing touches the filesystem before that, so a
//! run that fails part-way leaves the previous output in place.

use crate::log;
use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
};

/// Group that carries the terraform/provider preamble.
pub const MAIN_STREAM: &str = "main";

/// Named set of text buffers written to `<dir>/<basename>-<group>.tf`.
#[derive(Debug)]
pub struct TextStreams {
    dir: PathBuf,
    basename: String,
    header: Option<String>,
    streams: BTreeMap<String, String>,
}

impl TextStreams {
    pub fn new(dir: impl Into<PathBuf>, basename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            basename: basename.into(),
            header: None,
            streams: BTreeMap::new(),
        }
    }

    /// Prefix the main group with `header` and make sure it is written.
    pub fn with_main_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self.open(MAIN_STREAM);
        self
    }

    /// Append one line (a newline is added) to `group`.
    pub fn add(&mut self, group: &str, line: &str) {
        let text = self.open(group);
        text.push_str(line);
        text.push('\n');
    }

    /// Append several lines to `group`.
    pub fn extend<I, S>(&mut self, group: &str, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.add(group, line.as_ref());
        }
    }

    fn open(&mut self, group: &str) -> &mut String {
        let header = self.header.as_deref();
        self.streams.entry(group.to_string()).or_insert_with(|| {
            match header {
                Some(header) if group == MAIN_STREAM => header.to_string(),
                _ => String::new(),
            }
        })
    }

    #[cfg(test)]
    pub fn text(&self, group: &str) -> Option<&str> {
        self.streams.get(group).map(String::as_str)
    }

    /// Group names, sorted.
    #[cfg(test)]
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.streams.keys().map(String::as_str)
    }

    pub fn path_for(&self, group: &str) -> PathBuf {
        self.dir.join(format!("{}-{group}.tf", self.basename))
    }

    /// Write every group to its file, replacing stale output.
    pub fn flush(self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let mut written = Vec::with_capacity(self.streams.len());
        for (group, text) in &self.streams {
            let path = self.path_for(group);
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove stale {}", path.display()))?;
            }
            fs::write(&path, text)
                .with_context(|| format!("Unable to write to {}", path.display()))?;

            log!("write"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
            written.push(path);
        }
        Ok(written)
    }
}
