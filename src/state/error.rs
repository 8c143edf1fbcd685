//! Snapshot error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions raised while loading or walking a state snapshot.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("unable to read state file `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode JSON in state file `{}`", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("resource `{resource}` has {count} instances, only single-instance resources are supported")]
    MultipleInstances { resource: String, count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_state_error_display() {
        let io_err = StateError::Io {
            path: PathBuf::from("terraform.tfstate"),
            source: Error::new(ErrorKind::NotFound, "file not found"),
        };
        let display = format!("{io_err}");
        assert!(display.contains("unable to read"));
        assert!(display.contains("terraform.tfstate"));

        let multi = StateError::MultipleInstances {
            resource: "sdwan_feature_device_template.Hub".to_string(),
            count: 2,
        };
        let display = format!("{multi}");
        assert!(display.contains("Hub"));
        assert!(display.contains("2 instances"));
    }
}
