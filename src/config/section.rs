//! Configuration sections.
//!
//! # Example
//!
//! ```toml
//! [output]
//! basename = "sdwan-tf-import"   # Output file prefix
//! header = true                  # terraform/provider preamble in <basename>-main.tf
//!
//! [provider]
//! source = "CiscoDevNet/sdwan"
//! version = ">= 0.3.13"
//!
//! [import]
//! terraform = "terraform"        # Terraform binary
//! skip_defaults = true           # Skip Default_* / Factory_Default_* device templates
//! ```

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Prefix for every generated file.
    pub basename: String,

    /// Write the terraform/provider preamble into the main file.
    pub header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            basename: "sdwan-tf-import".to_string(),
            header: true,
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.basename.trim().is_empty() {
            return Err(ConfigError::Validation(
                "[output] basename must not be empty".into(),
            ));
        }
        if self.basename.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "[output] basename `{}` must be a file prefix, not a path",
                self.basename
            )));
        }
        Ok(())
    }
}

/// `[provider]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Registry source of the SD-WAN provider.
    pub source: String,

    /// Version constraint.
    pub version: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            source: "CiscoDevNet/sdwan".to_string(),
            version: ">= 0.3.13".to_string(),
        }
    }
}

/// `[import]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Terraform binary used for `init` and `import`.
    pub terraform: String,

    /// Skip factory default device templates.
    pub skip_defaults: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            terraform: "terraform".to_string(),
            skip_defaults: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_output_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.output.basename, "sdwan-tf-import");
        assert!(config.output.header);
    }

    #[test]
    fn test_output_override() {
        let config = test_parse_config("[output]\nbasename = \"lab\"\nheader = false");
        assert_eq!(config.output.basename, "lab");
        assert!(!config.output.header);
    }

    #[test]
    fn test_output_validation() {
        let config = test_parse_config("[output]\nbasename = \"\"");
        assert!(config.output.validate().is_err());

        let config = test_parse_config("[output]\nbasename = \"out/lab\"");
        assert!(config.output.validate().is_err());

        let config = test_parse_config("[output]\nbasename = \"lab\"");
        assert!(config.output.validate().is_ok());
    }

    #[test]
    fn test_provider_partial_override() {
        let config = test_parse_config("[provider]\nversion = \">= 0.4.0\"");
        assert_eq!(config.provider.version, ">= 0.4.0");
        assert_eq!(config.provider.source, "CiscoDevNet/sdwan");
    }

    #[test]
    fn test_import_section() {
        let config = test_parse_config("[import]\nterraform = \"tofu\"\nskip_defaults = false");
        assert_eq!(config.import.terraform, "tofu");
        assert!(!config.import.skip_defaults);
    }
}
