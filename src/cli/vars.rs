//! `vars`: device variable attachments from device template value exports.

use crate::{
    cli::DirArgs,
    config::Config,
    decompile::TextStreams,
    generator::variables::{VARIABLES_STREAM, ValuesExport, attachment_lines},
    inventory::files::{file_type, json_files, load_json},
    log,
};
use anyhow::Result;
use std::path::PathBuf;

/// Source directory when `--source-dir` is absent.
pub const DEFAULT_SOURCE: &str = "./data";

/// Write `<dest>/<basename>-variables.tf` from `<source>/device_templates/values`.
pub fn create_variables(dirs: &DirArgs, config: &Config) -> Result<Vec<PathBuf>> {
    let values_dir = dirs.source(DEFAULT_SOURCE).join("device_templates/values");
    log!("vars"; "reading {}", values_dir.display());

    let mut streams = TextStreams::new(dirs.destination(), &config.output.basename);
    let mut templates = 0;

    for path in json_files(&values_dir)? {
        let (Some(template), Some(content)) = (file_type(&path), load_json(&path)) else {
            continue;
        };
        let export: ValuesExport = match serde_json::from_value(content) {
            Ok(export) => export,
            Err(err) => {
                log!("warning"; "{} is not a device values export, skipping: {}", path.display(), err);
                continue;
            }
        };

        streams.extend(VARIABLES_STREAM, attachment_lines(template, &export));
        templates += 1;
    }

    let written = streams.flush()?;
    log!("vars"; "{} device templates attached", templates);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn dirs(root: &Path) -> DirArgs {
        DirArgs {
            source_dir: Some(root.join("data")),
            destination_dir: Some(root.to_path_buf()),
        }
    }

    #[test]
    fn test_create_variables() {
        let dir = TempDir::new().unwrap();
        let values = dir.path().join("data/device_templates/values");
        fs::create_dir_all(&values).unwrap();
        fs::write(
            values.join("Hub.json"),
            r#"{"header": {"columns": [{"property": "host", "title": "Hostname(host_name)"}]},
                "data": [{"csv-deviceId": "C8K-1", "host": "hub1"}]}"#,
        )
        .unwrap();
        fs::write(values.join("broken.json"), r#"{"data": []}"#).unwrap();

        let written = create_variables(&dirs(dir.path()), &Config::default()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("sdwan-tf-import-variables.tf"));

        let text = fs::read_to_string(&written[0]).unwrap();
        assert!(text.starts_with("resource \"sdwan_attach_feature_device_template\" \"Hub\" {\n"));
        assert!(text.contains("        host_name = \"hub1\"\n"));
    }

    #[test]
    fn test_no_exports_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data/device_templates/values")).unwrap();

        let written = create_variables(&dirs(dir.path()), &Config::default()).unwrap();
        assert!(written.is_empty());
    }
}
