//! `create`: decompile a state snapshot into configuration files.

use crate::{
    cli::DirArgs,
    config::Config,
    decompile::{TextStreams, decompile},
    hcl::provider_header,
    log,
    state::Snapshot,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Source directory when `--source-dir` is absent.
pub const DEFAULT_SOURCE: &str = ".";

/// Decompile `<source>/<state>` into `<dest>/<basename>-<group>.tf`.
pub fn create_config(dirs: &DirArgs, state: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let state_path = dirs.source(DEFAULT_SOURCE).join(state);
    log!("create"; "reading {}", state_path.display());

    let snapshot = Snapshot::load(&state_path)
        .with_context(|| format!("Cannot load state snapshot {}", state_path.display()))?;

    let mut streams = TextStreams::new(dirs.destination(), &config.output.basename);
    if config.output.header {
        streams = streams.with_main_header(provider_header(&config.provider));
    }

    let summary = decompile(&snapshot, &mut streams)?;
    let written = streams.flush()?;

    log!(
        "create";
        "{} resources decompiled ({} device-defining, {} ids registered), {} skipped, {} files written",
        summary.emitted(),
        summary.devices,
        summary.registered,
        summary.skipped,
        written.len()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const STATE: &str = r#"{
      "version": 4,
      "terraform_version": "1.7.0",
      "resources": [
        {
          "mode": "managed",
          "type": "sdwan_cisco_aaa_feature_template",
          "name": "Global_AAA",
          "provider": "provider[\"registry.terraform.io/ciscodevnet/sdwan\"]",
          "instances": [
            {"schema_version": 0, "attributes": {
              "id": "11111111-2222-3333-4444-555555555555",
              "name": "Global_AAA",
              "description": "AAA",
              "template_type": "cisco_aaa",
              "version": 3,
              "device_types": ["vedge-C8000V"],
              "server_auth_order": null
            }}
          ]
        },
        {
          "mode": "managed",
          "type": "sdwan_feature_device_template",
          "name": "Hub",
          "instances": [
            {"attributes": {
              "id": "22222222-3333-4444-5555-666666666666",
              "name": "Hub",
              "device_type": "vedge-C8000V",
              "general_templates": [
                {"id": "11111111-2222-3333-4444-555555555555", "type": "cisco_aaa", "version": 3}
              ]
            }}
          ]
        }
      ]
    }"#;

    fn dirs(source: &Path, dest: &Path) -> DirArgs {
        DirArgs {
            source_dir: Some(source.to_path_buf()),
            destination_dir: Some(dest.to_path_buf()),
        }
    }

    #[test]
    fn test_create_writes_groups() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        fs::write(dir.path().join("terraform.tfstate"), STATE).unwrap();

        let written = create_config(
            &dirs(dir.path(), &out),
            Path::new("terraform.tfstate"),
            &Config::default(),
        )
        .unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "sdwan-tf-import-device_template.tf",
                "sdwan-tf-import-feature_template.tf",
                "sdwan-tf-import-main.tf",
            ]
        );

        let main = fs::read_to_string(out.join("sdwan-tf-import-main.tf")).unwrap();
        assert!(main.contains(r#"source = "CiscoDevNet/sdwan""#));

        let templates = fs::read_to_string(out.join("sdwan-tf-import-feature_template.tf")).unwrap();
        assert_eq!(
            templates,
            r#"resource "sdwan_cisco_aaa_feature_template" "Global_AAA" {
  # id = "11111111-2222-3333-4444-555555555555"
  name = "Global_AAA"
  description = "AAA"
  device_types = ["vedge-C8000V"]
  version = 3
}

"#
        );

        let devices = fs::read_to_string(out.join("sdwan-tf-import-device_template.tf")).unwrap();
        assert!(devices.contains("id = sdwan_cisco_aaa_feature_template.Global_AAA.id"));
        assert!(devices.contains("version = sdwan_cisco_aaa_feature_template.Global_AAA.version"));
    }

    #[test]
    fn test_create_without_header() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.tfstate"), STATE).unwrap();

        let mut config = Config::default();
        config.output.header = false;
        config.output.basename = "lab".into();

        let written =
            create_config(&dirs(dir.path(), dir.path()), Path::new("custom.tfstate"), &config)
                .unwrap();
        assert_eq!(written.len(), 2);
        assert!(!dir.path().join("lab-main.tf").exists());
        assert!(dir.path().join("lab-feature_template.tf").exists());
    }

    #[test]
    fn test_multiple_instances_leave_existing_files() {
        let dir = TempDir::new().unwrap();
        let state = STATE.replacen(
            r#""instances": [
            {"attributes": {"#,
            r#""instances": [
            {"attributes": {"id": "33333333-4444-5555-6666-777777777777", "name": "Hub2"}},
            {"attributes": {"#,
            1,
        );
        assert_ne!(state, STATE);
        fs::write(dir.path().join("terraform.tfstate"), &state).unwrap();

        let devices = dir.path().join("sdwan-tf-import-device_template.tf");
        let main = dir.path().join("sdwan-tf-import-main.tf");
        fs::write(&devices, "# previous devices\n").unwrap();
        fs::write(&main, "# previous main\n").unwrap();

        let err = create_config(
            &dirs(dir.path(), dir.path()),
            Path::new("terraform.tfstate"),
            &Config::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("2 instances"));

        assert_eq!(fs::read_to_string(&devices).unwrap(), "# previous devices\n");
        assert_eq!(fs::read_to_string(&main).unwrap(), "# previous main\n");
        assert!(!dir.path().join("sdwan-tf-import-feature_template.tf").exists());
    }

    #[test]
    fn test_create_missing_state() {
        let dir = TempDir::new().unwrap();
        let err = create_config(
            &dirs(dir.path(), dir.path()),
            Path::new("terraform.tfstate"),
            &Config::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Cannot load state snapshot"));
    }
}
