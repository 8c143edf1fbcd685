//! Device variable attachments.
//!
//! Each `device_templates/values/<template>.json` export lists the devices
//! attached to a device template and the values of its variables. It turns
//! into one `sdwan_attach_feature_device_template` resource.
//!
//! # Export format
//!
//! ```json
//! {
//!   "header": { "columns": [ { "property": "//system/host-name", "title": "Hostname(system_host_name)" } ] },
//!   "data":   [ { "csv-deviceId": "C8K-1", "//system/host-name": "edge1" } ]
//! }
//! ```

use crate::{
    debug,
    hcl::{key, pad, quote, resource_open},
    log,
    naming::normalize_name,
};
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use std::{collections::BTreeMap, sync::LazyLock};

/// Output group of the attachments (`<basename>-variables.tf`).
pub const VARIABLES_STREAM: &str = "variables";

/// Resource type of an attachment.
pub const ATTACH_TYPE: &str = "sdwan_attach_feature_device_template";

/// Export column holding the device identifier.
const DEVICE_ID: &str = "csv-deviceId";

/// Key prefix of export bookkeeping columns (`csv-deviceId`, `csv-status`, ...).
const CSV_PREFIX: &str = "csv-";

/// Variable name in a trailing parenthesis: `Hostname(system_host_name)`.
static TITLE_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*)\)$").expect("valid regex"));

#[derive(Debug, Deserialize)]
pub struct ValuesExport {
    pub header: Header,
    #[serde(default)]
    pub data: Vec<BTreeMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub columns: Vec<Column>,
}

#[derive(Debug, Deserialize)]
pub struct Column {
    pub property: String,
    pub title: String,
}

/// Variable name for a column title.
///
/// Uses the text inside a trailing `(...)` when present, and quotes the
/// result if it is not a bare HCL key.
pub fn var_name(title: &str) -> String {
    let name = TITLE_VAR
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map_or(title, |m| m.as_str());

    key(name).into_owned()
}

/// Render the attachment resource for one device template export.
pub fn attachment_lines(template: &str, export: &ValuesExport) -> Vec<String> {
    let template = normalize_name(template);
    let target = format!("sdwan_feature_device_template.{template}");

    let names: FxHashMap<&str, String> = export
        .header
        .columns
        .iter()
        .map(|col| (col.property.as_str(), var_name(&col.title)))
        .collect();

    let mut lines = vec![
        resource_open(ATTACH_TYPE, &template),
        format!("{}id = {target}.id", pad(1)),
        format!("{}version = {target}.version", pad(1)),
        format!("{}devices = [", pad(1)),
    ];

    for device in &export.data {
        let Some(device_id) = device
            .get(DEVICE_ID)
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
        else {
            log!("warning"; "{}: device entry without {}, skipping", template, DEVICE_ID);
            continue;
        };

        lines.push(format!("{}{{", pad(2)));
        lines.push(format!("{}id = {}", pad(3), quote(device_id)));
        lines.push(format!("{}variables = {{", pad(3)));
        for (property, value) in device.iter().filter(|(k, _)| !k.starts_with(CSV_PREFIX)) {
            let name = match names.get(property.as_str()) {
                Some(name) => name.clone(),
                None => {
                    debug!("vars"; "{}: no column title for '{}'", template, property);
                    var_name(property)
                }
            };
            lines.push(format!("{}{name} = {}", pad(4), quote(&scalar_text(value))));
        }
        lines.push(format!("{}}}", pad(3)));
        lines.push(format!("{}}},", pad(2)));
    }

    lines.push(format!("{}]", pad(1)));
    lines.push("}".to_string());
    lines.push(String::new());
    lines
}

/// Variable values are written as strings whatever their JSON type.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn export(value: Value) -> ValuesExport {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_var_name() {
        assert_eq!(var_name("Hostname(system_host_name)"), "system_host_name");
        assert_eq!(var_name("System IP"), "\"System IP\"");
        assert_eq!(var_name("Interface(vpn0/if_name)"), "\"vpn0/if_name\"");
        assert_eq!(var_name("plain"), "plain");
    }

    #[test]
    fn test_attachment_lines() {
        let export = export(json!({
            "header": {"columns": [
                {"property": "//system/host-name", "title": "Hostname(system_host_name)"},
                {"property": "//system/system-ip", "title": "System IP(system_system_ip)"},
            ]},
            "data": [{
                "csv-deviceId": "C8K-1",
                "csv-status": "complete",
                "//system/system-ip": "10.0.0.1",
                "//system/host-name": "edge1",
            }],
        }));

        let text = attachment_lines("Branch Edge", &export).join("\n");
        assert_eq!(
            text,
            "resource \"sdwan_attach_feature_device_template\" \"Branch_Edge\" {
  id = sdwan_feature_device_template.Branch_Edge.id
  version = sdwan_feature_device_template.Branch_Edge.version
  devices = [
    {
      id = \"C8K-1\"
      variables = {
        system_host_name = \"edge1\"
        system_system_ip = \"10.0.0.1\"
      }
    },
  ]
}
"
        );
    }

    #[test]
    fn test_no_devices() {
        let export = export(json!({"header": {"columns": []}}));
        let lines = attachment_lines("Hub", &export);
        assert!(lines.contains(&"  devices = [".to_string()));
        assert!(lines.contains(&"  ]".to_string()));
        assert!(!lines.iter().any(|l| l.contains("variables")));
    }

    #[test]
    fn test_device_without_id_is_skipped() {
        let export = export(json!({
            "header": {"columns": [{"property": "host", "title": "Host(host)"}]},
            "data": [
                {"csv-status": "complete", "host": "orphan"},
                {"csv-deviceId": "", "host": "blank"},
                {"csv-deviceId": "C8K-2", "host": "edge2"},
            ],
        }));
        let text = attachment_lines("Hub", &export).join("\n");
        assert_eq!(text.matches("variables = {").count(), 1);
        assert!(text.contains("      id = \"C8K-2\"\n"));
        assert!(!text.contains("orphan"));
        assert!(!text.contains("blank"));
        assert!(!text.contains("id = \"\""));
    }

    #[test]
    fn test_values_escaped_and_stringified() {
        let export = export(json!({
            "header": {"columns": [
                {"property": "banner", "title": "Banner(banner)"},
                {"property": "mtu", "title": "MTU(mtu)"},
            ]},
            "data": [{"csv-deviceId": "d1", "banner": "say \"hi\"", "mtu": 1500}],
        }));
        let text = attachment_lines("Hub", &export).join("\n");
        assert!(text.contains(r#"        banner = "say \"hi\"""#));
        assert!(text.contains(r#"        mtu = "1500""#));
    }
}
