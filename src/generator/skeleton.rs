//! Import skeleton and script.
//!
//! `terraform import` only accepts addresses already declared in the
//! configuration, so every inventory object gets an empty resource block
//! alongside the script line that imports it.

use crate::{hcl::resource_open, inventory::InventoryObject};

/// Output group of the skeleton configuration (`<basename>-config.tf`).
pub const CONFIG_STREAM: &str = "config";

/// Empty resource blocks, one per object.
pub fn skeleton_lines(objects: &[InventoryObject]) -> Vec<String> {
    objects
        .iter()
        .map(|object| format!("{}\n}}", resource_open(&object.kind, &object.name)))
        .collect()
}

/// Bash script importing every object by id.
pub fn import_script(objects: &[InventoryObject], terraform: &str) -> String {
    let mut script = String::from("#!/bin/bash\n");
    for object in objects {
        script.push_str(&format!(
            "{terraform} import {} {}\n",
            object.address(),
            object.id
        ));
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objects() -> Vec<InventoryObject> {
        vec![
            InventoryObject {
                kind: "sdwan_site_list_policy_object".into(),
                name: "Branches".into(),
                id: "s1".into(),
            },
            InventoryObject {
                kind: "sdwan_cisco_aaa_feature_template".into(),
                name: "_7_AAA".into(),
                id: "t1".into(),
            },
        ]
    }

    #[test]
    fn test_skeleton_lines() {
        let lines = skeleton_lines(&objects());
        assert_eq!(
            lines[0],
            "resource \"sdwan_site_list_policy_object\" \"Branches\" {\n}"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_import_script() {
        let script = import_script(&objects(), "terraform");
        assert_eq!(
            script,
            "#!/bin/bash\n\
             terraform import sdwan_site_list_policy_object.Branches s1\n\
             terraform import sdwan_cisco_aaa_feature_template._7_AAA t1\n"
        );
    }

    #[test]
    fn test_import_script_custom_binary() {
        let script = import_script(&objects()[..1], "tofu");
        assert!(script.ends_with("tofu import sdwan_site_list_policy_object.Branches s1\n"));
    }

    #[test]
    fn test_empty_inventory() {
        assert!(skeleton_lines(&[]).is_empty());
        assert_eq!(import_script(&[], "terraform"), "#!/bin/bash\n");
    }
}
