//! Backup type to resource type translation.

use serde_json::Value;

/// Backup types the provider has no resource for.
pub const UNSUPPORTED_TYPES: &[&str] = &[
    "feature_profiles_sdwan_embedded_security",
    "feature_profiles_sdwan_policy_object",
    "policy_groups",
    "policy_templates_customapp",
];

/// Feature template types the provider cannot import.
pub const UNSUPPORTED_FEATURES: &[&str] = &["appqoe", "virtual-application-utd"];

/// Resource type suffix for a backup type (the inventory file stem).
pub fn translate(backup_type: &str) -> Option<&'static str> {
    Some(match backup_type {
        "config_groups" => "configuration_group",
        "device_templates" => "feature_device_template",
        "feature_profiles_sdwan_cli" => "cli_feature_profile",
        "feature_profiles_sdwan_application_priority" => "application_priority_feature_profile",
        "feature_profiles_sdwan_service" => "service_feature_profile",
        "feature_profiles_sdwan_system" => "system_feature_profile",
        "feature_profiles_sdwan_transport" => "transport_feature_profile",
        "feature_templates" => "feature_template",
        "policy_definitions_acl" => "ipv4_acl_policy_definition",
        "policy_definitions_approute" => "application_aware_routing_policy_definition",
        "policy_definitions_cflowd" => "cflowd_policy_definition",
        "policy_definitions_control" => "custom_control_topology_policy_definition",
        "policy_definitions_data" => "traffic_data_policy_definition",
        "policy_definitions_deviceaccess" => "ipv4_device_acl_policy_definition",
        "policy_definitions_qosmap" => "qos_map_policy_definition",
        "policy_definitions_rewriterule" => "rewrite_rule_policy_definition",
        "policy_definitions_ruleset" => "rule_set_policy_definition",
        "policy_definitions_securitygroup" => "object_group_policy_definition",
        "policy_definitions_vedgeroute" => "route_policy_definition",
        "policy_definitions_zonebasedfw" => "zone_based_firewall_policy_definition",
        "policy_lists_app" => "application_list_policy_object",
        "policy_lists_appprobe" => "app_probe_class_policy_object",
        "policy_lists_class" => "class_map_policy_object",
        "policy_lists_color" => "color_list_policy_object",
        "policy_lists_dataprefix" => "data_ipv4_prefix_list_policy_object",
        "policy_lists_fqdn" => "data_fqdn_prefix_list_policy_object",
        "policy_lists_localapp" => "local_application_list_policy_object",
        "policy_lists_port" => "port_list_policy_object",
        "policy_lists_preferredcolorgroup" => "preferred_color_group_policy_object",
        "policy_lists_prefix" => "ipv4_prefix_list_policy_object",
        "policy_lists_protocol" => "protocol_list_policy_object",
        "policy_lists_site" => "site_list_policy_object",
        "policy_lists_sla" => "sla_class_policy_object",
        "policy_lists_tloc" => "tloc_list_policy_object",
        "policy_lists_vpn" => "vpn_list_policy_object",
        "policy_lists_zone" => "zone_list_policy_object",
        "policy_templates_security" => "security_policy",
        "policy_templates_vedge" => "localized_policy",
        "policy_templates_vsmart" => "centralized_policy",
        _ => return None,
    })
}

/// Provider spelling of a feature template type (`-` already mapped to `_`).
fn fix_template_type(template_type: &str) -> &str {
    match template_type {
        "vpn_cedge_interface_cellular" => "vpn_interface_cellular",
        "cellular_cedge_controller" => "cellular_controller",
        "vpn_interface_ethpppoe" => "vpn_interface_ethernet_pppoe",
        other => other,
    }
}

/// Full resource type (`sdwan_...`) of one backup object.
///
/// `None` for unknown backup types and feature templates without `templateType`.
pub fn resource_type(backup_type: &str, content: &Value) -> Option<String> {
    let suffix = translate(backup_type)?;

    let kind = match backup_type {
        "device_templates"
            if content.get("configType").and_then(Value::as_str) == Some("file") =>
        {
            "cli_device_template".to_string()
        }
        "feature_templates" => {
            let template_type = content.get("templateType")?.as_str()?.replace('-', "_");
            format!("{}_{suffix}", fix_template_type(&template_type))
        }
        _ => suffix.to_string(),
    };

    Some(format!("sdwan_{kind}"))
}
