//! Device class checks shared by the import and decompile paths.
//!
//! Legacy vEdge hardware is not supported by the terraform provider, so
//! templates targeting it are left out of both the import script and the
//! decompiled configuration.

/// Device models of the legacy vEdge class.
///
/// cEdge models also carry a `vedge-` prefix (`vedge-C8000V`), so matching
/// is by exact model name.
pub const VEDGE_MODELS: &[&str] = &[
    "vedge-1000",
    "vedge-2000",
    "vedge-5000",
    "vedge-cloud",
    "vedge-ISR1100-6G",
    "vedge-ISR1100-4G",
    "vedge-ISR1100-4GLTE",
    "vedge-ISR1100X-6G",
    "vedge-ISR1100X-4G",
    "vedge-100",
    "vedge-100-B",
    "vedge-100-M",
    "vedge-100-WM",
    "vsmart",
    "vmanage",
];

/// Whether any of `device_types` is a vEdge model, or the template type
/// names the vEdge family.
pub fn is_vedge_device<'a>(
    device_types: impl IntoIterator<Item = &'a str>,
    template_type: Option<&str>,
) -> bool {
    device_types
        .into_iter()
        .any(|device| VEDGE_MODELS.contains(&device))
        || template_type.is_some_and(|t| t.contains("vedge"))
}
