//! State decompiler.
//!
//! Rebuilds readable terraform configuration from a `terraform.tfstate`
//! produced by importing existing SD-WAN objects.
//!
//! # Phases
//!
//! ```text
//! 1. register   every resource id -> "<type>.<normalized name>"   (registry)
//! 2. partition  device-defining resources first, unsupported ones out
//! 3. emit       one block per resource into its output group       (emit, streams)
//! ```
//!
//! Resolution only depends on the registry, which is complete before the
//! first block is emitted. The device-first order is for the reader.

mod emit;
mod ident;
mod policy;
mod registry;
mod streams;
mod value;

use emit::{emit_resource, group_for};
pub use registry::SymbolRegistry;
pub use streams::TextStreams;

use crate::{
    debug,
    device::is_vedge_device,
    log,
    naming::normalize_name,
    state::{AttrValue, Instance, ResourceRecord, Snapshot, StateError},
};

/// Device template resource type; the only context with `version` companions.
pub const DEVICE_TEMPLATE: &str = "sdwan_feature_device_template";

/// CLI-mode device templates, which the provider cannot decompile.
pub const CLI_DEVICE_TEMPLATE: &str = "sdwan_cli_device_template";

/// Resource types other resources attach to; emitted first.
pub const DEVICE_DEFINING: &[&str] = &[
    DEVICE_TEMPLATE,
    CLI_DEVICE_TEMPLATE,
    "sdwan_application_aware_routing_policy_definition",
];

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub registered: usize,
    pub devices: usize,
    pub others: usize,
    pub skipped: usize,
}

impl Summary {
    pub const fn emitted(&self) -> usize {
        self.devices + self.others
    }
}

/// One resource ready for emission.
struct Item<'s> {
    record: &'s ResourceRecord,
    instance: &'s Instance,
}

/// Decompile `snapshot` into `streams`.
///
/// Fails before emitting anything if a resource has more than one instance.
pub fn decompile(snapshot: &Snapshot, streams: &mut TextStreams) -> Result<Summary, StateError> {
    let mut registry = SymbolRegistry::new();
    let mut summary = Summary::default();

    let items = register_all(snapshot, &mut registry)?;
    summary.registered = registry.len();

    let (devices, others, skipped) = partition(items);
    summary.devices = devices.len();
    summary.others = others.len();
    summary.skipped = skipped;

    let emitted: Vec<&Item<'_>> = devices.iter().chain(&others).collect();
    for item in &emitted {
        let kind = item.record.kind.as_str();
        let lines = emit_resource(
            kind,
            &item.record.name,
            item.instance,
            &mut registry,
            kind == DEVICE_TEMPLATE,
        );
        streams.extend(&group_for(kind), lines);
    }

    debug_unreferenced(&emitted, &registry);
    Ok(summary)
}

/// Phase 1: register every resource and pick up its single instance.
fn register_all<'s>(
    snapshot: &'s Snapshot,
    registry: &mut SymbolRegistry,
) -> Result<Vec<Item<'s>>, StateError> {
    let mut items = Vec::with_capacity(snapshot.resources.len());

    for record in &snapshot.resources {
        let Some(instance) = record.instance()? else {
            log!("warning"; "resource {} has no instance, skipping", record.address());
            continue;
        };

        match instance.get_str("id") {
            Some(id) => {
                let name = normalize_name(instance.get_str("name").unwrap_or(&record.name));
                registry.register(id, format!("{}.{name}", record.kind));
            }
            None => debug!("create"; "resource {} has no id", record.address()),
        }
        items.push(Item { record, instance });
    }

    Ok(items)
}

/// Phase 2: device-defining resources first, unsupported ones dropped.
fn partition(items: Vec<Item<'_>>) -> (Vec<Item<'_>>, Vec<Item<'_>>, usize) {
    let mut devices = Vec::new();
    let mut others = Vec::new();
    let mut skipped = 0;

    for item in items {
        let kind = item.record.kind.as_str();
        if !DEVICE_DEFINING.contains(&kind) {
            others.push(item);
            continue;
        }

        if kind == CLI_DEVICE_TEMPLATE {
            debug!("create"; "skipping {}: CLI device templates are not supported", item.record.address());
            skipped += 1;
        } else if is_vedge_instance(item.instance) {
            debug!("create"; "skipping {}: vEdge devices are not supported", item.record.address());
            skipped += 1;
        } else {
            devices.push(item);
        }
    }

    (devices, others, skipped)
}

/// vEdge check over the device type attributes of a state instance.
fn is_vedge_instance(instance: &Instance) -> bool {
    let device_types = ["device_type", "device_types", "deviceType"]
        .into_iter()
        .filter_map(|key| instance.get(key))
        .flat_map(|value| match value {
            AttrValue::String(s) => vec![s.as_str()],
            AttrValue::List(items) => items.iter().filter_map(AttrValue::as_str).collect(),
            _ => Vec::new(),
        });
    is_vedge_device(device_types, instance.get_str("template_type"))
}

/// Resources no other resource points at, in emission order.
fn debug_unreferenced(items: &[&Item<'_>], registry: &SymbolRegistry) {
    let unreferenced: Vec<_> = items
        .iter()
        .filter(|item| {
            item.instance
                .get_str("id")
                .is_some_and(|id| !registry.was_referenced(id))
        })
        .map(|item| item.record.address())
        .collect();
    if !unreferenced.is_empty() {
        debug!("create"; "{} resources are never referenced: {}", unreferenced.len(), unreferenced.join(", "));
    }
}

// ============================================================================
// tests
// ============================================================================
