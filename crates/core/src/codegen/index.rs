//! Index module re-exporting every generated symbol.
//!
//! Symbol lists come only from the generated services, so the index never
//! names something the other artifacts do not declare.

use std::collections::BTreeSet;

use super::hooks::HookKind;
use super::ir::{Emit, TsExport, TsModule};
use super::{CodegenConfig, GeneratedService};
use crate::naming::hook_name;

/// Drop repeated names, keeping the first occurrence.
fn unique(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Generate the index artifact: services, hooks and types export blocks.
pub(crate) fn generate_index(
    services: &[GeneratedService],
    header: Vec<String>,
    config: &CodegenConfig,
) -> String {
    let function_names = unique(services.iter().map(|s| s.function_name.clone()));
    let hook_names = unique(
        services
            .iter()
            .filter(|s| HookKind::for_method(&s.endpoint.method).is_some())
            .map(|s| hook_name(&s.endpoint)),
    );
    let type_names = unique(services.iter().flat_map(|s| s.types.iter().cloned()));

    let blocks = [
        (function_names, &config.services_module, false),
        (hook_names, &config.hooks_module, false),
        (type_names, &config.types_module, true),
    ];
    let exports = blocks
        .into_iter()
        .filter(|(items, _, _)| !items.is_empty())
        .map(|(items, from, type_only)| TsExport {
            items,
            from: from.clone(),
            type_only,
        })
        .collect();

    TsModule {
        header,
        exports,
        ..TsModule::default()
    }
    .emit()
}
