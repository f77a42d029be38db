//! TypeScript code generation for a validated API document.
//!
//! ## Module Structure
//!
//! - `ir`: TypeScript AST and its emission
//! - `type_mapper`: property schema -> TypeScript type
//! - `types`: model and per-endpoint type declarations
//! - `services`: one client function per endpoint
//! - `hooks`: React Query hooks over the service functions
//! - `index`: re-export module over everything above
//!
//! All artifacts are pure functions of the document and the config, so the
//! same input always yields byte-identical text.

mod hooks;
mod index;
pub(crate) mod ir;
mod services;
mod type_mapper;
mod types;

use apigen_common::{ApiDocumentation, Endpoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerateError;

pub(crate) use types::{declared_type_names, model_type_name};
pub use type_mapper::render_type;
pub use types::generate_types;

/// Module specifiers and identifiers used by the emitted imports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodegenConfig {
    /// Module exporting the HTTP client, `APIResponse` and `RequestConfig`.
    pub client_module: String,
    /// Module the types artifact is saved as.
    pub types_module: String,
    /// Module the services artifact is saved as.
    pub services_module: String,
    /// Module the hooks artifact is saved as.
    pub hooks_module: String,
    /// Name of the client instance exported by `client_module`.
    pub client_name: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            client_module: "./client".into(),
            types_module: "./types".into(),
            services_module: "./services".into(),
            hooks_module: "./hooks".into(),
            client_name: "apiClient".into(),
        }
    }
}

impl CodegenConfig {
    /// Banner comment lines opening every artifact.
    pub(crate) fn banner(&self, doc: &ApiDocumentation, artifact: &str) -> Vec<String> {
        let title = if doc.title.trim().is_empty() {
            "API"
        } else {
            doc.title.trim()
        };
        vec![
            format!("{artifact} for {title} v{}", doc.version.trim()),
            "Generated by apigen. Do not edit by hand.".to_string(),
        ]
    }
}

/// The generated service unit of one endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedService {
    /// Endpoint name the identifiers were derived from.
    pub name: String,
    /// Name of the generated function.
    pub function_name: String,
    /// Function source, without imports.
    pub code: String,
    /// Names of the type declarations generated for this endpoint.
    pub types: Vec<String>,
    /// Import statements the function needs.
    pub imports: Vec<String>,
    /// The endpoint itself.
    pub endpoint: Endpoint,
}

/// All artifacts generated for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceGenerationResult {
    /// One entry per endpoint, in endpoint order.
    pub services: Vec<GeneratedService>,
    /// Types artifact.
    pub types: String,
    /// Hooks artifact.
    pub hooks: String,
    /// Index artifact.
    pub index: String,
    /// Number of generated service functions.
    pub total_functions: usize,
    #[serde(rename = "servicesSource")]
    services_module: String,
}

impl ServiceGenerationResult {
    /// Services artifact: every service function under one merged import
    /// header.
    pub fn services_source(&self) -> &str {
        &self.services_module
    }
}

/// Generate every artifact with an explicit config.
///
/// The document is assumed valid; see [`crate::generate`] for the guarded
/// entry point.
pub fn generate_services_with(
    doc: &ApiDocumentation,
    config: &CodegenConfig,
) -> Result<ServiceGenerationResult, GenerateError> {
    let endpoint_types = doc
        .endpoints
        .iter()
        .enumerate()
        .map(|(index, endpoint)| types::endpoint_types(endpoint, &format!("endpoints[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    let types = generate_types(doc, config)?;

    let services: Vec<GeneratedService> = doc
        .endpoints
        .iter()
        .zip(&endpoint_types)
        .map(|(endpoint, types)| services::generate_service(endpoint, types, config))
        .collect();

    let services_module = services::services_module(
        &services,
        &endpoint_types,
        config.banner(doc, "API services"),
        config,
    );
    let hooks = hooks::generate_hooks(
        &doc.endpoints,
        &endpoint_types,
        config.banner(doc, "React Query hooks"),
        config,
    );
    let index = index::generate_index(&services, config.banner(doc, "API exports"), config);

    debug!(
        services = services.len(),
        types_bytes = types.len(),
        services_bytes = services_module.len(),
        hooks_bytes = hooks.len(),
        index_bytes = index.len(),
        "Generated artifacts"
    );

    Ok(ServiceGenerationResult {
        total_functions: services.len(),
        services,
        types,
        hooks,
        index,
        services_module,
    })
}
