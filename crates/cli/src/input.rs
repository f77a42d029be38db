//! Loading documents and codegen config from disk or stdin.

use std::io::Read;
use std::path::Path;

use apigen_common::ApiDocumentation;
use apigen_core::CodegenConfig;
use tracing::debug;

/// Path that selects stdin instead of a file.
pub const STDIN: &str = "-";

/// Read an API document from `source`.
///
/// `-` reads JSON from stdin. Files ending in `.yaml` or `.yml` are parsed
/// as YAML, anything else as JSON.
pub fn load_document(source: &Path) -> Result<ApiDocumentation, String> {
    if source == Path::new(STDIN) {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|e| format!("Failed to read document from stdin: {e}"))?;
        return ApiDocumentation::from_json(&raw)
            .map_err(|e| format!("Invalid document on stdin: {e}"));
    }

    let raw = std::fs::read_to_string(source)
        .map_err(|e| format!("Failed to read {}: {e}", source.display()))?;
    let parsed = if is_yaml(source) {
        ApiDocumentation::from_yaml(&raw)
    } else {
        ApiDocumentation::from_json(&raw)
    };
    let doc = parsed.map_err(|e| format!("Invalid document {}: {e}", source.display()))?;
    debug!(
        path = %source.display(),
        endpoints = doc.endpoints.len(),
        models = doc.models.as_ref().map_or(0, |m| m.len()),
        "Loaded document"
    );
    Ok(doc)
}

/// Read a TOML codegen config; `None` gives the defaults.
pub fn load_config(path: Option<&Path>) -> Result<CodegenConfig, String> {
    let Some(path) = path else {
        return Ok(CodegenConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    toml::from_str(&raw).map_err(|e| format!("Invalid config {}: {e}", path.display()))
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
