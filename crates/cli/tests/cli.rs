//! Command tests over documents written to temporary files.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use apigen_cli::commands::EXIT_INVALID;
use apigen_cli::commands::generate::{self, Artifact, GenerateArgs};
use apigen_cli::commands::validate::{self, ValidateArgs};
use apigen_cli::run_cli;
use serde_json::{Value, json};
use tempfile::TempDir;

fn pets_document() -> Value {
    json!({
        "title": "Pets",
        "version": "1.0.0",
        "description": "Pet store",
        "baseURL": "https://pets.example.com",
        "authentication": {"type": "apiKey", "headerName": "X-Api-Key"},
        "endpoints": [{
            "id": "list-pets",
            "name": "pets",
            "method": "GET",
            "path": "/pets/{ownerId}",
            "summary": "List pets",
            "description": "Pets of one owner",
            "parameters": [
                {"name": "ownerId", "in": "path", "type": "string", "required": true, "description": "Owner"},
                {"name": "limit", "in": "query", "type": "number", "required": false, "description": "Page size"}
            ],
            "responses": [{
                "statusCode": 200,
                "description": "The pets",
                "contentType": "application/json",
                "schema": {"type": "array", "items": {"type": "object",
                    "properties": {"name": {"type": "string"}}, "required": ["name"]}}
            }]
        }]
    })
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn generate_args(input: &Path, artifact: Artifact) -> GenerateArgs {
    GenerateArgs {
        input: input.to_path_buf(),
        artifact,
        config: None,
    }
}

#[test]
fn validate_prints_result_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(&dir, "pets.json", &pets_document());

    let output = validate::execute(&ValidateArgs { input }).unwrap();
    assert_eq!(output.exit_code, 0);
    let result: Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(result["isValid"], json!(true));
    assert_eq!(result["errors"], json!([]));
}

#[test]
fn validate_exits_with_two_on_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = pets_document();
    doc["endpoints"][0]["parameters"] = json!([]);
    let input = write_json(&dir, "pets.json", &doc);

    let output = validate::execute(&ValidateArgs { input }).unwrap();
    assert_eq!(output.exit_code, EXIT_INVALID);
    let result: Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(result["isValid"], json!(false));
    assert_eq!(result["errors"][0]["code"], json!("MISSING_PATH_PARAM"));
}

#[test]
fn validate_reads_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.yml");
    fs::write(&path, "title: ''\nversion: 1.0.0\nbaseURL: https://x.dev\nendpoints: []\n").unwrap();

    let output = validate::execute(&ValidateArgs { input: path }).unwrap();
    assert_eq!(output.exit_code, EXIT_INVALID);
    assert!(output.stdout.contains("REQUIRED_FIELD"));
}

#[test]
fn missing_file_is_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.json");
    assert!(validate::execute(&ValidateArgs { input: input.clone() }).is_err());
    assert_eq!(run_cli(["apigen", "validate", input.to_str().unwrap()]), 1);
}

#[test]
fn generate_single_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(&dir, "pets.json", &pets_document());

    let types = generate::execute(&generate_args(&input, Artifact::Types)).unwrap();
    assert_eq!(types.exit_code, 0);
    assert!(types.stdout.contains("export interface PetsParams {"));
    assert!(types.stdout.contains("export type PetsResponse = PetsItem[];"));

    let services = generate::execute(&generate_args(&input, Artifact::Services)).unwrap();
    assert!(services.stdout.contains("import { apiClient } from './client';"));
    assert!(services.stdout.contains("export async function getPets(ownerId: string"));

    let hooks = generate::execute(&generate_args(&input, Artifact::Hooks)).unwrap();
    assert!(hooks.stdout.contains("export function usePets("));

    let index = generate::execute(&generate_args(&input, Artifact::Index)).unwrap();
    assert!(index.stdout.contains("getPets"));
    assert!(index.stdout.contains("usePets"));
}

#[test]
fn generate_all_prints_a_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(&dir, "pets.json", &pets_document());

    let output = generate::execute(&generate_args(&input, Artifact::All)).unwrap();
    let bundle: Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(bundle["totalFunctions"], json!(1));
    assert_eq!(bundle["services"][0]["functionName"], json!("getPets"));
    for key in ["types", "servicesSource", "hooks", "index"] {
        assert!(bundle[key].as_str().is_some_and(|text| !text.is_empty()), "{key}");
    }
}

#[test]
fn generate_applies_toml_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(&dir, "pets.json", &pets_document());
    let config = dir.path().join("apigen.toml");
    fs::write(&config, "clientModule = \"@/api/http\"\nclientName = \"http\"\n").unwrap();

    let output = generate::execute(&GenerateArgs {
        config: Some(config),
        ..generate_args(&input, Artifact::Services)
    })
    .unwrap();
    assert!(output.stdout.contains("import { http } from '@/api/http';"));
    assert!(output.stdout.contains("await http.get<PetsResponse>("));
}

#[test]
fn generate_is_blocked_by_invalid_documents() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = pets_document();
    doc["baseURL"] = json!("not a url");
    let input = write_json(&dir, "pets.json", &doc);

    let output = generate::execute(&generate_args(&input, Artifact::Types)).unwrap();
    assert_eq!(output.exit_code, EXIT_INVALID);
    let result: Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(result["errors"][0]["code"], json!("INVALID_URL"));

    assert_eq!(
        run_cli([
            "apigen",
            "generate",
            input.to_str().unwrap(),
            "--artifact",
            "types"
        ]),
        3
    );
}
