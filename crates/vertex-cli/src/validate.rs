//! # Validate Subcommand
//!
//! Checks record metadata against a vertical's schema, the way the write
//! path does before a booking, call, or catalogue item is persisted.
//!
//! Exit codes: `0` when the metadata is valid, `1` when it has field
//! violations. Unreadable input is an error, not a violation.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use vertex_core::Vertical;
use vertex_engine::Engine;
use vertex_schema::FieldViolation;

use crate::write_json;

/// Arguments for `vertex validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Vertical label (canonical id or synonym).
    pub vertical: String,

    /// Read the metadata object from a JSON file.
    #[arg(long, conflicts_with = "json", required_unless_present = "json")]
    pub file: Option<PathBuf>,

    /// Metadata object given inline as JSON.
    #[arg(long)]
    pub json: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport<'a> {
    vertical: Vertical,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<&'a [FieldViolation]>,
}

/// Execute `vertex validate`.
pub fn run_validate(args: &ValidateArgs, engine: &Engine, out: &mut impl Write) -> Result<u8> {
    let metadata = read_metadata(args)?;
    let vertical = engine.resolve_vertical(&args.vertical);
    match engine.validate_metadata(&args.vertical, &metadata) {
        Ok(validated) => {
            let report = ValidationReport {
                vertical,
                valid: true,
                fields: Some(validated.into_value()),
                violations: None,
            };
            write_json(out, &report)?;
            Ok(0)
        }
        Err(violations) => {
            tracing::info!(
                vertical = %vertical,
                violations = violations.len(),
                "metadata rejected"
            );
            let report = ValidationReport {
                vertical,
                valid: false,
                fields: None,
                violations: Some(violations.violations()),
            };
            write_json(out, &report)?;
            Ok(1)
        }
    }
}

fn read_metadata(args: &ValidateArgs) -> Result<Value> {
    match (&args.file, &args.json) {
        (Some(path), _) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("{} is not valid JSON", path.display()))
        }
        (None, Some(inline)) => {
            serde_json::from_str(inline).context("--json argument is not valid JSON")
        }
        (None, None) => Ok(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(vertical: &str, json: &str) -> ValidateArgs {
        ValidateArgs {
            vertical: vertical.into(),
            file: None,
            json: Some(json.into()),
        }
    }

    #[test]
    fn test_parked_status_exits_one() {
        let engine = Engine::builtin().unwrap();
        let mut out = Vec::new();
        let code = run_validate(
            &inline("automotive", r#"{"status": "parked"}"#),
            &engine,
            &mut out,
        )
        .unwrap();
        assert_eq!(code, 1);
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["valid"], false);
        let violations = value["violations"].as_array().unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0]["field"], "status");
    }

    #[test]
    fn test_valid_metadata_exits_zero() {
        let engine = Engine::builtin().unwrap();
        let mut out = Vec::new();
        let code = run_validate(
            &inline("garage", r#"{"status": "ready", "mileage": 120000}"#),
            &engine,
            &mut out,
        )
        .unwrap();
        assert_eq!(code, 0);
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["vertical"], "automotive");
        assert_eq!(value["fields"]["mileage"], 120000);
        assert!(value.get("violations").is_none());
    }

    #[test]
    fn test_reads_file() {
        let engine = Engine::builtin().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.json");
        std::fs::write(&path, r#"{"urgency": "whenever"}"#).unwrap();
        let args = ValidateArgs {
            vertical: "medical".into(),
            file: Some(path),
            json: None,
        };
        let mut out = Vec::new();
        assert_eq!(run_validate(&args, &engine, &mut out).unwrap(), 1);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let engine = Engine::builtin().unwrap();
        let mut out = Vec::new();
        assert!(run_validate(&inline("legal", "{not json"), &engine, &mut out).is_err());
    }
}
