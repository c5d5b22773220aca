//! # Metadata Validation
//!
//! Runtime validation of record metadata against the per-vertical JSON
//! Schema (Draft 2020-12) held in each
//! [`VerticalConfig`](vertex_registry::VerticalConfig).
//!
//! ## Violation Reporting
//!
//! The `jsonschema` crate may report several errors for one field (a wrong
//! type and a failed bound, say). Callers get one [`FieldViolation`] per
//! field: the first error reported for it, with the expected shape read back
//! from the schema keyword that failed.

use std::fmt;

use jsonschema::{Draft, Validator};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use vertex_core::{Vertical, VERTICAL_COUNT};
use vertex_registry::{builtin_registry, resolve_vertical_label, VerticalRegistry};

/// Longest rendering of a received value before it is elided.
const MAX_RECEIVED_LEN: usize = 80;

/// A vertical's metadata schema failed to compile.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("metadata schema for {vertical} does not compile: {reason}")]
    InvalidSchema {
        /// Vertical owning the schema.
        vertical: Vertical,
        /// Compiler message.
        reason: String,
    },
}

/// A single offending metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Dotted path to the field (`insurance.provider`, `materials[2]`).
    /// Empty for the metadata object itself.
    pub field: String,
    /// The shape the schema declares.
    pub expected: String,
    /// Type and rendering of the value found.
    pub received: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = if self.field.is_empty() {
            "(root)"
        } else {
            self.field.as_str()
        };
        write!(
            f,
            "  {field}: expected {}, received {}",
            self.expected, self.received
        )
    }
}

/// All violations found in one metadata object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataViolations {
    vertical: Vertical,
    violations: Vec<FieldViolation>,
}

impl MetadataViolations {
    /// Vertical whose schema was applied.
    pub fn vertical(&self) -> Vertical {
        self.vertical
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Violation for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }

    pub fn into_inner(self) -> Vec<FieldViolation> {
        self.violations
    }
}

impl fmt::Display for MetadataViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} metadata failed validation:", self.vertical)?;
        for v in &self.violations {
            writeln!(f)?;
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MetadataViolations {}

/// Metadata that passed its vertical's schema, unknown fields included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedMetadata {
    vertical: Vertical,
    fields: Map<String, Value>,
}

impl ValidatedMetadata {
    pub fn vertical(&self) -> Vertical {
        self.vertical
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The metadata as a JSON object, ready to persist.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

struct CompiledSchema {
    vertical: Vertical,
    schema: Value,
    validator: Validator,
}

/// Compiled metadata schemas for every vertical.
///
/// `Send + Sync`; build once at startup and share.
pub struct MetadataValidator {
    /// `compiled[v.index()]` validates `v`.
    compiled: Vec<CompiledSchema>,
}

impl fmt::Debug for MetadataValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetadataValidator")
            .field(
                "verticals",
                &self.compiled.iter().map(|c| c.vertical).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl MetadataValidator {
    /// Compile the metadata schema of every vertical in `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidSchema`] for the first schema that does
    /// not compile.
    pub fn new(registry: &VerticalRegistry) -> Result<Self, SchemaError> {
        let mut compiled = Vec::with_capacity(VERTICAL_COUNT);
        for config in registry.iter() {
            let validator = jsonschema::options()
                .with_draft(Draft::Draft202012)
                .build(&config.metadata_schema)
                .map_err(|e| SchemaError::InvalidSchema {
                    vertical: config.vertical,
                    reason: e.to_string(),
                })?;
            compiled.push(CompiledSchema {
                vertical: config.vertical,
                schema: config.metadata_schema.clone(),
                validator,
            });
        }
        tracing::info!(schemas = compiled.len(), "compiled vertical metadata schemas");
        Ok(Self { compiled })
    }

    /// Validator over the builtin registry.
    ///
    /// # Errors
    ///
    /// See [`MetadataValidator::new`].
    pub fn builtin() -> Result<Self, SchemaError> {
        Self::new(builtin_registry())
    }

    /// Validate `metadata` for the vertical named by a free-text label.
    /// Unknown labels use the default vertical's schema.
    pub fn validate(
        &self,
        vertical: &str,
        metadata: &Value,
    ) -> Result<ValidatedMetadata, MetadataViolations> {
        self.validate_for(resolve_vertical_label(vertical), metadata)
    }

    /// Validate `metadata` for a canonical vertical.
    pub fn validate_for(
        &self,
        vertical: Vertical,
        metadata: &Value,
    ) -> Result<ValidatedMetadata, MetadataViolations> {
        let fields = match metadata {
            Value::Null => {
                return Ok(ValidatedMetadata {
                    vertical,
                    fields: Map::new(),
                })
            }
            Value::Object(fields) => fields,
            other => {
                return Err(MetadataViolations {
                    vertical,
                    violations: vec![FieldViolation {
                        field: String::new(),
                        expected: "object".to_string(),
                        received: describe_received(Some(other)),
                    }],
                })
            }
        };

        let compiled = &self.compiled[vertical.index()];
        let mut violations: Vec<FieldViolation> = Vec::new();
        for error in compiled.validator.iter_errors(metadata) {
            let instance_pointer = error.instance_path.to_string();
            let field = field_path(metadata, &instance_pointer);
            if violations.iter().any(|v| v.field == field) {
                continue;
            }
            let expected = describe_expected(&compiled.schema, &error.schema_path.to_string())
                .unwrap_or_else(|| error.to_string());
            let violation = FieldViolation {
                field,
                expected,
                received: describe_received(metadata.pointer(&instance_pointer)),
            };
            tracing::debug!(
                vertical = %vertical,
                field = %violation.field,
                expected = %violation.expected,
                "metadata field violation"
            );
            violations.push(violation);
        }

        if violations.is_empty() {
            Ok(ValidatedMetadata {
                vertical,
                fields: fields.clone(),
            })
        } else {
            Err(MetadataViolations {
                vertical,
                violations,
            })
        }
    }
}

/// `/insurance/provider` → `insurance.provider`, `/materials/2` → `materials[2]`.
///
/// A segment renders as an index only when it steps into an array of
/// `instance`; numeric object keys keep the dotted form.
fn field_path(instance: &Value, pointer: &str) -> String {
    let mut path = String::new();
    let mut current = Some(instance);
    for segment in pointer.split('/').skip(1) {
        let segment = segment.replace("~1", "/").replace("~0", "~");
        match current {
            Some(Value::Array(items)) => {
                path.push('[');
                path.push_str(&segment);
                path.push(']');
                current = segment.parse::<usize>().ok().and_then(|i| items.get(i));
            }
            other => {
                if !path.is_empty() {
                    path.push('.');
                }
                path.push_str(&segment);
                current = other.and_then(|value| value.get(segment.as_str()));
            }
        }
    }
    path
}

/// Expected shape, read from the schema keyword at `schema_pointer`.
fn describe_expected(schema: &Value, schema_pointer: &str) -> Option<String> {
    let keyword = schema_pointer.rsplit('/').next()?;
    let constraint = schema.pointer(schema_pointer)?;
    let description = match keyword {
        "enum" => {
            let options: Vec<String> = constraint
                .as_array()?
                .iter()
                .map(|o| match o {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            format!("one of {{{}}}", options.join(", "))
        }
        "type" => match constraint {
            Value::String(t) => t.clone(),
            Value::Array(types) => types
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" or "),
            _ => return None,
        },
        "minimum" => format!("number >= {constraint}"),
        "maximum" => format!("number <= {constraint}"),
        "minLength" => format!("string of at least {constraint} characters"),
        "maxLength" => format!("string of at most {constraint} characters"),
        other => format!("{other} {constraint}"),
    };
    Some(description)
}

fn describe_received(value: Option<&Value>) -> String {
    let Some(value) = value else {
        return "nothing".to_string();
    };
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    let mut rendered = value.to_string();
    if rendered.len() > MAX_RECEIVED_LEN {
        let mut cut = MAX_RECEIVED_LEN;
        while !rendered.is_char_boundary(cut) {
            cut -= 1;
        }
        rendered.truncate(cut);
        rendered.push('…');
    }
    format!("{kind} {rendered}")
}
