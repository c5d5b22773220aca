//! # vertex-schema: Record Metadata Validation
//!
//! Bookings, calls, and catalogue items carry a free-form `metadata` object
//! whose shape depends on the tenant's vertical (a garage records a
//! `license_plate`, a practice records `urgency`). This crate validates that
//! object against the vertical's JSON Schema before the record is written.
//!
//! ## Validation Policy
//!
//! - Every declared field is optional; `null` metadata is an empty object.
//! - Declared fields must match their declared shape.
//! - Undeclared fields pass through untouched.
//! - A mismatch yields one [`FieldViolation`] per offending field. Malformed
//!   input never panics and never surfaces as a schema error.
//!
//! ## Crate Policy
//!
//! - Schemas are compiled once, when [`MetadataValidator`] is built. A schema
//!   that fails to compile is a [`SchemaError`] and must stop startup.

pub mod validate;

pub use validate::{
    FieldViolation, MetadataValidator, MetadataViolations, SchemaError, ValidatedMetadata,
};
