//! Structured field types shared by both logger shapes.

use std::collections::BTreeMap;

/// Structured fields attached to a wrapped logger.
pub type FieldSet = BTreeMap<Box<str>, serde_json::Value>;

/// Value assigned to the trailing key of an odd-length argument sequence.
pub const UNKNOWN_VALUE: &str = "<unknown>";

/// Field carrying the full name of a named sub-logger.
pub const SUBSYSTEM_NAME_FIELD: &str = "subsystem_name";
