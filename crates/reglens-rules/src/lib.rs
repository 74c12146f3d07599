//! Deterministic evidence-to-field mapping: a declared rule list scanned
//! over retrieved chunks, producing field decisions and an audit trail.

mod fields;
mod rules;

pub use fields::{FieldCode, Impact};
pub use rules::{Decision, MappingOutcome, Rule, RuleSet};
