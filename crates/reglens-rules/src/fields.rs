use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed universe of report fields the rule layer can touch.
///
/// The mapper never emits a code outside this enumeration; fields without a
/// matching rule are simply absent from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldCode {
    F1,
    F2,
    F3,
    F4,
}

impl FieldCode {
    pub const ALL: [FieldCode; 4] = [FieldCode::F1, FieldCode::F2, FieldCode::F3, FieldCode::F4];

    /// Human-readable report field name.
    pub fn label(self) -> &'static str {
        match self {
            FieldCode::F1 => "Common Equity Tier 1 Capital",
            FieldCode::F2 => "Tier 1 Capital",
            FieldCode::F3 => "Total Capital",
            FieldCode::F4 => "Risk Weighted Assets",
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Direction a piece of evidence moves a report field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Increase,
    Decrease,
    NoChange,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Impact::Increase => "increase",
            Impact::Decrease => "decrease",
            Impact::NoChange => "no-change",
        };
        f.write_str(s)
    }
}
