use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use reglens_core::types::{Chunk, RetrievedChunk};

use crate::fields::{FieldCode, Impact};

/// A field-level outcome with its rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub impact: Impact,
    pub reason: String,
}

/// A trigger-to-effects record. Triggers are substrings matched against the
/// lowercased chunk text; on a match every effect is applied in declared
/// order.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub effects: &'static [(FieldCode, Impact, &'static str)],
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

const SHARE_ISSUANCE: Rule = Rule {
    name: "share-issuance",
    triggers: &["ordinary share", "cet1"],
    effects: &[
        (
            FieldCode::F1,
            Impact::Increase,
            "Ordinary shares contribute to CET1 capital.",
        ),
        (
            FieldCode::F2,
            Impact::Increase,
            "Tier 1 capital includes CET1 capital.",
        ),
        (
            FieldCode::F3,
            Impact::Increase,
            "Total capital includes Tier 1 capital.",
        ),
    ],
};

/// Decisions keyed by field plus the chunks that produced them.
#[derive(Debug, Clone, Default)]
pub struct MappingOutcome {
    pub decisions: BTreeMap<FieldCode, Decision>,
    pub audit: Vec<Chunk>,
}

/// Ordered rule list evaluated over retrieved evidence.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![SHARE_ISSUANCE],
        }
    }
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Scans retrieved chunks in ranked order and maps matches onto fields.
    ///
    /// A later match overwrites an earlier decision for the same field, and
    /// every (chunk, rule) match appends the chunk to the audit trail, so the
    /// trail can hold more entries than the decisions map. No rule ever
    /// removes a decision. Pure and deterministic.
    pub fn reason_and_map(&self, retrieved: &[RetrievedChunk]) -> MappingOutcome {
        let mut outcome = MappingOutcome::default();
        for item in retrieved {
            let lowered = item.chunk.text.to_lowercase();
            for rule in &self.rules {
                if !rule.matches(&lowered) {
                    continue;
                }
                for &(field, impact, reason) in rule.effects {
                    outcome.decisions.insert(
                        field,
                        Decision {
                            impact,
                            reason: reason.to_string(),
                        },
                    );
                }
                outcome.audit.push(item.chunk.clone());
                tracing::debug!(rule = rule.name, chunk = item.chunk.id, "rule matched");
            }
        }
        outcome
    }
}
