use reglens_core::types::{Chunk, RetrievedChunk};
use reglens_rules::{FieldCode, Impact, RuleSet};

fn retrieved(id: usize, text: &str) -> RetrievedChunk {
    RetrievedChunk {
        chunk: Chunk {
            id,
            text: text.to_string(),
            source: "PRA Rulebook".to_string(),
        },
        distance: 0.1 * id as f32,
    }
}

#[test]
fn trigger_sets_three_capital_decisions() {
    let outcome =
        RuleSet::default().reason_and_map(&[retrieved(0, "CET1 includes ordinary share capital")]);

    assert_eq!(outcome.decisions.len(), 3);
    for field in [FieldCode::F1, FieldCode::F2, FieldCode::F3] {
        let decision = outcome.decisions.get(&field).expect("decision");
        assert_eq!(decision.impact, Impact::Increase);
        assert!(!decision.reason.is_empty());
    }
    assert_eq!(outcome.audit.len(), 1);
    assert_eq!(outcome.audit[0].id, 0);
}

#[test]
fn matching_is_case_insensitive() {
    let upper = RuleSet::default().reason_and_map(&[retrieved(0, "ORDINARY SHARE issuance")]);
    assert_eq!(upper.decisions.len(), 3);

    let mixed = RuleSet::default().reason_and_map(&[retrieved(0, "Cet1 instruments")]);
    assert_eq!(mixed.decisions.len(), 3);
}

#[test]
fn non_matching_chunks_leave_fields_absent() {
    let outcome = RuleSet::default().reason_and_map(&[retrieved(0, "liquidity coverage ratio")]);
    assert!(outcome.decisions.is_empty(), "untriggered fields are absent, not neutral");
    assert!(outcome.audit.is_empty());
}

#[test]
fn each_triggering_chunk_audits_once_but_decisions_do_not_accumulate() {
    let input = [
        retrieved(0, "ordinary share capital forms part of own funds"),
        retrieved(1, "instruments qualifying as cet1"),
    ];
    let outcome = RuleSet::default().reason_and_map(&input);

    assert_eq!(outcome.audit.len(), 2, "one audit entry per triggering chunk");
    assert_eq!(outcome.decisions.len(), 3, "decisions map holds one entry per field");

    let ids: Vec<usize> = outcome.audit.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![0, 1], "audit preserves scan order");
}

#[test]
fn field_universe_is_closed_and_f4_never_triggers() {
    let input = [
        retrieved(0, "ordinary share capital"),
        retrieved(1, "risk weighted assets increased sharply"),
    ];
    let outcome = RuleSet::default().reason_and_map(&input);

    assert!(outcome.decisions.keys().all(|f| FieldCode::ALL.contains(f)));
    assert!(
        !outcome.decisions.contains_key(&FieldCode::F4),
        "no rule targets Risk Weighted Assets"
    );
}

#[test]
fn mapping_is_deterministic() {
    let input = [retrieved(0, "cet1 capital"), retrieved(1, "ordinary share issuance")];
    let a = RuleSet::default().reason_and_map(&input);
    let b = RuleSet::default().reason_and_map(&input);
    assert_eq!(a.decisions, b.decisions);
    assert_eq!(a.audit, b.audit);
}

#[test]
fn an_empty_rule_set_maps_nothing() {
    let outcome = RuleSet::new(Vec::new()).reason_and_map(&[retrieved(0, "cet1 capital")]);
    assert!(outcome.decisions.is_empty());
    assert!(outcome.audit.is_empty());
}
