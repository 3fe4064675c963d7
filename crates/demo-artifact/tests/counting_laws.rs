use demo_artifact::{Cell, CellKind, CellSelector, NotebookDocument};
use proptest::prelude::*;

fn cell_kind() -> impl Strategy<Value = CellKind> {
    prop_oneof![
        Just(CellKind::Code),
        Just(CellKind::Markdown),
        Just(CellKind::Raw),
        "[a-z]{1,8}".prop_map(|tag| CellKind::from_tag(Some(&tag))),
        Just(CellKind::Untyped),
    ]
}

fn document() -> impl Strategy<Value = NotebookDocument> {
    proptest::collection::vec(cell_kind(), 0..64)
        .prop_map(|kinds| NotebookDocument::new(kinds.into_iter().map(Cell::new).collect()))
}

proptest! {
    #[test]
    fn prop_any_counts_every_cell(doc in document()) {
        prop_assert_eq!(doc.count(CellSelector::Any), doc.len());
    }

    #[test]
    fn prop_cell_types_partition(doc in document()) {
        let code = doc.count(CellSelector::Code);
        let markdown = doc.count(CellSelector::Markdown);
        let rest = doc.count_where(|c| !matches!(c.kind(), CellKind::Code | CellKind::Markdown));

        prop_assert_eq!(code + markdown + rest, doc.len());
        prop_assert_eq!(doc.tally().total(), doc.len());
        prop_assert_eq!(doc.tally().code, code);
        prop_assert_eq!(doc.tally().markdown, markdown);
    }

    #[test]
    fn prop_counts_bounded_and_stable(doc in document()) {
        for selector in CellSelector::ALL {
            let first = doc.count(selector);
            prop_assert!(first <= doc.len());
            prop_assert_eq!(first, doc.count(selector));
        }
    }

    #[test]
    fn prop_parsed_counts_match_source(tags in proptest::collection::vec(
        prop_oneof![Just("code"), Just("markdown"), Just("raw")], 0..32)
    ) {
        let cells: Vec<_> = tags.iter().map(|t| serde_json::json!({ "cell_type": t })).collect();
        let text = serde_json::json!({ "cells": cells }).to_string();
        let doc: NotebookDocument = text.parse().unwrap();

        let expected_code = tags.iter().filter(|t| **t == "code").count();
        prop_assert_eq!(doc.count(CellSelector::Code), expected_code);
        prop_assert_eq!(doc.len(), tags.len());
    }
}
