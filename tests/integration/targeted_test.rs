//! Targeted removal through the library API.

use mediastrip::remove_blocks_at;

use crate::helpers::load_fixture;

#[test]
fn concrete_three_line_scenario() {
    let outcome = remove_blocks_at(".a{}\n@media (max-width:400px){\n.b{color:red}\n}\n.c{}", &[2]);
    assert_eq!(outcome.content, ".a{}\n.c{}");
}

#[test]
fn removes_only_requested_blocks() {
    let fixture = load_fixture("modal-drawer.css");
    let outcome = remove_blocks_at(&fixture, &[6, 16]);

    let spans: Vec<String> = outcome.located.iter().map(|b| b.span.to_string()).collect();
    assert_eq!(spans, vec!["6-10", "16-23"]);
    assert_eq!(outcome.lines_after, outcome.lines_before - 13);
    assert!(outcome.content.contains("@media (min-width: 960px)"));
    assert!(!outcome.content.contains("@media (max-width: 640px)"));
    assert!(!outcome.content.contains("@media (max-width: 400px)"));
}

#[test]
fn nested_block_closes_at_its_own_brace() {
    let fixture = load_fixture("modal-drawer.css");
    let outcome = remove_blocks_at(&fixture, &[29]);

    assert_eq!(outcome.located[0].span.to_string(), "29-33");
    // The enclosing @supports keeps its closing brace.
    assert!(outcome.content.contains("    display: grid;\n  }\n}\n"));
}

#[test]
fn line_count_matches_deletion_set() {
    let fixture = load_fixture("modal-drawer.css");
    for lines in [vec![6usize], vec![6, 6], vec![6, 7, 8], vec![16, 29], vec![1], vec![40]] {
        let outcome = remove_blocks_at(&fixture, &lines);
        let marked: std::collections::BTreeSet<usize> = outcome
            .located
            .iter()
            .flat_map(|b| b.span.start..=b.span.end)
            .collect();
        assert_eq!(
            outcome.lines_after,
            outcome.lines_before - marked.len(),
            "lines {:?}",
            lines
        );
    }
}

#[test]
fn sheet_without_media_is_returned_unchanged() {
    let tokens = load_fixture("tokens.css");
    let line_count = tokens.split('\n').count();

    for lines in [vec![1usize], vec![2, 5], vec![line_count], vec![1, line_count + 1]] {
        let outcome = remove_blocks_at(&tokens, &lines);
        assert_eq!(outcome.content, tokens, "lines {:?}", lines);
        assert!(outcome.located.is_empty());
        assert_eq!(outcome.removed_lines(), 0);
    }
}

#[test]
fn empty_request_leaves_sheet_unchanged() {
    let fixture = load_fixture("modal-drawer.css");
    let outcome = remove_blocks_at(&fixture, &[]);
    assert_eq!(outcome.content, fixture);
}
