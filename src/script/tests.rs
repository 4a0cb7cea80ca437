//! Tests for diff script parsing and validation.

use super::*;

fn parse_one(line: &str) -> std::result::Result<Command, DiffCommandsError> {
    DiffScript::parse([line]).map(|script| script.commands()[0])
}

fn kind_of(lines: &[&str]) -> ScriptErrorKind {
    DiffScript::parse(lines).unwrap_err().kind
}

/// Test that a single number collapses to a degenerate range.
#[test]
fn test_degenerate_range() {
    let command = parse_one("5c5").unwrap();

    assert_eq!(command.symbol, Symbol::Change);
    assert_eq!(command.source_range, LineRange::new(5, 5));
    assert_eq!(command.target_range, LineRange::new(5, 5));
}

/// Test that two numbers form an inclusive range.
#[test]
fn test_full_range() {
    let command = parse_one("5,7c5,7").unwrap();

    assert_eq!(command.source_range, LineRange::new(5, 7));
    assert_eq!(command.target_range, LineRange::new(5, 7));
}

/// Test every allowed component count per symbol.
#[test]
fn test_allowed_component_counts() {
    let valid = [
        ("10a11", Symbol::Append),
        ("10a11,12", Symbol::Append),
        ("4c4", Symbol::Change),
        ("4,6c4", Symbol::Change),
        ("4c4,9", Symbol::Change),
        ("4,6c4,9", Symbol::Change),
        ("3d2", Symbol::Delete),
        ("3,5d2", Symbol::Delete),
    ];

    for (line, symbol) in valid {
        let command = parse_one(line).unwrap_or_else(|e| panic!("{line} rejected: {e}"));
        assert_eq!(command.symbol, symbol, "{line}");
    }
}

/// Test that counts outside each symbol's bounds are rejected with the side.
#[test]
fn test_rejected_component_counts() {
    let cases = [
        ("10,11a12", Side::Source, 2, 1),
        ("10a11,12,13", Side::Target, 3, 2),
        ("3,5d2,4", Side::Target, 2, 1),
        ("1,2,3d0", Side::Source, 3, 2),
        ("1,2,3c1", Side::Source, 3, 2),
        ("1c1,2,3", Side::Target, 3, 2),
    ];

    for (line, side, found, max) in cases {
        assert_eq!(
            kind_of(&[line]),
            ScriptErrorKind::ArgumentCount { side, found, max },
            "{line}"
        );
    }
}

/// Test that lines without exactly one symbol character are rejected.
#[test]
fn test_symbol_count() {
    assert_eq!(kind_of(&["35"]), ScriptErrorKind::SymbolCount { found: 0 });
    assert_eq!(kind_of(&["3a4c5"]), ScriptErrorKind::SymbolCount { found: 2 });
    assert_eq!(kind_of(&["3aa4"]), ScriptErrorKind::SymbolCount { found: 2 });
    // A repeated symbol next to a different one is still too many
    assert_eq!(kind_of(&["3aa4c5"]), ScriptErrorKind::SymbolCount { found: 3 });
    assert_eq!(kind_of(&[""]), ScriptErrorKind::SymbolCount { found: 0 });
}

/// Test that spaces anywhere are rejected.
#[test]
fn test_embedded_space() {
    assert_eq!(kind_of(&["3 a4"]), ScriptErrorKind::EmbeddedSpace);
    assert_eq!(kind_of(&["3a4 "]), ScriptErrorKind::EmbeddedSpace);
}

/// Test that non-numeric components are rejected.
#[test]
fn test_non_numeric() {
    // `x` is not a symbol character, so this fails on the number
    assert_eq!(
        kind_of(&["xa4"]),
        ScriptErrorKind::NonNumeric {
            component: "x".to_string()
        }
    );
    assert_eq!(
        kind_of(&["3a4,y"]),
        ScriptErrorKind::NonNumeric {
            component: "y".to_string()
        }
    );
    assert_eq!(
        kind_of(&["3,c4"]),
        ScriptErrorKind::NonNumeric {
            component: String::new()
        }
    );
}

/// Test that a delete directly followed by a change of the next line is rejected.
#[test]
fn test_adjacent_delete_then_change() {
    let err = DiffScript::parse(["3d4", "4c5"]).unwrap_err();

    assert_eq!(
        err.kind,
        ScriptErrorKind::AdjacentDeleteChange {
            previous: Symbol::Delete
        }
    );
    assert_eq!(err.line_number, 2);
    assert_eq!(err.line, "4c5");
}

/// Test that a change directly followed by a delete of the next line is rejected.
#[test]
fn test_adjacent_change_then_delete() {
    let err = DiffScript::parse(["2,3c2", "4d2"]).unwrap_err();

    assert_eq!(
        err.kind,
        ScriptErrorKind::AdjacentDeleteChange {
            previous: Symbol::Change
        }
    );
}

/// Test that a one-line gap between a delete and a change is accepted.
#[test]
fn test_gap_between_delete_and_change() {
    let script = DiffScript::parse(["3d2", "5c6"]).unwrap();

    assert_eq!(script.len(), 2);
    assert_eq!(script.commands()[0].symbol, Symbol::Delete);
    assert_eq!(script.commands()[1].symbol, Symbol::Change);
}

/// Test that the gap rule does not excuse a delete with a bad offset.
#[test]
fn test_gap_with_bad_delete_offset() {
    let err = DiffScript::parse(["3d4", "5c6"]).unwrap_err();

    assert_eq!(
        err.kind,
        ScriptErrorKind::DeleteOffset {
            source_start: 3,
            target_start: 4
        }
    );
    assert_eq!(err.line_number, 1);
}

/// Test that contiguous commands of other symbol pairs are accepted.
#[test]
fn test_adjacent_other_pairs_allowed() {
    assert!(DiffScript::parse(["3c3", "4c4"]).is_ok());
    assert!(DiffScript::parse(["3a4", "4c6"]).is_ok());
    assert!(DiffScript::parse(["3d2", "4d3"]).is_ok());
}

/// Test the delete offset rule.
#[test]
fn test_delete_offset() {
    let script = DiffScript::parse(["3,5d2"]).unwrap();
    assert_eq!(script.commands()[0].source_range, LineRange::new(3, 5));
    assert_eq!(script.commands()[0].target_range, LineRange::single(2));

    assert_eq!(
        kind_of(&["3,5d3"]),
        ScriptErrorKind::DeleteOffset {
            source_start: 3,
            target_start: 3
        }
    );
    assert!(DiffScript::parse(["1,2d0"]).is_ok());
}

/// Test that the first failing line aborts the whole script.
#[test]
fn test_first_failure_wins() {
    let err = DiffScript::parse(["1a1", "2 a3", "xyz"]).unwrap_err();

    assert_eq!(err.line_number, 2);
    assert_eq!(err.kind, ScriptErrorKind::EmbeddedSpace);
}

/// Test that per-line errors are reported before cross-line errors.
#[test]
fn test_line_errors_before_cross_checks() {
    let err = DiffScript::parse(["3,5d3", "7a8,9,10"]).unwrap_err();

    assert_eq!(err.line_number, 2);
    assert!(matches!(err.kind, ScriptErrorKind::ArgumentCount { .. }));
}

/// Test that line terminators from a file are tolerated.
#[test]
fn test_terminators_stripped() {
    let script = DiffScript::parse(["3,5c3,4\n", "10a11,12\r\n"]).unwrap();

    assert_eq!(script.len(), 2);
    assert_eq!(script.commands()[1].target_range, LineRange::new(11, 12));
}

/// Test that an empty script is valid.
#[test]
fn test_empty_script() {
    let script = DiffScript::parse(Vec::<String>::new()).unwrap();
    assert!(script.is_empty());
}

/// Test parsing a whole script from text and rendering it back.
#[test]
fn test_parse_str_and_display() {
    let text = "1,2d0\n4,5c3,4\n10a11,12\n";
    let script = DiffScript::parse_str(text).unwrap();

    assert_eq!(script.len(), 3);
    assert_eq!(script.to_string(), "1,2d0\n4,5c3,4\n10a11,12");

    let symbols: Vec<Symbol> = script.iter().map(|c| c.symbol).collect();
    assert_eq!(symbols, vec![Symbol::Delete, Symbol::Change, Symbol::Append]);
}

/// Test the error message keeps the diagnostic context.
#[test]
fn test_error_message() {
    let err = DiffScript::parse(["3,5d3"]).unwrap_err();
    let msg = err.to_string();

    assert!(msg.starts_with("Cannot possibly be the commands for the diff of two files"));
    assert!(msg.contains("line 1"));
    assert!(msg.contains("3,5d3"));
}

/// Test the serialized shape of a script.
#[test]
fn test_serialize_script() {
    let script = DiffScript::parse(["5,7c5"]).unwrap();
    let json = serde_json::to_value(&script).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "commands": [{
                "symbol": "change",
                "source_range": {"start": 5, "end": 7},
                "target_range": {"start": 5, "end": 5}
            }]
        })
    );
}

#[test]
fn test_symbol_chars_round_trip() {
    for symbol in Symbol::ALL {
        assert_eq!(Symbol::from_char(symbol.as_char()), Some(symbol));
    }
    assert_eq!(Symbol::from_char('x'), None);
}

#[test]
fn test_line_range_len() {
    assert_eq!(LineRange::single(4).len(), 1);
    assert_eq!(LineRange::new(3, 5).len(), 3);
    assert!(LineRange::new(5, 3).is_empty());
}

/// Test that a delete synced to the largest line number is rejected, not overflowed.
#[test]
fn test_delete_offset_at_max_line_number() {
    let line = format!("1d{}", usize::MAX);

    assert_eq!(
        kind_of(&[line.as_str()]),
        ScriptErrorKind::DeleteOffset {
            source_start: 1,
            target_start: usize::MAX
        }
    );
}

/// Test that a source range ending at the largest line number is never adjacent.
#[test]
fn test_adjacency_at_max_line_number() {
    let change = format!("1,{}c1", usize::MAX);
    let script = DiffScript::parse([change.as_str(), "5d4"]).unwrap();
    assert_eq!(script.len(), 2);

    // Wrapping past the maximum must not reach a following start of 0
    let delete = format!("1,{}d0", usize::MAX);
    let script = DiffScript::parse([delete.as_str(), "0c1"]).unwrap();
    assert_eq!(script.commands()[1].source_range, LineRange::single(0));
}

/// Test that only a single trailing terminator is stripped.
#[test]
fn test_repeated_terminators_rejected() {
    assert_eq!(
        kind_of(&["3a4\n\n"]),
        ScriptErrorKind::NonNumeric {
            component: "4\n".to_string()
        }
    );
    assert_eq!(
        kind_of(&["3a4\r\r\n"]),
        ScriptErrorKind::NonNumeric {
            component: "4\r".to_string()
        }
    );
}
