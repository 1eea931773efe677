//! End-to-end grammar scenarios through the public entry points.

use pretty_assertions::assert_eq;
use scc_ir_lexer::{ClassifierOptions, OpCode, OperationTable};
use scc_ir_parse::{parse, parse_str, ParseOptions, ProgramKind, Recovery, Severity};
use scc_lexer_core::{ConfigError, ReaderFeed, ScannerConfig};

fn outcome(source: &str, options: &ParseOptions) -> scc_ir_parse::ParseOutcome {
    match parse_str(source, options) {
        Ok(outcome) => outcome,
        Err(err) => panic!("bad test config: {err}"),
    }
}

fn rendered(source: &str, options: &ParseOptions) -> String {
    let mut out = Vec::new();
    match outcome(source, options).render(&mut out) {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(err) => panic!("render into a Vec failed: {err}"),
    }
}

#[test]
fn vertex_program_parses() {
    let result = outcome("program vertex\n", &ParseOptions::default());
    assert!(result.is_success());
    assert_eq!(result.program, Some(ProgramKind::Vertex));
    assert_eq!(result.diagnostic_count(), 0);
}

#[test]
fn ray_trace_is_not_a_program_type() {
    assert_eq!(
        rendered("program ray_trace\n", &ParseOptions::default()),
        "ERROR: Program type can only be `vertex`, `pixel`, or `compute`. Was given `ray_trace`.\n"
    );
}

#[test]
fn second_declaration_fails() {
    let result = outcome("program vertex\nprogram pixel\n", &ParseOptions::default());
    assert!(!result.is_success());
    assert_eq!(result.program, Some(ProgramKind::Vertex));
    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].severity, Severity::Error);
    assert_eq!(result.messages[0].message, "Cannot redefine program type!");
}

#[test]
fn syntax_errors_render_before_parser_errors() {
    let options = ParseOptions::default().with_recovery(Recovery::None);
    assert_eq!(
        rendered("program compute\n$\n", &options),
        "SYNTAX ERROR: Undecorated identifiers must start with a letter or underscore.\n\
         ERROR: Unexpected token.\n"
    );
}

#[test]
fn recovery_collapses_cascades() {
    let source = "program vertex = ( 1 , 2 )\n";
    let none = outcome(source, &ParseOptions::default().with_recovery(Recovery::None));
    let panic = outcome(source, &ParseOptions::default());
    assert_eq!(none.messages.len(), 7);
    assert_eq!(panic.messages.len(), 1);
    assert_eq!(
        panic.messages[0].message,
        "Program type must be specified on its own line."
    );
}

#[test]
fn declaration_with_trailing_comment() {
    let result = outcome("; shader\nprogram pixel ; fragment stage\n", &ParseOptions::default());
    assert!(result.is_success());
    assert_eq!(result.program, Some(ProgramKind::Pixel));
}

#[test]
fn other_statements_are_unexpected_for_now() {
    let options = ParseOptions::default().with_classifier(
        ClassifierOptions::default()
            .with_operations(OperationTable::new().with("add", OpCode(1))),
    );
    let result = outcome("program compute\ndef @main\nadd\n", &options);
    assert_eq!(result.program, Some(ProgramKind::Compute));
    assert_eq!(
        result
            .messages
            .iter()
            .map(|m| m.message.as_str())
            .collect::<Vec<_>>(),
        ["Unexpected token."]
    );
}

#[test]
fn parses_from_a_reader() {
    let feed = ReaderFeed::new("program pixel\n".as_bytes());
    let result = match parse(feed, &ParseOptions::default()) {
        Ok(outcome) => outcome,
        Err(err) => panic!("default config rejected: {err}"),
    };
    assert_eq!(result.program, Some(ProgramKind::Pixel));
}

#[test]
fn configuration_errors_are_returned() {
    let options = ParseOptions::default().with_scanner(ScannerConfig::default().with_capacity(0));
    assert!(matches!(
        parse_str("program vertex", &options),
        Err(ConfigError::ZeroCapacity)
    ));
}
