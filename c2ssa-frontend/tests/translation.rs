//! End-to-end translation tests: source text in, IR out

use c2ssa_common::Severity;
use c2ssa_frontend::ir::Constant;
use c2ssa_frontend::{Frontend, FunctionTable, TranslatorConfig};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn ir(source: &str) -> String {
    Frontend::translate_source(source, &TranslatorConfig::default())
        .unwrap()
        .function()
        .to_string()
}

#[test]
fn test_straight_line_ir() {
    let expected = "\
function main {
bb0 (entry):
  %0: number = const 5  ; 5
  %1: number = const 1  ; 1
  %2: number = add %0, %1  ; x += 1
}";
    assert_eq!(ir("x = 5; x += 1"), expected);
}

#[test]
fn test_conditional_ir() {
    let expected = "\
function main {
bb0 (entry):
  %0: any = undef c  ; c
  %1: any = undef $ternary_0  ; $ternary_0
  br %0, bb1, bb2
bb1 (join.then.1):  ; preds bb0
  %2: number = const 1  ; 1
  br bb3
bb2 (join.else.2):  ; preds bb0
  %3: number = const 2  ; 2
  br bb3
bb3 (join.merge.3):  ; preds bb1, bb2
  %4: number = phi [%2, bb1], [%3, bb2]  ; c ? 1 : 2
}";
    assert_eq!(ir("c ? 1 : 2"), expected);
}

#[test]
fn test_function_serializes_to_json() {
    let translation = Frontend::translate_source("y = 2 * 3", &TranslatorConfig::default()).unwrap();
    let json = serde_json::to_value(translation.function()).unwrap();

    assert_eq!(json["name"], "main");
    assert_eq!(json["values"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["values"][2]["name"], "2 * 3");
}

#[test]
fn test_diagnostics_do_not_stop_translation() {
    let config = TranslatorConfig::default().with_functions(["puts"]);
    let translation = Frontend::translate_source("a + 1; puts(\"hi\"); 1 = 2; b = 4; b", &config).unwrap();

    let severities: Vec<_> = translation.reporter.diagnostics().iter().map(|d| d.severity).collect();
    assert_eq!(severities, vec![Severity::Warn, Severity::Warn]);
    assert_eq!(translation.results.len(), 5);
    assert_eq!(translation.const_value(4), Some(Constant::Int(4)));
}

#[test]
fn test_diagnostic_positions_point_into_the_source() {
    let config = TranslatorConfig {
        filename: "input.c".to_string(),
        ..TranslatorConfig::default()
    };
    let translation = Frontend::translate_source("x = 1;\ny = nowhere", &config).unwrap();

    let diagnostic = &translation.reporter.diagnostics()[0];
    assert_eq!(diagnostic.span.start.filename, "input.c");
    assert_eq!(diagnostic.span.start.line, 2);
    assert_eq!(diagnostic.span.start.column, 5);
}

#[test]
fn test_units_share_a_function_table() {
    let functions: Arc<FunctionTable> = Arc::new(["f"].into_iter().collect());
    let config = TranslatorConfig::default();

    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["f(1)", "f(2)"]
            .into_iter()
            .map(|source| {
                let functions = Arc::clone(&functions);
                let config = &config;
                scope.spawn(move || {
                    let translation = Frontend::translate_with_table(source, config, functions).unwrap();
                    assert!(translation.reporter.diagnostics().is_empty());
                    translation.function().to_string()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(outputs.len(), 2);
    assert!(outputs[0].contains("@f"));
    assert!(outputs[1].contains("const 2"));
}
