//! End-to-end tests for the Ember front end: source in, canonical rendering
//! and diagnostics out.

use ember::parser::{self, Program};

fn parse_clean(source: &str) -> Program {
    let (program, errors) = parser::parse(source);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    program
}

#[test]
fn test_program_rendering() {
    let source = "let five = 5;\n\
                  let add = fn(x, y) { x + y; };\n\
                  let result = add(five, ten);\n\
                  if (5 < 10) { return true; } else { return false; }";
    let program = parse_clean(source);

    let expected = "let five = 5;\n\
                    let add = fn(x,y) { (x + y) };\n\
                    let result = add(five,ten);\n\
                    if ((5 < 10)) { return true; } else { return false; }\n";
    assert_eq!(program.to_string(), expected);
}

#[test]
fn test_rendering_is_a_fixed_point() {
    let sources = [
        "let x = 1 + 2 * 3;",
        "-1 * 2",
        "!(true == true)",
        "if (x < y) { x } else { y }",
        "fn(a, b) { if (a > b) { a } else { b } }(3, 4)",
        "let noop = fn() { };",
        "add(1)(2)(3)",
        "return 1 + add(2, 3);",
    ];

    for source in sources {
        let once = parse_clean(source).to_string();
        let twice = parse_clean(&once).to_string();
        assert_eq!(once, twice, "source: {}", source);
    }
}

#[test]
fn test_reparsed_rendering_is_structurally_equal() {
    let sources = [
        "a + b * c + d / e - f",
        "((1 + (2 + 3)) + 4)",
        "if ((x)) { ((y)) }",
        "fn(x) { return x; }(fn(y) { y }(1))",
    ];

    for source in sources {
        let program = parse_clean(source);
        let reparsed = parse_clean(&program.to_string());
        assert_eq!(program, reparsed, "source: {}", source);
    }
}

#[test]
fn test_grouping_parens_vanish_structurally() {
    assert_eq!(parse_clean("(((x)))"), parse_clean("x"));
    assert_eq!(parse_clean("(1 + 2) * 3"), parse_clean("((1 + 2) * 3)"));
}

#[test]
fn test_diagnostics_are_ordered_and_positioned() {
    let source = "let = 1;\nlet y 2;\nlet z = 3;";
    let (program, errors) = parser::parse(source);

    assert_eq!(errors.len(), 2);
    assert!(errors[0].to_string().starts_with("Parse error at line 1"));
    assert!(errors[1].to_string().starts_with("Parse error at line 2"));

    // The well-formed statement still comes through.
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].to_string(), "let z = 3;");
}

#[test]
fn test_parse_never_panics_on_garbage() {
    let sources = [
        "",
        ";;;",
        "@@@@",
        "let let let",
        "fn(,) {}",
        "if { }",
        "(((((",
        ")))))",
        "add(1, 2",
        "99999999999999999999999999",
        "} else {",
    ];
    for source in sources {
        // Must complete and terminate; diagnostics content varies.
        let (_, _) = parser::parse(source);
    }
}

#[test]
fn test_semicolons_terminate_rather_than_separate() {
    let (program, errors) = parser::parse("x; y; z");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 3);

    // A lone semicolon has no statement to terminate.
    let (program, errors) = parser::parse(";");
    assert!(program.statements.is_empty());
    assert_eq!(errors.len(), 1);
}
