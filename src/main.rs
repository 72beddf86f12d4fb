// Ember: parser front end for a small expression-oriented language

mod parser;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1) {
        Some(path) => run_file(path),
        None => run_repl(),
    }
}

/// Parse a source file, print the canonical rendering, and report
/// diagnostics on stderr. Exits non-zero when any diagnostic was produced.
fn run_file(path: &str) -> ExitCode {
    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        eprintln!("Usage: ember [file.em]");
        return ExitCode::FAILURE;
    }

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read '{}': {}", path, error);
            return ExitCode::FAILURE;
        }
    };

    let (program, errors) = parser::parse(&source);
    print!("{}", program);

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        for error in &errors {
            eprintln!("{}", error);
        }
        ExitCode::FAILURE
    }
}

/// Line-oriented REPL: each line is parsed as a complete program and echoed
/// back in canonical form, or its diagnostics are printed.
fn run_repl() -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(error) => {
            eprintln!("Error: could not start line editor: {}", error);
            return ExitCode::FAILURE;
        }
    };

    println!("Ember parser. Enter statements, Ctrl-D to exit.");
    loop {
        match editor.readline(">> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                let (program, errors) = parser::parse(&line);
                for error in &errors {
                    println!("{}", error);
                }
                print!("{}", program);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {}", error);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
