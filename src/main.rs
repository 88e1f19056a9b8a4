//! CLI tool to tokenize lol source files.

use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: lol-lex <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens  Print one token per line");
        eprintln!("  json    Print tokens as a JSON document");
        eprintln!("  check   Report every lexical error in the file(s)");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  lol-lex tokens main.lol");
        eprintln!("  lol-lex json main.lol");
        eprintln!("  lol-lex check src/*.lol");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if !matches!(command, "tokens" | "json" | "check") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => match lol_lexer::tokenize(&content) {
                Ok(tokens) => {
                    for token in &tokens {
                        println!("{token}");
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {}", e.render(&content));
                    had_error = true;
                }
            },
            "json" => match lol_lexer::tokenize_to_json(&content) {
                Ok(json) => println!("{json}"),
                Err(lol_lexer::Error::Lex(e)) => {
                    eprintln!("{path}: {}", e.render(&content));
                    had_error = true;
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            _ => {
                let (tokens, errors) = lol_lexer::tokenize_recovering(&content);
                if errors.is_empty() {
                    eprintln!("{path}: ok ({} token(s))", tokens.len());
                } else {
                    for e in &errors {
                        eprintln!("{path}: {}", e.render(&content));
                    }
                    had_error = true;
                }
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
