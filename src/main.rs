use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use transpiler::{
    display_error,
    lexer::lexer::{tokenize_with, LexerConfig},
    parser::parser::parse,
};

/// Tokenizes and parses a source file, printing the syntax tree as JSON.
#[derive(Parser)]
#[command(name = "transpiler")]
#[command(version = "0.1.0")]
struct Cli {
    /// Source file to parse
    #[arg(default_value = "demos/example.nim")]
    path: PathBuf,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Reject characters outside the token lexicon
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    let file = cli.path.display().to_string();
    let config = LexerConfig { strict: cli.strict };

    let source = match read_to_string(&cli.path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", file, error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize_with(&source, config) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &file);
            process::exit(1);
        }
    };

    eprintln!("Tokenized in {:?}", start.elapsed());

    if cli.tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return;
    }

    let parse_start = Instant::now();

    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, &file);
            process::exit(1);
        }
    };

    eprintln!("Parsed in {:?}", parse_start.elapsed());

    match serde_json::to_string_pretty(&program) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("Error: failed to serialize syntax tree: {}", error);
            process::exit(1);
        }
    }

    eprintln!("Total time: {:?}", start.elapsed());
}
