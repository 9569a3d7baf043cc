//! GSC front-end CLI.

use gscc::commands::{check_files, lex_file, parse_file, Options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    let code = match command {
        "lex" | "parse" | "check" => {
            let (options, paths) = match Options::parse(&args[2..]) {
                Ok(parsed) => parsed,
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(2);
                }
            };
            if paths.is_empty() {
                eprintln!("Usage: gsc {command} <file.gsc>... [--dialect=legacy|extended]");
                std::process::exit(1);
            }
            match command {
                "lex" => paths.iter().map(|p| lex_file(p, &options)).max().unwrap_or(0),
                "parse" => paths
                    .iter()
                    .map(|p| parse_file(p, &options))
                    .max()
                    .unwrap_or(0),
                _ => check_files(&paths, &options),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("gsc front-end {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            // A bare `.gsc` path is shorthand for `check`.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("gsc"))
            {
                check_files(&[command.to_string()], &Options::default())
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                2
            }
        }
    };

    std::process::exit(code);
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}

fn print_usage() {
    println!("GSC front-end");
    println!();
    println!("Usage: gsc <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <files...>     Parse files, report all diagnostics");
    println!("  parse <file.gsc>     Parse and display the syntax tree");
    println!("  lex <file.gsc>       Tokenize and display the token stream");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --dialect=<name>    Language profile: legacy, extended (default)");
    println!("  --verbose, -v       Show per-file status and trivia counts");
    println!();
    println!("Examples:");
    println!("  gsc check scripts/*.gsc");
    println!("  gsc check zm_tower.gsc --dialect=legacy");
    println!("  gsc parse _util.gsc");
}
