//! CLI commands: `lex`, `parse`, and `check`.

use std::path::Path;

use rayon::prelude::*;

use gsc_diagnostic::{emit_terminal, Diagnostic, LineIndex};
use gsc_ir::{Dialect, SharedInterner, StmtKind, TokenKind};
use gsc_parse::ParsedUnit;

/// Options shared by all commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub dialect: Dialect,
    pub verbose: bool,
}

impl Options {
    /// Parse `--dialect=…` / `--verbose` flags; returns remaining paths.
    pub fn parse(args: &[String]) -> Result<(Options, Vec<String>), String> {
        let mut options = Options::default();
        let mut paths = Vec::new();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--dialect=") {
                options.dialect = match value {
                    "legacy" => Dialect::Legacy,
                    "extended" => Dialect::Extended,
                    other => return Err(format!("unknown dialect `{other}`")),
                };
            } else if arg == "--verbose" || arg == "-v" {
                options.verbose = true;
            } else if arg.starts_with('-') {
                return Err(format!("unknown option `{arg}`"));
            } else {
                paths.push(arg.clone());
            }
        }
        Ok((options, paths))
    }
}

fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(Path::new(path)).map_err(|e| format!("cannot read `{path}`: {e}"))
}

/// Collect every diagnostic of a parsed unit, lexical first.
fn diagnostics_of(unit: &ParsedUnit) -> Vec<Diagnostic> {
    unit.lex_errors
        .iter()
        .map(gsc_lexer::LexError::to_diagnostic)
        .chain(unit.errors.iter().map(gsc_parse::ParseError::to_diagnostic))
        .collect()
}

/// `gsc lex <file>` — tokenize and display the token stream.
pub fn lex_file(path: &str, options: &Options) -> i32 {
    let source = match read_source(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let interner = SharedInterner::new();
    let output = gsc_lexer::lex(&source, &interner);
    let index = LineIndex::new(&source);

    for token in output.tokens.iter() {
        let pos = index.line_col(token.span.start);
        let rendered = match token.kind {
            TokenKind::Ident(n)
            | TokenKind::String(n)
            | TokenKind::IString(n)
            | TokenKind::HashString(n)
            | TokenKind::AnimIdent(n)
            | TokenKind::Path(n)
            | TokenKind::MacroParams(n)
            | TokenKind::MacroBody(n) => {
                format!("{} {:?}", token.kind.display_name(), interner.lookup(n))
            }
            ref kind => kind.display_name().to_string(),
        };
        println!("{}:{}:{}  {rendered}  @ {}", path, pos.line, pos.col, token.span);
    }
    if options.verbose {
        println!("-- {} trivia items", output.trivia.len());
    }

    for error in &output.errors {
        eprint!("{}", emit_terminal(&error.to_diagnostic(), path, &source));
    }
    i32::from(!output.errors.is_empty())
}

/// `gsc parse <file>` — parse and display a tree summary.
pub fn parse_file(path: &str, options: &Options) -> i32 {
    let source = match read_source(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let interner = SharedInterner::new();
    let unit = gsc_parse::parse_source(&source, &interner, options.dialect);

    println!(
        "{path}: {} top-level statements, {}",
        unit.file.stmts.len(),
        summarize(&unit)
    );
    for &id in &unit.file.stmts {
        let stmt = unit.ast.stmt(id);
        println!("  {:?}", stmt);
    }

    for diag in diagnostics_of(&unit) {
        eprint!("{}", emit_terminal(&diag, path, &source));
    }
    i32::from(unit.has_errors())
}

fn summarize(unit: &ParsedUnit) -> String {
    let mut functions = 0usize;
    let mut classes = 0usize;
    let mut directives = 0usize;
    for &id in &unit.file.stmts {
        match unit.ast.stmt(id).kind {
            StmtKind::FunctionDef(_) => functions += 1,
            StmtKind::ClassDef(_) => classes += 1,
            StmtKind::Directive(_) => directives += 1,
            _ => {}
        }
    }
    format!("{functions} functions, {classes} classes, {directives} directives")
}

/// `gsc check <files…>` — parse every file, report all diagnostics.
///
/// Files parse in parallel: each parse owns its own token stream and tree,
/// sharing only the interner. The exit code is the number of failing files
/// capped at 1.
pub fn check_files(paths: &[String], options: &Options) -> i32 {
    let interner = SharedInterner::new();

    let results: Vec<Result<(String, String, Vec<Diagnostic>), String>> = paths
        .par_iter()
        .map(|path| match read_source(path) {
            Ok(source) => {
                let unit = gsc_parse::parse_source(&source, &interner, options.dialect);
                let diags = diagnostics_of(&unit);
                Ok((path.clone(), source, diags))
            }
            Err(message) => Err(message),
        })
        .collect();

    tracing::debug!(files = paths.len(), "parallel check complete");

    let mut failing = 0usize;
    for result in results {
        match result {
            Err(message) => {
                eprintln!("error: {message}");
                failing += 1;
            }
            Ok((path, _, diags)) if diags.is_empty() => {
                if options.verbose {
                    println!("{path}: ok");
                }
            }
            Ok((path, source, diags)) => {
                failing += 1;
                for diag in &diags {
                    eprint!("{}", emit_terminal(diag, &path, &source));
                }
                eprintln!("{path}: {} error(s)", diags.len());
            }
        }
    }

    if failing > 0 {
        eprintln!("{failing} of {} file(s) failed", paths.len());
        1
    } else {
        0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // tests use unwrap for brevity
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn options_default_to_extended() {
        let (options, paths) = Options::parse(&args(&["a.gsc", "b.gsc"])).unwrap();
        assert_eq!(options.dialect, Dialect::Extended);
        assert!(!options.verbose);
        assert_eq!(paths, vec!["a.gsc".to_string(), "b.gsc".to_string()]);
    }

    #[test]
    fn options_parse_dialect_and_verbose() {
        let (options, paths) =
            Options::parse(&args(&["--dialect=legacy", "-v", "x.gsc"])).unwrap();
        assert_eq!(options.dialect, Dialect::Legacy);
        assert!(options.verbose);
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn options_reject_unknown_flags() {
        assert!(Options::parse(&args(&["--dialect=bo9"])).is_err());
        assert!(Options::parse(&args(&["--frobnicate"])).is_err());
    }
}
