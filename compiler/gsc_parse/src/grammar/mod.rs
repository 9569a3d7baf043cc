//! Grammar productions.
//!
//! - `directive`: `#`-directive recognition (no expansion)
//! - `expr`: precedence climbing and the ambiguity choice points
//! - `item`: function and class definitions, parameter lists
//! - `stmt`: statement forms and block parsing

mod directive;
mod expr;
mod item;
mod stmt;

use gsc_ir::{SourceFile, Span, Stmt, StmtId, StmtKind, TokenKind};

use crate::recovery;
use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// Top-level driver: repeated statements until EOF.
    pub(crate) fn parse_source_file(mut self) -> ParseResult {
        let mut stmts = Vec::new();

        while !self.is_at_end() {
            stmts.push(self.statement_or_recover(false));
        }

        let end = self.current_span().start;
        ParseResult {
            file: SourceFile {
                stmts,
                span: Span::new(0, end),
            },
            ast: self.ast,
            errors: self.errors,
        }
    }

    /// Parse one statement; on failure, report, discard tokens to the next
    /// statement boundary, and return an error-marker node covering the
    /// discarded range.
    ///
    /// `in_block` controls the treatment of an unconsumed `}`: inside a
    /// block it closes the block, at top level it is stray and gets skipped
    /// so the driver always makes progress.
    pub(crate) fn statement_or_recover(&mut self, in_block: bool) -> StmtId {
        let start = self.current_span().start;
        let before = self.cursor.position();

        match self.parse_statement() {
            Ok(id) => id,
            Err(error) => {
                self.report(error);
                let mut end = recovery::synchronize_statement(&mut self.cursor);
                if self.cursor.position() == before && !self.is_at_end() {
                    let stalled_on_brace = self.current_tag() == TokenKind::TAG_RBRACE;
                    if !in_block || !stalled_on_brace {
                        // No progress and nothing upstream will consume the
                        // offending token: take it into the error range.
                        end = self.current_span().end;
                        self.advance();
                    }
                }
                self.ast
                    .alloc_stmt(Stmt::new(StmtKind::Error, Span::new(start, end.max(start))))
            }
        }
    }
}
