//! Lexer for GSC.
//!
//! Converts raw source text into a [`TokenList`] plus a [`TriviaList`]
//! (comments, dev blocks, doc comments, whitespace) and a list of
//! [`LexError`]s. Nothing downstream depends on lexer internals beyond this
//! output contract.
//!
//! Keywords are not recognized here: `if`, `self`, `thread` lex as plain
//! identifiers and the parser assigns roles positionally. The token spans
//! and trivia spans together tile the entire input.

mod cursor;
mod error;
mod scanner;
mod source_buffer;

pub use error::LexError;
pub use source_buffer::SourceBuffer;

use gsc_ir::{Span, StringInterner, Token, TokenKind, TokenList, Trivia, TriviaList};

use crate::scanner::{Scanned, Scanner};

/// Everything the lexer produces for one source unit.
#[derive(Debug)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub trivia: TriviaList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex one source unit.
///
/// Always returns a terminated token list (last token is `Eof`), no matter
/// how malformed the input: every lexical failure is reported once and
/// scanning resumes.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let buffer = SourceBuffer::new(source);
    let mut scanner = Scanner::new(buffer.cursor(), interner);

    // Average GSC token density is roughly one token per 4 bytes.
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);
    let mut trivia = TriviaList::new();

    loop {
        match scanner.next() {
            Scanned::Token(kind, span) => tokens.push(Token::new(kind, span)),
            Scanned::Trivia(kind, span) => trivia.push(Trivia::new(kind, span)),
            Scanned::Eof(pos) => {
                tokens.push(Token::new(TokenKind::Eof, Span::point(pos)));
                break;
            }
        }
    }

    LexOutput {
        tokens,
        trivia,
        errors: scanner.into_errors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsc_diagnostic::ErrorCode;
    use gsc_ir::TriviaKind;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> (Vec<TokenKind>, StringInterner) {
        let interner = StringInterner::new();
        let out = lex(source, &interner);
        assert!(
            !out.has_errors(),
            "unexpected lex errors for {source:?}: {:?}",
            out.errors
        );
        let kinds = out.tokens.iter().map(|t| t.kind).collect();
        (kinds, interner)
    }

    fn lex_all(source: &str) -> (LexOutput, StringInterner) {
        let interner = StringInterner::new();
        let out = lex(source, &interner);
        (out, interner)
    }

    #[test]
    fn empty_input_is_just_eof() {
        let (kinds, _) = kinds("");
        assert_eq!(kinds, vec![TokenKind::Eof]);
    }

    #[test]
    fn identifiers_with_dollar() {
        let (out, interner) = lex_all("foo _bar $baz a1$_");
        let names: Vec<&str> = out
            .tokens
            .iter()
            .filter_map(|t| match t.kind {
                TokenKind::Ident(n) => Some(interner.lookup(n)),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["foo", "_bar", "$baz", "a1$_"]);
    }

    #[test]
    fn keywords_lex_as_identifiers() {
        let (toks, _) = kinds("if self thread class");
        // Four identifiers plus EOF; no keyword token kinds exist.
        assert_eq!(toks.len(), 5);
        assert!(toks[..4]
            .iter()
            .all(|k| matches!(k, TokenKind::Ident(_))));
    }

    #[test]
    fn numbers() {
        let (toks, _) = kinds("42 0x1F 3.14 1. 2e3 2.5e-8 1e");
        assert_eq!(toks[0], TokenKind::Int(42));
        assert_eq!(toks[1], TokenKind::Int(0x1F));
        assert_eq!(toks[2], TokenKind::Float(3.14f64.to_bits()));
        assert_eq!(toks[3], TokenKind::Float(1.0f64.to_bits()));
        assert_eq!(toks[4], TokenKind::Float(2e3f64.to_bits()));
        assert_eq!(toks[5], TokenKind::Float(2.5e-8f64.to_bits()));
        // `1e` is the number 1 followed by the identifier `e`.
        assert_eq!(toks[6], TokenKind::Int(1));
        assert!(matches!(toks[7], TokenKind::Ident(_)));
    }

    #[test]
    fn hex_without_digits_is_an_error() {
        let (out, _) = lex_all("0x;");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].code, ErrorCode::E0003);
    }

    #[test]
    fn string_flavors() {
        let (out, interner) = lex_all(r#""plain" &"localized" #"hashed""#);
        let t = out.tokens.as_slice();
        match (t[0].kind, t[1].kind, t[2].kind) {
            (TokenKind::String(a), TokenKind::IString(b), TokenKind::HashString(c)) => {
                assert_eq!(interner.lookup(a), "plain");
                assert_eq!(interner.lookup(b), "localized");
                assert_eq!(interner.lookup(c), "hashed");
            }
            other => panic!("wrong kinds: {other:?}"),
        }
        // Spans include the prefixes.
        assert_eq!(t[1].span, gsc_ir::Span::new(8, 20));
    }

    #[test]
    fn string_escapes_valid() {
        let (out, interner) = lex_all(r#""a\t\n\r\\\"b""#);
        assert!(!out.has_errors());
        match out.tokens[0].kind {
            TokenKind::String(n) => assert_eq!(interner.lookup(n), r#"a\t\n\r\\\"b"#),
            ref k => panic!("wrong kind: {k:?}"),
        }
    }

    #[test]
    fn string_invalid_escape_reports_once_and_continues() {
        let (out, _) = lex_all(r#""a\qb" x"#);
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].code, ErrorCode::E0004);
        // The string token and following identifier both survive.
        assert!(matches!(out.tokens[0].kind, TokenKind::String(_)));
        assert!(matches!(out.tokens[1].kind, TokenKind::Ident(_)));
    }

    #[test]
    fn unterminated_string_at_newline() {
        let (out, _) = lex_all("\"abc\nnext");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].code, ErrorCode::E0001);
        assert!(matches!(out.tokens[0].kind, TokenKind::String(_)));
        // Lexing resumed after the newline.
        assert!(matches!(out.tokens[1].kind, TokenKind::Ident(_)));
    }

    #[test]
    fn anim_identifier_requires_adjacency() {
        let (out, interner) = lex_all("%run %  x");
        match out.tokens[0].kind {
            TokenKind::AnimIdent(n) => assert_eq!(interner.lookup(n), "run"),
            ref k => panic!("wrong kind: {k:?}"),
        }
        // `%` with a gap is the modulo operator.
        assert_eq!(out.tokens[1].kind, TokenKind::Percent);
    }

    #[test]
    fn animtree_literal() {
        let (toks, _) = kinds("#animtree");
        assert_eq!(toks[0], TokenKind::AnimTree);
    }

    #[test]
    fn comments_and_dev_blocks_are_trivia() {
        let (out, _) = lex_all("a // line\nb /* block */ c /# dev #/ d /@ doc @/ e");
        let trivia_kinds: Vec<TriviaKind> = out
            .trivia
            .iter()
            .filter(|t| t.is_comment())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            trivia_kinds,
            vec![
                TriviaKind::LineComment,
                TriviaKind::BlockComment,
                TriviaKind::DevBlock,
                TriviaKind::DocComment
            ]
        );
        // Five identifiers + EOF survive as tokens.
        assert_eq!(out.tokens.len(), 6);
    }

    #[test]
    fn block_comment_is_non_nesting() {
        // Body ends at the first `*/`; the rest lexes as tokens.
        let (out, _) = lex_all("/* a /* b */ c */");
        assert!(!out.has_errors());
        assert!(matches!(out.tokens[0].kind, TokenKind::Ident(_))); // c
        assert_eq!(out.tokens[1].kind, TokenKind::Star);
        assert_eq!(out.tokens[2].kind, TokenKind::Slash);
    }

    #[test]
    fn unterminated_regions_report() {
        for (source, code) in [
            ("/* open", ErrorCode::E0005),
            ("/# open", ErrorCode::E0006),
            ("/@ open", ErrorCode::E0007),
        ] {
            let (out, _) = lex_all(source);
            assert_eq!(out.errors.len(), 1, "for {source:?}");
            assert_eq!(out.errors[0].code, code, "for {source:?}");
            // The whole rest of the input became trivia.
            assert_eq!(out.tokens.len(), 1); // just EOF
        }
    }

    #[test]
    fn directive_tokens() {
        let (toks, _) = kinds("#if #elif #else #endif #namespace #precache #using_animtree");
        assert_eq!(
            &toks[..7],
            &[
                TokenKind::HashIf,
                TokenKind::HashElif,
                TokenKind::HashElse,
                TokenKind::HashEndif,
                TokenKind::HashNamespace,
                TokenKind::HashPrecache,
                TokenKind::HashUsingAnimtree,
            ]
        );
    }

    #[test]
    fn unknown_directive_reports() {
        let (out, _) = lex_all("#bogus x");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].code, ErrorCode::E0008);
        assert!(matches!(out.tokens[0].kind, TokenKind::Ident(_)));
    }

    #[test]
    fn using_path_capture() {
        let (out, interner) = lex_all("#using scripts\\shared\\util_shared;");
        assert!(!out.has_errors());
        assert_eq!(out.tokens[0].kind, TokenKind::HashUsing);
        match out.tokens[1].kind {
            TokenKind::Path(p) => {
                assert_eq!(interner.lookup(p), "scripts\\shared\\util_shared");
            }
            ref k => panic!("wrong kind: {k:?}"),
        }
        assert_eq!(out.tokens[2].kind, TokenKind::Semicolon);
    }

    #[test]
    fn insert_path_stops_at_whitespace() {
        let (out, interner) = lex_all("#insert a/b.gsh ;");
        match out.tokens[1].kind {
            TokenKind::Path(p) => assert_eq!(interner.lookup(p), "a/b.gsh"),
            ref k => panic!("wrong kind: {k:?}"),
        }
    }

    #[test]
    fn define_with_params_and_body() {
        let (out, interner) = lex_all("#define FOO(x) (x)+1\nnext;");
        assert!(!out.has_errors());
        let t = out.tokens.as_slice();
        assert_eq!(t[0].kind, TokenKind::HashDefine);
        assert!(matches!(t[1].kind, TokenKind::Ident(_)));
        match (t[2].kind, t[3].kind) {
            (TokenKind::MacroParams(p), TokenKind::MacroBody(b)) => {
                assert_eq!(interner.lookup(p), "x");
                assert_eq!(interner.lookup(b), "(x)+1");
            }
            other => panic!("wrong kinds: {other:?}"),
        }
        // Normal lexing resumes on the next line.
        assert!(matches!(t[4].kind, TokenKind::Ident(_)));
        assert_eq!(t[5].kind, TokenKind::Semicolon);
    }

    #[test]
    fn define_without_params() {
        let (out, interner) = lex_all("#define MAX_CLIENTS 18\n");
        let t = out.tokens.as_slice();
        assert_eq!(t[0].kind, TokenKind::HashDefine);
        assert!(matches!(t[1].kind, TokenKind::Ident(_)));
        match t[2].kind {
            TokenKind::MacroBody(b) => assert_eq!(interner.lookup(b), "18"),
            ref k => panic!("wrong kind: {k:?}"),
        }
    }

    #[test]
    fn define_gap_before_paren_means_body() {
        // With a gap, the parens belong to the raw body, not the params.
        let (out, interner) = lex_all("#define FOO (x)+1\n");
        let t = out.tokens.as_slice();
        match t[2].kind {
            TokenKind::MacroBody(b) => assert_eq!(interner.lookup(b), "(x)+1"),
            ref k => panic!("wrong kind: {k:?}"),
        }
    }

    #[test]
    fn define_body_line_continuation() {
        let (out, interner) = lex_all("#define M a \\\n  b\nafter");
        let t = out.tokens.as_slice();
        match t[2].kind {
            TokenKind::MacroBody(b) => assert_eq!(interner.lookup(b), "a \\\n  b"),
            ref k => panic!("wrong kind: {k:?}"),
        }
        assert!(matches!(t[3].kind, TokenKind::Ident(_)));
    }

    #[test]
    fn define_empty_body() {
        let (out, _) = lex_all("#define EMPTY\nx");
        let t = out.tokens.as_slice();
        assert_eq!(t[0].kind, TokenKind::HashDefine);
        assert!(matches!(t[1].kind, TokenKind::Ident(_)));
        // No MacroBody token; lexing continues with `x`.
        assert!(matches!(t[2].kind, TokenKind::Ident(_)));
    }

    #[test]
    fn operators_longest_match() {
        let (toks, _) = kinds("=== == = !== != ! <<= << <= < >>= >> >= > ++ += + -- -= -> -");
        assert_eq!(
            &toks[..toks.len() - 1],
            &[
                TokenKind::EqEqEq,
                TokenKind::EqEq,
                TokenKind::Eq,
                TokenKind::BangEqEq,
                TokenKind::BangEq,
                TokenKind::Bang,
                TokenKind::ShlEq,
                TokenKind::Shl,
                TokenKind::LtEq,
                TokenKind::Lt,
                TokenKind::ShrEq,
                TokenKind::Shr,
                TokenKind::GtEq,
                TokenKind::Gt,
                TokenKind::PlusPlus,
                TokenKind::PlusEq,
                TokenKind::Plus,
                TokenKind::MinusMinus,
                TokenKind::MinusEq,
                TokenKind::Arrow,
                TokenKind::Minus,
            ]
        );
    }

    #[test]
    fn adjacent_brackets_stay_single() {
        // `a[b[0]]` must end with two separate `]` tokens; the parser pairs
        // `[[`/`]]` for function dereference by span adjacency instead.
        let (toks, _) = kinds("a[b[0]]");
        assert_eq!(toks[toks.len() - 3], TokenKind::RBracket);
        assert_eq!(toks[toks.len() - 2], TokenKind::RBracket);
    }

    #[test]
    fn ellipsis_and_namespace() {
        let (toks, _) = kinds("... :: : .");
        assert_eq!(
            &toks[..4],
            &[
                TokenKind::Ellipsis,
                TokenKind::ColonColon,
                TokenKind::Colon,
                TokenKind::Dot
            ]
        );
    }

    #[test]
    fn unrecognized_character_skips_one_and_resumes() {
        let (out, _) = lex_all("a ` b");
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].code, ErrorCode::E0002);
        assert_eq!(out.tokens.len(), 3); // a, b, EOF
    }

    #[test]
    fn crlf_is_whitespace() {
        let (out, _) = lex_all("a\r\nb");
        assert!(!out.has_errors());
        assert_eq!(out.tokens.len(), 3);
    }

    /// Tokens plus trivia tile the whole input: no gaps, no overlaps.
    fn assert_tiling(source: &str) {
        let interner = StringInterner::new();
        let out = lex(source, &interner);
        assert!(!out.has_errors(), "lex errors for {source:?}");

        let mut spans: Vec<Span> = out
            .tokens
            .iter()
            .filter(|t| !matches!(t.kind, TokenKind::Eof))
            .map(|t| t.span)
            .chain(out.trivia.iter().map(|t| t.span))
            .collect();
        spans.sort_by_key(|s| s.start);

        let mut pos = 0u32;
        for span in &spans {
            assert_eq!(span.start, pos, "gap or overlap at {pos} in {source:?}");
            pos = span.end;
        }
        assert_eq!(pos as usize, source.len(), "input not fully covered");
    }

    #[test]
    fn span_tiling_representative_inputs() {
        for source in [
            "",
            "function f(a, b) { return a + b; }",
            "#using a\\b; #define F(x) x+1\n x = (1, 2, 3);",
            "a /* c */ b // d\n/# dev #/ /@ doc @/\n%anim_name #animtree &\"loc\"",
            "self thread foo(1, 2)[0].field->x++;",
        ] {
            assert_tiling(source);
        }
    }

    #[test]
    fn idempotent_token_stream() {
        let interner = StringInterner::new();
        let source = "x = a[0] + (1, 2, 3); #define F 1\n";
        let a = lex(source, &interner);
        let b = lex(source, &interner);
        assert_eq!(a.tokens.as_slice(), b.tokens.as_slice());
        assert_eq!(a.trivia.as_slice(), b.trivia.as_slice());
    }
}
