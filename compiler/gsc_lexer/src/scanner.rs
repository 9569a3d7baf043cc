//! Hand-written scanner producing tokens, trivia, and lexical errors.
//!
//! Main dispatch is on the current byte; each arm calls a focused method
//! that advances the cursor and emits one item. Errors are accumulated on
//! the side and never stop the scan.
//!
//! The scanner is modal for the raw directive captures: after `#using` /
//! `#insert` it captures a path token, and after `#define` it captures the
//! macro name, an optional adjacent raw parameter list, and the raw body up
//! to the first un-escaped newline. Callers just see the resulting tokens.

use gsc_diagnostic::ErrorCode;
use gsc_ir::{Name, Span, StringInterner, TokenKind, TriviaKind};

use crate::cursor::Cursor;
use crate::error::LexError;

/// One scanned item.
#[derive(Debug)]
pub(crate) enum Scanned {
    Token(TokenKind, Span),
    Trivia(TriviaKind, Span),
    Eof(u32),
}

/// Which string literal family is being scanned.
#[derive(Copy, Clone)]
enum StringFlavor {
    /// `"…"`
    Plain,
    /// `&"…"`
    Localized,
    /// `#"…"`
    Hashed,
}

/// Scanner capture mode. `Normal` is the ordinary token grammar; the others
/// are raw-capture states entered after directive introducers.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Mode {
    Normal,
    /// After `#using` / `#insert`: capture a non-whitespace, non-`;` run.
    Path,
    /// After `#define`: the next identifier is the macro name.
    DefineName,
    /// After the macro name with an adjacent `(`: capture through `)`.
    DefineParams,
    /// Capture the raw macro body to the first un-escaped newline.
    DefineBody,
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_hws(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\r'
}

fn is_ws(b: u8) -> bool {
    is_hws(b) || b == b'\n'
}

pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    errors: Vec<LexError>,
    mode: Mode,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(cursor: Cursor<'a>, interner: &'a StringInterner) -> Self {
        Scanner {
            cursor,
            interner,
            errors: Vec::new(),
            mode: Mode::Normal,
        }
    }

    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    fn error(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        self.errors.push(LexError::new(code, message, span));
    }

    fn intern(&self, start: u32, end: u32) -> Name {
        self.interner.intern(self.cursor.slice(start, end))
    }

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.pos())
    }

    /// Produce the next item. After EOF, keeps returning `Eof`.
    pub(crate) fn next(&mut self) -> Scanned {
        loop {
            match self.mode {
                Mode::Path => {
                    if let Some(item) = self.path_capture() {
                        return item;
                    }
                    continue;
                }
                Mode::DefineParams => return self.macro_params(),
                Mode::DefineBody => {
                    if let Some(item) = self.macro_body() {
                        return item;
                    }
                    continue;
                }
                Mode::Normal | Mode::DefineName => {}
            }

            // Snapshot: the DefineName transition below must only react to
            // items lexed while already in that mode, not to the `#define`
            // token that just entered it.
            let entered_mode = self.mode;
            let start = self.cursor.pos();
            let item = match self.cursor.current() {
                0 => {
                    if self.cursor.is_eof() {
                        self.mode = Mode::Normal;
                        return Scanned::Eof(start);
                    }
                    // Interior null byte: report and skip.
                    self.cursor.advance();
                    self.error(
                        ErrorCode::E0002,
                        "unexpected null byte",
                        self.span_from(start),
                    );
                    continue;
                }
                b if is_ws(b) => self.whitespace(start),
                b if is_ident_start(b) => self.identifier(start),
                b'0'..=b'9' => self.number(start),
                b'"' => self.string(start, StringFlavor::Plain),
                b'&' => self.ampersand(start),
                b'#' => match self.hash(start) {
                    Some(item) => item,
                    None => continue,
                },
                b'%' => self.percent(start),
                b'/' => self.slash(start),
                b'=' => self.equal(start),
                b'!' => self.bang(start),
                b'<' => self.less(start),
                b'>' => self.greater(start),
                b'+' => self.plus(start),
                b'-' => self.minus(start),
                b'*' => self.two_way(start, b'=', TokenKind::StarEq, TokenKind::Star),
                b'|' => self.pipe(start),
                b'^' => self.two_way(start, b'=', TokenKind::CaretEq, TokenKind::Caret),
                b'~' => self.single(start, TokenKind::Tilde),
                b'.' => self.dot(start),
                b':' => self.two_way(start, b':', TokenKind::ColonColon, TokenKind::Colon),
                b',' => self.single(start, TokenKind::Comma),
                b';' => self.single(start, TokenKind::Semicolon),
                b'?' => self.single(start, TokenKind::Question),
                b'(' => self.single(start, TokenKind::LParen),
                b')' => self.single(start, TokenKind::RParen),
                b'[' => self.single(start, TokenKind::LBracket),
                b']' => self.single(start, TokenKind::RBracket),
                b'{' => self.single(start, TokenKind::LBrace),
                b'}' => self.single(start, TokenKind::RBrace),
                b => {
                    // Unrecognized byte (control char or non-ASCII lead):
                    // skip one character, report once, resume.
                    self.cursor.advance_n(utf8_char_width(b));
                    self.error(
                        ErrorCode::E0002,
                        "unrecognized character",
                        self.span_from(start),
                    );
                    continue;
                }
            };

            // Mode transition for `#define NAME(` adjacency: the name just
            // lexed ends exactly where a `(` begins iff the params capture
            // applies.
            if entered_mode == Mode::DefineName && self.mode == Mode::DefineName {
                match &item {
                    Scanned::Trivia(..) => {}
                    Scanned::Token(TokenKind::Ident(_), _) => {
                        self.mode = if self.cursor.current() == b'(' {
                            Mode::DefineParams
                        } else {
                            Mode::DefineBody
                        };
                    }
                    _ => self.mode = Mode::Normal,
                }
            }

            return item;
        }
    }

    // ── Trivia ─────────────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> Scanned {
        self.cursor.eat_while(is_ws);
        Scanned::Trivia(TriviaKind::Whitespace, self.span_from(start))
    }

    // ── Identifiers & numbers ──────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> Scanned {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        let name = self.intern(start, self.cursor.pos());
        Scanned::Token(TokenKind::Ident(name), self.span_from(start))
    }

    fn number(&mut self, start: u32) -> Scanned {
        if self.cursor.current() == b'0' && matches!(self.cursor.peek(), b'x' | b'X') {
            return self.hex_number(start);
        }

        self.cursor.eat_while(|b| b.is_ascii_digit());
        let mut is_float = false;

        if self.cursor.current() == b'.' {
            is_float = true;
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        // Exponent only when actually followed by digits; `1e` is the
        // number 1 and the identifier `e`.
        if matches!(self.cursor.current(), b'e' | b'E') {
            let after_sign = if matches!(self.cursor.peek(), b'+' | b'-') {
                self.cursor.peek2()
            } else {
                self.cursor.peek()
            };
            if after_sign.is_ascii_digit() {
                is_float = true;
                self.cursor.advance();
                if matches!(self.cursor.current(), b'+' | b'-') {
                    self.cursor.advance();
                }
                self.cursor.eat_while(|b| b.is_ascii_digit());
            }
        }

        let text = self.cursor.slice_from(start);
        let span = self.span_from(start);
        if is_float {
            let value = match text.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    self.error(ErrorCode::E0003, "invalid float literal", span);
                    0.0
                }
            };
            Scanned::Token(TokenKind::Float(value.to_bits()), span)
        } else {
            let value = match text.parse::<i64>() {
                Ok(v) => v,
                Err(_) => {
                    self.error(ErrorCode::E0003, "integer literal out of range", span);
                    0
                }
            };
            Scanned::Token(TokenKind::Int(value), span)
        }
    }

    fn hex_number(&mut self, start: u32) -> Scanned {
        self.cursor.advance_n(2); // 0x
        let digits_start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_hexdigit());
        let digits = self.cursor.slice_from(digits_start);
        let span = self.span_from(start);
        if digits.is_empty() {
            self.error(ErrorCode::E0003, "hex literal needs at least one digit", span);
            return Scanned::Token(TokenKind::Int(0), span);
        }
        // Hex literals are bit patterns: 0xFFFFFFFFFFFFFFFF wraps negative.
        let value = match u64::from_str_radix(digits, 16) {
            Ok(v) => v as i64,
            Err(_) => {
                self.error(ErrorCode::E0003, "hex literal out of range", span);
                0
            }
        };
        Scanned::Token(TokenKind::Int(value), span)
    }

    // ── Strings ────────────────────────────────────────────────────────

    /// Scan a string body. The cursor sits on the opening quote; `start` is
    /// the literal start (including any `&`/`#` prefix).
    fn string(&mut self, start: u32, flavor: StringFlavor) -> Scanned {
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.pos();

        let content_end = loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    let end = self.cursor.pos();
                    self.cursor.advance(); // closing quote
                    break end;
                }
                b'\\' => {
                    let esc_start = self.cursor.pos();
                    let escaped = self.cursor.peek();
                    if matches!(escaped, b'r' | b'n' | b't' | b'\\' | b'"') {
                        self.cursor.advance_n(2);
                    } else if escaped == b'\n'
                        || escaped == b'\r'
                        || (escaped == 0 && esc_start + 1 >= self.cursor.source_len())
                    {
                        // Backslash at end of line/file: unterminated.
                        self.cursor.advance();
                        let end = self.cursor.pos();
                        self.error(
                            ErrorCode::E0001,
                            "unterminated string literal",
                            Span::new(start, end),
                        );
                        break end;
                    } else {
                        self.cursor.advance_n(2);
                        self.error(
                            ErrorCode::E0004,
                            format!("invalid escape `\\{}`", escaped as char),
                            Span::new(esc_start, esc_start + 2),
                        );
                    }
                }
                // Newline or EOF before the closing quote.
                _ => {
                    let end = self.cursor.pos();
                    self.error(
                        ErrorCode::E0001,
                        "unterminated string literal",
                        Span::new(start, end),
                    );
                    break end;
                }
            }
        };

        let name = self.intern(content_start, content_end);
        let kind = match flavor {
            StringFlavor::Plain => TokenKind::String(name),
            StringFlavor::Localized => TokenKind::IString(name),
            StringFlavor::Hashed => TokenKind::HashString(name),
        };
        Scanned::Token(kind, self.span_from(start))
    }

    // ── Compound dispatch ──────────────────────────────────────────────

    fn ampersand(&mut self, start: u32) -> Scanned {
        match self.cursor.peek() {
            b'"' => {
                self.cursor.advance(); // &
                self.string(start, StringFlavor::Localized)
            }
            b'&' => self.double(start, TokenKind::AmpAmp),
            b'=' => self.double(start, TokenKind::AmpEq),
            _ => self.single(start, TokenKind::Amp),
        }
    }

    /// `#` introduces hash strings, `#animtree`, directives, or a stray
    /// dev-block terminator. Returns `None` after reporting an unknown form.
    fn hash(&mut self, start: u32) -> Option<Scanned> {
        match self.cursor.peek() {
            b'"' => {
                self.cursor.advance(); // #
                Some(self.string(start, StringFlavor::Hashed))
            }
            // A stray `#/` closes nothing; the grammar treats it as an
            // empty dev-block region.
            b'/' => {
                self.cursor.advance_n(2);
                Some(Scanned::Trivia(TriviaKind::DevBlock, self.span_from(start)))
            }
            b if is_ident_start(b) => {
                self.cursor.advance(); // #
                let word_start = self.cursor.pos();
                self.cursor.eat_while(is_ident_continue);
                let word = self.cursor.slice(word_start, self.cursor.pos());
                let kind = match word {
                    "using" => {
                        self.mode = Mode::Path;
                        TokenKind::HashUsing
                    }
                    "insert" => {
                        self.mode = Mode::Path;
                        TokenKind::HashInsert
                    }
                    "namespace" => TokenKind::HashNamespace,
                    "define" => {
                        self.mode = Mode::DefineName;
                        TokenKind::HashDefine
                    }
                    "precache" => TokenKind::HashPrecache,
                    "using_animtree" => TokenKind::HashUsingAnimtree,
                    "if" => TokenKind::HashIf,
                    "elif" => TokenKind::HashElif,
                    "else" => TokenKind::HashElse,
                    "endif" => TokenKind::HashEndif,
                    "animtree" => TokenKind::AnimTree,
                    _ => {
                        self.error(
                            ErrorCode::E0008,
                            format!("unknown directive `#{word}`"),
                            self.span_from(start),
                        );
                        return None;
                    }
                };
                Some(Scanned::Token(kind, self.span_from(start)))
            }
            _ => {
                self.cursor.advance();
                self.error(
                    ErrorCode::E0002,
                    "unrecognized character `#`",
                    self.span_from(start),
                );
                None
            }
        }
    }

    fn percent(&mut self, start: u32) -> Scanned {
        if is_ident_start(self.cursor.peek()) {
            self.cursor.advance(); // %
            let body_start = self.cursor.pos();
            self.cursor.eat_while(is_ident_continue);
            let name = self.intern(body_start, self.cursor.pos());
            Scanned::Token(TokenKind::AnimIdent(name), self.span_from(start))
        } else if self.cursor.peek() == b'=' {
            self.double(start, TokenKind::PercentEq)
        } else {
            self.single(start, TokenKind::Percent)
        }
    }

    fn slash(&mut self, start: u32) -> Scanned {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_newline_or_eof();
                Scanned::Trivia(TriviaKind::LineComment, self.span_from(start))
            }
            b'*' => self.delimited_trivia(
                start,
                b"*/",
                TriviaKind::BlockComment,
                ErrorCode::E0005,
                "unterminated block comment",
            ),
            b'#' => self.delimited_trivia(
                start,
                b"#/",
                TriviaKind::DevBlock,
                ErrorCode::E0006,
                "unterminated dev block",
            ),
            b'@' => self.delimited_trivia(
                start,
                b"@/",
                TriviaKind::DocComment,
                ErrorCode::E0007,
                "unterminated doc comment",
            ),
            b'=' => self.double(start, TokenKind::SlashEq),
            _ => self.single(start, TokenKind::Slash),
        }
    }

    /// Non-nesting `/* */`-shaped region: body runs to the first terminator.
    fn delimited_trivia(
        &mut self,
        start: u32,
        terminator: &[u8; 2],
        kind: TriviaKind,
        code: ErrorCode,
        message: &str,
    ) -> Scanned {
        self.cursor.advance_n(2); // opening delimiter
        if !self.cursor.eat_through_terminator(terminator) {
            self.error(code, message, self.span_from(start));
        }
        Scanned::Trivia(kind, self.span_from(start))
    }

    fn equal(&mut self, start: u32) -> Scanned {
        if self.cursor.peek() == b'=' {
            if self.cursor.peek2() == b'=' {
                self.triple(start, TokenKind::EqEqEq)
            } else {
                self.double(start, TokenKind::EqEq)
            }
        } else {
            self.single(start, TokenKind::Eq)
        }
    }

    fn bang(&mut self, start: u32) -> Scanned {
        if self.cursor.peek() == b'=' {
            if self.cursor.peek2() == b'=' {
                self.triple(start, TokenKind::BangEqEq)
            } else {
                self.double(start, TokenKind::BangEq)
            }
        } else {
            self.single(start, TokenKind::Bang)
        }
    }

    fn less(&mut self, start: u32) -> Scanned {
        match self.cursor.peek() {
            b'<' => {
                if self.cursor.peek2() == b'=' {
                    self.triple(start, TokenKind::ShlEq)
                } else {
                    self.double(start, TokenKind::Shl)
                }
            }
            b'=' => self.double(start, TokenKind::LtEq),
            _ => self.single(start, TokenKind::Lt),
        }
    }

    fn greater(&mut self, start: u32) -> Scanned {
        match self.cursor.peek() {
            b'>' => {
                if self.cursor.peek2() == b'=' {
                    self.triple(start, TokenKind::ShrEq)
                } else {
                    self.double(start, TokenKind::Shr)
                }
            }
            b'=' => self.double(start, TokenKind::GtEq),
            _ => self.single(start, TokenKind::Gt),
        }
    }

    fn plus(&mut self, start: u32) -> Scanned {
        match self.cursor.peek() {
            b'+' => self.double(start, TokenKind::PlusPlus),
            b'=' => self.double(start, TokenKind::PlusEq),
            _ => self.single(start, TokenKind::Plus),
        }
    }

    fn minus(&mut self, start: u32) -> Scanned {
        match self.cursor.peek() {
            b'-' => self.double(start, TokenKind::MinusMinus),
            b'=' => self.double(start, TokenKind::MinusEq),
            b'>' => self.double(start, TokenKind::Arrow),
            _ => self.single(start, TokenKind::Minus),
        }
    }

    fn pipe(&mut self, start: u32) -> Scanned {
        match self.cursor.peek() {
            b'|' => self.double(start, TokenKind::PipePipe),
            b'=' => self.double(start, TokenKind::PipeEq),
            _ => self.single(start, TokenKind::Pipe),
        }
    }

    fn dot(&mut self, start: u32) -> Scanned {
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.triple(start, TokenKind::Ellipsis)
        } else {
            self.single(start, TokenKind::Dot)
        }
    }

    fn two_way(&mut self, start: u32, second: u8, double: TokenKind, single: TokenKind) -> Scanned {
        if self.cursor.peek() == second {
            self.double(start, double)
        } else {
            self.single(start, single)
        }
    }

    fn single(&mut self, start: u32, kind: TokenKind) -> Scanned {
        self.cursor.advance();
        Scanned::Token(kind, self.span_from(start))
    }

    fn double(&mut self, start: u32, kind: TokenKind) -> Scanned {
        self.cursor.advance_n(2);
        Scanned::Token(kind, self.span_from(start))
    }

    fn triple(&mut self, start: u32, kind: TokenKind) -> Scanned {
        self.cursor.advance_n(3);
        Scanned::Token(kind, self.span_from(start))
    }

    // ── Raw directive captures ─────────────────────────────────────────

    /// Path mode: whitespace and comments pass through as trivia, then the
    /// longest non-whitespace, non-`;` run becomes one `Path` token.
    /// Returns `None` when the caller should re-dispatch (mode changed).
    fn path_capture(&mut self) -> Option<Scanned> {
        let start = self.cursor.pos();
        let b = self.cursor.current();

        if b == 0 && self.cursor.is_eof() {
            self.mode = Mode::Normal;
            return None;
        }
        if is_ws(b) {
            return Some(self.whitespace(start));
        }
        if b == b'/' && matches!(self.cursor.peek(), b'/' | b'*' | b'#' | b'@') {
            return Some(self.slash(start));
        }
        if b == b';' {
            // Empty path; the parser reports the missing operand.
            self.mode = Mode::Normal;
            return None;
        }

        self.cursor
            .eat_while(|b| !is_ws(b) && b != b';' && b != 0);
        self.mode = Mode::Normal;
        let name = self.intern(start, self.cursor.pos());
        Some(Scanned::Token(TokenKind::Path(name), self.span_from(start)))
    }

    /// Raw `( … )` capture after a `#define` name. The cursor sits on `(`.
    fn macro_params(&mut self) -> Scanned {
        let start = self.cursor.pos();
        debug_assert_eq!(self.cursor.current(), b'(');
        self.cursor.advance();
        let inner_start = self.cursor.pos();
        self.cursor.eat_while(|b| b != b')' && b != 0);

        if self.cursor.current() == b')' {
            let inner_end = self.cursor.pos();
            self.cursor.advance();
            self.mode = Mode::DefineBody;
            let name = self.intern(inner_start, inner_end);
            Scanned::Token(TokenKind::MacroParams(name), self.span_from(start))
        } else {
            // EOF (or interior null) before `)`.
            let span = self.span_from(start);
            self.error(ErrorCode::E0009, "unterminated macro parameter list", span);
            self.mode = Mode::Normal;
            let name = self.intern(inner_start, self.cursor.pos());
            Scanned::Token(TokenKind::MacroParams(name), span)
        }
    }

    /// Raw macro body capture: everything up to the first newline not
    /// preceded by `\` (optionally with a `\r` in between). Leading and
    /// trailing horizontal whitespace stay outside the token so the body
    /// text is exact.
    fn macro_body(&mut self) -> Option<Scanned> {
        let start = self.cursor.pos();

        // Leading horizontal whitespace is ordinary trivia.
        if is_hws(self.cursor.current()) {
            self.cursor.eat_while(is_hws);
            return Some(Scanned::Trivia(
                TriviaKind::Whitespace,
                self.span_from(start),
            ));
        }

        // Empty body: nothing between the name/params and the line end.
        if self.cursor.current() == b'\n'
            || (self.cursor.current() == 0 && self.cursor.is_eof())
        {
            self.mode = Mode::Normal;
            return None;
        }

        // Scan to the terminating newline, honoring `\`-continuations.
        let mut end = self.cursor.pos();
        loop {
            let b = self.cursor.current();
            if b == 0 && self.cursor.is_eof() {
                end = self.cursor.pos();
                break;
            }
            if b == b'\n' {
                end = self.cursor.pos();
                break;
            }
            if b == b'\\' {
                let after = self.cursor.peek();
                if after == b'\n' {
                    self.cursor.advance_n(2);
                    continue;
                }
                if after == b'\r' && self.cursor.peek2() == b'\n' {
                    self.cursor.advance_n(3);
                    continue;
                }
            }
            self.cursor.advance();
        }

        // Trim trailing horizontal whitespace out of the token; those bytes
        // are lexed again as ordinary trivia on the next call.
        let text = self.cursor.slice(start, end);
        let trimmed_len = text.trim_end_matches([' ', '\t', '\r']).len();
        #[allow(clippy::cast_possible_truncation)]
        let body_end = start + trimmed_len as u32;

        self.mode = Mode::Normal;
        if body_end == start {
            // All-whitespace tail; re-lex it as trivia from `start`.
            self.cursor.set_pos(start);
            return None;
        }
        let name = self.interner.intern(self.cursor.slice(start, body_end));
        // The trimmed tail re-lexes as ordinary whitespace trivia.
        self.cursor.set_pos(body_end);
        Some(Scanned::Token(
            TokenKind::MacroBody(name),
            Span::new(start, body_end),
        ))
    }
}

fn utf8_char_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
