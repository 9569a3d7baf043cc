//! Token kind enumeration with dense discriminant tags.

use std::fmt;

use crate::name::Name;

/// Token kinds produced by the GSC lexer.
///
/// Data-carrying variants hold interned payloads:
/// - `Ident` — identifier text (keywords included; the parser decides roles)
/// - string variants — the raw contents between the quotes, escapes validated
///   but not decoded
/// - `Path` / `MacroParams` / `MacroBody` — raw directive captures
///
/// Floats are stored as `u64` bits for Hash/Eq.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Literals and names
    Ident(Name),
    Int(i64),
    Float(u64),
    /// Plain string literal: `"…"`
    String(Name),
    /// Localized string literal: `&"…"`
    IString(Name),
    /// Hashed string literal: `#"…"`
    HashString(Name),
    /// `#animtree`
    AnimTree,
    /// `%name` (no gap between `%` and the identifier)
    AnimIdent(Name),
    /// Raw `#using`/`#insert` path capture
    Path(Name),
    /// Raw `(…)` capture immediately after a `#define` name
    MacroParams(Name),
    /// Raw macro body capture (line continuations included verbatim)
    MacroBody(Name),

    // Directive introducers
    HashUsing,
    HashInsert,
    HashNamespace,
    HashDefine,
    HashPrecache,
    HashUsingAnimtree,
    HashIf,
    HashElif,
    HashElse,
    HashEndif,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    ColonColon,
    Question,
    Dot,
    Arrow,
    /// `...` vararg marker
    Ellipsis,

    // Assignment operators
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,

    // Binary / unary operators
    PipePipe,
    AmpAmp,
    Pipe,
    Caret,
    Amp,
    EqEq,
    EqEqEq,
    BangEq,
    BangEqEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    Tilde,
    PlusPlus,
    MinusMinus,

    Eof,
}

impl TokenKind {
    // Dense tags for the hot paths: parser dispatch reads these from the
    // TokenList's parallel u8 array instead of the 16-byte kind.
    pub const TAG_IDENT: u8 = 0;
    pub const TAG_LPAREN: u8 = 21;
    pub const TAG_RPAREN: u8 = 22;
    pub const TAG_LBRACE: u8 = 23;
    pub const TAG_RBRACE: u8 = 24;
    pub const TAG_LBRACKET: u8 = 25;
    pub const TAG_RBRACKET: u8 = 26;
    pub const TAG_SEMICOLON: u8 = 28;
    pub const TAG_EOF: u8 = 70;

    /// Dense discriminant index, used for the tag array and `TokenSet`
    /// bitsets. Stable only within a build; never persisted.
    pub const fn discriminant_index(&self) -> u8 {
        match self {
            TokenKind::Ident(_) => 0,
            TokenKind::Int(_) => 1,
            TokenKind::Float(_) => 2,
            TokenKind::String(_) => 3,
            TokenKind::IString(_) => 4,
            TokenKind::HashString(_) => 5,
            TokenKind::AnimTree => 6,
            TokenKind::AnimIdent(_) => 7,
            TokenKind::Path(_) => 8,
            TokenKind::MacroParams(_) => 9,
            TokenKind::MacroBody(_) => 10,
            TokenKind::HashUsing => 11,
            TokenKind::HashInsert => 12,
            TokenKind::HashNamespace => 13,
            TokenKind::HashDefine => 14,
            TokenKind::HashPrecache => 15,
            TokenKind::HashUsingAnimtree => 16,
            TokenKind::HashIf => 17,
            TokenKind::HashElif => 18,
            TokenKind::HashElse => 19,
            TokenKind::HashEndif => 20,
            TokenKind::LParen => 21,
            TokenKind::RParen => 22,
            TokenKind::LBrace => 23,
            TokenKind::RBrace => 24,
            TokenKind::LBracket => 25,
            TokenKind::RBracket => 26,
            TokenKind::Comma => 27,
            TokenKind::Semicolon => 28,
            TokenKind::Colon => 29,
            TokenKind::ColonColon => 30,
            TokenKind::Question => 31,
            TokenKind::Dot => 32,
            TokenKind::Arrow => 33,
            TokenKind::Ellipsis => 34,
            TokenKind::Eq => 35,
            TokenKind::PlusEq => 36,
            TokenKind::MinusEq => 37,
            TokenKind::StarEq => 38,
            TokenKind::SlashEq => 39,
            TokenKind::PercentEq => 40,
            TokenKind::AmpEq => 41,
            TokenKind::PipeEq => 42,
            TokenKind::CaretEq => 43,
            TokenKind::ShlEq => 44,
            TokenKind::ShrEq => 45,
            TokenKind::PipePipe => 46,
            TokenKind::AmpAmp => 47,
            TokenKind::Pipe => 48,
            TokenKind::Caret => 49,
            TokenKind::Amp => 50,
            TokenKind::EqEq => 51,
            TokenKind::EqEqEq => 52,
            TokenKind::BangEq => 53,
            TokenKind::BangEqEq => 54,
            TokenKind::Lt => 55,
            TokenKind::Gt => 56,
            TokenKind::LtEq => 57,
            TokenKind::GtEq => 58,
            TokenKind::Shl => 59,
            TokenKind::Shr => 60,
            TokenKind::Plus => 61,
            TokenKind::Minus => 62,
            TokenKind::Star => 63,
            TokenKind::Slash => 64,
            TokenKind::Percent => 65,
            TokenKind::Bang => 66,
            TokenKind::Tilde => 67,
            TokenKind::PlusPlus => 68,
            TokenKind::MinusMinus => 69,
            TokenKind::Eof => 70,
        }
    }

    /// Human-readable name for error messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer literal",
            TokenKind::Float(_) => "float literal",
            TokenKind::String(_) => "string literal",
            TokenKind::IString(_) => "localized string literal",
            TokenKind::HashString(_) => "hash string literal",
            TokenKind::AnimTree => "`#animtree`",
            TokenKind::AnimIdent(_) => "anim identifier",
            TokenKind::Path(_) => "path",
            TokenKind::MacroParams(_) => "macro parameter list",
            TokenKind::MacroBody(_) => "macro body",
            TokenKind::HashUsing => "`#using`",
            TokenKind::HashInsert => "`#insert`",
            TokenKind::HashNamespace => "`#namespace`",
            TokenKind::HashDefine => "`#define`",
            TokenKind::HashPrecache => "`#precache`",
            TokenKind::HashUsingAnimtree => "`#using_animtree`",
            TokenKind::HashIf => "`#if`",
            TokenKind::HashElif => "`#elif`",
            TokenKind::HashElse => "`#else`",
            TokenKind::HashEndif => "`#endif`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::ColonColon => "`::`",
            TokenKind::Question => "`?`",
            TokenKind::Dot => "`.`",
            TokenKind::Arrow => "`->`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Eq => "`=`",
            TokenKind::PlusEq => "`+=`",
            TokenKind::MinusEq => "`-=`",
            TokenKind::StarEq => "`*=`",
            TokenKind::SlashEq => "`/=`",
            TokenKind::PercentEq => "`%=`",
            TokenKind::AmpEq => "`&=`",
            TokenKind::PipeEq => "`|=`",
            TokenKind::CaretEq => "`^=`",
            TokenKind::ShlEq => "`<<=`",
            TokenKind::ShrEq => "`>>=`",
            TokenKind::PipePipe => "`||`",
            TokenKind::AmpAmp => "`&&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Amp => "`&`",
            TokenKind::EqEq => "`==`",
            TokenKind::EqEqEq => "`===`",
            TokenKind::BangEq => "`!=`",
            TokenKind::BangEqEq => "`!==`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::Shl => "`<<`",
            TokenKind::Shr => "`>>`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::Bang => "`!`",
            TokenKind::Tilde => "`~`",
            TokenKind::PlusPlus => "`++`",
            TokenKind::MinusMinus => "`--`",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(n) => write!(f, "Ident({n:?})"),
            TokenKind::Int(v) => write!(f, "Int({v})"),
            TokenKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            TokenKind::String(n) => write!(f, "String({n:?})"),
            TokenKind::IString(n) => write!(f, "IString({n:?})"),
            TokenKind::HashString(n) => write!(f, "HashString({n:?})"),
            TokenKind::AnimIdent(n) => write!(f, "AnimIdent({n:?})"),
            TokenKind::Path(n) => write!(f, "Path({n:?})"),
            TokenKind::MacroParams(n) => write!(f, "MacroParams({n:?})"),
            TokenKind::MacroBody(n) => write!(f, "MacroBody({n:?})"),
            other => f.write_str(other.display_name()),
        }
    }
}
