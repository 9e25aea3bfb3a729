//! Token kinds for the SQL dialect.
//!
//! Logos derives token recognition. The tokenizer knows a broader SQL keyword set
//! than the dialect admits; [`token_sets::ADMISSIBLE`] is the allow-list enforced
//! before parsing.

use logos::Logos;

/// All token kinds, followed by the `Eof` sentinel and the `__LAST` bound.
/// `#[repr(u16)]` keeps discriminants small enough for [`TokenSet`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token(";")]
    Semicolon,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("=")]
    Eq,

    #[token("==")]
    EqEq,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("<=")]
    LtEq,

    #[token(">=")]
    GtEq,

    #[token("<>")]
    LtGt,

    #[token("!=")]
    BangEq,

    /// `||` string concatenation
    #[token("||")]
    Concat,

    #[token("::")]
    DoubleColon,

    #[token(":")]
    Colon,

    #[token("~")]
    Tilde,

    #[token("!")]
    Bang,

    #[token("?")]
    Question,

    #[token("@")]
    At,

    #[token("&")]
    Amp,

    #[token("^")]
    Caret,

    #[token("|")]
    Pipe,

    /// `'text'`, with `''` as the escaped quote
    #[regex(r"'(?:[^']|'')*'")]
    StringLit,

    #[regex(r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")]
    Number,

    /// `"name"` or `` `name` ``
    #[regex(r#""(?:[^"]|"")*""#)]
    #[regex(r"`[^`]*`")]
    QuotedIdent,

    #[token("select", ignore(case))]
    KwSelect,

    #[token("from", ignore(case))]
    KwFrom,

    #[token("where", ignore(case))]
    KwWhere,

    #[token("join", ignore(case))]
    KwJoin,

    /// `ORDER BY` is a single token, whitespace between the words included.
    #[regex(r"[oO][rR][dD][eE][rR][ \t\r\n]+[bB][yY]")]
    KwOrderBy,

    #[regex(r"[gG][rR][oO][uU][pP][ \t\r\n]+[bB][yY]")]
    KwGroupBy,

    #[token("limit", ignore(case))]
    KwLimit,

    #[token("offset", ignore(case))]
    KwOffset,

    /// Alias marker
    #[token("as", ignore(case))]
    KwAs,

    #[token("set", ignore(case))]
    KwSet,

    #[token("copy", ignore(case))]
    KwCopy,

    #[token("load", ignore(case))]
    KwLoad,

    /// Integer division. Also accepted as a plain name in operand position.
    #[token("div", ignore(case))]
    KwDiv,

    #[token("and", ignore(case))]
    KwAnd,

    #[token("or", ignore(case))]
    KwOr,

    #[token("not", ignore(case))]
    KwNot,

    #[token("on", ignore(case))]
    KwOn,

    #[token("in", ignore(case))]
    KwIn,

    #[token("is", ignore(case))]
    KwIs,

    #[token("null", ignore(case))]
    KwNull,

    #[token("true", ignore(case))]
    KwTrue,

    #[token("false", ignore(case))]
    KwFalse,

    #[token("like", ignore(case))]
    KwLike,

    #[token("between", ignore(case))]
    KwBetween,

    #[token("case", ignore(case))]
    KwCase,

    #[token("when", ignore(case))]
    KwWhen,

    #[token("then", ignore(case))]
    KwThen,

    #[token("else", ignore(case))]
    KwElse,

    #[token("end", ignore(case))]
    KwEnd,

    #[token("distinct", ignore(case))]
    KwDistinct,

    #[token("union", ignore(case))]
    KwUnion,

    #[token("insert", ignore(case))]
    KwInsert,

    #[token("into", ignore(case))]
    KwInto,

    #[token("values", ignore(case))]
    KwValues,

    #[token("update", ignore(case))]
    KwUpdate,

    #[token("delete", ignore(case))]
    KwDelete,

    #[token("create", ignore(case))]
    KwCreate,

    #[token("drop", ignore(case))]
    KwDrop,

    #[token("asc", ignore(case))]
    KwAsc,

    #[token("desc", ignore(case))]
    KwDesc,

    #[token("left", ignore(case))]
    KwLeft,

    #[token("right", ignore(case))]
    KwRight,

    #[token("inner", ignore(case))]
    KwInner,

    #[token("outer", ignore(case))]
    KwOuter,

    #[token("cross", ignore(case))]
    KwCross,

    #[token("having", ignore(case))]
    KwHaving,

    #[token("with", ignore(case))]
    KwWith,

    /// Plain identifier. Defined after keywords so they take precedence.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_$]*")]
    Var,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"--[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,

    /// Returned by lookahead past the last token
    Eof,

    // Must be last - used for bounds checking in `TokenSet`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        token_sets::KEYWORDS.contains(self)
    }

    /// Human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            StringLit => "string literal",
            Number => "number",
            QuotedIdent => "quoted identifier",
            Var => "identifier",
            Garbage => "unrecognized input",
            Eof => "end of input",
            _ if self.is_keyword() => "keyword",
            _ => "operator",
        }
    }
}

/// 128-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..128u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                // SAFETY: `i` is below `__LAST` and SyntaxKind is repr(u16) with contiguous values
                let kind: SyntaxKind = unsafe { std::mem::transmute::<u16, SyntaxKind>(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets: the dialect's KeywordSet and parser FIRST sets.
pub mod token_sets {
    use super::*;

    /// Single-symbol and multi-character operator/punctuation tokens.
    pub const PUNCTUATION: TokenSet = TokenSet::new(&[
        ParenOpen,
        ParenClose,
        BracketOpen,
        BracketClose,
        BraceOpen,
        BraceClose,
        Comma,
        Dot,
        Semicolon,
        Star,
        Plus,
        Minus,
        Slash,
        Percent,
        Eq,
        EqEq,
        Lt,
        Gt,
        LtEq,
        GtEq,
        LtGt,
        BangEq,
        Concat,
        DoubleColon,
        Colon,
        Tilde,
        Bang,
        Question,
        At,
        Amp,
        Caret,
        Pipe,
    ]);

    /// Alpha keywords that prove a `<` is a comparison rather than a tag opener:
    /// `mod<div FROM x` never becomes a tag because `FROM` shows up before `>`.
    pub const BREAKING: TokenSet = TokenSet::new(&[
        KwSet, KwCopy, KwLoad, KwSelect, KwFrom, KwJoin, KwWhere, KwOrderBy, KwLimit, KwAs, Comma,
    ]);

    /// Every token kind the dialect accepts. Anything else is a lexical error.
    pub const ADMISSIBLE: TokenSet = PUNCTUATION
        .union(BREAKING)
        .union(TokenSet::new(&[StringLit, Number, QuotedIdent, Var, KwDiv]));

    pub const KEYWORDS: TokenSet = TokenSet::new(&[
        KwSelect, KwFrom, KwWhere, KwJoin, KwOrderBy, KwGroupBy, KwLimit, KwOffset, KwAs, KwSet,
        KwCopy, KwLoad, KwDiv, KwAnd, KwOr, KwNot, KwOn, KwIn, KwIs, KwNull, KwTrue, KwFalse,
        KwLike, KwBetween, KwCase, KwWhen, KwThen, KwElse, KwEnd, KwDistinct, KwUnion, KwInsert,
        KwInto, KwValues, KwUpdate, KwDelete, KwCreate, KwDrop, KwAsc, KwDesc, KwLeft, KwRight,
        KwInner, KwOuter, KwCross, KwHaving, KwWith,
    ]);

    /// Tokens that can spell a name in identifier position.
    /// `DIV` doubles as a name so that `mod<div` reads as `mod < div`.
    pub const NAME_FIRST: TokenSet = TokenSet::new(&[Var, QuotedIdent, KwDiv]);

    /// Tokens that start an alias written without `AS`.
    pub const ALIAS_FIRST: TokenSet = TokenSet::new(&[Var, QuotedIdent]);
}
