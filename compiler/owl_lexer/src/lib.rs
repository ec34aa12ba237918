//! Lexer for Owl using logos.
//!
//! Produces a flat [`TokenList`] of brackets, backtick literals and words.
//! The lexer is total: every input tokenizes, and anything logos cannot
//! classify becomes a word.

mod cursor;

use logos::Logos;
use owl_ir::{Token, TokenKind, TokenList};

use cursor::Cursor;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum RawToken {
    #[token("(")]
    Open,
    #[token(")")]
    Close,

    /// Runs to the closing backtick, or to end of input if there is none.
    #[regex(r"`[^`]*`?")]
    Literal,

    #[regex(r"[^ \t\n\r()`]+")]
    Word,
}

impl RawToken {
    fn kind(self) -> TokenKind {
        match self {
            RawToken::Open => TokenKind::Open,
            RawToken::Close => TokenKind::Close,
            RawToken::Literal => TokenKind::Literal,
            RawToken::Word => TokenKind::Word,
        }
    }
}

/// Tokenize source text.
pub fn tokenize(source: &str) -> TokenList {
    let mut cursor = Cursor::new(source);
    let mut lexer = RawToken::lexer(source);
    let mut tokens = TokenList::new();

    while let Some(result) = lexer.next() {
        let kind = result.map_or(TokenKind::Word, RawToken::kind);
        let pos = cursor.advance_to(lexer.span().start);
        tokens.push(Token::new(kind, lexer.slice(), pos));
    }

    tokens
}
