//! Lexer output.

use std::ops::{Index, Range};
use std::rc::Rc;

use crate::Position;

/// Token category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// `(`
    Open,
    /// `)`
    Close,
    /// Backtick-delimited string, delimiters included in the text.
    Literal,
    /// Anything else: numbers, names, operators.
    Word,
}

impl TokenKind {
    #[inline]
    pub fn is_bracket(self) -> bool {
        matches!(self, TokenKind::Open | TokenKind::Close)
    }
}

/// A single token with its source text and position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Rc<str>,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Rc<str>>, pos: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            pos,
        }
    }
}

/// The flat token sequence for one source text.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl Index<Range<usize>> for TokenList {
    type Output = [Token];

    fn index(&self, range: Range<usize>) -> &[Token] {
        &self.tokens[range]
    }
}

impl From<Vec<Token>> for TokenList {
    fn from(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
