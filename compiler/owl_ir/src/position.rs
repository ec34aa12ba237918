//! Source positions.

use std::fmt;

/// A 1-based line/column location in source text.
///
/// Columns count characters, not bytes. Runtime-created expressions carry
/// [`Position::DUMMY`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Placeholder for values synthesized during evaluation.
    pub const DUMMY: Position = Position { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Returns `true` for [`Position::DUMMY`].
    #[inline]
    pub const fn is_dummy(self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dummy() {
            write!(f, "<runtime>")
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_and_column() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }

    #[test]
    fn dummy_displays_as_runtime() {
        assert!(Position::DUMMY.is_dummy());
        assert_eq!(Position::DUMMY.to_string(), "<runtime>");
    }

    #[test]
    fn positions_order_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 2));
    }
}
