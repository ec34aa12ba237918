//! Running line/column tracking while tokens are cooked.

use owl_ir::Position;

/// Walks the source once, front to back, so every token's position costs
/// only the characters since the previous token.
pub(crate) struct Cursor<'src> {
    source: &'src str,
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Cursor {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// 1-based position of byte `offset`. Offsets must not go backwards;
    /// one that does yields the current position unchanged.
    pub(crate) fn advance_to(&mut self, offset: usize) -> Position {
        let target = offset.min(self.source.len());
        if let Some(skipped) = self.source.get(self.offset..target) {
            for c in skipped.chars() {
                if c == '\n' {
                    self.line = self.line.saturating_add(1);
                    self.column = 1;
                } else {
                    self.column = self.column.saturating_add(1);
                }
            }
            self.offset = target;
        }
        Position::new(self.line, self.column)
    }
}
