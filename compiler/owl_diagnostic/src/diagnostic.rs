use std::fmt;

use owl_ir::Position;

use crate::ErrorCode;

/// A message attached to a source position.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub pos: Position,
    pub message: String,
}

/// A reportable Owl error.
///
/// Renders as
///
/// ```text
/// error[E2001]: `=` expects at least 2 argument(s), got 1
///   --> 4:7: too few arguments
///   = note: `=`: bind a name to a value
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Where it went wrong. Runtime values have no source position and get
    /// no label.
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// Text suggestions for fixing the error.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Label `pos`, unless it is [`Position::DUMMY`].
    #[must_use]
    pub fn with_label(mut self, pos: Position, message: impl Into<String>) -> Self {
        if !pos.is_dummy() {
            self.labels.push(Label {
                pos,
                message: message.into(),
            });
        }
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        for label in &self.labels {
            write!(f, "\n  --> {}", label.pos)?;
            if !label.message.is_empty() {
                write!(f, ": {}", label.message)?;
            }
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}
