use std::fmt;

/// Error codes for all Owl diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Tree builder errors
/// - E2xxx: Evaluation errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Tree Builder Errors (E1xxx)
    /// `(` without a matching `)`
    E1001,
    /// `)` without a matching `(`
    E1002,

    // Evaluation Errors (E2xxx)
    /// Intrinsic called with too few arguments
    E2001,
    /// Expected a name
    E2002,
    /// Division by zero
    E2003,
    /// Argument does not name a function
    E2004,
    /// Malformed inline function literal
    E2005,
    /// Frame depth limit exceeded
    E2006,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
        }
    }

    /// One-line summary of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unclosed delimiter",
            ErrorCode::E1002 => "unexpected closing delimiter",
            ErrorCode::E2001 => "too few arguments",
            ErrorCode::E2002 => "expected a name",
            ErrorCode::E2003 => "division by zero",
            ErrorCode::E2004 => "not callable",
            ErrorCode::E2005 => "invalid function literal",
            ErrorCode::E2006 => "frame limit exceeded",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
