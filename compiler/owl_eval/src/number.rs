//! Numeric interpretation of atom text.
//!
//! Atoms stay text; every arithmetic or comparison intrinsic reparses its
//! operands. Text that is not a number reads as zero.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use owl_ir::Expr;

/// A parsed operand. Integer results that overflow `i64` continue as floats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Floats at or above this magnitude keep their float rendering.
const INTEGRAL_DISPLAY_LIMIT: f64 = 1e15;

impl Number {
    pub const ZERO: Number = Number::Int(0);
    pub const ONE: Number = Number::Int(1);

    /// Parse atom text. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Number {
        let text = text.trim();
        if let Ok(int) = text.parse::<i64>() {
            return Number::Int(int);
        }
        let float_like = !text.is_empty()
            && text
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
        match text.parse::<f64>() {
            Ok(float) if float_like && float.is_finite() => Number::Float(float),
            _ => Number::ZERO,
        }
    }

    /// Numeric value of an evaluated expression; lists and functions are zero.
    pub fn of(expr: &Expr) -> Number {
        expr.atom_text().map_or(Number::ZERO, Number::parse)
    }

    #[allow(clippy::cast_precision_loss, reason = "float semantics are the point")]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Truncates toward zero, saturating at the `i64` bounds.
    #[allow(clippy::cast_possible_truncation, reason = "saturating truncation")]
    pub fn as_i64(self) -> i64 {
        match self {
            Number::Int(i) => i,
            Number::Float(f) => f as i64,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    /// Integer division truncating toward zero. `None` for a zero divisor.
    pub fn int_div(self, rhs: Number) -> Option<Number> {
        let (a, b) = (self.as_i64(), rhs.as_i64());
        if b == 0 {
            return None;
        }
        Some(Number::Int(a.checked_div(b).unwrap_or_else(|| a.wrapping_div(b))))
    }

    /// Remainder with the sign of the dividend. `None` for a zero divisor.
    pub fn int_rem(self, rhs: Number) -> Option<Number> {
        let (a, b) = (self.as_i64(), rhs.as_i64());
        if b == 0 {
            return None;
        }
        Some(Number::Int(a.checked_rem(b).unwrap_or_else(|| a.wrapping_rem(b))))
    }

    fn int_or_float(
        self,
        rhs: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match int_op(a, b) {
                Some(int) => Number::Int(int),
                None => Number::Float(float_op(self.as_f64(), rhs.as_f64())),
            },
            _ => Number::Float(float_op(self.as_f64(), rhs.as_f64())),
        }
    }

    pub fn into_expr(self) -> Expr {
        Expr::value(self.to_string())
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.int_or_float(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self.int_or_float(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.int_or_float(rhs, i64::checked_mul, |a, b| a * b)
    }
}

/// Floating division. Callers rule out a zero divisor first.
impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        Number::Float(self.as_f64() / rhs.as_f64())
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    #[allow(clippy::cast_possible_truncation, reason = "guarded by the magnitude check")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) if x.fract() == 0.0 && x.abs() < INTEGRAL_DISPLAY_LIMIT => {
                write!(f, "{}", x as i64)
            }
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}
