//! The four binary operators the keypad offers.

use std::fmt;

/// A binary arithmetic operator selectable from the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Map a keypad symbol to an operator, if it is one.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// The symbol shown on the corresponding button.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero is not special-cased here; it yields an infinity
    /// (or NaN for 0/0) and the engine turns non-finite results into the
    /// error display.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('%'), None);
        assert_eq!(Operator::from_symbol('x'), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(12.0, 3.0), 15.0);
        assert_eq!(Operator::Subtract.apply(12.0, 3.0), 9.0);
        assert_eq!(Operator::Multiply.apply(12.0, 3.0), 36.0);
        assert_eq!(Operator::Divide.apply(12.0, 3.0), 4.0);
    }

    #[test]
    fn test_divide_by_zero_is_non_finite() {
        assert!(!Operator::Divide.apply(8.0, 0.0).is_finite());
    }
}
