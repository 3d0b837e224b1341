//! Binary operators and their evaluation

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The four keypad operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the ASCII symbol typed on a keyboard
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the symbol printed on the button face
    #[must_use]
    pub const fn label(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Short name used in element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Parses an operator from either its ASCII symbol or its button label
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' | 'x' | 'X' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Evaluates `a op b`.
///
/// Division by zero is rejected before dividing. Non-finite results are
/// reported as overflow, NaN as an invalid result.
pub fn evaluate(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
    if op == Operator::Divide && b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    let result = op.apply(a, b);
    if result.is_nan() {
        Err(CalcError::InvalidResult("NaN".into()))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operator metadata ---

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.symbol(), '/');
    }

    #[test]
    fn test_operator_labels() {
        assert_eq!(Operator::Multiply.label(), '×');
        assert_eq!(Operator::Divide.label(), '÷');
        assert_eq!(format!("{}", Operator::Subtract), "−");
    }

    #[test]
    fn test_operator_from_char_ascii_and_labels() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
            assert_eq!(Operator::from_char(op.label()), Some(op));
        }
        assert_eq!(Operator::from_char('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('%'), None);
    }

    #[test]
    fn test_operator_names_unique() {
        let names: std::collections::HashSet<_> = Operator::ALL.iter().map(Operator::name).collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_operator_serde_lowercase() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
        let op: Operator = serde_json::from_str("\"divide\"").unwrap();
        assert_eq!(op, Operator::Divide);
    }

    // --- evaluate ---

    #[test]
    fn test_evaluate_four_functions() {
        assert_eq!(evaluate(5.0, 3.0, Operator::Add), Ok(8.0));
        assert_eq!(evaluate(5.0, 3.0, Operator::Subtract), Ok(2.0));
        assert_eq!(evaluate(5.0, 3.0, Operator::Multiply), Ok(15.0));
        assert_eq!(evaluate(6.0, 3.0, Operator::Divide), Ok(2.0));
    }

    #[test]
    fn test_evaluate_divide_by_zero() {
        assert_eq!(
            evaluate(9.0, 0.0, Operator::Divide),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            evaluate(0.0, -0.0, Operator::Divide),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_evaluate_zero_divided() {
        assert_eq!(evaluate(0.0, 5.0, Operator::Divide), Ok(0.0));
    }

    #[test]
    fn test_evaluate_overflow() {
        assert_eq!(
            evaluate(f64::MAX, f64::MAX, Operator::Multiply),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_evaluate_nan() {
        assert!(matches!(
            evaluate(f64::INFINITY, f64::INFINITY, Operator::Subtract),
            Err(CalcError::InvalidResult(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(evaluate(a, b, Operator::Add), evaluate(b, a, Operator::Add));
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(evaluate(a, 1.0, Operator::Multiply), Ok(a));
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            let result = evaluate(a, a, Operator::Divide).unwrap();
            prop_assert!((result - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_divide_by_zero_always_fails(a in -1e10f64..1e10f64) {
            prop_assert_eq!(evaluate(a, 0.0, Operator::Divide), Err(CalcError::DivisionByZero));
        }
    }
}
