//! Formula evaluator
//!
//! Substitutes variable references, parses the rendered text, and folds the
//! AST into a numeric outcome.

use crate::ast::{BinaryOperator, Expr, UnaryOperator};
use crate::error::{EvalError, EvalResult};
use crate::parser::parse_expression;
use crate::render::render;
use tally_core::{Formula, VariableTable};

/// Result of evaluating a formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalOutcome {
    /// The formula reduced to a finite number
    Value(f64),
    /// The formula is empty; there is nothing to compute
    ///
    /// Distinct from every failure kind: an empty input is not an error,
    /// and the editing surface renders it differently.
    Undefined,
}

impl EvalOutcome {
    /// The numeric value, if the formula produced one
    pub fn value(&self) -> Option<f64> {
        match self {
            EvalOutcome::Value(n) => Some(*n),
            EvalOutcome::Undefined => None,
        }
    }
}

/// Evaluate a formula against the current variable values
///
/// Pure and total: the same formula and table always produce the same
/// outcome, and every input maps to `Ok` or a specific [`EvalError`].
pub fn evaluate(formula: &Formula, variables: &VariableTable) -> EvalResult<EvalOutcome> {
    if formula.is_empty() {
        return Ok(EvalOutcome::Undefined);
    }

    let text = render(formula, variables)?;
    let expr = parse_expression(&text)?;
    let value = evaluate_expr(&expr)?;

    if !value.is_finite() {
        return Err(EvalError::NumericOverflow);
    }

    Ok(EvalOutcome::Value(value))
}

fn evaluate_expr(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number(n) => Ok(*n),

        Expr::UnaryOp { op, operand } => {
            let value = evaluate_expr(operand)?;
            match op {
                UnaryOperator::Negate => Ok(-value),
            }
        }

        Expr::BinaryOp { op, left, right } => {
            let l = evaluate_expr(left)?;
            let r = evaluate_expr(right)?;

            match op {
                BinaryOperator::Add => Ok(l + r),
                BinaryOperator::Subtract => Ok(l - r),
                BinaryOperator::Multiply => Ok(l * r),
                BinaryOperator::Divide => {
                    if r == 0.0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(l / r)
                    }
                }
                BinaryOperator::Modulo => {
                    if r == 0.0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(l % r)
                    }
                }
                BinaryOperator::Power => {
                    let result = l.powf(r);
                    if result.is_finite() {
                        Ok(result)
                    } else {
                        Err(EvalError::NumericOverflow)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tally_core::{Token, Variable};

    fn sample_table() -> VariableTable {
        VariableTable::new(vec![
            Variable::new("1", "Revenue", 100.0),
            Variable::new("2", "Cost", 50.0),
            Variable::new("3", "Profit Margin", 0.4),
        ])
        .unwrap()
    }

    fn formula_of(tokens: Vec<Token>) -> Formula {
        let mut formula = Formula::new();
        for token in tokens {
            formula.insert(token);
        }
        formula
    }

    #[test]
    fn test_empty_formula_is_undefined() {
        let result = evaluate(&Formula::new(), &sample_table());
        assert_eq!(result, Ok(EvalOutcome::Undefined));
    }

    #[test]
    fn test_reference_subtraction() {
        let formula = formula_of(vec![
            Token::reference("1"),
            Token::literal("-"),
            Token::reference("2"),
        ]);
        let result = evaluate(&formula, &sample_table());
        assert_eq!(result, Ok(EvalOutcome::Value(50.0)));
    }

    #[test]
    fn test_precedence() {
        let formula = formula_of(vec![
            Token::literal("1"),
            Token::literal("+"),
            Token::literal("2"),
            Token::literal("*"),
            Token::literal("3"),
        ]);
        let result = evaluate(&formula, &sample_table());
        assert_eq!(result, Ok(EvalOutcome::Value(7.0)));
    }

    #[test]
    fn test_division_by_zero() {
        let formula = formula_of(vec![
            Token::literal("5"),
            Token::literal("/"),
            Token::literal("0"),
        ]);
        let result = evaluate(&formula, &sample_table());
        assert_eq!(result, Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_modulo_by_zero() {
        let formula = formula_of(vec![
            Token::literal("5"),
            Token::literal("%"),
            Token::literal("0"),
        ]);
        let result = evaluate(&formula, &sample_table());
        assert_eq!(result, Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_broken_reference() {
        let formula = formula_of(vec![Token::reference("99")]);
        let result = evaluate(&formula, &sample_table());
        assert_eq!(result, Err(EvalError::BrokenReference("99".into())));
    }

    #[test]
    fn test_syntax_failure() {
        let formula = formula_of(vec![Token::literal("1"), Token::literal("+")]);
        assert!(matches!(
            evaluate(&formula, &sample_table()),
            Err(EvalError::Syntax(_))
        ));
    }

    #[test]
    fn test_power_right_associative() {
        let formula = formula_of(vec![
            Token::literal("2"),
            Token::literal("^"),
            Token::literal("3"),
            Token::literal("^"),
            Token::literal("2"),
        ]);
        // 2^(3^2) = 512, not (2^3)^2 = 64
        let result = evaluate(&formula, &sample_table());
        assert_eq!(result, Ok(EvalOutcome::Value(512.0)));
    }

    #[test]
    fn test_parenthesised_grouping() {
        let formula = formula_of(vec![
            Token::literal("("),
            Token::reference("1"),
            Token::literal("-"),
            Token::reference("2"),
            Token::literal(")"),
            Token::literal("*"),
            Token::reference("3"),
        ]);
        // (100-50)*0.4 = 20
        let result = evaluate(&formula, &sample_table());
        assert_eq!(result, Ok(EvalOutcome::Value(20.0)));
    }

    #[test]
    fn test_numeric_overflow() {
        // 10^400 exceeds f64 range
        let formula = formula_of(vec![
            Token::literal("10"),
            Token::literal("^"),
            Token::literal("400"),
        ]);
        let result = evaluate(&formula, &sample_table());
        assert_eq!(result, Err(EvalError::NumericOverflow));
    }

    #[test]
    fn test_overflow_from_multiplication() {
        let table = VariableTable::new(vec![Variable::new("big", "Big", f64::MAX)]).unwrap();
        let formula = formula_of(vec![
            Token::reference("big"),
            Token::literal("*"),
            Token::literal("2"),
        ]);
        let result = evaluate(&formula, &table);
        assert_eq!(result, Err(EvalError::NumericOverflow));
    }

    #[test]
    fn test_negative_substitution() {
        let table = VariableTable::new(vec![Variable::new("adj", "Adjustment", -2.5)]).unwrap();
        let formula = formula_of(vec![
            Token::literal("10"),
            Token::literal("-"),
            Token::reference("adj"),
        ]);
        // 10 - (-2.5) renders as "10--2.5"
        let result = evaluate(&formula, &table);
        assert_eq!(result, Ok(EvalOutcome::Value(12.5)));
    }

    #[test]
    fn test_value_edit_visible_to_next_evaluation() {
        let mut table = sample_table();
        let formula = formula_of(vec![
            Token::reference("1"),
            Token::literal("-"),
            Token::reference("2"),
        ]);
        assert_eq!(evaluate(&formula, &table), Ok(EvalOutcome::Value(50.0)));

        table.set_value("2", 30.0);
        assert_eq!(evaluate(&formula, &table), Ok(EvalOutcome::Value(70.0)));
    }

    #[test]
    fn test_deterministic() {
        let formula = formula_of(vec![
            Token::reference("1"),
            Token::literal("*"),
            Token::reference("3"),
        ]);
        let table = sample_table();
        let first = evaluate(&formula, &table);
        let second = evaluate(&formula, &table);
        assert_eq!(first, second);
        assert_eq!(first, Ok(EvalOutcome::Value(40.0)));
    }
}
