use crate::{
    engines::generation::chromosome::Chromosome,
    error::EvaluationError,
    types::{Operator, NUMBER_COUNT, OPERATOR_COUNT, OPERATOR_SLOTS},
};
use std::fmt;

/// A chromosome decoded against a set of input numbers: six operands and
/// the five operators applied between them, folded left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    operands: [i64; NUMBER_COUNT],
    operators: [Operator; OPERATOR_COUNT],
}

impl Expression {
    pub fn decode(chromosome: &Chromosome, numbers: &[i64; NUMBER_COUNT]) -> Self {
        let mut operands = [0; NUMBER_COUNT];
        for (slot, &gene) in operands.iter_mut().zip(chromosome.number_order()) {
            *slot = numbers[gene];
        }

        let mut operators = [Operator::Add; OPERATOR_COUNT];
        for (slot, &gene) in operators.iter_mut().zip(chromosome.operator_order()) {
            *slot = OPERATOR_SLOTS[gene];
        }

        Self {
            operands,
            operators,
        }
    }

    pub fn operands(&self) -> &[i64; NUMBER_COUNT] {
        &self.operands
    }

    pub fn operators(&self) -> &[Operator; OPERATOR_COUNT] {
        &self.operators
    }

    /// Evaluate with exact integer arithmetic
    pub fn evaluate(&self) -> Result<i64, EvaluationError> {
        let mut acc = self.operands[0];
        for (operator, &operand) in self.operators.iter().zip(&self.operands[1..]) {
            acc = apply(*operator, acc, operand)?;
        }
        Ok(acc)
    }

    /// Distance from `target`; 0 is an exact match
    pub fn distance(&self, target: i64) -> Result<u64, EvaluationError> {
        let value = self.evaluate()?;
        Ok(value.abs_diff(target))
    }
}

pub fn apply(operator: Operator, lhs: i64, rhs: i64) -> Result<i64, EvaluationError> {
    match operator {
        Operator::Add => lhs.checked_add(rhs).ok_or(EvaluationError::Overflow),
        Operator::Subtract => lhs.checked_sub(rhs).ok_or(EvaluationError::Overflow),
        Operator::Multiply => lhs.checked_mul(rhs).ok_or(EvaluationError::Overflow),
        Operator::Divide => {
            if rhs == 0 {
                return Err(EvaluationError::DivisionByZero);
            }
            if lhs.checked_rem(rhs).ok_or(EvaluationError::Overflow)? != 0 {
                return Err(EvaluationError::InexactDivision {
                    dividend: lhs,
                    divisor: rhs,
                });
            }
            lhs.checked_div(rhs).ok_or(EvaluationError::Overflow)
        }
    }
}

impl fmt::Display for Expression {
    /// Fully parenthesised form, e.g. `((((1 + 2) * 3) - 4) / 5) + 6`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = self.operands[0].to_string();
        for (i, (operator, operand)) in self.operators.iter().zip(&self.operands[1..]).enumerate() {
            text = if i + 1 == OPERATOR_COUNT {
                format!("{} {} {}", text, operator, operand)
            } else {
                format!("({} {} {})", text, operator, operand)
            };
        }
        write!(f, "{}", text)
    }
}
