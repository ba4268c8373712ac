//! Shape-polymorphic arithmetic on bubbles.
//!
//! Operands combine by shape:
//! - single/single applies the operator directly
//! - double/double works pairwise up to the shorter length, then carries the
//!   longer tail over unchanged
//! - single/double applies the operator to every element, the element on the
//!   left and the single on the right
//!
//! Division of two singles is the odd one out: it produces a double bubble of
//! quotient and remainder. Every other shape only takes the quotient.

use crate::error::ArithmeticError;
use crate::value::Bubble;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Apply the operator to two scalars with wrapping semantics.
    pub fn apply(self, left: i32, right: i32) -> Result<i32, ArithmeticError> {
        match self {
            BinaryOp::Add => Ok(left.wrapping_add(right)),
            BinaryOp::Subtract => Ok(left.wrapping_sub(right)),
            BinaryOp::Multiply => Ok(left.wrapping_mul(right)),
            BinaryOp::Divide => {
                if right == 0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                Ok(left.wrapping_div(right))
            }
        }
    }
}

/// Combine two bubbles. `left` is the one popped first.
pub fn combine(op: BinaryOp, left: Bubble, right: Bubble) -> Result<Bubble, ArithmeticError> {
    match (left, right) {
        (Bubble::Single(l), Bubble::Single(r)) => {
            if op == BinaryOp::Divide {
                let quotient = op.apply(l, r)?;
                Ok(Bubble::Double(vec![quotient, l.wrapping_rem(r)]))
            } else {
                op.apply(l, r).map(Bubble::Single)
            }
        }
        (Bubble::Double(l), Bubble::Double(r)) => {
            let shorter = l.len().min(r.len());
            let mut result = Vec::with_capacity(l.len().max(r.len()));
            for (&a, &b) in l.iter().zip(&r) {
                result.push(op.apply(a, b)?);
            }
            let tail = if l.len() > shorter { &l[shorter..] } else { &r[shorter..] };
            result.extend_from_slice(tail);
            Ok(Bubble::Double(result))
        }
        (Bubble::Single(s), Bubble::Double(d)) | (Bubble::Double(d), Bubble::Single(s)) => d
            .into_iter()
            .map(|v| op.apply(v, s))
            .collect::<Result<Vec<_>, _>>()
            .map(Bubble::Double),
    }
}

/// Merge two bubbles. `left` is the one popped first.
///
/// Two singles merge into their sum; anything else concatenates the
/// flattened contents, `left` first.
pub fn merge(left: Bubble, right: Bubble) -> Bubble {
    match (left, right) {
        (Bubble::Single(l), Bubble::Single(r)) => Bubble::Single(l.wrapping_add(r)),
        (left, right) => {
            let mut merged = left.into_flat();
            right.flatten_into(&mut merged);
            Bubble::Double(merged)
        }
    }
}
