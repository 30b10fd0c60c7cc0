use crate::error::EvalError;
use std::fmt;

mod context;
mod evaluator;
mod literal;
pub mod format;
pub mod options;
pub mod reducer;
pub mod scanner;
pub mod validator;

pub use context::EvaluationContext;
pub use evaluator::Calculator;
pub use literal::LiteralBuffer;
pub use options::{EvaluatorOptions, LiteralPolicy, ReductionStrategy};

/// Characters that drive the scanner: the four binary operators and brackets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Add,
    Subtract,
    Multiply,
    Divide,
    OpenBracket,
    CloseBracket,
}

impl Symbol {
    /// Rank used to decide whether a pending operator is reduced or deferred.
    ///
    /// An open bracket ranks highest so nothing is ever reduced across it, a
    /// closing bracket ranks lowest so it forces everything above the matching
    /// open bracket to reduce.
    pub fn priority(&self) -> u8 {
        match self {
            Symbol::Add | Symbol::Subtract => 1,
            Symbol::Multiply | Symbol::Divide => 2,
            Symbol::OpenBracket => 3,
            Symbol::CloseBracket => 0,
        }
    }

    /// True when `self`, sitting on the operator stack, must stay there while
    /// `incoming` is layered on top of it.
    pub fn defers_to(&self, incoming: Symbol) -> bool {
        *self == Symbol::OpenBracket || incoming.priority() > self.priority()
    }

    pub fn as_char(&self) -> char {
        match self {
            Symbol::Add => '+',
            Symbol::Subtract => '-',
            Symbol::Multiply => '*',
            Symbol::Divide => '/',
            Symbol::OpenBracket => '(',
            Symbol::CloseBracket => ')',
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Symbol::Add => Ok(left + right),
            Symbol::Subtract => Ok(left - right),
            Symbol::Multiply => Ok(left * right),
            Symbol::Divide => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Symbol::OpenBracket | Symbol::CloseBracket => {
                Err(EvalError::UnsupportedOperator(self.as_char()))
            }
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Symbol::Add),
            '-' => Ok(Symbol::Subtract),
            '*' => Ok(Symbol::Multiply),
            '/' => Ok(Symbol::Divide),
            '(' => Ok(Symbol::OpenBracket),
            ')' => Ok(Symbol::CloseBracket),
            other => Err(other),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
