use thiserror::Error;

/// Broad classes of evaluation failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Structural,
    Numeric,
    Arithmetic,
    StackUnderflow,
}

/// Everything that can make a statement invalid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("statement is empty")]
    EmptyStatement,

    #[error("comma is not a valid decimal separator")]
    CommaSeparator,

    #[error("doubled decimal point")]
    DoubledDecimalPoint,

    #[error("unbalanced brackets: {opening} opening, {closing} closing")]
    UnbalancedBrackets { opening: usize, closing: usize },

    #[error("unexpected character '{character}' at offset {position}")]
    UnexpectedCharacter { position: usize, character: char },

    #[error("literal '{0}' directly followed by an opening bracket")]
    LiteralBeforeBracket(String),

    #[error("malformed number literal '{0}'")]
    MalformedLiteral(String),

    #[error("number literal longer than {limit} characters")]
    LiteralTooLong { limit: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("'{0}' is not a binary operator")]
    UnsupportedOperator(char),

    #[error("result is not a finite number")]
    NonFinite,

    #[error("failed to round result: {0}")]
    Rounding(String),

    #[error("operand stack underflow")]
    OperandUnderflow,

    #[error("operator stack underflow")]
    OperatorUnderflow,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::EmptyStatement
            | EvalError::CommaSeparator
            | EvalError::DoubledDecimalPoint
            | EvalError::UnbalancedBrackets { .. }
            | EvalError::UnexpectedCharacter { .. }
            | EvalError::LiteralBeforeBracket(_) => ErrorKind::Structural,
            EvalError::MalformedLiteral(_) | EvalError::LiteralTooLong { .. } => {
                ErrorKind::Numeric
            }
            EvalError::DivisionByZero
            | EvalError::UnsupportedOperator(_)
            | EvalError::NonFinite
            | EvalError::Rounding(_) => ErrorKind::Arithmetic,
            EvalError::OperandUnderflow | EvalError::OperatorUnderflow => {
                ErrorKind::StackUnderflow
            }
        }
    }
}

/// Reasons a list of numbers cannot be laid out as a pyramid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PyramidError {
    #[error("cannot build a pyramid from an empty list")]
    Empty,

    #[error("input contains a missing value at index {0}")]
    NullEntry(usize),

    #[error("{0} is not a triangular number")]
    NotTriangular(usize),

    #[error("input of {0} values is too large")]
    TooLarge(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(EvalError::EmptyStatement.kind(), ErrorKind::Structural);
        assert_eq!(
            EvalError::MalformedLiteral("1.2.3".to_string()).kind(),
            ErrorKind::Numeric
        );
        assert_eq!(EvalError::DivisionByZero.kind(), ErrorKind::Arithmetic);
        assert_eq!(EvalError::OperatorUnderflow.kind(), ErrorKind::StackUnderflow);
    }

    #[test]
    fn test_error_messages() {
        let err = EvalError::UnbalancedBrackets {
            opening: 2,
            closing: 1,
        };
        assert_eq!(err.to_string(), "unbalanced brackets: 2 opening, 1 closing");
        assert_eq!(
            PyramidError::NotTriangular(4).to_string(),
            "4 is not a triangular number"
        );
    }
}
