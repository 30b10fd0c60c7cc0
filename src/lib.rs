pub mod calculator;
pub mod error;
pub mod pyramid;

pub use calculator::{Calculator, EvaluatorOptions, LiteralPolicy, ReductionStrategy};
pub use error::{ErrorKind, EvalError, PyramidError};
pub use pyramid::{build_pyramid, build_pyramid_from, Pyramid};

/// Evaluates `statement` with default options, returning `None` when it is
/// invalid.
pub fn evaluate(statement: &str) -> Option<String> {
    Calculator::new().evaluate(statement)
}
