use crate::calculator::{
    format, reducer, scanner, validator, EvaluationContext, EvaluatorOptions,
};
use crate::error::EvalError;
use log::debug;
use rayon::prelude::*;

/// Evaluates arithmetic statements made of numbers, `+ - * /` and brackets.
///
/// Holds only immutable options, so one instance can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    options: EvaluatorOptions,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvaluatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Evaluates a statement and formats the result.
    ///
    /// # Returns
    ///
    /// * `Some(String)` holding the rounded result.
    /// * `None` if the statement is invalid for any reason.
    pub fn evaluate(&self, statement: &str) -> Option<String> {
        match self.try_evaluate(statement) {
            Ok(result) => Some(result),
            Err(err) => {
                debug!("Statement {:?} rejected: {}", statement, err);
                None
            }
        }
    }

    /// Same as [`Calculator::evaluate`] for callers holding optional text.
    pub fn evaluate_opt(&self, statement: Option<&str>) -> Option<String> {
        statement.and_then(|statement| self.evaluate(statement))
    }

    /// Evaluates a statement, reporting why it was rejected.
    pub fn try_evaluate(&self, statement: &str) -> Result<String, EvalError> {
        let value = self.compute(statement)?;
        format::format_result(value, self.options.precision)
    }

    /// Evaluates a statement without rounding or formatting the result.
    pub fn compute(&self, statement: &str) -> Result<f64, EvalError> {
        debug!("Evaluating statement: {}", statement);

        // Step 1: Normalize and validate the raw text
        let chars = validator::normalize(statement, self.options.literal_policy)?;

        // Step 2: Scan and reduce in one pass
        let mut context = EvaluationContext::new(self.options);
        scanner::scan(&mut context, &chars)?;

        // Step 3: Drain whatever is still pending
        reducer::drain(&mut context)
    }

    /// Evaluates many statements in parallel, preserving input order.
    pub fn evaluate_batch<S>(&self, statements: &[S]) -> Vec<Option<String>>
    where
        S: AsRef<str> + Sync,
    {
        statements
            .par_iter()
            .map(|statement| self.evaluate(statement.as_ref()))
            .collect()
    }
}
