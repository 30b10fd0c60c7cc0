use crate::calculator::{EvaluationContext, ReductionStrategy};
use crate::error::EvalError;
use log::debug;

/// Reduces whatever the scan left behind down to a single value.
pub fn drain(context: &mut EvaluationContext) -> Result<f64, EvalError> {
    debug!(
        "Draining {} operators against {} operands",
        context.operators.len(),
        context.operands.len()
    );

    match context.options.strategy {
        ReductionStrategy::SinglePop => {
            while context.operands.len() != 1 {
                let symbol = context.pop_operator()?;
                context.reduce(symbol)?;
            }
        }
        ReductionStrategy::Eager => {
            while let Some(symbol) = context.operators.pop() {
                context.reduce(symbol)?;
            }
            match context.operands.len() {
                0 => return Err(EvalError::OperandUnderflow),
                1 => {}
                _ => return Err(EvalError::OperatorUnderflow),
            }
        }
    }

    context.operands.pop().ok_or(EvalError::OperandUnderflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{EvaluatorOptions, Symbol};

    fn context(
        strategy: ReductionStrategy,
        operands: Vec<f64>,
        operators: Vec<Symbol>,
    ) -> EvaluationContext {
        let mut context = EvaluationContext::new(EvaluatorOptions::default().strategy(strategy));
        context.operands = operands;
        context.operators = operators;
        context
    }

    #[test]
    fn test_drain_right_to_left() {
        let mut ctx = context(
            ReductionStrategy::Eager,
            vec![175.5, 1.0, 2.0],
            vec![Symbol::Subtract, Symbol::Divide],
        );
        assert_eq!(drain(&mut ctx).unwrap(), 175.0);
        assert!(ctx.operands.is_empty());
        assert!(ctx.operators.is_empty());
    }

    #[test]
    fn test_single_value() {
        let mut ctx = context(ReductionStrategy::Eager, vec![42.0], vec![]);
        assert_eq!(drain(&mut ctx).unwrap(), 42.0);
    }

    #[test]
    fn test_eager_rejects_dangling_operator() {
        let mut ctx = context(ReductionStrategy::Eager, vec![1.0], vec![Symbol::Add]);
        assert_eq!(drain(&mut ctx), Err(EvalError::OperandUnderflow));
    }

    #[test]
    fn test_single_pop_ignores_dangling_operator() {
        let mut ctx = context(ReductionStrategy::SinglePop, vec![1.0], vec![Symbol::Add]);
        assert_eq!(drain(&mut ctx).unwrap(), 1.0);
    }

    #[test]
    fn test_missing_operator() {
        let mut eager = context(ReductionStrategy::Eager, vec![1.0, 2.0], vec![]);
        assert_eq!(drain(&mut eager), Err(EvalError::OperatorUnderflow));

        let mut single = context(ReductionStrategy::SinglePop, vec![1.0, 2.0], vec![]);
        assert_eq!(drain(&mut single), Err(EvalError::OperatorUnderflow));
    }

    #[test]
    fn test_no_operands() {
        let mut eager = context(ReductionStrategy::Eager, vec![], vec![]);
        assert_eq!(drain(&mut eager), Err(EvalError::OperandUnderflow));

        let mut single = context(ReductionStrategy::SinglePop, vec![], vec![]);
        assert_eq!(drain(&mut single), Err(EvalError::OperatorUnderflow));
    }

    #[test]
    fn test_stray_bracket_is_rejected() {
        let mut ctx = context(
            ReductionStrategy::SinglePop,
            vec![1.0, 6.0],
            vec![Symbol::OpenBracket],
        );
        assert_eq!(drain(&mut ctx), Err(EvalError::UnsupportedOperator('(')));
    }
}
