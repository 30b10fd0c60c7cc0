use crate::calculator::{EvaluatorOptions, LiteralBuffer, LiteralPolicy, Symbol};
use crate::error::EvalError;
use log::trace;

/// Working state of a single evaluation: operand stack, operator stack and the
/// literal being scanned. Built fresh for every statement.
#[derive(Debug, Clone)]
pub struct EvaluationContext {
    pub operands: Vec<f64>,
    pub operators: Vec<Symbol>,
    pub buffer: LiteralBuffer,
    pub options: EvaluatorOptions,
}

impl EvaluationContext {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self {
            operands: Vec::new(),
            operators: Vec::new(),
            buffer: LiteralBuffer::with_capacity(options.max_literal_len),
            options,
        }
    }

    /// Moves the buffered literal onto the operand stack and clears the buffer.
    ///
    /// An empty buffer pushes nothing. A malformed one is rejected under the
    /// strict policy and dropped under the lenient one.
    pub fn flush_literal(&mut self) -> Result<(), EvalError> {
        let parsed = self.buffer.parse();
        match parsed {
            None => {}
            Some(Ok(value)) => {
                trace!("push operand {}", value);
                self.operands.push(value);
            }
            Some(Err(err)) => match self.options.literal_policy {
                LiteralPolicy::Strict => return Err(err),
                LiteralPolicy::Lenient => {
                    trace!("dropping literal {:?}", self.buffer.as_str());
                }
            },
        }
        self.buffer.clear();
        Ok(())
    }

    /// Pops the two topmost operands, applies `symbol` and pushes the result.
    pub fn reduce(&mut self, symbol: Symbol) -> Result<(), EvalError> {
        let right = self.operands.pop().ok_or(EvalError::OperandUnderflow)?;
        let left = self.operands.pop().ok_or(EvalError::OperandUnderflow)?;
        let result = symbol.apply(left, right)?;
        trace!("reduce {} {} {} = {}", left, symbol, right, result);
        self.operands.push(result);
        Ok(())
    }

    pub fn pop_operator(&mut self) -> Result<Symbol, EvalError> {
        self.operators.pop().ok_or(EvalError::OperatorUnderflow)
    }
}
