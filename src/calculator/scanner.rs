use crate::calculator::{EvaluationContext, LiteralPolicy, ReductionStrategy, Symbol};
use crate::error::EvalError;
use log::{debug, trace};

/// Single left-to-right pass that accumulates literals and reduces operators
/// as soon as precedence allows.
///
/// On success the context holds whatever the final drain still has to combine.
pub fn scan(context: &mut EvaluationContext, chars: &[char]) -> Result<(), EvalError> {
    debug!("Scanning {} characters", chars.len());

    for &c in chars {
        let symbol = match Symbol::try_from(c) {
            Ok(symbol) => symbol,
            Err(c) => {
                context.buffer.push(c)?;
                continue;
            }
        };

        if symbol == Symbol::OpenBracket {
            if context.options.literal_policy == LiteralPolicy::Strict && !context.buffer.is_empty()
            {
                return Err(EvalError::LiteralBeforeBracket(
                    context.buffer.as_str().to_string(),
                ));
            }
            context.operators.push(symbol);
            continue;
        }

        context.flush_literal()?;
        settle(context, symbol)?;

        if symbol == Symbol::CloseBracket {
            let discarded = context.pop_operator()?;
            if discarded != Symbol::OpenBracket {
                trace!("closing bracket discarded pending {}", discarded);
            }
        } else {
            context.operators.push(symbol);
        }
    }

    context.flush_literal()?;
    debug!(
        "Scan left {} operands and {} operators",
        context.operands.len(),
        context.operators.len()
    );
    Ok(())
}

/// Reduces pending operators that must not wait for `incoming`.
fn settle(context: &mut EvaluationContext, incoming: Symbol) -> Result<(), EvalError> {
    while let Some(previous) = context.operators.pop() {
        if previous.defers_to(incoming) {
            context.operators.push(previous);
            break;
        }
        context.reduce(previous)?;
        if context.options.strategy == ReductionStrategy::SinglePop {
            break;
        }
    }
    Ok(())
}
