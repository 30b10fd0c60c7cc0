use crate::calculator::LiteralPolicy;
use crate::error::EvalError;
use log::debug;
use pest::error::InputLocation;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "calculator/statement.pest"]
struct StatementParser;

/// Strips whitespace and rejects statements that cannot possibly evaluate.
///
/// Bracket balance is only checked by count here; ordering problems such as
/// `")("` are left for the scanner to reject.
pub fn normalize(statement: &str, policy: LiteralPolicy) -> Result<Vec<char>, EvalError> {
    let expression: String = statement.chars().filter(|c| !c.is_whitespace()).collect();
    debug!("Normalized statement: {:?}", expression);

    if expression.is_empty() {
        return Err(EvalError::EmptyStatement);
    }
    if expression.contains(',') {
        return Err(EvalError::CommaSeparator);
    }
    if expression.contains("..") {
        return Err(EvalError::DoubledDecimalPoint);
    }

    let opening = expression.chars().filter(|&c| c == '(').count();
    let closing = expression.chars().filter(|&c| c == ')').count();
    if opening != closing {
        return Err(EvalError::UnbalancedBrackets { opening, closing });
    }

    if policy == LiteralPolicy::Strict {
        check_alphabet(&expression)?;
    }

    Ok(expression.chars().collect())
}

fn check_alphabet(expression: &str) -> Result<(), EvalError> {
    StatementParser::parse(Rule::statement, expression)
        .map(|_| ())
        .map_err(|e| {
            let position = match e.location {
                InputLocation::Pos(position) => position,
                InputLocation::Span((start, _)) => start,
            };
            let character = expression[position..].chars().next().unwrap_or('\0');
            debug!("Rejected character {:?} at offset {}", character, position);
            EvalError::UnexpectedCharacter {
                position,
                character,
            }
        })
}
