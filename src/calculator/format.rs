use crate::error::EvalError;
use log::debug;

/// Rounds `value` to `precision` fractional digits, away from zero whenever a
/// discarded digit is non-zero.
///
/// Works on the shortest decimal representation that round-trips to `value`,
/// so `0.1 + 0.2` (printed `0.30000000000000004`) rounds to `0.3001`.
pub fn round_up(value: f64, precision: u32) -> Result<f64, EvalError> {
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }

    let precision = precision as usize;
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    if frac_part.len() <= precision {
        return Ok(value);
    }

    let (kept, dropped) = frac_part.split_at(precision);
    let mut digits: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    if dropped.bytes().any(|b| b != b'0') {
        increment(&mut digits);
    }

    let split = digits.len() - precision;
    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        text.push('-');
    }
    text.extend(digits[..split].iter().map(|&b| b as char));
    if precision > 0 {
        text.push('.');
        text.extend(digits[split..].iter().map(|&b| b as char));
    }

    text.parse::<f64>()
        .map_err(|e| EvalError::Rounding(format!("{}: {}", text, e)))
}

/// Adds one unit in the last place of a string of ASCII digits.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Renders the final operand: whole numbers without a decimal point, anything
/// else through the default `f64` formatting.
pub fn format_result(value: f64, precision: u32) -> Result<String, EvalError> {
    // Adding zero turns -0.0 into 0.0.
    let rounded = round_up(value, precision)? + 0.0;
    let rendered = if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        rounded.to_string()
    };
    debug!("Formatted {} as {}", value, rendered);
    Ok(rendered)
}
