use super::constants::{SCORE_CAP, SCORE_DISTANCE_FLOOR, SCORE_NUMERATOR};
use super::geometry::NormalizedPoint;

/// Score for a guess `distance` normalized units away from the answer.
///
/// Capped at 100; the floor on the denominator keeps `score(0.0)` defined.
#[inline]
pub fn score(distance: f64) -> f64 {
    (SCORE_NUMERATOR / distance.max(SCORE_DISTANCE_FLOOR)).min(SCORE_CAP)
}

#[inline]
pub fn score_guess(guess: NormalizedPoint, answer: NormalizedPoint) -> f64 {
    score(guess.distance(answer))
}

/// Format with `digits` significant digits in the manner of JavaScript's
/// `toPrecision`: fixed notation unless the decimal exponent is below -6 or
/// at least `digits`, then `d.ddde+N`.
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 || !value.is_finite() {
        return format!("{:.*}", digits - 1, value);
    }
    // the exponent is read after rounding so carries (9.99996 -> 10.00) count
    let sci = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -6 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exp.unsigned_abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}
