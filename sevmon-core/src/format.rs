use crate::tree::Summary;

/// Output line for commands that only mutate state.
pub const NO_OUTPUT: &str = "No output";

const SIGNIFICANT_DIGITS: usize = 8;
const ZERO_THRESHOLD: f64 = 1e-6;

/// `Min: {min}, Max: {max}, Mean: {mean}`
pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Min: {}, Max: {}, Mean: {}",
        format_value(summary.min),
        format_value(summary.max),
        format_value(summary.mean)
    )
}

/// Renders like C's `%.8g`; magnitudes below `1e-6` collapse to `0`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.abs() < ZERO_THRESHOLD {
        return "0".to_string();
    }
    general(value, SIGNIFICANT_DIGITS)
}

fn general(value: f64, precision: usize) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Scientific rendering first: rounding to `precision` digits can carry
    // into the exponent (9.99999999 -> 1.0000000e1).
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
