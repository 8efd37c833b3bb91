//! Parsing of comma separated user input into integer sequences.

use tracing::debug;

/// Turns text like `" 4, 4 ,2,2 "` into `[4, 4, 2, 2]`.
///
/// Whitespace is ignored and leading or trailing commas are stripped. Tokens that are not
/// integers are dropped; an empty token between two commas reads as `0`.
pub fn parse_input(input: &str) -> Vec<i64> {
    let compact = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();
    let trimmed = compact.trim_matches(',');
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed
        .split(',')
        .filter_map(|token| {
            let value = parse_token(token);
            if value.is_none() {
                debug!(token, "dropping non-numeric input");
            }
            value
        })
        .collect()
}

fn parse_token(token: &str) -> Option<i64> {
    if token.is_empty() {
        return Some(0);
    }
    if let Ok(value) = token.parse::<i64>() {
        return Some(value);
    }
    // Integral decimals such as `2.0` or `1e1`.
    let value = token.parse::<f64>().ok()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
