//! Numeric answer extraction and normalization for the math pipeline.

use super::markers::Marker;

/// Sentinel recorded for a sample whose reply carried no `FINAL:` line.
pub const NO_ANSWER_FOUND: &str = "Error: No answer found";

/// Extract the math answer following `FINAL:`.
///
/// The value runs to the end of the line; one trailing period is dropped
/// (`FINAL: 5.` yields `"5"`).
pub fn extract_answer(text: &str) -> Option<String> {
    let answer = Marker::FINAL.find(text)?;
    let answer = answer.strip_suffix('.').unwrap_or(&answer).trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}

/// Normalize a numeric answer so that equal numbers compare equal as strings.
///
/// Everything except ASCII digits, `.` and `-` is stripped and the rest is
/// parsed as a float. Whole numbers render without a decimal point
/// (`"$1,200.00"` becomes `"1200"`), other values use the shortest
/// round-trip form (`"2.50"` becomes `"2.5"`). Answers that do not parse are
/// returned trimmed but otherwise unchanged.
pub fn normalize_numeric(answer: &str) -> String {
    let digits: String = answer
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if value.fract() == 0.0 {
                if value == 0.0 {
                    "0".to_string()
                } else {
                    format!("{value:.0}")
                }
            } else {
                format!("{value}")
            }
        }
        _ => answer.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_strips_trailing_period() {
        assert_eq!(extract_answer("FINAL: 5.").as_deref(), Some("5"));
        assert_eq!(
            extract_answer("Thought: ... FINAL: 42").as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_extract_keeps_inner_periods() {
        assert_eq!(extract_answer("FINAL: 3.75").as_deref(), Some("3.75"));
    }

    #[test]
    fn test_extract_missing_marker() {
        assert!(extract_answer("The answer is 5").is_none());
        assert!(extract_answer("FINAL: .").is_none());
    }

    #[test]
    fn test_normalize_integers() {
        assert_eq!(normalize_numeric("5"), "5");
        assert_eq!(normalize_numeric("5.0"), "5");
        assert_eq!(normalize_numeric("$1,200.00"), "1200");
        assert_eq!(normalize_numeric("-3"), "-3");
        assert_eq!(normalize_numeric("-0.0"), "0");
    }

    #[test]
    fn test_normalize_fractions() {
        assert_eq!(normalize_numeric("2.50"), "2.5");
        assert_eq!(normalize_numeric("x = 0.125"), "0.125");
    }

    #[test]
    fn test_normalize_non_numeric_passthrough() {
        assert_eq!(normalize_numeric("  n/a "), "n/a");
        assert_eq!(normalize_numeric("two"), "two");
        assert_eq!(normalize_numeric("1-2"), "1-2");
    }
}
