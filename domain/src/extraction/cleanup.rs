//! Post-processing of model replies: code fences and plan lines.

use regex::Regex;
use std::sync::LazyLock;

/// `(action arg1 arg2 ...)` with no nested parentheses
static ACTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*[A-Za-z][\w-]*(\s+[^\s()]+)*\s*\)$").expect("action line pattern is valid")
});

/// Strip one pair of surrounding Markdown code fences.
///
/// Handles an opening ```` ```python ```` or bare ```` ``` ```` and a closing
/// ```` ``` ````; inner fences are left alone.
pub fn strip_code_fences(text: &str) -> String {
    let mut code = text.trim();
    if let Some(rest) = code.strip_prefix("```python") {
        code = rest;
    } else if let Some(rest) = code.strip_prefix("```") {
        code = rest;
    }
    if let Some(rest) = code.strip_suffix("```") {
        code = rest;
    }
    code.trim().to_string()
}

/// Remove every code fence, then a leading `python` language tag.
pub fn strip_fences_and_language_tag(text: &str) -> String {
    let without_fences = text.replace("```", "");
    let trimmed = without_fences.trim();
    trimmed
        .strip_prefix("python")
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Whether `line` (already trimmed) is a canonical `(action args...)` step
pub fn is_action_line(line: &str) -> bool {
    ACTION_LINE.is_match(line)
}

/// Keep only canonical action lines, one per line, in order.
///
/// Blank lines, prose, Markdown fences and anything else the formatter left
/// behind are dropped. Returns an empty string when no action line remains.
pub fn canonical_plan(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| is_action_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_python() {
        let text = "```python\ndef f():\n    return 1\n```";
        assert_eq!(strip_code_fences(text), "def f():\n    return 1");
    }

    #[test]
    fn test_strip_code_fences_bare_and_none() {
        assert_eq!(strip_code_fences("```\nx = 1\n```"), "x = 1");
        assert_eq!(strip_code_fences("x = 1"), "x = 1");
    }

    #[test]
    fn test_strip_fences_and_language_tag() {
        let text = "```python\n    return sorted(xs)\n```";
        assert_eq!(strip_fences_and_language_tag(text), "return sorted(xs)");
    }

    #[test]
    fn test_action_lines() {
        assert!(is_action_line("(feast d c)"));
        assert!(is_action_line("(succumb d)"));
        assert!(is_action_line("(drive truck1 depot0 distributor0)"));
        assert!(is_action_line("(paltry o11 o10 o2)"));
        assert!(!is_action_line("feast d c"));
        assert!(!is_action_line("1. (feast d c)"));
        assert!(!is_action_line("()"));
        assert!(!is_action_line("(feast (d) c)"));
    }

    #[test]
    fn test_canonical_plan_filters_noise() {
        let text = "Here is the plan:\n```\n(attack b)\n\n  (overcome b a)  \n```\nDone.";
        assert_eq!(canonical_plan(text), "(attack b)\n(overcome b a)");
    }

    #[test]
    fn test_canonical_plan_empty_when_no_actions() {
        assert_eq!(canonical_plan("I could not find a plan."), "");
    }
}
