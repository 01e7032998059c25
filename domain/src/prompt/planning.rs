//! Prompt templates for the five-step planning pipeline

use crate::pipeline::StepProfile;

/// Templates for extract → draft → validate → format → clean
pub struct PlanningPrompts;

impl PlanningPrompts {
    pub const EXTRACT: StepProfile = StepProfile::new("planning.extract", 0.0)
        .with_max_tokens(3000)
        .with_timeout_secs(120);
    pub const DRAFT: StepProfile = StepProfile::new("planning.draft", 0.3)
        .with_max_tokens(4096)
        .with_timeout_secs(120);
    pub const VALIDATE: StepProfile = StepProfile::new("planning.validate", 0.0)
        .with_max_tokens(2048)
        .with_timeout_secs(120);
    pub const FORMAT: StepProfile = StepProfile::new("planning.format", 0.0)
        .with_max_tokens(1000)
        .with_timeout_secs(60);
    pub const CLEAN: StepProfile = StepProfile::new("planning.clean", 0.0)
        .with_max_tokens(1000)
        .with_timeout_secs(60);

    pub fn extract_system() -> &'static str {
        "You are an expert planning problem extractor. \
         Your goal is to extract the actions, preconditions, add effects, delete effects, \
         initial state, and goal conditions from the natural language description. \
         Output the problem in a clean, symbolic format."
    }

    pub fn extract(problem: &str) -> String {
        format!(
            "Problem Description:\n{}\n\n\
             Please extract and normalize the problem into the following format:\n\
             ACTIONS:\n\
             ActionName(args): pre: ...\n\
             \x20                 add: ...\n\
             \x20                 del: ...\n\n\
             INITIAL STATE:\n\
             fact1, fact2, ...\n\n\
             GOAL:\n\
             condition1, condition2, ...\n\n\
             IMPORTANT:\n\
             1. Map 'object_N' to 'oN' (e.g., 'object_14' -> 'o14').\n\
             2. Keep other object names simple (e.g., 'a', 'b', 'c').\n\
             3. Extract EVERY single fact from the initial state.",
            problem
        )
    }

    pub fn draft_system() -> &'static str {
        "You are a strategic planner. Generate a plan to solve the problem starting from the initial state. \
         Think step by step: check preconditions, apply effects, and update the state until the goal is reached. \
         Produce a FIRST DRAFT plan."
    }

    pub fn draft(normalized: &str) -> String {
        format!(
            "Normalized Problem:\n{}\n\n\
             Please generate a plan. Format your output as:\n\
             PLAN:\n\
             action1 arg1 arg2\n\
             action2 arg1\n\
             ...",
            normalized
        )
    }

    pub fn validate_system() -> &'static str {
        "You are a rigorous plan validator and repairer. \
         Simulate the plan step by step against the problem definition. \
         Check all preconditions at each step. \
         If a step fails (preconditions not met), you MUST find an ACTION from the ACTIONS list \
         that produces the missing precondition as an effect. \
         Insert that action before the failing step. \
         Do NOT invent new actions like 'Add' or 'Fix'. \
         Do NOT use objects that are not in the INITIAL STATE (unless created by an action, which is rare). \
         Output the FINAL VALIDATED PLAN."
    }

    pub fn validate(normalized: &str, draft: &str) -> String {
        format!(
            "Problem Definition:\n{}\n\n\
             Draft Plan:\n{}\n\n\
             Please simulate and repair the plan. Output the final plan in the same format.",
            normalized, draft
        )
    }

    pub fn format_system() -> &'static str {
        "You are a plan formatter. Format the plan exactly as required. \
         Output ONLY the plan steps in parentheses, one per line. \
         IMPORTANT: \n\
         1. Remove 'object', 'crate', 'truck' prefixes from arguments. \
         Just use the identifiers (e.g., 'a', 'b', 'c', 'truck1').\n\
         2. Lowercase the action names (e.g., 'feast', 'drive').\n\
         3. Use the ACTUAL action names from the input plan. Do NOT use placeholders like 'action1'.\n\
         No text, no commentary, no markdown."
    }

    pub fn format(validated: &str) -> String {
        format!("Plan to Format:\n{}\n\nFormat the plan now.", validated)
    }

    pub fn clean_system() -> &'static str {
        "You are a strict cleaner. Return ONLY the action lines in parentheses. \
         Remove any empty lines, markdown code blocks, or extra whitespace."
    }

    pub fn clean(formatted: &str) -> String {
        format!("Input:\n{}\n\nCleaned Output:", formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_step_budgets() {
        assert_eq!(PlanningPrompts::EXTRACT.max_tokens, 3000);
        assert_eq!(PlanningPrompts::DRAFT.max_tokens, 4096);
        assert_eq!(PlanningPrompts::DRAFT.temperature, 0.3);
        assert_eq!(PlanningPrompts::VALIDATE.timeout, Duration::from_secs(120));
        assert_eq!(PlanningPrompts::CLEAN.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_extract_keeps_indentation() {
        let prompt = PlanningPrompts::extract("stack the blocks");
        assert!(prompt.contains("\n                  add: ...\n"));
        assert!(prompt.starts_with("Problem Description:\nstack the blocks"));
    }
}
