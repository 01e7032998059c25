//! Prompt templates for the coding pipeline

use crate::pipeline::StepProfile;

/// Templates for plan → generate → critique → remove preamble
pub struct CodingPrompts;

impl CodingPrompts {
    pub const PLAN: StepProfile = StepProfile::new("coding.plan", 0.2);
    pub const GENERATE: StepProfile = StepProfile::new("coding.generate", 0.2);
    pub const CRITIQUE: StepProfile = StepProfile::new("coding.critique", 0.2);
    pub const REMOVE_PREAMBLE: StepProfile = StepProfile::new("coding.remove_preamble", 0.0);

    pub fn plan_system() -> &'static str {
        "You are a strategic coding planner. Create a concise, step-by-step plan to solve the coding problem. \
         Do not write any code."
    }

    pub fn plan(question: &str) -> String {
        format!(
            "Question: {}\n\n\
             Read the problem and list the exact requirements.\n\
             Then write a short step-by-step outline of what the function should do.\n\
             Do not write any code.",
            question
        )
    }

    pub fn generate_system() -> &'static str {
        "You are a precise Python coder. Implement the function exactly following the plan. \
         Output only valid Python code, no backticks, no explanation. \
         Write simple, readable code without complex logic."
    }

    pub fn generate(question: &str, plan: &str) -> String {
        format!(
            "Question: {}\n\n\
             Plan:\n{}\n\n\
             Now implement the function exactly following your plan.\n\
             Start with the given imports and function signature if provided in the question.\n\
             Output only valid Python code, no backticks, no explanation. \
             Write simple, readable code without complex logic.",
            question, plan
        )
    }

    pub fn critique_system() -> &'static str {
        "You are a rigorous code reviewer. Review the solution for correctness against requirements. \
         Do concise reasoning first, then at the very end output ONLY the final code (no explanation) \
         preceded by the marker 'FINAL CODE:'."
    }

    pub fn critique(question: &str, plan: &str, code: &str) -> String {
        format!(
            "Question: {}\n\n\
             Plan:\n{}\n\n\
             Code:\n{}\n\n\
             Restate the requirements in your own words.\n\
             Go through each requirement one by one and check if the code satisfies it.\n\
             If all are satisfied, output the exact same code.\n\
             If any requirement is violated, output a corrected version of the function that satisfies all requirements.\n\
             Do concise reasoning first, then at the very end output ONLY the final code (no explanation).\n\
             Use the marker 'FINAL CODE:' to indicate the start of the final code block.",
            question, plan, code
        )
    }

    pub fn remove_preamble_system() -> &'static str {
        "You are a code formatter. Your task is to remove the starting code snippet \
         that was provided in the question from the final solution code."
    }

    pub fn remove_preamble(question: &str, code: &str) -> String {
        format!(
            "Question:\n{}\n\n\
             Full Solution Code:\n{}\n\n\
             Task:\n\
             The Question provides a starting code snippet (usually imports and a function signature).\n\
             The Full Solution Code includes this snippet followed by the implementation.\n\
             Please output ONLY the implementation part that follows the starting snippet.\n\
             Preserve the indentation of the implementation.\n\
             Do not include the starting snippet.\n\
             Do not include backticks.\n",
            question, code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_critique_names_marker() {
        let prompt = CodingPrompts::critique("q", "p", "def f(): pass");
        assert!(prompt.contains("Code:\ndef f(): pass"));
        assert!(prompt.contains("'FINAL CODE:'"));
        assert!(CodingPrompts::critique_system().contains("'FINAL CODE:'"));
    }

    #[test]
    fn test_remove_preamble_is_deterministic() {
        assert_eq!(CodingPrompts::REMOVE_PREAMBLE.temperature, 0.0);
        assert_eq!(CodingPrompts::GENERATE.temperature, 0.2);
    }
}
