//! Prompt templates for the math pipeline (plan → solve → critique)

use crate::pipeline::StepProfile;

/// Templates for the math pipeline
pub struct MathPrompts;

impl MathPrompts {
    pub const PLAN: StepProfile = StepProfile::new("math.plan", 0.7);
    pub const SOLVE: StepProfile = StepProfile::new("math.solve", 0.7);
    pub const CRITIQUE: StepProfile = StepProfile::new("math.critique", 0.7);

    pub fn plan_system() -> &'static str {
        "You are a strategic planner. Create a concise, step-by-step plan to solve the math problem. \
         Do not solve it yourself. Be direct and avoid unnecessary words."
    }

    pub fn plan(question: &str) -> String {
        format!("Question: {}\nPlan:", question)
    }

    pub fn solve_system() -> &'static str {
        r#"You are a precise math solver. Follow the plan to solve the problem. Keep explanations short and to the point. Strictly output the final answer as a single SIMPLIFIED NUMBER in the format: FINAL: <number>. Do not use LaTeX formatting or markdown for the final answer.

Example:
Question: Solve 2x + 5 = 15
Plan: Subtract 5 from both sides, then divide by 2.
Thought: Subtracting 5 from 15 gives 10. Dividing 10 by 2 gives 5.
FINAL: 5"#
    }

    pub fn solve(question: &str, plan: &str) -> String {
        format!("Question: {}\nPlan:\n{}\nThought:", question, plan)
    }

    pub fn critique_system() -> &'static str {
        r#"You are a rigorous math critic. Review the solution for errors. If correct, output the same FINAL: <number>. If incorrect, provide the corrected reasoning and output the new FINAL: <number>. Strictly output the final answer as a single SIMPLIFIED NUMBER in the format: FINAL: <number>. Do not use LaTeX formatting or markdown for the final answer.

Example (Correct):
Critique: The steps followed the plan correctly. The arithmetic is accurate.
FINAL: 5"#
    }

    pub fn critique(question: &str, plan: &str, reasoning: &str) -> String {
        format!(
            "Question: {}\nPlan:\n{}\nReasoning:\n{}\nCritique:",
            question, plan, reasoning
        )
    }
}
