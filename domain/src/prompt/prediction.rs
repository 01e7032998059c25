//! Prompt templates for future-event prediction
//!
//! The final answer is a Python-style list of strings wrapped in
//! `\boxed{...}`, e.g. `\boxed{['Yes']}`.

use crate::pipeline::StepProfile;

/// Templates for sample → aggregate → format → verify
pub struct PredictionPrompts;

impl PredictionPrompts {
    pub const SAMPLE: StepProfile = StepProfile::new("prediction.sample", 0.7);
    pub const AGGREGATE: StepProfile = StepProfile::new("prediction.aggregate", 0.2);
    pub const FORMAT: StepProfile = StepProfile::new("prediction.format", 0.0);
    pub const VERIFY: StepProfile = StepProfile::new("prediction.verify", 0.0);

    pub fn sample_system() -> &'static str {
        "You are an agent that can predict future events. \
         Your goal is ONLY to decide the internal final prediction."
    }

    pub fn sample(question: &str) -> String {
        format!(
            "Think step-by-step about the future event. Do NOT produce the final output format yet.\n\
             Your goal in this step is ONLY to decide the internal final prediction.\n\n\
             Event to be predicted: \"{}\"\n\n\
             After reasoning, output:\n\
             INTERNAL_PREDICTION: <value>\n\n\
             For Yes/No tasks: <value> is Yes or No\n\
             For numeric predictions: <value> is a number\n\
             For other tasks: <value> is a string or list of strings",
            question
        )
    }

    pub fn aggregate_system() -> &'static str {
        "You are a judge that aggregates predictions."
    }

    /// Judge prompt listing each cleaned candidate on a numbered line
    pub fn aggregate(question: &str, candidates: &[String]) -> String {
        let listed: String = candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| format!("{}. {}\n", i + 1, candidate))
            .collect();

        format!(
            "Question: {}\n\n\
             Here are {} internal predictions from different reasoning paths:\n\
             {}\n\
             Consider the above outputs and reason about which one is the most logical.\n\
             Decide the most logical final internal prediction or if there is another prediction that is more logical.\n\
             Output ONLY the final internal prediction.\n\
             Output keyword: AGGREGATED_PREDICTION:",
            question,
            candidates.len(),
            listed
        )
    }

    pub fn format_system() -> &'static str {
        "You are a precise formatter. Your goal is to convert the answer into a Python list of strings \
         and wrap it in \\boxed{}."
    }

    pub fn format(prediction: &str, question: &str) -> String {
        format!(
            "Your final answer must be a Python list of strings wrapped in \\boxed{{}}.\n\n\
             Example 1:\n\
             Input: Yes\n\
             Output: LIST_PREDICTION: \\boxed{{['Yes']}}\n\n\
             Example 2:\n\
             Input: 42.5\n\
             Output: LIST_PREDICTION: \\boxed{{['42.5']}}\n\n\
             Example 3:\n\
             Input: Apple, Banana, Cherry\n\
             Output: LIST_PREDICTION: \\boxed{{['Apple', 'Banana', 'Cherry']}}\n\n\
             Here is the internal prediction:\n{}\n\n\
             Original Question for context:\n{}\n\n\
             Convert it into the required format.\n\
             Output keyword: LIST_PREDICTION:",
            prediction, question
        )
    }

    pub fn verify_system() -> &'static str {
        "You are a verifier. Ensure the answer is strictly formatted as \\boxed{['...']}."
    }

    pub fn verify(current: &str) -> String {
        format!(
            "Verify if the following answer is strictly formatted as a Python list of strings wrapped in \\boxed{{}}.\n\
             If it is correct, output it exactly as is.\n\
             If it is incorrect, fix it.\n\n\
             Current Answer: {}\n\n\
             Example Correct Formats:\n\
             \\boxed{{['Yes']}}\n\
             \\boxed{{['No']}}\n\
             \\boxed{{['100']}}\n\
             \\boxed{{['Name1', 'Name2']}}\n\n\
             Output ONLY the final answer.\n\
             Output keyword: FINAL_ANSWER:",
            current
        )
    }
}
