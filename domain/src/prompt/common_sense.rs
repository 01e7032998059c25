use crate::pipeline::StepProfile;

/// Templates for sub-questions → solve → extract
pub struct CommonSensePrompts;

impl CommonSensePrompts {
    pub const SUBQUESTIONS: StepProfile =
        StepProfile::new("common_sense.subquestions", 0.2).with_max_tokens(512);
    pub const SOLVE: StepProfile = StepProfile::new("common_sense.solve", 0.0).with_max_tokens(512);
    pub const EXTRACT: StepProfile = StepProfile::new("common_sense.extract", 0.0).with_max_tokens(64);

    pub fn subquestions_system() -> &'static str {
        "You are a careful researcher. Before answering a question, you break it into the \
         smaller facts it depends on and answer each of them briefly."
    }

    pub fn subquestions(question: &str) -> String {
        format!(
            "Question: {}\n\n\
             List two or three clarifying sub-questions whose answers are needed to answer the question.\n\
             Answer each sub-question in one short sentence.\n\
             Do not answer the main question yet.\n\
             Format:\n\
             Q1: ...\nA1: ...\nQ2: ...\nA2: ...",
            question
        )
    }

    pub fn solve_system() -> &'static str {
        "You are a knowledgeable assistant. Use the provided background facts to reason \
         step by step, then state your answer."
    }

    pub fn solve(question: &str, context: &str) -> String {
        format!(
            "Background:\n{}\n\n\
             Question: {}\n\n\
             Reason step by step using the background, then end with a line:\n\
             ANSWER: <answer>",
            context, question
        )
    }

    pub fn extract_system() -> &'static str {
        "You are a strict answer extractor. Output ONLY the final answer as a short phrase, \
         a single word, a number, or an option letter. No explanation, no punctuation at the end."
    }

    pub fn extract(question: &str, reasoning: &str) -> String {
        format!(
            "Question: {}\n\n\
             Reasoning:\n{}\n\n\
             Output only the final answer.",
            question, reasoning
        )
    }
}
