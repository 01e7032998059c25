//! Prompt templates for domain classification

use crate::pipeline::StepProfile;

const TAXONOMY_AND_EXAMPLES: &str = r#"
Identify the domain of the problem based on the following definitions:

- **MATH**: Problems requiring calculation, arithmetic, algebra, geometry, or logic to solve. Includes word problems about money, time, quantities, probability, and geometry. If you need to calculate a number, it is MATH.
- **CODING**: Problems asking to write code, functions, or debug software. Look for "python", "function", "code", "dataframe", or programming concepts.
- **FUTURE_PREDICTION**: Questions asking about events that have not happened yet or asking for a prediction about a specific future date/event. Look for "predict", "future", "2025", or specific future dates.
- **PLANNING**: Problems requiring a sequence of actions to achieve a goal given initial conditions and restrictions. Look for "initial conditions", "goal", "actions", "plan", or PDDL-like structures.
- **COMMON_SENSE**: Questions about facts, science, history, geography, or general knowledge. Includes multiple-choice questions about science, biology, physics, or reading comprehension. If it asks for a fact or concept, it is COMMON_SENSE.

First, explain your reasoning for why the problem belongs to a specific domain.
Then, output the final domain in the format: FINAL: <DOMAIN>.

=== MATH DOMAIN EXAMPLES ===

Example 1:
Input: Let $ABCD$ be a convex quadrilateral with $AB = CD = 10$. Find the area.
Reasoning: The problem involves geometry and finding an area. It requires calculation.
Output: FINAL: MATH

Example 2:
Input: A store sells apples for $2 each. If John buys 5 apples and pays with a $20 bill, how much change does he get?
Reasoning: The problem involves money and arithmetic calculation.
Output: FINAL: MATH

=== CODING DOMAIN EXAMPLES ===

Example 1:
Input: Retrieves the names of the repositories of a specified GitHub user.
The function should output with:
    list of str: A list of repository names.
You should write self-contained code starting with:
```
import requests
def task_func(user):
```
Reasoning: The problem asks to write a Python function to interact with an API.
Output: FINAL: CODING

=== FUTURE_PREDICTION DOMAIN EXAMPLES ===

Example 1:
Input: You are an agent that can predict future events. The event to be predicted: "Which rider will place better in the 2025 Tour de France?"
        IMPORTANT: Your final answer MUST end with this exact format:
        \boxed{YOUR_PREDICTION}
Reasoning: The problem asks for a prediction about a future event (2025 Tour de France).
Output: FINAL: FUTURE_PREDICTION

=== PLANNING DOMAIN EXAMPLES ===

Example 1:
Input: I am playing with a set of objects. Here are the actions I can do: Attack, Feast, Succumb, Overcome.
I have restrictions and initial conditions. My goal is to have object c crave object d.
My plan is as follows:
[PLAN]
Reasoning: The problem involves initial conditions, a goal, and a set of actions to create a plan.
Output: FINAL: PLANNING

=== COMMON_SENSE DOMAIN EXAMPLES ===

Example 1:
Input: Which magazine was started first Arthur's Magazine or First for Women?
Reasoning: The problem asks for a historical fact about magazines. No calculation is needed.
Output: FINAL: COMMON_SENSE

Example 2:
Input: Which of the following is a renewable energy source? A. Coal B. Solar C. Oil D. Gas
Reasoning: The problem asks for a scientific fact about energy sources.
Output: FINAL: COMMON_SENSE
"#;

/// Templates for the domain classifier call
pub struct ClassifierPrompts;

impl ClassifierPrompts {
    pub const CLASSIFY: StepProfile = StepProfile::new("classify", 0.0);

    pub fn system() -> &'static str {
        "You are an expert domain classifier. \
         Your task is to identify the domain of the given problem from the following list: \
         MATH, CODING, FUTURE_PREDICTION, PLANNING, COMMON_SENSE. \
         Output ONLY the domain name in the format: FINAL: <DOMAIN>."
    }

    /// Taxonomy, few-shot examples, then the question
    pub fn classify(question: &str) -> String {
        format!(
            "{}\nIdentify the domain for the following problem:\nInput: {}\n",
            TAXONOMY_AND_EXAMPLES, question
        )
    }
}
