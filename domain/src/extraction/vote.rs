//! Majority vote over repeated samples
//!
//! Self-consistency sampling asks the same question several times and keeps
//! the most common answer. Votes are compared by exact string match, so
//! callers normalize answers first (see [`super::numeric::normalize_numeric`]).

/// Tally of sampled answers, in first-seen order
///
/// # Example
///
/// ```
/// use router_domain::extraction::vote::VoteTally;
///
/// let tally = VoteTally::from_answers(["5", "5", "7"]);
/// assert_eq!(tally.winner(), Some("5"));
/// assert_eq!(tally.total_votes(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    entries: Vec<(String, usize)>,
}

impl VoteTally {
    /// Count the given answers
    pub fn from_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tally = Self::default();
        for answer in answers {
            tally.add(answer);
        }
        tally
    }

    /// Record one more vote
    pub fn add(&mut self, answer: impl Into<String>) {
        let answer = answer.into();
        match self.entries.iter_mut().find(|(a, _)| *a == answer) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((answer, 1)),
        }
    }

    /// The answer with the most votes; ties go to the answer seen first
    pub fn winner(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.entries {
            if best.is_none_or(|(_, count)| entry.1 > *count) {
                best = Some(entry);
            }
        }
        best.map(|(answer, _)| answer.as_str())
    }

    /// Number of votes counted
    pub fn total_votes(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct answers
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Whether every vote went to the same answer
    pub fn is_unanimous(&self) -> bool {
        self.entries.len() == 1
    }

    /// Compact summary for logs, e.g. `5×2, 7×1`
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|(answer, count)| format!("{}×{}", answer, count))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Exact-match majority vote; ties go to the first-encountered answer
pub fn majority_vote<I, S>(answers: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    VoteTally::from_answers(answers).winner().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_wins() {
        assert_eq!(majority_vote(["5", "5", "7"]).as_deref(), Some("5"));
        assert_eq!(majority_vote(["7", "5", "5"]).as_deref(), Some("5"));
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        assert_eq!(majority_vote(["7", "5"]).as_deref(), Some("7"));
        assert_eq!(majority_vote(["3", "4", "4", "3"]).as_deref(), Some("3"));
    }

    #[test]
    fn test_empty() {
        assert!(majority_vote(Vec::<String>::new()).is_none());
        assert_eq!(VoteTally::default().total_votes(), 0);
    }

    #[test]
    fn test_unanimous() {
        let tally = VoteTally::from_answers(["42", "42", "42"]);
        assert!(tally.is_unanimous());
        assert_eq!(tally.distinct(), 1);
    }

    #[test]
    fn test_summary() {
        let tally = VoteTally::from_answers(["5", "7", "5"]);
        assert_eq!(tally.summary(), "5×2, 7×1");
        assert!(!tally.is_unanimous());
    }
}
