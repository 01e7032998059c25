//! Marker-based extraction from free-form model replies.
//!
//! Every pipeline asks the model to end its reply with a keyword such as
//! `FINAL:` or `AGGREGATED_PREDICTION:` followed by the structured value.
//! A [`Marker`] describes one such keyword and how much text after it makes
//! up the value. Extraction returns `Option<String>`; what to do when the
//! marker is missing is a separate, named [`Fallback`] rule.
//!
//! | Marker | Value | Occurrence | Case |
//! |--------|-------|------------|------|
//! | [`Marker::FINAL`] | rest of line | first | exact |
//! | [`Marker::FINAL_LABEL`] | one word | first | exact |
//! | [`Marker::FINAL_CODE`] | rest of text | last | exact |
//! | [`Marker::INTERNAL_PREDICTION`] | rest of text | first | any |
//! | [`Marker::AGGREGATED_PREDICTION`] | rest of text | first | any |
//! | [`Marker::LIST_PREDICTION`] | rest of text | first | any |
//! | [`Marker::FINAL_ANSWER`] | rest of text | last | any |

/// How much text after the keyword forms the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSpan {
    /// A single run of word characters (letters, digits, `_`)
    Word,
    /// Everything up to the end of the line
    Line,
    /// Everything up to the end of the text
    Rest,
}

/// Which keyword occurrence to use when the marker appears more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    First,
    Last,
}

/// What to produce when a marker is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Use the whole reply, trimmed
    WholeText,
    /// Use a fixed sentinel string
    Sentinel(&'static str),
    /// Produce nothing
    Nothing,
}

/// A keyword marker and the shape of the value that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    keyword: &'static str,
    span: MarkerSpan,
    occurrence: Occurrence,
    case_insensitive: bool,
}

impl Marker {
    /// `FINAL: <answer>`: math answers
    pub const FINAL: Marker = Marker::new("FINAL:", MarkerSpan::Line, Occurrence::First, false);

    /// `FINAL: <LABEL>`: classifier output
    pub const FINAL_LABEL: Marker =
        Marker::new("FINAL:", MarkerSpan::Word, Occurrence::First, false);

    /// `FINAL CODE:`: critic output; the code block follows the last marker
    pub const FINAL_CODE: Marker =
        Marker::new("FINAL CODE:", MarkerSpan::Rest, Occurrence::Last, false);

    pub const INTERNAL_PREDICTION: Marker = Marker::new(
        "INTERNAL_PREDICTION:",
        MarkerSpan::Rest,
        Occurrence::First,
        true,
    );

    pub const AGGREGATED_PREDICTION: Marker = Marker::new(
        "AGGREGATED_PREDICTION:",
        MarkerSpan::Rest,
        Occurrence::First,
        true,
    );

    pub const LIST_PREDICTION: Marker = Marker::new(
        "LIST_PREDICTION:",
        MarkerSpan::Rest,
        Occurrence::First,
        true,
    );

    pub const FINAL_ANSWER: Marker =
        Marker::new("FINAL_ANSWER:", MarkerSpan::Rest, Occurrence::Last, true);

    /// Define a marker. `keyword` must be ASCII.
    pub const fn new(
        keyword: &'static str,
        span: MarkerSpan,
        occurrence: Occurrence,
        case_insensitive: bool,
    ) -> Self {
        Self {
            keyword,
            span,
            occurrence,
            case_insensitive,
        }
    }

    /// The keyword, including its trailing colon
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    /// Extract the value following this marker.
    ///
    /// Whitespace (including newlines) between the keyword and the value is
    /// skipped. The value is trimmed; an occurrence whose value is empty is
    /// skipped in favour of the next one.
    pub fn find(&self, text: &str) -> Option<String> {
        let mut positions = self.keyword_positions(text);
        if self.occurrence == Occurrence::Last {
            positions.reverse();
        }

        positions
            .into_iter()
            .find_map(|start| self.value_at(&text[start + self.keyword.len()..]))
    }

    /// Extract the value, applying `fallback` when the marker is absent
    pub fn find_or(&self, text: &str, fallback: Fallback) -> Option<String> {
        self.find(text).or_else(|| match fallback {
            Fallback::WholeText => Some(text.trim().to_string()),
            Fallback::Sentinel(sentinel) => Some(sentinel.to_string()),
            Fallback::Nothing => None,
        })
    }

    /// Re-attach the keyword to a value: `KEYWORD: value`
    pub fn render(&self, value: &str) -> String {
        format!("{} {}", self.keyword, value)
    }

    fn keyword_positions(&self, text: &str) -> Vec<usize> {
        // ASCII lowercasing keeps byte offsets stable, so positions found in
        // the folded copy index straight into `text`.
        if self.case_insensitive {
            let folded = text.to_ascii_lowercase();
            let keyword = self.keyword.to_ascii_lowercase();
            folded.match_indices(&keyword).map(|(i, _)| i).collect()
        } else {
            text.match_indices(self.keyword).map(|(i, _)| i).collect()
        }
    }

    fn value_at(&self, after: &str) -> Option<String> {
        let after = after.trim_start();
        let value = match self.span {
            MarkerSpan::Word => {
                let end = after
                    .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                    .unwrap_or(after.len());
                &after[..end]
            }
            MarkerSpan::Line => after.split('\n').next().unwrap_or(""),
            MarkerSpan::Rest => after,
        };

        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}
