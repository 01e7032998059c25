//! Text extraction and aggregation
//!
//! Pure functions over model replies: marker parsing, numeric
//! normalization, majority voting and cleanup of code and plan text.
//! No I/O, no session management.

pub mod cleanup;
pub mod markers;
pub mod numeric;
pub mod vote;

pub use cleanup::{canonical_plan, is_action_line, strip_code_fences, strip_fences_and_language_tag};
pub use markers::{Fallback, Marker, MarkerSpan, Occurrence};
pub use numeric::{NO_ANSWER_FOUND, extract_answer, normalize_numeric};
pub use vote::{VoteTally, majority_vote};
