//! File adapters for questions and answers.
//!
//! - [`JsonAnswerFile`] implements the [`AnswerSink`](router_application::AnswerSink)
//!   port, writing a JSON array one record at a time.
//! - [`read_answers`] / [`read_answers_lenient`] load answer files back.
//! - [`load_questions`] / [`load_question_records`] read the input file.

mod answer_file;
mod question_file;

pub use answer_file::{AnswerFileError, JsonAnswerFile, read_answers, read_answers_lenient};
pub use question_file::{QuestionFileError, load_question_records, load_questions};
