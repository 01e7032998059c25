//! Incrementally written JSON answer file
//!
//! Layout on disk:
//!
//! ```text
//! [
//!   {"output":"..."},
//!   {"output":"..."}
//! ]
//! ```
//!
//! The file is reopened in append mode for every record, so each finished
//! answer is on disk before the next question starts.

use router_application::ports::answer_sink::{AnswerSink, AnswerSinkError};
use router_domain::Answer;
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reading an answer file back
#[derive(Error, Debug)]
pub enum AnswerFileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{path} is not a JSON array of answers: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// [`AnswerSink`] writing a JSON array to a file
pub struct JsonAnswerFile {
    path: PathBuf,
    written: usize,
}

impl JsonAnswerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records appended since `begin`
    pub fn written(&self) -> usize {
        self.written
    }

    fn sink_error(&self, error: impl ToString) -> AnswerSinkError {
        AnswerSinkError::new(self.path.display().to_string(), error)
    }

    fn append_text(&self, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(text.as_bytes())
    }
}

impl AnswerSink for JsonAnswerFile {
    fn begin(&mut self) -> Result<(), AnswerSinkError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.sink_error(e))?;
        }
        fs::write(&self.path, "[\n").map_err(|e| self.sink_error(e))?;
        self.written = 0;
        debug!("Started answer file {}", self.path.display());
        Ok(())
    }

    fn append(&mut self, answer: &Answer) -> Result<(), AnswerSinkError> {
        let record = serde_json::to_string(answer).map_err(|e| self.sink_error(e))?;
        let separator = if self.written == 0 { "" } else { ",\n" };
        self.append_text(&format!("{}  {}", separator, record))
            .map_err(|e| self.sink_error(e))?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), AnswerSinkError> {
        let closing = if self.written == 0 { "]\n" } else { "\n]\n" };
        self.append_text(closing).map_err(|e| self.sink_error(e))?;
        debug!(
            "Closed answer file {} ({} answers)",
            self.path.display(),
            self.written
        );
        Ok(())
    }
}

fn read_text(path: &Path) -> Result<String, AnswerFileError> {
    fs::read_to_string(path).map_err(|source| AnswerFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_array(path: &Path, text: &str) -> Result<Vec<Value>, AnswerFileError> {
    serde_json::from_str(text).map_err(|source| AnswerFileError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an answer file as written by a completed run
pub fn read_answers(path: &Path) -> Result<Vec<Value>, AnswerFileError> {
    let text = read_text(path)?;
    parse_array(path, &text)
}

/// Read an answer file, repairing the tail an interrupted run leaves behind
///
/// A missing closing `]` and a dangling `,` are fixed in memory; anything
/// else malformed is still an error.
pub fn read_answers_lenient(path: &Path) -> Result<Vec<Value>, AnswerFileError> {
    let text = read_text(path)?;
    if let Ok(values) = serde_json::from_str(&text) {
        return Ok(values);
    }

    let repaired = repair_unterminated(&text);
    let values = parse_array(path, &repaired)?;
    warn!(
        "{} was not terminated; recovered {} answers",
        path.display(),
        values.len()
    );
    Ok(values)
}

fn repair_unterminated(text: &str) -> String {
    let mut body = text.trim_end();
    if let Some(stripped) = body.strip_suffix(']') {
        body = stripped.trim_end();
    }
    let body = body.strip_suffix(',').unwrap_or(body).trim_end();
    format!("{}\n]", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use router_domain::{AnswerLimits, MAX_OUTPUT_CHARS, validate_answers};

    fn write_answers(path: &Path, outputs: &[&str]) -> JsonAnswerFile {
        let mut file = JsonAnswerFile::new(path);
        file.begin().unwrap();
        for output in outputs {
            file.append(&Answer::new(*output)).unwrap();
        }
        file
    }

    #[test]
    fn test_written_file_reads_back_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("answers.json");

        let mut file = write_answers(&path, &["42", "Error: Request timed out", "(pick-up a)"]);
        file.finish().unwrap();
        assert_eq!(file.written(), 3);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\"output\":\"42\"},\n"));
        assert!(text.ends_with("\n]\n"));

        let answers = read_answers(&path).unwrap();
        assert_eq!(answers.len(), 3);
        assert_eq!(answers[2]["output"], "(pick-up a)");
        let limits = AnswerLimits {
            max_chars: MAX_OUTPUT_CHARS,
        };
        assert!(validate_answers(3, &answers, limits).is_ok());
    }

    #[test]
    fn test_empty_run_is_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");

        let mut file = write_answers(&path, &[]);
        file.finish().unwrap();
        assert!(read_answers(&path).unwrap().is_empty());
    }

    #[test]
    fn test_begin_truncates_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");

        write_answers(&path, &["a", "b", "c"]).finish().unwrap();
        write_answers(&path, &["only"]).finish().unwrap();

        let answers = read_answers(&path).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0]["output"], "only");
    }

    #[test]
    fn test_interrupted_file_needs_lenient_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");

        // No finish(): the run died after two answers
        write_answers(&path, &["first", "second"]);

        assert!(matches!(
            read_answers(&path),
            Err(AnswerFileError::Json { .. })
        ));
        let answers = read_answers_lenient(&path).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[1]["output"], "second");
    }

    #[test]
    fn test_repair_handles_dangling_comma_and_bare_bracket() {
        assert_eq!(repair_unterminated("[\n  {\"output\":\"x\"},\n"), "[\n  {\"output\":\"x\"}\n]");
        assert_eq!(repair_unterminated("[\n"), "[\n]");
        assert_eq!(repair_unterminated("[{\"output\":\"x\"},]"), "[{\"output\":\"x\"}\n]");
    }

    #[test]
    fn test_lenient_reader_still_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        fs::write(&path, "{\"output\": ").unwrap();

        assert!(read_answers_lenient(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_answers(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, AnswerFileError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_append_without_begin_reports_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = JsonAnswerFile::new(dir.path().join("never-begun.json"));

        let err = file.append(&Answer::new("x")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write answers to"));
    }
}
