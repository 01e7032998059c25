//! File locations from TOML (`[paths]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw path configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePathsConfig {
    /// JSON array of `{input, domain?}`
    pub input_file: PathBuf,
    /// JSON array of `{output}`, rewritten by every run
    pub output_file: PathBuf,
    /// Answer files the inspector appends after `output_file`
    pub extra_answer_files: Vec<PathBuf>,
}

impl Default for FilePathsConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("src/data/cse_476_final_project_test_data.json"),
            output_file: PathBuf::from("src/data/cse_476_final_project_answers.json"),
            extra_answer_files: Vec::new(),
        }
    }
}

impl FilePathsConfig {
    /// `output_file` followed by `extra_answer_files`
    pub fn answer_files(&self) -> Vec<PathBuf> {
        std::iter::once(self.output_file.clone())
            .chain(self.extra_answer_files.iter().cloned())
            .collect()
    }
}
