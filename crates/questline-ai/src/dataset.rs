//! Training-dataset (JSONL) validation.
//!
//! The fine-tuning dashboard consumes a file with one JSON object per line,
//! each holding a `messages` list of `{role, content}` turns, and rejects
//! files with fewer than the service minimum of examples. The chat path
//! never reads this file; validation here lets users catch format errors
//! locally before uploading.

use std::path::Path;

use questline_common::DatasetError;
use serde::{Deserialize, Serialize};

use crate::Message;

/// One fine-tuning example: a complete conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub messages: Vec<Message>,
}

/// Counts reported after a successful validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    /// Number of examples (lines) in the file.
    pub examples: usize,
    /// Total chat turns across all examples.
    pub turns: usize,
}

/// Validate a JSONL training file, requiring at least `min_examples` lines.
///
/// Line numbers in errors are 1-based. Blank lines are skipped, matching
/// what the upload dashboard accepts.
pub fn validate_file(path: &Path, min_examples: usize) -> Result<DatasetSummary, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut examples = 0;
    let mut turns = 0;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;

        let example: TrainingExample =
            serde_json::from_str(line).map_err(|e| DatasetError::Parse {
                line: line_no,
                message: e.to_string(),
            })?;

        validate_example(line_no, &example)?;

        examples += 1;
        turns += example.messages.len();
    }

    if examples < min_examples {
        return Err(DatasetError::TooFew {
            count: examples,
            min: min_examples,
        });
    }

    tracing::debug!(examples, turns, "Validated training dataset");
    Ok(DatasetSummary { examples, turns })
}

fn validate_example(line_no: usize, example: &TrainingExample) -> Result<(), DatasetError> {
    if example.messages.is_empty() {
        return Err(DatasetError::Invalid {
            line: line_no,
            reason: "example has no messages".into(),
        });
    }

    for (turn_no, message) in example.messages.iter().enumerate() {
        if message.content.trim().is_empty() {
            return Err(DatasetError::Invalid {
                line: line_no,
                reason: format!("turn {} has empty content", turn_no + 1),
            });
        }
    }

    Ok(())
}
