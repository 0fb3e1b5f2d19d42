//! Structural feature extraction for pattern matching

use arbor_types::{ContentSubmission, ItemType};
use serde::{Deserialize, Serialize};

/// Cheap structural features of a submission. Extraction is pure string
/// inspection; no capability worker runs before recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentFeatures {
    pub item_type: ItemType,
    pub char_count: usize,
    pub word_count: usize,
    pub heading_count: usize,
    pub has_lists: bool,
    pub has_tables: bool,
}

impl ContentFeatures {
    pub fn extract(submission: &ContentSubmission) -> Self {
        let body = submission.body.as_str();
        let mut heading_count = 0;
        let mut has_lists = false;
        let mut has_tables = false;

        for line in body.lines() {
            let trimmed = line.trim_start();
            if trimmed.starts_with('#') {
                heading_count += 1;
            }
            if trimmed.starts_with("- ")
                || trimmed.starts_with("* ")
                || starts_with_ordinal(trimmed)
            {
                has_lists = true;
            }
            if trimmed.starts_with('|') && trimmed.len() > 1 {
                has_tables = true;
            }
        }

        Self {
            item_type: submission.declared_type,
            char_count: body.chars().count(),
            word_count: body.split_whitespace().count(),
            heading_count,
            has_lists,
            has_tables,
        }
    }
}

/// Lines like "1. step" or "2) step" mark an ordered list.
fn starts_with_ordinal(line: &str) -> bool {
    let digits: String = line.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return false;
    }
    matches!(
        line[digits.len()..].chars().next(),
        Some('.') | Some(')')
    )
}
