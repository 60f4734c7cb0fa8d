//! Core domain types for heading disambiguation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// JobRange
// ---------------------------------------------------------------------------

/// A contiguous span of document lines associated with a job label.
///
/// Bounds are 1-based and inclusive. `end = None` extends the range to the
/// end of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRange {
    /// First line (1-based) covered by this job.
    pub start: usize,
    /// Last line covered by this job, or `None` for unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    /// Label appended to headings inside the range.
    pub label: String,
}

impl JobRange {
    /// A range with an upper bound.
    pub fn bounded(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end: Some(end),
            label: label.into(),
        }
    }

    /// A range that runs to the end of the document.
    pub fn unbounded(start: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end: None,
            label: label.into(),
        }
    }

    /// Whether the 1-based `line` falls inside this range.
    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && self.end.is_none_or(|end| line <= end)
    }
}

impl std::fmt::Display for JobRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}, {}] {}", self.start, end, self.label),
            None => write!(f, "[{}, ..) {}", self.start, self.label),
        }
    }
}

// ---------------------------------------------------------------------------
// HeadingChange
// ---------------------------------------------------------------------------

/// One annotated heading, recorded for the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingChange {
    /// 1-based line number of the heading.
    pub line: usize,
    /// Line text before annotation.
    pub original: String,
    /// Line text after annotation.
    pub updated: String,
    /// Label of the job range that matched.
    pub label: String,
}

impl std::fmt::Display for HeadingChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {} -> {}", self.line, self.original, self.updated)
    }
}
