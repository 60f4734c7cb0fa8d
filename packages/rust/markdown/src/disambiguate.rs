//! Repeated-heading disambiguation.
//!
//! A [`Disambiguator`] owns a validated job table and a compiled heading
//! matcher. [`Disambiguator::apply`] is pure: it never touches the filesystem
//! and reports what it changed through the returned change log.

use std::borrow::Cow;

use regex::Regex;
use tracing::{debug, trace};

use headingfix_shared::{DisambiguatorConfig, HeadingChange, JobRange, Result};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Result of disambiguating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disambiguation {
    /// The full document after annotation.
    pub content: String,
    /// Every heading that was annotated, in document order.
    pub changes: Vec<HeadingChange>,
}

impl Disambiguation {
    /// Whether the document was left as it was.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Annotates recognized headings with the label of their enclosing job.
#[derive(Debug, Clone)]
pub struct Disambiguator {
    config: DisambiguatorConfig,
    heading_re: Regex,
}

// ---------------------------------------------------------------------------
// Disambiguator
// ---------------------------------------------------------------------------

impl Disambiguator {
    /// Validate `config` and compile its heading matcher.
    pub fn new(config: DisambiguatorConfig) -> Result<Self> {
        config.validate()?;
        let heading_re = build_heading_regex(&config)?;
        for job in &config.jobs {
            debug!(job = %job, "job range");
        }
        debug!(
            jobs = config.jobs.len(),
            headings = config.headings.len(),
            "disambiguator ready"
        );
        Ok(Self { config, heading_re })
    }

    /// The first job (in declaration order) whose range contains the 1-based `line`.
    pub fn job_for_line(&self, line: usize) -> Option<&JobRange> {
        self.config.jobs.iter().find(|job| job.contains(line))
    }

    /// Whether `line` is exactly one of the recognized headings.
    pub fn is_heading(&self, line: &str) -> bool {
        self.heading_re.is_match(line)
    }

    /// Annotate every recognized heading that falls inside a job range.
    ///
    /// `"\r\n"` and lone `'\r'` line endings are read as `'\n'`, and the
    /// result is always joined with `'\n'`. A trailing newline survives.
    pub fn apply(&self, document: &str) -> Disambiguation {
        let mut changes = Vec::new();
        let mut lines: Vec<String> = Vec::new();

        let document = normalize_newlines(document);
        for (idx, line) in document.split('\n').enumerate() {
            let line_no = idx + 1;

            let Some(job) = self.job_for_line(line_no) else {
                lines.push(line.to_string());
                continue;
            };

            if !self.is_heading(line) {
                lines.push(line.to_string());
                continue;
            }

            let updated = format!("{line}{}{}", self.config.separator, job.label);
            trace!(line = line_no, job = %job.label, "annotating heading");

            changes.push(HeadingChange {
                line: line_no,
                original: line.to_string(),
                updated: updated.clone(),
                label: job.label.clone(),
            });
            lines.push(updated);
        }

        debug!(
            lines = lines.len(),
            changes = changes.len(),
            "disambiguation complete"
        );

        Disambiguation {
            content: lines.join("\n"),
            changes,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fold `"\r\n"` and lone `'\r'` into `'\n'`.
fn normalize_newlines(document: &str) -> Cow<'_, str> {
    if document.contains('\r') {
        Cow::Owned(document.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(document)
    }
}

/// Build `^#### (title|title|...)$` from the configured heading set.
fn build_heading_regex(config: &DisambiguatorConfig) -> Result<Regex> {
    let alternatives = config
        .headings
        .iter()
        .map(|h| regex::escape(h))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!("^{} (?:{alternatives})$", config.heading_marker());
    Ok(Regex::new(&pattern)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
