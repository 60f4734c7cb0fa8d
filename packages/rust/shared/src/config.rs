//! Disambiguator configuration: the job-range table and the heading set.
//!
//! The built-in defaults describe the repository README. A TOML file with the
//! same shape can replace them (`fix-headings --config jobs.toml`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HeadingFixError, Result};
use crate::types::JobRange;

/// Default separator placed between a heading and its job label.
pub const DEFAULT_SEPARATOR: &str = " - ";

/// Default heading level (`####`).
pub const DEFAULT_HEADING_LEVEL: u8 = 4;

/// Heading titles that repeat once per job in the README.
pub const DEFAULT_HEADINGS: [&str; 4] = ["配置详解", "步骤详解", "使用方式", "效果说明"];

// ---------------------------------------------------------------------------
// Config struct (matching the jobs TOML schema)
// ---------------------------------------------------------------------------

/// Everything the disambiguator needs: which lines belong to which job,
/// which headings to annotate, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisambiguatorConfig {
    /// Text inserted between the heading and the job label.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Number of `#` characters in a recognized heading.
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,

    /// Recognized heading titles, without the `#` marker.
    #[serde(default = "default_headings")]
    pub headings: Vec<String>,

    /// Ordered job ranges.
    #[serde(default = "default_jobs")]
    pub jobs: Vec<JobRange>,
}

impl Default for DisambiguatorConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            heading_level: default_heading_level(),
            headings: default_headings(),
            jobs: default_jobs(),
        }
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.into()
}
fn default_heading_level() -> u8 {
    DEFAULT_HEADING_LEVEL
}
fn default_headings() -> Vec<String> {
    DEFAULT_HEADINGS.iter().map(|h| h.to_string()).collect()
}
fn default_jobs() -> Vec<JobRange> {
    vec![
        JobRange::bounded(358, 517, "TypeScript Lint"),
        JobRange::bounded(518, 797, "单元测试"),
        JobRange::bounded(797, 1018, "集成检查"),
        JobRange::bounded(1018, 1186, "文档构建"),
        JobRange::unbounded(1186, "通知"),
    ]
}

impl DisambiguatorConfig {
    /// Build a config from a job table, keeping the default heading set.
    pub fn with_jobs(jobs: Vec<JobRange>) -> Self {
        Self {
            jobs,
            ..Self::default()
        }
    }

    /// The heading marker, e.g. `####`.
    pub fn heading_marker(&self) -> String {
        "#".repeat(usize::from(self.heading_level))
    }

    /// Check the table before any document is touched.
    ///
    /// Jobs must be ordered by `start`. A job may begin on the line where the
    /// previous one ends (the earlier job keeps that line) but not before it.
    /// Only the last job may be unbounded.
    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.heading_level) {
            return Err(HeadingFixError::validation(format!(
                "heading_level must be between 1 and 6, got {}",
                self.heading_level
            )));
        }

        if self.headings.is_empty() {
            return Err(HeadingFixError::validation("no headings configured"));
        }
        if let Some(pos) = self.headings.iter().position(|h| h.trim().is_empty()) {
            return Err(HeadingFixError::validation(format!(
                "heading {} is empty",
                pos + 1
            )));
        }

        if self.jobs.is_empty() {
            return Err(HeadingFixError::validation("no jobs configured"));
        }

        let last = self.jobs.len() - 1;
        for (idx, job) in self.jobs.iter().enumerate() {
            let n = idx + 1;

            if job.label.trim().is_empty() {
                return Err(HeadingFixError::validation(format!(
                    "job {n} has an empty label"
                )));
            }
            if job.start == 0 {
                return Err(HeadingFixError::validation(format!(
                    "job {n} ({}) starts at line 0; lines are 1-based",
                    job.label
                )));
            }

            match job.end {
                Some(end) if end < job.start => {
                    return Err(HeadingFixError::validation(format!(
                        "job {n} ({}) ends at line {end} before it starts at {}",
                        job.label, job.start
                    )));
                }
                None if idx != last => {
                    return Err(HeadingFixError::validation(format!(
                        "job {n} ({}) is unbounded but is not the last job",
                        job.label
                    )));
                }
                _ => {}
            }

            if idx > 0 {
                let prev = &self.jobs[idx - 1];
                if job.start <= prev.start {
                    return Err(HeadingFixError::validation(format!(
                        "job {n} ({}) starts at line {}, not after job {idx} ({})",
                        job.label, job.start, prev.label
                    )));
                }
                if let Some(prev_end) = prev.end {
                    if job.start < prev_end {
                        return Err(HeadingFixError::validation(format!(
                            "job {n} ({}) starts at line {} inside job {idx} ({}), which ends at {prev_end}",
                            job.label, job.start, prev.label
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Parse a config from TOML text.
pub fn parse_config(content: &str) -> Result<DisambiguatorConfig> {
    toml::from_str(content).map_err(|e| HeadingFixError::config(e.to_string()))
}

/// Load a config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<DisambiguatorConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| HeadingFixError::io(path, e))?;

    let config = parse_config(&content).map_err(|e| match e {
        HeadingFixError::Config { message } => {
            HeadingFixError::config(format!("failed to parse {}: {message}", path.display()))
        }
        other => other,
    })?;

    tracing::debug!(?path, jobs = config.jobs.len(), "loaded job table");
    Ok(config)
}

/// Load the given file, or fall back to the built-in table.
pub fn load_config(path: Option<&Path>) -> Result<DisambiguatorConfig> {
    match path {
        Some(path) => load_config_from(path),
        None => {
            tracing::debug!("no config file given, using built-in job table");
            Ok(DisambiguatorConfig::default())
        }
    }
}
