//! Snippet parser.
//!
//! Parsing is line-oriented, single-pass and best-effort: unrecognized lines
//! are skipped and malformed input yields an empty or partial project list,
//! never an error.

use tracing::{debug, trace};

use super::format::SnippetFormat;
use super::model::{CanonicalField, PortfolioSnippet, ProjectRecord, Stat, StatValue};
use super::patterns::LinePatterns;
use crate::amount::parse_amount;

/// Owner name used when the snippet has no header line.
pub const DEFAULT_OWNER: &str = "Unknown User";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    AwaitingHeader,
    ReadingProjects,
}

/// Parser for portfolio snippets.
///
/// Compiles its line patterns once; a single parser can be shared and reused
/// across threads.
#[derive(Debug)]
pub struct SnippetParser {
    format: SnippetFormat,
    patterns: LinePatterns,
    default_owner: String,
}

impl SnippetParser {
    /// Create a parser for the default format.
    ///
    /// Either header shape and either project marker are accepted, but
    /// canonical amounts must carry `$`; see [`SnippetFormat::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(SnippetFormat::default())
    }

    /// Create a parser for a specific format variant.
    #[must_use]
    pub fn with_format(format: SnippetFormat) -> Self {
        Self {
            patterns: LinePatterns::new(&format),
            format,
            default_owner: DEFAULT_OWNER.to_string(),
        }
    }

    /// Set the owner name used when no header line matches.
    #[must_use]
    pub fn with_default_owner(mut self, owner: impl Into<String>) -> Self {
        self.default_owner = owner.into();
        self
    }

    /// The format variant this parser accepts.
    #[must_use]
    pub fn format(&self) -> &SnippetFormat {
        &self.format
    }

    /// The owner name used when no header line matches.
    #[must_use]
    pub fn default_owner(&self) -> &str {
        &self.default_owner
    }

    /// Parse a snippet.
    ///
    /// Only the first non-blank line can be the owner header. A project
    /// record is flushed to the output when the next project header or the
    /// end of input is reached. Detail lines before the first project are
    /// ignored.
    #[must_use]
    pub fn parse(&self, input: &str) -> PortfolioSnippet {
        let mut snippet = PortfolioSnippet::new(self.default_owner.clone());
        if input.trim().is_empty() {
            debug!("Empty snippet input");
            return snippet;
        }

        let mut state = ParseState::AwaitingHeader;
        let mut current: Option<ProjectRecord> = None;

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let line_no = index + 1;

            if state == ParseState::AwaitingHeader {
                state = ParseState::ReadingProjects;
                if let Some(owner) = self.patterns.owner(line) {
                    trace!(line = line_no, owner, "Matched header");
                    snippet.owner_name = owner.to_string();
                    continue;
                }
                trace!(line = line_no, "No header line, using default owner");
            }

            if let Some(name) = self.patterns.project_name(line) {
                if let Some(done) = current.replace(ProjectRecord::new(name)) {
                    Self::flush(&mut snippet, done);
                }
            } else if let Some((label, value)) = self.patterns.detail(line) {
                match current.as_mut() {
                    Some(record) => self.apply_detail(record, label, value, line_no),
                    None => trace!(line = line_no, label, "Detail line before any project"),
                }
            } else {
                trace!(line = line_no, "Skipping unrecognized line");
            }
        }

        if let Some(done) = current.take() {
            Self::flush(&mut snippet, done);
        }

        debug!(
            owner = %snippet.owner_name,
            projects = snippet.len(),
            "Parsed snippet"
        );
        snippet
    }

    fn flush(snippet: &mut PortfolioSnippet, record: ProjectRecord) {
        debug!(
            project = %record.name,
            stats = record.stats.len(),
            "Flushed project record"
        );
        snippet.projects.push(record);
    }

    fn apply_detail(&self, record: &mut ProjectRecord, label: &str, value: &str, line_no: usize) {
        let Some(field) = CanonicalField::from_label(label) else {
            record.stats.push(Stat::new(label, StatValue::parse(value)));
            return;
        };

        let digits = match value.strip_prefix('$') {
            Some(rest) => rest,
            None if self.format.require_dollar_sign => {
                trace!(line = line_no, label, "Canonical amount without '$', skipping");
                return;
            }
            None => value,
        };

        match parse_amount(digits) {
            Some(amount) => record.set_canonical(field, amount),
            None => trace!(line = line_no, label, value, "Unparseable canonical amount"),
        }
    }
}

impl Default for SnippetParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a snippet with the default format and owner.
#[must_use]
pub fn parse_snippet(input: &str) -> PortfolioSnippet {
    SnippetParser::new().parse(input)
}
