//! Line patterns for the snippet text.
//!
//! Each line of a snippet is matched (after trimming) against one of three
//! regexes: the owner header, a project header, or a detail line. Names,
//! labels and values cannot contain `*`, and labels cannot contain `:`;
//! there is no escaping.

use regex::Regex;

use super::format::{HeaderStyle, ProjectMarker, SnippetFormat};

const POSSESSIVE_HEADER: &str = r"^\*\*(?P<owner>[^*]+?)['’]s Projects\*\*$";
const PLAIN_HEADER: &str = r"^\*\*(?P<owner>[^*]+?) Projects\*\*$";
const EITHER_HEADER: &str = r"^\*\*(?P<owner>[^*]+?)(?:['’]s)? Projects\*\*$";

const BULLET_PROJECT: &str = r"^○\s*\*\*(?P<name>[^*]+)\*\*$";
const BARE_PROJECT: &str = r"^\*\*(?P<name>[^*]+)\*\*$";
const EITHER_PROJECT: &str = r"^(?:○\s*)?\*\*(?P<name>[^*]+)\*\*$";

const DETAIL: &str = r"^-\s*\*(?P<label>[^*:]+):\s*(?P<value>[^*]+)\*$";

/// Compiled line patterns for one [`SnippetFormat`].
#[derive(Debug)]
pub struct LinePatterns {
    header: Regex,
    project: Regex,
    detail: Regex,
}

impl LinePatterns {
    /// Compile the patterns for a format.
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern is invalid.
    #[must_use]
    pub fn new(format: &SnippetFormat) -> Self {
        let header = match format.header_style {
            HeaderStyle::Possessive => POSSESSIVE_HEADER,
            HeaderStyle::Plain => PLAIN_HEADER,
            HeaderStyle::Either => EITHER_HEADER,
        };
        let project = match format.project_marker {
            ProjectMarker::Bullet => BULLET_PROJECT,
            ProjectMarker::Bare => BARE_PROJECT,
            ProjectMarker::Either => EITHER_PROJECT,
        };

        Self {
            header: Regex::new(header).expect("Invalid header pattern"),
            project: Regex::new(project).expect("Invalid project pattern"),
            detail: Regex::new(DETAIL).expect("Invalid detail pattern"),
        }
    }

    /// Extract the owner name from a header line.
    #[must_use]
    pub fn owner<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.header
            .captures(line)
            .and_then(|caps| caps.name("owner"))
            .map(|m| m.as_str().trim())
            .filter(|owner| !owner.is_empty())
    }

    /// Extract the project name from a project header line.
    #[must_use]
    pub fn project_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.project
            .captures(line)
            .and_then(|caps| caps.name("name"))
            .map(|m| m.as_str().trim())
            .filter(|name| !name.is_empty())
    }

    /// Split a detail line into its label and value.
    #[must_use]
    pub fn detail<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.detail.captures(line)?;
        let label = caps.name("label")?.as_str().trim();
        let value = caps.name("value")?.as_str().trim();
        if label.is_empty() || value.is_empty() {
            return None;
        }
        Some((label, value))
    }
}

impl Default for LinePatterns {
    fn default() -> Self {
        Self::new(&SnippetFormat::default())
    }
}

/// Whether an owner or project name can be written so that it parses back.
#[must_use]
pub(crate) fn is_writable_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains('*')
}

/// Whether a detail label can be written so that it parses back.
#[must_use]
pub(crate) fn is_writable_label(label: &str) -> bool {
    !label.trim().is_empty() && !label.contains(['*', ':'])
}

/// Whether a detail value can be written so that it parses back.
#[must_use]
pub(crate) fn is_writable_value(value: &str) -> bool {
    !value.trim().is_empty() && !value.contains('*')
}
