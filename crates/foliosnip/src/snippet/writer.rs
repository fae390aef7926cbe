//! Snippet writer.
//!
//! Renders a [`PortfolioSnippet`] back into the shareable text format. The
//! output parses back with a [`SnippetParser`](super::SnippetParser) of the
//! same format.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::format::{HeaderStyle, ProjectMarker, SnippetFormat, PROJECT_BULLET};
use super::model::{CanonicalField, PortfolioSnippet, ProjectRecord, StatValue};
use super::parser::DEFAULT_OWNER;
use super::patterns::{is_writable_label, is_writable_name, is_writable_value};
use crate::amount::{format_compact, format_grouped};

/// How amounts are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountStyle {
    /// Compact notation (`1.5k`). Lossy beyond one decimal digit.
    #[default]
    Compact,
    /// Full amount with thousands separators (`1,500`).
    Full,
}

/// How canonical labels are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `Inv`, `Earn`, `Exp`
    #[default]
    Short,
    /// `Investment`, `Earned`, `Expected`
    Long,
}

/// Writer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Amount notation.
    pub amount_style: AmountStyle,
    /// Canonical label spelling.
    pub label_style: LabelStyle,
}

/// Renders snippets as text.
#[derive(Debug, Clone, Default)]
pub struct SnippetWriter {
    format: SnippetFormat,
    options: WriterOptions,
}

impl SnippetWriter {
    /// Create a writer.
    #[must_use]
    pub fn new(format: SnippetFormat, options: WriterOptions) -> Self {
        Self { format, options }
    }

    /// Render a snippet. Lines are joined with `\n`, without a trailing
    /// newline.
    ///
    /// Text the line patterns cannot carry is left out with a warning: a
    /// project whose name is empty or contains `*` (with all its details),
    /// a stat whose label is empty or contains `*` or `:`, and a raw stat
    /// value that is empty or contains `*`. An owner name with the same
    /// problem is replaced by [`DEFAULT_OWNER`].
    #[must_use]
    pub fn write(&self, snippet: &PortfolioSnippet) -> String {
        let owner = if is_writable_name(&snippet.owner_name) {
            snippet.owner_name.as_str()
        } else {
            warn!(owner = %snippet.owner_name, "Owner name cannot be written, using default");
            DEFAULT_OWNER
        };

        let mut lines = vec![self.header_line(owner)];
        for project in &snippet.projects {
            if !is_writable_name(&project.name) {
                warn!(project = %project.name, "Dropping project with an unwritable name");
                continue;
            }
            self.push_project(&mut lines, project);
        }
        lines.join("\n")
    }

    fn header_line(&self, owner: &str) -> String {
        match self.format.header_style {
            HeaderStyle::Plain => format!("**{owner} Projects**"),
            HeaderStyle::Possessive | HeaderStyle::Either => format!("**{owner}'s Projects**"),
        }
    }

    fn push_project(&self, lines: &mut Vec<String>, project: &ProjectRecord) {
        lines.push(match self.format.project_marker {
            ProjectMarker::Bare => format!("**{}**", project.name),
            ProjectMarker::Bullet | ProjectMarker::Either => {
                format!("{PROJECT_BULLET} **{}**", project.name)
            }
        });

        let dollar = if self.format.require_dollar_sign { "$" } else { "" };
        for field in CanonicalField::ALL {
            if let Some(amount) = project.canonical(field) {
                let label = match self.options.label_style {
                    LabelStyle::Short => field.short_label(),
                    LabelStyle::Long => field.long_label(),
                };
                lines.push(format!("- *{label}: {dollar}{}*", self.amount(amount)));
            }
        }

        for stat in &project.stats {
            if CanonicalField::from_label(&stat.label).is_some() {
                warn!(
                    project = %project.name,
                    label = %stat.label,
                    "Dropping stat with a canonical label"
                );
                continue;
            }
            if !is_writable_label(&stat.label) {
                warn!(
                    project = %project.name,
                    label = %stat.label,
                    "Dropping stat with an unwritable label"
                );
                continue;
            }
            let value = match &stat.value {
                StatValue::Amount(amount) => self.amount(*amount),
                StatValue::Raw(text) if is_writable_value(text) => text.clone(),
                StatValue::Raw(text) => {
                    warn!(
                        project = %project.name,
                        label = %stat.label,
                        value = %text,
                        "Dropping stat with an unwritable value"
                    );
                    continue;
                }
            };
            lines.push(format!("- *{}: {value}*", stat.label));
        }
    }

    fn amount(&self, amount: f64) -> String {
        match self.options.amount_style {
            AmountStyle::Compact => format_compact(amount),
            AmountStyle::Full => format_grouped(amount),
        }
    }
}

/// Render a snippet with the default format and options.
#[must_use]
pub fn render_snippet(snippet: &PortfolioSnippet) -> String {
    SnippetWriter::default().write(snippet)
}
