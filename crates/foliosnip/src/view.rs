//! Text views of a parsed snippet.
//!
//! Column visibility follows the data: a canonical column is shown only when
//! at least one project carries that field, and every distinct stat label
//! gets its own column.

use std::fmt::Write as _;

use crate::amount::format_compact;
use crate::snippet::{CanonicalField, PortfolioSnippet};

/// Message shown instead of an empty table.
pub const NO_PROJECTS: &str = "No projects found.";

/// Placeholder for a missing cell.
const MISSING: &str = "-";

/// Which columns a table of projects should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Columns {
    /// Show the invested column.
    pub invested: bool,
    /// Show the earned column.
    pub earned: bool,
    /// Show the expected column.
    pub expected: bool,
    /// Distinct stat labels in first-appearance order.
    pub stat_labels: Vec<String>,
}

impl Columns {
    /// Derive the visible columns from a snippet.
    #[must_use]
    pub fn from_snippet(snippet: &PortfolioSnippet) -> Self {
        let mut columns = Self::default();
        for project in &snippet.projects {
            columns.invested |= project.invested_amount.is_some();
            columns.earned |= project.earned_amount.is_some();
            columns.expected |= project.expected_amount.is_some();
            for stat in &project.stats {
                if !columns.stat_labels.contains(&stat.label) {
                    columns.stat_labels.push(stat.label.clone());
                }
            }
        }
        columns
    }

    /// Check whether a canonical column is visible.
    #[must_use]
    pub fn shows(&self, field: CanonicalField) -> bool {
        match field {
            CanonicalField::Invested => self.invested,
            CanonicalField::Earned => self.earned,
            CanonicalField::Expected => self.expected,
        }
    }

    /// Visible canonical columns in snippet order.
    pub fn canonical(&self) -> impl Iterator<Item = CanonicalField> + '_ {
        CanonicalField::ALL
            .into_iter()
            .filter(move |field| self.shows(*field))
    }
}

/// Render the projects as an aligned plain-text table.
#[must_use]
pub fn render_table(snippet: &PortfolioSnippet) -> String {
    if snippet.is_empty() {
        return NO_PROJECTS.to_string();
    }

    let columns = Columns::from_snippet(snippet);

    let mut header = vec!["Project".to_string()];
    header.extend(columns.canonical().map(|field| field.short_label().to_string()));
    header.extend(columns.stat_labels.iter().cloned());

    let rows: Vec<Vec<String>> = snippet
        .projects
        .iter()
        .map(|project| {
            let mut row = vec![project.name.clone()];
            row.extend(columns.canonical().map(|field| {
                project
                    .canonical(field)
                    .map_or_else(|| MISSING.to_string(), format_compact)
            }));
            row.extend(columns.stat_labels.iter().map(|label| {
                project
                    .stat(label)
                    .map_or_else(|| MISSING.to_string(), ToString::to_string)
            }));
            row
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();

    let mut out = String::new();
    for row in std::iter::once(&header)
        .chain(std::iter::once(&separator))
        .chain(rows.iter())
    {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.truncate(out.trim_end().len());
    out
}

/// Render the snippet as an indented listing followed by totals.
#[must_use]
pub fn render_plain(snippet: &PortfolioSnippet) -> String {
    let mut out = format!("Owner: {}\n", snippet.owner_name);
    if snippet.is_empty() {
        out.push_str(NO_PROJECTS);
        return out;
    }

    let _ = write!(out, "Projects: {}", snippet.len());
    for project in &snippet.projects {
        let _ = write!(out, "\n\n{}", project.name);
        for field in CanonicalField::ALL {
            if let Some(amount) = project.canonical(field) {
                let _ = write!(
                    out,
                    "\n  {}: {}",
                    field.short_label(),
                    format_compact(amount)
                );
            }
        }
        for stat in &project.stats {
            let _ = write!(out, "\n  {}: {}", stat.label, stat.value);
        }
    }

    let totals = snippet.totals();
    if CanonicalField::ALL
        .iter()
        .any(|field| totals.get(*field).is_some())
    {
        out.push_str("\n\nTotals");
        for field in CanonicalField::ALL {
            if let Some(amount) = totals.get(field) {
                let _ = write!(
                    out,
                    "\n  {}: {}",
                    field.short_label(),
                    format_compact(amount)
                );
            }
        }
    }
    out
}
