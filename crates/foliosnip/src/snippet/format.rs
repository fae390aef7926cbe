//! Format variants of the snippet text.
//!
//! Snippets in the wild come in slightly different shapes: with or without a
//! `$` before canonical amounts, a possessive or plain header, and project
//! lines with or without a `○` bullet. [`SnippetFormat`] selects which shapes
//! the parser accepts and which the writer emits.

use serde::{Deserialize, Serialize};

/// Bullet that may precede a project name.
pub const PROJECT_BULLET: char = '○';

/// Header line shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// `**<Name>'s Projects**`
    Possessive,
    /// `**<Name> Projects**`
    Plain,
    /// Accept either shape; write the possessive one.
    #[default]
    Either,
}

/// Project header line shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectMarker {
    /// `○ **<Name>**`
    Bullet,
    /// `**<Name>**`
    Bare,
    /// Accept either shape; write the bulleted one.
    #[default]
    Either,
}

/// Format variant shared by the parser and the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetFormat {
    /// Canonical amounts must be written as `$<amount>`.
    ///
    /// When false a leading `$` is still tolerated.
    pub require_dollar_sign: bool,
    /// Accepted header shape.
    pub header_style: HeaderStyle,
    /// Accepted project line shape.
    pub project_marker: ProjectMarker,
}

impl Default for SnippetFormat {
    /// Accepts both header shapes and both project markers, and requires
    /// `$` on canonical amounts.
    ///
    /// Bare amounts such as `- *Inv: 1.5k*` are skipped under this format.
    /// Use [`SnippetFormat::review`] or set `require_dollar_sign` to false
    /// to read them.
    fn default() -> Self {
        Self {
            require_dollar_sign: true,
            header_style: HeaderStyle::Either,
            project_marker: ProjectMarker::Either,
        }
    }
}

impl SnippetFormat {
    /// The shape used by the project-sharing display: `$` amounts,
    /// possessive header, bulleted projects.
    #[must_use]
    pub fn shared() -> Self {
        Self {
            require_dollar_sign: true,
            header_style: HeaderStyle::Possessive,
            project_marker: ProjectMarker::Bullet,
        }
    }

    /// The shape used by the shared-data review: bare amounts, plain
    /// header, projects without a bullet.
    #[must_use]
    pub fn review() -> Self {
        Self {
            require_dollar_sign: false,
            header_style: HeaderStyle::Plain,
            project_marker: ProjectMarker::Bare,
        }
    }
}
