//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::snippet::{AmountStyle, HeaderStyle, LabelStyle, ProjectMarker, SnippetFormat};

/// Format variant overrides shared by `parse` and `render`.
#[derive(Debug, Clone, Default, Args)]
pub struct FormatArgs {
    /// Canonical amounts without a leading '$'
    #[arg(long)]
    pub bare_amounts: bool,

    /// Header shape
    #[arg(long, value_enum)]
    pub header: Option<HeaderStyleArg>,

    /// Project line shape
    #[arg(long, value_enum)]
    pub marker: Option<ProjectMarkerArg>,
}

impl FormatArgs {
    /// Apply the command-line overrides to a configured format.
    #[must_use]
    pub fn apply(&self, mut format: SnippetFormat) -> SnippetFormat {
        if self.bare_amounts {
            format.require_dollar_sign = false;
        }
        if let Some(header) = self.header {
            format.header_style = header.into();
        }
        if let Some(marker) = self.marker {
            format.project_marker = marker.into();
        }
        format
    }
}

/// Parse command arguments.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Snippet file to read (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Owner name to use when the snippet has no header
    #[arg(long)]
    pub owner: Option<String>,

    /// Format variant overrides
    #[command(flatten)]
    pub variant: FormatArgs,
}

/// Render command arguments.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// JSON snippet file to read (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Canonical label spelling
    #[arg(short, long, value_enum)]
    pub labels: Option<LabelStyleArg>,

    /// Amount notation
    #[arg(short, long, value_enum)]
    pub amounts: Option<AmountStyleArg>,

    /// Format variant overrides
    #[command(flatten)]
    pub variant: FormatArgs,
}

/// Amount codec commands.
#[derive(Debug, Subcommand)]
pub enum AmountCommand {
    /// Format a number in compact notation
    Format {
        /// The amount to format
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Write the full amount with thousands separators instead
        #[arg(long)]
        full: bool,
    },

    /// Parse compact or comma-separated notation into a number
    Parse {
        /// The text to parse (e.g. "2.5k", "1,500")
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Header style argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeaderStyleArg {
    /// `**<Name>'s Projects**`
    Possessive,
    /// `**<Name> Projects**`
    Plain,
    /// Either shape
    Either,
}

impl From<HeaderStyleArg> for HeaderStyle {
    fn from(arg: HeaderStyleArg) -> Self {
        match arg {
            HeaderStyleArg::Possessive => Self::Possessive,
            HeaderStyleArg::Plain => Self::Plain,
            HeaderStyleArg::Either => Self::Either,
        }
    }
}

/// Project marker argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectMarkerArg {
    /// `○ **<Name>**`
    Bullet,
    /// `**<Name>**`
    Bare,
    /// Either shape
    Either,
}

impl From<ProjectMarkerArg> for ProjectMarker {
    fn from(arg: ProjectMarkerArg) -> Self {
        match arg {
            ProjectMarkerArg::Bullet => Self::Bullet,
            ProjectMarkerArg::Bare => Self::Bare,
            ProjectMarkerArg::Either => Self::Either,
        }
    }
}

/// Label style argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelStyleArg {
    /// `Inv`, `Earn`, `Exp`
    Short,
    /// `Investment`, `Earned`, `Expected`
    Long,
}

impl From<LabelStyleArg> for LabelStyle {
    fn from(arg: LabelStyleArg) -> Self {
        match arg {
            LabelStyleArg::Short => Self::Short,
            LabelStyleArg::Long => Self::Long,
        }
    }
}

/// Amount style argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AmountStyleArg {
    /// `1.5k`
    Compact,
    /// `1,500`
    Full,
}

impl From<AmountStyleArg> for AmountStyle {
    fn from(arg: AmountStyleArg) -> Self {
        match arg {
            AmountStyleArg::Compact => Self::Compact,
            AmountStyleArg::Full => Self::Full,
        }
    }
}

/// Output format for the parse command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented listing with totals
    #[default]
    Plain,
    /// Aligned table
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_args_no_overrides() {
        let format = SnippetFormat::shared();
        assert_eq!(FormatArgs::default().apply(format), format);
    }

    #[test]
    fn test_format_args_all_overrides() {
        let args = FormatArgs {
            bare_amounts: true,
            header: Some(HeaderStyleArg::Plain),
            marker: Some(ProjectMarkerArg::Bare),
        };
        assert_eq!(args.apply(SnippetFormat::default()), SnippetFormat::review());
    }

    #[test]
    fn test_format_args_partial_overrides() {
        let args = FormatArgs {
            bare_amounts: true,
            marker: Some(ProjectMarkerArg::Bullet),
            ..FormatArgs::default()
        };
        let format = args.apply(SnippetFormat::default());
        assert!(!format.require_dollar_sign);
        assert_eq!(format.header_style, HeaderStyle::Either);
        assert_eq!(format.project_marker, ProjectMarker::Bullet);
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(HeaderStyle::from(HeaderStyleArg::Possessive), HeaderStyle::Possessive);
        assert_eq!(ProjectMarker::from(ProjectMarkerArg::Either), ProjectMarker::Either);
        assert_eq!(LabelStyle::from(LabelStyleArg::Long), LabelStyle::Long);
        assert_eq!(AmountStyle::from(AmountStyleArg::Full), AmountStyle::Full);
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }
}
