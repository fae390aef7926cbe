//! Shared portfolio snippets.
//!
//! A snippet is the text block a user pastes to share their portfolio
//! outside the app:
//!
//! ```text
//! **Alice's Projects**
//! ○ **Grass**
//! - *Inv: $1,500*
//! - *Earn: $200*
//! ○ **Bless**
//! - *Inv: $2.5k*
//! - *Days: 98*
//! ```
//!
//! - **Parsing**: [`SnippetParser`] turns the text into a
//!   [`PortfolioSnippet`], skipping anything it does not recognize.
//!
//! - **Writing**: [`SnippetWriter`] renders a snippet back into text.
//!
//! - **Format variants**: [`SnippetFormat`] selects the `$` requirement,
//!   header shape and project bullet for both directions.
//!
//! # Example
//!
//! ```
//! use foliosnip::snippet::{parse_snippet, render_snippet};
//!
//! let snippet = parse_snippet("**Alice's Projects**\n○ **Grass**\n- *Inv: $1,500*");
//! assert_eq!(snippet.owner_name, "Alice");
//! assert_eq!(snippet.projects[0].invested_amount, Some(1500.0));
//!
//! let text = render_snippet(&snippet);
//! assert!(text.contains("- *Inv: $1.5k*"));
//! ```

mod format;
mod model;
mod parser;
mod patterns;
mod writer;

pub use format::{HeaderStyle, ProjectMarker, SnippetFormat, PROJECT_BULLET};
pub use model::{CanonicalField, PortfolioSnippet, ProjectRecord, Stat, StatValue, Totals};
pub use parser::{parse_snippet, SnippetParser, DEFAULT_OWNER};
pub use patterns::LinePatterns;
pub use writer::{render_snippet, AmountStyle, LabelStyle, SnippetWriter, WriterOptions};
