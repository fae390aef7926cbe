//! `foliosnip` - Shared portfolio snippets
//!
//! This library reads and writes the text block users paste to share their
//! crypto project portfolio: an owner header, one line per project and
//! `- *Label: value*` detail lines carrying invested, earned and expected
//! amounts plus arbitrary stats.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod amount;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod snippet;
pub mod view;

pub use amount::{format_compact, format_grouped, parse_amount};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use snippet::{
    parse_snippet, render_snippet, PortfolioSnippet, ProjectRecord, SnippetFormat, SnippetParser,
    SnippetWriter,
};
