//! `foliosnip` - CLI for shared portfolio snippets
//!
//! This binary parses snippets into listings, tables or JSON, renders JSON
//! portfolios back into snippet text, and exposes the amount codec.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use foliosnip::cli::{
    AmountCommand, Cli, Command, ConfigCommand, OutputFormat, ParseCommand, RenderCommand,
};
use foliosnip::snippet::{PortfolioSnippet, SnippetParser, SnippetWriter};
use foliosnip::{format_compact, format_grouped, init_logging, parse_amount, view, Config, Error};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Execute the command; configuration is loaded only where it is used
    match cli.command {
        Command::Parse(parse_cmd) => handle_parse(&Config::load_from(cli.config)?, &parse_cmd),
        Command::Render(render_cmd) => handle_render(&Config::load_from(cli.config)?, &render_cmd),
        Command::Amount(amount_cmd) => handle_amount(amount_cmd),
        Command::Config(config_cmd) => handle_config(cli.config, config_cmd),
    }
}

/// Read the whole input from a file, or from stdin when no file is given.
fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

fn handle_parse(config: &Config, cmd: &ParseCommand) -> Result<()> {
    let input = read_input(cmd.file.as_deref())?;
    let owner = cmd
        .owner
        .as_deref()
        .unwrap_or(&config.parser.default_owner);

    let snippet = SnippetParser::with_format(cmd.variant.apply(config.format))
        .with_default_owner(owner)
        .parse(&input);
    tracing::info!(projects = snippet.len(), "Parsed snippet");

    match cmd.format {
        OutputFormat::Plain => println!("{}", view::render_plain(&snippet)),
        OutputFormat::Table => println!("{}", view::render_table(&snippet)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snippet)?),
    }
    Ok(())
}

fn handle_render(config: &Config, cmd: &RenderCommand) -> Result<()> {
    let input = read_input(cmd.file.as_deref())?;
    let snippet: PortfolioSnippet =
        serde_json::from_str(&input).context("input is not a JSON portfolio")?;

    let mut options = config.writer_options();
    if let Some(labels) = cmd.labels {
        options.label_style = labels.into();
    }
    if let Some(amounts) = cmd.amounts {
        options.amount_style = amounts.into();
    }

    let writer = SnippetWriter::new(cmd.variant.apply(config.format), options);
    println!("{}", writer.write(&snippet));
    Ok(())
}

fn handle_amount(cmd: AmountCommand) -> Result<()> {
    match cmd {
        AmountCommand::Format { amount, full } => {
            if full {
                println!("{}", format_grouped(amount));
            } else {
                println!("{}", format_compact(amount));
            }
        }
        AmountCommand::Parse { text } => {
            let amount = parse_amount(&text).ok_or_else(|| Error::invalid_amount(&text))?;
            println!("{amount}");
        }
    }
    Ok(())
}

fn handle_config(config_path: Option<PathBuf>, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Format]");
                println!(
                    "  Require '$':        {}",
                    config.format.require_dollar_sign
                );
                println!("  Header style:       {:?}", config.format.header_style);
                println!("  Project marker:     {:?}", config.format.project_marker);
                println!();
                println!("[Parser]");
                println!("  Default owner:      {}", config.parser.default_owner);
                println!();
                println!("[Output]");
                println!("  Amount style:       {:?}", config.output.amount_style);
                println!("  Label style:        {:?}", config.output.label_style);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_file(&path)
                .with_context(|| format!("configuration error in {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
