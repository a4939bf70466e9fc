//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for sluice using
//! clap's derive API.
//!
//! # Commands
//!
//! - `analyze`: Analyze a pipeline JSON document from a file or stdin
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! sluice analyze pipeline.json
//! sluice analyze --json < pipeline.json
//! ```

use crate::analysis;
use crate::domain::Pipeline;
use crate::output;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Sluice - structural analysis for directed pipeline graphs
///
/// Reads a pipeline document (`{"nodes": [...], "edges": [...]}`) and
/// reports the node count, the edge count, and whether the directed
/// edges form an acyclic graph.
#[derive(Parser, Debug)]
#[command(name = "sluice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze a pipeline document
    ///
    /// Deserializes the document, counts nodes and edges as listed, and
    /// runs cycle detection. Malformed documents (invalid JSON, missing
    /// `id`/`source`/`target` fields) are rejected before any graph
    /// logic runs.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `analyze` command
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the pipeline JSON document; reads stdin when omitted
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline document cannot be read or
    /// deserialized. The analysis itself cannot fail.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => execute_analyze(&args, self.json),
        }
    }
}

/// Load, analyze and print a pipeline document.
fn execute_analyze(args: &AnalyzeArgs, json: bool) -> Result<()> {
    let pipeline = load_pipeline(args.file.as_deref()).with_context(|| match &args.file {
        Some(path) => format!("failed to load pipeline from {}", path.display()),
        None => "failed to load pipeline from stdin".to_string(),
    })?;

    tracing::debug!(
        num_nodes = pipeline.nodes.len(),
        num_edges = pipeline.edges.len(),
        "Loaded pipeline document"
    );

    let result = analysis::analyze(&pipeline.nodes, &pipeline.edges);

    if json {
        println!("{}", output::render_analysis_json(&result)?);
    } else {
        println!("{}", output::render_analysis(&result));
    }

    Ok(())
}

/// Read a pipeline document from the given path, or stdin when absent.
fn load_pipeline(path: Option<&Path>) -> crate::error::Result<Pipeline> {
    let pipeline = match path {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => serde_json::from_reader(io::stdin().lock())?,
    };
    Ok(pipeline)
}
