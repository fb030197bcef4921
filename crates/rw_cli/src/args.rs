// crates/rw_cli/src/args.rs
//
// Offline CLI argument surface.
// - Subcommands: init, reorder, move, report, validate
// - No networked paths (reject any scheme:// like http/https/file)
// - Graph files are rewritten in place unless --out is given

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::RenderFormat;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "rw",
    version,
    disable_help_subcommand = true,
    about = "Offline rank-weight decision engine"
)]
pub struct Cli {
    /// Only log warnings and errors; skip informational stdout lines.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a weighted graph from two name lists (one name per line) and save it.
    Init(InitArgs),
    /// Re-rank the criteria, or one criterion's alternatives, best first.
    Reorder(ReorderArgs),
    /// Move one item to a new rank, shifting the others.
    Move(MoveArgs),
    /// Render final scores, legend and rankings.
    Report(ReportArgs),
    /// Load and validate a graph file; print its digest.
    Validate(ValidateArgs),
}

#[derive(Debug, Args, Clone)]
pub struct InitArgs {
    /// Text file with criteria names, most important first.
    #[arg(long)]
    pub criteria: PathBuf,
    /// Text file with alternative names, most preferred first.
    #[arg(long)]
    pub alternatives: PathBuf,
    /// Graph file to write (`.json` appended when missing).
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Args, Clone)]
pub struct ReorderArgs {
    /// Graph file.
    pub graph: PathBuf,
    /// Full sibling sequence, best first.
    #[arg(required = true, num_args = 1..)]
    pub names: Vec<String>,
    /// Reorder this criterion's alternatives instead of the criteria.
    #[arg(long)]
    pub within: Option<String>,
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct MoveArgs {
    pub graph: PathBuf,
    /// Item to move.
    pub name: String,
    /// Target rank (1 = first).
    pub to_rank: u32,
    /// Move within this criterion's alternatives instead of the criteria.
    #[arg(long)]
    pub within: Option<String>,
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    pub graph: PathBuf,
    /// Output format (default: RW_RENDER, then text).
    #[arg(long, value_enum)]
    pub render: Option<RenderFormat>,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ValidateArgs {
    pub graph: PathBuf,
}

#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NonLocalPath(p) => write!(f, "path must be local file (no scheme): {p}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Entry point used by main.rs. Usage errors exit through clap (code 2).
pub fn parse_and_validate() -> Result<Cli, CliError> {
    let cli = Cli::parse();
    validate(&cli)?;
    Ok(cli)
}

pub fn validate(cli: &Cli) -> Result<(), CliError> {
    for p in all_paths(&cli.command) {
        ensure_local_path(p)?;
    }
    Ok(())
}

/// Reject any explicit URI scheme (e.g., http://, https://, file://).
#[inline]
fn has_scheme(s: &str) -> bool {
    let lower = s.trim().to_ascii_lowercase();
    lower.contains("://") || lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("file:")
}

#[inline]
fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    if let Some(s) = p.to_str() {
        if has_scheme(s) {
            return Err(CliError::NonLocalPath(s.to_string()));
        }
    }
    Ok(())
}

fn all_paths(cmd: &Command) -> Vec<&Path> {
    match cmd {
        Command::Init(a) => vec![&a.criteria, &a.alternatives, &a.out],
        Command::Reorder(a) => std::iter::once(&a.graph).chain(a.out.as_ref()).collect(),
        Command::Move(a) => std::iter::once(&a.graph).chain(a.out.as_ref()).collect(),
        Command::Report(a) => std::iter::once(&a.graph).chain(a.out.as_ref()).collect(),
        Command::Validate(a) => vec![&a.graph],
    }
    .into_iter()
    .map(PathBuf::as_path)
    .collect()
}
