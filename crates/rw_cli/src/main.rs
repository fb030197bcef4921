// crates/rw_cli/src/main.rs
//
// Exit codes, typed error mapping, config/telemetry bootstrap, and the
// subcommand dispatch. Every graph-changing command loads the file, applies
// one engine operation, and saves the result atomically.

mod args;
mod config;
mod telemetry;

mod exitcodes {
    pub const OK: u8 = 0;
    /// Bad flags, malformed/invalid graph files, bad permutations.
    pub const VALIDATION: u8 = 2;
    /// Read/write failures.
    pub const IO: u8 = 4;
    /// Rank-set errors during recomputation; report rendering failures.
    pub const COMPUTE: u8 = 5;
}

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use args::{parse_and_validate, Cli, Command, InitArgs, MoveArgs, ReorderArgs, ReportArgs, ValidateArgs};
use config::{CliConfig, RenderFormat};
use rw_engine::{EngineError, RankingEngine};
use rw_io::IoError;
use tracing::debug;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    Validation(String),
    Io(String),
    Compute(String),
    Render(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) | MainError::Io(m) | MainError::Compute(m) => f.write_str(m),
            MainError::Render(m) => write!(f, "render: {m}"),
        }
    }
}

impl From<EngineError> for MainError {
    fn from(e: EngineError) -> Self {
        let msg = e.to_string();
        match e {
            EngineError::Weight(_) => MainError::Compute(msg),
            EngineError::Io(IoError::LoadParse { .. }) => MainError::Validation(msg),
            EngineError::Io(IoError::LoadIo(_) | IoError::SaveIo(_)) => MainError::Io(msg),
            EngineError::Core(_)
            | EngineError::UnknownCriterion(_)
            | EngineError::UnknownItem { .. }
            | EngineError::NotAPermutation { .. } => MainError::Validation(msg),
        }
    }
}

fn main() -> ExitCode {
    let cli = match parse_and_validate() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("rw: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION);
        }
    };

    let config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("rw: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION);
        }
    };

    if let Err(e) = telemetry::init(&config, cli.quiet) {
        eprintln!("rw: warning: {e}");
    }

    let rc = match run(&cli, &config) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("rw: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc)
}

fn map_error(e: &MainError) -> u8 {
    match e {
        MainError::Validation(_) => exitcodes::VALIDATION,
        MainError::Io(_) => exitcodes::IO,
        MainError::Compute(_) | MainError::Render(_) => exitcodes::COMPUTE,
    }
}

fn run(cli: &Cli, config: &CliConfig) -> Result<(), MainError> {
    match &cli.command {
        Command::Init(a) => init(a, cli.quiet),
        Command::Reorder(a) => reorder(a, cli.quiet),
        Command::Move(a) => move_item(a, cli.quiet),
        Command::Report(a) => report(a, config),
        Command::Validate(a) => validate(a, cli.quiet),
    }
}

fn init(a: &InitArgs, quiet: bool) -> Result<(), MainError> {
    let criteria = read_text(&a.criteria)?;
    let alternatives = read_text(&a.alternatives)?;
    let engine = RankingEngine::from_input(&criteria, &alternatives)?;
    save(&engine, &a.out, quiet)
}

fn reorder(a: &ReorderArgs, quiet: bool) -> Result<(), MainError> {
    let mut engine = open(&a.graph)?;
    match &a.within {
        Some(criterion) => engine.reorder_alternatives(criterion, &a.names)?,
        None => engine.reorder_criteria(&a.names)?,
    }
    save(&engine, a.out.as_deref().unwrap_or(&a.graph), quiet)
}

fn move_item(a: &MoveArgs, quiet: bool) -> Result<(), MainError> {
    let mut engine = open(&a.graph)?;
    match &a.within {
        Some(criterion) => engine.move_alternative(criterion, &a.name, a.to_rank)?,
        None => engine.move_criterion(&a.name, a.to_rank)?,
    }
    save(&engine, a.out.as_deref().unwrap_or(&a.graph), quiet)
}

fn report(a: &ReportArgs, config: &CliConfig) -> Result<(), MainError> {
    let engine = open(&a.graph)?;
    let model = rw_report::build_model(engine.graph());
    let format = a.render.unwrap_or(config.render);
    let body = render(&model, format)?;

    match &a.out {
        Some(out) => rw_io::prelude::write_atomic(out, body.as_bytes())
            .map_err(|e| MainError::Io(format!("write {}: {e}", out.display()))),
        None => {
            print!("{body}");
            Ok(())
        }
    }
}

fn validate(a: &ValidateArgs, quiet: bool) -> Result<(), MainError> {
    let mut engine = RankingEngine::new();
    let digest = engine.load(&a.graph)?;
    if !quiet {
        println!(
            "ok: {} criteria, {} alternatives, sha256 {digest}",
            engine.criteria().len(),
            engine.alternatives().len()
        );
    }
    Ok(())
}

fn render(model: &rw_report::ReportModel, format: RenderFormat) -> Result<String, MainError> {
    match format {
        RenderFormat::Text => Ok(rw_report::render_text(model)),
        #[cfg(feature = "report-json")]
        RenderFormat::Json => rw_report::render_json(model).map_err(|e| MainError::Render(e.to_string())),
        #[cfg(feature = "report-html")]
        RenderFormat::Html => rw_report::render_html(model).map_err(|e| MainError::Render(e.to_string())),
        #[allow(unreachable_patterns)]
        other => Err(MainError::Validation(format!("renderer not built: {other}"))),
    }
}

// ---------------------------- helpers ----------------------------

fn read_text(path: &Path) -> Result<String, MainError> {
    fs::read_to_string(path).map_err(|e| MainError::Io(format!("read {}: {e}", path.display())))
}

fn open(path: &Path) -> Result<RankingEngine, MainError> {
    let mut engine = RankingEngine::new();
    let digest = engine.load(path)?;
    debug!(path = %path.display(), %digest, "graph opened");
    Ok(engine)
}

fn save(engine: &RankingEngine, path: &Path, quiet: bool) -> Result<(), MainError> {
    let saved = engine.save(path)?;
    if !quiet {
        println!("saved {} (sha256 {})", saved.path.display(), saved.sha256);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_failures_exit_as_compute() {
        let e = MainError::Render("template error".into());
        assert_eq!(map_error(&e), exitcodes::COMPUTE);
        assert_eq!(e.to_string(), "render: template error");
    }

    #[test]
    fn engine_errors_map_by_kind() {
        let parse = MainError::from(EngineError::Io(IoError::LoadParse {
            pointer: "/criteria".into(),
            msg: "bad ranks".into(),
        }));
        assert_eq!(map_error(&parse), exitcodes::VALIDATION);
        let unknown = MainError::from(EngineError::UnknownCriterion("Speed".into()));
        assert_eq!(map_error(&unknown), exitcodes::VALIDATION);
    }

    #[test]
    fn text_render_always_builds() {
        let engine = RankingEngine::from_input("Cost", "A").unwrap();
        let model = rw_report::build_model(engine.graph());
        assert!(render(&model, RenderFormat::Text).is_ok());
    }
}
