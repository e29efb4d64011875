use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use asymptote::cli::{Args, Command};
use asymptote::error::AnalyzeError;
use asymptote::{output, server, CAnalyzer};

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG takes precedence over the verbose flag.
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("asymptote=debug")
    } else {
        EnvFilter::new("asymptote=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    debug!("logging initialized (verbose={})", args.verbose);

    match args.command {
        Command::Analyze {
            paths,
            json,
            pretty,
        } => run_analyze(&paths, json, pretty),
        Command::Serve { port } => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            runtime.block_on(server::serve(port))?;
            Ok(())
        }
    }
}

fn run_analyze(paths: &[std::path::PathBuf], json: bool, pretty: bool) -> Result<()> {
    let analyzer = CAnalyzer::new();
    let mut failed = false;

    for path in paths {
        match analyze_path(&analyzer, path, json, pretty) {
            Ok(()) => {}
            Err(err) if err.is_recoverable() => {
                warn!("{err}");
                failed = true;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if failed {
        anyhow::bail!("one or more inputs could not be analyzed");
    }
    Ok(())
}

fn analyze_path(
    analyzer: &CAnalyzer,
    path: &Path,
    json: bool,
    pretty: bool,
) -> std::result::Result<(), AnalyzeError> {
    if !path.exists() {
        return Err(AnalyzeError::path_not_found(path));
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some("c") {
        warn!("{} does not look like a C file; analyzing anyway", path.display());
    }

    let code = fs::read_to_string(path)?;
    let result = analyzer.analyze(Some("c"), &code);

    if json {
        output::print_json(&result, pretty)
            .map_err(|err| AnalyzeError::invalid_input(err.to_string()))?;
    } else {
        output::print_report(path, &result);
    }
    Ok(())
}
