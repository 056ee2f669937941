//! Command-line entry point: runs the SVG, PNG and WebP phases once.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use icon_export::{IconManifest, SvgWorkflow, WorkflowConfig, builtin, logging};

#[derive(Parser, Debug)]
#[command(name = "icon-export")]
#[command(about = "Export icons to SVG, then rasterize them to themed PNG and WebP")]
struct Args {
    /// Repository root that relative output directories are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// JSON workflow configuration (output dirs, height, themes, ...)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON icon manifest to export instead of the bundled icons
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Override the raster output height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Override the number of concurrent tasks per phase
    #[arg(long)]
    concurrency: Option<usize>,

    /// Log level used when ICON_EXPORT_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args.log_level);

    match run(args).await {
        Ok(failures) if failures == 0 => ExitCode::SUCCESS,
        Ok(failures) => {
            warn!(failures, "Workflow finished with failures");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "Workflow aborted");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> icon_export::Result<usize> {
    let mut config = match &args.config {
        Some(path) => WorkflowConfig::load(path)?,
        None => WorkflowConfig::default(),
    };
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }
    let config = config.resolved(&args.root);

    let library = match &args.manifest {
        Some(path) => IconManifest::load(path)?,
        None => builtin::library(),
    };
    info!(icons = library.len(), root = %args.root.display(), "Starting icon export");

    let workflow = SvgWorkflow::new(config, library)?;
    let report = workflow.run().await?;

    for phase in &report.phases {
        info!(
            phase = %phase.phase,
            success = phase.succeeded,
            failed = phase.failed(),
            "Phase summary"
        );
    }
    Ok(report.total_failures())
}
