use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info};

use crate::args::ProbeArgs;
use crate::config::{self, ConfigFile, ProbeSettings};
use crate::error::{AppResult, ConfigError};
use crate::http::{ClientOptions, ReqwestTransport, build_client};
use crate::output::OutputRotator;
use crate::probe::{ProbePlan, RngSource, RunSummary, Scheduler};
use crate::system::logger::{self, LogTarget};

/// Parses the command line and runs the probe to completion on a
/// current-thread runtime.
///
/// # Errors
///
/// Returns the first fatal error: bad CLI or configuration, unusable output
/// or log location, client construction failure, or a failed rotation.
pub fn run() -> AppResult<()> {
    let args = ProbeArgs::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

async fn run_async(args: &ProbeArgs) -> AppResult<()> {
    // Logging is not up yet; report on stderr.
    let (raw, odir) = prepare(args).inspect_err(|err| eprintln!("{}", err))?;

    let node_id = raw.node_id.as_deref().unwrap_or_default().trim();
    let target = LogTarget::resolve(args.log_file.as_deref(), &odir, &args.prefix, node_id);
    logger::init_logging(&target, args.verbose, args.no_color)?;
    info!("Using config {}", args.config);

    let settings = config::resolve_settings(&raw).inspect_err(|err| error!("{}", err))?;
    let summary = probe(args, &odir, &settings)
        .await
        .inspect_err(|err| error!("{}", err))?;

    info!(
        "Done: {} probes, {} ok, {} failed, {} write errors, {} files",
        summary.iterations,
        summary.successes,
        summary.failures,
        summary.write_failures,
        summary.files.len()
    );
    Ok(())
}

fn prepare(args: &ProbeArgs) -> AppResult<(ConfigFile, PathBuf)> {
    let raw = config::load_config_file(Path::new(&args.config))?;
    let odir = PathBuf::from(&args.odir);
    std::fs::create_dir_all(&odir).map_err(|err| ConfigError::OutputDir {
        path: odir.clone(),
        source: err,
    })?;
    Ok((raw, odir))
}

async fn probe(args: &ProbeArgs, odir: &Path, settings: &ProbeSettings) -> AppResult<RunSummary> {
    let client = build_client(&ClientOptions {
        timeout: args.request_timeout,
        bind: settings.bind.clone(),
        certs: args.certs.as_ref().map(PathBuf::from),
        http3: args.http3,
    })?;
    let transport = ReqwestTransport::new(client);

    let rotator = OutputRotator::open(odir, &args.prefix, &settings.node_id).await?;
    if let Some(path) = rotator.current_path() {
        info!("Writing to {}", path.display());
    }

    Scheduler::new(
        ProbePlan::from(settings),
        &transport,
        RngSource::from_entropy(),
        rotator,
        tokio::io::stdout(),
    )
    .run()
    .await
}
