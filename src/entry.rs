use std::time::Duration;

use clap::{CommandFactory, FromArgMatches};

use crate::args::LoadArgs;
use crate::error::AppResult;
use crate::{http, report, runner, stats};

/// Parses arguments, sets up logging and the runtime, and executes the run.
///
/// A completed run always exits 0, even at a 100% error rate; failures only
/// surface through the aggregate statistics.
///
/// # Errors
///
/// Returns an error for invalid arguments, client construction failures,
/// or a worker task that fails to join.
pub fn run() -> AppResult<()> {
    let matches = LoadArgs::command().get_matches();
    let args = LoadArgs::from_arg_matches(&matches)?;

    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

async fn run_async(args: LoadArgs) -> AppResult<()> {
    report::print_banner(&args.url, args.workers, args.duration);

    let client = http::build_client(&args)?;
    let duration = Duration::from_secs(args.duration);
    let config = runner::RunConfig {
        url: args.url,
        workers: args.workers,
        duration,
    };

    let results = runner::run_load_test(client, config).await?;
    let analysis = stats::analyze(&results, duration);
    report::print_analysis(&analysis);

    Ok(())
}
