mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use tally_engine::CountJob;
use tally_logging::{tally_error, tally_info};

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.level(), &cli.log_file);

    tally_info!("Starting token count");
    run(&cli).inspect_err(|err| tally_error!("Token count failed: {:#}", err))
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.job_config()?;
    let input_dir = config.input_dir.clone();

    let summary = CountJob::new(config)
        .run()
        .with_context(|| format!("token count over {} failed", input_dir.display()))?;

    tally_info!(
        "Wrote {} ({} file(s) scanned)",
        summary.output_path.display(),
        summary.files_scanned
    );
    Ok(())
}
