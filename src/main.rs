use std::path::PathBuf;

use log::error;

use live_events_lib::app::run_and_report;
use live_events_lib::config::PipelineConfig;
use live_events_lib::logging;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Builds the dynamic live-events catalog from the remote sports schedule", long_about = None)]
struct Args {
    /// Optional JSON file overriding the built-in settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, e.g. "debug" or "info,live_events_lib::pipeline=debug"
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    use clap::Parser;
    let args = Args::parse();

    logging::init_logger(args.log_level.as_deref());

    let config = match PipelineConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e.diagnostics());
            return;
        }
    };

    run_and_report(&config).await;
}
