use crate::cli::args::Cli;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::processors::{Pipeline, PipelineReport};
use tracing::debug;

pub fn run(cli: Cli) -> Result<PipelineReport> {
    setup_logging(&cli);

    let config = PipelineConfig::in_dir(&cli.data_dir)
        .with_open_viewer(!cli.no_show)
        .with_silent(cli.quiet);
    debug!("Pipeline config: {:?}", config);

    let report = Pipeline::new(config).run()?;

    if !cli.quiet {
        println!("\n{}", report.summary());
    }

    Ok(report)
}

/// Log to stderr; `RUST_LOG` takes precedence over the CLI level
pub fn setup_logging(cli: &Cli) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = cli.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("climate_home_values={}", log_level)));

    // A subscriber may already be installed when called more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}
