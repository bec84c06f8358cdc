use anyhow::Context;
use clap::Parser;
use climate_home_values::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone();

    run(cli).with_context(|| format!("pipeline failed in {}", data_dir.display()))?;
    Ok(())
}
