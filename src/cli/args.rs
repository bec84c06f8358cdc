use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "climate-home-values")]
#[command(about = "Join US state temperatures with ZHVI home values and plot them in 3D")]
#[command(version)]
pub struct Cli {
    #[arg(
        short,
        long,
        default_value = ".",
        help = "Directory holding GlobalLandTemperaturesByState.csv and ZHVI.csv; outputs are written here too"
    )]
    pub data_dir: PathBuf,

    #[arg(long, help = "Write the chart without opening a viewer")]
    pub no_show: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, conflicts_with = "verbose", help = "Only log warnings and hide progress")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
