use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cloudflared_config::settings;

#[derive(Parser, Debug)]
#[command(name = "cloudflared-enabled")]
#[command(about = "Exit 0 when cloudflared is enabled in OPNsense config.xml, 1 otherwise")]
struct Cli {
    /// Source OPNsense configuration file.
    #[arg(long, default_value = settings::DEFAULT_CONFIG_PATH)]
    config_file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if settings::is_enabled(&cli.config_file) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
