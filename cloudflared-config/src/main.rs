use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cloudflared_config::{daemon, settings, yaml};

#[derive(Parser, Debug)]
#[command(name = "cloudflared-config")]
#[command(about = "Generate cloudflared configuration from OPNsense config.xml")]
struct Cli {
    /// Print all settings as JSON (for the reconfigure script).
    #[arg(long, conflicts_with = "config")]
    json: bool,
    /// Print the daemon YAML config file (default).
    #[arg(long)]
    config: bool,
    /// Source OPNsense configuration file.
    #[arg(long, default_value = settings::DEFAULT_CONFIG_PATH)]
    config_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = settings::load(&cli.config_file);

    if cli.json {
        let settings = loaded.unwrap_or_default();
        println!("{}", serde_json::to_string(&settings)?);
    } else {
        let doc = daemon::build_config(loaded.as_ref());
        print!("{}", yaml::render(&doc));
    }

    Ok(())
}
