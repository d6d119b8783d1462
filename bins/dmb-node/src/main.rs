//! DigitalMoneyBits node entry point.
//!
//! Loads configuration, selects the chain parameters for the requested
//! network, and reports them. Everything downstream reads parameters
//! through the registry built here.

mod config;
mod summary;

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use dmb_consensus::ParameterRegistry;

use crate::config::NodeConfig;
use crate::summary::ParamsSummary;

#[derive(Parser, Debug)]
#[command(name = "dmb-node", version, about = "DigitalMoneyBits node")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    conf: Option<PathBuf>,

    /// Use the test network instead of mainnet
    #[arg(long)]
    testnet: bool,

    /// Data directory (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format ("text" or "json")
    #[arg(long)]
    log_format: Option<String>,

    /// Print the selected chain parameters as JSON and exit
    #[arg(long)]
    print_params: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    fn apply(&self, mut config: NodeConfig) -> NodeConfig {
        config.testnet |= self.testnet;
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.log_format = format.clone();
        }
        config
    }
}

fn main() {
    let args = Args::parse();

    let config = match NodeConfig::load(args.conf.as_deref()) {
        Ok(config) => args.apply(config),
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            process::exit(1);
        }
    };

    init_logging(&config.log_level, &config.log_format);

    if let Err(e) = run(&config, args.print_params) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(config: &NodeConfig, print_params: bool) -> anyhow::Result<()> {
    let registry = ParameterRegistry::new().context("building chain parameters")?;
    let params = registry
        .select(config.network())
        .context("selecting network")?;

    let data_dir = config.data_dir_for(params);
    info!(
        network = %params.network_id(),
        magic = %hex::encode(params.message_magic()),
        port = params.default_port(),
        rpc_port = params.rpc_port(),
        data_dir = %data_dir.display(),
        "chain parameters ready"
    );

    if print_params {
        let summary = ParamsSummary::from(params);
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true))
            .init();
    }
}
