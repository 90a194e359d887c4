mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use clap::Parser;

use app::RunSettings;
use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();
    // Enable before loading config so config diagnostics are visible
    set_debug(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    let result = RunSettings::from_cli(&cli, &config).and_then(|settings| app::run(&settings));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
