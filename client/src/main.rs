mod command;
mod config;
mod render;
mod runner;

use clap::Parser;
use tictactoe_common::{log, logger};

use config::{default_config_path, get_config_manager};
use runner::GameRunner;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Two-player tic-tac-toe in the terminal")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// YAML config file, defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Write the effective config back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);
    let config = config_manager.get_config()?;
    log!("Loaded config from {}", config_path);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved config to {}", config_path);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut runner = GameRunner::new(config);
    runner.run(stdin.lock(), &mut stdout)?;

    log!("Bye");
    Ok(())
}
