mod app;
mod command;
mod config;
mod render;
mod session;

use clap::Parser;
use tictactoe_common::config::ConfigError;
use tictactoe_common::games::tictactoe::SearchEngine;
use tictactoe_common::{log, logger};

use config::{ConsoleConfig, DEFAULT_CONFIG_FILE_NAME, get_config_manager};
use session::Session;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against a perfect-play bot")]
struct Args {
    /// YAML config file, `tictactoe_config.yaml` when omitted; defaults are
    /// used when it does not exist
    #[arg(long)]
    config: Option<String>,

    /// Seed for the bot's tie-breaks, overriding the config
    #[arg(long)]
    seed: Option<u64>,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(short, long)]
    verbose: bool,
}

/// Path used both for `--write-default-config` and for loading.
fn config_path(args: &Args) -> &str {
    args.config.as_deref().unwrap_or(DEFAULT_CONFIG_FILE_NAME)
}

fn load_config(args: &Args) -> Result<ConsoleConfig, ConfigError> {
    get_config_manager(config_path(args)).get_config()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    if args.write_default_config {
        let path = config_path(&args);
        get_config_manager(path).set_config(&ConsoleConfig::default())?;
        log!("Default config written to {}", path);
        return Ok(());
    }

    let config = load_config(&args)?;
    let engine = match args.seed.or(config.seed) {
        Some(seed) => SearchEngine::from_seed(seed),
        None => SearchEngine::from_random(),
    };
    log!(
        "X: {:?}, O: {:?}, tie-break seed {}",
        config.player_x,
        config.player_o,
        engine.seed()
    );

    let mut session = Session::new(&config, engine);
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    if config.is_autoplay() {
        app::run_autoplay(&mut session, config.autoplay_rounds, &mut output)?;
    } else {
        let stdin = std::io::stdin();
        app::run_interactive(&mut session, stdin.lock(), &mut output)?;
    }

    log!("Bye");
    Ok(())
}
