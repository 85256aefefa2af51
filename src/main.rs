use std::fs::{self, File};
use std::process;

use clap::{Parser, Subcommand};
use fated::build_info;
use fated::core::config::log_path;
use fated::core::{Config, RenderVariant, roll_set};
use fated::tui::{self, TuiError};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "fated", about = "Roll Fate dice", version)]
struct Args {
    /// Keep re-rolling in a full-screen session (Enter or click to roll, q to quit)
    #[arg(short, long, global = true, visible_alias = "foreground")]
    interactive: bool,

    /// Print error details and write a debug log
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Roll a set of fate dice
    Roll,
    /// Draw a fate card
    Draw,
    /// Print version and build information
    Version,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::new(args.interactive, args.debug);
    init_logging(config.debug);

    let variant = match args.command {
        Command::Roll => RenderVariant::DiceLine,
        Command::Draw => RenderVariant::Card,
        Command::Version => {
            println!("{}", build_info::version_line());
            return;
        }
    };

    log::info!("fated starting: {:?} {:?}", variant, config);

    if let Err(e) = roll_and_show(variant, config).await {
        log::error!("{}", e);
        eprintln!("{}", e.report(config.debug));
        process::exit(e.exit_code());
    }
}

/// Print one roll, or hand over to the interactive session.
async fn roll_and_show(variant: RenderVariant, config: Config) -> Result<(), TuiError> {
    if config.interactive {
        return tui::run(variant).await;
    }
    let rolls = roll_set()?;
    println!("{}", variant.render(&rolls));
    Ok(())
}

/// Debug runs log to `<cache dir>/fated/fated.log`; the terminal belongs to
/// the session.
fn init_logging(debug: bool) {
    if !debug {
        return;
    }
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}
