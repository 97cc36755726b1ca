use clap::Parser;
use std::io::{self, Write};

use click_tap::config::{Cli, Command, Config};
use click_tap::{dump, replay};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load(&cli);

    if let Err(e) = config.validate() {
        log::error!("{}", e);
        std::process::exit(1);
    }

    log::info!(
        "click-tap starting (format={:?}, event_size={}, buttons={}, filter={})",
        config.format,
        config.event_size,
        config.buttons,
        if config.passthrough { "off" } else { "on" }
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match &cli.command {
        Command::Replay { input } => {
            replay::run_replay(&config, input, &mut out)?;
        }
        Command::Dump { input } => {
            let n = dump::run_dump(input, config.event_size, &mut out)?;
            log::info!("Dumped {} events", n);
        }
    }

    out.flush()?;
    Ok(())
}
