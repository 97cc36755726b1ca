use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "click-tap")]
#[command(about = "Turn pen barrel-button presses into click-and-tap bindings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Input format (trace, evdev)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// Size of one raw input_event record in evdev captures (16 or 24)
    #[arg(long)]
    pub event_size: Option<usize>,

    /// Number of pen barrel buttons reported in evdev captures
    #[arg(long)]
    pub buttons: Option<usize>,

    /// Forward reports without filtering
    #[arg(long)]
    pub passthrough: bool,

    /// Path to config file
    #[arg(long, env = "CLICKTAP_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a recorded report stream through the filter and print what it emits
    Replay {
        /// Trace (.toml) or raw evdev capture
        input: PathBuf,
    },
    /// Print the raw events of an evdev capture
    Dump {
        /// Raw evdev capture
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    /// TOML list of reports
    #[default]
    Trace,
    /// Raw Linux input_event records
    Evdev,
}
