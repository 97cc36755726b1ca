mod cli;
mod file;

pub use cli::{Cli, Command, InputFormat};

use crate::input::{INPUT_EVENT_SIZE_32, INPUT_EVENT_SIZE_64};

const DEFAULT_BUTTONS: usize = 2;

/// Merged configuration from CLI args and TOML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: InputFormat,
    pub event_size: usize,
    pub buttons: usize,
    pub passthrough: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: InputFormat::default(),
            event_size: INPUT_EVENT_SIZE_64,
            buttons: DEFAULT_BUTTONS,
            passthrough: false,
        }
    }
}

impl Config {
    /// Load configuration by merging TOML file with CLI overrides.
    pub fn load(cli: &Cli) -> Self {
        let file_config = cli
            .config
            .as_ref()
            .and_then(|p| file::load_from_path(p))
            .or_else(file::load_from_default_paths)
            .unwrap_or_default();

        Self::merge(cli, file_config)
    }

    fn merge(cli: &Cli, file_config: file::FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            format: cli.format.unwrap_or(file_config.format),
            event_size: cli.event_size.or(file_config.event_size).unwrap_or(defaults.event_size),
            buttons: cli.buttons.or(file_config.buttons).unwrap_or(defaults.buttons),
            passthrough: cli.passthrough || file_config.passthrough,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.event_size != INPUT_EVENT_SIZE_32 && self.event_size != INPUT_EVENT_SIZE_64 {
            return Err(format!(
                "Unsupported event size {} (expected {} or {})",
                self.event_size, INPUT_EVENT_SIZE_32, INPUT_EVENT_SIZE_64
            ));
        }
        if self.buttons == 0 {
            return Err("Button count must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("click-tap").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_overrides_file() {
        let file_config = file::parse("format = \"evdev\"\nevent_size = 16\nbuttons = 3\n").unwrap();
        let config = Config::merge(&cli(&["--buttons", "1", "replay", "capture.bin"]), file_config);
        assert_eq!(
            config,
            Config {
                format: InputFormat::Evdev,
                event_size: 16,
                buttons: 1,
                passthrough: false,
            }
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::merge(&cli(&["replay", "trace.toml"]), Default::default());
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_file_key_is_rejected() {
        assert!(file::parse("host = \"10.11.99.1\"").is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = Config { event_size: 20, ..Config::default() };
        assert!(config.validate().is_err());
        config.event_size = 16;
        config.buttons = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_subcommand_parsing() {
        let parsed = cli(&["--format", "evdev", "dump", "pen.bin"]);
        assert_eq!(parsed.format, Some(InputFormat::Evdev));
        assert!(matches!(parsed.command, Command::Dump { ref input } if input.to_str() == Some("pen.bin")));
    }
}
