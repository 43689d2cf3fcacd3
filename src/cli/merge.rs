// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::Command;
use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Output
        if self.format.is_none() {
            self.format = config.format;
        }
        if self.precision.is_none() {
            self.precision = config.precision;
        }
        if !self.decimal_units && config.kilobyte_is_1024_bytes == Some(false) {
            self.decimal_units = true;
        }

        // Formula defaults only reach the subcommand that uses them
        match self.command.as_mut() {
            Some(Command::Recomb(recomb)) if recomb.method.is_none() => {
                recomb.method = config.method;
            }
            Some(Command::JcDistance(jc)) if jc.length.is_none() => {
                jc.length = config.sequence_length;
            }
            _ => {}
        }

        // Logging
        if !self.debug && self.log_level.is_none() {
            self.log_level = config.log_level;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["genformula"], args).unwrap()
    }

    #[test]
    fn test_config_fills_missing_values() {
        let config = Config {
            method: Some("haldane".to_string()),
            format: Some("json".to_string()),
            kilobyte_is_1024_bytes: Some(false),
            ..Config::default()
        };

        let args = parse(&["recomb", "10"]).merge_with_config(config);
        assert_eq!(args.format.as_deref(), Some("json"));
        assert!(args.decimal_units);
        match args.command {
            Some(Command::Recomb(recomb)) => assert_eq!(recomb.method.as_deref(), Some("haldane")),
            _ => panic!("Expected recomb command"),
        }
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let config = Config {
            method: Some("haldane".to_string()),
            format: Some("json".to_string()),
            sequence_length: Some(500),
            ..Config::default()
        };

        let args = parse(&["--format", "text", "recomb", "10", "--method", "kosambi"])
            .merge_with_config(config.clone());
        assert_eq!(args.format.as_deref(), Some("text"));
        match args.command {
            Some(Command::Recomb(recomb)) => assert_eq!(recomb.method.as_deref(), Some("kosambi")),
            _ => panic!("Expected recomb command"),
        }

        let args = parse(&["jc-distance", "0.1", "--length", "250"]).merge_with_config(config);
        match args.command {
            Some(Command::JcDistance(jc)) => assert_eq!(jc.length, Some(250)),
            _ => panic!("Expected jc-distance command"),
        }
    }
}
