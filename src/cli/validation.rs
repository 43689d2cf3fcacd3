// validation.rs - Input validation utilities

use std::str::FromStr;

use crate::cli::args::{Args, Command};
use crate::core::jukes_cantor::DEFAULT_SEQUENCE_LENGTH;
use crate::core::MappingFunction;
use crate::output::{OutputFormat, SizeStyle};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Largest number of decimals accepted for memory sizes
const MAX_PRECISION: usize = 17;

/// Settings resolved from CLI arguments, config file and defaults
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub format: OutputFormat,
    pub size_style: SizeStyle,
    pub method: MappingFunction,
    pub sequence_length: usize,
    pub log_level: Option<String>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let format = match &args.format {
        Some(f) => OutputFormat::from_str(f)?,
        None => OutputFormat::default(),
    };

    let precision = args.precision.unwrap_or(1);
    if precision > MAX_PRECISION {
        return Err(format!("Precision must be at most {}", MAX_PRECISION));
    }
    let size_style = SizeStyle {
        kilobyte_is_1024_bytes: !args.decimal_units,
        precision,
    };

    let (method, sequence_length) = match &args.command {
        Some(Command::Recomb(recomb)) => {
            let method = match &recomb.method {
                Some(m) => MappingFunction::from_str(m).map_err(|e| e.to_string())?,
                None => MappingFunction::default(),
            };
            (method, DEFAULT_SEQUENCE_LENGTH)
        }
        Some(Command::JcDistance(jc)) => {
            let length = jc.length.unwrap_or(DEFAULT_SEQUENCE_LENGTH);
            if length == 0 {
                return Err("Sequence length must be greater than 0".to_string());
            }
            (MappingFunction::default(), length)
        }
        _ => (MappingFunction::default(), DEFAULT_SEQUENCE_LENGTH),
    };

    let log_level = if args.debug {
        Some("debug".to_string())
    } else {
        match &args.log_level {
            Some(level) => {
                let level = level.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(format!(
                        "Invalid log level '{}'. Use: {}",
                        level,
                        LOG_LEVELS.join(", ")
                    ));
                }
                Some(level)
            }
            None => None,
        }
    };

    Ok(ValidationResult {
        format,
        size_style,
        method,
        sequence_length,
        log_level,
    })
}
