// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Formula defaults
    pub method: Option<String>,
    pub sequence_length: Option<usize>,

    // Output
    pub format: Option<String>,
    pub kilobyte_is_1024_bytes: Option<bool>,
    pub precision: Option<usize>,

    // Logging
    pub log_level: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        eprintln!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# genformula.toml - Configuration file for genformula
# Command line arguments will override these settings

# =============================================================================
# FORMULA DEFAULTS
# =============================================================================

# Recombination mapping function: kosambi, haldane
method = "kosambi"

# Number of compared sites used for the Jukes-Cantor variance
sequence_length = 100

# =============================================================================
# OUTPUT
# =============================================================================

# Output format: text, json
format = "text"

# Memory sizes in binary (KiB, MiB, ...) or decimal (Kb, Mb, ...) units
kilobyte_is_1024_bytes = true

# Decimal places for memory sizes
precision = 1

# =============================================================================
# LOGGING
# =============================================================================

# Debug logging on stderr: error, warn, info, debug, trace
# (omit to disable; RUST_LOG overrides this value)
# log_level = "debug"
"#
        .to_string()
    }
}
