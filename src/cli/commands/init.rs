//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "hemodash.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Hemodash configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point api.base_url at your transfusion network API");
                println!("  3. Validate configuration: hemodash validate-config");
                println!("  4. Fetch a snapshot: hemodash snapshot --pretty");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Hemodash Configuration File
# Blood Transfusion Network Dashboard

[application]
log_level = "info"

[api]
base_url = "https://api.example.dz"
timeout_ms = 10000

[retry]
max_retries = 2
delay_ms = 2000

[logging]
local_enabled = false
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Hemodash Configuration File
# Blood Transfusion Network Dashboard
#
# Values of the form ${VAR} are substituted from the environment at load
# time. Every setting can also be overridden with a HEMODASH_* variable,
# e.g. HEMODASH_API_BASE_URL.

[application]
# Log level: trace, debug, info, warn, error
log_level = "info"

[api]
# Base URL of the transfusion network API
base_url = "https://api.example.dz"

# Per-request timeout in milliseconds
timeout_ms = 10000

# Accept self-signed TLS certificates (staging environments only)
tls_accept_invalid_certs = false

# Serve the bundled demo dataset without contacting the API
force_offline = false

# Restrict the centers resource to one wilaya (omit for all)
# wilaya_id = 16

# Pagination window for the centers resource
pagination_take = 50
pagination_skip = 0

[retry]
# Retries after the first failed attempt (3 attempts total with 2)
max_retries = 2

# Fixed delay between attempts in milliseconds
delay_ms = 2000

[logging]
# JSON file logging with rotation; console output is always enabled
local_enabled = true
local_path = "logs"
local_rotation = "daily"  # daily | hourly
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses() {
        let content = InitArgs::generate_minimal_config();
        let parsed: toml::Value = toml::from_str(&content).unwrap();
        assert!(parsed.get("api").is_some());
        assert!(parsed.get("retry").is_some());
    }

    #[test]
    fn test_example_config_parses() {
        let content = InitArgs::generate_config_with_examples();
        let parsed: toml::Value = toml::from_str(&content).unwrap();
        assert_eq!(
            parsed["retry"]["delay_ms"].as_integer(),
            Some(2000)
        );
    }
}
