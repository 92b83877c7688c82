//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "layoff-insights")]
#[command(about = "An HTTP server exposing tech layoff figures and trend analysis")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Only allow cross-origin requests from this origin (all origins when unset)
    #[arg(long, env = "CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_arguments_override_defaults() {
        let config = Config::try_parse_from([
            "layoff-insights",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--cors-origin",
            "https://dashboard.example.com",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.cors_origin.as_deref(), Some("https://dashboard.example.com"));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Config::try_parse_from(["layoff-insights", "--port", "http"]).is_err());
    }
}
