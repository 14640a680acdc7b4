use std::env;

/// Process-level settings read from the environment. Operational parameters
/// (input file, output directory, language, API key) come from the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let log_format = match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Config { log_format }
    }
}
