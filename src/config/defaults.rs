use super::Config;

pub const PROMPT: &str = "YT> ";
pub const LOG_LEVEL: &str = "warn";

/// Config written on first run.
pub fn defaults() -> Config {
    Config::default()
}
