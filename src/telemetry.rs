use crate::error::{Result, SkillAssessError};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Picks the filter directive: CLI verbosity beats config, config beats the default.
/// `RUST_LOG` still wins over all of them inside [`init`].
pub fn level_for(verbose: u8, quiet: bool, configured: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.unwrap_or(DEFAULT_LOG_LEVEL).to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

pub fn init(level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|e| {
            SkillAssessError::Telemetry(format!("invalid log level/filter '{level}': {e}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| SkillAssessError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_everything() {
        assert_eq!(level_for(2, true, Some("trace")), "error");
    }

    #[test]
    fn verbosity_overrides_config() {
        assert_eq!(level_for(1, false, Some("error")), "info");
        assert_eq!(level_for(3, false, None), "debug");
    }

    #[test]
    fn config_level_applies_without_flags() {
        assert_eq!(level_for(0, false, Some("debug")), "debug");
        assert_eq!(level_for(0, false, None), DEFAULT_LOG_LEVEL);
    }
}
