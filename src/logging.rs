//! log4rs initialization for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Pattern used when no config file is available.
const FALLBACK_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialize logging from `config_file`, or fall back to warnings on stderr.
pub fn init_logging(config_file: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(config_file).exists() {
        match log4rs::init_file(config_file, Default::default()) {
            Ok(()) => {
                log::debug!("logging configured from {config_file}");
                return Ok(());
            }
            Err(e) => {
                init_fallback()?;
                log::warn!("Error reading log config {config_file}: {e}; logging to stderr");
                return Ok(());
            }
        }
    }
    init_fallback()?;
    log::debug!("log config {config_file} not found; logging to stderr");
    Ok(())
}

fn init_fallback() -> Result<(), Box<dyn Error>> {
    let config = fallback_config()?;
    log4rs::init_config(config)?;
    Ok(())
}

fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_config_builds() {
        let config = fallback_config().expect("fallback config");
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.appenders().len(), 1);
    }
}
