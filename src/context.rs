use std::time::Duration;

use crate::configuration::Configuration;

pub struct Context {
    pub config: Configuration,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let cfg = Configuration {
            data_dir: cli.data_dir.clone(),
            busy_timeout: Duration::from_millis(cli.busy_timeout_ms),
            api_listen: cli.api_listen,
            log_file: cli.log_file.clone(),
            reset: cli.reset,
        };
        Self { config: cfg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn context_carries_cli_settings() {
        let cli = crate::cli::Cli::try_parse_from([
            "jums",
            "--data-dir",
            "/tmp/jums-ctx",
            "--busy-timeout-ms",
            "1500",
            "--reset",
        ])
        .unwrap();
        let ctx = Context::from_cli(&cli);
        assert_eq!(ctx.config.busy_timeout, Duration::from_millis(1500));
        assert!(ctx.config.reset);
        assert_eq!(
            ctx.config.db_path(),
            std::path::PathBuf::from("/tmp/jums-ctx/jums.sqlite")
        );
    }
}
