//! Command-line configuration for the terminal host.

use attendance_core::{default_log_level, init_logging, LoggingError};
use clap::Parser;

/// How the dashboard is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Interactive full-screen dashboard.
    Interactive,
    /// Print the dashboard once as plain text.
    Snapshot,
    /// Print the dashboard once as JSON.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "attendance", version, about = "Mark attendance for a fixed roster")]
pub struct CliArgs {
    /// Print the dashboard once as plain text and exit
    #[arg(long, conflicts_with = "json")]
    pub snapshot: bool,

    /// Print the dashboard once as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Log level (trace|debug|info|warn|error); only used with --log-dir
    #[arg(long, env = "ATTENDANCE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, env = "ATTENDANCE_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl CliArgs {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.snapshot {
            OutputMode::Snapshot
        } else {
            OutputMode::Interactive
        }
    }

    /// Effective log level after applying the build-mode default.
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(default_log_level())
    }

    /// Starts file logging when a log directory is configured.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        match self.log_dir.as_deref() {
            Some(dir) => init_logging(self.effective_log_level(), dir).map(|()| true),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliArgs, OutputMode};
    use clap::Parser;

    #[test]
    fn defaults_to_interactive_mode() {
        let args = CliArgs::try_parse_from(["attendance"]).unwrap();
        assert_eq!(args.output_mode(), OutputMode::Interactive);
    }

    #[test]
    fn snapshot_and_json_conflict() {
        assert!(CliArgs::try_parse_from(["attendance", "--snapshot", "--json"]).is_err());
        let args = CliArgs::try_parse_from(["attendance", "--json"]).unwrap();
        assert_eq!(args.output_mode(), OutputMode::Json);
    }

    #[test]
    fn explicit_log_level_wins_over_default() {
        let args = CliArgs::try_parse_from(["attendance", "--log-level", "warn"]).unwrap();
        assert_eq!(args.effective_log_level(), "warn");
    }

    #[test]
    fn logging_stays_off_without_directory() {
        let args = CliArgs {
            snapshot: true,
            json: false,
            log_level: Some("info".to_string()),
            log_dir: None,
        };
        assert!(!args.init_logging().unwrap());
    }
}
