//! Command-line emitter. One invocation is one unit of work: build a manager,
//! mint a logger for the given trace header, emit, flush.

use crate::config::Config;
use crate::fmt::ModeSetting;
use crate::internal;
use crate::level::Level;
use crate::manager::LoggerManager;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[value(alias = "warn")]
    Warning,
    Error,
    Critical,
    Fatal,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
            LogLevel::Fatal => Self::FATAL,
        }
    }
}

/// gumo-log - emit Cloud Logging records from scripts.
#[derive(Debug, Parser)]
#[command(name = "gumo-log", version, about = "Emit trace-correlated log records")]
pub struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// `X-Cloud-Trace-Context` value to correlate with.
    #[arg(long, short = 't', global = true)]
    pub trace_header: Option<String>,

    /// Output mode: auto, structured (or json), text. Overrides the config file.
    #[arg(long, global = true, value_name = "MODE", conflicts_with_all = ["structured", "text"])]
    pub mode: Option<ModeSetting>,

    /// Shorthand for `--mode structured`.
    #[arg(long, global = true, conflicts_with = "text")]
    pub structured: bool,

    /// Shorthand for `--mode text`.
    #[arg(long, global = true)]
    pub text: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log one message.
    Log {
        #[arg(value_enum, ignore_case = true)]
        level: LogLevel,
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Print the context a trace header parses to, as JSON.
    Context {
        header: Option<String>,
    },
}

impl Cli {
    fn mode_override(&self) -> Option<ModeSetting> {
        match (self.structured, self.text) {
            (true, _) => Some(ModeSetting::Structured),
            (_, true) => Some(ModeSetting::Text),
            _ => self.mode,
        }
    }

    fn load_config(&self) -> Result<Config, crate::Error> {
        self.config
            .as_deref()
            .map_or_else(Config::load, Config::load_from)
    }
}

/// Runs a parsed command line.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let mut config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(mode) = cli.mode_override() {
        config.general.mode = mode;
    }
    let manager = LoggerManager::from(&config);

    match &cli.command {
        Command::Log { level, message } => {
            cmd_log(&manager, cli.trace_header.as_deref(), *level, message)
        }
        Command::Context { header } => {
            cmd_context(&manager, header.as_deref().or(cli.trace_header.as_deref()))
        }
    }
}

/// The call site inside this binary means nothing to the reader, so no source location is attached.
fn cmd_log(
    manager: &LoggerManager,
    trace_header: Option<&str>,
    level: LogLevel,
    message: &[String],
) -> ExitCode {
    let logger = manager.get_logger(trace_header);
    logger.log_at(level.into(), message.join(" "), None);

    if let Err(e) = manager.flush() {
        internal::error("CLI", &format!("Flush failed: {e}"));
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn cmd_context(manager: &LoggerManager, header: Option<&str>) -> ExitCode {
    let context = manager.get_logger_context(header);
    match serde_json::to_string(&context) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Sink;

    struct ClosedPipe;

    impl Sink for ClosedPipe {
        fn write_line(&self, _line: &str) -> Result<(), crate::Error> {
            Ok(())
        }

        fn flush(&self) -> Result<(), crate::Error> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe).into())
        }
    }

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("gumo-log").chain(args.iter().copied()))
    }

    #[test]
    fn flush_failure_exits_nonzero() {
        let manager = LoggerManager::builder().normal_sink(ClosedPipe).build();
        let code = cmd_log(&manager, None, LogLevel::Info, &["x".to_string()]);
        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
    }

    #[test]
    fn mode_flag_accepts_config_spellings() {
        let cli = parse(&["--mode", "json", "log", "info", "x"]).unwrap();
        assert_eq!(cli.mode_override(), Some(ModeSetting::Structured));

        let cli = parse(&["--mode", "auto", "log", "info", "x"]).unwrap();
        assert_eq!(cli.mode_override(), Some(ModeSetting::Auto));

        assert!(parse(&["--mode", "plain", "log", "info", "x"]).is_err());
    }

    #[test]
    fn shorthand_flags_map_to_modes() {
        assert_eq!(
            parse(&["--text", "log", "info", "x"]).unwrap().mode_override(),
            Some(ModeSetting::Text)
        );
        assert_eq!(parse(&["log", "info", "x"]).unwrap().mode_override(), None);
        assert!(parse(&["--mode", "text", "--structured", "log", "info", "x"]).is_err());
    }
}
