//! Shell scripts and cron jobs on App Engine need the same trace-correlated
//! records as the request handlers, without linking the library.
//!
//! Usage:
//!   gumo-log log <level> <message...>          Emit one record
//!   gumo-log -t 'TRACE/SPAN;o=1' log info hi   Emit correlated with a trace
//!   gumo-log --structured log error boom       Force JSON output
//!   gumo-log context 'TRACE/SPAN;o=1'          Show the parsed context

use clap::Parser;
use gumo_logging::cli::{Cli, run};
use gumo_logging::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    internal::init();
    let cli = Cli::parse();
    run(&cli)
}
