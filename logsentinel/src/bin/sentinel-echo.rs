//! Prints messages through the process-wide sentinel.
//!
//! ```text
//! sentinel-echo [--debug] [--quiet] <wrapper> <message> [<wrapper> <message> ...]
//! ```
//! `wrapper` is one of `info`, `warn`, `error`, `debug-info`, `debug-warn`, `debug-error`,
//! or `status=<TEXT>` to hand raw status text to the runtime gate.
//! `--debug` flips the debug toggle and `--quiet` flips the runtime toggle before printing.

use std::process::ExitCode;

const USAGE: &str = "usage: sentinel-echo [--debug] [--quiet] <wrapper> <message> [<wrapper> <message> ...]";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1).peekable();
    while let Some(flag) = args.next_if(|arg| arg.starts_with("--")) {
        match flag.as_str() {
            "--debug" => {
                logsentinel::toggle_debug_logs();
            }
            "--quiet" => {
                logsentinel::toggle_runtime_logs();
            }
            _ => {
                eprintln!("{USAGE}");
                return ExitCode::from(2);
            }
        }
    }
    let rest: Vec<String> = args.collect();
    if rest.is_empty() || rest.len() % 2 != 0 {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }
    for pair in rest.chunks(2) {
        let (wrapper, message) = (pair[0].as_str(), pair[1].as_str());
        match wrapper {
            "info" => logsentinel::info(message),
            "warn" => logsentinel::warn(message),
            "error" => logsentinel::error(message),
            "debug-info" => logsentinel::debug_info(message),
            "debug-warn" => logsentinel::debug_warn(message),
            "debug-error" => logsentinel::debug_error(message),
            other => match other.strip_prefix("status=") {
                Some(status) => logsentinel::current().runtime_log(status, message, false),
                None => {
                    eprintln!("{USAGE}");
                    return ExitCode::from(2);
                }
            },
        }
    }
    logsentinel::current().flush();
    ExitCode::SUCCESS
}
