//! Command-line interface.
//!
//! Arguments are parsed before the terminal is touched, so `--help` and
//! `--version` print to a normal screen:
//!
//! ```ignore
//! match folio::cli::parse_args(std::env::args())? {
//!     CliCommand::Run(options) => { /* start the TUI */ }
//!     other => folio::cli::run_cli_command(&other),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, RunOptions, USAGE};
pub use version::{version_line, VERSION};

/// Handle commands that print and exit.
///
/// Returns `false` for [`CliCommand::Run`], which the caller handles.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            true
        }
        CliCommand::Run(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_is_not_handled() {
        assert!(!run_cli_command(&CliCommand::Run(RunOptions::default())));
        assert!(run_cli_command(&CliCommand::Version));
    }
}
