//! Command-line argument parsing.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::SectionId;

/// Options for a normal TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Explicit config file (`--config`)
    pub config_path: Option<PathBuf>,
    /// Section to scroll to on startup (`--section about` or `#about`)
    pub section: Option<SectionId>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Run the TUI (default)
    Run(RunOptions),
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("empty section name")]
    EmptySection,
    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
folio - a portfolio you can browse from the terminal

USAGE:
    folio [OPTIONS] [#SECTION]

OPTIONS:
    -c, --config <PATH>    Load the portfolio from a JSON file
    -s, --section <ID>     Start scrolled to a section (same as #ID)
    -h, --help             Print this help
    -V, --version          Print the version

ENVIRONMENT:
    FOLIO_CONFIG           Config file used when --config is not given
    FOLIO_LOG              Log filter (default: folio=info)
    FOLIO_LOG_DIR          Directory for folio.log
";

/// Parse command-line arguments, skipping the program name.
///
/// `--version` and `--help` win over everything else on the line.
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--config" | "-c" => {
                let path = args.next().ok_or(ArgsError::MissingValue("--config"))?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--section" | "-s" => {
                let id = args.next().ok_or(ArgsError::MissingValue("--section"))?;
                options.section = Some(SectionId::from_fragment(&id).ok_or(ArgsError::EmptySection)?);
            }
            other if other.starts_with('#') => {
                options.section = Some(SectionId::from_fragment(other).ok_or(ArgsError::EmptySection)?);
            }
            other => return Err(ArgsError::Unexpected(other.to_string())),
        }
    }

    Ok(CliCommand::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let mut all = vec!["folio".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_no_args_runs_tui() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(RunOptions::default())));
    }

    #[test]
    fn test_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_help_wins_over_options() {
        assert_eq!(parse(&["--config", "x.json", "-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_config_and_section() {
        let parsed = parse(&["--config", "site.json", "--section", "about"]).unwrap();
        assert_eq!(
            parsed,
            CliCommand::Run(RunOptions {
                config_path: Some(PathBuf::from("site.json")),
                section: Some(SectionId::new("about")),
            })
        );
    }

    #[test]
    fn test_fragment_argument() {
        let parsed = parse(&["#projects"]).unwrap();
        let CliCommand::Run(options) = parsed else {
            panic!("expected Run");
        };
        assert_eq!(options.section, Some(SectionId::new("projects")));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(&["--config"]), Err(ArgsError::MissingValue("--config")));
        assert_eq!(parse(&["#"]), Err(ArgsError::EmptySection));
        assert_eq!(
            parse(&["--sync"]),
            Err(ArgsError::Unexpected("--sync".to_string()))
        );
    }
}
