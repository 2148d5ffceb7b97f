//! CLI argument definitions for the national ID validator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use nid_model::CasePolicy;
use nid_standards::DEFAULT_REGIONS_FILE;

#[derive(Parser)]
#[command(
    name = "nid",
    version,
    about = "Validate 18-character national ID numbers",
    long_about = "Validate 18-character national ID numbers.\n\n\
                  Checks length and digit format, the region code against a reference\n\
                  table, the embedded birth date and the weighted modulo-11 checksum."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include ID numbers in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a single ID number.
    Check(CheckArgs),

    /// Open an interactive form that validates one ID number per line.
    Form(FormArgs),

    /// Compute the check character for a 17-digit body.
    Checksum(ChecksumArgs),

    /// Summarize the region code table or look up one code.
    Regions(RegionsArgs),
}

/// Location of the region code reference file.
#[derive(Args)]
pub struct RegionSource {
    /// CSV file with a `code` column listing valid region codes.
    #[arg(long = "regions", value_name = "PATH", default_value = DEFAULT_REGIONS_FILE)]
    pub regions: PathBuf,
}

/// Options shared by the validating commands.
#[derive(Args)]
pub struct PolicyArgs {
    /// Reject a lower-case trailing `x` instead of upper-casing it.
    #[arg(long = "strict")]
    pub strict: bool,
}

impl PolicyArgs {
    pub fn case_policy(&self) -> CasePolicy {
        if self.strict {
            CasePolicy::Strict
        } else {
            CasePolicy::Normalize
        }
    }
}

#[derive(Parser)]
pub struct CheckArgs {
    /// The ID number to validate.
    #[arg(value_name = "ID", allow_hyphen_values = true)]
    pub id: String,

    #[command(flatten)]
    pub source: RegionSource,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Print the verdict as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FormArgs {
    #[command(flatten)]
    pub source: RegionSource,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

#[derive(Parser)]
pub struct ChecksumArgs {
    /// The first 17 digits of an ID number.
    #[arg(value_name = "BODY")]
    pub body: String,
}

#[derive(Parser)]
pub struct RegionsArgs {
    /// Region code to look up.
    #[arg(value_name = "CODE")]
    pub code: Option<String>,

    #[command(flatten)]
    pub source: RegionSource,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_defaults_to_areas_file() {
        let cli = Cli::try_parse_from(["nid", "check", "110101199003077432"]).unwrap();
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.source.regions, PathBuf::from("areas.csv"));
        assert_eq!(args.policy.case_policy(), CasePolicy::Normalize);
        assert!(!args.json);
        assert!(!cli.log_data);
    }

    #[test]
    fn strict_flag_selects_strict_policy() {
        let cli =
            Cli::try_parse_from(["nid", "form", "--strict", "--regions", "codes.csv"]).unwrap();
        let Command::Form(args) = cli.command else {
            panic!("expected form command");
        };
        assert_eq!(args.source.regions, PathBuf::from("codes.csv"));
        assert_eq!(args.policy.case_policy(), CasePolicy::Strict);
    }

    #[test]
    fn regions_lookup_code_is_optional() {
        let cli = Cli::try_parse_from(["nid", "regions"]).unwrap();
        let Command::Regions(args) = cli.command else {
            panic!("expected regions command");
        };
        assert!(args.code.is_none());
    }
}
