//! Argument definitions for the `verify-skill` binary.
//!
//! A bare invocation is the normal use. The flags only change how the result
//! is presented, never what is checked.

use clap::Parser;

/// Verify that the designing-nextjs-ui skill ships all of its required files.
#[derive(Parser, Debug)]
#[command(name = "verify-skill", version, about, long_about = None)]
pub struct Cli {
    /// Output machine-readable JSON instead of text lines.
    #[arg(long)]
    pub json: bool,

    /// Suppress diagnostics except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Diagnostic output on stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["verify-skill"]).unwrap();
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::try_parse_from(["verify-skill", "-vv", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["verify-skill", "some/dir"]).is_err());
    }
}
