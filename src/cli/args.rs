//! CLI argument definitions using clap derive
//!
//! Warp takes mode flags rather than subcommands, matching its original
//! surface: exactly one of `-a/-c/-d/-s/-o` per invocation, enforced by a
//! clap group before any database interaction.

use clap::{ArgGroup, Parser};

#[derive(Parser)]
#[command(name = "warp")]
#[command(version, about = "Warp! - Your lazy ssh command line helper")]
#[command(group(ArgGroup::new("mode").multiple(false)))]
pub struct Cli {
    /// Add connection(s)
    #[arg(short, long, group = "mode")]
    pub add: bool,

    /// Initiate a connection from stored values
    #[arg(short, long, group = "mode")]
    pub connect: bool,

    /// Delete connection(s)
    #[arg(short, long, group = "mode")]
    pub delete: bool,

    /// Show all data
    #[arg(short, long, group = "mode")]
    pub show: bool,

    /// Write out existing data to a file
    #[arg(short, long, group = "mode")]
    pub output: bool,
}

/// The selected operation; at most one per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Add,
    Connect,
    Delete,
    Show,
    Output,
}

impl Cli {
    /// Map the mode flags to the operation enum. The clap group guarantees
    /// at most one flag is set.
    pub fn mode(&self) -> Option<Mode> {
        if self.add {
            Some(Mode::Add)
        } else if self.connect {
            Some(Mode::Connect)
        } else if self.delete {
            Some(Mode::Delete)
        } else if self.show {
            Some(Mode::Show)
        } else if self.output {
            Some(Mode::Output)
        } else {
            None
        }
    }
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
    fn single_flag_selects_a_mode() {
        let cli = Cli::try_parse_from(["warp", "--show"]).unwrap();
        assert_eq!(cli.mode(), Some(Mode::Show));

        let cli = Cli::try_parse_from(["warp", "-c"]).unwrap();
        assert_eq!(cli.mode(), Some(Mode::Connect));
    }

    #[test]
    fn no_flag_selects_no_mode() {
        let cli = Cli::try_parse_from(["warp"]).unwrap();
        assert_eq!(cli.mode(), None);
    }

    #[test]
    fn conflicting_flags_are_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["warp", "-a", "-s"]).is_err());
        assert!(Cli::try_parse_from(["warp", "--delete", "--connect"]).is_err());
    }
}
