//! Seed-argument handling shared by the demo binaries
//!
//! Every binary takes exactly one positional argument, the generator seed.
//! Anything else is a usage error, reported on stderr before any node is
//! allocated.

use std::fmt;

/// Why a command line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Not exactly one argument after the program name
    WrongArgumentCount { got: usize },

    /// The argument did not parse as an unsigned 32-bit seed
    BadSeed { arg: String },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::WrongArgumentCount { got } => {
                write!(f, "expected exactly one argument, got {}", got)
            }
            UsageError::BadSeed { arg } => {
                write!(f, "seed '{}' is not an unsigned 32-bit integer", arg)
            }
        }
    }
}

impl std::error::Error for UsageError {}

/// Parse `<seed>` from the arguments after the program name
pub fn parse_seed<I>(args: I) -> Result<u32, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    if args.len() != 1 {
        return Err(UsageError::WrongArgumentCount { got: args.len() });
    }

    args[0]
        .parse::<u32>()
        .map_err(|_| UsageError::BadSeed { arg: args[0].clone() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_seed_parses() {
        assert_eq!(parse_seed(args(&["42"])), Ok(42));
        assert_eq!(parse_seed(args(&["0"])), Ok(0));
        assert_eq!(parse_seed(args(&["4294967295"])), Ok(u32::MAX));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert_eq!(
            parse_seed(args(&[])),
            Err(UsageError::WrongArgumentCount { got: 0 })
        );
        assert_eq!(
            parse_seed(args(&["1", "2"])),
            Err(UsageError::WrongArgumentCount { got: 2 })
        );
    }

    #[test]
    fn test_bad_seed_rejected() {
        assert!(matches!(
            parse_seed(args(&["notanumber"])),
            Err(UsageError::BadSeed { .. })
        ));
        assert!(matches!(
            parse_seed(args(&["-1"])),
            Err(UsageError::BadSeed { .. })
        ));
    }
}
