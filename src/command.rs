use std::str::FromStr;

use dns::RecordType;
use thiserror::Error;

/// A line typed on stdin in interactive mode.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `<widget> <TYPE>`
    Refresh {
        widget: usize,
        record_type: RecordType,
    },
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("expected `<widget> <TYPE>` or `quit`, got {0:?}")]
    Malformed(String),
    #[error("unsupported record type {0:?}")]
    RecordType(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some("q" | "quit" | "exit"), None, None) => Ok(Command::Quit),
            (Some(widget), Some(record_type), None) => Ok(Command::Refresh {
                widget: widget
                    .parse()
                    .map_err(|_| CommandError::Malformed(line.to_string()))?,
                record_type: record_type
                    .parse()
                    .map_err(|_| CommandError::RecordType(record_type.to_string()))?,
            }),
            _ => Err(CommandError::Malformed(line.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use dns::RecordType;

    use super::{Command, CommandError};

    #[test]
    fn parse_refresh() {
        assert_eq!(
            " 1   mx ".parse::<Command>(),
            Ok(Command::Refresh {
                widget: 1,
                record_type: RecordType::MX
            })
        );
    }

    #[test]
    fn parse_quit() {
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "0 bogus".parse::<Command>(),
            Err(CommandError::RecordType("bogus".into()))
        );
        assert!(matches!(
            "x A".parse::<Command>(),
            Err(CommandError::Malformed(_))
        ));
        assert!(matches!(
            "".parse::<Command>(),
            Err(CommandError::Malformed(_))
        ));
        assert!(matches!(
            "0 A extra".parse::<Command>(),
            Err(CommandError::Malformed(_))
        ));
    }
}
