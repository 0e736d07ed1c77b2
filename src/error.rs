// src/error.rs
use thiserror::Error;

/// Tokenizer failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A single quote was opened and never closed
    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Everything a single command line can fail with.
///
/// All variants except `Io` are reported to the user on stdout and the
/// interpreter moves on to the next line.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{command}: {source}")]
    Parse {
        command: String,
        #[source]
        source: ParseError,
    },

    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("cd: {path}: No such file or directory")]
    NoSuchDirectory { path: String },

    #[error("cd: HOME not set")]
    HomeNotSet,

    #[error("pwd: {0}")]
    Pwd(#[source] std::io::Error),

    #[error("{command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub fn parse(command: &str, source: ParseError) -> Self {
        ShellError::Parse { command: command.to_string(), source }
    }
}
