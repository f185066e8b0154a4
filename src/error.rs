// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// Broad classification of an [Error].
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum ErrorKind {
    /// The option was declared or used incorrectly (programmer error).
    InvalidOption,
    /// The option was found but not enough values followed it.
    Args,
    /// The option was required but not found.
    MissingOption,
}

/// The error type.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Incorrect API usage errors (programmer error)
    //------------------------------
    /// An option must have at least one name.
    #[error("no option names specified")]
    NoNames,

    /// Option names cannot be empty (or only dashes and whitespace).
    #[error("empty option name")]
    EmptyName,

    /// Option names cannot contain whitespace since the shell would
    /// never deliver such a token.
    #[error("invalid option name: {name:?}")]
    InvalidName {
        /// The name as specified by the caller.
        name: String,
    },

    /// An option cannot take this many values.
    #[error("option '{name}' cannot take {count} values (maximum {max})")]
    TooManyValues {
        /// Canonical name(s) of the option.
        name: String,
        /// Number of values requested.
        count: usize,
        /// Largest number of values allowed.
        max: usize,
    },

    /// A flag was requested from an option that takes values.
    #[error("option '{usage}' takes values, not a flag")]
    NotAFlag {
        /// Usage string for the option.
        usage: String,
    },

    /// Values were requested from a flag option.
    #[error("option '{usage}' is a flag and takes no values")]
    IsAFlag {
        /// Usage string for the option.
        usage: String,
    },

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// The option was found, but fewer values followed it than it needs.
    #[error("expected {expected} value(s) for '{usage}', got {found:?}")]
    NotEnoughArgs {
        /// Number of values the option needs.
        expected: usize,
        /// Usage string for the option.
        usage: String,
        /// The values that were actually found after the option.
        found: Vec<String>,
    },

    /// An option that must be specified was not specified.
    #[error("missing required option '{name}'")]
    MissingOpt {
        /// Canonical name(s) of the option.
        name: String,
    },
}

impl Error {
    /// Returns the broad category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoNames
            | Error::EmptyName
            | Error::InvalidName { .. }
            | Error::TooManyValues { .. }
            | Error::NotAFlag { .. }
            | Error::IsAFlag { .. } => ErrorKind::InvalidOption,
            Error::NotEnoughArgs { .. } => ErrorKind::Args,
            Error::MissingOpt { .. } => ErrorKind::MissingOption,
        }
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
