// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for plucking individual options out of a list of
//! command-line arguments.
//!
//! This is **not** a full argument parser. If you want one, consider the
//! excellent [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! To understand what "simple" means, see the [Limitations](#limitations) section.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Errors](#errors)
//! * [Helpers](#helpers)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! You describe an option (its names and how many values it takes) with
//! an [Opt], then ask the [Opt] to take itself out of an argument list.
//! If the option is found, it (and its values) are removed from the list
//! and returned. Whatever remains in the list is left for you to deal with:
//! positional arguments, other options, or another [Opt].
//!
//! # Quickstart
//!
//! 1. Get the arguments.
//!
//!    ```rust
//!    let mut args = takeopt::get_args();
//!    ```
//!
//! 1. Create an [Opt] for each option. The first name is the primary one.
//!
//!    By default, options are "flags" (see the [Terminology section](#terminology)).
//!    Call [Opt::takes()] to specify how many values the option needs.
//!
//!    ```rust
//!    # use takeopt::{Arity, Opt, Result};
//!    #
//!    # fn main() -> Result<()> {
//!    // Support "--dry-run" flag option.
//!    let dry_run = Opt::new(["dry-run"])?;
//!
//!    // Support "-o <value>" and "--output <value>".
//!    let output = Opt::new(["o", "output"])?.takes(1)?;
//!
//!    // Support "--size <value> <value>".
//!    let size = Opt::new(["size"])?.takes(2)?;
//!
//!    // Support "--exec [value]..." which swallows all remaining arguments.
//!    let exec = Opt::new(["exec"])?.takes(Arity::Greedy)?;
//!    #
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Take the options.
//!
//!    ```rust
//!    # use takeopt::{Arity, Opt, Result, Values};
//!    #
//!    # fn main() -> Result<()> {
//!    # let dry_run = Opt::new(["dry-run"])?;
//!    # let output = Opt::new(["o", "output"])?.takes(1)?;
//!    # let size = Opt::new(["size"])?.takes(2)?;
//!    # let exec = Opt::new(["exec"])?.takes(Arity::Greedy)?;
//!    #
//!    let mut args: Vec<String> = ["in.txt", "-o", "out.txt", "--dry-run", "--exec", "ls", "-l"]
//!        .iter()
//!        .map(|s| s.to_string())
//!        .collect();
//!
//!    let dry_run = dry_run.take_flag(&mut args)?;
//!    assert!(dry_run);
//!
//!    let output = output.take_args(&mut args, false)?.one();
//!    assert_eq!(output, Some("out.txt".into()));
//!
//!    // Not specified, so defaults to one `None` per value.
//!    let [width, height] = size.take_args(&mut args, false)?.into_array();
//!    assert_eq!((width, height), (None, None));
//!
//!    let command = exec.take_args(&mut args, false)?.strings();
//!    assert_eq!(command, vec!["ls", "-l"]);
//!
//!    // Only the positional argument remains.
//!    assert_eq!(args, vec!["in.txt"]);
//!    #
//!    # Ok(())
//!    # }
//!    ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -f out.txt --debug in.txt
//! $ RUST_LOG=debug cargo run --example verbose-copy -- -v --size 80 24 a b --exec ls -l
//! $ cargo run --example error-handler -- --pair foo
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! - An "argument" is a value passed to a program on the command-line.
//!
//! - An "option" is an argument that starts with a dash character (`-`).
//!   Options with a single character name are specified with one dash
//!   (`-v`), longer names with two (`--verbose`). Names are case sensitive.
//!
//!   Names passed to [Opt::new()] can be given with or without their
//!   dashes: `"v"`, `"-v"` and `"--v"` all describe `-v`.
//!
//! - The "arity" of an option ([Arity]) is the number of "values" (arguments)
//!   that immediately follow it:
//!
//!   - [Arity::Flag]: no values. Use [Opt::take_flag()].
//!   - [Arity::Fixed]: exactly this many values (at most [MAX_VALUES]).
//!     Use [Opt::take_args()].
//!   - [Arity::Greedy]: every argument after the option. Use [Opt::take_args()].
//!
//!   Values are never interpreted: they are always returned as strings,
//!   even if they start with a dash.
//!
//! - Only the _first_ occurrence of an option is taken on each call.
//!   Call again to take the next one.
//!
//! ## Errors
//!
//! All errors are [Error] values. [Error::kind()] groups them:
//!
//! - [ErrorKind::InvalidOption]: the [Opt] was created or used incorrectly,
//!   for example asking a flag for values.
//! - [ErrorKind::Args]: the option was found, but without enough values.
//!   The argument list is **not** modified in this case.
//! - [ErrorKind::MissingOption]: the option was not found but was required
//!   (see [Opt::require_args()]).
//!
//! ## Helpers
//!
//! - [default_args()]: a process-wide copy of the program arguments.
//! - [take_debug()] and [take_verbose()]: take the common `--debug` and
//!   `-v` / `--verbose` flags.
//! - [printer()]: returns a [Printer] which only prints when enabled.
//!
//! # Limitations
//!
//! - Option bundling is not supported
//!
//!   **Example:** `-d -v` is valid, but `-dv` is not.
//!
//! - Options and their values must be separated by whitespace.
//!
//!   **Example:** '`--file foo`' is valid, but '`--file=foo`' is not.
//!
//! - The special `--` "end of options" argument is not recognised.
//!
//! - Unknown options are not detected: they are simply left in the list.

mod common;
mod error;
mod opt;

pub use error::{Error, ErrorKind, Result};

pub use opt::{canonical, Arity, Opt, Values, MAX_VALUES};

pub use common::{
    debug_opt, default_args, get_args, printer, take_debug, take_verbose, verbose_opt, Printer,
};
