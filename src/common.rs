// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::opt::Opt;

const DEBUG_NAMES: &[&str] = &["debug"];
const VERBOSE_NAMES: &[&str] = &["v", "verbose"];

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
pub fn get_args() -> Vec<String> {
    // Remove program name
    env::args().skip(1).collect()
}

/// Returns the process-wide argument list.
///
/// The list is a copy of [get_args()] made the first time this is called.
/// Taking options from it never changes the real process arguments, and it
/// is never refilled.
///
/// ```rust
/// use takeopt::{default_args, take_verbose};
///
/// let verbose = take_verbose(&mut default_args());
/// ```
///
/// # Note
///
/// The returned guard holds a lock, so drop it before calling this
/// function again on the same thread.
pub fn default_args() -> MutexGuard<'static, Vec<String>> {
    static ARGS: OnceLock<Mutex<Vec<String>>> = OnceLock::new();

    let args = ARGS.get_or_init(|| {
        let args = get_args();
        log::debug!("default argument list: {:?}", args);

        Mutex::new(args)
    });

    // Recover from a poisoned lock.
    args.lock().unwrap_or_else(|e| e.into_inner())
}

/// The `--debug` flag.
pub fn debug_opt() -> &'static Opt {
    static DEBUG: OnceLock<Opt> = OnceLock::new();

    DEBUG.get_or_init(|| Opt::from_valid(DEBUG_NAMES))
}

/// The `-v` / `--verbose` flag.
pub fn verbose_opt() -> &'static Opt {
    static VERBOSE: OnceLock<Opt> = OnceLock::new();

    VERBOSE.get_or_init(|| Opt::from_valid(VERBOSE_NAMES))
}

fn take(opt: &Opt, args: &mut Vec<String>) -> bool {
    // Both are flags so this cannot fail.
    opt.take_flag(args).unwrap_or(false)
}

/// Remove `--debug` from `args`, returning true if it was found.
pub fn take_debug(args: &mut Vec<String>) -> bool {
    take(debug_opt(), args)
}

/// Remove `-v` or `--verbose` from `args`, returning true if it was found.
pub fn take_verbose(args: &mut Vec<String>) -> bool {
    take(verbose_opt(), args)
}

/// Print output only when enabled.
///
/// Used to avoid wrapping every (say) verbose message in an `if`.
///
/// ```rust
/// use takeopt::printer;
///
/// let verbose = printer(false);
///
/// // Nothing is displayed.
/// verbose.println(format_args!("processing {}", "foo"));
/// ```
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
pub enum Printer {
    /// Output is written to stdout.
    Active,
    /// Output is discarded.
    Silent,
}

impl Default for Printer {
    fn default() -> Self {
        Printer::Silent
    }
}

/// Create a [Printer] which only prints if `enabled` is set.
pub fn printer(enabled: bool) -> Printer {
    if enabled {
        Printer::Active
    } else {
        Printer::Silent
    }
}

impl Printer {
    /// Print the formatted arguments to stdout.
    ///
    /// Errors writing to stdout are ignored.
    pub fn print(&self, args: fmt::Arguments) {
        let _ = self.emit(&mut io::stdout().lock(), args, false);
    }

    /// Same as [Printer::print()], but with a trailing newline.
    pub fn println(&self, args: fmt::Arguments) {
        let _ = self.emit(&mut io::stdout().lock(), args, true);
    }

    /// Write the formatted arguments (and a newline) to `writer`.
    pub fn write_to<W>(&self, writer: &mut W, args: fmt::Arguments) -> io::Result<()>
    where
        W: Write,
    {
        self.emit(writer, args, true)
    }

    fn emit<W>(&self, writer: &mut W, args: fmt::Arguments, newline: bool) -> io::Result<()>
    where
        W: Write,
    {
        if *self == Printer::Silent {
            return Ok(());
        }

        writer.write_fmt(args)?;

        if newline {
            writer.write_all(b"\n")?;
        }

        writer.flush()
    }
}
