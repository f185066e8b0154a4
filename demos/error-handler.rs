// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to inspect errors.
use std::process::exit;

use takeopt::{get_args, Error, ErrorKind, Opt, Result};

fn real_main() -> Result<()> {
    let mut args = get_args();

    // Support "--pair <value> <value>" (must be specified).
    let pair = Opt::new(["pair"])?.takes(2)?;

    let values = pair.require_args(&mut args)?;

    println!("INFO: pair: {:?}, remaining: {:?}", values.strings(), args);

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = real_main() {
        match e.kind() {
            ErrorKind::InvalidOption => eprintln!("BUG: {}", e),
            ErrorKind::MissingOption => eprintln!("ERROR: {}", e),
            ErrorKind::Args => {
                if let Error::NotEnoughArgs { expected, found, .. } = &e {
                    eprintln!(
                        "ERROR: {} ({} more value(s) needed)",
                        e,
                        expected - found.len()
                    );
                }
            }
        }

        exit(1);
    }
}
