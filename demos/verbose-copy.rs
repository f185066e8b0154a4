// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing the convenience helpers, multi-value and greedy
/// options.
use takeopt::{default_args, printer, take_debug, take_verbose, Arity, Opt, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = default_args();

    let debug = take_debug(&mut args);
    let verbose = printer(take_verbose(&mut args));

    // Support "--size <value> <value>".
    let size = Opt::new(["size"])?.takes(2)?;

    // Support "--exec [value]..." (must be last).
    let exec = Opt::new(["exec"])?.takes(Arity::Greedy)?;

    // Greedy options go first: their values may look like other options.
    let command = exec.take_args(&mut args, false)?;

    // Always safe to unpack, even if "--size" was not specified.
    let [width, height] = size.take_args(&mut args, false)?.into_array();

    verbose.println(format_args!("debug: {}", debug));
    verbose.println(format_args!("size: {:?}x{:?}", width, height));

    if command.is_empty() {
        verbose.println(format_args!("no command"));
    } else {
        verbose.println(format_args!("command: {:?}", command.strings()));
    }

    for arg in args.iter() {
        println!("{}", arg);
    }

    Ok(())
}
