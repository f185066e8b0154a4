// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to take a flag and an option with a value.
use takeopt::{get_args, Opt, Result};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = get_args();

    println!("INFO: Initial arguments: {:?}", args);

    // Support "--debug" flag option.
    let debug = Opt::new(["debug"])?;

    // Support "-f <value>" and "--file <value>" option.
    let file = Opt::new(["f", "file"])?.takes(1)?.default_value("-");

    let debug = debug.take_flag(&mut args)?;
    let file = file.take_args(&mut args, false)?.one();

    println!("INFO: debug: {}, file: {:?}", debug, file);

    // Whatever is left is for the program to deal with.
    println!("INFO: Remaining arguments: {:?}", args);

    Ok(())
}
