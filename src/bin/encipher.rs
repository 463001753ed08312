// src/bin/encipher.rs
//! Batch encipher — settings file in, transformed text out
//!
//! Reads settings from `ENIGMA_SETTINGS` (default `enigma.toml`), takes
//! the message from the command line or stdin, prints the result. The
//! same invocation deciphers, the machine being self-reciprocal.

use enigma_engine::{config, EnigmaError, Machine};
use log::info;
use std::io::Read;

fn main() -> Result<(), EnigmaError> {
    env_logger::init();

    let settings = config::load()?;
    let mut machine = Machine::new(&settings)?;
    info!("machine ready:\n{}", machine.snapshot());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let message = if args.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.join(" ")
    };

    let output = machine.process(message.trim_end_matches('\n'))?;
    println!("{output}");
    info!("final state:\n{}", machine.snapshot());

    Ok(())
}
