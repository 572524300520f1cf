use std::process;

use clap::Parser;

use rsa_textbook::shell::{run, Cli};

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
