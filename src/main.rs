use clap::Parser;
use flight_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments; clap exits on usage errors
    let args = Args::parse();

    match commands::run(args) {
        Ok(_report) => {
            // Success - the report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
