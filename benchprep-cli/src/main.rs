//! `benchprep` command-line entry point

use benchprep_cli::Cli;
use clap::Parser;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version go to stdout and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
