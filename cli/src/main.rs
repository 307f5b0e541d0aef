use std::path::PathBuf;
use std::process::exit;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use akshara_backend::logger;
use akshara_backend::syllable_index::process_file;

#[derive(Parser, Debug)]
#[command(about = "Build syllable count and syllable-to-word index files from a Devanagari word list", long_about = None)]
struct Cli {
    /// Path to the input word list: UTF-8, one word per line
    #[arg(value_name = "INPUT_FILE")]
    input: PathBuf,
}

fn run(cli: Cli) -> Result<()> {
    if let Err(e) = logger::init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    process_file(&cli.input)
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion {
                print!("{}", e.render());
                exit(0);
            }
            // Wrong argument count: usage goes to stdout, exit status 1
            print!("{}", e.render());
            exit(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}
