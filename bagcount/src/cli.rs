use std::path::PathBuf;
use std::sync::LazyLock;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser};

use crate::words::Config;

static DEFAULT_CONFIG: LazyLock<Config> = LazyLock::new(Config::default);

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Input {
    /// Input text
    #[arg(conflicts_with = "input_file", long, help = "Input text, SURROUNDED by single quotes(')", value_name = "TEXT")]
    text_input: Option<String>,

    /// Input file
    #[arg(conflicts_with = "text_input", short, long, help = "Input file", value_name = "FILE")]
    input_file: Option<PathBuf>,
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    input: Input,

    /// Minimal number of occurrences
    #[arg(short, long, value_parser = parse_min_count, default_value_t = DEFAULT_CONFIG.min_count, help = "Minimal number of occurrences", value_name = "INTEGER")]
    min_count: usize,

    /// Number of words to print
    #[arg(short, long, help = "Number of words to print", value_name = "INTEGER")]
    top: Option<usize>,

    /// Fold case before counting
    #[arg(short, long, help = "Fold case before counting")]
    lowercase: bool,

    /// Prints unique and total counts
    #[arg(short, long, help = "Prints unique and total counts")]
    verbose: bool,

    #[arg(long, help = "Dump output as JSON")]
    json: bool,
}

fn parse_min_count(cli_min_count: &str) -> Result<usize, String> {
    match cli_min_count.parse::<usize>() {
        Ok(0) => Err("0 is not a positive number of occurrences".into()),
        Ok(value) => Ok(value),
        Err(_) => Err("invalid digit found in string".into()),
    }
}

pub struct ParsedCli {
    pub config: Config,
    pub input: String,
    pub json: bool,
    pub verbose: bool,
}

/// Reads the file when one was given, the inline text otherwise.
fn read_input(input: Input) -> std::io::Result<String> {
    match input.input_file {
        Some(path_to_file) => std::fs::read_to_string(path_to_file),
        None => Ok(input.text_input.unwrap_or_default()),
    }
}

pub fn parse_cli() -> ParsedCli {
    let cli = Cli::parse();

    let path_to_file = cli.input.input_file.clone();
    let input = match read_input(cli.input) {
        Ok(text) => text,
        Err(err) => {
            let path = path_to_file.unwrap_or_default();
            Cli::command()
                .error(ErrorKind::ValueValidation, format!("Error reading file `{}`: {:?}", path.display(), err))
                .exit();
        }
    };

    ParsedCli {
        config: Config { min_count: cli.min_count, top: cli.top, lowercase: cli.lowercase },
        input,
        json: cli.json,
        verbose: cli.verbose,
    }
}
