use cli::{parse_cli, ParsedCli};
use log::info;
use multibag::Bag;
use words::{count_words, report};

mod cli;
mod words;

fn main() {
    env_logger::init();

    let ParsedCli { config, input, json, verbose } = parse_cli();

    let now = std::time::Instant::now();

    let words = count_words(&input, &config);
    let frequent = report(&words, &config);

    info!("Counted in {:.2?}", now.elapsed());

    if verbose {
        println!("unique: {}, total: {}", words.unique_count(), words.total_count());
    }

    if json {
        let frequent: Bag<&String> = Bag::from_counts(frequent);
        match serde_json::to_string_pretty(&frequent) {
            Ok(dump) => println!("{dump}"),
            Err(err) => eprintln!("Could not dump the counts as JSON: {err}"),
        }
    } else {
        for (word, count) in frequent {
            println!("{count:>8} {word}");
        }
    }
}
