mod dev;

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use dev::measure;
use trie_corrector::{AsciiStringStrategy, Dictionary, DictionaryError, StoryCorrector};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(corpus) = args.next() else {
        eprintln!("usage: trie-corrector <corpus-file> [story words...]");
        return ExitCode::FAILURE;
    };
    let story: Vec<String> = args.collect();

    match run(&corpus, story) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("trie-corrector: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(corpus: &str, story: Vec<String>) -> Result<(), DictionaryError> {
    let mut dictionary: Dictionary<AsciiStringStrategy> = Dictionary::new();

    measure("load_dictionary", || {
        dictionary.load_dictionary(corpus, 0, " ")
    })?;

    let story = if story.is_empty() {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        story.join(" ")
    };

    let corrections = measure("corrections", || {
        StoryCorrector::new(&dictionary).corrections(&story)
    });

    for correction in corrections {
        if correction.is_uncorrectable() {
            println!("{} -> ?", correction.word);
        } else {
            println!("{} -> {}", correction.word, correction.close_match);
        }
    }
    Ok(())
}
