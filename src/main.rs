use std::fs;
use std::process;

use tracing::{info, Level};

use pastcheck::checker::Report;
use pastcheck::{Checker, Config, DictionaryProvider, PastcheckError};

fn main() {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    init_logging(config.verbosity);

    // Obtener texto a validar
    let text = if let Some(ref input_file) = config.input_file {
        match fs::read_to_string(input_file) {
            Ok(content) => content,
            Err(source) => {
                let e = PastcheckError::Input {
                    path: input_file.clone(),
                    source,
                };
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else if let Some(ref text) = config.text {
        text.clone()
    } else {
        eprintln!("Error: No se proporcionó texto para validar.");
        eprintln!();
        Config::print_help();
        process::exit(1);
    };

    if let Err(e) = run(&config, &text) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config, text: &str) -> Result<(), PastcheckError> {
    let provider = match config.dictionary {
        Some(ref path) => DictionaryProvider::from_file(path),
        None => DictionaryProvider::bundled(),
    };
    let dictionary = provider.ensure_loaded()?;
    info!(words = dictionary.len(), "dictionary ready");

    let checker = Checker::new(dictionary, config.checker.clone());

    if config.show_tokens {
        print_tokens(&checker, text);
        return Ok(());
    }

    let report = checker.check(text)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_tokens(checker: &Checker, text: &str) {
    for sentence in checker.split_sentences(text) {
        println!("{}", sentence);
        match checker.validator().analyze(&sentence) {
            Ok(tokens) => {
                for token in tokens {
                    println!(
                        "  {:>2}  {:<15} {:<16} {}",
                        token.position,
                        token.original,
                        token.category.name(),
                        token.metadata.subtype
                    );
                }
            }
            Err(e) => println!("  ({})", e),
        }
    }
}

fn print_report(report: &Report) {
    for r in &report.results {
        let mark = if r.valid { "OK " } else { "ERR" };
        println!("[{}] {}", mark, r.sentence);
        println!("      {}: {}", r.result.message, r.result.explanation);
    }

    let stats = &report.stats;
    println!();
    println!(
        "{}/{} válidas ({:.1}%)",
        stats.valid, stats.total, stats.success_percentage
    );
    for (label, count) in &stats.common_errors {
        println!("  {}: {}", label, count);
    }
}
