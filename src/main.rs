use std::fs;
use std::process;

use taglex_core::Registry;

use crate::error::Result;

mod app;
mod error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run() {
        if err.is_broken_pipe() {
            process::exit(0);
        }
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = app::app().get_matches();
    match matches.subcommand() {
        ("create", Some(m)) => cmd_create(m),
        ("query", Some(m)) => cmd_query(m),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn cmd_create(m: &clap::ArgMatches<'_>) -> Result<()> {
    let name = m.value_of("name").unwrap();
    let mut registry = Registry::new();
    let handle = registry.create(name);
    println!("{}", handle);
    Ok(())
}

fn cmd_query(m: &clap::ArgMatches<'_>) -> Result<()> {
    let csv_path = m.value_of("csv").unwrap();
    let query = m.value_of("query").unwrap();
    let csv = fs::read_to_string(csv_path)?;

    let mut registry = Registry::new();
    let handle = registry.create(csv_path);
    registry.get_mut(handle)?.load(&csv);

    for word in registry.get(handle)?.search(query) {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            word.word, word.normalized_str(), word.freq, word.category, word.priority, word.redirect
        );
    }
    Ok(())
}
