/*!
The strfind binary: thin glue around `strfind-matchers`. It parses the
command line, loads the haystack, runs the selected algorithm and renders
the offsets as row/column positions.
 */

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::process;

use termcolor::{ColorChoice, StandardStream};

use strfind_matchers::{search, Algorithm};

mod app;
mod logger;
mod position;
mod printer;

fn main() {
    match try_main() {
        // Grep lineage: 0 when something matched, 1 when nothing did.
        Ok(matched) => process::exit(if matched { 0 } else { 1 }),
        Err(err) => {
            eprintln!("strfind: {}", err);
            process::exit(2);
        }
    }
}

fn try_main() -> Result<bool, Box<dyn Error>> {
    let args = app::app().get_matches();
    logger::init(&args)?;

    // clap has already rejected anything outside possible_values, so the
    // strict parse cannot fail here; it is still propagated rather than
    // unwrapped.
    let algorithm: Algorithm = args.value_of("algorithm").unwrap_or("naive").parse()?;
    let pattern = args.value_of("pattern").unwrap_or_default().as_bytes().to_vec();
    let haystack = read_haystack(args.value_of("path"))?;
    log::debug!(
        "searching {} bytes for a {} byte pattern with {}",
        haystack.len(),
        pattern.len(),
        algorithm,
    );

    let found = search(&haystack, &pattern, algorithm);
    log::debug!("{} found {} match(es)", algorithm, found.len());

    if args.is_present("count") {
        println!("{}", found.len());
    } else if args.is_present("json") {
        printer::print_json(io::stdout().lock(), &haystack, &found)?;
    } else {
        let mut stdout = StandardStream::stdout(color_choice(&args));
        printer::print_matches(&mut stdout, &haystack, pattern.len(), &found)?;
    }

    Ok(!found.is_empty())
}

fn read_haystack(path: Option<&str>) -> Result<Vec<u8>, Box<dyn Error>> {
    match path {
        Some(path) => {
            fs::read(path).map_err(|err| format!("{}: {}", path, err).into())
        }
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn color_choice(args: &clap::ArgMatches<'_>) -> ColorChoice {
    if args.is_present("color") {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}
