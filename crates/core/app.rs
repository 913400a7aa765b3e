use clap::{App, AppSettings, Arg};

const ABOUT: &str = "\
strfind searches a file (or stdin) for every occurrence of a fixed byte
pattern and prints each occurrence as row:col. The search algorithm is
selectable; all algorithms report identical positions, overlapping
occurrences included.";

const ALGORITHMS: &[&str] = &["naive", "kmp", "rabin-karp", "horspool"];

/// Build the clap application for the strfind binary.
pub fn app() -> App<'static, 'static> {
    App::new("strfind")
        .version(clap::crate_version!())
        .about(ABOUT)
        .setting(AppSettings::UnifiedHelpMessage)
        .arg(
            Arg::with_name("pattern")
                .required(true)
                .help("The exact pattern to search for, matched byte for byte."),
        )
        .arg(
            Arg::with_name("path")
                .help("File to search. When omitted, stdin is searched."),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("NAME")
                .takes_value(true)
                .possible_values(ALGORITHMS)
                .default_value("naive")
                .help("The search algorithm to run."),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .conflicts_with("json")
                .help("Print only the number of matches."),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print matches as a JSON document with row/col positions."),
        )
        .arg(
            Arg::with_name("color")
                .long("color")
                .help("Colorize the default output."),
        )
        .arg(Arg::with_name("debug").long("debug").help("Show debug messages."))
        .arg(
            Arg::with_name("trace")
                .long("trace")
                .hidden(true)
                .help("Show trace messages."),
        )
}
