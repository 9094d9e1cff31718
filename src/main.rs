use std::process;

use serde::Serialize;
use structopt::StructOpt;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use lexicon_trie::wordlist::wordlist::LoadStats;
use lexicon_trie::{CountingPolicy, FileFormat, Index, LexiconResult, TrieConfig, Wordlist};

/// Load a word list and query it for words and prefixes.
#[derive(StructOpt, Debug)]
#[structopt(name = "lexicon")]
struct Cli {
    /// The word list to read, one word per line
    #[structopt(parse(from_os_str))]
    path: std::path::PathBuf,

    /// Check whether a word is stored
    #[structopt(short, long = "contains")]
    contains: Vec<String>,

    /// Check whether any stored word starts with a prefix
    #[structopt(short, long = "prefix")]
    prefix: Vec<String>,

    /// List the stored words starting with a prefix
    #[structopt(long = "complete")]
    complete: Vec<String>,

    /// Remove a word before answering queries
    #[structopt(short, long = "remove")]
    remove: Vec<String>,

    /// Print every stored word in alphabetical order
    #[structopt(short, long)]
    list: bool,

    /// Print one JSON report instead of plain text
    #[structopt(long)]
    json: bool,

    /// Column delimiter of the word list
    #[structopt(short, long)]
    delimiter: Option<char>,

    /// Column holding the word when a delimiter is given
    #[structopt(long, default_value = "0")]
    column: usize,

    /// Count every add, including repeats, like the reference lexicon
    #[structopt(long)]
    literal_counts: bool,
}

#[derive(Serialize, Debug)]
struct Answer {
    query: String,
    found: bool,
}

#[derive(Serialize, Debug)]
struct Completion {
    prefix: String,
    words: Vec<String>,
}

#[derive(Serialize, Debug)]
struct Report {
    counting: CountingPolicy,
    load: LoadStats,
    word_count: usize,
    node_count: usize,
    removed: Vec<Answer>,
    contains: Vec<Answer>,
    prefixes: Vec<Answer>,
    completions: Vec<Completion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<Vec<String>>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Cli) -> LexiconResult<()> {
    let counting = if args.literal_counts {
        CountingPolicy::Literal
    } else {
        CountingPolicy::Distinct
    };
    let format = match args.delimiter {
        Some(d) => FileFormat::builder()
            .delimiter(d)
            .word_column(args.column)
            .build(),
        None => FileFormat::builder().build(),
    };

    let mut wl = Wordlist::with_config(TrieConfig::builder().counting(counting).build());
    let load = wl.load_file(&args.path, &format)?;

    let removed = args
        .remove
        .iter()
        .map(|w| {
            let found = match wl.remove(w) {
                Ok(()) => true,
                Err(e) => {
                    warn!("{}", e);
                    false
                }
            };
            Answer { query: w.clone(), found }
        })
        .collect();

    let report = Report {
        counting: wl.trie().config().counting,
        load,
        word_count: wl.word_count(),
        node_count: wl.node_count(),
        removed,
        contains: args
            .contains
            .iter()
            .map(|w| Answer { query: w.clone(), found: wl.contains(w) })
            .collect(),
        prefixes: args
            .prefix
            .iter()
            .map(|p| Answer { query: p.clone(), found: wl.contains_prefix(p) })
            .collect(),
        completions: args
            .complete
            .iter()
            .map(|p| Completion {
                prefix: p.clone(),
                words: wl.words_with_prefix(p).collect(),
            })
            .collect(),
        words: if args.list { Some(wl.words().collect()) } else { None },
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &Report) {
    println!("{} words, {} nodes", report.word_count, report.node_count);
    for a in &report.removed {
        println!("removed {}: {}", a.query, if a.found { "ok" } else { "not found" });
    }
    for a in &report.contains {
        println!("word {}: {}", a.query, a.found);
    }
    for a in &report.prefixes {
        println!("prefix {}: {}", a.query, a.found);
    }
    for c in &report.completions {
        println!("{}*: {}", c.prefix, c.words.join(" "));
    }
    if let Some(words) = &report.words {
        words.iter().for_each(|w| println!("{}", w));
    }
}

fn main() {
    init_logging();
    let args = Cli::from_args();

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
