//! `wordnet` command-line tool.
//!
//! Subcommands:
//! - `sca`: shortest common ancestors of vertex pairs read from stdin,
//!   over a plain digraph file.
//! - `lookup`: noun checks, `sca` and `distance` for two words.
//! - `outcast`: the least related noun of a group.
//!
//! Lexicon paths come from `--synsets`/`--hypernyms` or the
//! `WORDNET_SYNSETS`/`WORDNET_HYPERNYMS` environment variables.
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use synset_core::{ShortestCommonAncestor, VertexId};
use synset_lexicon::config::{LexiconArgs, OutputFormat};
use synset_lexicon::load::load_digraph;
use synset_lexicon::report::{
    render_lookup, render_outcast, render_pair, LookupReport, PairReport,
};
use synset_lexicon::{outcast_report, LexiconError, WordNet};

/// WordNet relatedness queries.
#[derive(Parser)]
#[command(name = "wordnet", about = "Shortest common ancestors and outcasts over WordNet")]
struct Cli {
    #[command(flatten)]
    lexicon: LexiconArgs,

    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read `v w` pairs from stdin and print length and ancestor for each.
    Sca {
        /// Digraph file: vertex count, edge count, then `v w` edges.
        #[arg(short, long)]
        digraph: PathBuf,
    },

    /// Show noun checks, sca and distance for two words.
    Lookup { word1: String, word2: String },

    /// Find the outcast among nouns given as arguments, or on stdin if none.
    Outcast { nouns: Vec<String> },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    process::exit(code);
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Returns the process exit code for runs that complete.
fn run(cli: &Cli) -> Result<i32, LexiconError> {
    match &cli.command {
        Commands::Sca { digraph } => run_sca(digraph, cli.format),
        Commands::Lookup { word1, word2 } => {
            let wordnet = load_wordnet(&cli.lexicon)?;
            let report = LookupReport::build(&wordnet, word1, word2)?;
            println!("{}", render_lookup(&report, cli.format)?);
            Ok(0)
        }
        Commands::Outcast { nouns } => {
            let wordnet = load_wordnet(&cli.lexicon)?;
            let nouns = if nouns.is_empty() {
                read_stdin()?
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            } else {
                nouns.clone()
            };
            let nouns: Vec<&str> = nouns.iter().map(String::as_str).collect();
            let report = outcast_report(&wordnet, &nouns)?;
            println!("{}", render_outcast(&report, cli.format)?);
            Ok(0)
        }
    }
}

fn load_wordnet(args: &LexiconArgs) -> Result<WordNet, LexiconError> {
    let settings = args.resolve()?;
    let wordnet = WordNet::with_options(&settings.synsets, &settings.hypernyms, &settings.options)?;
    info!(
        synsets = wordnet.synset_count(),
        nouns = wordnet.noun_count(),
        "lexicon ready"
    );
    Ok(wordnet)
}

fn read_stdin() -> Result<String, LexiconError> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|source| LexiconError::Io {
            path: "<stdin>".into(),
            source,
        })?;
    Ok(input)
}

/// Parse whitespace-separated vertex ids into pairs.
fn parse_pairs(input: &str) -> Result<Vec<(VertexId, VertexId)>, LexiconError> {
    let mut ids = Vec::new();
    for (i, line) in input.lines().enumerate() {
        for token in line.split_whitespace() {
            let id = token.parse::<VertexId>().map_err(|_| LexiconError::Parse {
                input: "<stdin>".to_string(),
                line: i + 1,
                reason: format!("invalid vertex id '{}'", token),
            })?;
            ids.push(id);
        }
    }
    if ids.len() % 2 != 0 {
        return Err(LexiconError::Parse {
            input: "<stdin>".to_string(),
            line: input.lines().count().max(1),
            reason: "odd number of vertex ids".to_string(),
        });
    }
    Ok(ids.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}

/// Answer each pair independently: a bad pair is reported and skipped,
/// and the run exits 1 if any pair failed.
fn run_sca(digraph: &Path, format: OutputFormat) -> Result<i32, LexiconError> {
    let graph = load_digraph(digraph)?;
    let sca = ShortestCommonAncestor::new(&graph);
    let pairs = parse_pairs(&read_stdin()?)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut failed = false;
    for (v, w) in pairs {
        match sca.ancestral_path(v, w) {
            Ok(path) => {
                let line = render_pair(&PairReport::new(v, w, path), format)?;
                writeln!(out, "{}", line).map_err(|source| LexiconError::Io {
                    path: "<stdout>".into(),
                    source,
                })?;
            }
            Err(e) => {
                failed = true;
                eprintln!("Error: ({}, {}): {}", v, w, e);
            }
        }
    }
    out.flush().map_err(|source| LexiconError::Io {
        path: "<stdout>".into(),
        source,
    })?;

    Ok(if failed { 1 } else { 0 })
}
