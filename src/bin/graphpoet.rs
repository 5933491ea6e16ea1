//! Graphpoet CLI — bridge-word poems from a corpus file.
//!
//! Usage:
//!   graphpoet poem --corpus path [TEXT]...
//!   graphpoet graph --corpus path [--json]

use clap::{Parser, Subcommand};
use graphpoet::GraphPoet;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "graphpoet",
    version,
    about = "Insert bridge words into text using a corpus word graph"
)]
struct Cli {
    /// Log graph construction and bridge choices to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print TEXT with bridge words inserted
    Poem {
        /// Path to the corpus text file
        #[arg(long)]
        corpus: PathBuf,
        /// Input text (read from stdin when omitted)
        text: Vec<String>,
    },
    /// Print the word-adjacency graph built from the corpus
    Graph {
        /// Path to the corpus text file
        #[arg(long)]
        corpus: PathBuf,
        /// Emit the graph as JSON instead of an edge list
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_poet(corpus: &Path) -> Result<GraphPoet, String> {
    GraphPoet::from_path(corpus).map_err(|e| e.to_string())
}

fn cmd_poem(corpus: &Path, text: Vec<String>) -> i32 {
    let poet = match load_poet(corpus) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let input = if text.is_empty() {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Error: cannot read stdin: {}", e);
            return 1;
        }
        buf
    } else {
        text.join(" ")
    };
    println!("{}", poet.poem(&input));
    0
}

fn cmd_graph(corpus: &Path, json: bool) -> i32 {
    let poet = match load_poet(corpus) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if !json {
        print!("{}", poet.graph());
        return 0;
    }
    match serde_json::to_string_pretty(&poet.graph().snapshot()) {
        Ok(out) => {
            println!("{}", out);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let code = match cli.command {
        Commands::Poem { corpus, text } => cmd_poem(&corpus, text),
        Commands::Graph { corpus, json } => cmd_graph(&corpus, json),
    };
    std::process::exit(code);
}
