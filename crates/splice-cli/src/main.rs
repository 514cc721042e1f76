mod holes;
mod json;

use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "splice")]
#[command(about = "splice: parse tagged-template markup into element trees")]
#[command(version)]
struct Cli {
    /// Log parser activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a template file and print its element tree as JSON
    Parse {
        /// Template file with `${...}` holes
        path: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check a template file for errors without printing the tree
    Check {
        /// Template file with `${...}` holes
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Parse { path, pretty } => cmd_parse(&path, pretty),
        Command::Check { path } => cmd_check(&path),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load(path: &str) -> holes::Template {
    let source = read_source(path);
    match holes::split(&source) {
        Ok(template) => {
            tracing::debug!(
                path,
                fragments = template.fragments.len(),
                "split template file"
            );
            template
        }
        Err(e) => {
            eprintln!("Error in {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_or_exit(path: &str) -> Option<splice_parser::ParseNode<serde_json::Value>> {
    let template = load(path);
    match splice_parser::parse(&template.fragments, template.values) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_parse(path: &str, pretty: bool) {
    let tree = parse_or_exit(path);
    let json = tree.map_or(serde_json::Value::Null, |tree| tree.build(&mut json::JsonTree));

    let output = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error serializing {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str) {
    parse_or_exit(path);
    eprintln!("OK: {path}");
}
