use anyhow::Result;
use clap::{Parser, ValueEnum};
use cinesearch::{
    DEFAULT_BASE_URL, HISTORY_FALLBACK, MovieClient, SEARCH_FALLBACK,
    formatters::{format_history, format_movie},
    interactive::InteractiveSearch,
    logging,
};
use std::io::{self, Write};

#[derive(Parser)]
#[command(
    name = "cinesearch",
    version,
    about = "Terminal client for the movie-search service",
    long_about = None
)]
struct Cli {
    /// Movie title to search for
    #[arg(required_unless_present_any = ["interactive", "history"])]
    query: Option<String>,

    /// Base URL of the movie-search service
    #[arg(long, env = "CINESEARCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Print the server-side search history instead of searching
    #[arg(long, conflicts_with = "query")]
    history: bool,

    /// Interactive search mode
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing();

    let client = MovieClient::new(&cli.base_url)?;

    if cli.interactive {
        let mut interactive = InteractiveSearch::new(client);
        return interactive.run();
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if cli.history {
        if cli.verbose {
            eprintln!("Fetching search history from {}", cli.base_url);
        }
        match client.search_history() {
            Ok(entries) => match cli.format {
                OutputFormat::Text => {
                    writeln!(handle, "{}", format_history(&entries, !cli.no_color))?;
                }
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut handle, &entries)?;
                    writeln!(handle)?;
                }
            },
            Err(err) => {
                eprintln!("{}", err.user_message(HISTORY_FALLBACK));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // One-shot search mode - query is required
    let query = cli.query.ok_or_else(|| {
        anyhow::anyhow!("Query argument is required (use --interactive for interactive mode)")
    })?;

    if cli.verbose {
        eprintln!("Searching {:?} via {}", query, cli.base_url);
    }

    match client.search_title(&query) {
        Ok(movie) => match cli.format {
            OutputFormat::Text => {
                writeln!(handle, "{}", format_movie(&movie, !cli.no_color))?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &movie)?;
                writeln!(handle)?;
            }
        },
        Err(err) => {
            eprintln!("{}", err.user_message(SEARCH_FALLBACK));
            std::process::exit(1);
        }
    }

    Ok(())
}
