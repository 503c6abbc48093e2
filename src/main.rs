//! hnsearch CLI
//!
//! Runs the interactive TUI by default; the `search` subcommand does a
//! one-shot query and prints the results to stdout.

use clap::{Parser, Subcommand};
use console::style;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use hnsearch::tui::App;
use hnsearch::{
    format_age, search_url, AppConfig, HnSearchError, SearchClient, Story, ValueStore,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

/// hnsearch - Terminal search for the Hacker News article index
#[derive(Parser)]
#[command(name = "hnsearch")]
#[command(version)]
#[command(about = "Search the Hacker News article index", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search stories and print the results
    Search {
        /// Query text (defaults to the last query used)
        #[arg(allow_hyphen_values = true)]
        query: Option<String>,

        /// Maximum results to print (default 20)
        #[arg(short, long)]
        max: Option<usize>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },
}

fn main() {
    hnsearch::logging::init();
    hnsearch::logging::info("MAIN", "hnsearch starting up");

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Search { query, max, output }) => {
            cmd_search(query.as_deref(), max, &output)
        }
        None => cmd_tui(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// One-shot search command implementation
fn cmd_search(query: Option<&str>, max: Option<usize>, output: &str) -> hnsearch::Result<()> {
    let config = AppConfig::default();
    let max = max.unwrap_or(config.max_results);
    let mut store = ValueStore::open(
        config
            .store_path
            .clone()
            .unwrap_or_else(ValueStore::default_path),
    );

    // An explicit query becomes the persisted one, like typing it in the
    // TUI; with no argument we re-run the last session's query.
    let query = match query {
        Some(q) => {
            store.set(&config.search_key, q);
            q.to_string()
        }
        None => store.get(&config.search_key, &config.default_query),
    };

    let client = SearchClient::new();
    let stories = client.fetch(&search_url(&config.endpoint, &query))?;

    match output {
        "json" => {
            let trimmed: Vec<&Story> = stories.iter().take(max).collect();
            println!("{}", serde_json::to_string_pretty(&trimmed)?);
        }
        "text" => {
            println!(
                "{} {} ({} hits)",
                style("Results for").bold(),
                style(&query).yellow(),
                stories.len()
            );
            for story in stories.iter().take(max) {
                print_story(story);
            }
        }
        other => return Err(HnSearchError::InvalidOutputFormat(other.to_string())),
    }

    Ok(())
}

fn print_story(story: &Story) {
    let points = story.points.unwrap_or(0);
    let comments = story.num_comments.unwrap_or(0);

    println!(
        "{:>5}  {}  {}",
        style(points).yellow(),
        style(&story.title).bold(),
        style(format_age(story.created_at)).dim()
    );
    let source = story.url.as_deref().unwrap_or("(text post)");
    println!(
        "       by {}, {} comments - {}",
        style(&story.author).green(),
        comments,
        style(source).dim()
    );
}

/// Interactive TUI command implementation
fn cmd_tui() -> hnsearch::Result<()> {
    let config = AppConfig::default();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(&config);
    let result = app.run(&mut terminal);
    restore_terminal();
    hnsearch::logging::flush();
    result
}

fn setup_terminal() -> hnsearch::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().map_err(|e| HnSearchError::Terminal(e.to_string()))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(HnSearchError::Terminal(e.to_string()));
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = disable_raw_mode();
        HnSearchError::Terminal(e.to_string())
    })
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
