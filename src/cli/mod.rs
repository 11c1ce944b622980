//! CLI argument parsing using clap 4.x derive macros

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ask the analytics query service questions in plain language
///
/// Each question is one chat turn: the query service plans it and the agent
/// replies with an answer, a chart, or a table.
#[derive(Parser, Debug)]
#[command(name = "vizagent")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Direct query (alternative to 'query' subcommand)
    #[arg(num_args = 1..)]
    pub query: Vec<String>,

    /// Config file to use instead of the standard locations
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Query service endpoint (overrides config)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Answer every query with the plan result stored in this JSON file
    #[arg(long, global = true, conflicts_with = "url")]
    pub fixture: Option<PathBuf>,

    /// Print replies as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print version information
    #[arg(long)]
    pub version: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a single query
    Query {
        /// The question for the query service
        query: String,
    },

    /// Read one query per line from stdin, keeping conversation memory
    Chat,

    /// Print the resolved configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_words_become_query() {
        let cli = Cli::try_parse_from(["vizagent", "top", "products"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.query.join(" "), "top products");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["vizagent", "chat", "--fixture", "plan.json", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Chat)));
        assert_eq!(cli.fixture, Some(PathBuf::from("plan.json")));
        assert!(cli.json);
    }

    #[test]
    fn test_fixture_conflicts_with_url() {
        let parsed = Cli::try_parse_from([
            "vizagent",
            "--url",
            "http://localhost:5000/api/query",
            "--fixture",
            "plan.json",
            "query",
            "q",
        ]);
        assert!(parsed.is_err());
    }
}
