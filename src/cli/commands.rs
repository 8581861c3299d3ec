//! CLI commands and argument parsing

use crate::error::{Error, Result};
use crate::types::SortOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Restaurant listing client
#[derive(Parser, Debug)]
#[command(name = "restaurant-list")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Listing endpoint (overrides config file and environment)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load one page and print it
    List {
        /// Free-text filter
        #[arg(short, long)]
        search: Option<String>,

        /// Sort directive: default, id or nome
        #[arg(short, long)]
        ordering: Option<SortOrder>,
    },

    /// Browse interactively
    Browse,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON view state
    Json,
    /// Human-readable output
    Pretty,
}

/// One line typed in a browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Set the search box
    Search(String),
    /// Set the ordering selector
    Order(SortOrder),
    /// Submit the form
    Submit,
    /// Follow the forward cursor
    Next,
    /// Follow the backward cursor
    Previous,
    /// Print the current view
    Show,
    /// Print the command list
    Help,
    /// End the session
    Quit,
}

impl BrowseCommand {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_lowercase().as_str() {
            "search" | "busca" => Ok(Self::Search(rest.to_string())),
            "order" | "ordering" => Ok(Self::Order(rest.parse()?)),
            "submit" | "buscar" => Ok(Self::Submit),
            "next" | "n" => Ok(Self::Next),
            "prev" | "previous" | "p" => Ok(Self::Previous),
            "show" | "" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(Error::Other(format!(
                "Unknown command '{other}' (type 'help' for a list)"
            ))),
        }
    }

    /// Usage text for the browse session
    pub fn help() -> &'static str {
        "Commands:\n  \
         search <text>          set the search box (empty clears it)\n  \
         order <default|id|nome> set the ordering\n  \
         submit                 run the search\n  \
         next | prev            follow the page links\n  \
         show                   print the current page\n  \
         quit                   leave"
    }
}
