use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cinelist")]
#[command(about = "Browse, filter and add movies in an in-memory catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $CINELIST_CONFIG, then the XDG config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive catalog (default)
    Tui {
        /// Route to open first ("home" or "detail")
        #[arg(long, default_value = "home")]
        route: String,

        /// Movie to show when opening the detail route
        #[arg(long)]
        movie_id: Option<u64>,
    },

    /// Print the home page: the filtered movie list
    List {
        /// Case-insensitive title substring
        #[arg(long, default_value = "")]
        title: String,

        /// Minimum rating, 1 to 5
        #[arg(long, default_value = "")]
        min_rating: String,
    },

    /// Print the detail page for one movie
    Show { id: u64 },

    /// Navigate to a route and print whichever page it resolves to
    Open {
        route: String,

        #[arg(long)]
        movie_id: Option<u64>,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
