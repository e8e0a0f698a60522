use clap::{Parser, Subcommand};

/// CLI arguments for aeropath
#[derive(Debug, Parser)]
#[command(
    name = "aeropath",
    version,
    about = "CLI for inspecting and editing an aeropath travel log"
)]
pub struct CliArgs {
    /// Path to a JSON export (.json or .json.gz). Without it the sample dataset is used.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Evaluate "now" at this RFC 3339 instant instead of the system clock
    #[arg(long = "now", global = true)]
    pub now: Option<String>,

    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the travel statistics summary
    Stats,

    /// Show rating, month and country breakdowns
    Analytics,

    /// List cities through the search/filter/sort pipeline
    List {
        /// Case-insensitive substring of name or country
        #[arg(short = 's', long = "search")]
        search: Option<String>,

        /// all | favorites | high-rated | recent
        #[arg(short = 'f', long = "filter", default_value = "all")]
        filter: String,

        /// newest | oldest | rating | name | country
        #[arg(long = "sort", default_value = "newest")]
        sort: String,
    },

    /// Add a city and write the log back to --input (created if missing)
    #[command(allow_negative_numbers = true)]
    Add {
        name: String,
        country: String,
        latitude: String,
        longitude: String,

        /// Visit date (YYYY-MM-DD), defaults to now
        #[arg(long = "date")]
        date: Option<String>,

        /// Star rating; values outside 1-5 are clamped
        #[arg(long = "rating", default_value_t = 5)]
        rating: i64,

        #[arg(long = "notes", default_value = "")]
        notes: String,

        #[arg(long = "favorite")]
        favorite: bool,
    },

    /// Toggle the favorite flag of a city (by name) and write back to --input
    Favorite { name: String },

    /// Delete a city (by name) and write back to --input
    Delete { name: String },

    /// Export the whole log
    Export {
        /// json | csv | text
        #[arg(short = 'F', long = "format", default_value = "json")]
        format: String,

        /// Output path (.gz for gzip); stdout when omitted
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },

    /// Write the sample dataset as a JSON export
    Sample {
        #[arg(short = 'o', long = "output")]
        output: String,
    },
}
