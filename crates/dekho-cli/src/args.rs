use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand};
use dekho_core::{DEFAULT_RECOMMENDATIONS, MAX_RECOMMENDATIONS};

/// CLI arguments for dekho
#[derive(Debug, Parser)]
#[command(
    name = "dekho",
    version,
    about = "CLI for browsing and querying the Dekho Bharat travel catalog"
)]
pub struct CliArgs {
    /// Path to a catalog JSON (or .json.gz) file (default: the bundled catalog)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Print the whole category/destination tree
    Tree,

    /// Show one node by id
    Node {
        /// Node id (e.g. varkala, beaches)
        id: String,
    },

    /// Show the path from the root to a node
    Path {
        /// Node id
        id: String,
    },

    /// Search destinations whose name starts with a prefix
    Search {
        /// Prefix to search (case-insensitive)
        prefix: String,
    },

    /// Suggest the destinations that follow a given one
    Recommend {
        /// Destination id
        id: String,

        /// Number of suggestions (at most 100)
        #[arg(
            short = 'n',
            long = "count",
            default_value_t = DEFAULT_RECOMMENDATIONS,
            value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_RECOMMENDATIONS as u64)
        )]
        count: usize,
    },
}
