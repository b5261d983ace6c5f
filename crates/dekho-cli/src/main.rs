//! dekho: command-line interface for dekho-core
//!
//! Browse the travel catalog from your terminal: print statistics or the
//! whole tree, look up a node, show the discovery path to it, search
//! destinations by name prefix and get recommendations.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ dekho stats
//!
//! - Destinations starting with "go" (case-insensitive)
//!   $ dekho search go
//!
//! - Path from the root to Varkala
//!   $ dekho path varkala
//!
//! - The three destinations after Leh, as JSON
//!   $ dekho --json recommend leh -n 3
//!
//! Data source
//! -----------
//!
//! By default the catalog compiled into `dekho-core` is used. Use
//! `--input <path>` to load a custom `.json` (or `.json.gz`) catalog.
//! Logs go to stderr; set `RUST_LOG` or pass `-v` / `-vv`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use dekho_core::api::{NodeView, TreeView};
use dekho_core::{Catalog, Node, NodeKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let catalog: Catalog = match &args.input {
        Some(path) => {
            info!(path = %path, "loading catalog from input file");
            Catalog::load_from_path(path)
                .with_context(|| format!("failed to load catalog from {path}"))?
        }
        None => Catalog::bundled().context("failed to load bundled catalog")?,
    };
    debug!(command = ?args.command, json = args.json, "dispatching command");

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Catalog statistics:");
                println!("  Categories: {}", stats.categories);
                println!("  Destinations: {}", stats.destinations);
                println!("  Max depth: {}", stats.max_depth);
            }
        }

        Commands::Tree => {
            if args.json {
                let tree = TreeView::from(catalog.root());
                println!("{}", serde_json::to_string_pretty(&tree)?);
            } else {
                print_tree(catalog.root(), 0);
            }
        }

        Commands::Node { id } => match catalog.find_node(&id) {
            Some(node) if args.json => {
                println!("{}", serde_json::to_string_pretty(&NodeView::from(node))?);
            }
            Some(node) => print_node(node),
            None => eprintln!("No node found for: {id}"),
        },

        Commands::Path { id } => match catalog.find_path(&id) {
            Some(path) if args.json => {
                let views: Vec<NodeView> = path.nodes().iter().map(|n| NodeView::from(*n)).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            }
            Some(path) => println!("{}", path.breadcrumbs(" >> ")),
            None => eprintln!("Node {id} not found"),
        },

        Commands::Search { prefix } => {
            let index = catalog.search_index();
            let matches = index.search(&prefix);
            if args.json {
                let views: Vec<NodeView> = matches.iter().map(|n| NodeView::from(*n)).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if matches.is_empty() {
                println!("No destinations found matching: {prefix}");
            } else {
                for node in matches {
                    print_summary(node);
                }
            }
        }

        Commands::Recommend { id, count } => {
            if !catalog.find_node(&id).is_some_and(|n| n.is_destination()) {
                eprintln!("No destination found for: {id}");
                return Ok(());
            }
            let next = catalog.recommend(&id, count);
            if args.json {
                let views: Vec<NodeView> = next.iter().map(|n| NodeView::from(*n)).collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                for node in next {
                    print_summary(node);
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(node: &Node) {
    match node.as_destination() {
        Some(dest) => println!("{} ({}) [{}]", dest.city(), dest.state(), node.id()),
        None => println!("{} [{}]", node.display_name(), node.id()),
    }
}

fn print_tree(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.kind() {
        NodeKind::Category { .. } => println!("{indent}{} [{}]", node.display_name(), node.id()),
        NodeKind::Destination(dest) => {
            println!("{indent}- {}, {} [{}]", dest.city(), dest.state(), node.id())
        }
    }
    for child in node.children() {
        print_tree(child, depth + 1);
    }
}

fn print_node(node: &Node) {
    println!("Id: {}", node.id());
    println!("Name: {}", node.display_name());
    if !node.description().is_empty() {
        println!("Description: {}", node.description());
    }

    let Some(dest) = node.as_destination() else {
        println!("Kind: category");
        println!("Children: {}", node.children().len());
        return;
    };

    println!("Kind: destination");
    println!("State: {}", dest.state());
    let tags: Vec<&str> = dest.tags().collect();
    if !tags.is_empty() {
        println!("Tags: {}", tags.join(", "));
    }

    let Some(details) = dest.details() else {
        return;
    };
    let fields = [
        ("Best season", &details.best_season),
        ("Must try", &details.must_try),
        ("Activities", &details.activities),
        ("Local food", &details.local_food),
        ("Hidden gem", &details.hidden_gem),
        ("Climate", &details.climate),
        ("Coordinates", &details.coords),
        ("Rating", &details.rating),
        ("Complexity", &details.complexity_idx),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{label}: {value}");
        }
    }
    if let Some(guide) = details.guide() {
        println!("Guide: {} ({}, {})", guide.name, guide.phone, guide.email);
    }
    for option in details.booking_options() {
        println!("Booking: {} - {} ({})", option.activity, option.price, option.kind);
    }
}
