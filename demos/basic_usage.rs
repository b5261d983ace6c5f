//! Basic usage example for dekho-rs
//!
//! This example demonstrates how to:
//! - Load the bundled travel catalog
//! - Search destinations by name prefix
//! - Find the discovery path to a destination
//! - Get recommendations for what to visit next

use dekho_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Dekho-RS Basic Usage Example ===\n");

    println!("Loading travel catalog...");
    let catalog: Catalog = Catalog::bundled()?;
    let stats = catalog.stats();
    println!(
        "✓ Catalog loaded: {} categories, {} destinations\n",
        stats.categories, stats.destinations
    );

    // Example 1: Prefix search
    println!("--- Example 1: Search destinations starting with \"go\" ---");
    let index = catalog.search_index();
    for node in index.search("go") {
        println!("  Found: {} ({})", node.display_name(), node.id());
    }
    println!();

    // Example 2: Discovery path
    println!("--- Example 2: Path to Varkala ---");
    if let Some(path) = catalog.find_path("varkala") {
        println!("  {}", path.breadcrumbs(" >> "));
        println!("  Depth: {}", path.depth());
    }
    println!();

    // Example 3: Recommendations
    println!("--- Example 3: After Leh, visit ---");
    for (i, node) in catalog.recommend("leh", 2).iter().enumerate() {
        println!("  {}. {}", i + 1, node.display_name());
    }
    println!();

    // Example 4: Destination details
    println!("--- Example 4: Details for Goa ---");
    if let Some(dest) = catalog.find_node("goa").and_then(Node::as_destination) {
        println!("  {} ({})", dest.city(), dest.state());
        if let Some(details) = dest.details() {
            println!("  Rating: {:?}", details.rating_value());
            for option in details.booking_options() {
                println!("  - {} for {}", option.activity, option.price);
            }
        }
    }

    Ok(())
}
