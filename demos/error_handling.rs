//! Error handling example for dekho-rs
//!
//! This example demonstrates construction errors and how queries report
//! missing data without failing.

use dekho_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Dekho-RS Error Handling Example ===\n");

    // Example 1: Loading a catalog file that does not exist
    println!("--- Example 1: Loading a missing file ---");
    match Catalog::<DefaultBackend>::load_from_path("does-not-exist.json") {
        Ok(_) => println!("  Unexpectedly loaded"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Duplicate ids are rejected at build time
    println!("--- Example 2: Duplicate ids ---");
    let result: Result<Catalog> = CatalogBuilder::new(Node::category("root", "Root", ""))
        .with_child(Node::destination("goa", "", Destination::new("Goa", "Goa")))
        .with_child(Node::destination("goa", "", Destination::new("Goa", "Goa")))
        .build();
    match result {
        Ok(_) => println!("  Unexpectedly built"),
        Err(CatalogError::DuplicateId(id)) => println!("  ✗ duplicate id: {id}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 3: Malformed JSON
    println!("--- Example 3: Malformed JSON ---");
    if let Err(e) = Catalog::<DefaultBackend>::from_json_str(r#"{ "id": "root" "#) {
        println!("  ✗ {e}");
    }
    println!();

    let catalog: Catalog = Catalog::bundled()?;

    // Example 4: Queries never fail
    println!("--- Example 4: Unknown ids and prefixes ---");
    for id in ["atlantis", "", "beaches"] {
        match catalog.find_path(id) {
            Some(path) => println!("  path({id:?}) = {}", path.breadcrumbs(" >> ")),
            None => println!("  path({id:?}) not found"),
        }
        println!("  recommend({id:?}) = {} entries", catalog.recommend(id, 2).len());
    }
    println!("  search(\"xyz\") = {} entries", catalog.search_index().search("xyz").len());

    Ok(())
}
