// Structural properties of search, discovery and recommendation over
// generated catalogs.
use dekho_core::prelude::*;
use proptest::prelude::*;

fn build(categories: Vec<Vec<String>>) -> Catalog {
    let mut builder = CatalogBuilder::new(Node::category("root", "Root", ""));
    for (ci, names) in categories.into_iter().enumerate() {
        let mut category = Node::category(&format!("cat-{ci}"), &format!("Category {ci}"), "");
        for (di, name) in names.iter().enumerate() {
            category.add_child(Node::destination(
                &format!("dest-{ci}-{di}"),
                "",
                Destination::new(name, "State"),
            ));
        }
        builder.add_child(category);
    }
    builder.build().expect("generated ids are unique")
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        prop::collection::vec("[a-zA-Z]{1,8}( [a-z]{1,5})?", 0..6),
        1..5,
    )
    .prop_map(build)
}

fn contains(nodes: &[&Node], target: &Node) -> bool {
    nodes.iter().any(|n| std::ptr::eq(*n, target))
}

proptest! {
    #[test]
    fn every_destination_is_found_once_by_name_and_by_prefix(catalog in catalog_strategy()) {
        let index = catalog.search_index();
        for node in catalog.destinations() {
            let name = node.display_name().to_lowercase();
            let full = index.search(&name);
            let occurrences = full.iter().filter(|n| std::ptr::eq(**n, node)).count();
            prop_assert_eq!(occurrences, 1, "{} returned {} times", node.id(), occurrences);
            for end in 1..=name.len() {
                let hits = index.search(&name[..end]);
                prop_assert!(contains(&hits, node), "{} not found by {:?}", node.id(), &name[..end]);
            }
        }
    }

    #[test]
    fn longer_prefix_narrows_results(catalog in catalog_strategy(), prefix in "[a-z]{0,3}", extra in "[a-z]") {
        let index = catalog.search_index();
        let wide = index.search(&prefix);
        let narrow = index.search(&format!("{prefix}{extra}"));
        for node in &narrow {
            prop_assert!(contains(&wide, node));
        }
    }

    #[test]
    fn search_ignores_case(catalog in catalog_strategy(), prefix in "[a-zA-Z]{1,3}") {
        let index = catalog.search_index();
        let upper: Vec<&str> = index.search(&prefix.to_uppercase()).iter().map(|n| n.id()).collect();
        let lower: Vec<&str> = index.search(&prefix.to_lowercase()).iter().map(|n| n.id()).collect();
        prop_assert_eq!(upper, lower);
    }

    #[test]
    fn search_returns_only_destinations_with_matching_names(catalog in catalog_strategy(), prefix in "[a-z]{1,2}") {
        let index = catalog.search_index();
        for node in index.search(&prefix) {
            prop_assert!(node.is_destination());
            prop_assert!(node.name_starts_with(&prefix));
        }
    }

    #[test]
    fn every_node_has_a_valid_path(catalog in catalog_strategy()) {
        for node in catalog.iter() {
            let path = catalog.find_path(node.id()).expect("node is reachable");
            prop_assert!(std::ptr::eq(path.nodes()[0], catalog.root()));
            prop_assert!(std::ptr::eq(path.target(), node));
            for pair in path.nodes().windows(2) {
                prop_assert!(pair[0].children().iter().any(|c| std::ptr::eq(c, pair[1])));
            }
        }
    }

    #[test]
    fn recommendations_follow_the_ring(catalog in catalog_strategy(), count in 0usize..12) {
        let ring = catalog.destinations();
        for (i, node) in ring.iter().enumerate() {
            let recs = catalog.recommend(node.id(), count);
            prop_assert_eq!(recs.len(), count);
            for (k, rec) in recs.iter().enumerate() {
                prop_assert!(std::ptr::eq(*rec, ring[(i + k + 1) % ring.len()]));
            }
        }
    }
}
