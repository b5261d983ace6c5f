// Loading catalogs from strings, readers and files.
use dekho_core::{Catalog, CatalogError, DefaultBackend, SharedBackend};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

const SMALL: &str = r#"{
  "id": "root",
  "label": "Root",
  "children": [
    {
      "id": "hills",
      "label": "Hills",
      "children": [
        { "id": "munnar", "city": "Munnar", "state": "Kerala", "tags": ["Tea"] },
        { "id": "ooty", "city": "Ooty", "state": "Tamil Nadu" }
      ]
    }
  ]
}"#;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dekho-{}-{name}", std::process::id()))
}

#[test]
fn from_json_str_builds_a_catalog() {
    let catalog = Catalog::<DefaultBackend>::from_json_str(SMALL).unwrap();
    assert_eq!(catalog.stats().destinations, 2);
    assert_eq!(
        catalog.find_path("ooty").unwrap().ids(),
        vec!["root", "hills", "ooty"]
    );
}

#[test]
fn from_reader_matches_from_str() {
    let a = Catalog::<DefaultBackend>::from_reader(SMALL.as_bytes()).unwrap();
    let b = Catalog::<DefaultBackend>::from_json_str(SMALL).unwrap();
    assert_eq!(a.stats(), b.stats());
}

#[test]
fn duplicate_ids_are_rejected_on_load() {
    let json = r#"{
      "id": "root", "label": "Root",
      "children": [
        { "id": "goa", "city": "Goa", "state": "Goa" },
        { "id": "goa", "city": "Goa Velha", "state": "Goa" }
      ]
    }"#;
    let err = Catalog::<DefaultBackend>::from_json_str(json).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "goa"));
}

#[test]
fn node_without_label_or_city_is_invalid() {
    let err = Catalog::<DefaultBackend>::from_json_str(r#"{ "id": "root" }"#).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidData(_)));
}

#[test]
fn missing_file_is_not_found() {
    let err = Catalog::<DefaultBackend>::load_from_path(temp_path("missing.json")).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn plain_json_file_round_trip() {
    let path = temp_path("small.json");
    std::fs::write(&path, SMALL).unwrap();
    let catalog = Catalog::<DefaultBackend>::load_from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(catalog.stats().destinations, 2);
}

#[cfg(feature = "compact")]
#[test]
fn gzip_file_is_decompressed() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let path = temp_path("small.json.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SMALL.as_bytes()).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let catalog = Catalog::<DefaultBackend>::load_from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(catalog.search_index().search("mun").len(), 1);
}

#[test]
fn shared_backend_answers_the_same_queries() {
    let shared = Catalog::<SharedBackend>::bundled().unwrap();
    let plain = Catalog::<DefaultBackend>::bundled().unwrap();

    assert_eq!(shared.stats(), plain.stats());
    let ids = |nodes: Vec<&dekho_core::Node<SharedBackend>>| {
        nodes.iter().map(|n| n.id().to_string()).collect::<Vec<_>>()
    };
    assert_eq!(ids(shared.recommend("leh", 2)), vec!["gulmarg", "goa"]);
    assert_eq!(ids(shared.search_index().search("go")), vec!["goa"]);
    assert_eq!(
        shared.find_path("varkala").unwrap().ids(),
        plain.find_path("varkala").unwrap().ids()
    );
}
