//! Tests for loading catalogs from disk.

use sitefind::{Catalog, CatalogError, Category, Document};
use std::fs;
use tempfile::TempDir;

use super::common::{load_fixture_catalog, make_doc, write_catalog};

#[test]
fn test_fixture_catalog_loads_in_manifest_order() {
    let catalog = load_fixture_catalog();
    let ids: Vec<&str> = catalog.documents().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "home",
            "about",
            "contact",
            "web-development",
            "ai-integration",
            "3d-printing",
            "content-tools",
            "astro-islands",
            "resin-vs-fdm",
        ]
    );
    assert_eq!(catalog.popular_searches().len(), 4);
}

#[test]
fn test_fixture_catalog_counts() {
    let counts = load_fixture_catalog().counts();
    assert_eq!(counts[&Category::Page], 3);
    assert_eq!(counts[&Category::Service], 2);
    assert_eq!(counts[&Category::Project], 2);
    assert_eq!(counts[&Category::Blog], 2);
}

#[test]
fn test_load_written_catalog() {
    let dir = TempDir::new().unwrap();
    let docs = vec![
        make_doc("b", "Second", Category::Blog),
        make_doc("a", "First", Category::Page),
    ];
    let manifest = write_catalog(dir.path(), &docs);

    let catalog = Catalog::load(&manifest).unwrap();
    // Manifest order, not id order
    assert_eq!(catalog.documents(), &docs[..]);
}

#[test]
fn test_missing_document_file() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("manifest.json");
    fs::write(&manifest, r#"{"version": 1, "documents": ["gone.json"]}"#).unwrap();

    let err = Catalog::load(&manifest).unwrap_err();
    assert!(matches!(err, CatalogError::Io { ref path, .. } if path.ends_with("gone.json")));
}

#[test]
fn test_invalid_document_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
    let manifest = dir.path().join("manifest.json");
    fs::write(&manifest, r#"{"version": 1, "documents": ["bad.json"]}"#).unwrap();

    let err = Catalog::load(&manifest).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn test_unsupported_version() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("manifest.json");
    fs::write(&manifest, r#"{"version": 2, "documents": []}"#).unwrap();

    let err = Catalog::load(&manifest).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnsupportedVersion {
            found: 2,
            expected: 1
        }
    ));
}

#[test]
fn test_duplicate_ids_across_files() {
    let dir = TempDir::new().unwrap();
    let doc = make_doc("same", "Same", Category::Page);
    fs::write(dir.path().join("one.json"), serde_json::to_string(&doc).unwrap()).unwrap();
    fs::write(dir.path().join("two.json"), serde_json::to_string(&doc).unwrap()).unwrap();
    let manifest = dir.path().join("manifest.json");
    fs::write(
        &manifest,
        r#"{"version": 1, "documents": ["one.json", "two.json"]}"#,
    )
    .unwrap();

    let err = Catalog::load(&manifest).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "same"));
}

#[test]
fn test_inline_document_validated() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("manifest.json");
    fs::write(
        &manifest,
        r#"{"version": 1, "documents": [{"id": "x", "title": "", "url": "/x", "category": "page"}]}"#,
    )
    .unwrap();

    let err = Catalog::load(&manifest).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidDocument { .. }));
}

#[test]
fn test_load_or_empty_degrades() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("manifest.json");
    fs::write(&manifest, "garbage").unwrap();

    let catalog = Catalog::load_or_empty(&manifest);
    assert!(catalog.is_empty());
    assert!(catalog.popular_searches().is_empty());
}

#[test]
fn test_keywords_deduplicated_on_load() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("web.json"),
        r#"{"id": "web", "title": "Web", "url": "/web", "category": "service",
            "keywords": ["seo", "astro", "seo"]}"#,
    )
    .unwrap();
    let manifest = dir.path().join("manifest.json");
    fs::write(&manifest, r#"{"version": 1, "documents": ["web.json"]}"#).unwrap();

    let catalog = Catalog::load(&manifest).unwrap();
    let doc: &Document = &catalog.documents()[0];
    assert_eq!(doc.keywords, vec!["seo", "astro"]);
}
