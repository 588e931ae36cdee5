//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::build::Catalog;
use crate::types::{Category, Document};

/// Create a simple test document with a url derived from its id.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, title: &str, category: Category) -> Document {
    Document::new(id, title, format!("/{}/{}", category.as_str(), id), category)
}

/// The two-document catalog used by the acceptance scenarios.
pub fn scenario_catalog() -> Catalog {
    Catalog::from_documents(vec![
        make_doc("web-development", "Web Development", Category::Service),
        make_doc("3d-printing", "3D Printing", Category::Project),
    ])
    .expect("scenario catalog is valid")
}

/// A small but realistic site catalog touching every category.
pub fn sample_catalog() -> Catalog {
    Catalog::from_documents(sample_documents()).expect("sample catalog is valid")
}

pub fn sample_documents() -> Vec<Document> {
    vec![
        make_doc("home", "Home", Category::Page)
            .with_description("Web development, 3D printing, and AI tools from a small studio")
            .with_keywords(["studio", "portfolio"]),
        make_doc("about", "About", Category::Page)
            .with_description("Who we are and how we work")
            .with_keywords(["team", "history"]),
        make_doc("contact", "Contact", Category::Page)
            .with_description("Book a consultation or send us a message")
            .with_keywords(["booking", "email", "consultation"]),
        make_doc("web-development", "Web Development", Category::Service)
            .with_description("Fast static sites and web apps built with Astro and React")
            .with_keywords(["astro", "react", "websites", "seo"]),
        make_doc("ai-integration", "AI Integration", Category::Service)
            .with_description("Bring language models and automation into your workflow")
            .with_keywords(["ai", "automation", "llm"]),
        make_doc("3d-printing", "3D Printing", Category::Project)
            .with_description("Resin and FDM prints, from prototypes to miniatures")
            .with_keywords(["resin", "fdm", "prototyping"]),
        make_doc("content-tools", "Content Creator Tools", Category::Project)
            .with_description("Small web utilities for streamers and video editors")
            .with_keywords(["streaming", "video"]),
        make_doc("astro-islands", "Shipping Less JavaScript with Astro Islands", Category::Blog)
            .with_description("How partial hydration keeps a marketing site fast")
            .with_keywords(["astro", "performance", "javascript"]),
        make_doc("resin-vs-fdm", "Resin vs FDM: Choosing a Printer", Category::Blog)
            .with_description("Tradeoffs between the two 3D printing technologies")
            .with_keywords(["resin", "fdm", "3d printing"]),
    ]
}
