//! Highlight markers on search hits.

use sitefind::{
    strip_highlight, Catalog, Category, HighlightConfig, Highlighter, SearchConfig, Searcher,
};

use super::common::{all, load_fixture_catalog, make_doc, searcher};

const OPEN: &str = r#"<mark class="search-highlight">"#;
const CLOSE: &str = "</mark>";

#[test]
fn test_title_and_description_highlighted() {
    let results = searcher(load_fixture_catalog()).search("web", &all());
    let home = &results.categories[&Category::Page][0];

    assert_eq!(home.title_html, "Home");
    assert_eq!(
        home.description_html,
        format!(
            "{}Web{} development, 3D printing, and AI tools from a small studio",
            OPEN, CLOSE
        )
    );
}

#[test]
fn test_every_occurrence_wrapped() {
    let results = searcher(load_fixture_catalog()).search("in", &all());
    let printing = results
        .hits()
        .find(|h| h.document.id == "3d-printing")
        .unwrap();
    assert_eq!(
        printing.title_html,
        format!("3D Pr{o}in{c}t{o}in{c}g", o = OPEN, c = CLOSE)
    );
}

#[test]
fn test_keyword_only_hit_has_plain_text() {
    let results = searcher(load_fixture_catalog()).search("llm", &all());
    let hit = results.hits().next().unwrap();
    assert_eq!(hit.title_html, hit.document.title);
    assert_eq!(hit.description_html, hit.document.description);
}

#[test]
fn test_highlight_keeps_original_case() {
    let results = searcher(load_fixture_catalog()).search("ASTRO", &all());
    for hit in results.hits() {
        assert!(!hit.title_html.contains("ASTRO"));
    }
    let blog = &results.categories[&Category::Blog][0];
    assert!(blog.title_html.contains(&format!("{}Astro{}", OPEN, CLOSE)));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_highlight_folded_accents() {
    let catalog =
        Catalog::from_documents(vec![make_doc("cafe", "Café Menu", Category::Page)]).unwrap();
    let config = SearchConfig {
        fold_diacritics: true,
        ..SearchConfig::default()
    };
    let results = Searcher::new(catalog, config).search("cafe", &all());
    assert_eq!(
        results.hits().next().unwrap().title_html,
        format!("{}Café{} Menu", OPEN, CLOSE)
    );
}

#[test]
fn test_strip_restores_text() {
    let s = searcher(load_fixture_catalog());
    for query in ["web", "in", "printing", "fdm"] {
        for hit in s.search(query, &all()).hits() {
            assert_eq!(strip_highlight(&hit.title_html, OPEN, CLOSE), hit.document.title);
            assert_eq!(
                s.highlighter().strip(&hit.description_html),
                hit.document.description
            );
        }
    }
}

#[test]
fn test_strip_restores_title_with_literal_close_marker() {
    let title = "When to use </mark> in web pages";
    let catalog = Catalog::from_documents(vec![make_doc("mark", title, Category::Blog)]).unwrap();
    let s = searcher(catalog);
    let results = s.search("web", &all());
    let hit = results.hits().next().unwrap();

    assert_eq!(
        hit.title_html,
        format!("When to use </mark> in {}web{} pages", OPEN, CLOSE)
    );
    assert_eq!(strip_highlight(&hit.title_html, OPEN, CLOSE), title);
    assert_eq!(s.highlighter().strip(&hit.title_html), title);
}

#[test]
fn test_custom_markers() {
    let config = SearchConfig {
        highlight: HighlightConfig {
            open_tag: "<em>".to_string(),
            close_tag: "</em>".to_string(),
        },
        ..SearchConfig::default()
    };
    let s = Searcher::new(load_fixture_catalog(), config);
    let results = s.search("fdm", &all());
    let blog = &results.categories[&Category::Blog][0];
    assert_eq!(blog.title_html, "Resin vs <em>FDM</em>: Choosing a Printer");
}

#[test]
fn test_highlighter_without_match_is_identity() {
    let h = Highlighter::default();
    assert_eq!(h.highlight("Contact", "xyz"), "Contact");
    assert_eq!(h.highlight("", "xyz"), "");
}
