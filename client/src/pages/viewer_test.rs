use notebook::Outline;

use super::*;

fn entry(slug: &str, notebook_url: &str) -> CatalogEntry {
    CatalogEntry {
        slug: slug.to_owned(),
        id: format!("{slug}-id"),
        title: format!("{slug} title"),
        description: String::new(),
        week: 1,
        notebook_url: notebook_url.to_owned(),
        kernel_url: None,
        outline: Outline { title: "Outline".to_owned(), sections: Vec::new() },
    }
}

#[test]
fn known_slug_resolves_to_its_entry() {
    let catalog = Catalog::new(vec![entry("demo", "/docs/demo.html")]);
    match viewer_route(&catalog, Some("demo")) {
        ViewerRoute::Found(found) => assert_eq!(found.notebook_url, "/docs/demo.html"),
        ViewerRoute::NotFound => panic!("demo should resolve"),
    }
}

#[test]
fn unknown_slug_is_not_found() {
    let catalog = Catalog::new(vec![entry("demo", "/docs/demo.html")]);
    assert_eq!(viewer_route(&catalog, Some("missing")), ViewerRoute::NotFound);
}

#[test]
fn missing_slug_is_not_found() {
    let catalog = Catalog::new(vec![entry("demo", "/docs/demo.html")]);
    assert_eq!(viewer_route(&catalog, None), ViewerRoute::NotFound);
}

#[test]
fn empty_catalog_never_resolves() {
    let catalog = Catalog::new(Vec::new());
    assert_eq!(viewer_route(&catalog, Some("demo")), ViewerRoute::NotFound);
}

#[test]
fn builtin_assignments_resolve() {
    let catalog = Catalog::builtin();
    assert!(matches!(viewer_route(catalog, Some("bayes-sentimentanalysis")), ViewerRoute::Found(_)));
    assert!(matches!(viewer_route(catalog, Some("ngram-language-models")), ViewerRoute::Found(_)));
}

#[test]
fn toggle_title_describes_next_action() {
    assert_eq!(panel_toggle_title(true), "Hide outline");
    assert_eq!(panel_toggle_title(false), "Show outline");
}
