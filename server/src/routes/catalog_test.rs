use notebook::{Catalog, Outline, Section};

use super::*;

fn state() -> AppState {
    let entries = vec![
        CatalogEntry {
            slug: "demo".to_owned(),
            id: "assignment_demo".to_owned(),
            title: "Demo".to_owned(),
            description: "A demo notebook".to_owned(),
            week: 2,
            notebook_url: "/docs/demo.html".to_owned(),
            kernel_url: None,
            outline: Outline {
                title: "Demo outline".to_owned(),
                sections: vec![Section::leaf("Intro", "cell-0")],
            },
        },
        CatalogEntry {
            slug: "second".to_owned(),
            id: "assignment_second".to_owned(),
            title: "Second".to_owned(),
            description: String::new(),
            week: 3,
            notebook_url: "/docs/second.html".to_owned(),
            kernel_url: Some("http://localhost:8888".to_owned()),
            outline: Outline { title: "Second outline".to_owned(), sections: Vec::new() },
        },
    ];
    AppState::new(Box::leak(Box::new(Catalog::new(entries))))
}

#[tokio::test]
async fn list_returns_summaries_in_definition_order() {
    let Json(summaries) = list_catalog(State(state())).await;
    let slugs: Vec<_> = summaries.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, ["demo", "second"]);
    assert_eq!(summaries[0].week, 2);
}

#[tokio::test]
async fn list_omits_outlines() {
    let Json(summaries) = list_catalog(State(state())).await;
    let json = serde_json::to_value(&summaries).unwrap();
    assert!(json[0].get("outline").is_none());
    assert_eq!(json[0]["title"], "Demo");
}

#[tokio::test]
async fn get_entry_returns_full_entry() {
    let Json(entry) = get_entry(State(state()), Path("demo".to_owned())).await.unwrap();
    assert_eq!(entry.notebook_url, "/docs/demo.html");
    assert_eq!(entry.outline.sections.len(), 1);
}

#[tokio::test]
async fn get_entry_unknown_slug_is_404() {
    let err = get_entry(State(state()), Path("missing".to_owned())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let state = AppState::new(Box::leak(Box::new(Catalog::new(Vec::new()))));
    let Json(summaries) = list_catalog(State(state)).await;
    assert!(summaries.is_empty());
}
