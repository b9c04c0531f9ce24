use super::*;

#[test]
fn parse_reads_code_and_markdown_cells_in_order() {
    let body = r##"{"cells":[
        {"cell_type":"markdown","source":"# Hi"},
        {"cell_type":"code","source":"print(1)","execution_count":3,"id":"abc"}
    ],"metadata":{},"nbformat":4}"##;
    let doc = Document::parse(body).unwrap();
    assert_eq!(doc.cells.len(), 2);
    assert_eq!(doc.cells[0].kind, CellKind::Markdown);
    assert_eq!(doc.cells[0].source.text(), "# Hi");
    assert_eq!(doc.cells[1].kind, CellKind::Code);
    assert_eq!(doc.cells[1].execution_count, Some(3));
    assert_eq!(doc.cells[1].id.as_deref(), Some("abc"));
}

#[test]
fn parse_joins_source_fragments() {
    let body = r#"{"cells":[{"cell_type":"code","source":["import os\n","print(os.sep)"]}]}"#;
    let doc = Document::parse(body).unwrap();
    assert_eq!(doc.cells[0].source.text(), "import os\nprint(os.sep)");
}

#[test]
fn parse_accepts_null_execution_count_and_missing_source() {
    let body = r#"{"cells":[{"cell_type":"code","execution_count":null}]}"#;
    let doc = Document::parse(body).unwrap();
    assert_eq!(doc.cells[0].execution_count, None);
    assert_eq!(doc.cells[0].source.text(), "");
}

#[test]
fn parse_maps_unknown_cell_type_to_other() {
    let body = r#"{"cells":[{"cell_type":"raw","source":"x"},{"cell_type":"heading","source":"y"}]}"#;
    let doc = Document::parse(body).unwrap();
    assert_eq!(doc.cells[0].kind, CellKind::Raw);
    assert_eq!(doc.cells[1].kind, CellKind::Other);
}

#[test]
fn parse_rejects_malformed_json() {
    let err = Document::parse("<html>oops</html>").unwrap_err();
    assert!(matches!(err, DocumentError::Parse(_)));
    assert!(err.to_string().starts_with("Failed to parse notebook"));
}

#[test]
fn parse_rejects_document_without_cells() {
    assert!(matches!(Document::parse(r#"{"metadata":{}}"#), Err(DocumentError::Parse(_))));
}

#[test]
fn status_error_message_names_status() {
    let err = DocumentError::Status { status: 404, status_text: "Not Found".to_owned() };
    assert_eq!(err.to_string(), "Failed to load notebook: 404 Not Found");
}

#[test]
fn resolved_id_prefers_cell_id() {
    let cell = Cell {
        kind: CellKind::Code,
        id: Some("c8a63d33".to_owned()),
        source: Source::default(),
        execution_count: None,
    };
    assert_eq!(cell.resolved_id(7), "c8a63d33");
}

#[test]
fn resolved_id_falls_back_to_position() {
    let cell = Cell { kind: CellKind::Markdown, id: None, source: Source::default(), execution_count: None };
    assert_eq!(cell.resolved_id(4), "cell-4");
    let blank = Cell { id: Some(String::new()), ..cell };
    assert_eq!(blank.resolved_id(5), "cell-5");
}

#[test]
fn ipynb_location_swaps_html_suffix() {
    assert_eq!(ipynb_location("/docs/demo.html"), "/docs/demo.ipynb");
}

#[test]
fn ipynb_location_keeps_other_locations() {
    assert_eq!(ipynb_location("/docs/demo.ipynb"), "/docs/demo.ipynb");
    assert_eq!(ipynb_location("/docs/page.html.bak"), "/docs/page.html.bak");
}

#[test]
fn hosted_notebook_url_substitutes_path() {
    let url = hosted_notebook_url("https://colab.example/github/o/r/blob/main{path}", "/docs/demo.html");
    assert_eq!(url, "https://colab.example/github/o/r/blob/main/docs/demo.ipynb");
}
