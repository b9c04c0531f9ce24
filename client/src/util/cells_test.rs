use super::*;

fn document(body: &str) -> Document {
    Document::parse(body).unwrap()
}

#[test]
fn heading_then_executable_code_block_in_order() {
    let doc = document(
        r##"{"cells":[{"cell_type":"markdown","source":"# Hi"},{"cell_type":"code","source":"print(1)"}]}"##,
    );
    let cells = render_cells(&doc);
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].block, CellBlock::Narrative { html: "<h1>Hi</h1>\n".to_owned() });
    assert_eq!(cells[1].block, CellBlock::Code { source: "print(1)".to_owned(), execution_count: None });
    assert_eq!(cells[1].kind_class(), "cell--code");
}

#[test]
fn rendered_count_matches_document_for_every_kind() {
    let doc = document(
        r#"{"cells":[
            {"cell_type":"code","source":"a"},
            {"cell_type":"raw","source":"b"},
            {"cell_type":"mystery","source":"c"},
            {"cell_type":"markdown","source":"d"}
        ]}"#,
    );
    let cells = render_cells(&doc);
    assert_eq!(cells.len(), doc.cells.len());
    assert_eq!(cells[1].block, CellBlock::Plain { text: "b".to_owned() });
    assert_eq!(cells[2].kind_class(), "cell--raw");
}

#[test]
fn ids_fall_back_to_position() {
    let doc = document(
        r#"{"cells":[{"cell_type":"code","source":"a","id":"c8a63d33"},{"cell_type":"code","source":"b"}]}"#,
    );
    let ids: Vec<_> = render_cells(&doc).into_iter().map(|c| c.id).collect();
    assert_eq!(ids, ["c8a63d33", "cell-1"]);
}

#[test]
fn code_keeps_execution_count_and_joined_source() {
    let doc = document(r#"{"cells":[{"cell_type":"code","source":["x = 1\n","x"],"execution_count":7}]}"#);
    assert_eq!(
        render_cells(&doc)[0].block,
        CellBlock::Code { source: "x = 1\nx".to_owned(), execution_count: Some(7) }
    );
}

#[test]
fn empty_document_renders_nothing() {
    assert!(render_cells(&document(r#"{"cells":[]}"#)).is_empty());
}

#[test]
fn execution_label_formats_prompt() {
    assert_eq!(execution_label(Some(12)), "In [12]");
    assert_eq!(execution_label(None), "In [ ]");
}

#[test]
fn cell_selector_quotes_identifier() {
    assert_eq!(cell_selector("cell-3"), r#"[data-cell-id="cell-3"]"#);
    assert_eq!(cell_selector(r#"a"b\c"#), r#"[data-cell-id="a\"b\\c"]"#);
}
