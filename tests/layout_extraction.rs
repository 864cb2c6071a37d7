// tests/layout_extraction.rs
use prod_report::core::grid::parse_int_prefix;
use prod_report::core::html::style_value;
use prod_report::core::{
    ColumnSpec, HtmlCellSource, PositionedCell, build_rows, locate_header, nearest_column,
};
use prod_report::error::ReportError;

fn cell(left: i64, top: &str, text: &str) -> PositionedCell {
    PositionedCell::new(left, top, text)
}

#[test]
fn rows_follow_vertical_order_and_cells_follow_left() {
    let cells = vec![
        cell(200, "120px", "b"),
        cell(10, "100px", "header"),
        cell(50, "120px", "a"),
        cell(10, "20px", "title"),
    ];
    let rows = build_rows(&cells);
    let tops: Vec<&str> = rows.iter().map(|r| r.top.as_str()).collect();
    assert_eq!(tops, ["20px", "100px", "120px"]);
    assert_eq!(rows[2].text_at(0), "a");
    assert_eq!(rows[2].text_at(1), "b");
    assert_eq!(rows[2].text_at(5), "");
}

#[test]
fn keys_are_compared_as_numbers_not_text() {
    let cells = vec![cell(0, "100px", "late"), cell(0, "90px", "early"), cell(0, "abc", "odd")];
    let rows = build_rows(&cells);
    let order: Vec<&str> = rows.iter().map(|r| r.text_at(0)).collect();
    assert_eq!(order, ["early", "late", "odd"]);
}

#[test]
fn distinct_keys_with_equal_values_keep_first_seen_order() {
    let cells = vec![cell(0, "100.4px", "first"), cell(0, "100px", "second")];
    let rows = build_rows(&cells);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text_at(0), "first");
    assert_eq!(rows[1].text_at(0), "second");
}

#[test]
fn header_row_starts_the_table() {
    let cells = vec![
        cell(10, "10px", "Empresa S.A."),
        cell(10, "30px", "Reporte de componentes"),
        cell(10, "100px", "Componentes"),
        cell(120, "100px", "Descripción"),
        cell(10, "120px", "P-1"),
    ];
    let table = locate_header(build_rows(&cells), "Componen").unwrap();
    assert_eq!(table.start, 2);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.column_names(), ["Componentes", "Descripción"]);
    assert_eq!(table.columns[1].anchor, Some(120));
    assert_eq!(table.data_rows().len(), 1);
}

#[test]
fn missing_anchor_is_a_structural_error() {
    let cells = vec![cell(10, "10px", "nada")];
    let err = locate_header(build_rows(&cells), "Componen").unwrap_err();
    assert!(matches!(err, ReportError::HeaderNotFound { .. }));
    assert!(err.is_structural());
}

#[test]
fn nearest_column_prefers_the_first_on_a_tie() {
    let columns = vec![
        ColumnSpec { name: "A".into(), anchor: Some(100) },
        ColumnSpec { name: "B".into(), anchor: Some(200) },
    ];
    assert_eq!(nearest_column(&columns, 150), Some(0));
    assert_eq!(nearest_column(&columns, 151), Some(1));
    assert_eq!(nearest_column(&columns, -40), Some(0));
    assert_eq!(nearest_column(&[], 10), None);
}

#[test]
fn html_source_reads_inline_offsets() {
    let html = r#"
        <html><body>
          <div style="position:absolute; TOP: 100px; left:10px">Componentes</div>
          <div style="position:absolute; top:100px; left:12.5px"> x </div>
          <div style="top:120px">no left</div>
          <div>no style</div>
        </body></html>"#;
    let source = HtmlCellSource::parse(html);
    assert_eq!(source.len(), 3);
    let rows = build_rows(&source);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].top, "100px");
    assert_eq!(rows[0].cells[1].left, Some(12));
    assert_eq!(rows[0].cells[1].text, " x ");
    assert_eq!(rows[1].cells[0].left, None);
    assert_eq!(rows[1].text_at(0), "no left");
}

#[test]
fn unplaced_cells_sort_last_and_never_bind() {
    let cells = vec![
        PositionedCell::unplaced("100px", "Notas"),
        cell(10, "100px", "Componentes"),
        cell(120, "100px", "Descripción"),
    ];
    let table = locate_header(build_rows(&cells), "Componen").unwrap();
    assert_eq!(table.column_names(), ["Componentes", "Descripción", "Notas"]);
    assert_eq!(table.columns[2].anchor, None);
    assert_eq!(nearest_column(&table.columns, 500), Some(1));
}

#[test]
fn style_lookup_takes_the_last_declaration() {
    assert_eq!(style_value("top:1px; left:2px; top: 3px", "top"), Some("3px"));
    assert_eq!(style_value("left:2px", "top"), None);
    assert_eq!(parse_int_prefix(" -4.5px"), Some(-4));
    assert_eq!(parse_int_prefix("px"), None);
}
