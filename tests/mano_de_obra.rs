// tests/mano_de_obra.rs
use prod_report::core::PositionedCell;
use prod_report::sheet::Cell;
use prod_report::specs::mano_de_obra::{
    LayoutRules, extract_table, mano_de_obra_from_html, process_mano_de_obra,
};
use prod_report::specs::resumen::{count_groups, process_resumen, resumen_from_html};

fn cell(left: i64, top: &str, text: &str) -> PositionedCell {
    PositionedCell::new(left, top, text)
}

fn texts(row: &[Cell]) -> Vec<String> {
    row.iter().map(Cell::as_text).collect()
}

// Header: Componentes | Descripción | Units Req. || Operación | Tiempo
fn header() -> Vec<PositionedCell> {
    vec![
        cell(10, "100px", "Componentes"),
        cell(60, "100px", "Descripción"),
        cell(150, "100px", "Units Req."),
        cell(260, "100px", "Operación"),
        cell(330, "100px", "Tiempo"),
    ]
}

fn document() -> Vec<PositionedCell> {
    let mut cells = vec![cell(10, "20px", "Reporte de mano de obra")];
    cells.extend(header());
    cells.extend([
        // row before any marker: group column stays empty
        cell(10, "110px", "P-000"),
        cell(150, "110px", "2.5"),
        // marker row
        cell(10, "120px", "M3"),
        cell(60, "120px", "Ensamble final"),
        // plain row under M3
        cell(10, "140px", "P-100"),
        cell(60, "140px", "Tornillo"),
        cell(150, "140px", "0.33"),
        // wrapped row: second half starts past the split offset
        cell(10, "160px", "P-200"),
        cell(150, "160px", "0.4"),
        cell(262, "160px", "Corte"),
        cell(330, "160px", "12"),
        // blank visual row: zero quantity only
        cell(150, "180px", ""),
        // next marker
        cell(10, "200px", "M4"),
        cell(60, "200px", "Pintura"),
        cell(10, "220px", "P-300"),
        cell(150, "220px", "1"),
        cell(255, "220px", "Lijado"),
        cell(270, "220px", "fino"),
    ]);
    cells
}

#[test]
fn header_loses_the_description_column() {
    let rules = LayoutRules::standard().unwrap();
    let table = extract_table(&document(), &rules).unwrap();
    let sheet = process_mano_de_obra(&table, &rules);
    assert_eq!(
        sheet.headers().unwrap(),
        ["Componentes", "Units Req.", "Operación", "Tiempo"]
    );
}

#[test]
fn marker_code_is_carried_to_following_rows() {
    let rules = LayoutRules::standard().unwrap();
    let table = extract_table(&document(), &rules).unwrap();
    let sheet = process_mano_de_obra(&table, &rules);
    let rows: Vec<Vec<String>> = sheet.data().iter().map(|r| texts(r)).collect();

    assert_eq!(
        rows,
        vec![
            vec!["", "2.500", "", ""],
            vec!["M3", "0.033", "", ""],
            vec!["M3", "0.004", "", ""],
            vec!["M3", "", "Corte", "12"],
            vec!["M4", "1.000", "", ""],
            vec!["M4", "", "Lijado fino", ""],
        ]
    );
}

#[test]
fn marker_rows_do_not_produce_their_own_line() {
    let rules = LayoutRules::standard().unwrap();
    let table = extract_table(&document(), &rules).unwrap();
    let sheet = process_mano_de_obra(&table, &rules);
    let flat: Vec<String> = sheet.data().iter().flat_map(|r| texts(r)).collect();
    assert!(!flat.iter().any(|t| t.contains("Ensamble") || t.contains("Pintura")));
}

#[test]
fn marker_needs_a_description() {
    let rules = LayoutRules::standard().unwrap();
    let mut cells = header();
    cells.extend([
        cell(10, "120px", "M7"),
        cell(10, "140px", "P-1"),
        cell(150, "140px", "3"),
    ]);
    let table = extract_table(&cells, &rules).unwrap();
    let sheet = process_mano_de_obra(&table, &rules);
    // a lone "M7" is data, not a group opener
    assert_eq!(sheet.data_len(), 2);
    assert_eq!(texts(&sheet.data()[1]), ["", "3.000", "", ""]);
}

#[test]
fn positioned_html_end_to_end() {
    let html = r#"<html><body>
        <div style="position:absolute;top:40px;left:10px">ACME</div>
        <div style="position:absolute;top:100px;left:10px">Componentes</div>
        <div style="position:absolute;top:100px;left:80px">Descripción</div>
        <div style="position:absolute;top:100px;left:160px">Units Req.</div>
        <div style="position:absolute;top:120px;left:12px">C-9</div>
        <div style="position:absolute;top:120px;left:82px">Base</div>
        <div style="position:absolute;top:120px;left:158px">0.167</div>
    </body></html>"#;
    let rules = LayoutRules::standard().unwrap();
    let sheet = mano_de_obra_from_html(html, &rules).unwrap();
    assert_eq!(sheet.headers().unwrap(), ["Componentes", "Units Req."]);
    assert_eq!(sheet.data_len(), 1);
    // no marker seen yet: group column is empty
    assert_eq!(texts(&sheet.data()[0]), ["", "0.167"]);
}

#[test]
fn header_cell_without_offset_keeps_its_column() {
    let html = r#"<html><body>
        <div style="position:absolute;top:100px;left:10px">Componentes</div>
        <div style="position:absolute;top:100px;left:80px">Descripción</div>
        <div style="position:absolute;top:100px;left:160px">Units Req.</div>
        <div style="position:absolute;top:100px;left:auto">Notas</div>
        <div style="position:absolute;top:120px;left:12px">C-9</div>
        <div style="position:absolute;top:120px;left:82px">Base</div>
        <div style="position:absolute;top:120px;left:158px">0.167</div>
        <div style="position:absolute;top:120px">sin posición</div>
        <div style="position:absolute;top:120px;left:-">x</div>
    </body></html>"#;
    let rules = LayoutRules::standard().unwrap();
    let sheet = mano_de_obra_from_html(html, &rules).unwrap();
    assert_eq!(sheet.headers().unwrap(), ["Componentes", "Units Req.", "Notas"]);
    // unplaced data fragments bind nowhere
    assert_eq!(texts(&sheet.data()[0]), ["", "0.167", ""]);
}

#[test]
fn html_without_the_anchor_fails() {
    let html = r#"<div style="top:10px;left:10px">Otro reporte</div>"#;
    let rules = LayoutRules::standard().unwrap();
    assert!(mano_de_obra_from_html(html, &rules).unwrap_err().is_structural());
}

#[test]
fn summary_counts_rows_per_group() {
    let rules = LayoutRules::standard().unwrap();
    let table = extract_table(&document(), &rules).unwrap();
    assert_eq!(
        count_groups(&table, &rules),
        vec![("M3".to_string(), 3), ("M4".to_string(), 1)]
    );

    let sheet = process_resumen(&table, &rules);
    assert_eq!(sheet.headers().unwrap(), ["Grupo (M)", "Cantidad de Filas de Datos"]);
    assert_eq!(sheet.data()[0], vec![Cell::text("M3"), Cell::number(3.0)]);
}

#[test]
fn summary_from_html_merges_repeated_markers() {
    let html = r#"
        <div style="top:100px;left:10px">Componentes</div>
        <div style="top:100px;left:80px">Descripción</div>
        <div style="top:120px;left:10px">M1</div><div style="top:120px;left:80px">Corte</div>
        <div style="top:140px;left:10px">a</div>
        <div style="top:160px;left:10px">M2</div><div style="top:160px;left:80px">Doblez</div>
        <div style="top:180px;left:10px">M1</div><div style="top:180px;left:80px">Corte</div>
        <div style="top:200px;left:10px">b</div>
        <div style="top:220px;left:10px">c</div>"#;
    let rules = LayoutRules::standard().unwrap();
    let sheet = resumen_from_html(html, &rules).unwrap();
    let rows: Vec<Vec<String>> = sheet.data().iter().map(|r| texts(r)).collect();
    assert_eq!(rows, vec![vec!["M1", "3"], vec!["M2", "0"]]);
}
